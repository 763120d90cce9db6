pub mod buffer;
pub mod frame;
pub mod projector;
pub mod surface;
