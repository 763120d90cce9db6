/// Discrete camera control directions the core understands.
/// Generic — no key codes, no windowing semantics. The host polls its
/// input device once per tick and reports which of these are held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Flatten the viewing angle (tilt decreases).
    TiltUp,
    /// Steepen the viewing angle (tilt increases).
    TiltDown,
    RotateLeft,
    RotateRight,
    ZoomIn,
    ZoomOut,
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    /// Restore the default camera. Wins over every other control
    /// applied in the same tick.
    Reset,
}

impl Control {
    pub const COUNT: usize = 11;

    /// All controls, in declaration order.
    pub const ALL: [Control; Self::COUNT] = [
        Control::TiltUp,
        Control::TiltDown,
        Control::RotateLeft,
        Control::RotateRight,
        Control::ZoomIn,
        Control::ZoomOut,
        Control::PanUp,
        Control::PanDown,
        Control::PanLeft,
        Control::PanRight,
        Control::Reset,
    ];

    fn index(self) -> usize {
        match self {
            Control::TiltUp => 0,
            Control::TiltDown => 1,
            Control::RotateLeft => 2,
            Control::RotateRight => 3,
            Control::ZoomIn => 4,
            Control::ZoomOut => 5,
            Control::PanUp => 6,
            Control::PanDown => 7,
            Control::PanLeft => 8,
            Control::PanRight => 9,
            Control::Reset => 10,
        }
    }
}

/// The set of controls held during one tick.
/// State-based (held-key) semantics: the host rebuilds or clears this
/// every tick from its current input state, then hands it to the scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlSet {
    held: [bool; Control::COUNT],
}

impl ControlSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for synthetic input in tests and demos.
    pub fn with(mut self, control: Control) -> Self {
        self.insert(control);
        self
    }

    /// Mark a control as held this tick.
    pub fn insert(&mut self, control: Control) {
        self.held[control.index()] = true;
    }

    /// Mark a control as released.
    pub fn remove(&mut self, control: Control) {
        self.held[control.index()] = false;
    }

    /// Whether a control is held this tick.
    pub fn is_held(&self, control: Control) -> bool {
        self.held[control.index()]
    }

    /// Number of controls currently held.
    pub fn len(&self) -> usize {
        self.held.iter().filter(|h| **h).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.held.iter().any(|h| *h)
    }

    /// Release everything.
    pub fn clear(&mut self) {
        self.held = [false; Control::COUNT];
    }

    /// Iterate over the controls held this tick, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Control> + '_ {
        Control::ALL.into_iter().filter(|c| self.is_held(*c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_query() {
        let mut set = ControlSet::new();
        assert!(set.is_empty());
        set.insert(Control::ZoomIn);
        set.insert(Control::PanLeft);
        assert!(set.is_held(Control::ZoomIn));
        assert!(set.is_held(Control::PanLeft));
        assert!(!set.is_held(Control::Reset));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn remove_releases() {
        let mut set = ControlSet::new().with(Control::TiltUp);
        set.remove(Control::TiltUp);
        assert!(set.is_empty());
    }

    #[test]
    fn iter_yields_held_controls() {
        let set = ControlSet::new()
            .with(Control::RotateRight)
            .with(Control::ZoomOut);
        let held: Vec<Control> = set.iter().collect();
        assert_eq!(held, vec![Control::RotateRight, Control::ZoomOut]);
    }

    #[test]
    fn all_covers_every_control() {
        let mut set = ControlSet::new();
        for c in Control::ALL {
            set.insert(c);
        }
        assert_eq!(set.len(), Control::COUNT);
    }
}
