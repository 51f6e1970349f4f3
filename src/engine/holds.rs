//! Interaction holds shared by the rotating engines.

/// Interactions that keep an engine paused for as long as they are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Holds {
    /// Pointer is over the component
    pub hover: bool,
    /// Keyboard focus is inside the component
    pub focus: bool,
    /// A finger is down on the component
    pub touch: bool,
    /// User paused it on purpose
    pub explicit: bool,
}

impl Holds {
    /// True if any hold is active.
    pub const fn any(self) -> bool {
        self.hover || self.focus || self.touch || self.explicit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any() {
        assert!(!Holds::default().any());
        let holds = Holds {
            touch: true,
            ..Holds::default()
        };
        assert!(holds.any());
    }
}
