//! Pointer hover state owned by a single card

/// Two-state hover flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovered,
}

impl HoverState {
    /// Transition on pointer-enter
    pub fn enter(self) -> Self {
        HoverState::Hovered
    }

    /// Transition on pointer-leave
    pub fn leave(self) -> Self {
        HoverState::Idle
    }

    pub fn is_hovered(self) -> bool {
        self == HoverState::Hovered
    }
}
