/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse click, targeted at the deepest clickable element under the pointer
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
}

impl Event {
    /// Target element id, if any element was hit.
    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Click { target, .. } => target.as_deref(),
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}
