pub mod icon;
pub mod json;
pub mod terminal;
pub mod theme;

use terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new() -> Self {
        Self::from_caps(detect_capabilities())
    }

    fn from_caps(caps: TerminalCapabilities) -> Self {
        Self {
            color: caps.supports_color && !caps.is_ci,
            unicode: caps.supports_unicode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ci_defaults_to_no_color() {
        let caps = TerminalCapabilities {
            is_tty: true,
            supports_color: true,
            supports_unicode: true,
            is_ci: true,
        };
        let ui = UiContext::from_caps(caps);
        assert!(!ui.color);
        assert!(ui.unicode);
    }
}
