use anyhow::{anyhow, Result};
use raylib::prelude::*;
use tracing::{error, info};

use crate::constants::*;
use crate::state::CopyState;

/// Anything that can receive copied text.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

impl Clipboard for RaylibHandle {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.set_clipboard_text(text)
            .map_err(|e| anyhow!("{:?}", e))
    }
}

/// Button that copies a fixed text and briefly confirms it with "Copied!".
pub struct CopyButton {
    label: String,
    text: String,
    state: CopyState,
}

impl CopyButton {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
            state: CopyState::Ready,
        }
    }

    /// Copies the text. A failed copy is logged and leaves the button as it was.
    pub fn activate(&mut self, clipboard: &mut impl Clipboard) {
        match clipboard.write_text(&self.text) {
            Ok(()) => {
                info!("Copied {} characters to the clipboard", self.text.chars().count());
                // re-activation restarts the countdown
                self.state = CopyState::Copied { remaining: COPY_FEEDBACK_DURATION };
            }
            Err(e) => error!("Failed to copy: {e}"),
        }
    }

    pub fn update(&mut self, dt: f32) {
        if let CopyState::Copied { remaining } = self.state {
            let remaining = remaining - dt;
            self.state = if remaining > 0.0 {
                CopyState::Copied { remaining }
            } else {
                CopyState::Ready
            };
        }
    }

    pub fn state(&self) -> CopyState {
        self.state
    }

    pub fn label(&self) -> &str {
        match self.state() {
            CopyState::Ready => &self.label,
            CopyState::Copied { .. } => COPIED_LABEL,
        }
    }

    /// Background and text colors for the current state.
    pub fn colors(&self) -> (Color, Color) {
        match self.state() {
            CopyState::Ready => (BUTTON_BACKGROUND, Color::WHITE),
            CopyState::Copied { .. } => (COPIED_BACKGROUND, Color::BLACK),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeClipboard {
        contents: Option<String>,
        broken: bool,
    }

    impl Clipboard for FakeClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            if self.broken {
                return Err(anyhow!("clipboard unavailable"));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    const BIBTEX: &str = "@article{doe2024, title={Quantum}}";

    #[test]
    fn copies_text_and_confirms() {
        let mut clipboard = FakeClipboard::default();
        let mut button = CopyButton::new("Copy BibTeX", BIBTEX);
        assert_eq!(button.label(), "Copy BibTeX");

        button.activate(&mut clipboard);

        assert_eq!(clipboard.contents.as_deref(), Some(BIBTEX));
        assert_eq!(button.label(), "Copied!");
        assert_eq!(button.colors(), (COPIED_BACKGROUND, Color::BLACK));
    }

    #[test]
    fn reverts_after_feedback_duration() {
        let mut clipboard = FakeClipboard::default();
        let mut button = CopyButton::new("Copy", BIBTEX);
        button.activate(&mut clipboard);

        button.update(1.5);
        assert_eq!(button.label(), "Copied!");
        button.update(0.5);
        assert_eq!(button.state(), CopyState::Ready);
        assert_eq!(button.label(), "Copy");
        assert_eq!(button.colors().1, Color::WHITE);
    }

    #[test]
    fn failed_copy_keeps_button_ready() {
        let mut clipboard = FakeClipboard { broken: true, ..Default::default() };
        let mut button = CopyButton::new("Copy", BIBTEX);
        button.activate(&mut clipboard);
        assert_eq!(button.state(), CopyState::Ready);
        assert!(clipboard.contents.is_none());
    }

    #[test]
    fn reactivation_restarts_countdown() {
        let mut clipboard = FakeClipboard::default();
        let mut button = CopyButton::new("Copy", BIBTEX);
        button.activate(&mut clipboard);
        button.update(1.5);
        button.activate(&mut clipboard);
        button.update(1.5);
        assert_eq!(button.state(), CopyState::Copied { remaining: 0.5 });
    }

    #[test]
    fn update_while_ready_is_a_no_op() {
        let mut button = CopyButton::new("Copy", BIBTEX);
        button.update(10.0);
        assert_eq!(button.state(), CopyState::Ready);
        assert_eq!(button.colors(), (BUTTON_BACKGROUND, Color::WHITE));
    }
}
