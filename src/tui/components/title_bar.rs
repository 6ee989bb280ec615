//! # TitleBar Component
//!
//! Top status bar: where the cursor is, and the latest status message.
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(vec!["Main", "Settings"], "Volume set to 55%", false);
//! title_bar.render(frame, area);
//! ```
//!
//! The text changes based on state:
//!
//! 1. **Editing**: `"Main › Settings | Volume set to 55% | EDIT"`
//! 2. **Status message**: `"Main › Settings | Volume set to 55%"`
//! 3. **Default**: `"Main › Settings"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const PATH_SEPARATOR: &str = " › ";

/// Top status bar showing the open branch's path and status.
pub struct TitleBar {
    /// Branch names from the root down to the open branch
    pub path: Vec<String>,
    /// Status message (e.g. "Selected: Start")
    pub status_message: String,
    /// Whether a value is being edited
    pub editing: bool,
}

impl TitleBar {
    pub fn new<S: AsRef<str>>(path: Vec<S>, status_message: impl Into<String>, editing: bool) -> Self {
        Self {
            path: path.iter().map(|s| s.as_ref().to_string()).collect(),
            status_message: status_message.into(),
            editing,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            self.path.join(PATH_SEPARATOR),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }
        if self.editing {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("EDIT", Style::default().fg(Color::Yellow)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
