use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Alignment,
    text::Line,
    widgets::Paragraph,
};

/// Spinner animation frames, advanced on each terminal tick.
///
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Return a vertically centered loading indicator for a pane of the given
/// height.
///
pub fn widget<'a>(state: &State, height: u16) -> Paragraph<'a> {
    let frame = FRAMES[state.get_spinner_index() % FRAMES.len()];
    let padding = usize::from(height.saturating_sub(3) / 2);
    let mut lines = vec![Line::from(""); padding];
    lines.push(Line::from(format!("{} Loading...", frame)));
    Paragraph::new(lines)
        .style(styling::normal_text_style())
        .alignment(Alignment::Center)
}
