use super::Frame;
use crate::state::{State, View};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

/// Render footer widget with key hints and any fetch error.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let hints = match state.current_view() {
        View::Dashboard => "p: products · r: refresh · d: log · q: quit",
        View::Products => {
            "j/k: navigate · n: new · e: edit · x: delete · r: refresh · b: back · q: quit"
        }
        View::CreateProduct | View::EditProduct => "Tab: next field · Enter: submit · Esc: cancel",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style());
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(hints).style(styling::normal_text_style()),
        columns[0],
    );

    if let Some(error) = state.get_error() {
        frame.render_widget(
            Paragraph::new(error.to_string())
                .style(styling::error_text_style())
                .alignment(Alignment::Right),
            columns[1],
        );
    }
}
