use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

/// Render log widget according to state.
///
pub fn log(frame: &mut Frame, size: Rect, _state: &mut State) {
    let widget = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title("Log (d: hide)")
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style()),
        )
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(styling::normal_text_style());
    frame.render_widget(widget, size);
}
