//! Dashboard view: summary cards on top, charts below.

use super::Frame;
use crate::state::State;
use crate::ui::theme;
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render dashboard view according to state.
///
pub fn dashboard(frame: &mut Frame, size: Rect, state: &mut State) {
    // Full-page loading indicator until the first data arrives
    if state.is_loading() && state.get_products().is_empty() && state.get_categories().is_empty() {
        let block = Block::default()
            .title("Dashboard")
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style());
        frame.render_widget(spinner::widget(state, size.height).block(block), size);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(8),
            Constraint::Percentage(45),
        ])
        .split(size);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[0]);

    summary_card(frame, cards[0], "Total Products", state.get_products().len());
    summary_card(
        frame,
        cards[1],
        "Total Categories",
        state.get_categories().len(),
    );
    summary_card(frame, cards[2], "Total Users", state.user_count());

    super::charts::purchases(frame, rows[1], state);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);
    super::charts::bar(frame, charts[0], state);
    super::charts::share(frame, charts[1], state);
}

fn summary_card(frame: &mut Frame, size: Rect, title: &str, value: usize) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            value.to_string(),
            Style::default()
                .fg(theme::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    let card = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style()),
    );
    frame.render_widget(card, size);
}
