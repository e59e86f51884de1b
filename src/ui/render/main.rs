use super::Frame;
use crate::state::{State, View};
use ratatui::layout::Rect;

/// Render main widget according to state.
///
pub fn main(frame: &mut Frame, size: Rect, state: &mut State) {
    match state.current_view() {
        View::Dashboard => super::dashboard::dashboard(frame, size, state),
        View::Products => super::products::products(frame, size, state),
        View::CreateProduct | View::EditProduct => {
            super::product_form::product_form(frame, size, state);
        }
    }

    // Delete confirmation renders on top of everything
    if let Some(id) = state.delete_confirmation() {
        let title = state
            .get_products()
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.title.clone())
            .unwrap_or_else(|| "this product".to_string());
        render_delete_confirmation(frame, size, &title);
    }
}

fn render_delete_confirmation(frame: &mut Frame, size: Rect, product_title: &str) {
    use crate::ui::widgets::styling;
    use ratatui::{
        layout::Alignment,
        text::{Line, Span},
        widgets::{Block, Borders, Clear, Paragraph, Wrap},
    };

    let popup_area = centered_rect(60, 25, size);
    frame.render_widget(Clear, popup_area);

    let display_title = if product_title.len() > 45 {
        format!("{}...", &product_title[..45])
    } else {
        product_title.to_string()
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Delete product \"{}\"?", display_title),
            styling::normal_text_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "y: confirm    n: cancel",
            styling::active_list_item_style(),
        )),
    ];

    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("Confirm Delete")
                .borders(Borders::ALL)
                .border_style(styling::error_text_style()),
        );
    frame.render_widget(dialog, popup_area);
}

/// Return a rectangle centered in `r` taking the given percentages of its
/// width and height.
///
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    use ratatui::layout::{Constraint, Direction, Layout};

    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
