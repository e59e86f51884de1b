use super::Frame;
use crate::state::{FormField, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

/// Render the product create/edit form according to state.
///
pub fn product_form(frame: &mut Frame, size: Rect, state: &mut State) {
    let title = match state.editing_product_id() {
        None => "New Product".to_string(),
        Some(id) => format!("Edit Product {}", id),
    };
    let outer = Block::default()
        .title(Span::styled(title, styling::active_block_title_style()))
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style());
    let inner = outer.inner(size);
    frame.render_widget(outer, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(inner);

    let form = state.form();
    field(frame, rows[0], "Title", &form.title, form.active_field == FormField::Title);
    field(frame, rows[1], "Price", &form.price, form.active_field == FormField::Price);
    field(
        frame,
        rows[2],
        "Category Id",
        &form.category_id,
        form.active_field == FormField::CategoryId,
    );
    field(
        frame,
        rows[3],
        "Image URL",
        &form.image_url,
        form.active_field == FormField::ImageUrl,
    );

    let description_block = Block::default()
        .title("Description")
        .borders(Borders::ALL)
        .border_style(if form.active_field == FormField::Description {
            styling::active_block_border_style()
        } else {
            styling::normal_block_border_style()
        });
    let description_area = description_block.inner(rows[4]);
    frame.render_widget(description_block, rows[4]);
    frame.render_widget(form.description.widget(), description_area);

    let status = match state.form_error() {
        Some(error) => Paragraph::new(error.to_string()).style(styling::error_text_style()),
        None => Paragraph::new("Tab: next field · Enter: submit · Esc: cancel")
            .style(styling::normal_text_style()),
    };
    frame.render_widget(status, rows[5]);
}

fn field(frame: &mut Frame, size: Rect, label: &str, value: &str, active: bool) {
    let border_style = if active {
        styling::active_block_border_style()
    } else {
        styling::normal_block_border_style()
    };
    // Trailing cursor marker on the active field
    let text = if active {
        format!("{}▏", value)
    } else {
        value.to_string()
    };
    let widget = Paragraph::new(text).style(styling::normal_text_style()).block(
        Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(widget, size);
}
