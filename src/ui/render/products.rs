use super::Frame;
use crate::state::State;
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

const BLOCK_TITLE: &str = "Products";

/// Render products list widget according to state.
///
pub fn products(frame: &mut Frame, size: Rect, state: &mut State) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style())
        .title(Span::styled(BLOCK_TITLE, styling::active_block_title_style()));

    // Show spinner while the first fetch is still in flight
    if state.get_products().is_empty() && state.is_loading() {
        frame.render_widget(spinner::widget(state, size.height).block(block), size);
        return;
    }

    let header = ListItem::new(Line::from(Span::styled(
        format!(
            "{:>5}  {:<36}  {:>9}  {:<16}  {}",
            "ID", "Title", "Price", "Category", "Updated"
        ),
        styling::active_block_title_style(),
    )));

    let items: Vec<ListItem> = if state.get_products().is_empty() {
        vec![ListItem::new("No products loaded. Press r to refresh.")]
    } else {
        std::iter::once(header)
            .chain(state.get_products().iter().map(|product| {
                let updated = product
                    .updated_at
                    .map(|at| at.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".to_string());
                ListItem::new(format!(
                    "{:>5}  {:<36}  {:>9}  {:<16}  {}",
                    product.id,
                    truncate(&product.title, 36),
                    format!("${:.2}", product.price),
                    truncate(&product.category.name, 16),
                    updated
                ))
            }))
            .collect()
    };

    let list = List::new(items)
        .style(styling::normal_text_style())
        .highlight_style(styling::active_list_item_style())
        .block(block);

    // Offset selection by one so the header row is never highlighted
    let mut list_state = state.get_products_list_state().clone();
    if let Some(selected) = list_state.selected() {
        list_state.select(Some(selected + 1));
    }
    frame.render_stateful_widget(list, size, &mut list_state);
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let truncated: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Shoes", 10), "Shoes");
    }

    #[test]
    fn truncate_shortens_long_text() {
        let result = truncate("A very long product title indeed", 10);
        assert_eq!(result, "A very ...");
        assert_eq!(result.chars().count(), 10);
    }
}
