//! Chart renderers for the dashboard.
//!
//! Each chart consumes the raw category and product collections and
//! recomputes its own per-category counts; nothing is shared between them
//! beyond the state snapshot.

use super::Frame;
use crate::platzi::{Category, Product};
use crate::state::State;
use crate::ui::theme;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, Gauge, GraphType},
};

const MONTH_LABELS: [&str; 5] = ["Jan", "Apr", "Jul", "Oct", "Dec"];

/// Count products per category by matching each product's embedded category
/// id against the category list.
///
fn products_per_category(categories: &[Category], products: &[Product]) -> Vec<(String, u64)> {
    categories
        .iter()
        .map(|category| {
            let count = products
                .iter()
                .filter(|product| product.category.id == category.id)
                .count() as u64;
            (category.name.clone(), count)
        })
        .collect()
}

/// Render products-per-category bar chart.
///
pub fn bar(frame: &mut Frame, size: Rect, state: &State) {
    let counts = products_per_category(state.get_categories(), state.get_products());
    let data: Vec<(&str, u64)> = counts
        .iter()
        .map(|(name, count)| (name.as_str(), *count))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title("Products per Category")
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style()),
        )
        .data(&data)
        .bar_width(9)
        .bar_gap(2)
        .bar_style(Style::default().fg(theme::SERIES[0]))
        .value_style(Style::default().fg(Color::Black).bg(theme::SERIES[0]))
        .label_style(styling::normal_text_style());
    frame.render_widget(chart, size);
}

/// Render per-category share as horizontal gauges, one per category.
///
pub fn share(frame: &mut Frame, size: Rect, state: &State) {
    let counts = products_per_category(state.get_categories(), state.get_products());
    let total: u64 = counts.iter().map(|(_, count)| count).sum();

    let block = Block::default()
        .title("Category Share")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style());
    let inner = block.inner(size);
    frame.render_widget(block, size);

    if total == 0 || inner.height == 0 {
        return;
    }

    let visible = counts
        .iter()
        .take(usize::from(inner.height))
        .collect::<Vec<_>>();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); visible.len()])
        .split(inner);

    for (index, (name, count)) in visible.into_iter().enumerate() {
        let ratio = *count as f64 / total as f64;
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(theme::SERIES[index % theme::SERIES.len()]))
            .ratio(ratio)
            .label(format!("{}: {} ({:.0}%)", name, count, ratio * 100.0));
        frame.render_widget(gauge, rows[index]);
    }
}

/// Render the fabricated monthly purchases line chart.
///
pub fn purchases(frame: &mut Frame, size: Rect, state: &State) {
    let series = state.get_monthly_purchases();
    let points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(month, &count)| (month as f64, count as f64))
        .collect();
    let max = series.iter().max().copied().unwrap_or(0).max(1) as f64 * 1.2;

    let datasets = vec![Dataset::default()
        .name("Purchased Products")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(theme::PRIMARY))
        .data(&points)];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title("Purchased Products (Last 12 Months)")
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style()),
        )
        .x_axis(
            Axis::default()
                .style(styling::normal_text_style())
                .bounds([0.0, 11.0])
                .labels(MONTH_LABELS.iter().map(|label| Span::raw(*label)).collect()),
        )
        .y_axis(
            Axis::default()
                .style(styling::normal_text_style())
                .bounds([0.0, max])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{}", (max / 2.0) as u64)),
                    Span::raw(format!("{}", max as u64)),
                ]),
        );
    frame.render_widget(chart, size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            image: String::new(),
        }
    }

    fn product_in(category: &Category) -> Product {
        Product {
            category: category.clone(),
            ..Faker.fake()
        }
    }

    #[test]
    fn counts_follow_category_order() {
        let clothes = category(1, "Clothes");
        let shoes = category(2, "Shoes");
        let products = vec![
            product_in(&clothes),
            product_in(&shoes),
            product_in(&clothes),
        ];
        let counts = products_per_category(&[clothes, shoes], &products);
        assert_eq!(
            counts,
            vec![("Clothes".to_string(), 2), ("Shoes".to_string(), 1)]
        );
    }

    #[test]
    fn unknown_product_categories_are_not_counted() {
        let clothes = category(1, "Clothes");
        let orphan = category(99, "Gone");
        let products = vec![product_in(&orphan)];
        let counts = products_per_category(&[clothes], &products);
        assert_eq!(counts, vec![("Clothes".to_string(), 0)]);
    }

    #[test]
    fn empty_categories_produce_no_counts() {
        let products = vec![Faker.fake()];
        assert!(products_per_category(&[], &products).is_empty());
    }
}
