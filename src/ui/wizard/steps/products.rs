//! Product catalog step rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::api::DataSource;
use crate::catalog::CATEGORIES;
use crate::ui::wizard::WizardScreen;

impl WizardScreen {
    pub(crate) fn render_products_step(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        let selected = self.config().selected_categories();
        let items: Vec<ListItem> = CATEGORIES
            .iter()
            .map(|category| {
                let checked = selected.iter().any(|c| c == category.id);
                let (mark, style) = if checked {
                    ("[x] ", Style::default().fg(Color::Green))
                } else {
                    ("[ ] ", Style::default())
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(mark, style),
                        Span::styled(category.name, style.add_modifier(Modifier::BOLD)),
                    ]),
                    Line::from(Span::styled(
                        format!("    {}", category.description),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!(" Categories ({} selected) ", selected.len()))
                    .borders(Borders::ALL),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, chunks[0], &mut self.category_state);

        let products = self.config().products();
        let mut lines = Vec::new();
        if self.generating {
            lines.push(Line::from(Span::styled(
                "Generating products...",
                Style::default().fg(Color::Yellow),
            )));
        } else if products.is_empty() {
            lines.push(Line::from(Span::styled(
                "No products yet. Select categories and press g to generate.",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            if self.product_source == Some(DataSource::Fallback) {
                lines.push(Line::from(Span::styled(
                    "Generated offline from the built-in catalog",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            for product in &products {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:>10} ", product.display_price()),
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        product.name.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", product.category),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
            }
        }

        let preview = Paragraph::new(lines).block(
            Block::default()
                .title(format!(" Products ({}) ", products.len()))
                .borders(Borders::ALL),
        );
        frame.render_widget(preview, chunks[1]);
    }
}
