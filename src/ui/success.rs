//! Read-only summary shown once the store is live

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::launch::success::NEXT_STEPS;
use crate::launch::SuccessSummary;
use crate::ui::dialogs::centered_rect;

pub struct SuccessView {
    pub visible: bool,
    pub summary: Option<SuccessSummary>,
}

fn field<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", label), Style::default().fg(Color::Gray)),
        Span::raw(value),
    ])
}

fn section(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

impl SuccessView {
    pub fn new() -> Self {
        Self {
            visible: false,
            summary: None,
        }
    }

    pub fn show(&mut self, summary: SuccessSummary) {
        self.summary = Some(summary);
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn render(&self, frame: &mut Frame) {
        let Some(summary) = self.summary.as_ref().filter(|_| self.visible) else {
            return;
        };

        let area = centered_rect(80, 90, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" Store Launched ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(4), // Headline and URL
                Constraint::Min(10),   // Overview and integrations
                Constraint::Length(5), // Next steps
                Constraint::Length(3), // Share text
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        let headline = Paragraph::new(vec![
            Line::from(Span::styled(
                "Store Successfully Launched!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                summary.store_url.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            )),
            Line::from(Span::styled(
                format!("Deployment {}", summary.deployment_id),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(headline, chunks[0]);

        let or_dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
        let mut overview = vec![
            section("Store Overview"),
            field("Business", or_dash(&summary.business_name)),
            field("Industry", or_dash(&summary.industry)),
            field("Theme", or_dash(&summary.theme)),
            field("Products", summary.product_count.to_string()),
            field("Platform", summary.platform.clone()),
            Line::from(""),
            section("Active Integrations"),
        ];
        for (group, names) in &summary.integrations {
            let list = if names.is_empty() {
                "none".to_string()
            } else {
                names.join(", ")
            };
            overview.push(field(group.label(), list));
        }
        frame.render_widget(Paragraph::new(overview), chunks[1]);

        let mut next = vec![section("What's Next?")];
        for (title, detail) in NEXT_STEPS {
            next.push(Line::from(vec![
                Span::styled(format!("  {}: ", title), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(*detail, Style::default().fg(Color::Gray)),
            ]));
        }
        frame.render_widget(Paragraph::new(next).wrap(Wrap { trim: false }), chunks[2]);

        let share = Paragraph::new(vec![
            Line::from(Span::styled(
                summary.share_title(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(summary.share_text()),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(share, chunks[3]);

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" back to wizard  "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" quit"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[4]);
    }
}

impl Default for SuccessView {
    fn default() -> Self {
        Self::new()
    }
}
