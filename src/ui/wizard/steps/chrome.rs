//! Header, step indicator and footer shared by every step

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::ui::wizard::WizardScreen;
use crate::wizard::WizardStep;

/// Footer hint: key in yellow, action in default style
fn hint<'a>(key: &'a str, action: &'a str) -> [Span<'a>; 2] {
    [
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ]
}

impl WizardScreen {
    /// Draw the frame around the step and return (body, footer) areas
    pub(crate) fn render_chrome(&self, frame: &mut Frame) -> (Rect, Rect) {
        let step = self.step();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(1), // Step indicator
                Constraint::Length(1), // Progress
                Constraint::Min(8),    // Step body
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let title = Paragraph::new(vec![
            Line::from(Span::styled(
                "Store Launch Wizard",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    format!("Step {} of {}: ", step.number(), WizardStep::all().len()),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(step.title(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!(" - {}", step.description()),
                    Style::default().fg(Color::Gray),
                ),
            ]),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let mut indicator = Vec::new();
        for (i, s) in WizardStep::all().iter().enumerate() {
            if i > 0 {
                indicator.push(Span::styled(" > ", Style::default().fg(Color::DarkGray)));
            }
            let style = if *s == step {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if s.number() < step.number() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let marker = if s.number() < step.number() { "+" } else { " " };
            indicator.push(Span::styled(format!("{}{}", marker, s.title()), style));
        }
        frame.render_widget(
            Paragraph::new(Line::from(indicator)).alignment(Alignment::Center),
            chunks[1],
        );

        let ratio = step.number() as f64 / WizardStep::all().len() as f64;
        let progress = Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio(ratio)
            .label(format!("{}% complete", (ratio * 100.0).round() as u16));
        frame.render_widget(progress, chunks[2]);

        let body = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", step.title()));
        let inner = body.inner(chunks[3]);
        frame.render_widget(body, chunks[3]);

        (inner, chunks[4])
    }

    pub(crate) fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();

        let forward = if self.state.is_last_step() {
            " launch store  "
        } else {
            " next step  "
        };
        spans.extend(hint("Enter", forward));
        if self.state.can_go_back() {
            spans.extend(hint("Esc", " previous  "));
        }

        match self.step() {
            WizardStep::Business => {
                spans.extend(hint("Up/Down", " field  "));
                spans.extend(hint("Left/Right", " change  "));
            }
            WizardStep::Products => {
                spans.extend(hint("Space", " toggle  "));
                if self.can_generate() {
                    spans.extend(hint("g", " generate  "));
                }
            }
            WizardStep::Design => {
                spans.extend(hint("Tab", " theme/colors  "));
                spans.extend(hint("Space", " select  "));
            }
            WizardStep::Integrations | WizardStep::Content => {
                spans.extend(hint("Space", " toggle  "));
            }
            WizardStep::Launch => {
                spans.extend(hint("Space", " select  "));
                spans.extend(hint("v", " validate  "));
                if self.can_launch() {
                    spans.extend(hint("l", " launch  "));
                }
                if self.launch_record.is_some() {
                    spans.extend(hint("s", " summary  "));
                }
            }
        }
        spans.extend(hint("Ctrl+C", " quit"));

        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            area,
        );
    }
}
