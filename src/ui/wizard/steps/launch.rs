//! Launch readiness step rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::api::DataSource;
use crate::types::DeployPhase;
use crate::ui::wizard::{launch_rows, LaunchRow, WizardScreen};

impl WizardScreen {
    pub(crate) fn render_launch_step(&mut self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        self.render_platform_list(frame, columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(10), // Checklist
                Constraint::Min(4),     // Validation
                Constraint::Length(7),  // Deployment status
            ])
            .split(columns[1]);

        self.render_checklist(frame, right[0]);
        self.render_validation(frame, right[1]);
        self.render_deployment(frame, right[2]);
    }

    fn render_platform_list(&mut self, frame: &mut Frame, area: Rect) {
        let title = match self.platform_source {
            None => " Platform (loading...) ",
            Some(DataSource::Fallback) => " Platform (offline list) ",
            Some(DataSource::Remote) => " Platform ",
        };

        let settings = self.config().launch_settings();
        let items: Vec<ListItem> = launch_rows(self.platforms.len())
            .into_iter()
            .map(|row| match row {
                LaunchRow::Platform(index) => {
                    let platform = &self.platforms[index];
                    let chosen = settings.selected_platform == platform.id;
                    let mark = if chosen { "(*) " } else { "( ) " };
                    ListItem::new(vec![
                        Line::from(vec![
                            Span::styled(
                                mark,
                                Style::default().fg(if chosen { Color::Green } else { Color::Gray }),
                            ),
                            Span::styled(
                                platform.name.clone(),
                                Style::default().add_modifier(Modifier::BOLD),
                            ),
                            Span::styled(
                                format!("  {} | {}", platform.setup_time, platform.monthly_cost),
                                Style::default().fg(Color::DarkGray),
                            ),
                        ]),
                        Line::from(Span::styled(
                            format!("    {}", platform.feature_preview()),
                            Style::default().fg(Color::DarkGray),
                        )),
                    ])
                }
                LaunchRow::Switch(key, label) => {
                    let on = settings.switch(key);
                    let (mark, style) = if on {
                        ("[x] ", Style::default().fg(Color::Green))
                    } else {
                        ("[ ] ", Style::default())
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(mark, style),
                        Span::raw(label),
                    ]))
                }
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().title(title).borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, area, &mut self.launch_state);
    }

    fn render_checklist(&self, frame: &mut Frame, area: Rect) {
        let checklist = self.state.checklist();
        let block = Block::default()
            .title(format!(
                " Readiness {}/{} ",
                checklist.completed_count(),
                checklist.total()
            ))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(if checklist.is_complete() {
                Color::Green
            } else {
                Color::Yellow
            }))
            .percent(checklist.percent());
        frame.render_widget(gauge, chunks[0]);

        let lines: Vec<Line> = checklist
            .items
            .iter()
            .map(|item| {
                if item.completed {
                    Line::from(Span::styled(
                        format!("+ {}", item.label),
                        Style::default().fg(Color::Green),
                    ))
                } else {
                    Line::from(Span::styled(
                        format!("- {}", item.label),
                        Style::default().fg(Color::DarkGray),
                    ))
                }
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }

    fn render_validation(&self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        match (&self.validation, self.validating) {
            (_, true) => lines.push(Line::from(Span::styled(
                "Validating...",
                Style::default().fg(Color::Yellow),
            ))),
            (None, false) => lines.push(Line::from(Span::styled(
                "Press v to validate your store",
                Style::default().fg(Color::DarkGray),
            ))),
            (Some(result), false) => {
                if result.valid {
                    lines.push(Line::from(Span::styled(
                        "Store is ready to launch",
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    )));
                } else {
                    lines.push(Line::from(Span::styled(
                        "Validation failed",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )));
                }
                for error in &result.errors {
                    lines.push(Line::from(Span::styled(
                        format!("x {}", error),
                        Style::default().fg(Color::Red),
                    )));
                }
                for warning in &result.warnings {
                    lines.push(Line::from(Span::styled(
                        format!("! {}", warning),
                        Style::default().fg(Color::Yellow),
                    )));
                }
            }
        }

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().title(" Validation ").borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }

    fn render_deployment(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Deployment ")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let status = &self.deployment;
        if status.status == DeployPhase::Idle && !self.launching {
            let hint = if self.can_launch() {
                Span::styled("Ready. Press l to launch.", Style::default().fg(Color::Green))
            } else {
                Span::styled(
                    "Complete the checklist to launch",
                    Style::default().fg(Color::DarkGray),
                )
            };
            frame.render_widget(Paragraph::new(Line::from(hint)), inner);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Stage
                Constraint::Length(1), // Progress
                Constraint::Min(1),    // Message and URL
            ])
            .split(inner);

        let color = match status.status {
            DeployPhase::Completed => Color::Green,
            DeployPhase::Failed => Color::Red,
            _ => Color::Yellow,
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw("Status: "),
                Span::styled(
                    status.status.to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ])),
            chunks[0],
        );

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color))
            .percent(u16::from(status.progress.min(100)));
        frame.render_widget(gauge, chunks[1]);

        let mut lines = Vec::new();
        if let Some(message) = &status.message {
            lines.push(Line::from(message.as_str()));
        }
        if let Some(url) = &status.store_url {
            lines.push(Line::from(vec![
                Span::raw("Store: "),
                Span::styled(url.as_str(), Style::default().fg(Color::Cyan)),
            ]));
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[2]);
    }
}
