//! Integrations step rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

use crate::ui::wizard::{integration_rows, WizardScreen};

impl WizardScreen {
    pub(crate) fn render_integrations_step(&mut self, frame: &mut Frame, area: Rect) {
        let integrations = self.config().integrations();
        let mut current_group = None;

        let items: Vec<ListItem> = integration_rows()
            .into_iter()
            .map(|(group, option)| {
                let mut lines = Vec::new();
                // Group heading above the first provider of each group
                if current_group != Some(group) {
                    current_group = Some(group);
                    lines.push(Line::from(Span::styled(
                        group.label(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )));
                }
                let selected = integrations.is_selected(group, option.id);
                let (mark, style) = if selected {
                    ("  [x] ", Style::default().fg(Color::Green))
                } else {
                    ("  [ ] ", Style::default())
                };
                lines.push(Line::from(vec![
                    Span::styled(mark, style),
                    Span::styled(option.name, style.add_modifier(Modifier::BOLD)),
                    Span::styled(
                        format!("  {}", option.description),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, area, &mut self.integration_state);
    }
}
