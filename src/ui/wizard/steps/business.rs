//! Business setup step rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::ui::wizard::WizardScreen;

impl WizardScreen {
    pub(crate) fn render_business_step(&mut self, frame: &mut Frame, area: Rect) {
        // Label row plus field rows for every entry
        let constraints: Vec<Constraint> = self
            .business
            .entries
            .iter()
            .flat_map(|entry| {
                [
                    Constraint::Length(1),
                    Constraint::Length(entry.field.render_height()),
                    Constraint::Length(1),
                ]
            })
            .chain(std::iter::once(Constraint::Min(0)))
            .collect();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(constraints)
            .split(area);

        let focused_index = self.business.focused_index;
        for (i, entry) in self.business.entries.iter_mut().enumerate() {
            let focused = i == focused_index;
            let label_style = if focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            frame.render_widget(
                Paragraph::new(Span::styled(entry.label, label_style)),
                chunks[i * 3],
            );
            entry.field.render(frame, chunks[i * 3 + 1], focused);
        }
    }
}
