//! Content and SEO step rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

use crate::ui::wizard::{content_rows, ContentRow, WizardScreen};

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

impl WizardScreen {
    pub(crate) fn render_content_step(&mut self, frame: &mut Frame, area: Rect) {
        let settings = self.config().content_settings();
        let rows = content_rows();

        let items: Vec<ListItem> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let previous = i.checked_sub(1).and_then(|p| rows.get(p));
                let mut lines = Vec::new();
                let (mark, label, detail) = match row {
                    ContentRow::ContentType(option) => {
                        if previous.is_none() {
                            lines.push(heading("Content Types"));
                        }
                        let on = settings.content_type_enabled(option.id);
                        (if on { "[x]" } else { "[ ]" }, option.name, option.description)
                    }
                    ContentRow::Tone(option) => {
                        if !matches!(previous, Some(ContentRow::Tone(_))) {
                            lines.push(heading("Tone of Voice"));
                        }
                        let on = settings.tone == option.id;
                        (if on { "(*)" } else { "( )" }, option.name, option.description)
                    }
                    ContentRow::Seo(key, label) => {
                        if !matches!(previous, Some(ContentRow::Seo(..))) {
                            lines.push(heading("SEO"));
                        }
                        let on = settings.seo_option(key);
                        (if on { "[x]" } else { "[ ]" }, *label, "")
                    }
                };
                let style = if mark.contains('x') || mark.contains('*') {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("  {} ", mark), style),
                    Span::styled(label, style.add_modifier(Modifier::BOLD)),
                    Span::styled(format!("  {}", detail), Style::default().fg(Color::DarkGray)),
                ]));
                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, area, &mut self.content_state);
    }
}
