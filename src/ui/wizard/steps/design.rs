//! Theme and color scheme step rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::catalog::{CatalogOption, COLOR_SCHEMES, THEMES};
use crate::ui::wizard::{DesignSection, WizardScreen};

/// Parse `#rrggbb` into a terminal color
fn swatch(hex: &str) -> Color {
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };
    if hex.len() == 7 && hex.starts_with('#') {
        Color::Rgb(channel(1..3), channel(3..5), channel(5..7))
    } else {
        Color::Reset
    }
}

fn option_list<'a>(
    title: &'a str,
    options: &'a [CatalogOption],
    chosen: Option<&str>,
    focused: bool,
    colored: bool,
) -> List<'a> {
    let items: Vec<ListItem> = options
        .iter()
        .map(|option| {
            let is_chosen = chosen == Some(option.id);
            let mark = if is_chosen { "(*) " } else { "( ) " };
            let mut spans = vec![
                Span::styled(
                    mark,
                    Style::default().fg(if is_chosen { Color::Green } else { Color::Gray }),
                ),
                Span::styled(option.name, Style::default().add_modifier(Modifier::BOLD)),
            ];
            if colored {
                spans.push(Span::raw("  "));
                spans.push(Span::styled("    ", Style::default().bg(swatch(option.description))));
            } else {
                spans.push(Span::styled(
                    format!("  {}", option.description),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let border = if focused { Color::Cyan } else { Color::Gray };
    List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .highlight_style(if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        })
        .highlight_symbol("> ")
}

impl WizardScreen {
    pub(crate) fn render_design_step(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(THEMES.len() as u16 + 2),
                Constraint::Length(1),
                Constraint::Length(COLOR_SCHEMES.len() as u16 + 2),
                Constraint::Min(0),
            ])
            .split(area);

        let theme = self.config().selected_theme().map(str::to_string);
        let scheme = self.config().color_scheme().to_string();
        let section = self.design_section;

        let themes = option_list(
            " Theme ",
            THEMES,
            theme.as_deref(),
            section == DesignSection::Theme,
            false,
        );
        frame.render_stateful_widget(themes, chunks[0], &mut self.theme_state);

        let colors = option_list(
            " Color Scheme ",
            COLOR_SCHEMES,
            Some(scheme.as_str()),
            section == DesignSection::ColorScheme,
            true,
        );
        frame.render_stateful_widget(colors, chunks[2], &mut self.color_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swatch_parses_hex() {
        assert_eq!(swatch("#3b82f6"), Color::Rgb(0x3b, 0x82, 0xf6));
        assert_eq!(swatch("blue"), Color::Reset);
    }
}
