//! Reusable form field widgets for TUI forms

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use serde_json::{Map, Value};
use tui_textarea::TextArea;

use crate::catalog::CatalogOption;

/// A form field widget that can handle different input types
pub enum FormField {
    /// Single-line text input. `cursor_pos` counts characters, not bytes.
    TextInput {
        value: String,
        cursor_pos: usize,
        placeholder: String,
        max_length: Option<usize>,
    },
    /// Multi-line text input using tui-textarea
    TextArea {
        textarea: Box<TextArea<'static>>,
        placeholder: String,
    },
    /// One of a fixed set of options, cycled with Left/Right
    Select {
        /// (stored value, display label)
        options: Vec<(String, String)>,
        selected: usize,
    },
}

/// Byte offset of the `char_pos`-th character
fn byte_index(value: &str, char_pos: usize) -> usize {
    value
        .char_indices()
        .nth(char_pos)
        .map_or(value.len(), |(i, _)| i)
}

impl FormField {
    pub fn text(value: &str, placeholder: &str) -> Self {
        FormField::TextInput {
            cursor_pos: value.chars().count(),
            value: value.to_string(),
            placeholder: placeholder.to_string(),
            max_length: None,
        }
    }

    pub fn text_area(value: &str, placeholder: &str) -> Self {
        let mut textarea = TextArea::default();
        textarea.insert_str(value);
        FormField::TextArea {
            textarea: Box::new(textarea),
            placeholder: placeholder.to_string(),
        }
    }

    /// Select over catalog options, stored by id
    pub fn select(options: &[CatalogOption], current: &str) -> Self {
        let options: Vec<(String, String)> = options
            .iter()
            .map(|o| (o.id.to_string(), o.name.to_string()))
            .collect();
        Self::select_from(options, current)
    }

    /// Select over plain labels, stored by label
    pub fn select_labels(labels: &[&str], current: &str) -> Self {
        let options = labels
            .iter()
            .map(|l| (l.to_string(), l.to_string()))
            .collect();
        Self::select_from(options, current)
    }

    fn select_from(options: Vec<(String, String)>, current: &str) -> Self {
        let selected = options
            .iter()
            .position(|(value, _)| value == current)
            .unwrap_or(0);
        FormField::Select { options, selected }
    }

    /// Get the current value as a string
    pub fn value(&self) -> String {
        match self {
            FormField::TextInput { value, .. } => value.clone(),
            FormField::TextArea { textarea, .. } => textarea.lines().join("\n"),
            FormField::Select { options, selected } => options
                .get(*selected)
                .map(|(value, _)| value.clone())
                .unwrap_or_default(),
        }
    }

    /// Set the value from a string
    pub fn set_value(&mut self, new_value: &str) {
        match self {
            FormField::TextInput {
                value, cursor_pos, ..
            } => {
                *value = new_value.to_string();
                *cursor_pos = value.chars().count();
            }
            FormField::TextArea { textarea, .. } => {
                textarea.select_all();
                textarea.cut();
                textarea.insert_str(new_value);
            }
            FormField::Select { options, selected } => {
                if let Some(idx) = options.iter().position(|(value, _)| value == new_value) {
                    *selected = idx;
                }
            }
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, FormField::TextArea { .. })
    }

    /// Handle a key event, returns true if the key was consumed
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match self {
            FormField::TextInput {
                value,
                cursor_pos,
                max_length,
                ..
            } => match key {
                KeyCode::Char(c) => {
                    if max_length.map_or(true, |m| value.chars().count() < m) {
                        let at = byte_index(value, *cursor_pos);
                        value.insert(at, c);
                        *cursor_pos += 1;
                    }
                    true
                }
                KeyCode::Backspace => {
                    if *cursor_pos > 0 {
                        *cursor_pos -= 1;
                        let at = byte_index(value, *cursor_pos);
                        value.remove(at);
                    }
                    true
                }
                KeyCode::Delete => {
                    if *cursor_pos < value.chars().count() {
                        let at = byte_index(value, *cursor_pos);
                        value.remove(at);
                    }
                    true
                }
                KeyCode::Left => {
                    *cursor_pos = cursor_pos.saturating_sub(1);
                    true
                }
                KeyCode::Right => {
                    if *cursor_pos < value.chars().count() {
                        *cursor_pos += 1;
                    }
                    true
                }
                KeyCode::Home => {
                    *cursor_pos = 0;
                    true
                }
                KeyCode::End => {
                    *cursor_pos = value.chars().count();
                    true
                }
                _ => false,
            },
            FormField::TextArea { textarea, .. } => match key {
                // Up/Down move between fields, Enter inserts a line
                KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::Esc => false,
                _ => {
                    textarea.input(crossterm::event::KeyEvent::new(
                        key,
                        crossterm::event::KeyModifiers::NONE,
                    ));
                    true
                }
            },
            FormField::Select { options, selected } => {
                let len = options.len();
                if len == 0 {
                    return false;
                }
                match key {
                    KeyCode::Right | KeyCode::Char(' ') => {
                        *selected = (*selected + 1) % len;
                        true
                    }
                    KeyCode::Left => {
                        *selected = if *selected == 0 { len - 1 } else { *selected - 1 };
                        true
                    }
                    _ => false,
                }
            }
        }
    }

    /// Get the height needed to render this field
    pub fn render_height(&self) -> u16 {
        match self {
            FormField::TextInput { .. } | FormField::Select { .. } => 1,
            FormField::TextArea { .. } => 5,
        }
    }

    /// Render the field
    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let border_color = if focused { Color::Cyan } else { Color::Gray };
        let text_style = Style::default().fg(if focused { Color::White } else { Color::Gray });

        match self {
            FormField::TextInput {
                value,
                cursor_pos,
                placeholder,
                ..
            } => {
                let content = if value.is_empty() && !focused {
                    Line::from(Span::styled(
                        placeholder.as_str(),
                        Style::default().fg(Color::DarkGray),
                    ))
                } else {
                    let mut text = value.clone();
                    if focused {
                        text.insert(byte_index(value, *cursor_pos), '|');
                    }
                    Line::from(text)
                };
                frame.render_widget(Paragraph::new(content).style(text_style), area);
            }
            FormField::TextArea {
                textarea,
                placeholder,
            } => {
                textarea.set_cursor_line_style(Style::default());
                textarea.set_cursor_style(if focused {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                });
                textarea.set_block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border_color)),
                );
                textarea.set_placeholder_text(placeholder.clone());
                textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));

                frame.render_widget(&**textarea, area);
            }
            FormField::Select { options, selected } => {
                let label = options
                    .get(*selected)
                    .map(|(_, label)| label.as_str())
                    .unwrap_or("");
                let arrow = Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray });
                let line = Line::from(vec![
                    Span::styled("< ", arrow),
                    Span::styled(
                        label,
                        text_style.add_modifier(if focused {
                            Modifier::BOLD
                        } else {
                            Modifier::empty()
                        }),
                    ),
                    Span::styled(" >", arrow),
                ]);
                frame.render_widget(Paragraph::new(line), area);
            }
        }
    }
}

/// A labelled field inside a [`Form`]
pub struct FormEntry {
    /// Config key the value is written to
    pub key: &'static str,
    pub label: &'static str,
    pub field: FormField,
}

/// An ordered set of fields with one focused at a time
pub struct Form {
    pub entries: Vec<FormEntry>,
    pub focused_index: usize,
}

impl Form {
    pub fn new(entries: Vec<FormEntry>) -> Self {
        Self {
            entries,
            focused_index: 0,
        }
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FormField> {
        self.entries
            .get_mut(self.focused_index)
            .map(|entry| &mut entry.field)
    }

    pub fn focused_key(&self) -> Option<&'static str> {
        self.entries.get(self.focused_index).map(|entry| entry.key)
    }

    pub fn next_field(&mut self) {
        if self.focused_index < self.entries.len().saturating_sub(1) {
            self.focused_index += 1;
        }
    }

    pub fn prev_field(&mut self) {
        self.focused_index = self.focused_index.saturating_sub(1);
    }

    pub fn field(&self, key: &str) -> Option<&FormField> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.field)
    }

    /// All values keyed by config key
    pub fn values(&self) -> Map<String, Value> {
        self.entries
            .iter()
            .map(|entry| (entry.key.to_string(), Value::String(entry.field.value())))
            .collect()
    }
}
