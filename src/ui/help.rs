use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Palette"));
    lines.extend(section_lines(&[
        ("space", "Generate a new palette (locked colors stay)"),
        ("u", "Unlock all colors"),
        ("a", "Copy all colors"),
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Colors"));
    lines.extend(section_lines(&[
        ("←/→ h/l", "Select a color"),
        ("1-5", "Copy that color"),
        ("enter c", "Copy the selected color"),
        ("x", "Lock/unlock the selected color"),
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Mouse"));
    lines.extend(section_lines(&[
        ("click", "Copy a color"),
        ("click badge", "Lock/unlock a color"),
        ("buttons", "Generate, unlock all, copy all"),
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Global"));
    lines.extend(section_lines(&[("?", "Toggle help"), ("q esc", "Quit")]));

    Text::from(lines)
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[(&str, &str)]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!("  {key:<12}"),
                    Style::default()
                        .fg(Theme::key())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(action.to_string(), Style::default().fg(Theme::text())),
            ])
        })
        .collect()
}
