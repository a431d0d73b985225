mod help;
mod helpers;
pub mod layout;
mod theme;

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::types::SlotIndex;
use help::build_help_text;
use helpers::{ink_and_paper, muted_ink, swatch_to_color};
use layout::PaletteLayout;
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let layout = PaletteLayout::compute(frame.area());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "  Palettr  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "color palette generator",
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "   Press space or click Generate to create new palettes",
            Style::default().fg(Theme::dim()),
        ),
    ]))
    .alignment(Alignment::Left)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Theme::secondary())),
    );
    frame.render_widget(header, layout.header);

    for index in 0..layout.tiles.len() {
        render_tile(frame, app, &layout, index, now);
    }

    render_button(frame, layout.regenerate, "⟳ Generate New Palette", Theme::regenerate_button());
    render_button(frame, layout.unlock_all, "Unlock All", Theme::unlock_button());
    let copy_label = if app.is_all_copied(now) {
        "Copy All Colors ✓"
    } else {
        "Copy All Colors"
    };
    render_button(frame, layout.copy_all, copy_label, Theme::copy_button());

    let footer = Paragraph::new(Line::from(Span::styled(
        " space: Generate  ←/→: Select  1-5/enter: Copy  x: Lock  u: Unlock all  a: Copy all  ?: Help  q: Quit",
        Style::default().fg(Theme::dim()),
    )));
    frame.render_widget(footer, layout.footer);

    if app.show_help {
        render_help_popup(frame);
    }
}

fn render_tile(
    frame: &mut Frame,
    app: &App,
    layout: &PaletteLayout,
    index: SlotIndex,
    now: Instant,
) {
    let Some(swatch) = app.palette.get(index) else {
        return;
    };
    let area = layout.tiles[index];
    let background = swatch_to_color(swatch);
    let (ink, paper) = ink_and_paper(swatch);
    let selected = app.selected == index;

    let tile = Block::default()
        .borders(Borders::ALL)
        .border_type(if selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(if selected { ink } else { background }))
        .style(Style::default().bg(background));
    frame.render_widget(tile, area);

    let inner = area.inner(Margin::new(1, 1));
    let info_height = inner.height.min(2);
    let info_area = Rect {
        y: inner.bottom().saturating_sub(info_height),
        height: info_height,
        ..inner
    };
    let info = Paragraph::new(Text::from(vec![
        Line::from(Span::styled(
            swatch.to_hex(),
            Style::default().fg(ink).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            swatch.to_rgb_string(),
            Style::default().fg(muted_ink(swatch)),
        )),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().bg(background));
    frame.render_widget(info, info_area);

    let lock_badge = if app.locks.is_locked(index) {
        Paragraph::new("■ locked").style(
            Style::default()
                .fg(Color::White)
                .bg(Theme::locked())
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Paragraph::new("□ lock").style(Style::default().fg(paper).bg(ink))
    };
    frame.render_widget(
        lock_badge.alignment(Alignment::Center),
        layout.lock_badges[index],
    );

    if app.is_copied(index, now) {
        let copied = Paragraph::new("✓ Copied")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(paper)
                    .bg(ink)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(copied, layout.copied_badges[index]);
    }
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, color: Color) {
    let button = Paragraph::new(Line::from(Span::styled(
        label.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color)),
    )
    .style(Style::default().bg(color));
    frame.render_widget(button, area);
}

fn render_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let popup = Paragraph::new(build_help_text())
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary()))
                .title(" Help "),
        );
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
