//! Terminal renderer for the clock.
//!
//! Draws a [`TimerSnapshot`] and nothing else: no state lives here and
//! nothing flows back into the engine.
//!
//! Layers, bottom to top:
//! - theme background, noise dots and vignette
//! - paused border cue
//! - big `MM:SS` digits
//! - controls overlay (bottom-left, only while `ui_visible`)

pub mod digits;
pub mod palette;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::types::{format_time, EditScope, TimerMode, TimerSnapshot};
use digits::{big_rows, big_width, glyph_for};

/// Largest digit scale tried when fitting the clock face.
const MAX_SCALE: usize = 6;

/// Renders the whole screen.
pub fn render(frame: &mut Frame, snapshot: &TimerSnapshot) {
    let area = frame.area();
    let bg = palette::background(snapshot.theme);

    frame.render_widget(Block::default().style(Style::default().bg(bg)), area);
    if snapshot.theme.noise {
        draw_noise(frame.buffer_mut(), area, bg);
    }
    if snapshot.theme.vignette {
        draw_vignette(frame.buffer_mut(), area, bg);
    }

    if !snapshot.is_running {
        let border = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette::PAUSED_BORDER));
        frame.render_widget(border, area);
    }

    render_clock(frame, area, snapshot);

    if snapshot.ui_visible {
        render_overlay(frame, area, snapshot);
    }
}

fn draw_noise(buf: &mut Buffer, area: Rect, bg: Color) {
    let dot = palette::lighten(bg, 0.12);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let hash = u32::from(x).wrapping_mul(73_856_093) ^ u32::from(y).wrapping_mul(19_349_663);
            if hash % 17 == 0 {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char('·').set_fg(dot);
                }
            }
        }
    }
}

fn draw_vignette(buf: &mut Buffer, area: Rect, bg: Color) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let edge = (x - area.left())
                .min(area.right() - 1 - x)
                .min(y - area.top())
                .min(area.bottom() - 1 - y);
            if edge > 2 {
                continue;
            }
            let shade = 0.6 - 0.2 * f32::from(edge);
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_bg(palette::darken(bg, shade));
            }
        }
    }
}

fn part_style(snapshot: &TimerSnapshot, part: EditScope) -> Style {
    if !snapshot.is_edit_mode() {
        return Style::default().fg(palette::DIGIT);
    }
    if snapshot.flash_scope == Some(part) {
        Style::default()
            .fg(palette::DIGIT)
            .add_modifier(Modifier::BOLD)
    } else if snapshot.edit_scope == part {
        Style::default().fg(palette::DIGIT_EDIT)
    } else {
        Style::default().fg(palette::DIGIT_INACTIVE)
    }
}

fn colon_style(snapshot: &TimerSnapshot) -> Style {
    if snapshot.is_running && snapshot.seconds % 2 == 1 {
        Style::default().fg(palette::DIGIT_INACTIVE)
    } else {
        Style::default().fg(palette::DIGIT)
    }
}

/// Picks the largest scale whose face fits inside `area` with a margin.
fn fit_scale(text: &str, area: Rect) -> Option<usize> {
    (1..=MAX_SCALE).rev().find(|&scale| {
        big_width(text, scale) + 4 <= usize::from(area.width)
            && digits::ROWS * scale + 2 <= usize::from(area.height)
    })
}

fn render_clock(frame: &mut Frame, area: Rect, snapshot: &TimerSnapshot) {
    let text = format_time(snapshot.seconds);
    let (minutes, seconds) = text.split_once(':').unwrap_or((text.as_str(), ""));
    let min_style = part_style(snapshot, EditScope::Minutes);
    let sec_style = part_style(snapshot, EditScope::Seconds);

    let Some(scale) = fit_scale(&text, area) else {
        let line = Line::from(vec![
            Span::styled(minutes.to_string(), min_style),
            Span::styled(":", colon_style(snapshot)),
            Span::styled(seconds.to_string(), sec_style),
        ]);
        let y = area.y + area.height / 2;
        let row = Rect::new(area.x, y, area.width, 1).intersection(area);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
        return;
    };

    let glyph = glyph_for(snapshot.font_index);
    let gap = " ".repeat(2 * scale);
    let min_rows = big_rows(minutes, glyph, scale);
    let colon_rows = big_rows(":", glyph, scale);
    let sec_rows = big_rows(seconds, glyph, scale);

    let lines: Vec<Line> = (0..digits::ROWS * scale)
        .map(|i| {
            Line::from(vec![
                Span::styled(min_rows[i].clone(), min_style),
                Span::raw(gap.clone()),
                Span::styled(colon_rows[i].clone(), colon_style(snapshot)),
                Span::raw(gap.clone()),
                Span::styled(sec_rows[i].clone(), sec_style),
            ])
        })
        .collect();

    let height = lines.len() as u16;
    let y = area.y + area.height.saturating_sub(height) / 2;
    let face = Rect::new(area.x, y, area.width, height).intersection(area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), face);
}

fn key_line<'a>(keys: &[&'a str], label: String) -> Line<'a> {
    let key_style = Style::default().fg(Color::Black).bg(palette::OVERLAY_KEY);
    let mut spans = Vec::new();
    for key in keys {
        spans.push(Span::styled(format!(" {key} "), key_style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(label, Style::default().fg(palette::OVERLAY)));
    Line::from(spans)
}

fn overlay_lines(snapshot: &TimerSnapshot) -> Vec<Line<'static>> {
    let status = if snapshot.is_running { "RUNNING" } else { "PAUSED" };
    let mode_icon = match snapshot.mode {
        TimerMode::Countdown => "⏲",
        TimerMode::Stopwatch => "⏱",
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{mode_icon} {} • {status}", snapshot.mode.as_str()),
            Style::default()
                .fg(palette::OVERLAY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        key_line(
            &["Space"],
            if snapshot.is_running { "Pause" } else { "Start" }.to_string(),
        ),
        key_line(&["S"], "Switch Mode".to_string()),
        key_line(&["R"], "Reset".to_string()),
        key_line(&["F"], "Fullscreen".to_string()),
        key_line(&["T"], format!("Font · {}", snapshot.font_family)),
        key_line(&["C"], format!("Theme · {}", snapshot.theme.label)),
        key_line(&["H"], "Toggle UI".to_string()),
    ];

    if snapshot.is_edit_mode() {
        lines.push(Line::default());
        lines.push(key_line(&["←", "→"], "Select".to_string()));
        lines.push(key_line(&["↑", "↓"], "Adjust".to_string()));
    }
    lines
}

fn render_overlay(frame: &mut Frame, area: Rect, snapshot: &TimerSnapshot) {
    let lines = overlay_lines(snapshot);
    let height = lines.len() as u16;
    let x = area.x + 3;
    let y = area.bottom().saturating_sub(height + 2).max(area.y);
    let panel = Rect::new(x, y, area.width.saturating_sub(3).min(36), height).intersection(area);
    frame.render_widget(Paragraph::new(lines), panel);
}
