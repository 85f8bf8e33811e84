//! UI rendering for the TUI.

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::core::Notifier;
use crate::session::progress::ring_arc;
use crate::session::StyleClass;
use crate::tui::app::{App, Field};
use crate::tui::event::HELP;

/// Points in a full progress ring.
const RING_STEPS: usize = 240;

/// Ring radius in canvas units.
const RING_RADIUS: f64 = 0.9;

const fn style_color(style: StyleClass) -> Color {
    match style {
        StyleClass::Work => Color::Red,
        StyleClass::Break => Color::Green,
        StyleClass::LongBreak => Color::Blue,
    }
}

/// Render the application UI.
pub fn render<N: Notifier>(frame: &mut Frame<'_>, app: &App<N>) {
    // Create layout: header, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Timer and settings
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(chunks[1]);

    render_header(frame, app, chunks[0]);
    render_ring(frame, app, body[0]);
    render_settings(frame, app, body[1]);
    render_status_bar(frame, app, chunks[2]);
}

/// Render the header.
fn render_header<N: Notifier>(frame: &mut Frame<'_>, app: &App<N>, area: Rect) {
    let display = &app.view().display;
    let color = style_color(display.style);

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", display.label),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" Session {} ", display.cycle_index),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    frame.render_widget(header, area);
}

/// Render the progress ring with the countdown inside it.
fn render_ring<N: Notifier>(frame: &mut Frame<'_>, app: &App<N>, area: Rect) {
    let view = app.view();
    let color = style_color(view.display.style);
    let arc = ring_arc(view.display.progress, RING_RADIUS, RING_STEPS);

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL))
        .marker(Marker::Braille)
        .x_bounds([-1.0, 1.0])
        .y_bounds([-1.0, 1.0])
        .paint(|ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: RING_RADIUS,
                color: Color::DarkGray,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &arc,
                color,
            });
        });

    frame.render_widget(canvas, area);

    let state = if view.running { "running" } else { "paused" };
    let text = vec![
        Line::from(Span::styled(
            view.display.time_text(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(state, Style::default().fg(Color::DarkGray))),
    ];
    let center = centered_rows(area, 2);
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), center);
}

/// Render the duration settings panel.
fn render_settings<N: Notifier>(frame: &mut Frame<'_>, app: &App<N>, area: Rect) {
    let form = &app.form;
    let mut lines: Vec<Line<'_>> = [Field::Work, Field::ShortBreak, Field::LongBreak]
        .into_iter()
        .map(|field| {
            let focused = form.editing && form.focus == field;
            let value_style = if focused {
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::raw(format!("{:<13}", field.kind().label())),
                Span::styled(format!("{:>4}", form.value(field)), value_style),
                Span::styled(" min", Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("[{}]", app.view().confirmation.label(Instant::now())),
        Style::default().fg(Color::Cyan),
    )));

    let toggle_color = if app.view().rest_style {
        Color::Green
    } else {
        Color::Red
    };
    lines.push(Line::from(vec![
        Span::raw("Mode (m)     "),
        Span::styled(
            format!("[{}]", app.view().toggle_label),
            Style::default().fg(toggle_color),
        ),
    ]));

    let border = if form.editing { Color::Cyan } else { Color::White };
    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Settings (e) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );

    frame.render_widget(panel, area);
}

/// Render the status bar.
fn render_status_bar<N: Notifier>(frame: &mut Frame<'_>, app: &App<N>, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(HELP);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

/// A full-width strip of `rows` rows in the vertical middle of `area`.
fn centered_rows(area: Rect, rows: u16) -> Rect {
    let rows = rows.min(area.height);
    Rect {
        x: area.x,
        y: area.y + (area.height - rows) / 2,
        width: area.width,
        height: rows,
    }
}
