//! Dashboard rendering.
//!
//! All draw functions take `&App` and never mutate it: every state change
//! happens in `App::handle` before the frame is drawn.

use ratatui::{
    prelude::*,
    widgets::{
        canvas::{Canvas, Circle, Points},
        *,
    },
};

use super::app::App;
use super::map;
use crate::model::WATER_LEVEL_RANGE_M;

const TITLE: &str = "Flood Monitoring Dashboard";
const SUBTITLE: &str = "Real-time flood sensor data (Simulated)";
const FOOTER: &str = "Data is simulated for demonstration purposes.";

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn level_style(water_level_m: f64, threshold_m: f64) -> Style {
    if water_level_m > threshold_m {
        Style::default().fg(Color::Red).bold()
    } else {
        Style::default().fg(map::heat_color(map::heat_intensity(water_level_m)))
    }
}

fn panel(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
}

/// Render a placeholder block with a gray message (used for empty states).
fn draw_placeholder(f: &mut Frame, area: Rect, title: String, message: &str) {
    let p = Paragraph::new(message)
        .style(Style::default().fg(Color::DarkGray))
        .block(panel(title));
    f.render_widget(p, area);
}

// ---------------------------------------------------------------------------
// Main draw entry point
// ---------------------------------------------------------------------------

pub fn draw(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Min(20),   // body
            Constraint::Length(1), // keys
        ])
        .split(f.area());

    draw_title(f, rows[0]);
    draw_body(f, rows[1], app);
    draw_keys(f, rows[2]);
}

fn draw_title(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Line::from(vec![
            Span::styled(format!(" {TITLE} "), Style::default().bold().fg(Color::Cyan)),
        ]));
    let p = Paragraph::new(SUBTITLE)
        .style(Style::default().fg(Color::Gray))
        .block(block);
    f.render_widget(p, area);
}

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(40), Constraint::Min(40)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.session().markers().len() as u16 + 2),
            Constraint::Length(5),
            Constraint::Min(4),
        ])
        .split(cols[0]);

    draw_selector(f, left[0], app);
    draw_metrics(f, left[1], app);
    draw_notices(f, left[2], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Length(app.session().markers().len() as u16 + 2),
            Constraint::Min(10),
        ])
        .split(cols[1]);
    let maps = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(right[0]);
    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(right[2]);

    draw_marker_map(f, maps[0], app);
    draw_heatmap(f, maps[1], app);
    draw_marker_details(f, right[1], app);
    draw_trend(f, charts[0], app);
    draw_history(f, charts[1], app);
}

// ---------------------------------------------------------------------------
// Location selector
// ---------------------------------------------------------------------------

fn draw_selector(f: &mut Frame, area: Rect, app: &App) {
    let threshold = app.config().alert_threshold_m;
    let items: Vec<ListItem> = app
        .session()
        .markers()
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let level = marker.reading.water_level_m;
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} {:<13}", i + 1, marker.location.name)),
                Span::styled(format!("{level:>5.2}m"), level_style(level, threshold)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(panel(" Select Location ".to_string()))
        .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
        .highlight_symbol("▸ ");
    let mut state = ListState::default().with_selected(Some(app.selected_index()));
    f.render_stateful_widget(list, area, &mut state);
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

fn draw_metrics(f: &mut Frame, area: Rect, app: &App) {
    let name = app.selected_location().name;
    let title = format!(" Sensor Data for {name} ");
    let Ok(reading) = app.selected_reading() else {
        draw_placeholder(f, area, title, "No reading");
        return;
    };

    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(vec![
            Span::styled("Water Level (m)  ", label),
            Span::styled(
                format!("{:.2}", reading.water_level_m),
                level_style(reading.water_level_m, app.config().alert_threshold_m),
            ),
        ]),
        Line::from(vec![
            Span::styled("Rainfall (mm)    ", label),
            Span::styled(format!("{:.2}", reading.rainfall_mm), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Temperature (°C) ", label),
            Span::styled(format!("{:.2}", reading.temperature_c), Style::default().fg(Color::Yellow)),
        ]),
    ];
    f.render_widget(Paragraph::new(lines).block(panel(title)), area);
}

// ---------------------------------------------------------------------------
// Alert banner and status line
// ---------------------------------------------------------------------------

fn draw_notices(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    if let Some(status) = app.status() {
        lines.push(Line::from(Span::styled(
            format!("✓ {status}"),
            Style::default().fg(Color::Green),
        )));
    }
    if let Some(alert) = app.alert() {
        lines.push(Line::from(Span::styled(
            format!("⚠ Warning: {}", alert.message),
            Style::default().fg(Color::Red).bold(),
        )));
    }
    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel(" Alerts ".to_string()));
    f.render_widget(p, area);
}

// ---------------------------------------------------------------------------
// Maps
// ---------------------------------------------------------------------------

fn draw_marker_map(f: &mut Frame, area: Rect, app: &App) {
    let markers = app.session().markers();
    let selected = app.selected_location().name;
    let threshold = app.config().alert_threshold_m;

    let canvas = Canvas::default()
        .block(panel(" Map ".to_string()))
        .marker(symbols::Marker::Braille)
        .x_bounds(map::x_bounds())
        .y_bounds(map::y_bounds())
        .paint(|ctx| {
            for marker in &markers {
                let (lat, lon) = marker.location.coords();
                if !map::in_viewport(lat, lon) {
                    continue;
                }
                let (x, y) = map::to_canvas(lat, lon);
                let color = if marker.location.name == selected {
                    Color::Yellow
                } else {
                    Color::LightBlue
                };
                ctx.draw(&Points {
                    coords: &[(x, y)],
                    color,
                });
                let level = marker.reading.water_level_m;
                ctx.print(
                    x,
                    y,
                    Line::from(vec![
                        Span::styled(format!("● {}", marker.location.name), Style::default().fg(color)),
                        Span::styled(format!(" {level:.2}m"), level_style(level, threshold)),
                    ]),
                );
            }
        });
    f.render_widget(canvas, area);
}

/// Popup text for every marker, one line each.
fn draw_marker_details(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.selected_location().name;
    let lines: Vec<Line> = app
        .session()
        .markers()
        .iter()
        .map(|marker| {
            let style = if marker.location.name == selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Gray)
            };
            let popup = marker.popup();
            let mut rows = popup.lines();
            let name = rows.next().unwrap_or_default();
            let details = rows.collect::<Vec<_>>().join("   ");
            Line::from(vec![
                Span::styled(format!("{name:<14}"), style.bold()),
                Span::styled(details, style),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines).block(panel(" Markers ".to_string())), area);
}

fn draw_heatmap(f: &mut Frame, area: Rect, app: &App) {
    let heat = app.session().heat_points();

    let canvas = Canvas::default()
        .block(panel(" Flood Risk Heatmap ".to_string()))
        .marker(symbols::Marker::Braille)
        .x_bounds(map::x_bounds())
        .y_bounds(map::y_bounds())
        .paint(|ctx| {
            for &(lat, lon, level) in &heat {
                let (x, y) = map::to_canvas(lat, lon);
                for (radius, color) in map::heat_rings(level) {
                    ctx.draw(&Circle { x, y, radius, color });
                }
                ctx.layer();
            }
        });
    f.render_widget(canvas, area);
}

// ---------------------------------------------------------------------------
// Charts
// ---------------------------------------------------------------------------

fn draw_trend(f: &mut Frame, area: Rect, app: &App) {
    let name = app.selected_location().name;
    let title = format!(" Water Level Trend for {name} (Last 10 Updates) ");
    let Ok(trend) = app.selected_trend() else {
        draw_placeholder(f, area, title, "No trend data");
        return;
    };
    if trend.is_empty() {
        draw_placeholder(f, area, title, "Waiting for data...");
        return;
    }

    let data = trend.chart_points();
    let latest = trend.latest().map(|p| p.water_level_m).unwrap_or_default();
    let first_label = trend.iter().next().map(|p| p.time_label()).unwrap_or_default();
    let last_label = trend.latest().map(|p| p.time_label()).unwrap_or_default();
    let (y_min, y_max) = WATER_LEVEL_RANGE_M;

    let datasets = vec![
        Dataset::default()
            .name(format!("Water Level (m) {latest:.2}"))
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&data),
    ];

    let chart = Chart::new(datasets)
        .block(panel(title))
        .x_axis(
            Axis::default()
                .title(Span::styled("Time", Style::default().fg(Color::DarkGray)))
                .bounds([0.0, (data.len().saturating_sub(1) as f64).max(1.0)])
                .labels(vec![Line::from(first_label), Line::from(last_label)]),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("m", Style::default().fg(Color::DarkGray)))
                .bounds([y_min, y_max])
                .labels(vec![
                    Line::from(format!("{y_min:.1}")),
                    Line::from(format!("{y_max:.1}")),
                ]),
        );
    f.render_widget(chart, area);
}

fn draw_history(f: &mut Frame, area: Rect, app: &App) {
    let days = app.history().len();
    let title = format!(" Historical Data (Water Level Over Last {days} Days) ");
    if days == 0 {
        draw_placeholder(f, area, title, "No history");
        return;
    }

    // Bar heights are integral, so plot centimetres and label in meters.
    let bars: Vec<Bar> = app
        .history()
        .iter()
        .map(|day| {
            Bar::default()
                .value((day.water_level_m * 100.0).round() as u64)
                .text_value(format!("{:.1}", day.water_level_m))
                .label(Line::from(day.label.replace("Day ", "D")))
                .style(Style::default().fg(Color::Blue))
                .value_style(Style::default().fg(Color::White).bg(Color::Blue))
        })
        .collect();

    let chart = BarChart::default()
        .block(panel(title))
        .data(BarGroup::default().bars(&bars))
        .max((WATER_LEVEL_RANGE_M.1 * 100.0) as u64)
        .bar_width(4)
        .bar_gap(1);
    f.render_widget(chart, area);
}

// ---------------------------------------------------------------------------
// Key help bar
// ---------------------------------------------------------------------------

fn draw_keys(f: &mut Frame, area: Rect) {
    let bar = Paragraph::new(format!(
        " ↑↓/jk: select  1-5: jump  u/Enter: update sensor data  q: quit   {FOOTER}"
    ))
    .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(bar, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
