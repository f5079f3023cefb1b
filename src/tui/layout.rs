//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, Paragraph};

use crate::sim::types::{BatteryMode, GridStatus};

use super::runtime::App;
use super::style;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(10),   // frequency chart
            Constraint::Length(3), // battery gauge
            Constraint::Length(6), // status panel
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_chart(frame, app, chunks[1]);
    render_battery_gauge(frame, app, chunks[2]);
    render_status(frame, app, chunks[3]);
    render_footer(frame, chunks[4]);
}

/// Header bar: title, simulated clock, score, run state.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let s = app.snapshot();
    let state_label = match s.status {
        GridStatus::Playing => "LIVE",
        GridStatus::Blackout => "BLACKOUT",
        GridStatus::Explosion => "EXPLOSION",
    };

    let header = Line::from(vec![
        Span::styled(
            " GRIDPULSE ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " day {} │ {:05.2} h │ score {} │ {} ",
            s.day, s.time_of_day, s.score, state_label,
        )),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Frequency trace with the target line, bounded by the failure thresholds.
fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let t = app.tuning();
    let freq_points: Vec<(f64, f64)> = app
        .history
        .iter()
        .enumerate()
        .map(|(i, s)| (i as f64, s.frequency))
        .collect();
    let x_max = freq_points.len().max(2) as f64;
    let target_points = [(0.0, t.target_hz), (x_max, t.target_hz)];

    let s = app.snapshot();
    let freq_color =
        style::frequency_color(s.frequency, t.target_hz, t.failure_low_hz, t.failure_high_hz);

    let datasets = vec![
        Dataset::default()
            .name("target")
            .marker(symbols::Marker::Dot)
            .style(Style::default().fg(style::TARGET_COLOR))
            .data(&target_points),
        Dataset::default()
            .name("frequency")
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(style::FREQ_COLOR))
            .data(&freq_points),
    ];

    let y_lo = t.failure_low_hz - 0.5;
    let y_hi = t.failure_high_hz + 0.5;
    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    format!(" {:.2} Hz ", s.frequency),
                    Style::default().fg(freq_color).add_modifier(Modifier::BOLD),
                )),
        )
        .x_axis(Axis::default().bounds([0.0, x_max]))
        .y_axis(
            Axis::default().bounds([y_lo, y_hi]).labels([
                format!("{:.0}", t.failure_low_hz),
                format!("{:.0}", t.target_hz),
                format!("{:.0}", t.failure_high_hz),
            ]),
        );
    frame.render_widget(chart, area);
}

/// Battery charge gauge with mode annotation.
fn render_battery_gauge(frame: &mut Frame, app: &App, area: Rect) {
    let s = app.snapshot();
    let t = app.tuning();
    let mode = match s.battery_mode {
        BatteryMode::Idle => "idle",
        BatteryMode::Charge => "charging",
        BatteryMode::Discharge => "discharging",
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Battery — {mode} ({:.0} kWh) ",
            s.battery_stored_kwh(t)
        )))
        .gauge_style(Style::default().fg(style::battery_color(s.battery_level)))
        .ratio((s.battery_level / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.1}%", s.battery_level));
    frame.render_widget(gauge, area);
}

/// Power flow panel: supply, demand, balance, and the game-over banner.
fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let s = app.snapshot();
    let generator = if s.is_generator_on {
        format!("ON ({:.0} kW)", s.generator_output)
    } else {
        "off".to_string()
    };

    let mut lines = vec![
        Line::from(format!(
            "solar {:>7.1} kW │ generator {generator}",
            s.solar_output
        )),
        Line::from(format!("demand {:>6.1} kW", s.city_demand)),
        Line::from(format!("net {:>+9.1} kW", s.net_power)),
    ];
    match s.status {
        GridStatus::Blackout => lines.push(Line::from(Span::styled(
            "GAME OVER — the city went dark. Press r to restart.",
            Style::default()
                .fg(style::GAME_OVER)
                .add_modifier(Modifier::BOLD),
        ))),
        GridStatus::Explosion => lines.push(Line::from(Span::styled(
            "GAME OVER — the grid tore itself apart. Press r to restart.",
            Style::default()
                .fg(style::GAME_OVER)
                .add_modifier(Modifier::BOLD),
        ))),
        GridStatus::Playing => {}
    }

    let panel =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Grid "));
    frame.render_widget(panel, area);
}

/// Footer: key bindings.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Line::from(Span::styled(
        " g generator │ c charge │ d discharge │ i idle │ r reset │ q quit ",
        Style::default().fg(style::FOOTER_FG),
    ));
    frame.render_widget(Paragraph::new(footer), area);
}
