use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Block, Clear, Gauge, Paragraph, Wrap};

use crate::assessment::DimensionScore;
use crate::radar::{self, Point, RING_LEVELS};
use crate::tui::app::{App, InputMode, Step};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 12 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Body(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    match app.step {
        Step::Landing => render_landing(frame, chunks[1], app),
        Step::Quiz => render_quiz(frame, chunks[1], app),
        Step::Analyzing => render_analyzing(frame, chunks[1], app),
        Step::Result => render_result(frame, chunks[1], app),
    }
    render_status_bar(frame, chunks[2], app);

    match app.input_mode {
        InputMode::NameRequired => render_name_required_popup(frame, app),
        InputMode::Help => render_help_popup(frame, app),
        InputMode::Normal => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let left = "AI-Q India";
    let mut spans = vec![Span::styled(left, app.colors.title_style)];
    if !app.name.trim().is_empty() && app.step != Step::Landing {
        let right = app.name.trim().to_string();
        let padding = (area.width as usize).saturating_sub(left.len() + right.chars().count());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(right, Style::default().fg(app.colors.muted)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_landing(frame: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(Span::styled(
            "Discover Your AI Readiness Archetype",
            app.colors.title_style,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Answer a short set of questions on hustle, mindset and ethics.",
            Style::default().fg(app.colors.muted),
        )),
        Line::from(Span::styled(
            "Get your archetype, a skills radar and a shareable certificate.",
            Style::default().fg(app.colors.muted),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Your name: ", Style::default().fg(app.colors.accent).bold()),
            Span::raw(format!("{}|", app.name)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: start   Esc: quit",
            Style::default().fg(app.colors.muted),
        )),
    ];

    let box_area = centered_rect_fixed(70, lines.len() as u16 + 2, area);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(Style::default().fg(app.colors.accent)));
    frame.render_widget(paragraph, box_area);
}

fn render_quiz(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let Some(question) = session.current() else {
        return;
    };
    let (answered, total) = session.progress();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Question i of n / % Complete
        Constraint::Length(1), // Gauge
        Constraint::Length(1),
        Constraint::Min(3),    // Question text
        Constraint::Length(question.options.len() as u16 * 2),
        Constraint::Fill(1),
    ])
    .split(area.inner(Margin::new(2, 1)));

    let left = format!("Question {} of {}", answered + 1, total);
    let right = format!("{}% Complete", session.percent_complete());
    let padding = (chunks[0].width as usize).saturating_sub(left.len() + right.len());
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(left, Style::default().fg(app.colors.muted)),
            Span::raw(" ".repeat(padding)),
            Span::styled(right, Style::default().fg(app.colors.accent)),
        ])),
        chunks[0],
    );

    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(app.colors.gauge_filled)
                .bg(app.colors.gauge_empty),
        )
        .percent(session.percent_complete().min(100))
        .label("");
    frame.render_widget(gauge, chunks[1]);

    frame.render_widget(
        Paragraph::new(question.text.as_ref())
            .style(Style::default().fg(app.colors.text).bold())
            .wrap(Wrap { trim: true }),
        chunks[3],
    );

    let option_lines: Vec<Line> = question
        .options
        .iter()
        .enumerate()
        .flat_map(|(i, option)| {
            let line = if i == app.selected_option {
                Line::from(Span::styled(
                    format!(" {}. {} ", i + 1, option.text),
                    app.colors.option_selected,
                ))
            } else {
                Line::from(vec![
                    Span::styled(format!(" {}.", i + 1), Style::default().fg(app.colors.option_key)),
                    Span::raw(format!(" {}", option.text)),
                ])
            };
            [line, Line::from("")]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(option_lines).wrap(Wrap { trim: false }),
        chunks[4],
    );
}

fn render_analyzing(frame: &mut Frame, area: Rect, app: &App) {
    let popup = centered_rect_fixed(44, 5, area);
    let spinner = SPINNER[app.spinner_frame % SPINNER.len()];
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)])
        .split(Block::bordered().inner(popup));

    frame.render_widget(
        Block::bordered().border_style(Style::default().fg(app.colors.accent)),
        popup,
    );
    frame.render_widget(
        Paragraph::new(format!("{} Analyzing your AI-Q profile...", spinner))
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.colors.accent)),
        chunks[0],
    );
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(app.colors.gauge_filled).bg(app.colors.gauge_empty))
        .ratio(app.analysis_progress().clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, chunks[1]);
}

fn render_result(frame: &mut Frame, area: Rect, app: &App) {
    let Some(result) = app.result.as_ref() else {
        return;
    };

    let columns = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area.inner(Margin::new(1, 0)));

    let mut lines = vec![
        Line::from(Span::styled("Your AI-Q Archetype", Style::default().fg(app.colors.muted))),
        Line::from(Span::styled(result.title.clone(), app.colors.archetype_title)),
        Line::from(Span::styled(
            result.definition.clone(),
            Style::default().fg(app.colors.muted).italic(),
        )),
        Line::from(""),
        Line::from(
            result
                .tags
                .iter()
                .flat_map(|tag| {
                    [
                        Span::styled(format!("[{}]", tag), Style::default().fg(app.colors.tag_color)),
                        Span::raw(" "),
                    ]
                })
                .collect::<Vec<_>>(),
        ),
        Line::from(""),
        Line::from(Span::styled(
            result.description.clone(),
            Style::default().fg(app.colors.text),
        )),
    ];
    if let Some((first, last)) = result.highlighted_dimensions() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("You excel in "),
            Span::styled(first.label, Style::default().fg(app.colors.accent).bold()),
            Span::raw(" and "),
            Span::styled(last.label, Style::default().fg(app.colors.accent).bold()),
            Span::raw("."),
        ]));
    }
    if let Some(path) = &app.last_export {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Certificate: {}", path.display()),
            Style::default().fg(app.colors.muted),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        columns[0],
    );
    render_radar(frame, columns[1], app, &result.dimension_scores);
}

fn render_radar(frame: &mut Frame, area: Rect, app: &App, scores: &[DimensionScore]) {
    let count = scores.len();
    if count < 3 {
        return;
    }
    let center = Point::new(0.0, 0.0);
    let radius = 100.0;
    let grid = app.colors.radar_grid;
    let shape_color = app.colors.radar_shape;
    let label_color = app.colors.radar_label;

    let canvas = Canvas::default()
        .block(Block::bordered().title(" Skills Radar "))
        .marker(Marker::Braille)
        .x_bounds([-150.0, 150.0])
        .y_bounds([-130.0, 130.0])
        .paint(move |ctx| {
            for level in RING_LEVELS {
                draw_polygon(ctx, &radar::ring(count, level, center, radius), grid);
            }
            for end in radar::axis_ends(count, center, radius) {
                ctx.draw(&CanvasLine::new(center.x, -center.y, end.x, -end.y, grid));
            }
            ctx.layer();
            draw_polygon(ctx, &radar::radar_points(scores, center, radius), shape_color);
            for (score, at) in scores.iter().zip(radar::label_positions(count, center, radius)) {
                let x = if at.x < -1.0 {
                    at.x - score.label.len() as f64 * 4.0
                } else if at.x.abs() <= 1.0 {
                    at.x - score.label.len() as f64 * 2.0
                } else {
                    at.x
                };
                ctx.print(
                    x,
                    -at.y,
                    Span::styled(
                        format!("{} {:.0}", score.label, score.value),
                        Style::default().fg(label_color),
                    ),
                );
            }
        });
    frame.render_widget(canvas, area);
}

/// Closed polygon; radar geometry is y-down, the canvas is y-up.
fn draw_polygon(ctx: &mut ratatui::widgets::canvas::Context, points: &[Point], color: Color) {
    for (i, from) in points.iter().enumerate() {
        let to = points[(i + 1) % points.len()];
        ctx.draw(&CanvasLine::new(from.x, -from.y, to.x, -to.y, color));
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = if let Some((ref msg, _)) = app.flash_message {
        let msg_color = if msg.starts_with("Failed") || msg.starts_with("Error") {
            app.colors.flash_error
        } else if msg.starts_with("Saved") || msg.starts_with("Opened") {
            app.colors.flash_success
        } else {
            app.colors.text
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let hints: &[(&str, &str)] = match app.step {
            Step::Landing => &[("Enter", ":start "), ("Esc", ":quit")],
            Step::Quiz => &[
                ("1-4", ":answer "),
                ("j/k", ":move "),
                ("Enter", ":choose "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
            Step::Analyzing => &[("q", ":quit")],
            Step::Result => &[
                ("w", ":WhatsApp "),
                ("l", ":LinkedIn "),
                ("d", ":certificate "),
                ("r", ":retake "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
        };

        let mut spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(app.colors.status_key_color)));
            spans.push(Span::raw(*label));
        }
        if app.is_exporting {
            spans.push(Span::styled("  exporting...", Style::default().fg(app.colors.muted)));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(app.colors.status_bar_bg)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

fn render_name_required_popup(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect_fixed(44, 5, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(Span::styled(" Name Required ", app.colors.popup_title))
        .border_style(Style::default().fg(app.colors.popup_border))
        .style(Style::default().bg(app.colors.popup_bg));
    let text = vec![
        Line::from("Please enter your name to continue."),
        Line::from(Span::styled(
            "Press any key",
            Style::default().fg(app.colors.muted),
        )),
    ];
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).block(block),
        popup_area,
    );
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect_fixed(50, 16, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(Span::styled(" Keyboard Shortcuts ", app.colors.popup_title))
        .border_style(Style::default().fg(app.colors.popup_border))
        .style(Style::default().bg(app.colors.popup_bg));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().fg(app.colors.status_key_color).bold();
    let rows = [
        ("1-4           ", "Answer with that option"),
        ("j / Down      ", "Next option"),
        ("k / Up        ", "Previous option"),
        ("Enter         ", "Choose highlighted option"),
        ("w             ", "Share on WhatsApp"),
        ("l             ", "Share on LinkedIn"),
        ("d             ", "Download certificate"),
        ("r             ", "Retake the assessment"),
        ("?             ", "Show/hide this help"),
        ("q / Ctrl-c    ", "Quit"),
    ];
    let mut help_lines: Vec<Line> = rows
        .iter()
        .map(|(key, action)| Line::from(vec![Span::styled(*key, key_style), Span::raw(*action)]))
        .collect();
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(app.colors.muted),
    )));

    frame.render_widget(Paragraph::new(help_lines), inner);
}
