use std::io::stdout;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use liftline_core::model::MapState;
use liftline_core::views::{markers, path_overlay};
use liftline_protocol::{
    LineDash, RenderCommand, ResortMap, TextAlign, ThemeToken, Viewport,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const LIST_WIDTH: u16 = 34;
const DETAIL_HEIGHT: u16 = 5;

fn theme_to_color(token: ThemeToken) -> Color {
    match token {
        ThemeToken::LiftOpen => Color::Green,
        ThemeToken::LiftClosed => Color::Red,
        ThemeToken::LiftHold => Color::Yellow,
        ThemeToken::PathSelected => Color::LightBlue,
        ThemeToken::PathMuted => Color::DarkGray,
        ThemeToken::MarkerBorder => Color::Black,
        ThemeToken::MarkerGlyph => Color::Black,
        ThemeToken::BadgeBeginner => Color::Green,
        ThemeToken::BadgeIntermediate => Color::Blue,
        ThemeToken::BadgeAdvanced => Color::DarkGray,
        ThemeToken::SelectionHighlight => Color::Rgb(40, 70, 120),
        ThemeToken::HoverHighlight => Color::Rgb(40, 40, 55),
        ThemeToken::TextPrimary => Color::White,
        ThemeToken::TextSecondary => Color::Gray,
        ThemeToken::TextMuted => Color::DarkGray,
        ThemeToken::Background => Color::Black,
        ThemeToken::Border => Color::DarkGray,
        ThemeToken::ListRowEven => Color::Black,
        ThemeToken::ListRowOdd => Color::Rgb(16, 16, 22),
        ThemeToken::PanelBackground => Color::Rgb(20, 20, 28),
        ThemeToken::PanelBorder => Color::DarkGray,
    }
}

/// Run the interactive viewer: list cursor on the left (hover), map canvas
/// on the right, detail panel for the hovered lift underneath.
///
/// Up/Down move the hover cursor, Enter selects, q quits. Moving the
/// cursor only changes which detail panel shows — selection changes only
/// on Enter.
pub fn run(map: ResortMap) -> Result<()> {
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;

    let mut state = MapState::new(map);
    let mut cursor: usize = 0;

    loop {
        terminal.draw(|frame| draw(frame, &state, cursor))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Up | KeyCode::Char('k') => {
                        cursor = cursor.saturating_sub(1);
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        let max = state.map().len().saturating_sub(1);
                        cursor = (cursor + 1).min(max);
                    }
                    KeyCode::Enter => {
                        if let Some(lift) = state.map().lifts.get(cursor) {
                            let id = lift.id.clone();
                            state.select(&id);
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn draw(frame: &mut Frame<'_>, state: &MapState, cursor: usize) {
    let area = frame.area();
    if area.width < LIST_WIDTH + 10 || area.height < DETAIL_HEIGHT + 4 {
        return;
    }

    let header = Rect::new(area.x, area.y, area.width, 1);
    let body_y = area.y + 1;
    let body_h = area.height - 1;
    let list_area = Rect::new(area.x, body_y, LIST_WIDTH, body_h);
    let map_area = Rect::new(
        area.x + LIST_WIDTH,
        body_y,
        area.width - LIST_WIDTH,
        body_h - DETAIL_HEIGHT,
    );
    let detail_area = Rect::new(
        area.x + LIST_WIDTH,
        body_y + body_h - DETAIL_HEIGHT,
        area.width - LIST_WIDTH,
        DETAIL_HEIGHT,
    );

    draw_header(frame, header, state);
    draw_list(frame, list_area, state, cursor);
    draw_map(frame, map_area, state);
    draw_detail(frame, detail_area, state, cursor);
}

fn draw_header(frame: &mut Frame<'_>, area: Rect, state: &MapState) {
    let name = state
        .map()
        .meta
        .name
        .as_deref()
        .unwrap_or("resort map")
        .to_string();
    let header = Block::default()
        .title(format!(
            " liftline — {name} | ↑↓ browse | Enter select | q quit "
        ))
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));
    frame.render_widget(header, area);
}

fn draw_list(frame: &mut Frame<'_>, area: Rect, state: &MapState, cursor: usize) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let mut lines = Vec::with_capacity(state.map().len());

    for (i, lift) in state.map().lifts.iter().enumerate() {
        let dot = Span::styled("● ", Style::default().fg(theme_to_color(lift.status.token())));
        let pointer = if i == cursor { "▶" } else { " " };
        let wait = lift.wait_label();
        let name_width = inner_width.saturating_sub(wait.len() + 6);
        let name = format!(
            "{} {:<name_width$}",
            lift.kind.glyph(),
            truncated(&lift.name, name_width.saturating_sub(2)),
        );

        let mut style = Style::default().fg(theme_to_color(ThemeToken::TextPrimary));
        if state.is_selected(&lift.id) {
            style = style
                .bg(theme_to_color(ThemeToken::SelectionHighlight))
                .add_modifier(Modifier::BOLD);
        }

        lines.push(Line::from(vec![
            Span::raw(format!("{pointer} ")),
            dot,
            Span::styled(name, style),
            Span::styled(
                wait,
                Style::default().fg(theme_to_color(ThemeToken::TextMuted)),
            ),
        ]));
    }

    let list = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" lifts "));
    frame.render_widget(list, area);
}

fn draw_map(frame: &mut Frame<'_>, area: Rect, state: &MapState) {
    let block = Block::default().borders(Borders::ALL).title(" map ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let viewport = Viewport::new(f64::from(inner.width), f64::from(inner.height));
    let mut commands =
        path_overlay::render_path_overlay(state.map(), state.selected_id(), &viewport);
    commands.extend(markers::render_markers(
        state.map(),
        state.selected_id(),
        &viewport,
    ));

    plot_commands(frame, inner, &commands);
}

/// Plot render commands as terminal cells. Rect and group commands have no
/// cell representation here and are skipped.
fn plot_commands(frame: &mut Frame<'_>, area: Rect, commands: &[RenderCommand]) {
    for cmd in commands {
        match cmd {
            RenderCommand::DrawPolyline {
                points,
                color,
                width,
                dash,
                ..
            } => {
                let fg = theme_to_color(*color);
                let ch = if *width >= 3.5 { '█' } else { '·' };
                let mut step = 0_u32;
                for pair in points.windows(2) {
                    plot_segment(
                        pair[0].x,
                        pair[0].y,
                        pair[1].x,
                        pair[1].y,
                        |x, y, idx| {
                            let visible = *dash == LineDash::Solid || (idx / 2) % 2 == 0;
                            if visible {
                                put(frame, area, x, y, ch, Some(fg), None);
                            }
                        },
                        &mut step,
                    );
                }
            }
            RenderCommand::DrawCircle {
                center,
                radius,
                fill,
                ..
            } => {
                let bg = theme_to_color(*fill);
                let x = center.x.round() as i64;
                let y = center.y.round() as i64;
                // Enlarged (selected) markers widen into a three-cell pill.
                let reach = if *radius > markers::MARKER_RADIUS { 1 } else { 0 };
                for dx in -reach..=reach {
                    put(frame, area, x + dx, y, ' ', None, Some(bg));
                }
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                align,
                ..
            } => {
                let fg = theme_to_color(*color);
                let offset = match align {
                    TextAlign::Left => 0,
                    TextAlign::Center => text.chars().count() as i64 / 2,
                    TextAlign::Right => text.chars().count() as i64,
                };
                let y = position.y.round() as i64;
                let start = position.x.round() as i64 - offset;
                for (i, ch) in text.chars().enumerate() {
                    put(frame, area, start + i as i64, y, ch, Some(fg), None);
                }
            }
            _ => {}
        }
    }
}

/// Walk a segment cell by cell, invoking `visit` with a running step index.
fn plot_segment(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    mut visit: impl FnMut(i64, i64, u32),
    step: &mut u32,
) {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let len = dx.abs().max(dy.abs()).ceil().max(1.0);
    let n = len as u32;
    for i in 0..=n {
        let t = f64::from(i) / f64::from(n);
        let x = (x0 + dx * t).round() as i64;
        let y = (y0 + dy * t).round() as i64;
        visit(x, y, *step);
        *step += 1;
    }
}

/// Write one cell inside `area`, clipping out-of-range coordinates.
fn put(
    frame: &mut Frame<'_>,
    area: Rect,
    x: i64,
    y: i64,
    ch: char,
    fg: Option<Color>,
    bg: Option<Color>,
) {
    if x < 0 || y < 0 || x >= i64::from(area.width) || y >= i64::from(area.height) {
        return;
    }
    let cell_x = area.x + x as u16;
    let cell_y = area.y + y as u16;
    let buf = frame.buffer_mut();
    let cell = &mut buf[(cell_x, cell_y)];
    cell.set_char(ch);
    if let Some(fg) = fg {
        cell.set_fg(fg);
    }
    if let Some(bg) = bg {
        cell.set_bg(bg);
    }
}

fn draw_detail(frame: &mut Frame<'_>, area: Rect, state: &MapState, cursor: usize) {
    let Some(lift) = state.map().lifts.get(cursor) else {
        return;
    };

    let status_style = Style::default()
        .fg(Color::Black)
        .bg(theme_to_color(lift.status.token()));
    let difficulty_style = Style::default()
        .fg(Color::White)
        .bg(theme_to_color(lift.difficulty.token()));

    let lines = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", lift.status.label()), status_style),
            Span::raw(" "),
            Span::styled(format!(" {} ", lift.difficulty.label()), difficulty_style),
            Span::raw("  "),
            Span::styled(
                lift.kind.label(),
                Style::default().fg(theme_to_color(ThemeToken::TextSecondary)),
            ),
        ]),
        Line::from(Span::styled(
            lift.wait_label(),
            Style::default().fg(theme_to_color(ThemeToken::TextSecondary)),
        )),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", lift.name)),
    );
    frame.render_widget(panel, area);
}

fn truncated(name: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if name.chars().count() <= max {
        name.to_string()
    } else {
        let cut: String = name.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
