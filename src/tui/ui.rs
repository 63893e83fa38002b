//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Cell, GameStatus, Mark, Mode, Position, Snapshot};

const PLAYER_X: Color = Color::Blue;
const PLAYER_O: Color = Color::Yellow;
const DRAW: Color = Color::Gray;

/// Renders one frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let snap = app.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(4), // Status + score
            Constraint::Length(1), // Mode picker
            Constraint::Min(9),    // Board
            Constraint::Length(2), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_status(frame, chunks[1], &snap, app.notice());
    draw_mode_picker(frame, chunks[2], snap.mode);
    draw_board(frame, chunks[3], &snap, app.cursor());
    draw_help(frame, chunks[4], &snap);
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => PLAYER_X,
        Mark::O => PLAYER_O,
    }
}

fn draw_status(frame: &mut Frame, area: Rect, snap: &Snapshot, notice: Option<&str>) {
    let color = match snap.status {
        GameStatus::Draw => DRAW,
        GameStatus::Won { mark, .. } => mark_color(mark),
        GameStatus::InProgress => mark_color(snap.turn),
    };

    let headline = Line::from(Span::styled(
        snap.headline(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));

    let score = Line::from(vec![
        Span::styled(format!("X {}", snap.score.wins(Mark::X)), Style::default().fg(PLAYER_X)),
        Span::styled("  |  ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("O {}", snap.score.wins(Mark::O)), Style::default().fg(PLAYER_O)),
        Span::styled("  |  ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("Draw {}", snap.score.draws()), Style::default().fg(DRAW)),
    ]);

    let mut lines = vec![headline, score];
    if let Some(notice) = notice {
        lines.push(Line::from(Span::styled(notice.to_string(), Style::default().fg(Color::Red))));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));
    frame.render_widget(paragraph, area);
}

fn draw_mode_picker(frame: &mut Frame, area: Rect, active: Mode) {
    let option = |mode: Mode, key: char| {
        let style = if mode == active {
            Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(format!(" [{}] {} ", key, mode.label()), style)
    };

    let line = Line::from(vec![
        option(Mode::SinglePlayer, 'c'),
        Span::raw("   "),
        option(Mode::LocalMultiplayer, 'f'),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_board(frame: &mut Frame, area: Rect, snap: &Snapshot, cursor: Position) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], snap, cursor, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, snap: &Snapshot, cursor: Position, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_index(row * 3 + col) {
            draw_cell(frame, cols[col * 2], snap, cursor, pos);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, snap: &Snapshot, cursor: Position, pos: Position) {
    let index = pos.to_index();
    let winning = snap.winning_line().is_some_and(|line| line.contains(&index));

    let (symbol, base_style) = match snap.board.get(index) {
        Some(Cell::Occupied(mark)) => (
            format!(" {} ", mark),
            Style::default().fg(mark_color(mark)).add_modifier(Modifier::BOLD),
        ),
        _ => (format!(" {} ", index + 1), Style::default().fg(Color::DarkGray)),
    };

    let style = if winning {
        base_style.bg(Color::LightYellow).fg(Color::Black)
    } else if pos == cursor && snap.accepts_clicks() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![Line::raw(""), Line::from(Span::styled(symbol, style))])
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_help(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    let text = if snap.status.is_terminal() {
        "Press 'p' to play again  |  x: clear score  |  q: quit"
    } else {
        "Arrows + Enter or 1-9: play  |  m: mode  |  r: restart  |  x: clear score  |  q: quit"
    };
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::raw("│"), Line::raw("│"), Line::raw("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
