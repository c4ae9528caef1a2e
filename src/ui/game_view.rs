use crate::game::{Board, Cell, GameStatus, Player, Snapshot, WinningLine};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::celebration::Confetti;

pub fn render(
    frame: &mut Frame,
    snapshot: &Snapshot,
    selected_column: usize,
    message: &Option<String>,
    confetti: &Confetti,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(15),  // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, snapshot, chunks[0]);
    render_board(
        frame,
        &snapshot.board,
        snapshot.status.winning_line(),
        selected_column,
        chunks[1],
    );
    render_message(frame, message, chunks[2]);
    render_controls(frame, snapshot.board.cols(), chunks[3]);
    render_confetti(frame.buffer_mut(), confetti);
}

/// Status text and color for the header.
pub fn status_text(status: &GameStatus) -> (&'static str, Color) {
    match status {
        GameStatus::AwaitingMove(Player::Red) => ("Your turn", Color::Red),
        GameStatus::AwaitingMove(Player::Yellow) => ("Computer thinking...", Color::Yellow),
        GameStatus::Won {
            winner: Player::Red,
            ..
        } => ("You win!", Color::Red),
        GameStatus::Won {
            winner: Player::Yellow,
            ..
        } => ("Computer wins!", Color::Yellow),
        GameStatus::Draw => ("It's a draw!", Color::Gray),
    }
}

fn render_header(frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let (status, color) = status_text(&snapshot.status);

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    winning_line: Option<&WinningLine>,
    selected_column: usize,
    area: Rect,
) {
    let cols = board.cols();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..cols {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(3 * cols + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..cols {
            let winning = winning_line.is_some_and(|line| line.contains(row, col));
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Red => (" ● ", Color::Red),
                Cell::Yellow => (" ● ", Color::Yellow),
            };
            let mut style = Style::default().fg(color);
            if winning {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, cols: usize, area: Rect) {
    let digits = if cols <= 9 {
        format!("1-{}: Drop  |  ", cols)
    } else {
        "1-9: Drop  |  ".to_string()
    };
    let line = Line::from(format!(
        "{digits}←/→ + Enter: Drop  |  R: Restart  |  Q: Quit"
    ));

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

/// Paint confetti over whatever has been drawn.
fn render_confetti(buf: &mut Buffer, confetti: &Confetti) {
    let area = buf.area;
    if area.width == 0 || area.height == 0 {
        return;
    }
    for particle in confetti.particles() {
        if !(0.0..1.0).contains(&particle.y) || !(0.0..1.0).contains(&particle.x) {
            continue;
        }
        let x = area.x + (particle.x * f64::from(area.width)) as u16;
        let y = area.y + (particle.y * f64::from(area.height)) as u16;
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(particle.glyph).set_fg(particle.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameController;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(snapshot: &Snapshot) -> Buffer {
        let backend = TestBackend::new(60, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render(f, snapshot, 3, &Some("hello".to_string()), &Confetti::with_seed(1)))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn contains(buf: &Buffer, needle: &str) -> bool {
        let area = buf.area;
        (0..area.height).any(|y| {
            let row: String = (0..area.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect();
            row.contains(needle)
        })
    }

    #[test]
    fn test_status_text() {
        assert_eq!(
            status_text(&GameStatus::AwaitingMove(Player::Red)).0,
            "Your turn"
        );
        assert_eq!(
            status_text(&GameStatus::AwaitingMove(Player::Yellow)).0,
            "Computer thinking..."
        );
        assert_eq!(status_text(&GameStatus::Draw).0, "It's a draw!");
    }

    #[test]
    fn test_renders_status_and_message() {
        let game = GameController::new_game(6, 7);
        let buf = draw(&game.snapshot());
        assert!(contains(&buf, "Your turn"));
        assert!(contains(&buf, "hello"));
        assert!(contains(&buf, "1-7: Drop"));
    }

    #[test]
    fn test_renders_win() {
        let mut game = GameController::new_game(6, 7);
        for col in [0, 6, 1, 5, 2, 6, 3] {
            game.apply_move(col).unwrap();
        }
        let buf = draw(&game.snapshot());
        assert!(contains(&buf, "You win!"));
    }
}
