//! TUI rendering with ratatui
//!
//! Board, input row and session statistics for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Code, Color as Peg};
use crate::game::{MAX_ATTEMPTS, Outcome};
use crate::output::formatters::feedback_marks;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const PEG_GLYPH: &str = "●";
const EMPTY_GLYPH: &str = "○";

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Terminal colour for a peg
fn peg_color(peg: Peg) -> Color {
    match peg {
        Peg::Red => Color::Red,
        Peg::Blue => Color::Blue,
        Peg::Yellow => Color::Yellow,
        Peg::Green => Color::Green,
        Peg::Purple => Color::Magenta,
        Peg::Brown => Color::Rgb(150, 90, 40),
    }
}

fn peg_spans(pegs: &[Peg], length: usize) -> Vec<Span<'static>> {
    (0..length)
        .map(|i| match pegs.get(i) {
            Some(&peg) => Span::styled(
                format!("{PEG_GLYPH} "),
                Style::default().fg(peg_color(peg)).add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(
                format!("{EMPTY_GLYPH} "),
                Style::default().fg(Color::DarkGray),
            ),
        })
        .collect()
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND - Crack the Code")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let mut lines: Vec<Line> = history
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let (position, color) = feedback_marks(record.feedback);
            let mut spans = vec![Span::raw(format!("{:>2}: ", i + 1))];
            spans.extend(peg_spans(record.guess.pegs(), app.length));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(position, Style::default().fg(Color::White)));
            spans.push(Span::styled(color, Style::default().fg(Color::Gray)));
            Line::from(spans)
        })
        .collect();

    if let Some(Outcome::Lost(secret)) = app.outcome() {
        lines.push(Line::from(""));
        lines.push(secret_line(&secret, app.length));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn secret_line(secret: &Code, length: usize) -> Line<'static> {
    let mut spans = vec![Span::styled(
        "Code: ",
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )];
    spans.extend(peg_spans(secret.pegs(), length));
    Line::from(spans)
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(8), // Legend
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_legend(f, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let used = app.session.history().len();
    let percent = (used * 100 / MAX_ATTEMPTS).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses Used ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{MAX_ATTEMPTS}"));

    f.render_widget(gauge, area);
}

fn render_legend(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = Peg::ALL
        .iter()
        .enumerate()
        .map(|(i, &peg)| {
            Line::from(vec![
                Span::raw(format!(" {} / {}  ", i + 1, peg.key())),
                Span::styled(PEG_GLYPH, Style::default().fg(peg_color(peg))),
                Span::raw(format!(" {}", peg.name())),
            ])
        })
        .collect();

    let legend = Paragraph::new(lines).block(Block::default().title(" Keys ").borders(Borders::ALL));
    f.render_widget(legend, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Finished => (" Game over | 'n' new game, 'q' quit ", Color::Green),
        InputMode::Guessing => (
            " Your Guess | Enter submit, Backspace undo peg, ? hint, Esc give up ",
            Color::Yellow,
        ),
    };

    let content = match app.input_mode {
        InputMode::Guessing => Line::from(peg_spans(&app.input, app.length)),
        InputMode::Finished => Line::from(""),
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let config = app.session.config();
    let mode_text = format!(
        "Pegs: {} | Repeats: {}",
        config.length,
        if config.repeat_allowed { "on" } else { "off" }
    );
    f.render_widget(Paragraph::new(mode_text).alignment(Alignment::Center), chunks[0]);

    let stats = app.runner.stats();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        stats.games_played,
        stats.win_rate()
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let left_text = format!("Guesses left: {}", app.session.attempts_remaining());
    f.render_widget(Paragraph::new(left_text).alignment(Alignment::Center), chunks[2]);

    let help = Paragraph::new("q: Quit | Esc: Give up | ?: Hint")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionRunner;
    use crate::solver::StrategyType;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_board_and_status() {
        let mut app = App::new(SessionRunner::with_seed(0), 4, false, StrategyType::from_name("minimax"))
            .unwrap();
        app.input = vec![Peg::Red, Peg::Blue, Peg::Yellow, Peg::Green];
        app.submit().unwrap();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Board"));
        assert!(text.contains("Guesses left: 9"));
        assert!(text.contains("1/10"));
    }

    #[test]
    fn peg_spans_pad_missing_pegs() {
        let spans = peg_spans(&[Peg::Red], 3);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].content, format!("{EMPTY_GLYPH} "));
    }
}
