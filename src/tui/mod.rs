//! Interactive table view of a ranked report.

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
};

use crate::domain::RankedResult;
use crate::fmt::text::display_duration;

/// TUI application state: the ranked rows plus table selection.
pub struct TableApp {
    pub results: Vec<RankedResult>,
    pub state: TableState,
    pub should_quit: bool,
}

impl TableApp {
    pub fn new(results: Vec<RankedResult>) -> Self {
        let mut state = TableState::default();
        if !results.is_empty() {
            state.select(Some(0));
        }
        Self {
            results,
            state,
            should_quit: false,
        }
    }

    fn select_next(&mut self) {
        if self.results.is_empty() {
            return;
        }
        let next = match self.state.selected() {
            Some(i) if i + 1 < self.results.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn select_previous(&mut self) {
        if self.results.is_empty() {
            return;
        }
        let prev = self.state.selected().map_or(0, |i| i.saturating_sub(1));
        self.state.select(Some(prev));
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            _ => {}
        }
    }
}

pub fn ui(frame: &mut Frame, app: &mut TableApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Results table
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    render_title(frame, chunks[0], app);
    render_table(frame, chunks[1], app);
    render_help(frame, chunks[2]);
}

fn render_title(frame: &mut Frame, area: Rect, app: &TableApp) {
    let title = Paragraph::new(format!("couchmark - {} servers, fastest first", app.results.len()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &mut TableApp) {
    let header = Row::new(vec!["RTT", "Server", "Description"]).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .results
        .iter()
        .map(|r| {
            Row::new(vec![
                display_duration(r.duration),
                r.server.clone(),
                r.description.clone(),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(24),
            Constraint::Min(25),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Results"))
    .row_highlight_style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    frame.render_stateful_widget(table, area, &mut app.state);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("q/Esc: Quit | Up/Down or j/k: Move")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

/// Run the TUI until the user quits.
pub fn run_tui(results: Vec<RankedResult>) -> io::Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = TableApp::new(results);
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TableApp,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(n: usize) -> TableApp {
        let results = (0..n)
            .map(|i| RankedResult {
                server: format!("s{i}"),
                description: format!("d{i}"),
                duration: Duration::from_millis(i as u64),
            })
            .collect();
        TableApp::new(results)
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut app = app_with(2);
        assert_eq!(app.state.selected(), Some(0));
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.state.selected(), Some(1));
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn quit_keys_flag_exit() {
        let mut app = app_with(1);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
