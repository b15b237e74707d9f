//! Play command implementation - Interactive TUI game.

// TUI drawing uses intentional casts for pixel-to-cell mapping
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless
)]

use super::{CliError, seed_or_clock};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use slide48::game::BOARD_PX;
use slide48::{Direction, Game, MoveSession, Tile};
use std::io::stdout;
use std::time::Duration;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the TUI fails.
pub(crate) fn execute(seed: Option<u64>, fps: u64) -> Result<(), CliError> {
    let seed = seed_or_clock(seed);
    let frame_ms = 1000 / fps.clamp(1, 240);
    run_tui(seed, frame_ms)
}

/// App state for the TUI.
struct App {
    game: Game,
    /// In-flight move animation; input is dropped while this is live.
    session: Option<MoveSession>,
    seed: u64,
}

impl App {
    fn new(seed: u64) -> Self {
        Self {
            game: Game::new(seed),
            session: None,
            seed,
        }
    }

    /// Advance the in-flight move by one animation step, committing the
    /// move once it settles.
    fn tick(&mut self) {
        let settled = match self.session.as_mut() {
            Some(session) => !session.step(),
            None => false,
        };
        if settled
            && let Some(session) = self.session.take()
        {
            self.game.commit(session);
        }
    }

    /// Submit a directional command. Dropped while a move is animating or
    /// once the game is over.
    fn submit(&mut self, direction: Direction) {
        if self.session.is_none() && !self.game.is_over() {
            self.session = Some(self.game.begin_shift(direction));
        }
    }

    fn restart(&mut self) {
        self.seed = self.seed.wrapping_add(1);
        self.game = Game::new(self.seed);
        self.session = None;
    }
}

fn run_tui(seed: u64, frame_ms: u64) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    let mut app = App::new(seed);

    loop {
        // Draw
        terminal
            .draw(|f| ui(f, &app))
            .map_err(|e| CliError::new(e.to_string()))?;

        // Advance any in-flight move by one step per frame
        app.tick();

        // Handle input, paced to the frame rate
        if event::poll(Duration::from_millis(frame_ms)).map_err(|e| CliError::new(e.to_string()))?
            && let Event::Key(key) = event::read().map_err(|e| CliError::new(e.to_string()))?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('r') => app.restart(),
                KeyCode::Up | KeyCode::Char('w' | 'k') => app.submit(Direction::Up),
                KeyCode::Down | KeyCode::Char('s' | 'j') => app.submit(Direction::Down),
                KeyCode::Left | KeyCode::Char('a' | 'h') => app.submit(Direction::Left),
                KeyCode::Right | KeyCode::Char('d' | 'l') => app.submit(Direction::Right),
                _ => {}
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_board(f, chunks[1], app);
    render_footer(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let status = if app.game.is_over() {
        "GAME OVER"
    } else if app.session.is_some() {
        "SLIDING"
    } else if app.game.is_won() {
        "2048! KEEP GOING"
    } else {
        "PLAYING"
    };

    let title = format!(
        " 2048 | Score: {} | Moves: {} | {} | Seed: {} ",
        app.game.score(),
        app.game.moves(),
        status,
        app.seed
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

/// Grid background, doubling as the lines between cells.
const GRID_BG: Color = Color::Rgb(187, 173, 160);

/// Text color on tiles.
const TILE_FG: Color = Color::Rgb(119, 110, 101);

fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title(" Board ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 8 || inner.height < 4 {
        return;
    }

    let buf = f.buffer_mut();

    // Background fill: visible between and behind tiles.
    for y in inner.top()..inner.bottom() {
        for x in inner.left()..inner.right() {
            buf[(x, y)].set_symbol(" ").set_bg(GRID_BG);
        }
    }

    // Tiles render at their pixel positions, so mid-move frames show them
    // sliding between cells.
    let draw = |buf: &mut ratatui::buffer::Buffer, tile: &Tile| {
        let tile_w = (u32::from(inner.width) / 4).max(1) as u16;
        let tile_h = (u32::from(inner.height) / 4).max(1) as u16;
        let sx = inner.x + (tile.x as u32 * u32::from(inner.width) / BOARD_PX as u32) as u16;
        let sy = inner.y + (tile.y as u32 * u32::from(inner.height) / BOARD_PX as u32) as u16;

        let (r, g, b) = tile.color();
        let bg = Color::Rgb(r, g, b);

        // Leave a one-cell gutter on the right/bottom so the grid shows.
        let w = tile_w.saturating_sub(1).max(1);
        let h = tile_h.saturating_sub(1).max(1);
        for dy in 0..h {
            for dx in 0..w {
                let (px, py) = (sx + dx, sy + dy);
                if px < inner.right() && py < inner.bottom() {
                    buf[(px, py)].set_symbol(" ").set_bg(bg);
                }
            }
        }

        let label = tile.value.to_string();
        let label_len = label.len() as u16;
        if label_len <= w {
            let lx = sx + (w - label_len) / 2;
            let ly = sy + h / 2;
            if lx + label_len <= inner.right() && ly < inner.bottom() {
                buf.set_string(lx, ly, &label, Style::default().fg(TILE_FG).bg(bg));
            }
        }
    };

    match &app.session {
        Some(session) => {
            for tile in session.tiles() {
                draw(buf, tile);
            }
        }
        None => {
            for tile in app.game.board().tiles() {
                draw(buf, tile);
            }
        }
    }
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let controls = if app.game.is_over() {
        " [q] Quit  [r] New game "
    } else {
        " [arrows/wasd/hjkl] Slide  [q] Quit  [r] New game "
    };

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}
