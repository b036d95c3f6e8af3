//! Crossterm-backed collaborators for the game loop

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::GameError;
use crate::game::{Direction, InputSource, RenderSink, StopSignal};
use crate::world::Grid;
use super::widgets::{CaveView, TooSmallNotice};

/// What a key press means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Hand this token to the loop
    Token(char),
    /// Stop the loop
    Quit,
    /// Nothing to do
    None,
}

/// Map a key press to an action. Arrow keys become their `wasd` tokens.
pub fn translate_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Up => KeyAction::Token(Direction::Up.token()),
        KeyCode::Down => KeyAction::Token(Direction::Down.token()),
        KeyCode::Left => KeyAction::Token(Direction::Left.token()),
        KeyCode::Right => KeyAction::Token(Direction::Right.token()),
        KeyCode::Char(c) => KeyAction::Token(c),
        _ => KeyAction::None,
    }
}

/// Keyboard input polled without blocking
pub struct KeyboardInput {
    stop: StopSignal,
}

impl KeyboardInput {
    /// Quit keys raise `stop`
    pub fn new(stop: StopSignal) -> Self {
        Self { stop }
    }
}

impl InputSource for KeyboardInput {
    fn has_input(&mut self) -> Result<bool, GameError> {
        Ok(event::poll(Duration::ZERO)?)
    }

    fn next_token(&mut self) -> Result<Option<char>, GameError> {
        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };
        // Only handle key press events, not releases
        if key.kind != KeyEventKind::Press {
            return Ok(None);
        }

        match translate_key(key) {
            KeyAction::Token(c) => Ok(Some(c)),
            KeyAction::Quit => {
                log::info!("Quit requested");
                self.stop.request_stop();
                Ok(None)
            }
            KeyAction::None => Ok(None),
        }
    }
}

/// Full-screen renderer on the alternate screen
pub struct TerminalRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Whether the last frame had room for the whole map
    fitted: bool,
}

impl TerminalRenderer {
    /// Enter raw mode and the alternate screen
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal, fitted: true })
    }

    /// Leave the alternate screen and give the terminal back
    pub fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()
    }
}

impl RenderSink for TerminalRenderer {
    fn render(&mut self, grid: &Grid) -> Result<(), GameError> {
        let mut fits = true;
        self.terminal.draw(|frame| {
            let area = frame.area();
            fits = CaveView::fits(grid, area);
            if fits {
                frame.render_widget(CaveView::new(grid), area);
            } else {
                let needed = CaveView::required_size(grid);
                frame.render_widget(TooSmallNotice { needed }, area);
            }
        })?;

        if fits != self.fitted {
            if fits {
                log::info!("Terminal resized; map fits again");
            } else {
                let (width, height) = CaveView::required_size(grid);
                log::warn!("Terminal too small for the map, need {}x{}", width, height);
            }
            self.fitted = fits;
        }
        Ok(())
    }
}
