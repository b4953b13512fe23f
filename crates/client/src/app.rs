//! Application loop: input polling, intent dispatch, redraw.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;

use corridor_runtime::{GameSession, Intent};

use crate::ui;

enum KeyAction {
    Intent(Intent),
    Quit,
}

/// Keyboard bindings. Arrows and WASD both work.
fn keymap(code: KeyCode) -> Option<KeyAction> {
    match code {
        KeyCode::Left | KeyCode::Char('a') => Some(KeyAction::Intent(Intent::MoveLeft)),
        KeyCode::Right | KeyCode::Char('d') => Some(KeyAction::Intent(Intent::MoveRight)),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Enter => {
            Some(KeyAction::Intent(Intent::Interact))
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char(' ') => {
            Some(KeyAction::Intent(Intent::Attack))
        }
        KeyCode::Char('e') => Some(KeyAction::Intent(Intent::UseItem)),
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
        _ => None,
    }
}

pub struct App {
    session: GameSession,
    /// Transient message line; replaced on every processed intent.
    message: Option<String>,
    quit: bool,
}

impl App {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            message: None,
            quit: false,
        }
    }

    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.quit {
            terminal
                .draw(|frame| ui::render(frame, &self.session, self.message.as_deref()))?;
            self.poll_input()?;
        }
        Ok(())
    }

    fn poll_input(&mut self) -> Result<()> {
        if !event::poll(Duration::from_millis(100))? {
            return Ok(());
        }
        let Event::Key(key) = event::read()? else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        match keymap(key.code) {
            Some(KeyAction::Quit) => self.quit = true,
            Some(KeyAction::Intent(intent)) => {
                let report = self.session.step(intent)?;
                self.message = report.message;
            }
            None => {}
        }
        Ok(())
    }
}
