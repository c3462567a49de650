use std::time::Duration;

use blockfall_engine::{GameSession, PieceSampler};
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::view::widgets::{KeyBinding, KeyBindingDisplay, SessionDisplay};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    MoveLeft,
    MoveRight,
    Drop,
    Rotate,
    NewGame,
    Quit,
}

impl Action {
    fn from_key_event(event: &KeyEvent) -> Option<Self> {
        match event.code {
            KeyCode::Left => Some(Self::MoveLeft),
            KeyCode::Right => Some(Self::MoveRight),
            KeyCode::Down => Some(Self::Drop),
            KeyCode::Char('r' | 'R') => Some(Self::Rotate),
            KeyCode::Char('n') => Some(Self::NewGame),
            KeyCode::Char('q') | KeyCode::Esc => Some(Self::Quit),
            _ => None,
        }
    }

    fn bindings() -> &'static [KeyBinding<'static>] {
        &[
            (&["←", "→"], "Move"),
            (&["↓"], "Drop"),
            (&["r"], "Rotate"),
            (&["n"], "New Game"),
            (&["q", "Esc"], "Quit"),
        ]
    }
}

#[derive(Debug)]
pub struct PlayScreen {
    session: GameSession,
    is_exiting: bool,
}

impl PlayScreen {
    pub fn new(drop_interval: Duration, sampler: PieceSampler) -> Self {
        Self {
            session: GameSession::with_sampler(drop_interval, sampler),
            is_exiting: false,
        }
    }

    pub fn should_exit(&self) -> bool {
        self.is_exiting
    }

    pub fn handle_event(&mut self, event: &Event) {
        if let Some(event) = event.as_key_event()
            && let Some(action) = Action::from_key_event(&event)
        {
            match action {
                Action::MoveLeft => _ = self.session.move_left(),
                Action::MoveRight => _ = self.session.move_right(),
                Action::Drop => _ = self.session.soft_drop(),
                Action::Rotate => _ = self.session.rotate(),
                Action::NewGame => self.session.restart(),
                Action::Quit => self.is_exiting = true,
            }
        }
    }

    pub fn update(&mut self, elapsed: Duration) {
        _ = self.session.on_tick(elapsed);
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let session_display = SessionDisplay::new(&self.session);
        let help = KeyBindingDisplay::new(Action::bindings());

        let [main_area, help_area] = Layout::vertical([
            Constraint::Length(session_display.height()),
            Constraint::Length(1),
        ])
        .areas::<2>(frame.area());
        frame.render_widget(session_display, main_area);
        frame.render_widget(help, help_area);
    }
}
