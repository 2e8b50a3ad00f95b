use crate::config::AppConfig;
use crate::game::Action;
use crate::replay::ReplayDriver;
use crate::session::Session;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};

pub struct App {
    session: Session,
    replay: Option<ReplayDriver>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    tick_rate: Duration,
}

impl App {
    /// Build the app around a session, kicking off a replay if the share
    /// store holds a loaded game.
    pub fn new(mut session: Session, config: &AppConfig) -> Self {
        let replay = session.start_replay(Duration::from_millis(config.replay.delay_ms));
        App {
            session,
            replay,
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.step_replay();
            self.handle_events()?;
        }
        Ok(())
    }

    /// Advance an in-flight replay by at most one paced move.
    fn step_replay(&mut self) {
        let Some(driver) = &mut self.replay else {
            return;
        };

        if let Some(column) = driver.poll(Instant::now()) {
            self.session.dispatch(Action::Move {
                column,
                replay: true,
            });
        }

        if driver.is_cancelled() {
            self.replay = None;
        } else if driver.is_done() {
            self.session.finish_replay();
            self.replay = None;
            self.message = Some("Replay finished.".to_string());
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        // While replaying, wake up in time for the next paced move.
        let timeout = match &self.replay {
            Some(driver) => self.tick_rate.min(driver.time_to_next(Instant::now())),
            None => self.tick_rate,
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            if let Some(driver) = &self.replay {
                driver.cancel();
            }
            self.should_quit = true;
            return;
        }

        // User input is withheld while a replay populates the board.
        if self.session.is_locked() {
            return;
        }

        match key.code {
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < 6 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('u') => {
                if !self.session.undo() {
                    self.message = Some("Nothing to undo.".to_string());
                }
            }
            KeyCode::Char('y') => {
                if !self.session.redo() {
                    self.message = Some("Nothing to redo.".to_string());
                }
            }
            KeyCode::Char('r') => {
                self.session.reset();
                self.selected_column = 3;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.session.state().is_over() {
            self.message = Some("Game over! Undo or press 'r' to restart.".to_string());
            return;
        }

        if !self.session.drop_at(self.selected_column) {
            self.message = Some("Column is full!".to_string());
            return;
        }

        if self.session.state().is_over() {
            // The winner is whoever made the move just applied.
            let winner = self.session.state().current_player().other();
            self.message = Some(format!("{} wins!", winner.name()));
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.selected_column, &self.message);
    }
}
