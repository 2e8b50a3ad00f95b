//! The action surface the UI talks to: one session owning the authoritative
//! game state, the injected share store, and the replay lock.

use std::time::Duration;

use crate::game::{Action, GameState};
use crate::replay::ReplayDriver;
use crate::share::{self, ShareStore};

pub struct Session {
    state: GameState,
    share: Box<dyn ShareStore>,
    locked: bool,
}

impl Session {
    pub fn new(share: Box<dyn ShareStore>) -> Self {
        Session {
            state: GameState::initial(),
            share,
            locked: false,
        }
    }

    /// The current snapshot. Everything the UI renders derives from this
    /// plus `is_locked`.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// True while a replay is populating the state. The UI withholds input
    /// while set; the reducer itself never checks it.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Share code for the full current history, for display.
    pub fn share_code(&self) -> String {
        share::encode(self.state.history())
    }

    /// Run one transition. Publishes the new history on every accepted
    /// user-issued move and on reset; undo, redo, and replay moves leave the
    /// stored code untouched. Returns whether the state changed, so callers
    /// can tell a rejected transition from an applied one.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = self.state.apply(action);
        let changed = next != self.state;

        match action {
            Action::Move { replay: false, .. } if changed => {
                self.share.publish(next.history());
            }
            Action::Reset => self.share.publish(&[]),
            _ => {}
        }

        self.state = next;
        changed
    }

    pub fn drop_at(&mut self, column: usize) -> bool {
        self.dispatch(Action::Move {
            column,
            replay: false,
        })
    }

    pub fn undo(&mut self) -> bool {
        self.dispatch(Action::Undo)
    }

    pub fn redo(&mut self) -> bool {
        self.dispatch(Action::Redo)
    }

    pub fn reset(&mut self) -> bool {
        self.dispatch(Action::Reset)
    }

    /// Load the share store and, when it holds any moves, lock the session
    /// and hand back a driver to pace them in. `finish_replay` unlocks once
    /// the driver is drained.
    pub fn start_replay(&mut self, delay: Duration) -> Option<ReplayDriver> {
        let moves = self.share.load();
        if moves.is_empty() {
            return None;
        }
        self.locked = true;
        Some(ReplayDriver::new(moves, delay))
    }

    pub fn finish_replay(&mut self) {
        self.locked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;
    use crate::share::MemoryShare;

    // Peek at the store through the session's own load path.
    fn session_with_memory() -> Session {
        Session::new(Box::new(MemoryShare::new()))
    }

    #[test]
    fn test_moves_publish_history() {
        let mut session = session_with_memory();
        assert!(session.drop_at(3));
        assert!(session.drop_at(2));
        assert_eq!(session.share_code(), "32");
        assert_eq!(session.share.load(), vec![3, 2]);
    }

    #[test]
    fn test_rejected_move_publishes_nothing() {
        let mut session = session_with_memory();
        for _ in 0..6 {
            session.drop_at(0);
        }
        let before = session.share.load();
        assert!(!session.drop_at(0));
        assert_eq!(session.share.load(), before);
    }

    #[test]
    fn test_undo_redo_do_not_republish() {
        let mut session = session_with_memory();
        session.drop_at(3);
        session.drop_at(4);

        assert!(session.undo());
        assert_eq!(session.state.cursor(), 1);
        assert_eq!(session.share.load(), vec![3, 4]);

        assert!(session.redo());
        assert_eq!(session.share.load(), vec![3, 4]);
    }

    #[test]
    fn test_undo_at_start_is_a_noop() {
        let mut session = session_with_memory();
        assert!(!session.undo());
        assert!(!session.redo());
    }

    #[test]
    fn test_replay_moves_do_not_publish() {
        let mut session = Session::new(Box::new(MemoryShare::with_code("34")));
        session.dispatch(Action::Move {
            column: 3,
            replay: true,
        });
        // The stored code is still the loaded one, not a partial republish.
        assert_eq!(session.share.load(), vec![3, 4]);
    }

    #[test]
    fn test_reset_clears_state_and_share() {
        let mut session = session_with_memory();
        session.drop_at(3);
        session.drop_at(2);

        assert!(session.reset());
        assert_eq!(session.state(), &GameState::initial());
        assert_eq!(session.state().current_player(), Player::Red);
        assert!(session.share.load().is_empty());
        assert_eq!(session.share_code(), "");
    }

    #[test]
    fn test_lock_lifecycle() {
        let mut session = Session::new(Box::new(MemoryShare::with_code("33")));
        assert!(!session.is_locked());

        let driver = session.start_replay(Duration::ZERO).unwrap();
        assert!(session.is_locked());
        driver.run(&mut session);
        session.finish_replay();
        assert!(!session.is_locked());
    }
}
