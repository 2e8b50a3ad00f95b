//! Terminal UI: the event loop and the game view. Pure collaborator — it
//! only calls the session's action surface and reads derived view state.

mod app;
mod game_view;

pub use app::App;
