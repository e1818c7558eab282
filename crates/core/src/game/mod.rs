//! Game flow: state, turn handling and move text

pub mod notation;
mod state;

pub use notation::{parse_command, Command, Move};
pub use state::GameState;
