//! Interactive game flow.
//!
//! Everything that talks to the player lives here. The session is generic
//! over its input and output so rounds can be scripted in tests.

pub mod help;
pub mod input;
pub mod session;

pub use help::{render_help_table, TableLayout};
pub use input::{parse_command, Command, InputError};
pub use session::{Session, SessionConfig, SessionError, SessionOutcome, SessionState};
