//! Runtime Module
//!
//! Everything that is not deterministic: pacing, quit handling, process
//! settings and the input sources that feed the simulation.

pub mod session;
pub mod script;
pub mod settings;

pub use session::{
    GameSession, InputSource, Lifecycle, QuitSignal, SessionError, SessionSummary, StopReason,
};
pub use script::{ScriptError, ScriptedInput};
pub use settings::RunSettings;
