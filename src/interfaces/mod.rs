// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod mix_strategy;

pub use event_handler::{EventHandler, LoggingEventHandler, NoOpEventHandler, SolveEvent};
pub use mix_strategy::MixStrategy;
