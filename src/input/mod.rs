pub mod events;
pub mod handler;

// Re-export the essential types
pub use events::{EventHandled, InputEvent, KeyCode, KeyModifiers};
pub use handler::{Session, TriggerOutcome};
