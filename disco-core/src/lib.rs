//! Disco Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Datenmodell, Traits, Pattern Engine und Mode Controller.
//! Einzige Schnittstelle zur Hardware ist `embedded-hal` (nur Traits).

#![no_std]

pub mod catalog;
pub mod controller;
pub mod driver;
pub mod engine;
pub mod logic;
pub mod patterns;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use catalog::{CatalogError, PatternCatalog, UnknownPatternId};
pub use controller::ModeController;
pub use driver::{PinLampDriver, Polarity};
pub use engine::{ActivePatternCursor, PatternEngine};
pub use logic::{Debouncer, Playhead, advance_playhead, elapsed_ms, self_test_vectors};
pub use traits::{HardwareFault, LampDriver};
pub use types::{
    ALL_OFF, Frame, LAMP_COUNT, Lamp, LampState, LampVector, Mode, Pattern, Sequence, Step,
    Trigger, lamps,
};
