// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Tasks kommunizieren über einen Embassy Channel (Buttons/Timer → Lights).

pub mod buttons;
pub mod lights;

// Re-export Tasks für einfachen Import
pub use buttons::{auto_cycle_task, button_task};
pub use lights::lights_task;
