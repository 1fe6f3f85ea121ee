// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von disco-core
pub use disco_core::{LampDriver, ModeController, PatternCatalog, Trigger};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::config::TRIGGER_QUEUE_SIZE;
use crate::hal::StopBitDriver;

// ============================================================================
// Type-Aliase
// ============================================================================
//
// Statt:  Sender<'static, NoopRawMutex, Trigger<'static>, 4>
// Nutze:  TriggerSender

/// Channel für Pattern-Auslöser (Buttons/Timer → Lights Task)
/// Alle Tasks laufen im selben Executor, daher reicht NoopRawMutex
pub type TriggerChannel = Channel<NoopRawMutex, Trigger<'static>, TRIGGER_QUEUE_SIZE>;

/// Sender für Pattern-Auslöser (Button- und Auto-Cycle-Tasks)
pub type TriggerSender = Sender<'static, NoopRawMutex, Trigger<'static>, TRIGGER_QUEUE_SIZE>;

/// Receiver für Pattern-Auslöser (Lights Task)
pub type TriggerReceiver = Receiver<'static, NoopRawMutex, Trigger<'static>, TRIGGER_QUEUE_SIZE>;

/// Mode Controller mit dem STOP:bit Treiber
pub type DiscoController = ModeController<'static, StopBitDriver>;
