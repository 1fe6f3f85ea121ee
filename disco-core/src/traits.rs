//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use core::fmt;

use crate::types::{Lamp, LampVector};

/// Fehler-Typ für Lampen-Schreiboperationen
///
/// `lamp` ist die erste Lampe, deren Ausgang nicht geschrieben werden konnte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HardwareFault {
    pub lamp: Lamp,
}

impl fmt::Display for HardwareFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to write {:?} lamp output", self.lamp)
    }
}

impl core::error::Error for HardwareFault {}

/// Trait für den Zugriff auf die Lampen des Signalkopfs
///
/// Der Treiber besitzt die Ausgänge exklusiv, keine andere Komponente
/// schreibt direkt auf die Pins.
///
/// # Implementierungen
/// - **Production:** `PinLampDriver` (drei embedded-hal Output-Pins)
/// - **Testing:** `MockLampDriver` (in-memory Mock)
pub trait LampDriver {
    /// Schreibt den Zustand aller Lampen
    ///
    /// # Fehlerbehandlung
    /// Gibt `HardwareFault` zurück wenn ein Ausgang nicht geschrieben werden
    /// konnte. Die übrigen Lampen werden trotzdem geschrieben.
    fn apply(&mut self, lamps: &LampVector) -> Result<(), HardwareFault>;
}
