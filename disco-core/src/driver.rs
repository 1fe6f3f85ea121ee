//! Lampen-Treiber über embedded-hal Output-Pins
//!
//! Generisch über `OutputPin`, damit derselbe Code auf dem micro:bit
//! (embassy-nrf `Output`) und im Host-Test (Mock-Pin) läuft.

use embedded_hal::digital::{OutputPin, PinState};

use crate::traits::{HardwareFault, LampDriver};
use crate::types::{LAMP_COUNT, Lamp, LampVector};

/// Elektrische Polarität der Lampen-Ausgänge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// High = Lampe an (STOP:bit)
    #[default]
    ActiveHigh,
    /// Low = Lampe an (z.B. Relais-Module)
    ActiveLow,
}

/// Ein/Aus-Treiber für einen Signalkopf mit drei Pins
pub struct PinLampDriver<P> {
    pins: [P; LAMP_COUNT],
    polarity: Polarity,
}

impl<P: OutputPin> PinLampDriver<P> {
    pub fn new(red: P, amber: P, green: P, polarity: Polarity) -> Self {
        Self {
            pins: [red, amber, green],
            polarity,
        }
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Gibt die Pins wieder frei
    pub fn into_pins(self) -> [P; LAMP_COUNT] {
        self.pins
    }

    fn pin_state(&self, lit: bool) -> PinState {
        match self.polarity {
            Polarity::ActiveHigh => PinState::from(lit),
            Polarity::ActiveLow => PinState::from(!lit),
        }
    }
}

impl<P: OutputPin> LampDriver for PinLampDriver<P> {
    fn apply(&mut self, lamps: &LampVector) -> Result<(), HardwareFault> {
        let mut first_fault = None;

        for lamp in Lamp::ALL {
            let state = self.pin_state(lamps[lamp.index()].is_lit());
            if self.pins[lamp.index()].set_state(state).is_err() && first_fault.is_none() {
                first_fault = Some(HardwareFault { lamp });
            }
        }

        match first_fault {
            Some(fault) => Err(fault),
            None => Ok(()),
        }
    }
}
