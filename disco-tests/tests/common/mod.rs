//! Gemeinsame Mocks für die Integration Tests
#![allow(dead_code)]

use core::convert::Infallible;

use disco_core::{HardwareFault, Lamp, LampDriver, LampVector};
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};

// ============================================================================
// Mock Lamp Driver
// ============================================================================

#[derive(Default)]
pub struct MockLampDriver {
    pub last_vector: Option<LampVector>,
    pub apply_count: usize,
    pub attempt_count: usize,
    pub fail_next_apply: bool,
}

impl MockLampDriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LampDriver for MockLampDriver {
    fn apply(&mut self, lamps: &LampVector) -> Result<(), HardwareFault> {
        self.attempt_count += 1;
        if self.fail_next_apply {
            self.fail_next_apply = false;
            return Err(HardwareFault { lamp: Lamp::Red });
        }

        self.last_vector = Some(*lamps);
        self.apply_count += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Output Pin
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinError;

impl embedded_hal::digital::Error for PinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

#[derive(Default)]
pub struct MockPin {
    pub high: bool,
    pub write_count: usize,
    pub broken: bool,
}

impl ErrorType for MockPin {
    type Error = PinError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.broken {
            return Err(PinError);
        }
        self.high = false;
        self.write_count += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.broken {
            return Err(PinError);
        }
        self.high = true;
        self.write_count += 1;
        Ok(())
    }
}

/// Pin ohne Fehlerfall (wie embassy-nrf `Output`)
#[derive(Default)]
pub struct InfalliblePin {
    pub high: bool,
}

impl ErrorType for InfalliblePin {
    type Error = Infallible;
}

impl OutputPin for InfalliblePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }
}
