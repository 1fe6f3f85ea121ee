// STOP:bit Lampen-Treiber
//
// Verbindet die nRF52833 GPIO-Ausgänge mit dem generischen PinLampDriver
// aus disco-core. Nur dieser Treiber schreibt auf die Lampen-Pins.

use disco_core::PinLampDriver;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pin, Pull};
use embassy_nrf::Peri;

use crate::config::LAMP_POLARITY;

/// Real Hardware Lamp Driver
///
/// embassy-nrf `Output` implementiert `embedded_hal::digital::OutputPin`
/// mit `Infallible` als Fehler-Typ.
pub type StopBitDriver = PinLampDriver<Output<'static>>;

/// Erstellt den Treiber für den Signalkopf
///
/// # Parameter
/// - `red`: P0 am Edge-Connector (P0_02)
/// - `amber`: P1 am Edge-Connector (P0_03)
/// - `green`: P2 am Edge-Connector (P0_04)
pub fn stopbit_driver(
    red: Peri<'static, impl Pin>,
    amber: Peri<'static, impl Pin>,
    green: Peri<'static, impl Pin>,
) -> StopBitDriver {
    // Alle Lampen starten aus, unabhängig von der Polarität
    let off = match LAMP_POLARITY {
        disco_core::Polarity::ActiveHigh => Level::Low,
        disco_core::Polarity::ActiveLow => Level::High,
    };

    PinLampDriver::new(
        Output::new(red, off, OutputDrive::Standard),
        Output::new(amber, off, OutputDrive::Standard),
        Output::new(green, off, OutputDrive::Standard),
        LAMP_POLARITY,
    )
}

/// micro:bit Button (externer Pull-Up auf dem Board, gedrückt = Low)
pub fn button(pin: Peri<'static, impl Pin>) -> Input<'static> {
    Input::new(pin, Pull::Up)
}
