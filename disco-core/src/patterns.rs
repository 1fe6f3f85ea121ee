//! Eingebaute Lichteffekte
//!
//! Reihenfolge = Reihenfolge beim Durchschalten mit Button A.

use crate::catalog::{CatalogError, PatternCatalog};
use crate::types::{ALL_OFF, Frame, LampState, Pattern, Step, lamps};

/// Name des Default-Patterns nach dem Start
pub const DEFAULT_PATTERN: &str = "disco";

// Drei unabhängige Blink-Spuren unterschiedlicher Länge. Zusammen
// wiederholt sich das Bild erst nach mehreren Minuten.
const DISCO_RED: [Step; 10] = [
    Step::on(1000),
    Step::off(1200),
    Step::on(800),
    Step::off(300),
    Step::on(100),
    Step::off(100),
    Step::on(200),
    Step::off(200),
    Step::on(140),
    Step::off(134),
];

const DISCO_AMBER: [Step; 8] = [
    Step::on(800),
    Step::off(300),
    Step::on(330),
    Step::off(370),
    Step::on(550),
    Step::off(880),
    Step::on(123),
    Step::off(555),
];

const DISCO_GREEN: [Step; 13] = [
    Step::off(890),
    Step::on(990),
    Step::off(1111),
    Step::on(876),
    Step::off(345),
    Step::on(875),
    Step::off(432),
    Step::on(777),
    Step::off(321),
    Step::on(444),
    Step::off(1000),
    Step::on(100),
    Step::off(100),
];

const ALTERNATE: [Frame; 2] = [
    Frame::new(lamps(true, false, false), 500),
    Frame::new(lamps(false, false, true), 500),
];

const TRAFFIC: [Frame; 4] = [
    Frame::new(lamps(true, false, false), 3000),
    Frame::new(lamps(true, true, false), 1000),
    Frame::new(lamps(false, false, true), 3000),
    Frame::new(lamps(false, true, false), 1000),
];

const CHASE: [Frame; 3] = [
    Frame::new(lamps(true, false, false), 150),
    Frame::new(lamps(false, true, false), 150),
    Frame::new(lamps(false, false, true), 150),
];

const BOUNCE: [Frame; 4] = [
    Frame::new(lamps(true, false, false), 120),
    Frame::new(lamps(false, true, false), 120),
    Frame::new(lamps(false, false, true), 120),
    Frame::new(lamps(false, true, false), 120),
];

const STROBE: [Frame; 2] = [
    Frame::new(lamps(true, true, true), 40),
    Frame::new(ALL_OFF, 80),
];

const fn amber(intensity: u8) -> Frame {
    Frame::new(
        [LampState::OFF, LampState::level(intensity), LampState::OFF],
        80,
    )
}

// Helligkeitsrampe für dimmbare Treiber, Ein/Aus-Treiber blinken langsam
const BREATHE: [Frame; 12] = [
    amber(16),
    amber(48),
    amber(96),
    amber(160),
    amber(224),
    amber(255),
    amber(224),
    amber(160),
    amber(96),
    amber(48),
    amber(16),
    amber(0),
];

/// Alle eingebauten Patterns
pub static BUILTIN: [Pattern<'static>; 7] = [
    Pattern::tracks(DEFAULT_PATTERN, [&DISCO_RED, &DISCO_AMBER, &DISCO_GREEN]),
    Pattern::frames("alternate", &ALTERNATE),
    Pattern::frames("traffic", &TRAFFIC),
    Pattern::frames("chase", &CHASE),
    Pattern::frames("bounce", &BOUNCE),
    Pattern::frames("strobe", &STROBE),
    Pattern::frames("breathe", &BREATHE),
];

/// Katalog mit allen eingebauten Patterns
pub fn builtin() -> Result<PatternCatalog<'static>, CatalogError> {
    PatternCatalog::new(&BUILTIN)
}
