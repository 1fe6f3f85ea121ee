// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Pin-Belegung (STOP:bit am micro:bit v2 Edge-Connector):
//   P0 (P0_02) → Rot, P1 (P0_03) → Gelb, P2 (P0_04) → Grün
//   Button A (P0_14) → nächstes Pattern, Button B (P0_23) → vorheriges Pattern

use disco_core::Polarity;

// ============================================================================
// Lichtsteuerung
// ============================================================================

/// Tick-Periode der Lichtsteuerung in Millisekunden
/// Wird zur Build-Zeit aus DISCO_TICK_MS geladen (Default: 20)
pub const TICK_PERIOD_MS: u64 = parse_u64(env!("DISCO_TICK_MS"));

/// Pattern nach dem Start
/// Wird zur Build-Zeit aus DISCO_DEFAULT_PATTERN geladen (Default: "disco")
pub const DEFAULT_PATTERN: &str = env!("DISCO_DEFAULT_PATTERN");

/// Polarität der Lampen-Ausgänge
/// STOP:bit schaltet die Lampen mit High
pub const LAMP_POLARITY: Polarity = Polarity::ActiveHigh;

/// Dauer pro Lampe beim Lampentest in Millisekunden
pub const SELF_TEST_STEP_MS: u64 = 300;

/// Alle wie viele Ticks eine Statistik geloggt wird (500 × 20 ms = 10 s)
pub const STATS_INTERVAL_TICKS: u32 = 500;

// ============================================================================
// Auslöser (Buttons, Timer)
// ============================================================================

/// Abtast-Intervall der Buttons in Millisekunden
pub const BUTTON_POLL_MS: u64 = 10;

/// Gleiche Abtastungen in Folge, bis ein Tastendruck zählt (3 × 10 ms = 30 ms)
pub const BUTTON_DEBOUNCE_SAMPLES: u8 = 3;

/// Automatischer Pattern-Wechsel in Sekunden (0 = aus)
/// Wird zur Build-Zeit aus DISCO_AUTO_CYCLE_SECS geladen
pub const AUTO_CYCLE_SECS: u64 = parse_u64(env!("DISCO_AUTO_CYCLE_SECS"));

/// Obergrenze für AUTO_CYCLE_SECS (ein Tag), gleiche Grenze wie in build.rs
pub const MAX_AUTO_CYCLE_SECS: u64 = 86_400;

/// Kapazität der Trigger-Queue (Buttons/Timer → Lights Task)
pub const TRIGGER_QUEUE_SIZE: usize = 4;

// Auch ohne build.rs-Prüfung (z.B. manuell gesetztes rustc-env) nicht übersetzbar
const _: () = assert!(TICK_PERIOD_MS >= 1 && TICK_PERIOD_MS <= 1000, "DISCO_TICK_MS out of range");
const _: () = assert!(AUTO_CYCLE_SECS <= MAX_AUTO_CYCLE_SECS, "DISCO_AUTO_CYCLE_SECS out of range");

// build.rs hat die Werte bereits geprüft
const fn parse_u64(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut value: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        assert!(bytes[i].is_ascii_digit(), "config value is not a number");
        value = value * 10 + (bytes[i] - b'0') as u64;
        i += 1;
    }
    value
}
