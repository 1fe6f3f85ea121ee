//! Core Types für die Lampen-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Anzahl der Lampen pro Signalkopf (Rot, Gelb, Grün)
pub const LAMP_COUNT: usize = 3;

/// Eine physische Lampe des STOP:bit Signalkopfs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lamp {
    Red,
    Amber,
    Green,
}

impl Lamp {
    /// Alle Lampen in Verdrahtungs-Reihenfolge (P0, P1, P2)
    pub const ALL: [Lamp; LAMP_COUNT] = [Lamp::Red, Lamp::Amber, Lamp::Green];

    /// Position der Lampe im [`LampVector`]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Helligkeit einer Lampe (0 = aus, 255 = volle Helligkeit)
///
/// Treiber ohne PWM nutzen nur [`LampState::is_lit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LampState(u8);

impl LampState {
    pub const OFF: Self = Self(0);
    pub const ON: Self = Self(u8::MAX);

    /// Ab dieser Helligkeit schaltet ein Ein/Aus-Treiber die Lampe ein
    pub const LIT_THRESHOLD: u8 = 128;

    pub const fn level(intensity: u8) -> Self {
        Self(intensity)
    }

    pub const fn intensity(self) -> u8 {
        self.0
    }

    pub const fn is_lit(self) -> bool {
        self.0 >= Self::LIT_THRESHOLD
    }
}

impl From<bool> for LampState {
    fn from(on: bool) -> Self {
        if on { Self::ON } else { Self::OFF }
    }
}

/// Zustand aller Lampen eines Signalkopfs, indiziert über [`Lamp::index`]
pub type LampVector = [LampState; LAMP_COUNT];

/// Alle Lampen aus
pub const ALL_OFF: LampVector = [LampState::OFF; LAMP_COUNT];

/// Baut einen Ein/Aus-Vektor (Reihenfolge: Rot, Gelb, Grün)
pub const fn lamps(red: bool, amber: bool, green: bool) -> LampVector {
    [on_off(red), on_off(amber), on_off(green)]
}

const fn on_off(on: bool) -> LampState {
    if on { LampState::ON } else { LampState::OFF }
}

/// Ein Frame: Lampen-Vektor, der für `duration_ms` gehalten wird
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub lamps: LampVector,
    pub duration_ms: u32,
}

impl Frame {
    pub const fn new(lamps: LampVector, duration_ms: u32) -> Self {
        Self { lamps, duration_ms }
    }
}

/// Ein Schritt in der Spur einer einzelnen Lampe (Polyrhythmus-Pattern)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub state: LampState,
    pub duration_ms: u32,
}

impl Step {
    pub const fn on(duration_ms: u32) -> Self {
        Self {
            state: LampState::ON,
            duration_ms,
        }
    }

    pub const fn off(duration_ms: u32) -> Self {
        Self {
            state: LampState::OFF,
            duration_ms,
        }
    }
}

/// Ablauf eines Patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequence<'a> {
    /// Frames nacheinander, alle Lampen schalten gemeinsam
    Frames(&'a [Frame]),
    /// Jede Lampe folgt ihrer eigenen Spur (Spuren dürfen unterschiedlich lang sein)
    Tracks([&'a [Step]; LAMP_COUNT]),
}

/// Ein benannter, endlos wiederholter Lichteffekt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern<'a> {
    pub name: &'a str,
    pub sequence: Sequence<'a>,
}

impl<'a> Pattern<'a> {
    pub const fn frames(name: &'a str, frames: &'a [Frame]) -> Self {
        Self {
            name,
            sequence: Sequence::Frames(frames),
        }
    }

    pub const fn tracks(name: &'a str, tracks: [&'a [Step]; LAMP_COUNT]) -> Self {
        Self {
            name,
            sequence: Sequence::Tracks(tracks),
        }
    }

    /// Anzahl der Frames (bei Polyrhythmus: Schritte der roten Spur)
    pub fn frame_count(&self) -> usize {
        match self.sequence {
            Sequence::Frames(frames) => frames.len(),
            Sequence::Tracks(tracks) => tracks[0].len(),
        }
    }
}

/// Betriebszustand des Mode Controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Noch kein Pattern ausgewählt, Lampen werden nicht angesteuert
    Idle,
    Running,
}

/// Externer Auslöser für einen Pattern-Wechsel
///
/// Wird von Button- und Timer-Tasks an den Lights-Task gesendet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger<'n> {
    /// Nächstes Pattern in Katalog-Reihenfolge (Button A)
    Next,
    /// Vorheriges Pattern (Button B)
    Previous,
    /// Pattern per Name auswählen
    Select(&'n str),
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LampState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "LampState({})", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Pattern<'_> {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Pattern {{ name: {}, frames: {} }}",
            self.name,
            self.frame_count()
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Trigger<'_> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Trigger::Next => defmt::write!(fmt, "Next"),
            Trigger::Previous => defmt::write!(fmt, "Previous"),
            Trigger::Select(name) => defmt::write!(fmt, "Select({})", name),
        }
    }
}
