//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::types::{ALL_OFF, LAMP_COUNT, Lamp, LampState, LampVector};

/// Abspielposition innerhalb einer Frame-Liste oder Spur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Playhead {
    /// Aktueller Frame, nach `advance_playhead` immer `< len`
    pub index: usize,
    /// Verstrichene Zeit im aktuellen Frame, nach `advance_playhead` immer `< duration(index)`
    pub elapsed_ms: u32,
}

/// Rückt einen Playhead um `delta_ms` vor
///
/// Überschüssige Zeit wird in den nächsten Frame übernommen, damit sich bei
/// vielen kleinen Ticks kein Drift aufsummiert. Volle Zyklen werden vorab
/// per Modulo entfernt, auch aus einem von außen gesetzten `elapsed_ms`.
/// Damit bleibt die Rest-Zeit unter zwei Zyklen und die Schleife endet nach
/// höchstens `2 * len + 1` Durchläufen, egal welchen Playhead der Aufrufer
/// übergibt.
///
/// # Beispiele
///
/// ```
/// # use disco_core::logic::{Playhead, advance_playhead};
/// let durations = [500, 500];
/// let mut playhead = Playhead::default();
/// advance_playhead(&mut playhead, 600, durations.len(), |i| durations[i]);
/// assert_eq!(playhead, Playhead { index: 1, elapsed_ms: 100 });
/// ```
pub fn advance_playhead(
    playhead: &mut Playhead,
    delta_ms: u32,
    len: usize,
    duration_of: impl Fn(usize) -> u32,
) {
    if len == 0 {
        return;
    }
    let cycle_ms: u64 = (0..len).map(|i| u64::from(duration_of(i))).sum();
    if cycle_ms == 0 {
        return;
    }

    let mut index = playhead.index % len;
    let mut elapsed =
        u64::from(playhead.elapsed_ms) % cycle_ms + u64::from(delta_ms) % cycle_ms;

    loop {
        let duration = u64::from(duration_of(index));
        if elapsed < duration {
            break;
        }
        elapsed -= duration;
        index = (index + 1) % len;
    }

    playhead.index = index;
    // elapsed < duration(index) <= u32::MAX
    playhead.elapsed_ms = elapsed as u32;
}

/// Verstrichene Millisekunden zwischen zwei absoluten Zeitstempeln
///
/// Rückwärtslaufende Zeit ergibt 0, zu große Abstände werden auf
/// `u32::MAX` begrenzt.
pub fn elapsed_ms(last_ms: u64, now_ms: u64) -> u32 {
    u32::try_from(now_ms.saturating_sub(last_ms)).unwrap_or(u32::MAX)
}

/// Vektoren für den Lampentest beim Start
///
/// Jede Lampe einzeln an (Rot, Gelb, Grün), danach alle aus.
pub fn self_test_vectors() -> [LampVector; LAMP_COUNT + 1] {
    let mut vectors = [ALL_OFF; LAMP_COUNT + 1];
    for lamp in Lamp::ALL {
        vectors[lamp.index()][lamp.index()] = LampState::ON;
    }
    vectors
}

/// Entprellung für periodisch abgetastete Taster
///
/// Ein neuer Zustand gilt erst nach `samples` gleichen Abtastungen in Folge.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    pressed: bool,
    streak: u8,
    samples: u8,
}

impl Debouncer {
    pub const fn new(samples: u8) -> Self {
        Self {
            pressed: false,
            streak: 0,
            samples: if samples == 0 { 1 } else { samples },
        }
    }

    /// Neue Abtastung, `true` genau einmal pro Tastendruck
    pub fn update(&mut self, raw_pressed: bool) -> bool {
        if raw_pressed == self.pressed {
            self.streak = 0;
            return false;
        }

        self.streak = self.streak.saturating_add(1);
        if self.streak < self.samples {
            return false;
        }

        self.pressed = raw_pressed;
        self.streak = 0;
        raw_pressed
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}
