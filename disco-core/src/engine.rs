//! Pattern Engine
//!
//! Hält den Katalog und die aktuelle Abspielposition. Rechnet pro Tick den
//! nächsten Lampen-Vektor aus, ohne selbst auf Hardware zuzugreifen.

use crate::catalog::{PatternCatalog, UnknownPatternId};
use crate::logic::{Playhead, advance_playhead};
use crate::types::{ALL_OFF, LAMP_COUNT, Lamp, LampVector, Pattern, Sequence};

/// Aktives Pattern und Abspielposition
///
/// Frame-Patterns nutzen nur den ersten Playhead, Polyrhythmus-Patterns
/// einen Playhead pro Lampe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActivePatternCursor {
    pattern: usize,
    playheads: [Playhead; LAMP_COUNT],
}

impl ActivePatternCursor {
    fn start(pattern: usize) -> Self {
        Self {
            pattern,
            playheads: [Playhead::default(); LAMP_COUNT],
        }
    }

    /// Index des aktiven Patterns im Katalog
    pub fn pattern_index(&self) -> usize {
        self.pattern
    }

    pub fn frame_index(&self) -> usize {
        self.playheads[0].index
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.playheads[0].elapsed_ms
    }

    /// Position der Spur einer Lampe (nur bei Polyrhythmus-Patterns relevant)
    pub fn playhead(&self, lamp: Lamp) -> Playhead {
        self.playheads[lamp.index()]
    }
}

pub struct PatternEngine<'a> {
    catalog: PatternCatalog<'a>,
    cursor: Option<ActivePatternCursor>,
}

impl<'a> PatternEngine<'a> {
    /// Erstellt die Engine ohne aktives Pattern
    pub fn new(catalog: PatternCatalog<'a>) -> Self {
        Self {
            catalog,
            cursor: None,
        }
    }

    pub fn catalog(&self) -> &PatternCatalog<'a> {
        &self.catalog
    }

    pub fn cursor(&self) -> Option<&ActivePatternCursor> {
        self.cursor.as_ref()
    }

    pub fn active_pattern(&self) -> Option<Pattern<'a>> {
        self.cursor
            .and_then(|cursor| self.catalog.get(cursor.pattern).copied())
    }

    /// Wählt ein Pattern per Name und startet es bei Frame 0
    ///
    /// Bei unbekanntem Namen bleibt das aktuelle Pattern unverändert.
    pub fn select_pattern(&mut self, name: &str) -> Result<Pattern<'a>, UnknownPatternId> {
        let index = self.catalog.position(name).ok_or(UnknownPatternId)?;
        self.select_index(index)
    }

    /// Wählt ein Pattern per Katalog-Index und startet es bei Frame 0
    pub fn select_index(&mut self, index: usize) -> Result<Pattern<'a>, UnknownPatternId> {
        let pattern = *self.catalog.get(index).ok_or(UnknownPatternId)?;
        self.cursor = Some(ActivePatternCursor::start(index));
        Ok(pattern)
    }

    /// Nächstes Pattern in Katalog-Reihenfolge (ohne aktives Pattern: das erste)
    pub fn select_next(&mut self) -> Result<Pattern<'a>, UnknownPatternId> {
        let next = match self.cursor {
            Some(cursor) => (cursor.pattern + 1) % self.catalog.len(),
            None => 0,
        };
        self.select_index(next)
    }

    /// Vorheriges Pattern in Katalog-Reihenfolge (ohne aktives Pattern: das letzte)
    pub fn select_previous(&mut self) -> Result<Pattern<'a>, UnknownPatternId> {
        let len = self.catalog.len();
        let previous = match self.cursor {
            Some(cursor) => (cursor.pattern + len - 1) % len,
            None => len.saturating_sub(1),
        };
        self.select_index(previous)
    }

    /// Rückt das aktive Pattern um `delta_ms` vor und liefert den neuen Lampen-Vektor
    ///
    /// Ohne aktives Pattern sind alle Lampen aus.
    pub fn tick(&mut self, delta_ms: u32) -> LampVector {
        let Some(pattern) = self.active_pattern() else {
            return ALL_OFF;
        };
        let Some(cursor) = self.cursor.as_mut() else {
            return ALL_OFF;
        };

        match pattern.sequence {
            Sequence::Frames(frames) => {
                advance_playhead(&mut cursor.playheads[0], delta_ms, frames.len(), |i| {
                    frames[i].duration_ms
                });
            }
            Sequence::Tracks(tracks) => {
                for (playhead, track) in cursor.playheads.iter_mut().zip(tracks) {
                    advance_playhead(playhead, delta_ms, track.len(), |i| track[i].duration_ms);
                }
            }
        }

        self.current()
    }

    /// Lampen-Vektor an der aktuellen Position, ohne vorzurücken
    pub fn current(&self) -> LampVector {
        let (Some(cursor), Some(pattern)) = (self.cursor, self.active_pattern()) else {
            return ALL_OFF;
        };

        match pattern.sequence {
            Sequence::Frames(frames) => frames[cursor.playheads[0].index].lamps,
            Sequence::Tracks(tracks) => {
                let mut lamps = ALL_OFF;
                for lamp in Lamp::ALL {
                    let i = lamp.index();
                    lamps[i] = tracks[i][cursor.playheads[i].index].state;
                }
                lamps
            }
        }
    }
}
