//! Pattern-Katalog
//!
//! Wird beim Start einmal aufgebaut und danach nur noch gelesen.
//! Die Reihenfolge der Patterns bestimmt die Zyklus-Reihenfolge der Buttons.

use core::fmt;

use crate::types::{Pattern, Sequence};

/// Pattern-Name ist nicht im Katalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownPatternId;

impl fmt::Display for UnknownPatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown pattern id")
    }
}

impl core::error::Error for UnknownPatternId {}

/// Fehler beim Aufbau des Katalogs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CatalogError {
    /// Katalog enthält kein Pattern
    Empty,
    /// Zwei Patterns mit gleichem Namen
    DuplicateName,
    /// Pattern ohne Frames (oder Spur ohne Schritte)
    EmptySequence,
    /// Frame oder Schritt mit Dauer 0
    ZeroDuration,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            CatalogError::Empty => "catalog contains no patterns",
            CatalogError::DuplicateName => "duplicate pattern name",
            CatalogError::EmptySequence => "pattern without frames",
            CatalogError::ZeroDuration => "frame with zero duration",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for CatalogError {}

/// Geprüfte, unveränderliche Liste von Patterns
#[derive(Debug, Clone, Copy)]
pub struct PatternCatalog<'a> {
    patterns: &'a [Pattern<'a>],
}

impl<'a> PatternCatalog<'a> {
    /// Prüft die Patterns und baut den Katalog
    ///
    /// # Fehlerbehandlung
    /// Leerer Katalog, doppelte Namen, leere Sequenzen und Dauern von 0 werden
    /// abgelehnt. Damit kann die Pattern Engine später nie hängen bleiben.
    pub fn new(patterns: &'a [Pattern<'a>]) -> Result<Self, CatalogError> {
        if patterns.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, pattern) in patterns.iter().enumerate() {
            if patterns[..i].iter().any(|p| p.name == pattern.name) {
                return Err(CatalogError::DuplicateName);
            }
            validate(pattern)?;
        }
        Ok(Self { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Immer `false` für einen gültigen Katalog
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Pattern<'a>> {
        self.patterns.get(index)
    }

    /// Index eines Patterns in Katalog-Reihenfolge
    pub fn position(&self, name: &str) -> Option<usize> {
        self.patterns.iter().position(|p| p.name == name)
    }

    pub fn find(&self, name: &str) -> Option<&Pattern<'a>> {
        self.patterns.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> core::slice::Iter<'a, Pattern<'a>> {
        self.patterns.iter()
    }
}

fn validate(pattern: &Pattern<'_>) -> Result<(), CatalogError> {
    match pattern.sequence {
        Sequence::Frames(frames) => {
            if frames.is_empty() {
                return Err(CatalogError::EmptySequence);
            }
            if frames.iter().any(|f| f.duration_ms == 0) {
                return Err(CatalogError::ZeroDuration);
            }
        }
        Sequence::Tracks(tracks) => {
            for track in tracks {
                if track.is_empty() {
                    return Err(CatalogError::EmptySequence);
                }
                if track.iter().any(|s| s.duration_ms == 0) {
                    return Err(CatalogError::ZeroDuration);
                }
            }
        }
    }
    Ok(())
}
