//! Mode Controller
//!
//! Verbindet Pattern Engine und Lampen-Treiber. Zustände: `Idle` bis zur
//! ersten Pattern-Auswahl, danach dauerhaft `Running`.

use crate::catalog::{PatternCatalog, UnknownPatternId};
use crate::engine::PatternEngine;
use crate::traits::{HardwareFault, LampDriver};
use crate::types::{ALL_OFF, LampVector, Mode, Pattern, Trigger};

pub struct ModeController<'a, D: LampDriver> {
    engine: PatternEngine<'a>,
    driver: D,
    mode: Mode,
    fault_count: u32,
    // Nach einem Pattern-Wechsel: nächster Tick zeigt Frame 0 ohne Vorrücken
    restart_pending: bool,
}

impl<'a, D: LampDriver> ModeController<'a, D> {
    /// Erstellt den Controller im Zustand `Idle`
    ///
    /// Der Treiber gehört ab hier exklusiv dem Controller.
    pub fn new(catalog: PatternCatalog<'a>, driver: D) -> Self {
        Self {
            engine: PatternEngine::new(catalog),
            driver,
            mode: Mode::Idle,
            fault_count: 0,
            restart_pending: false,
        }
    }

    /// Startet mit dem Default-Pattern (`Idle` → `Running`)
    pub fn start(&mut self, default_pattern: &str) -> Result<Pattern<'a>, UnknownPatternId> {
        self.trigger(Trigger::Select(default_pattern))
    }

    /// Wie `start`, bei unbekanntem Namen aber mit dem ersten Katalog-Pattern
    ///
    /// Liefert das gestartete Pattern und `true`, wenn ausgewichen wurde.
    /// Ein gültiger Katalog ist nie leer, der Fehlerfall tritt praktisch nicht auf.
    pub fn start_or_first(
        &mut self,
        default_pattern: &str,
    ) -> Result<(Pattern<'a>, bool), UnknownPatternId> {
        if let Ok(pattern) = self.start(default_pattern) {
            return Ok((pattern, false));
        }
        let pattern = self.engine.select_index(0)?;
        self.mode = Mode::Running;
        self.restart_pending = true;
        Ok((pattern, true))
    }

    /// Verarbeitet einen externen Auslöser (Button, Timer)
    ///
    /// Jeder Auslöser bewegt sich genau einen Schritt in Katalog-Reihenfolge.
    /// Bei Fehler läuft das bisherige Pattern unverändert weiter.
    pub fn trigger(&mut self, trigger: Trigger<'_>) -> Result<Pattern<'a>, UnknownPatternId> {
        let pattern = match trigger {
            Trigger::Next => self.engine.select_next()?,
            Trigger::Previous => self.engine.select_previous()?,
            Trigger::Select(name) => self.engine.select_pattern(name)?,
        };
        self.mode = Mode::Running;
        self.restart_pending = true;
        Ok(pattern)
    }

    /// Ein Scheduler-Tick: Engine vorrücken und Ergebnis auf die Lampen schreiben
    ///
    /// Der erste Tick nach einem Pattern-Wechsel rückt nicht vor: `delta_ms`
    /// ist vor dem Wechsel verstrichen und gehört nicht zum neuen Pattern.
    ///
    /// # Fehlerbehandlung
    /// Ein `HardwareFault` wird gezählt und zurückgegeben (Aufrufer loggt).
    /// Der nächste Tick schreibt wieder den aktuellen Zustand, es gibt
    /// keine dauerhafte Sperre.
    pub fn tick(&mut self, delta_ms: u32) -> Result<LampVector, HardwareFault> {
        if self.mode == Mode::Idle {
            return Ok(ALL_OFF);
        }

        let delta_ms = if self.restart_pending { 0 } else { delta_ms };
        self.restart_pending = false;

        let lamps = self.engine.tick(delta_ms);
        if let Err(fault) = self.driver.apply(&lamps) {
            self.fault_count = self.fault_count.wrapping_add(1);
            return Err(fault);
        }
        Ok(lamps)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn engine(&self) -> &PatternEngine<'a> {
        &self.engine
    }

    pub fn active_pattern(&self) -> Option<Pattern<'a>> {
        self.engine.active_pattern()
    }

    /// Anzahl fehlgeschlagener Schreibvorgänge seit dem Start
    pub fn fault_count(&self) -> u32 {
        self.fault_count
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}
