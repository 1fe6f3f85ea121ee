// Lights Task - Spielt Patterns auf dem STOP:bit Signalkopf ab
use defmt::{debug, error, info, warn};
use embassy_time::{Duration, Instant, Ticker, Timer};

use crate::config::{DEFAULT_PATTERN, SELF_TEST_STEP_MS, STATS_INTERVAL_TICKS, TICK_PERIOD_MS};
use crate::{DiscoController, LampDriver, ModeController, TriggerReceiver};
use disco_core::{elapsed_ms, self_test_vectors};

/// Lampentest - jede Lampe kurz einzeln an, danach alle aus
///
/// Zeigt beim Start, ob die Verdrahtung stimmt. Fehler werden nur geloggt.
pub async fn self_test<L: LampDriver>(driver: &mut L) {
    info!("Lamp self-test");
    for vector in self_test_vectors() {
        if let Err(fault) = driver.apply(&vector) {
            error!("Self-test: failed to write {} lamp", fault.lamp);
        }
        Timer::after(Duration::from_millis(SELF_TEST_STEP_MS)).await;
    }
}

/// Lights Logic - Tick-Schleife des Lights Task
///
/// Ablauf pro Tick:
/// - Alle anstehenden Auslöser abarbeiten (Pattern-Wechsel)
/// - Mode Controller um die gemessene Zeit vorrücken
/// - Ergebnis über den Treiber auf die Lampen schreiben
///
/// Ein Tick läuft immer komplett durch, Auslöser werden nur zwischen
/// zwei Ticks verarbeitet. Nach einem Wechsel beginnt der Controller das
/// neue Pattern mit Frame 0, die Zeit vor dem Wechsel zählt nicht mit.
///
/// Die Logik selbst (Wechsel, Vorrücken, Fehlerzählung, Zeitdifferenz)
/// liegt in `disco-core` und wird dort bzw. in `disco-tests` getestet.
/// Hier bleibt nur Timing und Logging.
///
/// # Parameter
/// - `controller`: Mode Controller (im Zustand Idle)
/// - `triggers`: Channel Receiver für Button- und Timer-Auslöser
pub async fn lights_logic<L: LampDriver>(
    mut controller: ModeController<'static, L>,
    triggers: TriggerReceiver,
) -> ! {
    self_test(controller.driver_mut()).await;

    // Idle → Running mit dem konfigurierten Default-Pattern
    match controller.start_or_first(DEFAULT_PATTERN) {
        Ok((pattern, false)) => info!("Starting with pattern {}", pattern.name),
        Ok((pattern, true)) => warn!(
            "Unknown default pattern {}, starting with {}",
            DEFAULT_PATTERN, pattern.name
        ),
        Err(_) => error!("Pattern catalog is empty, lamps stay off"),
    }

    let mut ticker = Ticker::every(Duration::from_millis(TICK_PERIOD_MS));
    let mut last_tick_ms = Instant::now().as_millis();
    let mut ticks: u32 = 0;

    // Hauptschleife: ein Durchlauf pro Tick, endlos
    loop {
        ticker.next().await;

        // Anstehende Auslöser (non-blocking)
        while let Ok(trigger) = triggers.try_receive() {
            match controller.trigger(trigger) {
                Ok(pattern) => info!("Trigger {}: now playing {}", trigger, pattern.name),
                Err(_) => warn!("Trigger {} ignored: unknown pattern", trigger),
            }
        }

        // Delta aus absoluten Millisekunden → kein Rundungs-Drift
        let now_ms = Instant::now().as_millis();
        let delta_ms = elapsed_ms(last_tick_ms, now_ms);
        last_tick_ms = now_ms;

        // Lampen schreiben (erster Tick nach Wechsel: Frame 0 unverkürzt)
        if let Err(fault) = controller.tick(delta_ms) {
            error!(
                "Failed to write {} lamp (faults: {})",
                fault.lamp,
                controller.fault_count()
            );
        }

        ticks = ticks.wrapping_add(1);
        if ticks % STATS_INTERVAL_TICKS == 0 {
            if let Some(cursor) = controller.engine().cursor() {
                debug!(
                    "Tick {}: pattern #{} frame {} (faults: {})",
                    ticks,
                    cursor.pattern_index(),
                    cursor.frame_index(),
                    controller.fault_count()
                );
            }
        }
    }
}

/// Lights Task - Embassy Task für die Lichtsteuerung
///
/// Besitzt den Mode Controller (und damit Engine und Treiber) exklusiv.
///
/// # Parameter
/// - `controller`: Mode Controller mit STOP:bit Treiber
/// - `triggers`: Channel Receiver für Pattern-Auslöser
#[embassy_executor::task]
pub async fn lights_task(controller: DiscoController, triggers: TriggerReceiver) {
    lights_logic(controller, triggers).await
}
