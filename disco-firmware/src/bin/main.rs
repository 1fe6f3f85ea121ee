// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von embassy_executor bereitgestellt)
#![no_main]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// RTT Logging und Panic-Handler
use {defmt_rtt as _, panic_probe as _};

// Projekt-Module und Konfiguration
use disco_core::patterns;
use stopbit_disco::config::AUTO_CYCLE_SECS;
use stopbit_disco::hal::{button, stopbit_driver};
use stopbit_disco::tasks::{auto_cycle_task, button_task, lights_task};
use stopbit_disco::{ModeController, Trigger, TriggerChannel};

/// Main Entry Point
///
/// Initialisiert Hardware, baut Katalog und Mode Controller und spawnt Tasks.
/// Danach schläft main() - alle Arbeit läuft in Tasks.
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("STOP:bit disco starting");

    // Lampen: STOP:bit an P0/P1/P2 des Edge-Connectors
    let driver = stopbit_driver(p.P0_02, p.P0_03, p.P0_04);

    // Katalog prüfen - ein Fehler hier ist ein Programmierfehler
    let catalog = patterns::builtin().expect("built-in pattern catalog is invalid");
    info!("{} patterns in catalog", catalog.len());

    // Mode Controller startet Idle, der Lights Task wählt das Default-Pattern
    let controller = ModeController::new(catalog, driver);

    // Trigger-Channel erstellen (Buttons/Timer → Lights Task)
    static TRIGGER_CHANNEL: static_cell::StaticCell<TriggerChannel> =
        static_cell::StaticCell::new();
    let trigger_channel = &*TRIGGER_CHANNEL.init(TriggerChannel::new());

    // Spawn Lights Task (besitzt Controller, Engine und Treiber exklusiv)
    spawner
        .spawn(lights_task(controller, trigger_channel.receiver()))
        .unwrap();

    // Spawn Button Tasks: A → nächstes Pattern, B → vorheriges Pattern
    spawner
        .spawn(button_task(
            button(p.P0_14),
            Trigger::Next,
            trigger_channel.sender(),
        ))
        .unwrap();
    spawner
        .spawn(button_task(
            button(p.P0_23),
            Trigger::Previous,
            trigger_channel.sender(),
        ))
        .unwrap();

    // Optional: automatischer Pattern-Wechsel
    if AUTO_CYCLE_SECS > 0 {
        info!("Auto-cycle every {} s", AUTO_CYCLE_SECS);
        spawner
            .spawn(auto_cycle_task(trigger_channel.sender(), AUTO_CYCLE_SECS))
            .unwrap();
    }

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
