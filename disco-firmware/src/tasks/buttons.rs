// Button Tasks - Taster A/B und Timer als Pattern-Auslöser
use defmt::{info, warn};
use embassy_nrf::gpio::Input;
use embassy_time::{Duration, Timer};

use crate::config::{BUTTON_DEBOUNCE_SAMPLES, BUTTON_POLL_MS};
use crate::{Trigger, TriggerSender};
use disco_core::Debouncer;

/// Schickt einen Auslöser an den Lights Task, verwirft ihn bei voller Queue
fn send_trigger(sender: &TriggerSender, trigger: Trigger<'static>) {
    if sender.try_send(trigger).is_err() {
        warn!("Trigger queue full, dropping {}", trigger);
    }
}

/// Button Task - tastet einen Button ab und sendet bei jedem Druck `trigger`
///
/// Zwei Instanzen: Button A → `Trigger::Next`, Button B → `Trigger::Previous`
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(button: Input<'static>, trigger: Trigger<'static>, sender: TriggerSender) {
    let mut debouncer = Debouncer::new(BUTTON_DEBOUNCE_SAMPLES);

    loop {
        if debouncer.update(button.is_low()) {
            info!("Button pressed: {}", trigger);
            send_trigger(&sender, trigger);
        }
        Timer::after(Duration::from_millis(BUTTON_POLL_MS)).await;
    }
}

/// Auto-Cycle Task - wechselt alle `period_secs` Sekunden zum nächsten Pattern
#[embassy_executor::task]
pub async fn auto_cycle_task(sender: TriggerSender, period_secs: u64) {
    loop {
        Timer::after(Duration::from_secs(period_secs)).await;
        send_trigger(&sender, Trigger::Next);
    }
}
