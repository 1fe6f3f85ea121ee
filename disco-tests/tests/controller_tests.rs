//! Integration Tests für Pattern Engine und Mode Controller
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockLampDriver

mod common;

use common::MockLampDriver;
use disco_core::patterns::{self, DEFAULT_PATTERN};
use disco_core::{
    ALL_OFF, Frame, Lamp, LampVector, Mode, ModeController, Pattern, PatternCatalog,
    PatternEngine, Sequence, Step, Trigger, UnknownPatternId, elapsed_ms, lamps,
};

const RED: LampVector = lamps(true, false, false);
const GREEN: LampVector = lamps(false, false, true);

const ALTERNATE: [Frame; 2] = [Frame::new(RED, 500), Frame::new(GREEN, 500)];
const UNEVEN: [Frame; 3] = [
    Frame::new(lamps(true, false, false), 7),
    Frame::new(lamps(false, true, false), 130),
    Frame::new(lamps(false, false, true), 33),
];
const TRACK_SHORT: [Step; 2] = [Step::on(30), Step::off(70)];
const TRACK_LONG: [Step; 3] = [Step::off(110), Step::on(90), Step::off(13)];

static TEST_PATTERNS: [Pattern<'static>; 3] = [
    Pattern::frames("alternate", &ALTERNATE),
    Pattern::frames("uneven", &UNEVEN),
    Pattern::tracks("poly", [&TRACK_SHORT, &TRACK_LONG, &TRACK_SHORT]),
];

fn catalog() -> PatternCatalog<'static> {
    PatternCatalog::new(&TEST_PATTERNS).unwrap()
}

fn running_controller(pattern: &str) -> ModeController<'static, MockLampDriver> {
    let mut controller = ModeController::new(catalog(), MockLampDriver::new());
    controller.start(pattern).unwrap();
    controller
}

// ============================================================================
// Tests: Pattern Engine
// ============================================================================

#[test]
fn test_alternate_scenario() {
    let mut engine = PatternEngine::new(catalog());
    engine.select_pattern("alternate").unwrap();
    let first = engine.current();

    assert_eq!(engine.tick(500), GREEN);
    assert_eq!(engine.tick(500), first);
    assert_eq!(first, RED);
}

#[test]
fn test_frame_index_stays_in_range() {
    let mut engine = PatternEngine::new(catalog());

    for pattern in catalog().iter() {
        engine.select_pattern(pattern.name).unwrap();
        let mut delta = 1u32;
        for _ in 0..5_000 {
            engine.tick(delta);
            let cursor = engine.cursor().unwrap();
            assert!(cursor.frame_index() < pattern.frame_count());
            match pattern.sequence {
                // Frame-Patterns nutzen nur den ersten Playhead
                Sequence::Frames(frames) => {
                    assert!(cursor.frame_index() < frames.len());
                    assert_eq!(cursor.playhead(Lamp::Amber).index, 0);
                    assert_eq!(cursor.playhead(Lamp::Green).index, 0);
                }
                Sequence::Tracks(tracks) => {
                    for lamp in Lamp::ALL {
                        let playhead = cursor.playhead(lamp);
                        let track = tracks[lamp.index()];
                        assert!(playhead.index < track.len());
                        assert!(playhead.elapsed_ms < track[playhead.index].duration_ms);
                    }
                }
            }
            // Pseudo-zufällige Tick-Längen, auch über mehrere Frames
            delta = delta.wrapping_mul(1_103_515_245).wrapping_add(12_345) % 400;
        }
    }
}

#[test]
fn test_small_ticks_advance_exactly_one_frame() {
    let mut engine = PatternEngine::new(catalog());
    engine.select_pattern("alternate").unwrap();

    // 500 ms in 50 Ticks zu je 10 ms
    for _ in 0..49 {
        assert_eq!(engine.tick(10), RED);
    }
    assert_eq!(engine.tick(10), GREEN);
    assert_eq!(engine.cursor().unwrap().frame_index(), 1);
    assert_eq!(engine.cursor().unwrap().elapsed_ms(), 0);
}

#[test]
fn test_no_drift_over_many_cycles() {
    let mut engine = PatternEngine::new(catalog());
    engine.select_pattern("uneven").unwrap();

    // 170 ms Zyklus, 1000 Zyklen in 17-ms-Ticks
    for _ in 0..10_000 {
        engine.tick(17);
    }
    let cursor = engine.cursor().unwrap();
    assert_eq!(cursor.frame_index(), 0);
    assert_eq!(cursor.elapsed_ms(), 0);
}

#[test]
fn test_select_unknown_leaves_cursor_unchanged() {
    let mut engine = PatternEngine::new(catalog());
    engine.select_pattern("uneven").unwrap();
    engine.tick(50);
    let before = *engine.cursor().unwrap();

    assert_eq!(engine.select_pattern("does-not-exist"), Err(UnknownPatternId));
    assert_eq!(*engine.cursor().unwrap(), before);
    assert_eq!(engine.active_pattern().unwrap().name, "uneven");
}

// ============================================================================
// Tests: Mode Controller
// ============================================================================

#[test]
fn test_controller_starts_idle() {
    let mut controller = ModeController::new(catalog(), MockLampDriver::new());
    assert_eq!(controller.mode(), Mode::Idle);
    assert_eq!(controller.tick(20), Ok(ALL_OFF));
    assert_eq!(controller.driver().attempt_count, 0);
}

#[test]
fn test_controller_applies_every_tick() {
    let mut controller = running_controller("alternate");
    // Erster Tick nach dem Start rückt nicht vor → 900 ms gespielt
    for _ in 0..10 {
        controller.tick(100).unwrap();
    }
    assert_eq!(controller.driver().apply_count, 10);
    assert_eq!(controller.driver().last_vector, Some(GREEN));
}

#[test]
fn test_controller_retries_after_hardware_fault() {
    let mut controller = running_controller("alternate");
    controller.driver_mut().fail_next_apply = true;

    let result = controller.tick(500);
    assert!(result.is_err());
    assert_eq!(controller.fault_count(), 1);
    assert_eq!(controller.driver().last_vector, None);

    // Nächster Tick wird trotzdem geschrieben, mit dem neuesten Zustand
    assert_eq!(controller.tick(500), Ok(GREEN));
    assert_eq!(controller.driver().attempt_count, 2);
    assert_eq!(controller.driver().last_vector, Some(GREEN));
    assert_eq!(controller.mode(), Mode::Running);
}

#[test]
fn test_rapid_triggers_follow_catalog_order() {
    let mut controller = running_controller("alternate");
    let names: Vec<&str> = catalog().iter().map(|p| p.name).collect();

    let mut expected = 0;
    for _ in 0..10 {
        let pattern = controller.trigger(Trigger::Next).unwrap();
        expected = (expected + 1) % names.len();
        assert_eq!(pattern.name, names[expected]);
        assert_eq!(controller.engine().cursor().unwrap().frame_index(), 0);
    }
}

#[test]
fn test_previous_trigger_walks_backwards() {
    let mut controller = running_controller("alternate");
    assert_eq!(controller.trigger(Trigger::Previous).unwrap().name, "poly");
    assert_eq!(controller.trigger(Trigger::Previous).unwrap().name, "uneven");
    assert_eq!(controller.trigger(Trigger::Next).unwrap().name, "poly");
}

#[test]
fn test_next_trigger_from_idle_selects_first() {
    let mut controller = ModeController::new(catalog(), MockLampDriver::new());
    assert_eq!(controller.trigger(Trigger::Next).unwrap().name, "alternate");
    assert_eq!(controller.mode(), Mode::Running);
}

#[test]
fn test_unknown_select_keeps_pattern_running() {
    let mut controller = running_controller("uneven");
    controller.tick(0).unwrap();
    controller.tick(10).unwrap();

    assert_eq!(
        controller.trigger(Trigger::Select("nope")),
        Err(UnknownPatternId)
    );
    assert_eq!(controller.active_pattern().unwrap().name, "uneven");
    assert_eq!(controller.engine().cursor().unwrap().frame_index(), 1);
}

#[test]
fn test_trigger_resets_playback() {
    let mut controller = running_controller("alternate");
    controller.tick(700).unwrap();
    controller.trigger(Trigger::Select("alternate")).unwrap();
    assert_eq!(controller.tick(0), Ok(RED));
}

#[test]
fn test_switch_plays_full_first_frame() {
    let mut controller = running_controller("uneven");
    controller.tick(0).unwrap();
    controller.tick(100).unwrap();

    // Wechsel zwischen zwei Ticks: die 400 ms davor zählen nicht für "alternate"
    controller.trigger(Trigger::Select("alternate")).unwrap();
    assert_eq!(controller.tick(400), Ok(RED));
    let cursor = controller.engine().cursor().unwrap();
    assert_eq!((cursor.frame_index(), cursor.elapsed_ms()), (0, 0));

    assert_eq!(controller.tick(499), Ok(RED));
    assert_eq!(controller.tick(1), Ok(GREEN));
}

#[test]
fn test_failed_trigger_does_not_freeze_next_tick() {
    let mut controller = running_controller("alternate");
    controller.tick(0).unwrap();
    controller.trigger(Trigger::Select("nope")).unwrap_err();

    // Kein Wechsel → voller Delta wird gespielt
    assert_eq!(controller.tick(500), Ok(GREEN));
}

#[test]
fn test_start_or_first_with_unknown_default() {
    let mut controller = ModeController::new(catalog(), MockLampDriver::new());
    let (pattern, fell_back) = controller.start_or_first("not-configured").unwrap();
    assert!(fell_back);
    assert_eq!(pattern.name, "alternate");
    assert_eq!(controller.mode(), Mode::Running);
    assert_eq!(controller.tick(20), Ok(RED));
}

#[test]
fn test_tick_loop_with_uptime_timestamps() {
    // Nachbau der Firmware-Schleife: Delta aus absoluter Uptime, Auslöser vor dem Tick
    let mut controller = ModeController::new(catalog(), MockLampDriver::new());
    controller.start_or_first("alternate").unwrap();

    let mut last_ms: u64 = 1_000;
    let mut frames = Vec::new();
    for tick in 1..=60u64 {
        let now_ms = 1_000 + tick * 20;
        if tick == 10 {
            controller.trigger(Trigger::Next).unwrap();
        }
        frames.push(controller.tick(elapsed_ms(last_ms, now_ms)).unwrap());
        last_ms = now_ms;
    }

    // Ab Tick 10 läuft "uneven" ab Frame 0, 7 ms Rot, dann 130 ms Gelb
    assert_eq!(controller.active_pattern().unwrap().name, "uneven");
    assert_eq!(frames[9], lamps(true, false, false));
    assert_eq!(frames[10], lamps(false, true, false));
    assert_eq!(controller.driver().apply_count, 60);
}

// ============================================================================
// Tests: Eingebauter Katalog
// ============================================================================

#[test]
fn test_builtin_default_pattern_runs() {
    let catalog = patterns::builtin().unwrap();
    let mut controller = ModeController::new(catalog, MockLampDriver::new());
    assert_eq!(controller.start(DEFAULT_PATTERN).unwrap().name, "disco");

    // Erste Schritte: Rot an, Gelb an, Grün aus
    assert_eq!(controller.tick(0), Ok(lamps(true, true, false)));
    // Nach 900 ms: Rot noch an, Gelb aus, Grün an
    assert_eq!(controller.tick(900), Ok(lamps(true, false, true)));
}

#[test]
fn test_builtin_cycle_visits_every_pattern() {
    let catalog = patterns::builtin().unwrap();
    let mut controller = ModeController::new(catalog, MockLampDriver::new());
    controller.start(DEFAULT_PATTERN).unwrap();

    for _ in 0..catalog.len() {
        controller.trigger(Trigger::Next).unwrap();
        controller.tick(20).unwrap();
    }
    assert_eq!(controller.active_pattern().unwrap().name, DEFAULT_PATTERN);
    assert_eq!(controller.driver().apply_count, catalog.len());
}

#[test]
fn test_builtin_strobe_on_frame_survives_switch() {
    let catalog = patterns::builtin().unwrap();
    let mut controller = ModeController::new(catalog, MockLampDriver::new());
    controller.start(DEFAULT_PATTERN).unwrap();
    controller.tick(20).unwrap();

    // Strobe: 40 ms an, 80 ms aus, getaktet mit 20-ms-Ticks
    controller.trigger(Trigger::Select("strobe")).unwrap();
    let all_on = lamps(true, true, true);
    assert_eq!(controller.tick(20), Ok(all_on));
    assert_eq!(controller.tick(20), Ok(all_on));
    let cursor = controller.engine().cursor().unwrap();
    assert_eq!((cursor.frame_index(), cursor.elapsed_ms()), (0, 20));
    assert_eq!(controller.tick(20), Ok(ALL_OFF));
}
