// Build-Script: Wird vor dem Kompilieren ausgeführt
// Konfiguriert den Linker für nRF52833 Embedded Rust und backt die Disco-Konfiguration ein

use std::env;
use std::fs;
use std::path::PathBuf;

// Konfigurierbare Werte: (Name, Default)
const TICK_MS: (&str, &str) = ("DISCO_TICK_MS", "20");
const DEFAULT_PATTERN: (&str, &str) = ("DISCO_DEFAULT_PATTERN", "disco");
const AUTO_CYCLE_SECS: (&str, &str) = ("DISCO_AUTO_CYCLE_SECS", "0");

// Obergrenze Auto-Cycle: ein Tag
const MAX_AUTO_CYCLE_SECS: u64 = 86_400;

fn main() {
    // Lade .env file für die Disco-Konfiguration
    // Fehler ignorieren wenn .env nicht existiert (dann gelten ENV vars bzw. Defaults)
    if let Err(e) = dotenvy::dotenv() {
        println!("cargo:warning=.env file nicht gefunden ({e}), nutze Defaults");
    }

    // Gebe Konfiguration an Rust-Compiler weiter
    // Die Werte werden zur Compile-Zeit in den Code eingebacken (siehe config.rs)
    let tick_ms = read_number(TICK_MS);
    if !(1..=1000).contains(&tick_ms) {
        panic!("DISCO_TICK_MS muss zwischen 1 und 1000 liegen, ist {tick_ms}");
    }
    let auto_cycle_secs = read_number(AUTO_CYCLE_SECS);
    if auto_cycle_secs > MAX_AUTO_CYCLE_SECS {
        panic!(
            "DISCO_AUTO_CYCLE_SECS muss zwischen 0 und {MAX_AUTO_CYCLE_SECS} liegen, ist {auto_cycle_secs}"
        );
    }

    let pattern = env::var(DEFAULT_PATTERN.0).unwrap_or_else(|_| DEFAULT_PATTERN.1.into());
    if pattern.trim().is_empty() {
        panic!("DISCO_DEFAULT_PATTERN darf nicht leer sein");
    }
    println!("cargo:rustc-env={}={}", DEFAULT_PATTERN.0, pattern.trim());

    for (name, _) in [TICK_MS, DEFAULT_PATTERN, AUTO_CYCLE_SECS] {
        println!("cargo:rerun-if-env-changed={name}");
    }
    println!("cargo:rerun-if-changed=.env");

    // memory.x in OUT_DIR legen, damit cortex-m-rt es findet
    let out = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR not set"));
    fs::write(out.join("memory.x"), include_bytes!("memory.x")).expect("failed to write memory.x");
    println!("cargo:rustc-link-search={}", out.display());
    println!("cargo:rerun-if-changed=memory.x");

    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    linker_be_nice();

    // Füge Linker-Skripte hinzu:

    // 1. link.x - cortex-m-rt Memory-Layout und Vektortabelle (nutzt memory.x)
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");

    // 2. defmt.x - defmt Logging-Support
    //    Definiert Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}

// Liest eine Zahl aus der Umgebung (oder Default) und reicht sie an rustc weiter
fn read_number((name, default): (&str, &str)) -> u64 {
    let raw = env::var(name).unwrap_or_else(|_| default.into());
    let value = raw
        .trim()
        .parse::<u64>()
        .unwrap_or_else(|_| panic!("{name} ist keine gültige Zahl: {raw:?}"));
    println!("cargo:rustc-env={name}={value}");
    value
}

// Error-Handler: Zeigt hilfreiche Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = env::args().collect();

    // Wenn vom Linker aufgerufen (mit Error-Typ und Symbol-Name)
    if args.len() > 2 {
        let kind = &args[1]; // Fehler-Typ (z.B. "undefined-symbol")
        let what = &args[2]; // Symbol-Name (z.B. "_defmt_...")

        match kind.as_str() {
            "undefined-symbol" => match what.as_str() {
                what if what.starts_with("_defmt_") => {
                    eprintln!();
                    eprintln!(
                        "💡 `defmt` not found - make sure `defmt.x` is added as a linker script and you have included `use defmt_rtt as _;`"
                    );
                    eprintln!();
                }
                "_stack_start" | "__RESET_VECTOR" => {
                    eprintln!();
                    eprintln!("💡 Is the linker script `link.x` (or `memory.x`) missing?");
                    eprintln!();
                }
                what if what.starts_with("_embassy_time_") => {
                    eprintln!();
                    eprintln!(
                        "💡 No embassy-time driver found - enable the `time-driver-rtc1` feature of `embassy-nrf`."
                    );
                    eprintln!();
                }
                _ => (),
            },
            // we don't have anything helpful for "missing-lib" yet
            _ => {
                std::process::exit(1);
            }
        }

        std::process::exit(0);
    }

    if let Ok(exe) = env::current_exe() {
        println!(
            "cargo:rustc-link-arg-bins=--error-handling-script={}",
            exe.display()
        );
    }
}
