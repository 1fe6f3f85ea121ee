// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter dem LampDriver Trait
// aus disco-core, damit die Logik auf dem Host testbar bleibt.

pub mod stopbit;

pub use stopbit::{StopBitDriver, button, stopbit_driver};
