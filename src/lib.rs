#![cfg_attr(not(test), no_std)]
#![doc = include_str!("../README.md")]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod interrupt;
pub mod pac;
pub mod pmu;
pub mod rcc;
pub mod regs;
pub mod time;
pub mod trim;

#[cfg(test)]
mod sim;

use crate::interrupt::IRQ_BANK0_MASK;
use crate::pac::{actlr, icsr};
use crate::regs::Hardware;

/// HAL configuration for NCS36510
pub mod config {
    use crate::{interrupt, pmu};

    /// Bring-up configuration. `Config::default()` is the stock boot sequence.
    #[non_exhaustive]
    pub struct Config {
        pub pmu: pmu::Config,
        pub interrupt: interrupt::Config,
        /// Set `ACTLR.DISDEFWBUF` so imprecise bus faults are reported
        /// precisely. Costs performance; meant for debugging.
        pub precise_bus_faults: bool,
    }

    impl Default for Config {
        fn default() -> Self {
            Self {
                pmu: pmu::Config::default(),
                interrupt: interrupt::Config::default(),
                precise_bus_faults: false,
            }
        }
    }
}
pub use config::Config;

/// One phase of the hardware init sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    Trim,
    Clock,
    Pmu,
    Priorities,
}

/// Hardware init phases, in the order they run.
pub const HW_INIT_SEQUENCE: [Step; 4] = [Step::Trim, Step::Clock, Step::Pmu, Step::Priorities];

/// Run the bring-up sequence on `hw`.
///
/// Masks and clears every device interrupt, drops pending PendSV/SysTick,
/// points VTOR at the vector table, then runs [`HW_INIT_SEQUENCE`].
/// Interrupts are still masked at the NVIC on return. Blocks until the
/// oscillators report calibrated.
///
/// Must run once, before anything else touches the hardware.
pub fn init_with<H: Hardware>(hw: &mut H, config: Config) {
    hw.disable_irqs(IRQ_BANK0_MASK);
    hw.unpend_irqs(IRQ_BANK0_MASK);
    hw.set_icsr(icsr::PENDSVCLR | icsr::PENDSTCLR);

    let vector_table = hw.vector_table();
    hw.set_vtor(vector_table);

    if config.precise_bus_faults {
        hw.modify_actlr(|r| r | actlr::DISDEFWBUF);
    }

    let priorities = match config.interrupt.check() {
        Ok(()) => config.interrupt,
        Err(e) => {
            error!("init: {:?}, using default priorities", e);
            interrupt::Config::default()
        }
    };

    for step in HW_INIT_SEQUENCE {
        debug!("init: {:?}", step);
        match step {
            Step::Trim => {
                trim::apply_trim(hw);
            }
            Step::Clock => rcc::init_clock(hw),
            Step::Pmu => pmu::init_pmu(hw, &config.pmu),
            Step::Priorities => interrupt::configure_priorities(hw, &priorities),
        }
    }
}

/// Bring up the device with the default [`Config`].
///
/// Call once from the reset handler, before an executor or scheduler starts.
#[cfg(target_os = "none")]
pub fn system_init() {
    // Nothing else runs yet, so this is the only register user.
    let mut hw = unsafe { regs::Mmio::steal() };
    init_with(&mut hw, Config::default());
}
