//! PMU (power management unit) boot configuration.

use crate::pac::scr;
use crate::rcc::{self, PeripheralClock};
use crate::regs::{ClockRegs, CoreRegs, PmuRegs};

/// FVDD regulator timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub struct Config {
    /// `FVDD_TSETTLE`
    pub fvdd_tsettle: u32,
    /// `FVDD_TSTARTUP`
    pub fvdd_tstartup: u32,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            fvdd_tsettle: 160,
            fvdd_tstartup: 400,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Program regulator timing and coma-mode behaviour.
///
/// The PMU clock gate is opened for the writes and closed again on return,
/// whatever its state on entry. The settings persist while gated.
pub fn init_pmu<H: ClockRegs + PmuRegs + CoreRegs>(hw: &mut H, config: &Config) {
    rcc::enable(hw, PeripheralClock::Pmu);

    // Only enabled interrupts wake the core, and returning from an ISR never
    // re-enters sleep on its own.
    hw.modify_scr(|r| r & !(scr::SEVONPEND | scr::SLEEPONEXIT));

    hw.set_fvdd_tsettle(config.fvdd_tsettle);
    hw.set_fvdd_tstartup(config.fvdd_tstartup);

    // Keep SRAM A and B powered in coma mode.
    hw.modify_control(|w| {
        w.set_srama(false);
        w.set_sramb(false);
    });

    // Switching regulator in active and coma mode.
    hw.modify_control(|w| {
        w.set_n1v1(true);
        w.set_c1v1(true);
    });

    rcc::disable(hw, PeripheralClock::Pmu);

    debug!(
        "pmu: tsettle={} tstartup={}",
        config.fvdd_tsettle,
        config.fvdd_tstartup
    );
}
