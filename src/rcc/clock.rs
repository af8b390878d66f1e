//! Oscillator bring-up and calibration.

use core::hint::spin_loop;

use super::{get_pclk_freq, FclkDivider, CPU_CLOCK_DIV};
use crate::pac::Csr;
use crate::regs::{ClockRegs, CoreRegs, PmuRegs};

/// Settle time after powering up an internal RC oscillator, about 5 µs at 32 MHz.
pub const OSC_SETTLE_CYCLES: u32 = 160;

/// `CLOCKREG.PDIS` value gating every peripheral clock.
pub const PDIS_ALL: u32 = 0xFFFF_FFFF;

/// Spin until `settled` holds for the clock status register.
///
/// No timeout. A bad crystal or trim hangs here; the PC shows which step.
#[inline(always)]
fn wait_csr<H: ClockRegs>(hw: &H, step: &'static str, settled: impl Fn(Csr) -> bool) {
    trace!("rcc: waiting for {}", step);
    while !settled(hw.csr()) {
        spin_loop();
    }
}

/// Bring the clock tree to its calibrated boot state.
///
/// Switches to the external 32 MHz crystal, calibrates the internal 32 MHz and
/// 32 kHz RC oscillators against it, gates every peripheral clock and
/// programs the core divider. Blocks until the hardware reports each step
/// done.
pub fn init_clock<H: ClockRegs + PmuRegs + CoreRegs>(hw: &mut H) {
    hw.modify_ccr(|w| w.set_osc_sel(true));
    // Stuck here: board crystal or 32 MHz trim.
    wait_csr(hw, "XTAL32M", |csr| csr.xtal32m());

    // Internal 32 MHz RC
    hw.modify_control(|w| w.set_int32m(false));
    hw.delay_cycles(OSC_SETTLE_CYCLES);

    hw.modify_ccr(|w| w.set_cal32m(true));
    wait_csr(hw, "CAL32MDONE", |csr| csr.cal32mdone());
    wait_csr(hw, "CAL32MFAIL clear", |csr| !csr.cal32mfail());

    // Calibration is latched; the RC is not the running clock.
    hw.modify_control(|w| w.set_int32m(true));

    // Internal 32 kHz RC
    hw.modify_control(|w| w.set_int32k(false));
    hw.delay_cycles(OSC_SETTLE_CYCLES);

    hw.modify_ccr(|w| w.set_cal32k(true));
    wait_csr(hw, "DONE32K", |csr| csr.done32k());
    wait_csr(hw, "CAL32K clear", |csr| !csr.cal32k());

    // The calibrated internal RC is the low-power reference from now on.
    hw.modify_control(|w| w.set_ext32k(true));

    // Drivers ungate their own clocks.
    hw.set_pdis(PDIS_ALL);

    hw.set_fdiv(FclkDivider(CPU_CLOCK_DIV).fdiv());

    info!("rcc: clocks calibrated, pclk {} Hz", get_pclk_freq().0);
}
