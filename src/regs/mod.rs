//! Register access capabilities.
//!
//! Bring-up code never touches an address directly. Each hardware block is
//! reached through one of the traits below, and every configurator asks only
//! for the blocks it writes. [`Mmio`] implements all of them on the real
//! device; tests substitute a simulated device.

use crate::interrupt::Priority;
use crate::pac::{Ccr, Csr, DmdControl2, Interrupt, PmuControl, TxLength};
use crate::trim::RawTrimRecord;

#[cfg(target_os = "none")]
mod mmio;
#[cfg(target_os = "none")]
pub use mmio::Mmio;

/// Read-only factory trim record.
pub trait TrimStore {
    fn trim_record(&self) -> RawTrimRecord;
}

/// `CLOCKREG`
pub trait ClockRegs {
    fn ccr(&self) -> Ccr;
    fn set_ccr(&mut self, ccr: Ccr);

    /// Hardware status. Every call is a fresh volatile read.
    fn csr(&self) -> Csr;

    fn set_trim_32k_ext(&mut self, trim: u32);
    fn set_trim_32m_ext(&mut self, trim: u32);

    /// Peripheral clock disable mask, one bit per gate.
    fn pdis(&self) -> u32;
    fn set_pdis(&mut self, pdis: u32);

    /// Core clock divider, programmed as `divider - 1`.
    fn set_fdiv(&mut self, fdiv: u32);

    fn modify_ccr(&mut self, f: impl FnOnce(&mut Ccr)) {
        let mut ccr = self.ccr();
        f(&mut ccr);
        self.set_ccr(ccr);
    }
}

/// `PMUREG`
pub trait PmuRegs {
    fn control(&self) -> PmuControl;
    fn set_control(&mut self, control: PmuControl);

    fn set_fvdd_tsettle(&mut self, tsettle: u32);
    fn set_fvdd_tstartup(&mut self, tstartup: u32);

    fn modify_control(&mut self, f: impl FnOnce(&mut PmuControl)) {
        let mut control = self.control();
        f(&mut control);
        self.set_control(control);
    }
}

/// `RFANATRIMREG`
pub trait RfTrimRegs {
    fn set_tx_chain_trim(&mut self, trim: u32);
    fn set_pll_vco_tap_location(&mut self, tap: u32);
    fn set_pll_trim(&mut self, trim: u32);
    fn set_rx_chain_trim(&mut self, trim: u32);
    fn set_pmu_trim(&mut self, trim: u32);
    fn set_rx_vco_trim_lut1(&mut self, lut: u32);
    fn set_rx_vco_trim_lut2(&mut self, lut: u32);
    fn set_tx_vco_trim_lut1(&mut self, lut: u32);
    fn set_tx_vco_trim_lut2(&mut self, lut: u32);
}

/// `MACHWREG`
pub trait MacHwRegs {
    fn tx_length(&self) -> TxLength;
    fn set_tx_length(&mut self, tx_length: TxLength);

    fn modify_tx_length(&mut self, f: impl FnOnce(&mut TxLength)) {
        let mut tx_length = self.tx_length();
        f(&mut tx_length);
        self.set_tx_length(tx_length);
    }
}

/// `DMDREG`
pub trait DmdRegs {
    fn dmd_control2(&self) -> DmdControl2;
    fn set_dmd_control2(&mut self, control2: DmdControl2);

    fn modify_dmd_control2(&mut self, f: impl FnOnce(&mut DmdControl2)) {
        let mut control2 = self.dmd_control2();
        f(&mut control2);
        self.set_dmd_control2(control2);
    }
}

/// `RANDREG`
pub trait RandRegs {
    fn set_seed(&mut self, seed: u32);
}

/// Cortex-M core peripherals (NVIC, SCB, ACTLR) plus the cycle-counted delay.
pub trait CoreRegs {
    /// Write `NVIC.ICER[0]`.
    fn disable_irqs(&mut self, mask: u32);
    /// Write `NVIC.ICPR[0]`.
    fn unpend_irqs(&mut self, mask: u32);
    fn set_priority(&mut self, irq: Interrupt, priority: Priority);

    fn set_icsr(&mut self, icsr: u32);

    /// Address of the link-time vector table.
    fn vector_table(&self) -> u32;
    fn set_vtor(&mut self, vtor: u32);

    fn scr(&self) -> u32;
    fn set_scr(&mut self, scr: u32);

    fn actlr(&self) -> u32;
    fn set_actlr(&mut self, actlr: u32);

    /// Spin for roughly `cycles` core clock cycles.
    fn delay_cycles(&mut self, cycles: u32);

    fn modify_scr(&mut self, f: impl FnOnce(u32) -> u32) {
        let scr = self.scr();
        self.set_scr(f(scr));
    }

    fn modify_actlr(&mut self, f: impl FnOnce(u32) -> u32) {
        let actlr = self.actlr();
        self.set_actlr(f(actlr));
    }
}

/// Every block the bring-up sequence touches.
pub trait Hardware:
    TrimStore + ClockRegs + PmuRegs + RfTrimRegs + MacHwRegs + DmdRegs + RandRegs + CoreRegs
{
}

impl<T> Hardware for T where
    T: TrimStore + ClockRegs + PmuRegs + RfTrimRegs + MacHwRegs + DmdRegs + RandRegs + CoreRegs
{
}
