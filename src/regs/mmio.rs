use core::ptr;

use cortex_m::peripheral::{NVIC, SCB};
use embassy_hal_internal::interrupt::InterruptExt;

use super::*;
use crate::pac::{clockreg, dmdreg, machwreg, pmureg, randreg, rfanatrimreg, trimreg};

/// `SCnSCB.ACTLR`
const ACTLR: *mut u32 = 0xE000_E008 as *mut u32;

extern "C" {
    // Provided by cortex-m-rt's `link.x`.
    static __vector_table: u32;
}

/// Volatile access to the device registers at their memory-mapped addresses.
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// # Safety
    ///
    /// The caller must be the only code touching the bring-up registers for
    /// as long as the returned value lives. This holds during reset handling,
    /// before interrupts or other contexts exist.
    pub unsafe fn steal() -> Self {
        Self { _private: () }
    }
}

#[inline(always)]
fn read(base: usize, offset: usize) -> u32 {
    unsafe { ptr::read_volatile((base + offset) as *const u32) }
}

#[inline(always)]
fn write(base: usize, offset: usize, value: u32) {
    unsafe { ptr::write_volatile((base + offset) as *mut u32, value) }
}

impl TrimStore for Mmio {
    fn trim_record(&self) -> RawTrimRecord {
        unsafe { ptr::read_volatile(trimreg::BASE as *const RawTrimRecord) }
    }
}

impl ClockRegs for Mmio {
    fn ccr(&self) -> Ccr {
        Ccr::from_bits(read(clockreg::BASE, clockreg::CCR))
    }

    fn set_ccr(&mut self, ccr: Ccr) {
        write(clockreg::BASE, clockreg::CCR, ccr.into_bits())
    }

    fn csr(&self) -> Csr {
        Csr::from_bits(read(clockreg::BASE, clockreg::CSR))
    }

    fn set_trim_32k_ext(&mut self, trim: u32) {
        write(clockreg::BASE, clockreg::TRIM_32K_EXT, trim)
    }

    fn set_trim_32m_ext(&mut self, trim: u32) {
        write(clockreg::BASE, clockreg::TRIM_32M_EXT, trim)
    }

    fn pdis(&self) -> u32 {
        read(clockreg::BASE, clockreg::PDIS)
    }

    fn set_pdis(&mut self, pdis: u32) {
        write(clockreg::BASE, clockreg::PDIS, pdis)
    }

    fn set_fdiv(&mut self, fdiv: u32) {
        write(clockreg::BASE, clockreg::FDIV, fdiv)
    }
}

impl PmuRegs for Mmio {
    fn control(&self) -> PmuControl {
        PmuControl::from_bits(read(pmureg::BASE, pmureg::CONTROL))
    }

    fn set_control(&mut self, control: PmuControl) {
        write(pmureg::BASE, pmureg::CONTROL, control.into_bits())
    }

    fn set_fvdd_tsettle(&mut self, tsettle: u32) {
        write(pmureg::BASE, pmureg::FVDD_TSETTLE, tsettle)
    }

    fn set_fvdd_tstartup(&mut self, tstartup: u32) {
        write(pmureg::BASE, pmureg::FVDD_TSTARTUP, tstartup)
    }
}

impl RfTrimRegs for Mmio {
    fn set_tx_chain_trim(&mut self, trim: u32) {
        write(rfanatrimreg::BASE, rfanatrimreg::TX_CHAIN_TRIM, trim)
    }

    fn set_pll_vco_tap_location(&mut self, tap: u32) {
        write(rfanatrimreg::BASE, rfanatrimreg::PLL_VCO_TAP_LOCATION, tap)
    }

    fn set_pll_trim(&mut self, trim: u32) {
        write(rfanatrimreg::BASE, rfanatrimreg::PLL_TRIM, trim)
    }

    fn set_rx_chain_trim(&mut self, trim: u32) {
        write(rfanatrimreg::BASE, rfanatrimreg::RX_CHAIN_TRIM, trim)
    }

    fn set_pmu_trim(&mut self, trim: u32) {
        write(rfanatrimreg::BASE, rfanatrimreg::PMU_TRIM, trim)
    }

    fn set_rx_vco_trim_lut1(&mut self, lut: u32) {
        write(rfanatrimreg::BASE, rfanatrimreg::RX_VCO_TRIM_LUT1, lut)
    }

    fn set_rx_vco_trim_lut2(&mut self, lut: u32) {
        write(rfanatrimreg::BASE, rfanatrimreg::RX_VCO_TRIM_LUT2, lut)
    }

    fn set_tx_vco_trim_lut1(&mut self, lut: u32) {
        write(rfanatrimreg::BASE, rfanatrimreg::TX_VCO_TRIM_LUT1, lut)
    }

    fn set_tx_vco_trim_lut2(&mut self, lut: u32) {
        write(rfanatrimreg::BASE, rfanatrimreg::TX_VCO_TRIM_LUT2, lut)
    }
}

impl MacHwRegs for Mmio {
    fn tx_length(&self) -> TxLength {
        TxLength::from_bits(read(machwreg::BASE, machwreg::TX_LENGTH))
    }

    fn set_tx_length(&mut self, tx_length: TxLength) {
        write(machwreg::BASE, machwreg::TX_LENGTH, tx_length.into_bits())
    }
}

impl DmdRegs for Mmio {
    fn dmd_control2(&self) -> DmdControl2 {
        DmdControl2::from_bits(read(dmdreg::BASE, dmdreg::DMD_CONTROL2))
    }

    fn set_dmd_control2(&mut self, control2: DmdControl2) {
        write(dmdreg::BASE, dmdreg::DMD_CONTROL2, control2.into_bits())
    }
}

impl RandRegs for Mmio {
    fn set_seed(&mut self, seed: u32) {
        write(randreg::BASE, randreg::WR_SEED_RD_RAND, seed)
    }
}

impl CoreRegs for Mmio {
    fn disable_irqs(&mut self, mask: u32) {
        unsafe { (*NVIC::PTR).icer[0].write(mask) }
    }

    fn unpend_irqs(&mut self, mask: u32) {
        unsafe { (*NVIC::PTR).icpr[0].write(mask) }
    }

    fn set_priority(&mut self, irq: Interrupt, priority: Priority) {
        irq.set_priority(priority);
    }

    fn set_icsr(&mut self, icsr: u32) {
        unsafe { (*SCB::PTR).icsr.write(icsr) }
    }

    fn vector_table(&self) -> u32 {
        unsafe { ptr::addr_of!(__vector_table) as u32 }
    }

    fn set_vtor(&mut self, vtor: u32) {
        unsafe { (*SCB::PTR).vtor.write(vtor) }
    }

    fn scr(&self) -> u32 {
        unsafe { (*SCB::PTR).scr.read() }
    }

    fn set_scr(&mut self, scr: u32) {
        unsafe { (*SCB::PTR).scr.write(scr) }
    }

    fn actlr(&self) -> u32 {
        unsafe { ptr::read_volatile(ACTLR) }
    }

    fn set_actlr(&mut self, actlr: u32) {
        unsafe { ptr::write_volatile(ACTLR, actlr) }
    }

    fn delay_cycles(&mut self, cycles: u32) {
        cortex_m::asm::delay(cycles);
    }
}
