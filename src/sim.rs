//! Simulated device for host tests.
//!
//! Holds every register the bring-up sequence touches, logs each write in
//! order, and models the clock status register: each status flag settles a
//! scripted number of `CSR` reads after the control write that started it.
//! Reading `CSR` more than `poll_cap` times panics, which turns a poll that
//! would spin forever on silicon into a test failure.

use std::cell::Cell;
use std::vec::Vec;

use crate::interrupt::Priority;
use crate::pac::{Ccr, Csr, DmdControl2, Interrupt, PmuControl, TxLength};
use crate::regs::*;
use crate::trim::RawTrimRecord;

pub(crate) const VECTOR_TABLE: u32 = 0x0000_3000;

/// Value every RF trim register holds out of reset.
pub(crate) const RF_RESET: u32 = 0x5A5A_0000;
pub(crate) const TRIM_32K_RESET: u32 = 0x0000_0A3C;
pub(crate) const TRIM_32M_RESET: u32 = 0x0000_1B4D;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reg {
    Ccr,
    Trim32kExt,
    Trim32mExt,
    Pdis,
    Fdiv,
    PmuControl,
    FvddTsettle,
    FvddTstartup,
    TxChainTrim,
    PllVcoTapLocation,
    PllTrim,
    RxChainTrim,
    PmuTrim,
    RxVcoLut1,
    RxVcoLut2,
    TxVcoLut1,
    TxVcoLut2,
    TxLength,
    DmdControl2,
    RandSeed,
    Icer0,
    Icpr0,
    Icsr,
    Vtor,
    Scr,
    Actlr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    Write(Reg, u32),
    Delay(u32),
    Priority(Interrupt, Priority),
}

/// `CSR` reads, counted from the triggering write, before a flag settles.
/// `None` never settles.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Latency {
    pub xtal32m: Option<u32>,
    pub cal32m_done: Option<u32>,
    pub cal32m_fail_clear: Option<u32>,
    pub cal32k_done: Option<u32>,
    pub cal32k_busy_clear: Option<u32>,
}

impl Latency {
    pub(crate) const fn cooperative() -> Self {
        Self {
            xtal32m: Some(3),
            cal32m_done: Some(5),
            cal32m_fail_clear: Some(7),
            cal32k_done: Some(4),
            cal32k_busy_clear: Some(6),
        }
    }
}

fn settled(since: Option<u32>, latency: Option<u32>) -> bool {
    matches!((since, latency), (Some(since), Some(latency)) if since >= latency)
}

fn tick(counter: &Cell<Option<u32>>) -> Option<u32> {
    let next = counter.get().map(|n| n + 1);
    counter.set(next);
    next
}

pub(crate) struct Sim {
    pub trim: RawTrimRecord,

    pub ccr: Ccr,
    pub trim_32k_ext: u32,
    pub trim_32m_ext: u32,
    pub pdis: u32,
    pub fdiv: u32,

    pub pmu_control: PmuControl,
    pub fvdd_tsettle: u32,
    pub fvdd_tstartup: u32,

    pub tx_chain_trim: u32,
    pub pll_vco_tap_location: u32,
    pub pll_trim: u32,
    pub rx_chain_trim: u32,
    pub pmu_trim: u32,
    pub rx_vco_lut: [u32; 2],
    pub tx_vco_lut: [u32; 2],
    pub tx_length: TxLength,
    pub dmd_control2: DmdControl2,
    pub rand_seed: u32,

    /// NVIC lines enabled / pending in bank 0.
    pub nvic_enabled: u32,
    pub nvic_pending: u32,
    pub icsr: u32,
    pub vtor: u32,
    pub scr: u32,
    pub actlr: u32,
    pub priorities: [Option<Priority>; Interrupt::COUNT],

    pub log: Vec<Event>,

    latency: Latency,
    poll_cap: u32,
    csr_reads: Cell<u32>,
    since_osc_sel: Cell<Option<u32>>,
    since_cal32m: Cell<Option<u32>>,
    since_cal32k: Cell<Option<u32>>,
}

impl Sim {
    /// Post-reset device holding `trim` in flash, with cooperative oscillators.
    pub(crate) fn new(trim: RawTrimRecord) -> Self {
        Self {
            trim,
            ccr: Ccr::new(),
            trim_32k_ext: TRIM_32K_RESET,
            trim_32m_ext: TRIM_32M_RESET,
            pdis: 0,
            fdiv: 0,
            pmu_control: PmuControl::new()
                .with_int32k(true)
                .with_int32m(true)
                .with_srama(true)
                .with_sramb(true),
            fvdd_tsettle: 0,
            fvdd_tstartup: 0,
            tx_chain_trim: RF_RESET,
            pll_vco_tap_location: RF_RESET,
            pll_trim: RF_RESET,
            rx_chain_trim: RF_RESET,
            pmu_trim: RF_RESET,
            rx_vco_lut: [RF_RESET; 2],
            tx_vco_lut: [RF_RESET; 2],
            tx_length: TxLength::new().with_tx_length(0x42),
            dmd_control2: DmdControl2::new().with_rssi_offset(0x11),
            rand_seed: 0,
            nvic_enabled: 0,
            nvic_pending: 0,
            icsr: 0,
            vtor: 0,
            scr: 0,
            actlr: 0,
            priorities: [None; Interrupt::COUNT],
            log: Vec::new(),
            latency: Latency::cooperative(),
            poll_cap: 10_000,
            csr_reads: Cell::new(0),
            since_osc_sel: Cell::new(None),
            since_cal32m: Cell::new(None),
            since_cal32k: Cell::new(None),
        }
    }

    pub(crate) fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    pub(crate) fn with_poll_cap(mut self, poll_cap: u32) -> Self {
        self.poll_cap = poll_cap;
        self
    }

    pub(crate) fn csr_reads(&self) -> u32 {
        self.csr_reads.get()
    }

    pub(crate) fn priority(&self, irq: Interrupt) -> Option<Priority> {
        self.priorities[irq as usize]
    }

    /// Registers written, in order, ignoring delays and priorities.
    pub(crate) fn writes(&self) -> Vec<(Reg, u32)> {
        self.log
            .iter()
            .filter_map(|e| match *e {
                Event::Write(reg, value) => Some((reg, value)),
                _ => None,
            })
            .collect()
    }

    /// First log position touching `reg`.
    pub(crate) fn first_write(&self, reg: Reg) -> Option<usize> {
        self.log
            .iter()
            .position(|e| matches!(e, Event::Write(r, _) if *r == reg))
    }

    fn record(&mut self, reg: Reg, value: u32) {
        self.log.push(Event::Write(reg, value));
    }
}

impl TrimStore for Sim {
    fn trim_record(&self) -> RawTrimRecord {
        self.trim
    }
}

impl ClockRegs for Sim {
    fn ccr(&self) -> Ccr {
        self.ccr
    }

    fn set_ccr(&mut self, ccr: Ccr) {
        let old = self.ccr;
        if !old.osc_sel() && ccr.osc_sel() {
            self.since_osc_sel.set(Some(0));
        }
        if !old.cal32m() && ccr.cal32m() {
            self.since_cal32m.set(Some(0));
        }
        if !old.cal32k() && ccr.cal32k() {
            self.since_cal32k.set(Some(0));
        }
        self.ccr = ccr;
        self.record(Reg::Ccr, ccr.into_bits());
    }

    fn csr(&self) -> Csr {
        let reads = self.csr_reads.get() + 1;
        self.csr_reads.set(reads);
        if reads > self.poll_cap {
            panic!("CSR poll cap of {} reads reached", self.poll_cap);
        }

        let osc_sel = tick(&self.since_osc_sel);
        let cal32m = tick(&self.since_cal32m);
        let cal32k = tick(&self.since_cal32k);
        let l = self.latency;

        Csr::new()
            .with_xtal32m(settled(osc_sel, l.xtal32m))
            .with_cal32mdone(settled(cal32m, l.cal32m_done))
            .with_cal32mfail(cal32m.is_some() && !settled(cal32m, l.cal32m_fail_clear))
            .with_done32k(settled(cal32k, l.cal32k_done))
            .with_cal32k(cal32k.is_some() && !settled(cal32k, l.cal32k_busy_clear))
    }

    fn set_trim_32k_ext(&mut self, trim: u32) {
        self.trim_32k_ext = trim;
        self.record(Reg::Trim32kExt, trim);
    }

    fn set_trim_32m_ext(&mut self, trim: u32) {
        self.trim_32m_ext = trim;
        self.record(Reg::Trim32mExt, trim);
    }

    fn pdis(&self) -> u32 {
        self.pdis
    }

    fn set_pdis(&mut self, pdis: u32) {
        self.pdis = pdis;
        self.record(Reg::Pdis, pdis);
    }

    fn set_fdiv(&mut self, fdiv: u32) {
        self.fdiv = fdiv;
        self.record(Reg::Fdiv, fdiv);
    }
}

impl PmuRegs for Sim {
    fn control(&self) -> PmuControl {
        self.pmu_control
    }

    fn set_control(&mut self, control: PmuControl) {
        self.pmu_control = control;
        self.record(Reg::PmuControl, control.into_bits());
    }

    fn set_fvdd_tsettle(&mut self, tsettle: u32) {
        self.fvdd_tsettle = tsettle;
        self.record(Reg::FvddTsettle, tsettle);
    }

    fn set_fvdd_tstartup(&mut self, tstartup: u32) {
        self.fvdd_tstartup = tstartup;
        self.record(Reg::FvddTstartup, tstartup);
    }
}

impl RfTrimRegs for Sim {
    fn set_tx_chain_trim(&mut self, trim: u32) {
        self.tx_chain_trim = trim;
        self.record(Reg::TxChainTrim, trim);
    }

    fn set_pll_vco_tap_location(&mut self, tap: u32) {
        self.pll_vco_tap_location = tap;
        self.record(Reg::PllVcoTapLocation, tap);
    }

    fn set_pll_trim(&mut self, trim: u32) {
        self.pll_trim = trim;
        self.record(Reg::PllTrim, trim);
    }

    fn set_rx_chain_trim(&mut self, trim: u32) {
        self.rx_chain_trim = trim;
        self.record(Reg::RxChainTrim, trim);
    }

    fn set_pmu_trim(&mut self, trim: u32) {
        self.pmu_trim = trim;
        self.record(Reg::PmuTrim, trim);
    }

    fn set_rx_vco_trim_lut1(&mut self, lut: u32) {
        self.rx_vco_lut[0] = lut;
        self.record(Reg::RxVcoLut1, lut);
    }

    fn set_rx_vco_trim_lut2(&mut self, lut: u32) {
        self.rx_vco_lut[1] = lut;
        self.record(Reg::RxVcoLut2, lut);
    }

    fn set_tx_vco_trim_lut1(&mut self, lut: u32) {
        self.tx_vco_lut[0] = lut;
        self.record(Reg::TxVcoLut1, lut);
    }

    fn set_tx_vco_trim_lut2(&mut self, lut: u32) {
        self.tx_vco_lut[1] = lut;
        self.record(Reg::TxVcoLut2, lut);
    }
}

impl MacHwRegs for Sim {
    fn tx_length(&self) -> TxLength {
        self.tx_length
    }

    fn set_tx_length(&mut self, tx_length: TxLength) {
        self.tx_length = tx_length;
        self.record(Reg::TxLength, tx_length.into_bits());
    }
}

impl DmdRegs for Sim {
    fn dmd_control2(&self) -> DmdControl2 {
        self.dmd_control2
    }

    fn set_dmd_control2(&mut self, control2: DmdControl2) {
        self.dmd_control2 = control2;
        self.record(Reg::DmdControl2, control2.into_bits());
    }
}

impl RandRegs for Sim {
    fn set_seed(&mut self, seed: u32) {
        self.rand_seed = seed;
        self.record(Reg::RandSeed, seed);
    }
}

impl CoreRegs for Sim {
    fn disable_irqs(&mut self, mask: u32) {
        self.nvic_enabled &= !mask;
        self.record(Reg::Icer0, mask);
    }

    fn unpend_irqs(&mut self, mask: u32) {
        self.nvic_pending &= !mask;
        self.record(Reg::Icpr0, mask);
    }

    fn set_priority(&mut self, irq: Interrupt, priority: Priority) {
        self.priorities[irq as usize] = Some(priority);
        self.log.push(Event::Priority(irq, priority));
    }

    fn set_icsr(&mut self, icsr: u32) {
        self.icsr = icsr;
        self.record(Reg::Icsr, icsr);
    }

    fn vector_table(&self) -> u32 {
        VECTOR_TABLE
    }

    fn set_vtor(&mut self, vtor: u32) {
        self.vtor = vtor;
        self.record(Reg::Vtor, vtor);
    }

    fn scr(&self) -> u32 {
        self.scr
    }

    fn set_scr(&mut self, scr: u32) {
        self.scr = scr;
        self.record(Reg::Scr, scr);
    }

    fn actlr(&self) -> u32 {
        self.actlr
    }

    fn set_actlr(&mut self, actlr: u32) {
        self.actlr = actlr;
        self.record(Reg::Actlr, actlr);
    }

    fn delay_cycles(&mut self, cycles: u32) {
        self.log.push(Event::Delay(cycles));
    }
}
