//! Factory trim loader.
//!
//! The manufacturing flow programs a fixed record at [`pac::trimreg::BASE`]
//! (see [`RawTrimRecord`] for the layout). [`apply_trim`] copies it into the
//! clock, RF analog, MAC, demodulator, PMU and RNG registers once at boot.
//!
//! [`pac::trimreg::BASE`]: crate::pac::trimreg::BASE

use crate::pac::{DmdControl2, TxLength};
use crate::regs::{ClockRegs, DmdRegs, MacHwRegs, RandRegs, RfTrimRegs, TrimStore};

/// Revision word of an erased (never programmed) trim record.
pub const REVISION_NOT_PROGRAMMED: u32 = 0xFFFF_FFFF;

/// Board-level trims use the upper half-word as a presence marker.
const BOARD_TRIM_ABSENT: u32 = 0xFFFF_0000;

/// Trim error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The record still holds the erased revision word.
    NotProgrammed,
}

/// Trim record exactly as stored in flash.
///
/// The layout is produced by the manufacturing tooling; field order and
/// width must not change.
#[repr(C)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RawTrimRecord {
    pub revision_code: u32,
    pub trim_32k_ext: u32,
    pub trim_32m_ext: u32,
    pub tx_pre_chips: u32,
    pub tx_chain_trim: u32,
    pub pll_vco_tap_location: u32,
    pub pll_trim: u32,
    pub rssi_offset: u32,
    pub rx_chain_trim: u32,
    pub pmu_trim: u32,
    pub wr_seed_rd_rand: u32,
    pub rx_vco_lut1: u32,
    pub rx_vco_lut2: u32,
    pub tx_vco_lut1: u32,
    pub tx_vco_lut2: u32,
}

const _: () = assert!(core::mem::size_of::<RawTrimRecord>() == RawTrimRecord::WORDS * 4);

impl RawTrimRecord {
    pub const WORDS: usize = 15;

    /// An erased flash page.
    pub const fn erased() -> Self {
        Self::from_words(&[0xFFFF_FFFF; Self::WORDS])
    }

    /// Build a record from its words in flash order.
    pub const fn from_words(words: &[u32; Self::WORDS]) -> Self {
        Self {
            revision_code: words[0],
            trim_32k_ext: words[1],
            trim_32m_ext: words[2],
            tx_pre_chips: words[3],
            tx_chain_trim: words[4],
            pll_vco_tap_location: words[5],
            pll_trim: words[6],
            rssi_offset: words[7],
            rx_chain_trim: words[8],
            pmu_trim: words[9],
            wr_seed_rd_rand: words[10],
            rx_vco_lut1: words[11],
            rx_vco_lut2: words[12],
            tx_vco_lut1: words[13],
            tx_vco_lut2: words[14],
        }
    }
}

/// Decoded trim record.
///
/// Board-level trims (the two external oscillators and the RSSI offset) may be
/// missing on some boards and are `None` then. Chip-level trims are always
/// populated once any trim data exists.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrimData {
    pub revision: u32,
    pub trim_32k_ext: Option<u32>,
    pub trim_32m_ext: Option<u32>,
    pub tx_pre_chips: u32,
    pub tx_chain_trim: u32,
    pub pll_vco_tap_location: u32,
    pub pll_trim: u32,
    pub rssi_offset: Option<u32>,
    pub rx_chain_trim: u32,
    pub pmu_trim: u32,
    pub rand_seed: u32,
    pub rx_vco_lut: [u32; 2],
    pub tx_vco_lut: [u32; 2],
}

fn board_trim(raw: u32) -> Option<u32> {
    (raw & BOARD_TRIM_ABSENT != BOARD_TRIM_ABSENT).then_some(raw)
}

impl TrimData {
    pub fn decode(raw: &RawTrimRecord) -> Result<Self, Error> {
        if raw.revision_code == REVISION_NOT_PROGRAMMED {
            return Err(Error::NotProgrammed);
        }

        Ok(Self {
            revision: raw.revision_code,
            trim_32k_ext: board_trim(raw.trim_32k_ext),
            trim_32m_ext: board_trim(raw.trim_32m_ext),
            tx_pre_chips: raw.tx_pre_chips,
            tx_chain_trim: raw.tx_chain_trim,
            pll_vco_tap_location: raw.pll_vco_tap_location,
            pll_trim: raw.pll_trim,
            rssi_offset: board_trim(raw.rssi_offset),
            rx_chain_trim: raw.rx_chain_trim,
            pmu_trim: raw.pmu_trim,
            rand_seed: raw.wr_seed_rd_rand,
            rx_vco_lut: [raw.rx_vco_lut1, raw.rx_vco_lut2],
            tx_vco_lut: [raw.tx_vco_lut1, raw.tx_vco_lut2],
        })
    }

    /// Write every trim to its register. Absent board trims leave the
    /// hardware default in place.
    pub fn apply(&self, hw: &mut impl TrimTargets) {
        if let Some(trim) = self.trim_32k_ext {
            hw.set_trim_32k_ext(trim);
        }
        if let Some(trim) = self.trim_32m_ext {
            hw.set_trim_32m_ext(trim);
        }

        let pre_chips = (self.tx_pre_chips & TxLength::TX_PRE_CHIPS_MASK) as u8;
        hw.modify_tx_length(|w| w.set_tx_pre_chips(pre_chips));

        hw.set_tx_chain_trim(self.tx_chain_trim);
        hw.set_pll_vco_tap_location(self.pll_vco_tap_location);
        hw.set_pll_trim(self.pll_trim);

        if let Some(offset) = self.rssi_offset {
            let offset = (offset & DmdControl2::RSSI_OFFSET_MASK) as u8;
            hw.modify_dmd_control2(|w| w.set_rssi_offset(offset));
        }

        hw.set_rx_chain_trim(self.rx_chain_trim);
        hw.set_pmu_trim(self.pmu_trim);
        hw.set_seed(self.rand_seed);

        // REVD boards carry RX VCO trims for high-side injection.
        hw.set_rx_vco_trim_lut1(self.rx_vco_lut[0]);
        hw.set_rx_vco_trim_lut2(self.rx_vco_lut[1]);
        hw.set_tx_vco_trim_lut1(self.tx_vco_lut[0]);
        hw.set_tx_vco_trim_lut2(self.tx_vco_lut[1]);
    }
}

/// Registers that receive trim values.
pub trait TrimTargets: ClockRegs + RfTrimRegs + MacHwRegs + DmdRegs + RandRegs {}

impl<T> TrimTargets for T where T: ClockRegs + RfTrimRegs + MacHwRegs + DmdRegs + RandRegs {}

/// Copy the factory trim record into the hardware.
///
/// Returns `false` and writes nothing if the record was never programmed; the
/// hardware then keeps its less accurate reset calibration.
pub fn apply_trim<H: TrimStore + TrimTargets>(hw: &mut H) -> bool {
    match TrimData::decode(&hw.trim_record()) {
        Ok(trim) => {
            info!("trim: applying revision {:#x}", trim.revision);
            trim.apply(hw);
            true
        }
        Err(e) => {
            warn!("trim: {:?}, keeping reset calibration", e);
            false
        }
    }
}
