//! Register map for the subset of NCS36510 blocks touched during bring-up.
//!
//! Only what the bring-up sequence reads or writes is described here. Block
//! base addresses and register offsets follow the vendor memory map
//! (`memory_map.h` and the per-block `*_map.h` headers of the ON Semiconductor
//! SDK). Register values are typed with `bitfield-struct` where a register
//! carries more than one field; single-value registers stay plain `u32`.

mod interrupt;
mod regs;

pub use interrupt::Interrupt;
#[cfg(all(feature = "rt", target_os = "none"))]
pub use interrupt::__INTERRUPTS;
pub use regs::*;

/// Factory trim record, in flash.
pub mod trimreg {
    pub const BASE: usize = 0x0000_1FA0;
}

/// Clock control (`CLOCKREG`).
pub mod clockreg {
    pub const BASE: usize = 0x4001_B000;

    pub const CCR: usize = 0x00;
    pub const CSR: usize = 0x04;
    pub const TRIM_32M_EXT: usize = 0x10;
    pub const TRIM_32K_EXT: usize = 0x14;
    pub const PDIS: usize = 0x1C;
    pub const FDIV: usize = 0x20;
}

/// Power management unit (`PMUREG`).
pub mod pmureg {
    pub const BASE: usize = 0x4001_D000;

    pub const CONTROL: usize = 0x00;
    pub const FVDD_TSETTLE: usize = 0x1C;
    pub const FVDD_TSTARTUP: usize = 0x20;
}

/// RF analog trim block (`RFANATRIMREG`).
pub mod rfanatrimreg {
    pub const BASE: usize = 0x4001_9080;

    pub const TX_CHAIN_TRIM: usize = 0x00;
    pub const PLL_VCO_TAP_LOCATION: usize = 0x04;
    pub const PLL_TRIM: usize = 0x08;
    pub const RX_CHAIN_TRIM: usize = 0x0C;
    pub const PMU_TRIM: usize = 0x10;
    pub const RX_VCO_TRIM_LUT1: usize = 0x14;
    pub const RX_VCO_TRIM_LUT2: usize = 0x18;
    pub const TX_VCO_TRIM_LUT1: usize = 0x1C;
    pub const TX_VCO_TRIM_LUT2: usize = 0x20;
}

/// 802.15.4 MAC hardware (`MACHWREG`).
pub mod machwreg {
    pub const BASE: usize = 0x4001_4000;

    pub const TX_LENGTH: usize = 0x14;
}

/// Demodulator (`DMDREG`).
pub mod dmdreg {
    pub const BASE: usize = 0x4001_5000;

    pub const DMD_CONTROL2: usize = 0x08;
}

/// Random number generator (`RANDREG`).
pub mod randreg {
    pub const BASE: usize = 0x4001_1000;

    pub const WR_SEED_RD_RAND: usize = 0x00;
}
