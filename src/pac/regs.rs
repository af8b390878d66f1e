use bitfield_struct::bitfield;

/// `CLOCKREG.CCR`: clock control.
#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct Ccr {
    /// [0] OSC_SEL: 1 selects the external 32 MHz crystal as clock source.
    pub osc_sel: bool,
    /// [1] CAL32K: start calibration of the internal 32 kHz RC.
    pub cal32k: bool,
    /// [2] CAL32M: start calibration of the internal 32 MHz RC.
    pub cal32m: bool,
    #[bits(29)]
    __: u32,
}

/// `CLOCKREG.CSR`: clock status, written by hardware only.
#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct Csr {
    /// [0] XTAL32K: external 32 kHz crystal running.
    pub xtal32k: bool,
    /// [1] XTAL32M: external 32 MHz crystal ready.
    pub xtal32m: bool,
    /// [2] CAL32MDONE
    pub cal32mdone: bool,
    /// [3] CAL32MFAIL
    pub cal32mfail: bool,
    /// [4] DONE32K
    pub done32k: bool,
    /// [5] CAL32K: 32 kHz calibration still running.
    pub cal32k: bool,
    #[bits(26)]
    __: u32,
}

/// `PMUREG.CONTROL`.
///
/// The oscillator and SRAM bits are power-down requests: writing 1 turns the
/// block off (or lets it drop in coma mode), writing 0 keeps it powered.
#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct PmuControl {
    /// [0] INT32K: internal 32 kHz RC power-down.
    pub int32k: bool,
    /// [1] INT32M: internal 32 MHz RC power-down.
    pub int32m: bool,
    /// [2] EXT32K: external 32 kHz crystal power-down.
    pub ext32k: bool,
    /// [3] SRAMA: SRAM bank A may power down in coma mode.
    pub srama: bool,
    /// [4] SRAMB: SRAM bank B may power down in coma mode.
    pub sramb: bool,
    /// [5] N1V1: switching regulator in active mode.
    pub n1v1: bool,
    /// [6] C1V1: switching regulator in coma mode.
    pub c1v1: bool,
    #[bits(25)]
    __: u32,
}

/// `MACHWREG.TX_LENGTH`.
#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct TxLength {
    /// [7:0] TX_LENGTH
    #[bits(8)]
    pub tx_length: u8,
    /// [11:8] TX_PRE_CHIPS: preamble chips sent before the frame.
    #[bits(4)]
    pub tx_pre_chips: u8,
    #[bits(20)]
    __: u32,
}

impl TxLength {
    pub const TX_PRE_CHIPS_MASK: u32 = 0xF;
}

/// `DMDREG.DMD_CONTROL2`.
#[bitfield(u32, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct DmdControl2 {
    /// [7:0] RSSI_OFFSET
    #[bits(8)]
    pub rssi_offset: u8,
    #[bits(24)]
    __: u32,
}

impl DmdControl2 {
    pub const RSSI_OFFSET_MASK: u32 = 0xFF;
}

/// `SCB.SCR` bits cleared during PMU setup (ARMv7-M).
pub mod scr {
    pub const SLEEPONEXIT: u32 = 1 << 1;
    pub const SEVONPEND: u32 = 1 << 4;
}

/// `SCB.ICSR` write-one-to-clear bits.
pub mod icsr {
    pub const PENDSTCLR: u32 = 1 << 25;
    pub const PENDSVCLR: u32 = 1 << 27;
}

/// `SCnSCB.ACTLR` bits.
pub mod actlr {
    /// Disable write buffering of default memory map accesses, making bus faults precise.
    pub const DISDEFWBUF: u32 = 1 << 1;
}
