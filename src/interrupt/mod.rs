//! Interrupt lines and boot-time NVIC priorities.
//!
//! The NVIC implements 4 priority bits, so there are 16 levels (`P0` highest).

pub use embassy_hal_internal::interrupt::Priority;

pub use crate::pac::Interrupt;
use crate::regs::CoreRegs;

/// Every implemented line in `NVIC.ICER/ICPR[0]`.
pub const IRQ_BANK0_MASK: u32 = {
    let mut mask = 0;
    let mut i = 0;
    while i < Interrupt::COUNT {
        mask |= Interrupt::ALL[i].bank0_bit();
        i += 1;
    }
    mask
};

/// Priority class of a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Class {
    Normal,
    /// MAC hardware and crypto: one level above everything else.
    RealTime,
}

/// Sources configured at boot. `Flash` and `FvddhComp` keep their reset priority.
pub const PRIORITY_TABLE: [(Interrupt, Class); 18] = [
    (Interrupt::Tim0, Class::Normal),
    (Interrupt::Tim1, Class::Normal),
    (Interrupt::Tim2, Class::Normal),
    (Interrupt::Uart1, Class::Normal),
    (Interrupt::Spi, Class::Normal),
    (Interrupt::I2c, Class::Normal),
    (Interrupt::Gpio, Class::Normal),
    (Interrupt::Rtc, Class::Normal),
    (Interrupt::MacHw, Class::RealTime),
    (Interrupt::Aes, Class::RealTime),
    (Interrupt::Adc, Class::Normal),
    (Interrupt::ClockCal, Class::Normal),
    (Interrupt::Uart2, Class::Normal),
    (Interrupt::Dma, Class::Normal),
    (Interrupt::Uvi, Class::Normal),
    (Interrupt::DbgPwrUp, Class::Normal),
    (Interrupt::Spi2, Class::Normal),
    (Interrupt::I2c2, Class::Normal),
];

/// Priority configuration error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The real-time level is not strictly above the normal level.
    InvertedPriorities { normal: u8, real_time: u8 },
}

/// Levels per [`Class`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Config {
    pub normal: Priority,
    pub real_time: Priority,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            normal: Priority::P14,
            real_time: Priority::P13,
        }
    }

    pub fn check(&self) -> Result<(), Error> {
        let normal = self.normal as u8;
        let real_time = self.real_time as u8;
        if real_time < normal {
            Ok(())
        } else {
            Err(Error::InvertedPriorities { normal, real_time })
        }
    }

    pub fn level(&self, class: Class) -> Priority {
        match class {
            Class::Normal => self.normal,
            Class::RealTime => self.real_time,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Assign the boot priority of every source in [`PRIORITY_TABLE`]. Idempotent.
pub fn configure_priorities(hw: &mut impl CoreRegs, config: &Config) {
    for &(irq, class) in PRIORITY_TABLE.iter() {
        hw.set_priority(irq, config.level(class));
    }
}
