//! Clock control: oscillator calibration, core divider and peripheral clock gates.

use core::ops;

mod clock;
pub use clock::*;

use crate::regs::ClockRegs;
use crate::time::Hertz;

/// Frequency of the external crystal feeding the core clock divider.
pub const CPU_CLOCK_ROOT: Hertz = Hertz::mhz(32);

/// Core clock divider programmed at boot.
pub const CPU_CLOCK_DIV: u8 = 1;

const _: () = assert!(CPU_CLOCK_DIV >= 1);

/// Core clock divider. `FDIV` holds `divider - 1`; a divider of 0 acts as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FclkDivider(pub u8);

impl FclkDivider {
    /// Raw `CLOCKREG.FDIV` value.
    pub const fn fdiv(self) -> u32 {
        self.0.saturating_sub(1) as u32
    }
}

impl ops::Div<FclkDivider> for Hertz {
    type Output = Hertz;
    fn div(self, rhs: FclkDivider) -> Self::Output {
        if rhs.0 == 0 {
            self
        } else {
            Hertz(self.0 / rhs.0 as u32)
        }
    }
}

/// Peripheral clock frequency after bring-up. Pure; depends on constants only.
pub fn get_pclk_freq() -> Hertz {
    CPU_CLOCK_ROOT / FclkDivider(CPU_CLOCK_DIV)
}

/// Peripheral clock gates, by bit position in `CLOCKREG.PDIS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PeripheralClock {
    Timer0 = 0,
    Timer1 = 1,
    Timer2 = 2,
    Uart1 = 3,
    Spi = 4,
    I2c = 5,
    Gpio = 6,
    Wdog = 7,
    Rtc = 8,
    CrossBar = 9,
    Adc = 10,
    Pmu = 11,
    Rand = 12,
    MacHw = 13,
    Aes = 14,
    Dma = 15,
    Uart2 = 16,
    Spi2 = 17,
    I2c2 = 18,
}

impl PeripheralClock {
    const fn mask(self) -> u32 {
        1 << (self as u8)
    }
}

/// Ungates `clock`.
pub fn enable(regs: &mut impl ClockRegs, clock: PeripheralClock) {
    let pdis = regs.pdis();
    regs.set_pdis(pdis & !clock.mask());
}

/// Gates `clock`. The peripheral keeps its register contents.
pub fn disable(regs: &mut impl ClockRegs, clock: PeripheralClock) {
    let pdis = regs.pdis();
    regs.set_pdis(pdis | clock.mask());
}

pub fn is_enabled(regs: &impl ClockRegs, clock: PeripheralClock) -> bool {
    regs.pdis() & clock.mask() == 0
}
