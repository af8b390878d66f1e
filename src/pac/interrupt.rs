/// Device interrupt lines, numbered as NVIC inputs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum Interrupt {
    Tim0 = 0,
    Tim1 = 1,
    Tim2 = 2,
    Uart1 = 3,
    Spi = 4,
    I2c = 5,
    Gpio = 6,
    Rtc = 7,
    Flash = 8,
    MacHw = 9,
    Aes = 10,
    Adc = 11,
    ClockCal = 12,
    Uart2 = 13,
    Uvi = 14,
    Dma = 15,
    DbgPwrUp = 16,
    Spi2 = 17,
    I2c2 = 18,
    FvddhComp = 19,
}

impl Interrupt {
    /// Number of implemented lines. All of them sit in NVIC bank 0.
    pub const COUNT: usize = 20;

    pub const ALL: [Interrupt; Self::COUNT] = [
        Interrupt::Tim0,
        Interrupt::Tim1,
        Interrupt::Tim2,
        Interrupt::Uart1,
        Interrupt::Spi,
        Interrupt::I2c,
        Interrupt::Gpio,
        Interrupt::Rtc,
        Interrupt::Flash,
        Interrupt::MacHw,
        Interrupt::Aes,
        Interrupt::Adc,
        Interrupt::ClockCal,
        Interrupt::Uart2,
        Interrupt::Uvi,
        Interrupt::Dma,
        Interrupt::DbgPwrUp,
        Interrupt::Spi2,
        Interrupt::I2c2,
        Interrupt::FvddhComp,
    ];

    /// Bit of this line in `NVIC.ISER/ICER/ISPR/ICPR[0]`.
    #[inline(always)]
    pub const fn bank0_bit(self) -> u32 {
        1 << (self as u16)
    }
}

unsafe impl cortex_m::interrupt::InterruptNumber for Interrupt {
    #[inline(always)]
    fn number(self) -> u16 {
        self as u16
    }
}

#[cfg(all(feature = "rt", target_os = "none"))]
#[allow(non_snake_case)]
extern "C" {
    fn TIM0();
    fn TIM1();
    fn TIM2();
    fn UART1();
    fn SPI();
    fn I2C();
    fn GPIO();
    fn RTC();
    fn FLASH();
    fn MACHW();
    fn AES();
    fn ADC();
    fn CLOCKCAL();
    fn UART2();
    fn UVI();
    fn DMA();
    fn DBGPWRUP();
    fn SPI2();
    fn I2C2();
    fn FVDDHCOMP();
}

#[cfg(all(feature = "rt", target_os = "none"))]
#[doc(hidden)]
pub union Vector {
    _handler: unsafe extern "C" fn(),
    _reserved: u32,
}

/// Device part of the vector table. Handlers default to `DefaultHandler` via `device.x`.
#[cfg(all(feature = "rt", target_os = "none"))]
#[doc(hidden)]
#[link_section = ".vector_table.interrupts"]
#[no_mangle]
pub static __INTERRUPTS: [Vector; Interrupt::COUNT] = [
    Vector { _handler: TIM0 },
    Vector { _handler: TIM1 },
    Vector { _handler: TIM2 },
    Vector { _handler: UART1 },
    Vector { _handler: SPI },
    Vector { _handler: I2C },
    Vector { _handler: GPIO },
    Vector { _handler: RTC },
    Vector { _handler: FLASH },
    Vector { _handler: MACHW },
    Vector { _handler: AES },
    Vector { _handler: ADC },
    Vector { _handler: CLOCKCAL },
    Vector { _handler: UART2 },
    Vector { _handler: UVI },
    Vector { _handler: DMA },
    Vector { _handler: DBGPWRUP },
    Vector { _handler: SPI2 },
    Vector { _handler: I2C2 },
    Vector { _handler: FVDDHCOMP },
];
