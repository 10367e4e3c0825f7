pub(crate) const TCCR0A: *mut ControlA = 0x44 as *mut ControlA;
pub(crate) const TCCR0B: *mut ControlB = 0x45 as *mut ControlB;
pub(crate) const TCNT0: *mut u8 = 0x46 as *mut u8;
pub(crate) const OCR0A: *mut u8 = 0x47 as *mut u8;
pub(crate) const TIMSK0: *mut InterruptMask = 0x6e as *mut InterruptMask;

/// Waveform generation mode, WGM02:00.
///
/// The field is split across the control registers: WGM01:00 live in TCCR0A
/// and WGM02 lives in TCCR0B.
#[derive(Clone, Copy, Debug)]
#[repr(u8)]
pub(crate) enum Waveform {
    /// Clear timer on compare match, with OCR0A as TOP.
    CtcOcr0a = 0b010,
}

impl Waveform {
    const fn low_bits(self) -> u8 {
        self as u8 & 0b11
    }

    const fn high_bits(self) -> u8 {
        self as u8 >> 2
    }
}

/// Clock select, CS02:00.
#[derive(Clone, Copy, Debug)]
#[repr(u8)]
pub(crate) enum Clock {
    /// External clock on the T0 pin, falling edge.
    #[allow(dead_code)]
    ExternalFalling = 0b110,
    /// External clock on the T0 pin, rising edge.
    ExternalRising = 0b111,
}

/// Timer0 control register A.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ControlA(u8);

impl ControlA {
    pub(crate) const fn new() -> Self {
        Self(0)
    }

    pub(crate) const fn waveform(self, waveform: Waveform) -> Self {
        Self((self.0 & 0b1111_1100) | waveform.low_bits())
    }

    pub(crate) const fn bits(self) -> u8 {
        self.0
    }
}

/// Timer0 control register B.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ControlB(u8);

impl ControlB {
    pub(crate) const fn new() -> Self {
        Self(0)
    }

    pub(crate) const fn waveform(self, waveform: Waveform) -> Self {
        Self((self.0 & 0b1111_0111) | (waveform.high_bits() << 3))
    }

    pub(crate) const fn clock(self, clock: Clock) -> Self {
        Self((self.0 & 0b1111_1000) | clock as u8)
    }

    pub(crate) const fn bits(self) -> u8 {
        self.0
    }
}

/// Timer0 interrupt mask register, TIMSK0.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct InterruptMask(u8);

impl InterruptMask {
    #[allow(dead_code)]
    pub(crate) const NONE: Self = Self(0b0000_0000);
    /// OCIE0A, the compare match A interrupt enable.
    pub(crate) const COMPARE_A: Self = Self(0b0000_0010);

    #[allow(dead_code)]
    pub(crate) const fn contains(self, mask: Self) -> bool {
        self.0 & mask.0 == mask.0
    }

    pub(crate) const fn bits(self) -> u8 {
        self.0
    }
}
