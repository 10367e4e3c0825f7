pub(crate) const TCCR1A: *mut ControlA = 0x80 as *mut ControlA;
pub(crate) const TCCR1B: *mut ControlB = 0x81 as *mut ControlB;
pub(crate) const TCNT1: *mut u16 = 0x84 as *mut u16;
pub(crate) const OCR1A: *mut u16 = 0x88 as *mut u16;
pub(crate) const TIMSK1: *mut InterruptMask = 0x6f as *mut InterruptMask;

/// Waveform generation mode, WGM13:10.
///
/// The field is split across the control registers: WGM11:10 live in TCCR1A
/// and WGM13:12 live in TCCR1B.
#[derive(Clone, Copy, Debug)]
#[repr(u8)]
pub(crate) enum Waveform {
    /// Clear timer on compare match, with OCR1A as TOP.
    CtcOcr1a = 0b0100,
    /// Phase-correct PWM, with OCR1A as TOP.
    PhaseCorrectOcr1a = 0b1011,
}

impl Waveform {
    const fn low_bits(self) -> u8 {
        self as u8 & 0b11
    }

    const fn high_bits(self) -> u8 {
        self as u8 >> 2
    }
}

/// Clock select, CS12:10.
#[derive(Clone, Copy, Debug)]
#[repr(u8)]
pub(crate) enum Clock {
    /// Internal clock, prescaled by 1024.
    Div1024 = 0b101,
    /// External clock on the T1 pin, rising edge.
    ExternalRising = 0b111,
}

/// Compare output mode for channel A, COM1A1:0.
#[derive(Clone, Copy, Debug)]
#[repr(u8)]
pub(crate) enum CompareOutputA {
    /// Set OC1A on compare match while up-counting, clear while
    /// down-counting.
    SetUpClearDown = 0b11,
}

/// Timer1 control register A.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ControlA(u8);

impl ControlA {
    pub(crate) const fn new() -> Self {
        Self(0)
    }

    pub(crate) const fn waveform(self, waveform: Waveform) -> Self {
        Self((self.0 & 0b1111_1100) | waveform.low_bits())
    }

    pub(crate) const fn compare_output_a(self, mode: CompareOutputA) -> Self {
        Self((self.0 & 0b0011_1111) | ((mode as u8) << 6))
    }

    pub(crate) const fn bits(self) -> u8 {
        self.0
    }
}

/// Timer1 control register B.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ControlB(u8);

impl ControlB {
    pub(crate) const fn new() -> Self {
        Self(0)
    }

    pub(crate) const fn waveform(self, waveform: Waveform) -> Self {
        Self((self.0 & 0b1110_0111) | (waveform.high_bits() << 3))
    }

    pub(crate) const fn clock(self, clock: Clock) -> Self {
        Self((self.0 & 0b1111_1000) | clock as u8)
    }

    pub(crate) const fn bits(self) -> u8 {
        self.0
    }
}

/// Timer1 interrupt mask register, TIMSK1.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct InterruptMask(u8);

impl InterruptMask {
    #[allow(dead_code)]
    pub(crate) const NONE: Self = Self(0b0000_0000);
    /// OCIE1A, the compare match A interrupt enable.
    pub(crate) const COMPARE_A: Self = Self(0b0000_0010);

    #[allow(dead_code)]
    pub(crate) const fn contains(self, mask: Self) -> bool {
        self.0 & mask.0 == mask.0
    }

    pub(crate) const fn bits(self) -> u8 {
        self.0
    }
}
