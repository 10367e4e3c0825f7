use crate::{
    format,
    mmio::timer1::{
        Clock, CompareOutputA, ControlA, ControlB, InterruptMask, OCR1A, TCCR1A, TCCR1B, TCNT1,
        TIMSK1, Waveform,
    },
};
use embedded_io::Write;

/// Handle to the Timer/Counter1 register file.
#[derive(Debug)]
pub struct Timer1 {
    tccr1a: *mut ControlA,
    tccr1b: *mut ControlB,
    tcnt1: *mut u16,
    ocr1a: *mut u16,
    timsk1: *mut InterruptMask,
}

impl Timer1 {
    /// Create a handle to the hardware register file.
    ///
    /// # Safety
    /// The caller must ensure no other code is concurrently reconfiguring
    /// Timer1. The 16-bit TCNT1 and OCR1A accesses are not atomic; disable
    /// interrupts around calls if a Timer1 interrupt could fire mid-access.
    pub const unsafe fn new() -> Self {
        Self {
            tccr1a: TCCR1A,
            tccr1b: TCCR1B,
            tcnt1: TCNT1,
            ocr1a: OCR1A,
            timsk1: TIMSK1,
        }
    }

    /// Configure Timer1 to count rising edges on the T1 pin, clearing on
    /// compare match with `count` and interrupting on each match.
    ///
    /// The full previous configuration is overwritten. A negative `count` is
    /// reinterpreted as unsigned when loaded into OCR1A.
    pub fn setup_for_counting(&mut self, count: i16) {
        unsafe {
            self.tccr1a
                .write_volatile(ControlA::new().waveform(Waveform::CtcOcr1a));
            self.tccr1b.write_volatile(
                ControlB::new()
                    .waveform(Waveform::CtcOcr1a)
                    .clock(Clock::ExternalRising),
            );
            self.tcnt1.write_volatile(0);
            self.ocr1a.write_volatile(count as u16);
            self.timsk1.write_volatile(InterruptMask::COMPARE_A);
        }
        log::debug!(
            "timer1: CTC on OCR1A, external rising edge, compare = {}",
            count as u16
        );
    }

    /// Configure Timer1 for phase-correct PWM with OCR1A as TOP, clocked
    /// internally at 1/1024 of the system clock.
    ///
    /// OC1A is set on compare match while up-counting and cleared while
    /// down-counting; the compare match interrupt fires on each match.
    pub fn setup_for_phase_correct_pwm(&mut self, count: i16) {
        unsafe {
            self.tccr1a.write_volatile(
                ControlA::new()
                    .waveform(Waveform::PhaseCorrectOcr1a)
                    .compare_output_a(CompareOutputA::SetUpClearDown),
            );
            self.tccr1b.write_volatile(
                ControlB::new()
                    .waveform(Waveform::PhaseCorrectOcr1a)
                    .clock(Clock::Div1024),
            );
            self.tcnt1.write_volatile(0);
            self.ocr1a.write_volatile(count as u16);
            self.timsk1.write_volatile(InterruptMask::COMPARE_A);
        }
        log::debug!(
            "timer1: phase-correct PWM on OCR1A, clk/1024, compare = {}",
            count as u16
        );
    }

    /// Update the compare count without touching the rest of the
    /// configuration.
    ///
    /// The new count takes effect asynchronously relative to the counter's
    /// current phase, which may cause a visible hiccup in the output timing.
    pub fn set_count(&mut self, count: i16) {
        unsafe {
            self.ocr1a.write_volatile(count as u16);
        }
    }

    /// Write the Timer1 register contents to `sink` as labeled binary
    /// strings.
    ///
    /// OCR1A is 16 bits wide and is reported as two lines, high byte first.
    pub fn report<W>(&self, sink: &mut W) -> Result<(), W::Error>
    where
        W: Write,
    {
        let (tccr1a, tccr1b, timsk1, ocr1a) = unsafe {
            (
                self.tccr1a.read_volatile(),
                self.tccr1b.read_volatile(),
                self.timsk1.read_volatile(),
                self.ocr1a.read_volatile(),
            )
        };

        sink.write_all(b"\n----- Timer1 Information -----\n")?;
        format::write_register(sink, b"TCCR1A: ", tccr1a.bits())?;
        format::write_register(sink, b"TCCR1B: ", tccr1b.bits())?;
        format::write_register(sink, b"TIMSK1: ", timsk1.bits())?;
        format::write_register(sink, b"OCR1AH: ", (ocr1a >> 8) as u8)?;
        format::write_register(sink, b"OCR1AL: ", ocr1a as u8)?;
        sink.write_all(b"------------------------------\n\n")
    }
}
