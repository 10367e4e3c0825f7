use crate::{
    format,
    mmio::timer0::{
        Clock, ControlA, ControlB, InterruptMask, OCR0A, TCCR0A, TCCR0B, TCNT0, TIMSK0, Waveform,
    },
};
use embedded_io::Write;

/// Handle to the Timer/Counter0 register file.
///
/// Timer0 drives the Arduino `millis()` and `delay()` machinery, so only
/// reconfigure it when the surrounding program does not rely on those.
#[derive(Debug)]
pub struct Timer0 {
    tccr0a: *mut ControlA,
    tccr0b: *mut ControlB,
    tcnt0: *mut u8,
    ocr0a: *mut u8,
    timsk0: *mut InterruptMask,
}

impl Timer0 {
    /// Create a handle to the hardware register file.
    ///
    /// # Safety
    /// The caller must ensure no other code is concurrently reconfiguring
    /// Timer0.
    pub const unsafe fn new() -> Self {
        Self {
            tccr0a: TCCR0A,
            tccr0b: TCCR0B,
            tcnt0: TCNT0,
            ocr0a: OCR0A,
            timsk0: TIMSK0,
        }
    }

    /// Configure Timer0 to count rising edges on the T0 pin, clearing on
    /// compare match with `count` and interrupting on each match.
    ///
    /// The full previous configuration is overwritten. The caller still has
    /// to enable global interrupts and provide the `TIMER0_COMPA` handler.
    pub fn setup_for_counting(&mut self, count: u8) {
        unsafe {
            self.tccr0a
                .write_volatile(ControlA::new().waveform(Waveform::CtcOcr0a));
            self.tccr0b.write_volatile(
                ControlB::new()
                    .waveform(Waveform::CtcOcr0a)
                    .clock(Clock::ExternalRising),
            );
            self.tcnt0.write_volatile(0);
            self.ocr0a.write_volatile(count);
            self.timsk0.write_volatile(InterruptMask::COMPARE_A);
        }
        log::debug!("timer0: CTC on OCR0A, external rising edge, compare = {count}");
    }

    /// Write the Timer0 register contents to `sink` as labeled binary
    /// strings.
    pub fn report<W>(&self, sink: &mut W) -> Result<(), W::Error>
    where
        W: Write,
    {
        let (tccr0a, tccr0b, timsk0) = unsafe {
            (
                self.tccr0a.read_volatile(),
                self.tccr0b.read_volatile(),
                self.timsk0.read_volatile(),
            )
        };

        sink.write_all(b"\n----- Timer0 Information -----\n")?;
        format::write_register(sink, b"TCCR0A: ", tccr0a.bits())?;
        format::write_register(sink, b"TCCR0B: ", tccr0b.bits())?;
        format::write_register(sink, b"TIMSK0: ", timsk0.bits())?;
        sink.write_all(b"------------------------------\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::Timer0;
    use crate::mmio::timer0::{ControlA, ControlB, InterruptMask};
    use claims::assert_ok;
    use std::str;

    /// In-memory stand-in for the hardware register file.
    struct Registers {
        tccr0a: ControlA,
        tccr0b: ControlB,
        tcnt0: u8,
        ocr0a: u8,
        timsk0: InterruptMask,
    }

    impl Registers {
        fn new() -> Self {
            Self {
                tccr0a: ControlA::new(),
                tccr0b: ControlB::new(),
                tcnt0: 0,
                ocr0a: 0,
                timsk0: InterruptMask::NONE,
            }
        }

        fn timer(&mut self) -> Timer0 {
            Timer0 {
                tccr0a: &mut self.tccr0a,
                tccr0b: &mut self.tccr0b,
                tcnt0: &mut self.tcnt0,
                ocr0a: &mut self.ocr0a,
                timsk0: &mut self.timsk0,
            }
        }

        fn snapshot(&self) -> (ControlA, ControlB, u8, u8, InterruptMask) {
            (self.tccr0a, self.tccr0b, self.tcnt0, self.ocr0a, self.timsk0)
        }
    }

    #[test]
    fn setup_for_counting_loads_compare() {
        let mut registers = Registers::new();

        registers.timer().setup_for_counting(100);

        assert_eq!(registers.ocr0a, 100);
        assert_eq!(registers.tcnt0, 0);
    }

    #[test]
    fn setup_for_counting_mode_bits() {
        let mut registers = Registers::new();

        registers.timer().setup_for_counting(100);

        // WGM01 for CTC; CS02:00 all set for external rising edge.
        assert_eq!(registers.tccr0a.bits(), 0b0000_0010);
        assert_eq!(registers.tccr0b.bits(), 0b0000_0111);
    }

    #[test]
    fn setup_for_counting_enables_compare_interrupt() {
        let mut registers = Registers::new();

        registers.timer().setup_for_counting(100);

        assert!(registers.timsk0.contains(InterruptMask::COMPARE_A));
        assert_eq!(registers.timsk0.bits(), 0b0000_0010);
    }

    #[test]
    fn setup_for_counting_idempotent() {
        let mut registers = Registers::new();

        registers.timer().setup_for_counting(42);
        let first = registers.snapshot();
        registers.timer().setup_for_counting(42);

        assert_eq!(registers.snapshot(), first);
    }

    #[test]
    fn setup_for_counting_overwrites_previous_count() {
        let mut registers = Registers::new();

        registers.timer().setup_for_counting(250);
        registers.timer().setup_for_counting(3);

        assert_eq!(registers.ocr0a, 3);
    }

    #[test]
    fn report_output() {
        let mut registers = Registers::new();
        registers.timer().setup_for_counting(100);

        let mut buffer = [0; 128];
        let mut sink = &mut buffer[..];
        assert_ok!(registers.timer().report(&mut sink));
        let written = 128 - sink.len();

        assert_eq!(
            str::from_utf8(&buffer[..written]),
            Ok("\n----- Timer0 Information -----\n\
                TCCR0A: 00000010\n\
                TCCR0B: 00000111\n\
                TIMSK0: 00000010\n\
                ------------------------------\n\n")
        );
    }
}
