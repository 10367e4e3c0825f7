//! Binary-string rendering of register values.

use embedded_io::Write;

/// Render a byte as its 8 binary digits, most significant bit first.
///
/// For example, 7 renders as `00000111`.
pub const fn binary(byte: u8) -> [u8; 8] {
    let mut digits = [0; 8];
    let mut i = 0;
    while i < 8 {
        digits[7 - i] = b'0' + ((byte >> i) & 1);
        i += 1;
    }
    digits
}

/// Write a labeled register line, e.g. `TCCR0A: 00000111`.
pub(crate) fn write_register<W>(sink: &mut W, label: &[u8], value: u8) -> Result<(), W::Error>
where
    W: Write,
{
    sink.write_all(label)?;
    sink.write_all(&binary(value))?;
    sink.write_all(b"\n")
}
