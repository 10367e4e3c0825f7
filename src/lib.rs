//! Timer/counter configuration for the ATmega328P.
//!
//! Centralizes the register setup for Timer0 and Timer1, which otherwise
//! takes a lot of datasheet research, and renders the resulting register
//! contents as binary strings for debugging over a serial sink.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod format;

mod mmio;
mod timer0;
mod timer1;

pub use timer0::Timer0;
pub use timer1::Timer1;
