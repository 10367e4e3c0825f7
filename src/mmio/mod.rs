pub(crate) mod timer0;
pub(crate) mod timer1;
