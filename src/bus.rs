//! Seam to the host's digital-output facility.
//!
//! The driver never owns pin objects; it addresses outputs by the numeric
//! identifiers the caller wired into a [`PinAssignment`](crate::pins::PinAssignment).
//! Anything that can configure a numbered pin as an output and drive its
//! level can back the driver by implementing [`DigitalOutputs`].

use embedded_hal::digital::{OutputPin, PinState};

/// Host digital-output capability, addressed by pin identifier.
///
/// [`configure`](DigitalOutputs::configure) is called once per pin the
/// resolved bus width uses, during initialization;
/// [`set_level`](DigitalOutputs::set_level) is called on every
/// transmission. The protocol is write-only, so there is no read path.
pub trait DigitalOutputs {
    /// Error produced by pin configuration. Hardware specific; the driver
    /// treats it as opaque.
    type Error;

    /// Put `pin` into push-pull output mode.
    fn configure(&mut self, pin: u8) -> Result<(), Self::Error>;

    /// Drive `pin` to `level`.
    fn set_level(&mut self, pin: u8, level: PinState);

    /// Whether `pin` names a real output on this host.
    fn is_valid(&self, pin: u8) -> bool;
}

/// A bank of same-typed `embedded-hal` output pins, addressed by array
/// index.
///
/// Most HALs can erase concrete pins to one common type, which makes a
/// bank straightforward to assemble:
///
/// ```ignore
/// let bank = PinBank::new([
///     gpioa.pa0.into_push_pull_output().erase(), // id 0
///     gpioa.pa2.into_push_pull_output().erase(), // id 1
///     // ...
/// ]);
/// ```
pub struct PinBank<P: OutputPin, const N: usize> {
    pins: [P; N],
}

impl<P: OutputPin, const N: usize> PinBank<P, N> {
    /// Wrap an array of output pins; pin identifier = array index.
    pub fn new(pins: [P; N]) -> Self {
        Self { pins }
    }

    /// Hand the pins back.
    pub fn release(self) -> [P; N] {
        self.pins
    }
}

impl<P: OutputPin, const N: usize> DigitalOutputs for PinBank<P, N> {
    type Error = P::Error;

    fn configure(&mut self, _pin: u8) -> Result<(), Self::Error> {
        // typed pins are already outputs, nothing left to configure
        Ok(())
    }

    fn set_level(&mut self, pin: u8, level: PinState) {
        if let Some(pin) = self.pins.get_mut(pin as usize) {
            pin.set_state(level).ok().unwrap();
        }
    }

    fn is_valid(&self, pin: u8) -> bool {
        (pin as usize) < N
    }
}
