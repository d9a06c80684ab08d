/*!
# LCD1602 parallel driver

Driver for HD44780-class 2 row × 16 column character LCDs wired directly to
host GPIO, with the R/W line grounded (write-only protocol).

Basic Usage:

1. Provide a GPIO facility <br/>
    Implement [`bus::DigitalOutputs`] for your platform's pin-by-number
    GPIO layer, or collect `embedded-hal` output pins into a
    [`bus::PinBank`].
<br/>
<br/>
2. Use [`lcd::Lcd1602::new()`] to create a driver handle from the GPIO
   facility and an `embedded-hal` delay, then call
   [`lcd::Lcd1602::init()`] once with the wiring description. Supplying
   ten mutually distinct pins selects the 8 bit bus; if only
   RS/EN/D4..D7 are usable the driver falls back to the 4 bit bus and
   ignores D0..D3 entirely.
<br/>
<br/>
3. Use the display methods on [`lcd::Lcd1602`] to write to the screen.

The controller has no acknowledge channel, so the driver busy-waits the
datasheet execution times after every transfer, and every operation blocks
the calling thread for the duration of its transmissions. The handle takes
`&mut` borrows of the GPIO facility and the delay, so exactly one owner
can drive a display at a time; there is no internal locking.
*/

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod bus;
mod command;
pub mod lcd;
pub mod pins;
pub mod state;
mod utils;

/// Failure kinds reported by the driver.
///
/// The protocol is open loop: once a transfer has started, a pin write the
/// hardware silently drops cannot be observed here. Everything this type
/// reports is caught before any pin is touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// An input is out of its documented bounds, or the pin assignment
    /// passes neither the 8 bit nor the 4 bit distinctness check.
    InvalidArgument,
    /// A display operation was invoked before [`lcd::Lcd1602::init`]
    /// succeeded, or init was invoked a second time.
    InvalidState,
    /// The GPIO facility failed to configure a pin as an output. The
    /// underlying cause is hardware specific and not carried here.
    HardwareConfig,
}
