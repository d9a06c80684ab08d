//! Controller power-on sequence.
//!
//! The HD44780 has no reset line and no acknowledge channel; the only way
//! to reach a known state is to replay the datasheet's
//! reset-by-instruction idiom with its settle times, which works
//! identically whether a previous session left the controller in 8 bit or
//! 4 bit mode.

use embedded_hal::{delay::DelayNs, digital::PinState};

use crate::{
    bus::DigitalOutputs, command::CommandSet, pins::PinAssignment, state::BusWidth, Error,
};

use super::Lcd1602;

/// LCD power-on delay before the controller accepts anything.
const POWER_ON_DELAY_MS: u32 = 20;
/// Settle time after each of the first two reset nibbles.
const RESET_REPEAT_DELAY_MS: u32 = 10;
/// Settle time after the third reset nibble.
const RESET_SETTLE_US: u32 = 150;
/// Settle times for the conservative function-set retry pattern, needed
/// by modules with slow internal oscillators.
const FUNCTION_SET_REPEAT_DELAY_MS: u32 = 10;
const FUNCTION_SET_SETTLE_US: u32 = 150;
/// Final wait for the controller to reach steady operation.
const INIT_SETTLE_MS: u32 = 10;

/// The reset-by-instruction nibble, sent three times.
const RESET_NIBBLE: u8 = 0b0011;
/// Commits the controller to the 4 bit bus.
const FOUR_BIT_COMMIT_NIBBLE: u8 = 0b0010;

impl<'a, 'b, Bus: DigitalOutputs, Delayer: DelayNs> Lcd1602<'a, 'b, Bus, Delayer> {
    /// Resolve the wiring, configure the pins it uses, and bring the
    /// controller to a deterministic configuration: display on, cursor
    /// off, blink off, left-to-right entry, cleared screen.
    ///
    /// Fails with [`Error::InvalidArgument`] when the assignment passes
    /// neither the 8 bit nor the 4 bit check, with
    /// [`Error::HardwareConfig`] when a pin cannot be configured, and
    /// with [`Error::InvalidState`] on a second call. A failed call
    /// leaves the driver uninitialized; the caller may retry.
    pub fn init(&mut self, pins: &PinAssignment) -> Result<(), Error> {
        if self.state.is_some() {
            return Err(Error::InvalidState);
        }

        #[cfg(feature = "defmt")]
        defmt::info!("lcd1602 initialization started");

        let state = pins.resolve(self.bus)?;

        self.bus
            .configure(state.rs_pin())
            .map_err(|_| Error::HardwareConfig)?;
        self.bus
            .configure(state.en_pin())
            .map_err(|_| Error::HardwareConfig)?;
        let data = state.data_pins();
        let used = match state.width() {
            BusWidth::EightBit => &data[..],
            BusWidth::FourBit => &data[4..],
        };
        for &pin in used {
            self.bus.configure(pin).map_err(|_| Error::HardwareConfig)?;
        }

        // known control levels before the first strobe, the host may not
        // default configured outputs to low
        self.bus.set_level(state.rs_pin(), PinState::Low);
        self.bus.set_level(state.en_pin(), PinState::Low);

        self.delayer.delay_ms(POWER_ON_DELAY_MS);

        self.send_nibble(&state, RESET_NIBBLE);
        self.delayer.delay_ms(RESET_REPEAT_DELAY_MS);
        self.send_nibble(&state, RESET_NIBBLE);
        self.delayer.delay_ms(RESET_REPEAT_DELAY_MS);
        self.send_nibble(&state, RESET_NIBBLE);
        self.delayer.delay_us(RESET_SETTLE_US);

        // the controller wakes up in 8 bit mode, only the narrow bus
        // needs an explicit commit
        if state.width() == BusWidth::FourBit {
            self.send_nibble(&state, FOUR_BIT_COMMIT_NIBBLE);
        }

        self.send(&state, CommandSet::FunctionSet(state.width()));
        self.delayer.delay_ms(FUNCTION_SET_REPEAT_DELAY_MS);
        self.send(&state, CommandSet::FunctionSet(state.width()));
        self.delayer.delay_us(FUNCTION_SET_SETTLE_US);
        self.send(&state, CommandSet::FunctionSet(state.width()));

        self.send(&state, CommandSet::DisplayOnOff);
        self.send(&state, CommandSet::ClearDisplay);
        self.send(&state, CommandSet::EntryModeSet);
        self.delayer.delay_ms(INIT_SETTLE_MS);

        #[cfg(feature = "defmt")]
        defmt::info!("lcd1602 initialized, bus width {}", state.width());

        self.state = Some(state);
        Ok(())
    }
}
