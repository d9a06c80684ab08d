//! Pin-level framing of one transmission: register select, data line
//! setup, and the enable strobe with its fixed hold and settle times.

use embedded_hal::{delay::DelayNs, digital::PinState};

use crate::{
    bus::DigitalOutputs,
    command::{CommandSet, RegisterSelection},
    state::{BusWidth, DriverState},
    utils::{BitOps, BitState},
};

use super::Lcd1602;

/// Enable hold time; the controller wants at least 450 ns.
const ENABLE_PULSE_US: u32 = 1;
/// Execution time of ordinary instructions; the next transfer must not
/// start sooner.
const EXECUTION_SETTLE_US: u32 = 40;

impl<'a, 'b, Bus: DigitalOutputs, Delayer: DelayNs> Lcd1602<'a, 'b, Bus, Delayer> {
    pub(crate) fn send(&mut self, state: &DriverState, command: CommandSet) {
        self.transmit(state, RegisterSelection::Command, command.into());
    }

    pub(crate) fn send_data(&mut self, state: &DriverState, byte: u8) {
        self.transmit(state, RegisterSelection::Data, byte);
    }

    /// One 8 bit transmission, framed per the committed bus width. RS is
    /// settled before the enable pulse and never changes mid-pulse.
    fn transmit(&mut self, state: &DriverState, register: RegisterSelection, byte: u8) {
        let rs_level = match register {
            RegisterSelection::Command => PinState::Low,
            RegisterSelection::Data => PinState::High,
        };
        self.bus.set_level(state.rs_pin(), rs_level);

        match state.width() {
            BusWidth::EightBit => {
                self.push_bits(byte, &state.data_pins());
                self.pulse_enable(state);
            }
            BusWidth::FourBit => {
                let upper = state.upper_data_pins();
                self.push_bits(byte >> 4, &upper);
                self.pulse_enable(state);
                self.push_bits(byte & 0b1111, &upper);
                self.pulse_enable(state);
            }
        }
    }

    /// Raw transfer on the upper data lines, used only by the power-on
    /// sequence before a bus width is committed. Leaves RS untouched.
    pub(crate) fn send_nibble(&mut self, state: &DriverState, raw_bits: u8) {
        self.push_bits(raw_bits, &state.upper_data_pins());
        self.pulse_enable(state);
    }

    fn push_bits(&mut self, raw_bits: u8, lines: &[u8]) {
        lines
            .iter()
            .enumerate()
            .for_each(|(index, &line)| match raw_bits.check_bit(index as u8) {
                BitState::Set => self.bus.set_level(line, PinState::High),
                BitState::Clear => self.bus.set_level(line, PinState::Low),
            });
    }

    fn pulse_enable(&mut self, state: &DriverState) {
        self.bus.set_level(state.en_pin(), PinState::High);
        self.delayer.delay_us(ENABLE_PULSE_US);
        self.bus.set_level(state.en_pin(), PinState::Low);
        self.delayer.delay_us(EXECUTION_SETTLE_US);
    }
}
