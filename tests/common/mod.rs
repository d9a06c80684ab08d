//! Shared test doubles: a recording GPIO facility and a recording delay.
//!
//! The display protocol is write-only, so the tests reconstruct what the
//! controller would have seen from the recorded pin traffic: every rising
//! edge on the enable pin samples the data lines and the RS level.

#![allow(dead_code)]

use std::collections::HashMap;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::PinState;

use lcd1602_parallel::bus::DigitalOutputs;
use lcd1602_parallel::pins::PinAssignment;

/// Pin identifiers shared by the test wirings.
pub const RS: u8 = 0;
/// Enable pin identifier.
pub const EN: u8 = 1;
/// Data line identifiers D0..D7 for the 8 bit wiring.
pub const DATA: [u8; 8] = [2, 3, 4, 5, 6, 7, 8, 9];
/// Data line identifiers D4..D7, shared by both wirings.
pub const UPPER: [u8; 4] = [6, 7, 8, 9];

/// Strobes emitted by the power-on sequence in 8 bit mode.
pub const INIT_STROBES_8BIT: usize = 9;
/// Strobes emitted by the power-on sequence in 4 bit mode.
pub const INIT_STROBES_4BIT: usize = 16;

pub fn eight_bit_assignment() -> PinAssignment {
    PinAssignment {
        rs: RS,
        en: EN,
        d0: DATA[0],
        d1: DATA[1],
        d2: DATA[2],
        d3: DATA[3],
        d4: DATA[4],
        d5: DATA[5],
        d6: DATA[6],
        d7: DATA[7],
    }
}

/// A 4 bit wiring: D0..D3 deliberately garbled (out of range), which must
/// not block the 4 bit fallback.
pub fn four_bit_assignment() -> PinAssignment {
    PinAssignment {
        rs: RS,
        en: EN,
        d0: 0xFF,
        d1: 0xFF,
        d2: 0xFF,
        d3: 0xFF,
        d4: UPPER[0],
        d5: UPPER[1],
        d6: UPPER[2],
        d7: UPPER[3],
    }
}

/// One recorded interaction with the fake GPIO facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusEvent {
    Configure(u8),
    Set(u8, bool),
}

/// What the controller latches on one enable strobe: the RS level and the
/// value on the sampled data lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strobe {
    pub rs_high: bool,
    pub value: u8,
}

pub struct RecordingBus {
    pub pin_count: u8,
    /// Fail this many configure calls before succeeding.
    pub failing_configures: usize,
    pub events: Vec<BusEvent>,
}

impl RecordingBus {
    pub fn new(pin_count: u8) -> Self {
        Self {
            pin_count,
            failing_configures: 0,
            events: Vec::new(),
        }
    }

    pub fn configured_pins(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|event| match event {
                BusEvent::Configure(pin) => Some(*pin),
                BusEvent::Set(..) => None,
            })
            .collect()
    }

    /// Pins that ever saw any traffic at all.
    pub fn touched_pins(&self) -> Vec<u8> {
        self.events
            .iter()
            .map(|event| match event {
                BusEvent::Configure(pin) => *pin,
                BusEvent::Set(pin, _) => *pin,
            })
            .collect()
    }

    /// Replay the recorded traffic and sample `data` (LSB first) plus the
    /// RS level at each rising edge of `en`. Pins never driven read low,
    /// matching a freshly configured output.
    pub fn strobes(&self, data: &[u8]) -> Vec<Strobe> {
        let mut levels: HashMap<u8, bool> = HashMap::new();
        let mut strobes = Vec::new();
        for event in &self.events {
            if let BusEvent::Set(pin, level) = *event {
                if pin == EN && level {
                    let value = data.iter().enumerate().fold(0u8, |acc, (bit, line)| {
                        match levels.get(line).copied().unwrap_or(false) {
                            true => acc | 1 << bit,
                            false => acc,
                        }
                    });
                    strobes.push(Strobe {
                        rs_high: levels.get(&RS).copied().unwrap_or(false),
                        value,
                    });
                }
                levels.insert(pin, level);
            }
        }
        strobes
    }
}

impl DigitalOutputs for RecordingBus {
    type Error = ();

    fn configure(&mut self, pin: u8) -> Result<(), ()> {
        if self.failing_configures > 0 {
            self.failing_configures -= 1;
            return Err(());
        }
        self.events.push(BusEvent::Configure(pin));
        Ok(())
    }

    fn set_level(&mut self, pin: u8, level: PinState) {
        self.events.push(BusEvent::Set(pin, level == PinState::High));
    }

    fn is_valid(&self, pin: u8) -> bool {
        pin < self.pin_count
    }
}

/// Records every wait, in nanoseconds. The unit-preserving overrides keep
/// the recorded values independent of the `DelayNs` default-method
/// chunking.
#[derive(Default)]
pub struct RecordingDelay {
    pub ns: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.ns.push(ns);
    }

    fn delay_us(&mut self, us: u32) {
        self.ns.push(us * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.ns.push(ms * 1_000_000);
    }
}
