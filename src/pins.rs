//! Wiring description and its validation.

use crate::{
    bus::DigitalOutputs,
    state::{BusWidth, DriverState},
    Error,
};

/// Host pin identifiers for the ten LCD signal roles.
///
/// All ten fields are always present; `d0`..`d3` matter only when the
/// module is wired for the 8 bit bus. Validation tries the full ten-pin
/// set first and, if that fails, retries with only
/// {`rs`, `en`, `d4`..`d7`} — so a caller who wired 4 bit mode may leave
/// the low data fields as garbage and still initialize successfully.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinAssignment {
    /// Register select (RS)
    pub rs: u8,
    /// Enable strobe (E)
    pub en: u8,
    /// Data line D0 (8 bit wiring only)
    pub d0: u8,
    /// Data line D1 (8 bit wiring only)
    pub d1: u8,
    /// Data line D2 (8 bit wiring only)
    pub d2: u8,
    /// Data line D3 (8 bit wiring only)
    pub d3: u8,
    /// Data line D4
    pub d4: u8,
    /// Data line D5
    pub d5: u8,
    /// Data line D6
    pub d6: u8,
    /// Data line D7
    pub d7: u8,
}

impl PinAssignment {
    /// Resolve the assignment against the host's pin range, committing to
    /// a bus width. Runs before any pin is configured or driven.
    pub(crate) fn resolve<Bus: DigitalOutputs>(&self, bus: &Bus) -> Result<DriverState, Error> {
        let data = [
            self.d0, self.d1, self.d2, self.d3, self.d4, self.d5, self.d6, self.d7,
        ];

        let full = [
            self.rs, self.en, self.d0, self.d1, self.d2, self.d3, self.d4, self.d5, self.d6,
            self.d7,
        ];
        if usable(bus, &full) {
            return Ok(DriverState::new(self.rs, self.en, data, BusWidth::EightBit));
        }

        // the low data fields are not consulted at all here, garbage in
        // d0..d3 must not block a correctly wired 4 bit setup
        let upper = [self.rs, self.en, self.d4, self.d5, self.d6, self.d7];
        if usable(bus, &upper) {
            return Ok(DriverState::new(self.rs, self.en, data, BusWidth::FourBit));
        }

        Err(Error::InvalidArgument)
    }
}

/// Every pin names a real output and no two roles share a pin.
fn usable<Bus: DigitalOutputs>(bus: &Bus, pins: &[u8]) -> bool {
    pins.iter().all(|&pin| bus.is_valid(pin)) && pairwise_distinct(pins)
}

fn pairwise_distinct(pins: &[u8]) -> bool {
    pins.iter()
        .enumerate()
        .all(|(index, pin)| pins[index + 1..].iter().all(|other| other != pin))
}
