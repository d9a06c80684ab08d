//! The driver handle and the display command surface.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use heapless::String;

use crate::{
    bus::DigitalOutputs,
    command::CommandSet,
    state::{BusWidth, DriverState},
    Error,
};

mod init;
mod transmit;

/// Character rows on the module.
pub const ROWS: u8 = 2;
/// Character columns on the module.
pub const COLUMNS: u8 = 16;
/// Character code of the solid block glyph used by the progress bar.
pub const BLOCK_GLYPH: u8 = 0xFF;
/// Character code of the blank glyph.
pub const BLANK_GLYPH: u8 = 0x20;

/// Clear-display runs much longer than ordinary instructions.
const CLEAR_EXECUTION_US: u32 = 1600;
/// Fraction digits beyond this cannot fit a 16 character row alongside
/// the integer part and are rejected up front.
const MAX_FLOAT_PRECISION: u8 = 6;

/// Driver handle for one HD44780-class 2×16 module.
///
/// Created uninitialized by [`Lcd1602::new`]; [`Lcd1602::init`] resolves
/// the wiring, replays the controller's power-on sequence and unlocks the
/// display methods. Every display method fails with
/// [`Error::InvalidState`] until then.
pub struct Lcd1602<'a, 'b, Bus: DigitalOutputs, Delayer: DelayNs> {
    bus: &'a mut Bus,
    delayer: &'b mut Delayer,
    state: Option<DriverState>,
}

impl<'a, 'b, Bus: DigitalOutputs, Delayer: DelayNs> Lcd1602<'a, 'b, Bus, Delayer> {
    /// Create an uninitialized driver over a GPIO facility and a delay
    /// source.
    pub fn new(bus: &'a mut Bus, delayer: &'b mut Delayer) -> Self {
        Self {
            bus,
            delayer,
            state: None,
        }
    }

    /// The bus width committed during initialization, `None` before.
    pub fn bus_width(&self) -> Option<BusWidth> {
        self.state.map(|state| state.width())
    }

    fn state(&self) -> Result<DriverState, Error> {
        self.state.ok_or(Error::InvalidState)
    }

    /// Blank the entire display and move the cursor home.
    pub fn clear(&mut self) -> Result<(), Error> {
        let state = self.state()?;
        self.send(&state, CommandSet::ClearDisplay);
        self.delayer.delay_us(CLEAR_EXECUTION_US);
        Ok(())
    }

    /// Move the cursor to `row` ∈ {0,1}, `col` ∈ 0..16.
    pub fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), Error> {
        if row >= ROWS || col >= COLUMNS {
            return Err(Error::InvalidArgument);
        }
        let state = self.state()?;
        self.send(&state, CommandSet::SetDdramAddress(ddram_address(row, col)));
        Ok(())
    }

    /// Write `text` at the cursor, byte for byte.
    ///
    /// The controller's auto-increment advances the cursor; nothing here
    /// wraps at the row end. Writing past it runs into the controller's
    /// internal addressing, which is hardware-defined behavior.
    pub fn print_str(&mut self, text: &str) -> Result<(), Error> {
        let state = self.state()?;
        for byte in text.bytes() {
            self.send_data(&state, byte);
        }
        Ok(())
    }

    /// Write `value` in decimal at the cursor.
    pub fn print_int(&mut self, value: i32) -> Result<(), Error> {
        // i32::MIN renders to 11 characters
        let mut rendered: String<11> = String::new();
        write!(&mut rendered, "{}", value).map_err(|_| Error::InvalidArgument)?;
        self.print_str(&rendered)
    }

    /// Write `value` at the cursor as a fixed-point decimal with exactly
    /// `precision` fraction digits.
    ///
    /// `precision` above 6, or a rendering that exceeds one 16 character
    /// row, is rejected with [`Error::InvalidArgument`].
    pub fn print_float(&mut self, value: f32, precision: u8) -> Result<(), Error> {
        if precision > MAX_FLOAT_PRECISION {
            return Err(Error::InvalidArgument);
        }
        let mut rendered: String<{ COLUMNS as usize }> = String::new();
        write!(&mut rendered, "{:.*}", precision as usize, value)
            .map_err(|_| Error::InvalidArgument)?;
        self.print_str(&rendered)
    }

    /// Render a full-row progress bar on `row` for `progress` ∈ 0..=100.
    ///
    /// Always emits exactly 16 glyphs: `progress × 16 / 100` solid
    /// blocks, blanks for the rest.
    pub fn print_progress_bar(&mut self, row: u8, progress: u8) -> Result<(), Error> {
        if row >= ROWS || progress > 100 {
            return Err(Error::InvalidArgument);
        }
        let state = self.state()?;
        let filled = (u16::from(progress) * u16::from(COLUMNS) / 100) as u8;
        self.send(&state, CommandSet::SetDdramAddress(ddram_address(row, 0)));
        for col in 0..COLUMNS {
            let glyph = if col < filled { BLOCK_GLYPH } else { BLANK_GLYPH };
            self.send_data(&state, glyph);
        }
        Ok(())
    }

    /// Blank `row` and leave the cursor at its first column.
    pub fn clear_row(&mut self, row: u8) -> Result<(), Error> {
        if row >= ROWS {
            return Err(Error::InvalidArgument);
        }
        let state = self.state()?;
        self.send(&state, CommandSet::SetDdramAddress(ddram_address(row, 0)));
        for _ in 0..COLUMNS {
            self.send_data(&state, BLANK_GLYPH);
        }
        self.send(&state, CommandSet::SetDdramAddress(ddram_address(row, 0)));
        Ok(())
    }
}

/// Display data RAM address of a character cell. The second row starts at
/// 0x40.
fn ddram_address(row: u8, col: u8) -> u8 {
    match row {
        0 => col,
        _ => 0x40 + col,
    }
}
