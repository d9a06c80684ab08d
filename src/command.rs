//! Instruction bytes for the write-only command subset this driver uses.

use crate::state::BusWidth;
use crate::utils::BitOps;

/// Which controller register a transmission addresses.
#[derive(Clone, Copy, PartialEq)]
pub(crate) enum RegisterSelection {
    /// Instruction register (RS low)
    Command,
    /// Display data RAM (RS high)
    Data,
}

/// Controller instructions issued by the initializer and the command
/// layer. Converted to their raw byte right before transmission.
#[derive(Clone, Copy)]
pub(crate) enum CommandSet {
    ClearDisplay,
    EntryModeSet,
    DisplayOnOff,
    FunctionSet(BusWidth),
    SetDdramAddress(u8),
}

impl From<CommandSet> for u8 {
    fn from(command: CommandSet) -> Self {
        match command {
            CommandSet::ClearDisplay => 0b0000_0001,

            // increment address counter, no display shift
            CommandSet::EntryModeSet => {
                let mut raw_bits: u8 = 0b0000_0100;
                raw_bits.set_bit(1);
                raw_bits
            }

            // display on, cursor off, blink off
            CommandSet::DisplayOnOff => {
                let mut raw_bits: u8 = 0b0000_1000;
                raw_bits.set_bit(2);
                raw_bits
            }

            // two lines, 5x8 font
            CommandSet::FunctionSet(width) => {
                let mut raw_bits: u8 = 0b0010_1000;
                match width {
                    BusWidth::EightBit => raw_bits.set_bit(4),
                    BusWidth::FourBit => raw_bits.clear_bit(4),
                };
                raw_bits
            }

            CommandSet::SetDdramAddress(address) => {
                debug_assert!(address < 0b1000_0000, "DDRAM address out of range");
                0b1000_0000 | address
            }
        }
    }
}
