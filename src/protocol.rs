//! Command set of the companion time-provider board (I2C).
//!
//! The Wi-Fi module that supplies the time talks to the clock as an I2C
//! master.  The clock core never drives the bus itself; these definitions
//! exist so the surrounding firmware decodes the same bytes.
//!
//! Frame layout:
//! ```text
//! Byte 0:     Command (see `Command`)
//! Byte 1..N:  Payload, at most I2C_DATA_SIZE bytes
//! ```

use heapless::Vec;

use crate::error::{Error, Result};

/// 7-bit slave address of the clock.
pub const I2C_SLAVE_ADDR: u8 = 0x69;

/// Largest payload carried by one frame.
pub const I2C_DATA_SIZE: usize = 22;

/// Protocol revision reported in the options block.
pub const I2C_PROTOCOL_NUMBER: u8 = 54;

/// One I2C command byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Command {
    TimeUpdate = 0x00,
    GetOptions = 0x01,
    Set12_24 = 0x02,
    SetBlankLead = 0x03,
    SetScrollback = 0x04,
    SetSuppressAcp = 0x05,
    SetDateFormat = 0x06,
    SetDayBlanking = 0x07,
    SetBlankStart = 0x08,
    SetBlankEnd = 0x09,
    SetFadeSteps = 0x0a,
    SetScrollSteps = 0x0b,
    SetBacklightMode = 0x0c,
    SetRedChannel = 0x0d,
    SetGreenChannel = 0x0e,
    SetBlueChannel = 0x0f,
    SetCycleSpeed = 0x10,
    ShowIpAddr = 0x11,
    SetFade = 0x12,
    SetUseLdr = 0x13,
    SetBlankMode = 0x14,
    SetSlotsMode = 0x15,
    SetMinDim = 0x16,
}

impl Command {
    /// Every command, in wire order.
    pub const ALL: [Command; 23] = [
        Command::TimeUpdate,
        Command::GetOptions,
        Command::Set12_24,
        Command::SetBlankLead,
        Command::SetScrollback,
        Command::SetSuppressAcp,
        Command::SetDateFormat,
        Command::SetDayBlanking,
        Command::SetBlankStart,
        Command::SetBlankEnd,
        Command::SetFadeSteps,
        Command::SetScrollSteps,
        Command::SetBacklightMode,
        Command::SetRedChannel,
        Command::SetGreenChannel,
        Command::SetBlueChannel,
        Command::SetCycleSpeed,
        Command::ShowIpAddr,
        Command::SetFade,
        Command::SetUseLdr,
        Command::SetBlankMode,
        Command::SetSlotsMode,
        Command::SetMinDim,
    ];

    /// True for the commands that change a single clock option.
    pub const fn is_option_setter(self) -> bool {
        !matches!(
            self,
            Command::TimeUpdate | Command::GetOptions | Command::ShowIpAddr
        )
    }
}

impl TryFrom<u8> for Command {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Command::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(Error::UnknownCommand(value))
    }
}

impl From<Command> for u8 {
    fn from(command: Command) -> Self {
        command as u8
    }
}

/// A decoded I2C write.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pub command: Command,
    pub payload: Vec<u8, I2C_DATA_SIZE>,
}

impl Frame {
    /// Frame with an empty payload.
    pub fn new(command: Command) -> Self {
        Self {
            command,
            payload: Vec::new(),
        }
    }

    /// Split raw bytes into command and payload.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let (&first, rest) = data.split_first().ok_or(Error::EmptyFrame)?;
        let command = Command::try_from(first)?;
        let payload = Vec::from_slice(rest).map_err(|_| Error::PayloadTooLong(rest.len()))?;
        Ok(Self { command, payload })
    }

    /// Serialise into `buf`. Returns the number of bytes written, or 0 if
    /// `buf` is too small.
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        let total = 1 + self.payload.len();
        if buf.len() < total {
            return 0;
        }
        buf[0] = self.command.into();
        buf[1..total].copy_from_slice(&self.payload);
        total
    }
}
