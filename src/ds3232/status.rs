//! 32kHz outputs and status flags

use crate::{BitFlags, Ds3232, Error, Register, TempConvRate};
use embedded_hal::i2c::I2c;

impl<I2C> Ds3232<I2C>
where
    I2C: I2c,
{
    /// Enable the 32kHz output (enabled per default).
    ///
    /// The pin is open drain and needs an external pull-up.
    pub fn enable_32k(&mut self) -> Result<(), Error> {
        self.set_register_bits(Register::STATUS, BitFlags::EN32KHZ)
    }

    /// Disable the 32kHz output.
    pub fn disable_32k(&mut self) -> Result<(), Error> {
        self.clear_register_bits(Register::STATUS, BitFlags::EN32KHZ)
    }

    /// Whether the 32kHz output is enabled.
    pub fn is_enabled_32k(&mut self) -> Result<bool, Error> {
        self.is_register_bit_set(Register::STATUS, BitFlags::EN32KHZ)
    }

    /// Keep the 32kHz output running on battery power.
    pub fn enable_bb_32khz(&mut self) -> Result<(), Error> {
        self.set_register_bits(Register::STATUS, BitFlags::BB32KHZ)
    }

    /// Stop the 32kHz output on battery power.
    pub fn disable_bb_32khz(&mut self) -> Result<(), Error> {
        self.clear_register_bits(Register::STATUS, BitFlags::BB32KHZ)
    }

    /// Whether the 32kHz output keeps running on battery power.
    pub fn is_enabled_bb_32khz(&mut self) -> Result<bool, Error> {
        self.is_register_bit_set(Register::STATUS, BitFlags::BB32KHZ)
    }

    /// Whether the device is busy running a temperature conversion.
    pub fn busy(&mut self) -> Result<bool, Error> {
        self.is_register_bit_set(Register::STATUS, BitFlags::BUSY)
    }

    /// Set how often the TCXO temperature conversion runs.
    pub fn set_temperature_conversion_rate(&mut self, rate: TempConvRate) -> Result<(), Error> {
        let status = self.read_register(Register::STATUS)?;
        let cleared = status & !(BitFlags::CRATE1 | BitFlags::CRATE0);
        self.write_register(Register::STATUS, cleared | rate.bits())
    }
}
