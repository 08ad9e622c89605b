//! Device configuration

use crate::{BitFlags, Ds3232, Error, Register, SqwPinMode};
use embedded_hal::i2c::I2c;
use log::debug;

impl<I2C> Ds3232<I2C>
where
    I2C: I2c,
{
    /// Read the INT/SQW pin mode.
    ///
    /// Whenever the pin is in interrupt mode this reports
    /// [`SqwPinMode::Off`], whatever the frequency bits hold.
    pub fn read_sqw_pin_mode(&mut self) -> Result<SqwPinMode, Error> {
        let control = self.read_register(Register::CONTROL)?;
        Ok(SqwPinMode::from_control(control))
    }

    /// Set the INT/SQW pin mode.
    ///
    /// [`SqwPinMode::Off`] puts the pin in alarm interrupt mode, which
    /// [`set_alarm1`](Ds3232::set_alarm1) and
    /// [`set_alarm2`](Ds3232::set_alarm2) require.
    pub fn write_sqw_pin_mode(&mut self, mode: SqwPinMode) -> Result<(), Error> {
        let control = self.read_register(Register::CONTROL)?;
        let cleared = control & !(BitFlags::INTCN | BitFlags::RS2 | BitFlags::RS1);
        self.write_register(Register::CONTROL, cleared | mode.bits())?;
        debug!("DS3232: INT/SQW pin mode {:?}", mode);
        Ok(())
    }

    /// Enable the oscillator on battery power (EOSC cleared, default).
    pub fn enable_eosc(&mut self) -> Result<(), Error> {
        self.clear_register_bits(Register::CONTROL, BitFlags::EOSC)
    }

    /// Stop the oscillator whenever the device switches to battery power.
    pub fn disable_eosc(&mut self) -> Result<(), Error> {
        self.set_register_bits(Register::CONTROL, BitFlags::EOSC)
    }

    /// Raw EOSC bit.
    ///
    /// The logic is inverted: `true` means the oscillator stops on battery,
    /// `false` means it keeps running.
    pub fn is_enabled_eosc(&mut self) -> Result<bool, Error> {
        self.is_register_bit_set(Register::CONTROL, BitFlags::EOSC)
    }

    /// Keep the square wave running on battery power.
    pub fn enable_battery_backed_square_wave(&mut self) -> Result<(), Error> {
        self.set_register_bits(Register::CONTROL, BitFlags::BBSQW)
    }

    /// Stop the square wave on battery power (default).
    pub fn disable_battery_backed_square_wave(&mut self) -> Result<(), Error> {
        self.clear_register_bits(Register::CONTROL, BitFlags::BBSQW)
    }

    /// Set the aging offset.
    pub fn set_aging_offset(&mut self, offset: i8) -> Result<(), Error> {
        self.write_register(Register::AGING_OFFSET, offset as u8)
    }

    /// Read the aging offset.
    pub fn aging_offset(&mut self) -> Result<i8, Error> {
        let offset = self.read_register(Register::AGING_OFFSET)?;
        Ok(offset as i8)
    }
}
