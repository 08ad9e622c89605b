//! Temperature sensor

use crate::{BitFlags, Ds3232, Error, Register};
use embedded_hal::i2c::I2c;
use log::debug;

// Whole degrees in the MSB, quarter degrees in the top two bits of the LSB.
pub(crate) fn decode_temperature(data: [u8; 2]) -> f32 {
    f32::from(data[0] as i8) + f32::from(data[1] >> 6) * 0.25
}

impl<I2C> Ds3232<I2C>
where
    I2C: I2c,
{
    /// Read the temperature in degrees Celsius, 0.25°C resolution.
    pub fn temperature(&mut self) -> Result<f32, Error> {
        let mut data = [0; 2];
        self.read_data(Register::TEMP_MSB, &mut data)?;
        Ok(decode_temperature(data))
    }

    /// Force a temperature conversion and time compensation with TXCO algorithm.
    ///
    /// Nothing is written while a conversion is already running, either
    /// forced (CONV) or automatic (BSY).
    pub fn convert_temperature(&mut self) -> Result<(), Error> {
        let status = self.read_register(Register::STATUS)?;
        let control = self.read_register(Register::CONTROL)?;
        // do not overwrite if a conversion is in progress
        if (status & BitFlags::BUSY) == 0 && (control & BitFlags::TEMP_CONV) == 0 {
            self.write_register(Register::CONTROL, control | BitFlags::TEMP_CONV)?;
            debug!("DS3232: temperature conversion started");
        }
        Ok(())
    }

    /// Keep running temperature conversions on battery power (default).
    pub fn enable_temperature_conversions_on_battery(&mut self) -> Result<(), Error> {
        self.clear_register_bits(Register::TEMP_CONV, BitFlags::TEMP_CONV_BAT)
    }

    /// Stop temperature conversions while on battery power.
    pub fn disable_temperature_conversions_on_battery(&mut self) -> Result<(), Error> {
        self.set_register_bits(Register::TEMP_CONV, BitFlags::TEMP_CONV_BAT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_degrees_come_from_lsb_top_bits() {
        assert_eq!(25.25, decode_temperature([0x19, 0x40]));
        assert_eq!(25.0, decode_temperature([0x19, 0x00]));
        assert_eq!(25.75, decode_temperature([0x19, 0xC0]));
        assert_eq!(0.5, decode_temperature([0x00, 0x80]));
    }

    #[test]
    fn msb_is_signed() {
        assert_eq!(-0.75, decode_temperature([0xFF, 0x40]));
        assert_eq!(-40.0, decode_temperature([0xD8, 0x00]));
    }
}
