//! Time keeping and the oscillator stop flag

use super::{decimal_to_packed_bcd, packed_bcd_to_decimal};
use crate::{
    BitFlags, DateTimeAccess, Datelike, Ds3232, Error, NaiveDate, NaiveDateTime, Register,
    Timelike,
};
use embedded_hal::i2c::I2c;
use log::debug;

const SECONDS_MASK: u8 = 0b0111_1111;
// drops the 12/24 select bit
const HOURS_MASK: u8 = 0b0011_1111;

/// Map a Sunday-based weekday (0 = Sunday .. 6 = Saturday) to the
/// device's 1..=7 day register, where Sunday is 7.
pub fn dow_to_device(dow: u8) -> u8 {
    if dow == 0 {
        7
    } else {
        dow
    }
}

pub(crate) fn device_weekday(datetime: &NaiveDateTime) -> u8 {
    dow_to_device(datetime.weekday().num_days_from_sunday() as u8)
}

/// Encode `datetime` into the seven time-keeping registers.
pub(crate) fn encode_datetime(datetime: &NaiveDateTime) -> Result<[u8; 7], Error> {
    let year = datetime.year();
    if !(2000..=2099).contains(&year) {
        return Err(Error::InvalidInputData);
    }
    Ok([
        decimal_to_packed_bcd(datetime.second() as u8),
        decimal_to_packed_bcd(datetime.minute() as u8),
        decimal_to_packed_bcd(datetime.hour() as u8),
        decimal_to_packed_bcd(device_weekday(datetime)),
        decimal_to_packed_bcd(datetime.day() as u8),
        decimal_to_packed_bcd(datetime.month() as u8),
        decimal_to_packed_bcd((year - 2000) as u8),
    ])
}

/// Decode the seven time-keeping registers.
///
/// The weekday register is skipped: the weekday is derived from the date.
pub(crate) fn decode_datetime(data: &[u8; 7]) -> Result<NaiveDateTime, Error> {
    let second = packed_bcd_to_decimal(data[0] & SECONDS_MASK);
    let minute = packed_bcd_to_decimal(data[1]);
    let hour = packed_bcd_to_decimal(data[2] & HOURS_MASK);
    let day = packed_bcd_to_decimal(data[4]);
    let month = packed_bcd_to_decimal(data[5] & !BitFlags::CENTURY);
    let year = 2000 + i32::from(packed_bcd_to_decimal(data[6]));

    NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
        .and_then(|date| date.and_hms_opt(u32::from(hour), u32::from(minute), u32::from(second)))
        .ok_or(Error::InvalidDeviceState)
}

impl<I2C> Ds3232<I2C>
where
    I2C: I2c,
{
    /// Read the current date and time.
    pub fn now(&mut self) -> Result<NaiveDateTime, Error> {
        let mut data = [0; 7];
        self.read_data(Register::SECONDS, &mut data)?;
        decode_datetime(&data)
    }

    /// Set the date and time, then clear the oscillator stop flag.
    ///
    /// Only years 2000 to 2099 can be stored.
    pub fn adjust(&mut self, datetime: &NaiveDateTime) -> Result<(), Error> {
        let time = encode_datetime(datetime)?;
        let mut payload = [Register::SECONDS, 0, 0, 0, 0, 0, 0, 0];
        payload[1..].copy_from_slice(&time);
        self.write_data(&payload)?;
        debug!("DS3232: time set to {}", datetime);
        self.clear_oscillator_stop_flag()
    }

    /// Whether the oscillator stopped at some point, e.g. on power loss.
    ///
    /// The flag is sticky: it stays set until [`adjust`](Ds3232::adjust) or
    /// [`clear_oscillator_stop_flag`](Ds3232::clear_oscillator_stop_flag)
    /// clears it.
    pub fn lost_power(&mut self) -> Result<bool, Error> {
        self.is_register_bit_set(Register::STATUS, BitFlags::OSC_STOP)
    }

    /// Clear the oscillator stop flag, leaving the other status bits alone.
    pub fn clear_oscillator_stop_flag(&mut self) -> Result<(), Error> {
        self.clear_register_bits(Register::STATUS, BitFlags::OSC_STOP)?;
        debug!("DS3232: oscillator stop flag cleared");
        Ok(())
    }
}

impl<I2C> DateTimeAccess for Ds3232<I2C>
where
    I2C: I2c,
{
    type Error = Error;

    fn datetime(&mut self) -> Result<NaiveDateTime, Self::Error> {
        self.now()
    }

    fn set_datetime(&mut self, datetime: &NaiveDateTime) -> Result<(), Self::Error> {
        self.adjust(datetime)
    }
}
