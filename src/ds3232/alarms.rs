//! Alarm setting, arming and fired flags

use super::datetime::device_weekday;
use super::decimal_to_packed_bcd;
use crate::{Alarm, BitFlags, Datelike, Ds3232, Error, NaiveDateTime, Register, Timelike};
use embedded_hal::i2c::I2c;
use log::{debug, warn};

/// Alarm 1 trigger condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alarm1Mode {
    /// Alarm once per second
    OncePerSecond,
    /// Alarm when seconds match
    SecondsMatch,
    /// Alarm when minutes and seconds match
    MinutesAndSecondsMatch,
    /// Alarm when hours, minutes and seconds match
    HoursMinutesAndSecondsMatch,
    /// Alarm when date (day of month), hours, minutes and seconds match
    DateMatch,
    /// Alarm when weekday, hours, minutes and seconds match
    WeekdayMatch,
}

impl Alarm1Mode {
    /// A1M1..A1M4 in bits 0..3, DY/DT in bit 4.
    const fn bits(self) -> u8 {
        match self {
            Alarm1Mode::OncePerSecond => 0x0F,
            Alarm1Mode::SecondsMatch => 0x0E,
            Alarm1Mode::MinutesAndSecondsMatch => 0x0C,
            Alarm1Mode::HoursMinutesAndSecondsMatch => 0x08,
            Alarm1Mode::DateMatch => 0x00,
            Alarm1Mode::WeekdayMatch => 0x10,
        }
    }
}

/// Alarm 2 trigger condition
///
/// Alarm 2 has no seconds register: it fires at second 00.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alarm2Mode {
    /// Alarm once per minute
    OncePerMinute,
    /// Alarm when minutes match
    MinutesMatch,
    /// Alarm when hours and minutes match
    HoursAndMinutesMatch,
    /// Alarm when date (day of month), hours and minutes match
    DateMatch,
    /// Alarm when weekday, hours and minutes match
    WeekdayMatch,
}

impl Alarm2Mode {
    /// A2M2..A2M4 in bits 0..2, DY/DT in bit 3.
    const fn bits(self) -> u8 {
        match self {
            Alarm2Mode::OncePerMinute => 0x07,
            Alarm2Mode::MinutesMatch => 0x06,
            Alarm2Mode::HoursAndMinutesMatch => 0x04,
            Alarm2Mode::DateMatch => 0x00,
            Alarm2Mode::WeekdayMatch => 0x08,
        }
    }
}

fn match_bit(bits: u8, index: u8) -> u8 {
    if bits & (1 << index) != 0 {
        BitFlags::ALARM_MATCH
    } else {
        0
    }
}

fn encode_day(when: &NaiveDateTime, weekday: bool) -> u8 {
    if weekday {
        decimal_to_packed_bcd(device_weekday(when)) | BitFlags::WEEKDAY
    } else {
        decimal_to_packed_bcd(when.day() as u8)
    }
}

/// Seconds, minutes, hours and day/date registers of alarm 1.
pub(crate) fn encode_alarm1(when: &NaiveDateTime, mode: Alarm1Mode) -> [u8; 4] {
    let bits = mode.bits();
    [
        decimal_to_packed_bcd(when.second() as u8) | match_bit(bits, 0),
        decimal_to_packed_bcd(when.minute() as u8) | match_bit(bits, 1),
        decimal_to_packed_bcd(when.hour() as u8) | match_bit(bits, 2),
        encode_day(when, bits & 0x10 != 0) | match_bit(bits, 3),
    ]
}

/// Minutes, hours and day/date registers of alarm 2.
pub(crate) fn encode_alarm2(when: &NaiveDateTime, mode: Alarm2Mode) -> [u8; 3] {
    let bits = mode.bits();
    [
        decimal_to_packed_bcd(when.minute() as u8) | match_bit(bits, 0),
        decimal_to_packed_bcd(when.hour() as u8) | match_bit(bits, 1),
        encode_day(when, bits & 0x08 != 0) | match_bit(bits, 2),
    ]
}

impl<I2C> Ds3232<I2C>
where
    I2C: I2c,
{
    /// Set alarm 1 and enable its interrupt.
    ///
    /// The INT/SQW pin must already be in interrupt mode
    /// ([`SqwPinMode::Off`](crate::SqwPinMode::Off)), otherwise this returns
    /// [`Error::InterruptControlDisabled`] without writing anything.
    pub fn set_alarm1(&mut self, when: &NaiveDateTime, mode: Alarm1Mode) -> Result<(), Error> {
        let control = self.interrupt_control()?;
        let alarm = encode_alarm1(when, mode);
        let payload = [Register::ALARM1_SECONDS, alarm[0], alarm[1], alarm[2], alarm[3]];
        self.write_data(&payload)?;
        self.write_register(Register::CONTROL, control | Alarm::Alarm1.mask())?;
        debug!("DS3232: alarm 1 armed for {} ({:?})", when, mode);
        Ok(())
    }

    /// Set alarm 2 and enable its interrupt.
    ///
    /// Seconds of `when` are ignored. Same precondition as
    /// [`set_alarm1`](Ds3232::set_alarm1).
    pub fn set_alarm2(&mut self, when: &NaiveDateTime, mode: Alarm2Mode) -> Result<(), Error> {
        let control = self.interrupt_control()?;
        let alarm = encode_alarm2(when, mode);
        let payload = [Register::ALARM2_MINUTES, alarm[0], alarm[1], alarm[2]];
        self.write_data(&payload)?;
        self.write_register(Register::CONTROL, control | Alarm::Alarm2.mask())?;
        debug!("DS3232: alarm 2 armed for {} ({:?})", when, mode);
        Ok(())
    }

    /// Disable the interrupt of `alarm`.
    pub fn disable_alarm(&mut self, alarm: Alarm) -> Result<(), Error> {
        self.clear_register_bits(Register::CONTROL, alarm.mask())
    }

    /// Clear the fired flag of `alarm`.
    pub fn clear_alarm_fired(&mut self, alarm: Alarm) -> Result<(), Error> {
        self.clear_register_bits(Register::STATUS, alarm.mask())
    }

    /// Whether `alarm` has fired since its flag was last cleared.
    pub fn alarm_fired(&mut self, alarm: Alarm) -> Result<bool, Error> {
        self.is_register_bit_set(Register::STATUS, alarm.mask())
    }

    // Control register value, provided INTCN is set.
    fn interrupt_control(&mut self) -> Result<u8, Error> {
        let control = self.read_register(Register::CONTROL)?;
        if control & BitFlags::INTCN == 0 {
            warn!("DS3232: alarm refused, INT/SQW pin is in square-wave mode");
            return Err(Error::InterruptControlDisabled);
        }
        Ok(control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NaiveDate;

    // a Wednesday
    fn when() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(7, 45, 30)
            .unwrap()
    }

    #[test]
    fn alarm1_date_match_has_no_mask_bits() {
        assert_eq!(
            [0x30, 0x45, 0x07, 0x15],
            encode_alarm1(&when(), Alarm1Mode::DateMatch)
        );
    }

    #[test]
    fn alarm1_weekday_match_sets_dy_dt() {
        assert_eq!(
            [0x30, 0x45, 0x07, 0x40 | 0x03],
            encode_alarm1(&when(), Alarm1Mode::WeekdayMatch)
        );
    }

    #[test]
    fn alarm1_mask_bits_land_in_bit7() {
        assert_eq!(
            [0xB0, 0xC5, 0x87, 0x95],
            encode_alarm1(&when(), Alarm1Mode::OncePerSecond)
        );
        assert_eq!(
            [0x30, 0xC5, 0x87, 0x95],
            encode_alarm1(&when(), Alarm1Mode::SecondsMatch)
        );
        assert_eq!(
            [0x30, 0x45, 0x87, 0x95],
            encode_alarm1(&when(), Alarm1Mode::MinutesAndSecondsMatch)
        );
        assert_eq!(
            [0x30, 0x45, 0x07, 0x95],
            encode_alarm1(&when(), Alarm1Mode::HoursMinutesAndSecondsMatch)
        );
    }

    #[test]
    fn alarm2_skips_seconds() {
        assert_eq!(
            [0x45, 0x07, 0x15],
            encode_alarm2(&when(), Alarm2Mode::DateMatch)
        );
        assert_eq!(
            [0x45, 0x07, 0x43],
            encode_alarm2(&when(), Alarm2Mode::WeekdayMatch)
        );
        assert_eq!(
            [0xC5, 0x87, 0x95],
            encode_alarm2(&when(), Alarm2Mode::OncePerMinute)
        );
        assert_eq!(
            [0x45, 0x87, 0x95],
            encode_alarm2(&when(), Alarm2Mode::MinutesMatch)
        );
        assert_eq!(
            [0x45, 0x07, 0x95],
            encode_alarm2(&when(), Alarm2Mode::HoursAndMinutesMatch)
        );
    }

    #[test]
    fn sunday_alarm_uses_device_day_seven() {
        let sunday = NaiveDate::from_ymd_opt(2025, 1, 19)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap();
        assert_eq!(
            [0x00, 0x06, 0x47],
            encode_alarm2(&sunday, Alarm2Mode::WeekdayMatch)
        );
    }
}
