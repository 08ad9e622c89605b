mod alarms;
mod configuration;
mod datetime;
mod nvram;
mod status;
mod temperature;

pub use self::alarms::{Alarm1Mode, Alarm2Mode};
pub use self::datetime::dow_to_device;

// Transforms a decimal number to packed BCD format
fn decimal_to_packed_bcd(dec: u8) -> u8 {
    ((dec / 10) << 4) | (dec % 10)
}

// Transforms a number in packed BCD format to decimal
fn packed_bcd_to_decimal(bcd: u8) -> u8 {
    (bcd >> 4) * 10 + (bcd & 0xF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_convert_decimal_to_packed_bcd() {
        assert_eq!(0b0000_0000, decimal_to_packed_bcd(0));
        assert_eq!(0b0000_1001, decimal_to_packed_bcd(9));
        assert_eq!(0b0001_0000, decimal_to_packed_bcd(10));
        assert_eq!(0b0100_0101, decimal_to_packed_bcd(45));
        assert_eq!(0b1001_1001, decimal_to_packed_bcd(99));
    }

    #[test]
    fn can_convert_packed_bcd_to_decimal() {
        assert_eq!(0, packed_bcd_to_decimal(0b0000_0000));
        assert_eq!(9, packed_bcd_to_decimal(0b0000_1001));
        assert_eq!(10, packed_bcd_to_decimal(0b0001_0000));
        assert_eq!(45, packed_bcd_to_decimal(0b0100_0101));
        assert_eq!(99, packed_bcd_to_decimal(0b1001_1001));
    }

    #[test]
    fn bcd_round_trips_every_two_digit_value() {
        for value in 0..=99 {
            assert_eq!(value, packed_bcd_to_decimal(decimal_to_packed_bcd(value)));
        }
    }
}
