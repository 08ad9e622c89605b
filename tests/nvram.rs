mod common;

use common::{destroy, new_ds3232, read, write, Register};
use ds3232::{Error, NVRAM_SIZE};

#[test]
fn nvram_round_trips_through_device_offset() {
    let mut rtc = new_ds3232(&[
        write(vec![Register::NVRAM + 5, 0xAA, 0xBB]),
        read(Register::NVRAM + 5, vec![0xAA, 0xBB]),
    ]);
    rtc.write_nvram(5, &[0xAA, 0xBB]).unwrap();
    let mut buffer = [0; 2];
    rtc.read_nvram(5, &mut buffer).unwrap();
    assert_eq!([0xAA, 0xBB], buffer);
    destroy(rtc);
}

#[test]
fn single_byte_access() {
    let mut rtc = new_ds3232(&[
        write(vec![Register::NVRAM, 0x42]),
        read(0xFF, vec![0x24]),
    ]);
    rtc.write_nvram_byte(0, 0x42).unwrap();
    assert_eq!(Ok(0x24), rtc.read_nvram_byte(235));
    destroy(rtc);
}

#[test]
fn whole_region_in_one_transaction() {
    let data: Vec<u8> = (0..NVRAM_SIZE).map(|i| i as u8).collect();
    let mut payload = vec![Register::NVRAM];
    payload.extend_from_slice(&data);
    let mut rtc = new_ds3232(&[write(payload)]);
    rtc.write_nvram(0, &data).unwrap();
    destroy(rtc);
}

#[test]
fn oversized_payload_is_rejected() {
    let mut rtc = new_ds3232(&[]);
    let data = [0u8; NVRAM_SIZE + 1];
    assert_eq!(Err(Error::InvalidInputData), rtc.write_nvram(0, &data));
    destroy(rtc);
}
