// Common FAT filesystem components shared between FAT12/16/32 and exFAT

pub mod boot_sector;
pub mod constants;

pub use boot_sector::*;
pub use constants::*;

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};

/// Generate a volume serial number from the current local time
pub fn generate_volume_serial() -> u32 {
    volume_serial_at(&Local::now())
}

/// Volume serial for a given timestamp.
///
/// Low word is month/day plus seconds, high word is hour/minute plus year,
/// each summed modulo 2^16.
pub fn volume_serial_at<Tz: TimeZone>(time: &DateTime<Tz>) -> u32 {
    let second = time.second() % 60;
    let lo = ((time.month() << 8) | time.day()) as u16;
    let lo = lo.wrapping_add((second << 8) as u16);
    let hi = ((time.hour() << 8) | time.minute()) as u16;
    let hi = hi.wrapping_add(time.year() as u16);
    (hi as u32) << 16 | lo as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_volume_serial_packing() {
        let t = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(10, 20, 30)
            .unwrap()
            .and_utc();
        let serial = volume_serial_at::<Utc>(&t);

        let lo = (0x030F_u16).wrapping_add(30 << 8);
        let hi = (0x0A14_u16).wrapping_add(2024);
        assert_eq!(serial, (hi as u32) << 16 | lo as u32);
    }
}
