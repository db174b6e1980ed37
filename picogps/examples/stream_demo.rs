// Example feeding a recorded receiver burst through the decoder

use picogps::{ChecksumStatus, NmeaDecoder};

fn main() {
    let burst = b"$GPRMC,083559.00,A,4717.11437,N,00833.91522,E,0.004,77.52,091202,,,A*57\r\n\
$GPGGA,092725.00,4717.11399,N,00833.91590,E,1,08,1.01,499.6,M,48.0,M,,*5B\r\n\
$GPGSA,A,3,23,29,07,08,09,18,26,28,,,,,1.94,1.18,1.54*0D\r\n\
$GPGSV,2,1,05,19,,,22,24,,,22,25,,,22,26,,,23*73\r\n";

    let mut decoder = NmeaDecoder::<16>::new();
    for line in burst.split_inclusive(|&b| b == b'\n') {
        let consumed = decoder.decode_bytes(line);
        let checksum = match decoder.checksum_status() {
            ChecksumStatus::Valid => "ok",
            ChecksumStatus::Mismatch { .. } => "MISMATCH",
            ChecksumStatus::Malformed => "malformed",
            ChecksumStatus::Unchecked => "none",
        };
        println!(
            "{:?}: {} of {} bytes, checksum {}",
            decoder.sentence_type(),
            consumed,
            line.len(),
            checksum
        );
    }

    let nav = decoder.navigation();
    println!();
    println!("Position:   {:.6}, {:.6}", nav.latitude(), nav.longitude());
    println!("Altitude:   {:.1} m", nav.altitude());
    println!("Speed:      {:.3} kn", nav.speed());
    println!("Fix:        {:?} (locked: {})", nav.fix_type(), nav.is_locked());
    println!("Satellites: {}", nav.satellites());
    println!(
        "HDOP/VDOP:  {:.2}/{:.2}",
        nav.horizontal_dilution_of_precision(),
        nav.vertical_dilution_of_precision()
    );
    #[cfg(feature = "chrono")]
    {
        if let Some(datetime) = nav.utc_datetime() {
            println!("UTC:        {}", datetime);
        }
    }
}
