// Example driving the decoder one byte at a time, as a UART receive interrupt would

use picogps::NmeaDecoder;

/// Stand-in for a serial port: yields the recorded stream byte by byte.
struct SimulatedUart<'a> {
    data: &'a [u8],
    pos: usize,
}

impl SimulatedUart<'_> {
    fn read_byte(&mut self) -> Option<u8> {
        let byte = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }
}

fn main() {
    // Starts mid-sentence and carries an overlong text field
    let stream = b"1.01,499.6,M,48.0,M,,*5B\r\n\
$GPTXT,01,01,02,u-blox ag - www.u-blox.com*50\r\n\
$GPGSV,2,2,05,28,,,21*75\r\n\
$GPZDA,082710.00,16,09,2002,00,00*64\r\n";

    let mut uart = SimulatedUart {
        data: stream,
        pos: 0,
    };
    let mut decoder = NmeaDecoder::<16>::new();
    let mut dropped = 0;
    while let Some(byte) = uart.read_byte() {
        if !decoder.decode(byte) {
            dropped += 1;
        }
    }

    println!("Dropped {} bytes of overlong fields", dropped);
    println!(
        "Satellites in view: {}, date {:04}-{:02}-{:02} {:02}:{:02}:{:02} UTC",
        decoder.satellites(),
        decoder.year(),
        decoder.month(),
        decoder.day(),
        decoder.hour(),
        decoder.minute(),
        decoder.second()
    );
}
