// SPDX-License-Identifier: Apache-2.0

use picogps::{FixType, NmeaDecoder};

use test_log::test;

/// A receiver burst as a NEO-6 emits it once per second.
const BURST: &[u8] = b"$GPRMC,083559.00,A,4717.11437,N,00833.91522,E,0.004,77.52,091202,,,A*57\r\n\
$GPVTG,77.52,T,,M,0.004,N,0.008,K,A*06\r\n\
$GPGGA,092725.00,4717.11399,N,00833.91590,E,1,08,1.01,499.6,M,48.0,M,,*5B\r\n\
$GPGSA,A,3,23,29,07,08,09,18,26,28,,,,,1.94,1.18,1.54*0D\r\n\
$GPGSV,2,1,05,19,,,22,24,,,22,25,,,22,26,,,23*73\r\n\
$GPGSV,2,2,05,28,,,21*75\r\n\
$GPGLL,4717.11634,N,00833.91297,E,124923.00,A,A*6E\r\n";

/// Hands out the input in fixed-size chunks, like a UART DMA half-buffer.
struct ChunkFeeder<'a> {
    data: &'a [u8],
    pos: usize,
    chunk_size: usize,
}

impl<'a> ChunkFeeder<'a> {
    fn new(data: &'a [u8], chunk_size: usize) -> Self {
        Self {
            data,
            pos: 0,
            chunk_size: chunk_size.max(1),
        }
    }

    fn next_chunk(&mut self) -> Option<&'a [u8]> {
        if self.pos >= self.data.len() {
            return None;
        }
        let end = (self.pos + self.chunk_size).min(self.data.len());
        let chunk = &self.data[self.pos..end];
        self.pos = end;
        Some(chunk)
    }
}

fn decode_in_chunks(data: &[u8], chunk_size: usize) -> NmeaDecoder {
    let mut decoder: NmeaDecoder = NmeaDecoder::new();
    let mut feeder = ChunkFeeder::new(data, chunk_size);
    while let Some(chunk) = feeder.next_chunk() {
        let consumed = decoder.decode_bytes(chunk);
        assert_eq!(consumed, chunk.len(), "chunk size {}", chunk_size);
    }
    decoder
}

#[test]
fn test_chunk_size_does_not_change_result() {
    let mut reference: NmeaDecoder = NmeaDecoder::new();
    for &byte in BURST {
        assert!(reference.decode(byte));
    }

    for chunk_size in [1, 2, 3, 7, 16, 64, BURST.len()] {
        let decoder = decode_in_chunks(BURST, chunk_size);
        assert_eq!(
            decoder.navigation(),
            reference.navigation(),
            "chunk size {}",
            chunk_size
        );
    }
}

#[test]
fn test_burst_populates_navigation_state() {
    let decoder = decode_in_chunks(BURST, 5);
    assert!(decoder.is_locked());
    assert_eq!(decoder.satellites(), 5);
    assert_eq!(decoder.fix_type(), FixType::Fix3D);
    assert_eq!(
        (decoder.year(), decoder.month(), decoder.day()),
        (2002, 12, 9)
    );
    // GLL came last, so its position and time are the ones held
    assert!((decoder.latitude() - (47.0 + 17.11634 / 60.0)).abs() < 1e-9);
    assert_eq!(
        (decoder.hour(), decoder.minute(), decoder.second()),
        (12, 49, 23)
    );
}

#[test]
fn test_noise_between_sentences() {
    let mut noisy = Vec::new();
    noisy.extend_from_slice(b"\x00\xff,,**\r\n");
    for line in BURST.split_inclusive(|&b| b == b'\n') {
        noisy.extend_from_slice(line);
        noisy.extend_from_slice(b"\x7f#,\n");
    }

    let clean = decode_in_chunks(BURST, 1);
    let decoder = decode_in_chunks(&noisy, 3);
    assert_eq!(decoder.navigation(), clean.navigation());
}

#[test]
fn test_truncated_sentences_do_not_leak() {
    // Every sentence is cut short and immediately followed by a fresh '$'
    let mut truncated = Vec::new();
    for line in BURST.split_inclusive(|&b| b == b'\n') {
        truncated.extend_from_slice(&line[..line.len() / 3]);
    }
    // A latitude closed just before the cut must not pair with a later hemisphere
    truncated.extend_from_slice(b"$GPGLL,4717.11634,");
    truncated.extend_from_slice(b"$GPGLL,,S,,W,,V,N*7B\r\n");
    truncated.extend_from_slice(b"$GPGSV,2,2,11,28,,,21*74\r\n");

    let decoder = decode_in_chunks(&truncated, 4);
    assert_eq!(decoder.satellites(), 11);
    assert_eq!(decoder.latitude(), 0.0);
    assert_eq!(decoder.longitude(), 0.0);
    assert!(!decoder.is_locked());
}

#[test]
fn test_corrupted_byte_only_affects_its_field() {
    // The first latitude digit flipped to a letter: the latitude degrades to
    // zero and the rest of the sentence is intact
    let mut decoder: NmeaDecoder = NmeaDecoder::new();
    decoder.decode_bytes(b"$GPGLL,X717.11634,N,00833.91297,E,124923.00,A,A*6E\r\n");
    assert_eq!(decoder.latitude(), 0.0);
    assert!((decoder.longitude() - (8.0 + 33.91297 / 60.0)).abs() < 1e-9);
    assert!(decoder.is_locked());
}
