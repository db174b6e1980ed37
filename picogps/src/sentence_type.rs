// SPDX-License-Identifier: Apache-2.0

/// Sentence types recognized from the first field of a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceType {
    /// Datum reference (`GPDTM`).
    Dtm,
    /// GNSS satellite fault detection (`GPGBS`).
    Gbs,
    /// Global positioning system fix data (`GPGGA`).
    Gga,
    /// Latitude and longitude, with time of position fix and status (`GPGLL`).
    Gll,
    /// Poll message (`GPGPQ`).
    Gpq,
    /// GNSS range residuals (`GPGRS`).
    Grs,
    /// GNSS DOP and active satellites (`GPGSA`).
    Gsa,
    /// GNSS pseudo range error statistics (`GPGST`).
    Gst,
    /// GNSS satellites in view (`GPGSV`).
    Gsv,
    /// Recommended minimum data (`GPRMC`).
    Rmc,
    /// Text transmission (`GPTXT`).
    Txt,
    /// Course over ground and ground speed (`GPVTG`).
    Vtg,
    /// Time and date (`GPZDA`).
    Zda,
}

const REGISTRY: [(&[u8], SentenceType); 13] = [
    (b"GPGBS", SentenceType::Gbs),
    (b"GPGGA", SentenceType::Gga),
    (b"GPGLL", SentenceType::Gll),
    (b"GPGPQ", SentenceType::Gpq),
    (b"GPGRS", SentenceType::Grs),
    (b"GPGSA", SentenceType::Gsa),
    (b"GPGST", SentenceType::Gst),
    (b"GPGSV", SentenceType::Gsv),
    (b"GPRMC", SentenceType::Rmc),
    (b"GPTXT", SentenceType::Txt),
    (b"GPVTG", SentenceType::Vtg),
    (b"GPZDA", SentenceType::Zda),
    (b"GPDTM", SentenceType::Dtm),
];

impl SentenceType {
    /// Identifies a sentence from its exact type token.
    ///
    /// Matching is case-sensitive with no prefix matching; `None` means the
    /// sentence is not one we decode.
    pub fn identify(token: &[u8]) -> Option<SentenceType> {
        REGISTRY
            .iter()
            .find(|(name, _)| *name == token)
            .map(|&(_, sentence)| sentence)
    }

    /// The talker and sentence token this type is identified by.
    pub fn token(self) -> &'static str {
        match self {
            SentenceType::Dtm => "GPDTM",
            SentenceType::Gbs => "GPGBS",
            SentenceType::Gga => "GPGGA",
            SentenceType::Gll => "GPGLL",
            SentenceType::Gpq => "GPGPQ",
            SentenceType::Grs => "GPGRS",
            SentenceType::Gsa => "GPGSA",
            SentenceType::Gst => "GPGST",
            SentenceType::Gsv => "GPGSV",
            SentenceType::Rmc => "GPRMC",
            SentenceType::Txt => "GPTXT",
            SentenceType::Vtg => "GPVTG",
            SentenceType::Zda => "GPZDA",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_token_round_trips() {
        for &(name, sentence) in REGISTRY.iter() {
            assert_eq!(SentenceType::identify(name), Some(sentence));
            assert_eq!(sentence.token().as_bytes(), name);
        }
    }

    #[test]
    fn test_exact_match_only() {
        assert_eq!(SentenceType::identify(b"GPGSV"), Some(SentenceType::Gsv));
        assert_eq!(SentenceType::identify(b"gpgsv"), None);
        assert_eq!(SentenceType::identify(b"GPGS"), None);
        assert_eq!(SentenceType::identify(b"GPGSVX"), None);
        assert_eq!(SentenceType::identify(b"GNGGA"), None);
        assert_eq!(SentenceType::identify(b""), None);
    }
}
