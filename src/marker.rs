/// The marker types the scanner dispatches on. Every other marker byte is
/// structurally valid (prefix, type, length, payload) and is skipped whole,
/// so it needs no variant here.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Marker {
    /// Baseline DCT start of frame
    SOF0 = 0xC0,

    /// Huffman table specification
    DHT = 0xC4,

    /// Start of image
    SOI = 0xD8,

    /// End of image
    EOI = 0xD9,

    /// Start of scan
    SOS = 0xDA,

    /// Define quantization table(s)
    DQT = 0xDB,

    /// JFIF application segment
    APP0 = 0xE0,
}

impl Marker {
    /// Every marker opens with this byte.
    pub(crate) const PREFIX: u8 = 0xFF;

    pub(crate) fn from_u8(b: u8) -> Option<Marker> {
        match b {
            0xC0 => Some(Marker::SOF0),
            0xC4 => Some(Marker::DHT),
            0xD8 => Some(Marker::SOI),
            0xD9 => Some(Marker::EOI),
            0xDA => Some(Marker::SOS),
            0xDB => Some(Marker::DQT),
            0xE0 => Some(Marker::APP0),
            _ => None,
        }
    }

    /// SOI and EOI stand alone: they carry no length field and no payload.
    pub(crate) fn standalone(self) -> bool {
        matches!(self, Marker::SOI | Marker::EOI)
    }
}
