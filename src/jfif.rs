use crate::cursor::ByteCursor;
use crate::error::{ParseError, Result};

/// Length of the "JFIF\0" identifier opening every APP0 payload.
const IDENTIFIER_BYTES: usize = 5;

/// The unit the pixel density fields are expressed in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DensityUnit {
    /// No unit; x/y density specify the pixel aspect ratio only.
    NoUnit,
    PixelsPerInch,
    PixelsPerCm,
}

impl DensityUnit {
    fn decode(b: u8, offset: usize) -> Result<Self> {
        match b {
            0 => Ok(DensityUnit::NoUnit),
            1 => Ok(DensityUnit::PixelsPerInch),
            2 => Ok(DensityUnit::PixelsPerCm),
            value => Err(ParseError::UnknownDensityUnit { offset, value }),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct JfifVersion {
    pub major: u8,
    pub minor: u8,
}

/// One thumbnail pixel, 24-bit RGB.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// The resolution and thumbnail metadata carried by the JFIF APP0 segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JfifHeader {
    pub version: JfifVersion,
    pub density_unit: DensityUnit,
    pub x_density: u16,
    pub y_density: u16,
    pub x_thumbnail: u8,
    pub y_thumbnail: u8,

    /// x_thumbnail * y_thumbnail pixels, row by row.
    pub thumbnail: Vec<Rgb>,
}

impl JfifHeader {
    /// Decodes an APP0 payload. The thumbnail pixels are read from the bytes
    /// immediately following the thumbnail dimensions.
    pub(crate) fn decode(cursor: &mut ByteCursor) -> Result<Self> {
        cursor.skip(IDENTIFIER_BYTES)?;

        let version = JfifVersion {
            major: cursor.read_u8()?,
            minor: cursor.read_u8()?,
        };

        let unit_offset = cursor.position();
        let density_unit = DensityUnit::decode(cursor.read_u8()?, unit_offset)?;

        let x_density = cursor.read_u16_be()?;
        let y_density = cursor.read_u16_be()?;

        let x_thumbnail = cursor.read_u8()?;
        let y_thumbnail = cursor.read_u8()?;

        let pixel_count = x_thumbnail as usize * y_thumbnail as usize;
        let mut thumbnail = Vec::with_capacity(pixel_count);
        for _ in 0..pixel_count {
            let px = cursor.read_bytes(3)?;
            thumbnail.push(Rgb {
                r: px[0],
                g: px[1],
                b: px[2],
            });
        }

        Ok(JfifHeader {
            version,
            density_unit,
            x_density,
            y_density,
            x_thumbnail,
            y_thumbnail,
            thumbnail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app0_payload(unit: u8, x_thumb: u8, y_thumb: u8, pixels: &[u8]) -> Vec<u8> {
        let mut payload = b"JFIF\0".to_vec();
        payload.extend([0x01, 0x02]); // version 1.02
        payload.push(unit);
        payload.extend([0x00, 0x48, 0x00, 0x60]); // 72x96 density
        payload.extend([x_thumb, y_thumb]);
        payload.extend(pixels);
        payload
    }

    #[test]
    fn test_decode_without_thumbnail() -> anyhow::Result<()> {
        let payload = app0_payload(1, 0, 0, &[]);
        let mut cursor = ByteCursor::new(&payload);

        let header = JfifHeader::decode(&mut cursor)?;

        assert_eq!(header.version, JfifVersion { major: 1, minor: 2 });
        assert_eq!(header.density_unit, DensityUnit::PixelsPerInch);
        assert_eq!(header.x_density, 72);
        assert_eq!(header.y_density, 96);
        assert_eq!((header.x_thumbnail, header.y_thumbnail), (0, 0));
        assert!(header.thumbnail.is_empty());
        assert_eq!(cursor.remaining(), 0);

        Ok(())
    }

    #[test]
    fn test_thumbnail_pixels_follow_the_dimensions() -> anyhow::Result<()> {
        // 2x1 thumbnail: red pixel then blue pixel
        let pixels = [0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF];
        let payload = app0_payload(0, 2, 1, &pixels);
        let mut cursor = ByteCursor::new(&payload);

        let header = JfifHeader::decode(&mut cursor)?;

        assert_eq!(
            header.thumbnail,
            vec![
                Rgb {
                    r: 0xFF,
                    g: 0x00,
                    b: 0x00
                },
                Rgb {
                    r: 0x00,
                    g: 0x00,
                    b: 0xFF
                },
            ]
        );
        assert_eq!(cursor.remaining(), 0);

        Ok(())
    }

    #[test]
    fn test_density_unit_out_of_range() {
        let payload = app0_payload(3, 0, 0, &[]);
        let mut cursor = ByteCursor::new(&payload);

        assert_eq!(
            JfifHeader::decode(&mut cursor),
            Err(ParseError::UnknownDensityUnit {
                offset: 7,
                value: 3
            })
        );
    }

    #[test]
    fn test_truncated_thumbnail_fails_with_eof() {
        // declares a 1x1 thumbnail but carries no pixel bytes
        let payload = app0_payload(2, 1, 1, &[]);
        let mut cursor = ByteCursor::new(&payload);

        assert!(matches!(
            JfifHeader::decode(&mut cursor),
            Err(ParseError::UnexpectedEof { .. })
        ));
    }
}
