use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::codecs::pnm::{PnmDecoder, PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageDecoder, ImageEncoder};

use super::Image;
use crate::error::QuantizeError;

/// Maximum sample value accepted in a PPM header
const PPM_MAX_SAMPLE: u32 = 255;

/// Read a binary (P6) PPM file with 8-bit channels
pub fn read_ppm(path: impl AsRef<Path>) -> Result<Image, QuantizeError> {
    let bytes = fs::read(path.as_ref())?;
    decode_ppm(&bytes)
}

/// Decode a binary (P6) PPM held in memory
///
/// Rejects ASCII pixmaps, bitmaps, graymaps and arbitrary maps. The maximum
/// sample value must be 255 and the header may not declare more pixels than
/// the data holds.
pub fn decode_ppm(bytes: &[u8]) -> Result<Image, QuantizeError> {
    // The header is validated on a throwaway decoder, the pixels read from a fresh one
    let (reader, header) = PnmDecoder::new(Cursor::new(bytes))?.into_inner();

    match header.subtype() {
        PnmSubtype::Pixmap(SampleEncoding::Binary) => {}
        PnmSubtype::Pixmap(SampleEncoding::Ascii) => {
            return Err(QuantizeError::InvalidFormat(
                "ASCII pixmap (P3), expected binary P6".to_string(),
            ));
        }
        other => {
            return Err(QuantizeError::InvalidFormat(format!(
                "{:?}, expected binary P6 pixmap",
                other
            )));
        }
    }

    if header.maximal_sample() != PPM_MAX_SAMPLE {
        return Err(QuantizeError::UnsupportedDepth(header.maximal_sample()));
    }

    // The header reader stops right after the single whitespace following maxval
    let available = (bytes.len() as u64).saturating_sub(reader.position());
    let declared = u64::from(header.width())
        .saturating_mul(u64::from(header.height()))
        .saturating_mul(3);
    if declared > available {
        return Err(QuantizeError::InvalidFormat(format!(
            "header declares {}x{} pixels ({} bytes) but only {} bytes of pixel data follow",
            header.width(),
            header.height(),
            declared,
            available
        )));
    }

    let decoder = PnmDecoder::new(Cursor::new(bytes))?;
    let (width, height) = decoder.dimensions();
    let mut buf = vec![0u8; decoder.total_bytes() as usize];
    decoder.read_image(&mut buf)?;

    Image::from_rgb8(width, height, &buf)
}

/// Write an image as a binary (P6) PPM file
pub fn write_ppm(image: &Image, path: impl AsRef<Path>) -> Result<(), QuantizeError> {
    let bytes = encode_ppm(image)?;
    fs::write(path.as_ref(), bytes)?;
    Ok(())
}

/// Encode an image as binary (P6) PPM bytes, rounding every channel
pub fn encode_ppm(image: &Image) -> Result<Vec<u8>, QuantizeError> {
    let mut out = Vec::new();
    PnmEncoder::new(&mut out)
        .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
        .write_image(
            &image.to_rgb8(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )?;

    Ok(out)
}
