use std::io::Cursor;
use std::path::Path;

use image::{ImageError, ImageFormat, Rgba, RgbaImage};
use thiserror::Error;

use crate::raster::{Color, Raster, RasterError};

/// Marker prepended once to every encoded byte string. The decoder also
/// tolerates it as a per-byte token, since some stores hand segments back
/// that way.
pub const BYTE_STRING_MARKER: &str = "0x";

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Errors from the raster / byte-string pipeline
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed byte string: {0}")]
    MalformedByteString(String),

    #[error("image codec failure: {0}")]
    Codec(#[from] ImageError),

    #[error("decoded image does not form a valid raster: {0}")]
    Raster(#[from] RasterError),
}

/// Encode a raster as a `0x`-prefixed uppercase hex string of its losslessly
/// compressed (PNG) bytes.
pub fn encode(raster: &Raster) -> Result<String, CodecError> {
    let png = to_png_bytes(raster)?;
    let mut out = String::with_capacity(BYTE_STRING_MARKER.len() + png.len() * 2);
    out.push_str(BYTE_STRING_MARKER);
    for byte in png {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
    }
    Ok(out)
}

/// Decode a hex byte string produced by [`encode`] (or handed back by the
/// store) into a raster with the decoded image's dimensions.
pub fn decode(byte_string: &str) -> Result<Raster, CodecError> {
    let bytes = parse_byte_string(byte_string)?;
    let img = image::load_from_memory(&bytes)?.to_rgba8();
    raster_from_image(&img)
}

/// Write the raster to `path` as a PNG file, no extra framing.
pub fn save_png(raster: &Raster, path: impl AsRef<Path>) -> Result<(), CodecError> {
    to_image(raster).save_with_format(path.as_ref(), ImageFormat::Png)?;
    log::info!("exported picture to {}", path.as_ref().display());
    Ok(())
}

/// Load an image file from `path` into a raster, dropping any alpha.
pub fn load_png(path: impl AsRef<Path>) -> Result<Raster, CodecError> {
    let img = image::open(path.as_ref())?.to_rgba8();
    raster_from_image(&img)
}

fn to_image(raster: &Raster) -> RgbaImage {
    let mut img = RgbaImage::new(raster.width() as u32, raster.height() as u32);
    for (x, y, color) in raster.enumerate_pixels() {
        img.put_pixel(x as u32, y as u32, Rgba([color.r, color.g, color.b, 0xff]));
    }
    img
}

fn to_png_bytes(raster: &Raster) -> Result<Vec<u8>, CodecError> {
    let mut cursor = Cursor::new(Vec::new());
    to_image(raster).write_to(&mut cursor, ImageFormat::Png)?;
    Ok(cursor.into_inner())
}

fn raster_from_image(img: &RgbaImage) -> Result<Raster, CodecError> {
    let (width, height) = (img.width() as i32, img.height() as i32);
    let pixels = img
        .pixels()
        .map(|p| Color::rgb(p.0[0], p.0[1], p.0[2]))
        .collect();
    Ok(Raster::from_pixels(width, height, pixels)?)
}

/// Parse two hex characters per byte, skipping any `0x` marker segments.
fn parse_byte_string(s: &str) -> Result<Vec<u8>, CodecError> {
    let s = s.trim();
    if !s.is_ascii() {
        return Err(CodecError::MalformedByteString(
            "contains non-ASCII characters".into(),
        ));
    }
    if s.len() % 2 != 0 {
        return Err(CodecError::MalformedByteString(format!(
            "odd length {}",
            s.len()
        )));
    }

    let mut bytes = Vec::with_capacity(s.len() / 2);
    for i in (0..s.len()).step_by(2) {
        let pair = &s[i..i + 2];
        if pair.eq_ignore_ascii_case(BYTE_STRING_MARKER) {
            continue;
        }
        let byte = u8::from_str_radix(pair, 16).map_err(|_| {
            CodecError::MalformedByteString(format!("invalid hex pair {pair:?} at offset {i}"))
        })?;
        bytes.push(byte);
    }
    Ok(bytes)
}
