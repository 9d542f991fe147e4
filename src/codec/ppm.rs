//! Binary PPM (`P6`) decoding and encoding.
//!
//! ## Format
//!
//! ```text
//! P6
//! # optional comment lines
//! <width> <height>
//! 255
//! <width * height * 3 bytes of RGB>
//! ```
//!
//! Only a maximum channel value of 255 is accepted. Exactly one whitespace
//! byte separates the header from the pixel data.

use crate::buffer::{Pixel, PixelBuffer};
use crate::config::TransformConfig;
use crate::error::{PpmfxError, Result};
use std::io::{BufRead, Read, Write};

const MAGIC: &str = "P6";

/// Decode a binary PPM.
pub fn read_ppm<R: BufRead>(reader: &mut R) -> Result<PixelBuffer> {
    let tag = read_token(reader)?;
    if tag != MAGIC {
        return Err(PpmfxError::InvalidPpm(format!("bad tag '{}'", tag)));
    }

    // Width first, then height
    let cols = read_number(reader, "width")?;
    let rows = read_number(reader, "height")?;
    let max_value = read_number(reader, "max value")?;

    let expected_max = TransformConfig::DEFAULT.max_channel as i64;
    if max_value != expected_max {
        return Err(PpmfxError::InvalidPpm(format!(
            "max value {} (only {} supported)",
            max_value, expected_max
        )));
    }
    if rows <= 0 || cols <= 0 {
        return Err(PpmfxError::InvalidPpm(format!(
            "non-positive dimensions {}x{}",
            cols, rows
        )));
    }

    // Read the payload before allocating the pixel buffer
    let expected = (rows as u64)
        .checked_mul(cols as u64)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| PpmfxError::InvalidPpm(format!("{}x{} is too large", cols, rows)))?;
    let mut raw = Vec::new();
    reader
        .by_ref()
        .take(expected)
        .read_to_end(&mut raw)
        .map_err(|e| PpmfxError::InvalidPpm(format!("reading pixel data: {}", e)))?;
    if raw.len() as u64 != expected {
        return Err(PpmfxError::InvalidPpm(format!(
            "short read: expected {} bytes of pixel data, got {}",
            expected,
            raw.len()
        )));
    }

    let mut buffer = PixelBuffer::new(rows as usize, cols as usize)?;
    for (dst, chunk) in buffer.pixels_mut().iter_mut().zip(raw.chunks_exact(3)) {
        *dst = Pixel::new(chunk[0], chunk[1], chunk[2]);
    }
    log::debug!("decoded {}x{} PPM", cols, rows);
    Ok(buffer)
}

/// Encode `buffer` as a binary PPM.
pub fn write_ppm<W: Write>(writer: &mut W, buffer: &PixelBuffer) -> Result<()> {
    write!(
        writer,
        "{}\n{} {}\n{}\n",
        MAGIC,
        buffer.cols(),
        buffer.rows(),
        TransformConfig::DEFAULT.max_channel
    )
    .and_then(|_| writer.write_all(&buffer.as_bytes()))
    .and_then(|_| writer.flush())
    .map_err(|e| PpmfxError::Write(e.to_string()))
}

/// Skip whitespace and `#` comments, then read one whitespace-terminated token.
///
/// The single whitespace byte ending the token is consumed.
fn read_token<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut token = Vec::new();
    let mut in_comment = false;

    loop {
        let Some(byte) = next_byte(reader)? else {
            break;
        };
        if in_comment {
            in_comment = byte != b'\n';
            continue;
        }
        match byte {
            b'#' if token.is_empty() => in_comment = true,
            b if b.is_ascii_whitespace() => {
                if !token.is_empty() {
                    break;
                }
            }
            b => token.push(b),
        }
    }

    if token.is_empty() {
        return Err(PpmfxError::InvalidPpm("unexpected end of header".to_string()));
    }
    String::from_utf8(token)
        .map_err(|_| PpmfxError::InvalidPpm("header is not ASCII".to_string()))
}

fn read_number<R: BufRead>(reader: &mut R, what: &str) -> Result<i64> {
    let token = read_token(reader)?;
    token
        .parse::<i64>()
        .map_err(|_| PpmfxError::InvalidPpm(format!("failed to read {} from '{}'", what, token)))
}

fn next_byte<R: BufRead>(reader: &mut R) -> Result<Option<u8>> {
    let byte = reader
        .fill_buf()
        .map_err(|e| PpmfxError::InvalidPpm(format!("reading header: {}", e)))?
        .first()
        .copied();
    if byte.is_some() {
        reader.consume(1);
    }
    Ok(byte)
}
