//! Big-endian packing of element values.
//!
//! Values are range-checked against the target width; nothing is ever
//! truncated or wrapped. An empty array packs to an empty byte stream.

use crate::error::PackError;
use crate::memory::ElementWidth;

/// One input element. Wide enough for every `u64` and for negative values,
/// which are rejected rather than reinterpreted.
pub type Element = i128;

fn check_range(value: Element, width: ElementWidth) -> Result<u64, PackError> {
    u64::try_from(value)
        .ok()
        .filter(|v| *v <= width.max_value())
        .ok_or(PackError::OutOfRange { value, width })
}

fn push_value(out: &mut Vec<u8>, value: u64, width: ElementWidth) {
    let bytes = value.to_be_bytes();
    out.extend_from_slice(&bytes[bytes.len() - width.bytes()..]);
}

/// Encode a single value as `width.bytes()` big-endian bytes.
pub fn encode_value(value: Element, width: ElementWidth) -> Result<Vec<u8>, PackError> {
    let v = check_range(value, width)?;
    let mut out = Vec::with_capacity(width.bytes());
    push_value(&mut out, v, width);
    Ok(out)
}

/// Encode every value in order and concatenate the results.
///
/// The first out-of-range element aborts the whole encode with
/// [`PackError::ElementOutOfRange`].
pub fn encode_array(values: &[Element], width: ElementWidth) -> Result<Vec<u8>, PackError> {
    let mut out = Vec::with_capacity(values.len() * width.bytes());
    for (index, &value) in values.iter().enumerate() {
        let v = check_range(value, width)
            .map_err(|_| PackError::ElementOutOfRange { index, value, width })?;
        push_value(&mut out, v, width);
    }
    Ok(out)
}

/// Decode one big-endian value. `bytes` must be exactly `width.bytes()` long.
pub fn decode_value(bytes: &[u8], width: ElementWidth) -> Result<u64, PackError> {
    if bytes.len() != width.bytes() {
        return Err(PackError::TrailingBytes { len: bytes.len(), width });
    }
    Ok(bytes.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b)))
}

/// Inverse of [`encode_array`].
pub fn decode_array(bytes: &[u8], width: ElementWidth) -> Result<Vec<u64>, PackError> {
    if bytes.len() % width.bytes() != 0 {
        return Err(PackError::TrailingBytes { len: bytes.len(), width });
    }
    bytes
        .chunks_exact(width.bytes())
        .map(|chunk| decode_value(chunk, width))
        .collect()
}
