//! Bounds-checked integer extraction at fixed offsets.
//!
//! The save format calls its multi-byte integers "big-endian", but assembles them with the byte
//! at `offset + width - 1` as the most significant one. In conventional naming that is
//! little-endian order, so the reads below go through [`LittleEndian`]. Every read checks
//! `offset + width <= data.len()` and reports [`DecodeError::OffsetOutOfRange`] otherwise.

use crate::decode::DecodeError;
use byteorder::{ByteOrder, LittleEndian};

/// Byte order of every multi-byte field in the file.
pub type FileOrder = LittleEndian;

fn checked_slice<'a>(
    data: &'a [u8],
    field: &'static str,
    offset: usize,
    width: usize,
) -> Result<&'a [u8], DecodeError> {
    match offset.checked_add(width) {
        Some(end) if end <= data.len() => Ok(&data[offset..end]),
        _ => Err(DecodeError::OffsetOutOfRange {
            field,
            offset,
            width,
            len: data.len(),
        }),
    }
}

fn checked_slice_mut<'a>(buf: &'a mut [u8], offset: usize, width: usize) -> Result<&'a mut [u8], DecodeError> {
    let len = buf.len();
    match offset.checked_add(width) {
        Some(end) if end <= len => Ok(&mut buf[offset..end]),
        _ => Err(DecodeError::OffsetOutOfRange {
            field: "write",
            offset,
            width,
            len,
        }),
    }
}

/// Read one raw byte.
pub fn read_u8(data: &[u8], field: &'static str, offset: usize) -> Result<u8, DecodeError> {
    Ok(checked_slice(data, field, offset, 1)?[0])
}

/// Read a 2-byte on-disk integer.
pub fn read_u16(data: &[u8], field: &'static str, offset: usize) -> Result<u16, DecodeError> {
    Ok(FileOrder::read_u16(checked_slice(data, field, offset, 2)?))
}

/// Read a 4-byte on-disk integer.
pub fn read_u32(data: &[u8], field: &'static str, offset: usize) -> Result<u32, DecodeError> {
    Ok(FileOrder::read_u32(checked_slice(data, field, offset, 4)?))
}

/// Write a 2-byte integer in file order, for building fixtures.
pub fn write_u16(buf: &mut [u8], offset: usize, v: u16) -> Result<(), DecodeError> {
    FileOrder::write_u16(checked_slice_mut(buf, offset, 2)?, v);
    Ok(())
}

/// Write a 4-byte integer in file order, for building fixtures.
pub fn write_u32(buf: &mut [u8], offset: usize, v: u32) -> Result<(), DecodeError> {
    FileOrder::write_u32(checked_slice_mut(buf, offset, 4)?, v);
    Ok(())
}
