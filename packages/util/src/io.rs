//! Raw byte access for analysis inputs
//!
//! Offset reads on any seekable buffer plus whole-file reads in binary or
//! text mode.

use std::fs;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use droidscope_common::LoggingTransformer;

use crate::error::Result;

/// Read up to `size` bytes at `offset` without moving the stream position
///
/// `None` reads from `offset` to the end of the stream. Fewer bytes than
/// requested come back when the stream ends first; an `offset` past the end
/// yields an empty buffer.
///
/// # Errors
///
/// Returns [`UtilError::Io`](crate::UtilError::Io) on seek or read failure.
/// The original position is restored before a read failure is reported.
pub fn read_at<R>(buf: &mut R, offset: u64, size: Option<u64>) -> Result<Vec<u8>>
where
    R: Read + Seek,
{
    let position = buf.stream_position()?;
    let window = read_window(buf, offset, size);
    buf.seek(SeekFrom::Start(position))?;
    let data = window?;
    LoggingTransformer::log_range_read(offset, size, data.len());
    Ok(data)
}

fn read_window<R>(buf: &mut R, offset: u64, size: Option<u64>) -> std::io::Result<Vec<u8>>
where
    R: Read + Seek,
{
    buf.seek(SeekFrom::Start(offset))?;
    let mut data = Vec::new();
    match size {
        Some(limit) => buf.by_ref().take(limit).read_to_end(&mut data)?,
        None => buf.read_to_end(&mut data)?,
    };
    Ok(data)
}

/// Read a whole file as bytes
///
/// # Errors
///
/// Returns [`UtilError::Io`](crate::UtilError::Io) when the file cannot be read.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    LoggingTransformer::log_file_read(path, data.len());
    Ok(data)
}

/// Read a whole file as UTF-8 text
///
/// # Errors
///
/// Returns [`UtilError::Io`](crate::UtilError::Io) when the file cannot be
/// read, with kind `InvalidData` when it is not valid UTF-8.
pub fn read_file_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    LoggingTransformer::log_file_read(path, text.len());
    Ok(text)
}

/// Async variant of [`read_file`]
///
/// # Errors
///
/// Returns [`UtilError::Io`](crate::UtilError::Io) when the file cannot be read.
pub async fn read_file_async(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let data = tokio::fs::read(path).await?;
    LoggingTransformer::log_file_read(path, data.len());
    Ok(data)
}
