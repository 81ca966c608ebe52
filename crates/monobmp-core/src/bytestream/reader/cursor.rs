/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use crate::bytestream::{ByteIoError, ByteReaderTrait, ByteSeekFrom};

/// An in memory byte source that works in `no_std` environments
///
/// Reads past the end of the buffer are short, seeking past the end is
/// allowed and leaves the cursor at end of stream
pub struct ByteCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ByteCursor<T> {
    pub fn new(buffer: T) -> ByteCursor<T> {
        ByteCursor {
            stream:   buffer,
            position: 0
        }
    }
    /// Return the current position, without going through the trait
    pub fn position(&self) -> usize {
        self.position
    }
    pub fn get_ref(&self) -> &T {
        &self.stream
    }
    pub fn into_inner(self) -> T {
        self.stream
    }
}

impl<T: AsRef<[u8]>> ByteReaderTrait for ByteCursor<T> {
    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        let bytes = self.stream.as_ref();
        let start = self.position.min(bytes.len());
        let remaining = bytes.len() - start;

        if remaining < buf.len() {
            // position is left untouched
            return Err(ByteIoError::NotEnoughBytes(buf.len(), remaining));
        }
        buf.copy_from_slice(&bytes[start..start + buf.len()]);
        self.position = start + buf.len();

        Ok(())
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        let bytes = self.stream.as_ref();
        let start = self.position.min(bytes.len());
        let end = start.saturating_add(buf.len()).min(bytes.len());

        buf[..end - start].copy_from_slice(&bytes[start..end]);
        self.position = end.max(self.position);

        Ok(end - start)
    }

    #[inline(always)]
    fn z_seek(&mut self, from: ByteSeekFrom) -> Result<u64, ByteIoError> {
        let new_position = match from {
            ByteSeekFrom::Start(position) => i64::try_from(position)?,
            ByteSeekFrom::End(offset) => {
                let end = i64::try_from(self.stream.as_ref().len())?;
                end.checked_add(offset)
                    .ok_or(ByteIoError::SeekError("Seek position overflowed"))?
            }
            ByteSeekFrom::Current(offset) => {
                let current = i64::try_from(self.position)?;
                current
                    .checked_add(offset)
                    .ok_or(ByteIoError::SeekError("Seek position overflowed"))?
            }
        };
        if new_position < 0 {
            return Err(ByteIoError::SeekError("Cannot seek before byte 0"));
        }
        self.position = usize::try_from(new_position)?;

        Ok(self.position as u64)
    }

    #[inline(always)]
    fn is_eof(&mut self) -> Result<bool, ByteIoError> {
        Ok(self.position >= self.stream.as_ref().len())
    }

    #[inline(always)]
    fn z_position(&mut self) -> Result<u64, ByteIoError> {
        Ok(self.position as u64)
    }
}
