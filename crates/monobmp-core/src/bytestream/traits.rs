/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! The input trait implemented by byte sources

use crate::bytestream::reader::{ByteIoError, ByteSeekFrom};

/// The input trait implemented for byte sources.
///
/// A source must support sequential reads and seeking, BMP
/// pixel data is located by an absolute offset stored in the file header.
///
/// # Considerations
///
/// If you have an in memory buffer, prefer [`ByteCursor`](crate::bytestream::ByteCursor),
/// it works without the `std` feature.
pub trait ByteReaderTrait {
    /// Read exact bytes required to fill `buf` or return an error if that isn't possible
    ///
    /// ## Errors
    /// In case of an error, the implementation should not increment the internal position
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError>;

    /// Same as [`read_exact_bytes`](Self::read_exact_bytes) but with a size
    /// known at compile time, which lets some implementations skip work.
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ByteIoError> {
        self.read_exact_bytes(buf)
    }

    /// Read bytes into `buf` returning how many bytes were read.
    ///
    /// A return of `Ok(0)` for a non-empty `buf` means the end of the stream.
    /// This doesn't guarantee that buf will be filled, see
    /// [`read_exact_bytes`](Self::read_exact_bytes) for that
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError>;

    /// Seek into a new position in the stream
    ///
    /// This is similar to [seek](std::io::Seek::seek) but works in no-std environments.
    ///
    /// Returns the new position from the start of the stream
    fn z_seek(&mut self, from: ByteSeekFrom) -> Result<u64, ByteIoError>;

    /// Report whether we are at the end of a stream.
    fn is_eof(&mut self) -> Result<bool, ByteIoError>;

    /// Return the current position of the inner cursor.
    fn z_position(&mut self) -> Result<u64, ByteIoError>;
}

impl<T: ByteReaderTrait> ByteReaderTrait for &mut T {
    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        (**self).read_exact_bytes(buf)
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        (**self).read_bytes(buf)
    }

    #[inline(always)]
    fn z_seek(&mut self, from: ByteSeekFrom) -> Result<u64, ByteIoError> {
        (**self).z_seek(from)
    }

    #[inline(always)]
    fn is_eof(&mut self) -> Result<bool, ByteIoError> {
        (**self).is_eof()
    }

    #[inline(always)]
    fn z_position(&mut self) -> Result<u64, ByteIoError> {
        (**self).z_position()
    }
}
