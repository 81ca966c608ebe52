/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

pub use crate::bytestream::reader::cursor::ByteCursor;
use crate::bytestream::ByteReaderTrait;

mod cursor;
mod std_readers;

/// Enumeration of possible methods to seek within an I/O object.
///
/// It is analogous to the [SeekFrom](std::io::SeekFrom) in the std library but
/// it's here to allow this to work in no-std crates
#[derive(Copy, PartialEq, Eq, Clone, Debug)]
pub enum ByteSeekFrom {
    /// Sets the offset to the provided number of bytes.
    Start(u64),

    /// Sets the offset to the size of this object plus the specified number of
    /// bytes.
    ///
    /// It is possible to seek beyond the end of an object, but it's an error to
    /// seek before byte 0.
    End(i64),

    /// Sets the offset to the current position plus the specified number of
    /// bytes.
    ///
    /// It is possible to seek beyond the end of an object, but it's an error to
    /// seek before byte 0.
    Current(i64)
}

impl ByteSeekFrom {
    /// Convert to [SeekFrom](std::io::SeekFrom) from the `std::io` library
    #[cfg(feature = "std")]
    pub(crate) fn to_std_seek(self) -> std::io::SeekFrom {
        match self {
            ByteSeekFrom::Start(pos) => std::io::SeekFrom::Start(pos),
            ByteSeekFrom::End(pos) => std::io::SeekFrom::End(pos),
            ByteSeekFrom::Current(pos) => std::io::SeekFrom::Current(pos)
        }
    }
}

/// Errors raised by byte sources
pub enum ByteIoError {
    #[cfg(feature = "std")]
    StdIoError(std::io::Error),
    TryFromIntError(core::num::TryFromIntError),
    /// expected, found
    NotEnoughBytes(usize, usize),
    Generic(&'static str),
    SeekError(&'static str)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            ByteIoError::TryFromIntError(err) => {
                writeln!(f, "Cannot convert to int {}", err)
            }
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
            ByteIoError::SeekError(err) => {
                writeln!(f, "Seek error: {err}")
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ByteIoError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

impl From<core::num::TryFromIntError> for ByteIoError {
    fn from(value: core::num::TryFromIntError) -> Self {
        ByteIoError::TryFromIntError(value)
    }
}

impl From<&'static str> for ByteIoError {
    fn from(value: &'static str) -> Self {
        ByteIoError::Generic(value)
    }
}

/// A reader over a seekable byte source with
/// little endian integer reads
pub struct ByteReader<T: ByteReaderTrait> {
    inner: T
}

impl<T: ByteReaderTrait> ByteReader<T> {
    pub fn new(source: T) -> ByteReader<T> {
        ByteReader { inner: source }
    }
    /// Destroy this reader returning
    /// the underlying source of the bytes
    /// from which we were decoding
    #[inline(always)]
    pub fn consume(self) -> T {
        self.inner
    }

    #[inline(always)]
    pub fn skip(&mut self, num: usize) -> Result<u64, ByteIoError> {
        let num = i64::try_from(num)?;
        self.inner.z_seek(ByteSeekFrom::Current(num))
    }

    #[inline(always)]
    pub fn seek(&mut self, from: ByteSeekFrom) -> Result<u64, ByteIoError> {
        self.inner.z_seek(from)
    }

    #[inline]
    pub fn set_position(&mut self, position: u64) -> Result<(), ByteIoError> {
        self.seek(ByteSeekFrom::Start(position))?;

        Ok(())
    }

    #[inline(always)]
    pub fn position(&mut self) -> Result<u64, ByteIoError> {
        self.inner.z_position()
    }

    #[inline(always)]
    pub fn eof(&mut self) -> Result<bool, ByteIoError> {
        self.inner.is_eof()
    }

    #[inline(always)]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        self.inner.read_const_bytes(&mut byte_store)?;
        Ok(byte_store)
    }

    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        self.inner.read_exact_bytes(buf)
    }

    pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        self.inner.read_bytes(buf)
    }

    /// Keep reading until `buf` is full or the source runs dry.
    ///
    /// Returns the number of bytes placed in `buf`, a value smaller
    /// than `buf.len()` means the end of the stream was reached
    pub fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        let mut filled = 0;

        while filled < buf.len() {
            let read = self.inner.read_bytes(&mut buf[filled..])?;
            if read == 0 {
                break;
            }
            filled += read;
        }
        Ok(filled)
    }
}

macro_rules! get_single_type {
    ($name:tt,$int_type:tt) => {
        impl<T: ByteReaderTrait> ByteReader<T> {
            #[doc=concat!("Read ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name(&mut self) -> Result<$int_type, ByteIoError> {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let mut space = [0; SIZE_OF_VAL];

                self.inner.read_const_bytes(&mut space)?;

                Ok($int_type::from_le_bytes(space))
            }
        }
    };
}

get_single_type!(get_u16_le_err, u16);
get_single_type!(get_u32_le_err, u32);
get_single_type!(get_i32_le_err, i32);
