/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "std")]

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read, Seek};

use crate::bytestream::reader::{ByteIoError, ByteSeekFrom};
use crate::bytestream::ByteReaderTrait;

/// `Read::read` retrying on interruption
fn read_retrying<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize, ByteIoError> {
    loop {
        match reader.read(buf) {
            Ok(n) => return Ok(n),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ByteIoError::from(e))
        }
    }
}

impl<T> ByteReaderTrait for std::io::Cursor<T>
where
    T: AsRef<[u8]>
{
    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        self.read_exact(buf).map_err(ByteIoError::from)
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        read_retrying(self, buf)
    }

    #[inline(always)]
    fn z_seek(&mut self, from: ByteSeekFrom) -> Result<u64, ByteIoError> {
        self.seek(from.to_std_seek()).map_err(ByteIoError::from)
    }

    #[inline(always)]
    fn is_eof(&mut self) -> Result<bool, ByteIoError> {
        Ok(self.position() >= self.get_ref().as_ref().len() as u64)
    }

    fn z_position(&mut self) -> Result<u64, ByteIoError> {
        Ok(self.position())
    }
}

impl<T: Read + Seek> ByteReaderTrait for BufReader<T> {
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        self.read_exact(buf).map_err(ByteIoError::from)
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        read_retrying(self, buf)
    }

    fn z_seek(&mut self, from: ByteSeekFrom) -> Result<u64, ByteIoError> {
        self.seek(from.to_std_seek()).map_err(ByteIoError::from)
    }

    fn is_eof(&mut self) -> Result<bool, ByteIoError> {
        self.fill_buf()
            .map(|b| b.is_empty())
            .map_err(ByteIoError::from)
    }

    fn z_position(&mut self) -> Result<u64, ByteIoError> {
        self.stream_position().map_err(ByteIoError::from)
    }
}

impl ByteReaderTrait for File {
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        self.read_exact(buf).map_err(ByteIoError::from)
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        read_retrying(self, buf)
    }

    fn z_seek(&mut self, from: ByteSeekFrom) -> Result<u64, ByteIoError> {
        self.seek(from.to_std_seek()).map_err(ByteIoError::from)
    }

    fn is_eof(&mut self) -> Result<bool, ByteIoError> {
        let position = self.stream_position()?;
        let len = self.metadata()?.len();

        Ok(position >= len)
    }

    fn z_position(&mut self) -> Result<u64, ByteIoError> {
        self.stream_position().map_err(ByteIoError::from)
    }
}

