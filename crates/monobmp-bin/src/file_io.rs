/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;

use monobmp::BmpMonoErrors;
use monobmp_core::bytestream::ByteIoError;

/// Open `path` for buffered reading, returning the reader and the file length
pub fn open_input(path: &OsStr) -> Result<(BufReader<File>, u64), BmpMonoErrors> {
    let fd = File::open(path).map_err(ByteIoError::from)?;
    let size = fd.metadata().map_err(ByteIoError::from)?.len();

    Ok((BufReader::new(fd), size))
}
