/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A seekable bytestream reader.
//!
//! The decoder reads from anything that implements [`ByteReaderTrait`],
//! wrapped in a [`ByteReader`] which adds little endian integer reads.
//!
//! In memory buffers should use [`ByteCursor`], with the `std` feature
//! `std::io::Cursor`, `std::io::BufReader` and `std::fs::File` work too.
pub use reader::{ByteCursor, ByteIoError, ByteReader, ByteSeekFrom};
pub use traits::ByteReaderTrait;

mod reader;
mod traits;
