/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by the monobmp crates
//!
//! It currently contains
//!
//! - A seekable bytestream reader with little endian aware reads
//! - Bit ordering information for packed 1-bit rows
//! - Decoder options
//! - A logging facade that compiles to nothing when the `log` feature is off
//!
//! This library is `#[no_std]` unless the `std` feature is enabled
//!
//! # Features
//!  - `std`: Implements the reader trait for `std::io` types
//!    (`Cursor`, `BufReader`, `File`).
//!
//!  - `log`: Routes the logging macros to the `log` crate.
//!
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]

pub mod bit_order;
pub mod bytestream;
pub mod log;
pub mod options;
