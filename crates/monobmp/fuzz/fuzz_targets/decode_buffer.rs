/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![no_main]

use libfuzzer_sys::fuzz_target;
use monobmp::monobmp_core::bytestream::ByteCursor;

fuzz_target!(|data: &[u8]| {
    let mut decoder = monobmp::BmpMonoDecoder::new(ByteCursor::new(data));
    let _ = decoder.decode();
});
