/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use monobmp::BmpHeaders;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub struct Metadata<'a> {
    file:    OsString,
    size:    u64,
    headers: &'a BmpHeaders
}

impl<'a> Metadata<'a> {
    pub fn new(file: OsString, size: u64, headers: &'a BmpHeaders) -> Metadata<'a> {
        Metadata {
            file,
            size,
            headers
        }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let geometry = self.headers.geometry();
        let mut state = serializer.serialize_struct("BmpMetadata", 10)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size_on_disk", &self.size)?;
        state.serialize_field("file_size", &self.headers.file.file_size)?;
        state.serialize_field("data_offset", &self.headers.file.data_offset)?;
        state.serialize_field("header", self.headers.info.name())?;
        state.serialize_field("header_size", &self.headers.info.size())?;
        state.serialize_field("width", &geometry.width)?;
        state.serialize_field("height", &geometry.height)?;
        state.serialize_field("bits_per_pixel", &geometry.bits_per_pixel)?;
        state.serialize_field("top_down", &!geometry.is_bottom_up())?;

        state.end()
    }
}
