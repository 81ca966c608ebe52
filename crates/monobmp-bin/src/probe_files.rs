/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{debug, error};
use monobmp::{BmpMonoDecoder, BmpMonoErrors};
use monobmp_core::options::DecoderOptions;

use crate::file_io::open_input;
use crate::serde::Metadata;

/// Probe input files, extract metadata, and print to standard output.
pub fn probe_input_files(args: &ArgMatches, options: DecoderOptions) -> Result<(), BmpMonoErrors> {
    for in_file in args.get_raw("in").into_iter().flatten() {
        let (reader, size) = open_input(in_file)?;

        let mut decoder = BmpMonoDecoder::new_with_options(reader, options);
        decoder.decode_headers()?;

        if let Some(headers) = decoder.headers() {
            debug!("Headers for {:?}\n{}", in_file, headers);

            let metadata = Metadata::new(in_file.to_os_string(), size, headers);

            match serde_json::to_string_pretty(&metadata) {
                Ok(json) => println!("{json}"),
                Err(err) => error!("Could not serialize metadata for {:?}: {}", in_file, err)
            }
        }
    }
    Ok(())
}
