/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, trace};
use monobmp::{BmpMonoDecoder, BmpMonoErrors};
use monobmp_core::options::DecoderOptions;

use crate::file_io::open_input;

/// Decode every input file and print it as text
pub(crate) fn render_input_files(
    args: &ArgMatches, options: DecoderOptions
) -> Result<(), BmpMonoErrors> {
    info!("Decoding input files");

    for in_file in args.get_raw("in").into_iter().flatten() {
        let (reader, size) = open_input(in_file)?;
        trace!("Opened {:?}, {} bytes", in_file, size);

        let mut decoder = BmpMonoDecoder::new_with_options(reader, options);
        let bitmap = decoder.decode()?;

        info!(
            "Decoded {:?}: {}x{}",
            in_file,
            bitmap.width(),
            bitmap.height()
        );

        println!("{}:", in_file.to_string_lossy());
        print!("{}", bitmap.to_text());
    }
    Ok(())
}
