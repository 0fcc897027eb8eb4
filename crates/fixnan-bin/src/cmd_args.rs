/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::help_strings::{AFTER_HELP, DEBUG_HELP, OUTPUT_HELP, RANGES_HELP};

pub mod help_strings;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("fixnan")
        .about("Convert NaN samples of a FITS image to a value, or ranges of values to NaN")
        .after_help(AFTER_HELP)
        .version(env!("CARGO_PKG_VERSION"))
        .arg(Arg::new("debug")
            .short('d')
            .value_name("level")
            .help("Debug level, 0 to 3")
            .long_help(DEBUG_HELP)
            .help_heading("Logging")
            .allow_negative_numbers(true)
            .action(ArgAction::Set))
        .arg(Arg::new("value")
            .short('v')
            .value_name("NaN-value")
            .help("Value to replace NaN samples (and samples in a range) with")
            .allow_negative_numbers(true)
            .action(ArgAction::Set))
        .arg(Arg::new("json")
            .long("json")
            .help("Print the final status as a JSON object")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("in")
            .value_name("in.fits")
            .help("FITS image to read")
            .required(true))
        .arg(Arg::new("out")
            .value_name("out.fits")
            .help("FITS image to write, '-' to only count samples")
            .long_help(OUTPUT_HELP)
            .required(true))
        .arg(Arg::new("ranges")
            .value_name("minblank maxblank")
            .help("Ranges of values to blank, 'min' and 'max' leave a side open")
            .long_help(RANGES_HELP)
            .num_args(0..)
            .allow_negative_numbers(true)
            .action(ArgAction::Append))
        .args(add_settings())
}

fn add_settings() -> [Arg; 2] {
    [
        Arg::new("max-width")
            .long("max-width")
            .help_heading("Image Settings")
            .help("Maximum width (NAXIS1) of images allowed")
            .default_value("1048576")
            .value_parser(value_parser!(usize)),
        Arg::new("max-height")
            .long("max-height")
            .help_heading("Image Settings")
            .help("Maximum height (NAXIS2) of images allowed")
            .default_value("1048576")
            .value_parser(value_parser!(usize))
    ]
}
