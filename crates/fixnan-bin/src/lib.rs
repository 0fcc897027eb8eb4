/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Command line front end of fixnan
//!
//! Replaces NaN samples of a FITS image with a fixed value and/or blanks
//! samples falling in user given ranges, writing a 64 bit float copy of
//! the image and reporting how many samples were touched.
use std::process::exit;

use clap::error::ErrorKind;

use crate::errors::WorkflowErrors;
use crate::status::Status;

pub mod cmd_args;
pub mod cmd_parsers;
pub mod errors;
pub mod status;
pub mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();

    let matches = match cmd.try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            let err = WorkflowErrors::from(err);
            println!("{}", err.status().to_struct_line());
            exit(1);
        }
    };
    let json = matches.get_flag("json");

    let result = cmd_parsers::global_options::parse_options(&matches).and_then(|options| {
        cmd_parsers::global_options::setup_logger(options.debug_level)?;
        workflow::run(&options)
    });

    match result {
        Ok(counts) => {
            println!("{}", Status::Ok(counts).render(json));
        }
        Err(err) => {
            let line = err.status().render(json);

            if err.reported_on_stderr() {
                eprintln!("{line}");
            } else {
                println!("{line}");
            }
            exit(1);
        }
    }
}
