/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::ErrorKind;
use std::time::Instant;

use fixnan_fits::{FitsDestination, FitsSource};
use fixnan_procs::remap::{RemapCounts, Remapper};
use log::{debug, info, warn};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::WorkflowErrors;

/// Run the whole remap described by `options`
///
/// Returns the final counts, the caller prints them.
pub fn run(options: &CmdOptions) -> Result<RemapCounts, WorkflowErrors> {
    let start = Instant::now();

    info!("input_file  = [{}]", options.input);
    info!(
        "output_file = [{}]",
        options.output.as_deref().unwrap_or("-")
    );
    if let Some(value) = options.substitute {
        info!("NaN value   = {value}");
    }
    for (pos, rule) in options.rules.iter().enumerate() {
        info!("range[{pos}]    = {rule}");
    }

    let mut source = open_source(options)?;

    let (width, height) = source.dimensions();
    let (crpix1, crpix2) = source.crpix();

    info!("naxis1 = {width}");
    info!("naxis2 = {height}");
    info!("crpix1 = {}", crpix1.unwrap_or_default());
    info!("crpix2 = {}", crpix2.unwrap_or_default());

    let remapper = options.remapper();

    let counts = match &options.output {
        Some(path) => {
            let mut destination = create_output(path, &mut source)?;
            info!("FITS output file {path} created");

            let counts = remap_fits(&mut source, Some(&mut destination), &remapper)?;
            destination.finish()?;
            counts
        }
        None => remap_fits(&mut source, None, &remapper)?
    };

    info!("Done ({:?} total)", start.elapsed());

    Ok(counts)
}

/// Open the source and check its dimensions
///
/// Every failure here is reported as an invalid source.
fn open_source(options: &CmdOptions) -> Result<FitsSource, WorkflowErrors> {
    FitsSource::open_with_options(&options.input, options.decoder_options).map_err(|err| {
        warn!("Could not open {}: {err}", options.input);
        WorkflowErrors::InvalidSource(options.input.clone())
    })
}

/// Create the destination with the header of `source`, removing whatever
/// was at `path` first
fn create_output(path: &str, source: &mut FitsSource) -> Result<FitsDestination, WorkflowErrors> {
    match std::fs::remove_file(path) {
        Ok(()) => debug!("Removed existing {path}"),
        Err(err) if err.kind() == ErrorKind::NotFound => (),
        Err(err) => return Err(WorkflowErrors::CreateOutput(path.to_string(), err))
    }
    let (width, height) = source.dimensions();

    let mut destination = FitsDestination::create(path, width, height)?;
    destination.copy_header(source)?;

    Ok(destination)
}

/// Remap every remaining row of `source`, writing them to `destination`
/// if present
///
/// The image is streamed one row at a time. The destination is left
/// open, the caller finishes it.
pub fn remap_fits(
    source: &mut FitsSource, mut destination: Option<&mut FitsDestination>, remapper: &Remapper
) -> Result<RemapCounts, WorkflowErrors> {
    let start = Instant::now();

    let (width, height) = source.dimensions();

    info!(
        "{} bytes per row of image pixels",
        width * core::mem::size_of::<f64>()
    );

    let mut counts = RemapCounts::default();

    for y in source.rows_read()..height {
        debug!(
            "Processing input row {y:>5} [So far rangeCount={}, nanCount={}]",
            counts.range_count, counts.nan_count
        );
        let mut row = source.read_row()?;

        remapper.remap_row_in_place(&mut row, &mut counts);

        if let Some(destination) = destination.as_deref_mut() {
            destination.write_row(&row)?;
        }
    }
    info!("Done copying data ({:?})", start.elapsed());

    Ok(counts)
}
