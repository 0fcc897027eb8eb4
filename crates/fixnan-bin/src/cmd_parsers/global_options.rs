/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::num::IntErrorKind;

use clap::ArgMatches;
use fixnan_core::options::DecoderOptions;
use fixnan_procs::range::{parse_real, RangeRule};
use fixnan_procs::remap::Remapper;
use log::{info, Level};

use crate::cmd_parsers::ranges::parse_ranges;
use crate::errors::WorkflowErrors;

/// Destination name meaning "count only, write nothing"
pub const NO_OUTPUT: &str = "-";

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub debug_level:     u32,
    pub substitute:      Option<f64>,
    pub json:            bool,
    pub input:           String,
    /// `None` when the destination is `-`
    pub output:          Option<String>,
    pub rules:           Vec<RangeRule>,
    pub decoder_options: DecoderOptions
}

impl CmdOptions {
    pub fn new(input: String, output: Option<String>) -> CmdOptions {
        CmdOptions {
            debug_level: 0,
            substitute: None,
            json: false,
            input,
            output,
            rules: vec![],
            decoder_options: DecoderOptions::default()
        }
    }

    /// The remapper these options describe
    pub fn remapper(&self) -> Remapper {
        let mut remapper = Remapper::new();

        if let Some(value) = self.substitute {
            remapper = remapper.set_substitute(value);
        }
        for rule in &self.rules {
            remapper = remapper.add_rule(*rule);
        }
        remapper
    }
}

pub fn parse_options(options: &ArgMatches) -> Result<CmdOptions, WorkflowErrors> {
    // clap enforces both, an empty string stands in if it ever does not
    let input = options.get_one::<String>("in").cloned().unwrap_or_default();
    let output = options.get_one::<String>("out").cloned().unwrap_or_default();

    let debug_level = match options.get_one::<String>("debug") {
        Some(level) => parse_debug_level(level)?,
        None => 0
    };
    let substitute = match options.get_one::<String>("value") {
        Some(value) => Some(parse_substitute(value)?),
        None => None
    };
    let tokens: Vec<&String> = options
        .get_many::<String>("ranges")
        .map(|values| values.collect())
        .unwrap_or_default();
    let rules = parse_ranges(&tokens)?;

    if input.starts_with('-') {
        return Err(WorkflowErrors::Arguments(format!(
            "Invalid input file '{input}'"
        )));
    }
    if input == output {
        return Err(WorkflowErrors::Arguments(format!(
            "Cannot use '{input}' as both input and output"
        )));
    }
    let output = if output == NO_OUTPUT { None } else { Some(output) };

    let mut cmd_options = CmdOptions::new(input, output);

    cmd_options.debug_level = debug_level;
    cmd_options.substitute = substitute;
    cmd_options.json = options.get_flag("json");
    cmd_options.rules = rules;

    let width = options.get_one::<usize>("max-width").copied();
    let height = options.get_one::<usize>("max-height").copied();
    let defaults = DecoderOptions::default();

    cmd_options.decoder_options = defaults
        .set_max_width(width.unwrap_or(defaults.max_width()))
        .set_max_height(height.unwrap_or(defaults.max_height()));

    Ok(cmd_options)
}

/// Parse an integer the way C's `strtol` does with base 0
///
/// Leading white space and a sign are accepted, `0x` selects hexadecimal and
/// a leading `0` octal. The whole remaining string must be digits.
/// Out of range values saturate.
pub fn parse_c_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();

    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text)
    };
    let (radix, digits) = if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        (16, hex)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };
    // from_str_radix takes a sign of its own
    if digits.starts_with(['+', '-']) {
        return None;
    }
    let signed = if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    };
    match i64::from_str_radix(&signed, radix) {
        Ok(value) => Some(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None
        }
    }
}

/// Parse the `-d` argument, a non-negative integer
pub fn parse_debug_level(level: &str) -> Result<u32, WorkflowErrors> {
    let value = parse_c_integer(level).ok_or_else(|| {
        WorkflowErrors::Arguments(format!("Debug level string is invalid: '{level}'"))
    })?;

    if value < 0 {
        return Err(WorkflowErrors::Arguments(
            "Debug level value cannot be negative".to_string()
        ));
    }
    Ok(u32::try_from(value).unwrap_or(u32::MAX))
}

/// Parse the `-v` argument, any real number
pub fn parse_substitute(value: &str) -> Result<f64, WorkflowErrors> {
    parse_real(value).ok_or_else(|| {
        WorkflowErrors::Arguments(format!(
            "NaN conversion value string is invalid: '{value}'"
        ))
    })
}

/// Map a debug level to a log level
pub const fn log_level(debug_level: u32) -> Level {
    match debug_level {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace
    }
}

/// Set up logging options
pub fn setup_logger(debug_level: u32) -> Result<(), WorkflowErrors> {
    let log_level = log_level(debug_level);

    simple_logger::init_with_level(log_level)
        .map_err(|err| WorkflowErrors::Logger(err.to_string()))?;

    info!("Initialized logger");
    info!("Log level :{}", log_level);

    Ok(())
}
