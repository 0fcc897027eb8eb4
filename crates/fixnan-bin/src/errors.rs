/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use clap::error::ErrorKind;
use fixnan_fits::{FitsDecodeErrors, FitsEncodeErrors};
use fixnan_procs::range::RangeParseError;

use crate::status::Status;

pub static USAGE: &str = "Usage: fixnan [-d level][-v NaN-value] in.fits out.fits [minblank maxblank] \
(output file name '-' means no file; min/max ranges can be repeated and can be the words 'min' and 'max')";

/// Status number for an output file that could not be created
const FILE_NOT_CREATED: i32 = 105;

/// All the ways a run can fail
pub enum WorkflowErrors {
    /// Bad command line, reported before any file is touched
    Arguments(String),
    /// The source image is missing or its header is unusable
    InvalidSource(String),
    /// The destination image could not be (re)created
    CreateOutput(String, std::io::Error),
    Logger(String),
    DecodeErrors(FitsDecodeErrors),
    EncodeErrors(FitsEncodeErrors)
}

impl WorkflowErrors {
    /// The status this error is reported with
    pub fn status(&self) -> Status {
        match self {
            Self::Arguments(msg) | Self::Logger(msg) => Status::error(msg.clone()),
            Self::InvalidSource(path) => {
                Status::error(format!("Image file {path} missing or invalid FITS"))
            }
            Self::CreateOutput(..) => Status::fits_error(FILE_NOT_CREATED, self.to_string()),
            Self::DecodeErrors(err) => Status::fits_error(err.status_code(), err.to_string()),
            Self::EncodeErrors(err) => Status::fits_error(err.status_code(), err.to_string())
        }
    }

    /// Whether the status line goes to stderr instead of stdout
    pub const fn reported_on_stderr(&self) -> bool {
        matches!(self, Self::InvalidSource(_))
    }
}

impl Debug for WorkflowErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arguments(msg) => write!(f, "{msg}"),
            Self::InvalidSource(path) => write!(f, "Image file {path} missing or invalid FITS"),
            Self::CreateOutput(path, err) => {
                write!(f, "Could not create output file {path}: {err}")
            }
            Self::Logger(msg) => write!(f, "Could not set up logging: {msg}"),
            Self::DecodeErrors(err) => write!(f, "{err:?}"),
            Self::EncodeErrors(err) => write!(f, "{err:?}")
        }
    }
}

impl Display for WorkflowErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for WorkflowErrors {}

impl From<FitsDecodeErrors> for WorkflowErrors {
    fn from(value: FitsDecodeErrors) -> Self {
        WorkflowErrors::DecodeErrors(value)
    }
}

impl From<FitsEncodeErrors> for WorkflowErrors {
    fn from(value: FitsEncodeErrors) -> Self {
        WorkflowErrors::EncodeErrors(value)
    }
}

impl From<RangeParseError> for WorkflowErrors {
    fn from(value: RangeParseError) -> Self {
        WorkflowErrors::Arguments(value.to_string())
    }
}

impl From<clap::Error> for WorkflowErrors {
    fn from(value: clap::Error) -> Self {
        if value.kind() == ErrorKind::MissingRequiredArgument {
            return WorkflowErrors::Arguments(USAGE.to_string());
        }
        // first line only, without clap's `error: ` prefix
        let rendered = value.to_string();
        let first = rendered.lines().next().unwrap_or_default();
        let msg = first.strip_prefix("error: ").unwrap_or(first);

        WorkflowErrors::Arguments(msg.to_string())
    }
}
