/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The single line a run ends with
//!
//! By default this is the `[struct stat=..., key=value, ...]` form scripts
//! around the Montage tools parse, with `--json` it is a JSON object
//! carrying the same fields.
use fixnan_procs::remap::RemapCounts;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Final outcome of a run
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Ok(RemapCounts),
    Error {
        /// Codec status number, only for failures while reading or writing
        status: Option<i32>,
        msg:    String
    }
}

impl Status {
    pub fn error(msg: String) -> Status {
        Status::Error { status: None, msg }
    }

    pub fn fits_error(status: i32, msg: String) -> Status {
        Status::Error {
            status: Some(status),
            msg
        }
    }

    pub fn to_struct_line(&self) -> String {
        match self {
            Status::Ok(counts) => format!(
                "[struct stat=\"OK\", rangeCount={}, nanCount={}]",
                counts.range_count, counts.nan_count
            ),
            Status::Error {
                status: Some(status),
                msg
            } => format!("[struct stat=\"ERROR\", status={status}, msg=\"{msg}\"]"),
            Status::Error { status: None, msg } => {
                format!("[struct stat=\"ERROR\", msg=\"{msg}\"]")
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Render as JSON if asked to, falling back to the struct line
    pub fn render(&self, json: bool) -> String {
        if json {
            if let Ok(rendered) = self.to_json() {
                return rendered;
            }
        }
        self.to_struct_line()
    }
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        match self {
            Status::Ok(counts) => {
                let mut state = serializer.serialize_struct("Status", 3)?;

                state.serialize_field("stat", "OK")?;
                state.serialize_field("rangeCount", &counts.range_count)?;
                state.serialize_field("nanCount", &counts.nan_count)?;

                state.end()
            }
            Status::Error { status, msg } => {
                let fields = if status.is_some() { 3 } else { 2 };
                let mut state = serializer.serialize_struct("Status", fields)?;

                state.serialize_field("stat", "ERROR")?;
                match status {
                    Some(status) => state.serialize_field("status", status)?,
                    None => state.skip_field("status")?
                }
                state.serialize_field("msg", msg)?;

                state.end()
            }
        }
    }
}
