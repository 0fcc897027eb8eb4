/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{read, write};
use std::path::Path;

use fixnan_bin::cmd_parsers::global_options::CmdOptions;
use fixnan_bin::cmd_parsers::ranges::parse_ranges;
use fixnan_bin::errors::WorkflowErrors;
use fixnan_bin::workflow::run;
use fixnan_procs::remap::RemapCounts;

use crate::{f32_file, f64_file, hash, read_samples, temp_path, TestEntry};

fn options_for(entry: &TestEntry, input: &Path, output: Option<&Path>) -> CmdOptions {
    let mut options = CmdOptions::new(
        input.to_string_lossy().to_string(),
        output.map(|x| x.to_string_lossy().to_string())
    );
    options.substitute = entry
        .substitute
        .as_ref()
        .map(|x| x.parse::<f64>().unwrap());

    let tokens: Vec<&str> = entry
        .ranges
        .iter()
        .flat_map(|pair| [pair[0].as_str(), pair[1].as_str()])
        .collect();
    options.rules = parse_ranges(&tokens).unwrap();

    options
}

fn same_sample(found: f64, expected: Option<f64>) -> bool {
    match expected {
        Some(value) => found == value,
        None => found.is_nan()
    }
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_remap_cases() {
    let file = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/remap.json");

    let json_file = read(file).unwrap();

    let entries: Vec<TestEntry> = serde_json::from_slice(&json_file).unwrap();

    let mut error = false;

    for entry in &entries {
        let samples: Vec<f64> = entry
            .input
            .iter()
            .map(|x| x.unwrap_or(f64::NAN))
            .collect();

        let in_path = temp_path(&format!("{}-in.fits", entry.name));
        let out_path = temp_path(&format!("{}-out.fits", entry.name));

        write(&in_path, f64_file(entry.width, &samples)).unwrap();

        let options = options_for(entry, &in_path, Some(&out_path));
        let counts = run(&options).unwrap();

        let output = read_samples(&out_path);

        let expected_counts = RemapCounts {
            range_count: entry.range_count,
            nan_count:   entry.nan_count
        };
        let samples_match = output.len() == entry.expected.len()
            && output
                .iter()
                .zip(&entry.expected)
                .all(|(found, expected)| same_sample(*found, *expected));

        if counts != expected_counts || !samples_match {
            error = true;
            eprintln!(
                "Mismatch for case {}\nExpected {:?} {:?}\nFound {:?} {:?}\nConfig:{:#?}\n",
                entry.name, entry.expected, expected_counts, output, counts, entry
            );
        }
        let _ = std::fs::remove_file(&in_path);
        let _ = std::fs::remove_file(&out_path);
    }
    if error {
        panic!("Some remap cases did not match, see the log above");
    }
}

#[test]
fn second_pass_is_bit_identical() {
    let samples: Vec<f32> = (0..64 * 48)
        .map(|x| if x % 7 == 0 { f32::NAN } else { x as f32 * 0.25 - 100.0 })
        .collect();

    let in_path = temp_path("idempotent-in.fits");
    let first = temp_path("idempotent-first.fits");
    let second = temp_path("idempotent-second.fits");

    write(&in_path, f32_file(64, &samples)).unwrap();

    let mut options = CmdOptions::new(
        in_path.to_string_lossy().to_string(),
        Some(first.to_string_lossy().to_string())
    );
    options.substitute = Some(0.0);

    let counts = run(&options).unwrap();
    assert_eq!(counts.nan_count, (0..64 * 48).step_by(7).count() as u64);

    options.input = first.to_string_lossy().to_string();
    options.output = Some(second.to_string_lossy().to_string());

    let counts = run(&options).unwrap();
    assert_eq!(counts, RemapCounts::default());

    let first_bytes = read(&first).unwrap();
    let second_bytes = read(&second).unwrap();

    assert_eq!(hash(&first_bytes), hash(&second_bytes));

    for path in [in_path, first, second] {
        let _ = std::fs::remove_file(path);
    }
}

#[test]
fn no_output_reports_the_same_counts() {
    let samples = [1.0, f64::NAN, 3.0, 40.0, -5.0, f64::NAN];

    let in_path = temp_path("count-only-in.fits");
    let out_path = temp_path("count-only-out.fits");

    write(&in_path, f64_file(3, &samples)).unwrap();

    let mut with_file = CmdOptions::new(
        in_path.to_string_lossy().to_string(),
        Some(out_path.to_string_lossy().to_string())
    );
    with_file.substitute = Some(9.0);
    with_file.rules = parse_ranges(&["min", "0", "30", "max"]).unwrap();

    let mut count_only = with_file.clone();
    count_only.output = None;

    let expected = run(&with_file).unwrap();
    std::fs::remove_file(&out_path).unwrap();

    let found = run(&count_only).unwrap();

    assert_eq!(expected, found);
    assert_eq!(found.range_count, 2);
    assert_eq!(found.nan_count, 4);
    assert!(!out_path.exists());

    let _ = std::fs::remove_file(&in_path);
}

#[test]
fn existing_output_is_replaced() {
    let in_path = temp_path("replace-in.fits");
    let out_path = temp_path("replace-out.fits");

    write(&in_path, f64_file(2, &[1.0, 2.0])).unwrap();
    write(&out_path, vec![b'x'; 10_000]).unwrap();

    let options = CmdOptions::new(
        in_path.to_string_lossy().to_string(),
        Some(out_path.to_string_lossy().to_string())
    );
    run(&options).unwrap();

    let output = read(&out_path).unwrap();
    assert_eq!(output.len() % 2880, 0);
    assert!(!output.starts_with(b"xxxx"));
    assert_eq!(read_samples(&out_path), [1.0, 2.0]);

    let _ = std::fs::remove_file(&in_path);
    let _ = std::fs::remove_file(&out_path);
}

#[test]
fn missing_source_is_an_invalid_source() {
    let options = CmdOptions::new(
        temp_path("does-not-exist.fits").to_string_lossy().to_string(),
        None
    );

    let err = run(&options).unwrap_err();

    assert!(matches!(err, WorkflowErrors::InvalidSource(_)));
    assert!(err.reported_on_stderr());
}

#[test]
fn garbage_source_is_an_invalid_source() {
    let in_path = temp_path("garbage.fits");
    write(&in_path, vec![0_u8; 5000]).unwrap();

    let options = CmdOptions::new(in_path.to_string_lossy().to_string(), None);
    let err = run(&options).unwrap_err();

    assert!(matches!(err, WorkflowErrors::InvalidSource(_)));

    let _ = std::fs::remove_file(&in_path);
}
