/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{read, write};

use fitsio::FitsFile;
use fixnan_bin::cmd_parsers::global_options::CmdOptions;
use fixnan_bin::workflow::run;
use fixnan_core::bitpix::BitPix;
use fixnan_core::options::DecoderOptions;
use fixnan_fits::{FitsDecodeErrors, FitsSource};

use crate::{card, f64_file, fits_file, fits_file_with_axes, read_samples, temp_path};

fn i16_bytes(stored: &[i16]) -> Vec<u8> {
    stored.iter().flat_map(|x| x.to_be_bytes()).collect()
}

#[test]
fn scaled_integers_with_blank() {
    let extra = [
        card("BZERO", "32768"),
        card("BSCALE", "0.5"),
        card("BLANK", "-32768")
    ];
    let path = temp_path("scaled.fits");
    write(&path, fits_file(16, 2, 2, &extra, &i16_bytes(&[-32768, -32767, 0, 32767]))).unwrap();

    let samples = read_samples(&path);

    // BLANK samples are scaled like any other
    assert_eq!(samples[0], 32768.0 - 0.5 * 32768.0);
    assert_eq!(samples[1], 32768.0 - 0.5 * 32767.0);
    assert_eq!(samples[2], 32768.0);
    assert_eq!(samples[3], 32768.0 + 0.5 * 32767.0);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn blank_samples_are_not_replaced() {
    let in_path = temp_path("blank-in.fits");
    let out_path = temp_path("blank-out.fits");

    write(&in_path, fits_file(16, 2, 1, &[card("BLANK", "7")], &i16_bytes(&[7, 3]))).unwrap();

    let mut options = CmdOptions::new(
        in_path.to_string_lossy().to_string(),
        Some(out_path.to_string_lossy().to_string())
    );
    options.substitute = Some(0.0);

    let counts = run(&options).unwrap();

    assert_eq!(counts.nan_count, 0);
    assert_eq!(counts.range_count, 0);
    assert_eq!(read_samples(&out_path), [7.0, 3.0]);

    let _ = std::fs::remove_file(&in_path);
    let _ = std::fs::remove_file(&out_path);
}

#[test]
fn unsigned_bytes_and_wide_integers() {
    let path = temp_path("bytes.fits");

    write(&path, fits_file(8, 3, 1, &[], &[0, 128, 255])).unwrap();
    assert_eq!(read_samples(&path), [0.0, 128.0, 255.0]);
    assert_eq!(FitsSource::open(&path).unwrap().bitpix(), BitPix::U8);

    let data: Vec<u8> = [i64::from(i32::MIN) * 4, 5_i64]
        .iter()
        .flat_map(|x| x.to_be_bytes())
        .collect();
    write(&path, fits_file(64, 1, 2, &[], &data)).unwrap();
    assert_eq!(read_samples(&path), [f64::from(i32::MIN) * 4.0, 5.0]);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn output_header_keeps_cards_and_drops_scaling() {
    let stored: [i32; 2] = [10, -1];
    let data: Vec<u8> = stored.iter().flat_map(|x| x.to_be_bytes()).collect();

    let extra = [
        card("CRPIX1", "1.5"),
        card("CRPIX2", "-3.0"),
        card("BZERO", "100"),
        card("BLANK", "-1"),
        "COMMENT made for a test".to_string()
    ];
    let in_path = temp_path("header-in.fits");
    let out_path = temp_path("header-out.fits");

    write(&in_path, fits_file(32, 2, 1, &extra, &data)).unwrap();

    let options = CmdOptions::new(
        in_path.to_string_lossy().to_string(),
        Some(out_path.to_string_lossy().to_string())
    );
    let counts = run(&options).unwrap();
    assert_eq!(counts.nan_count, 0);

    let mut fits = FitsFile::open(&out_path).unwrap();
    let hdu = fits.primary_hdu().unwrap();

    assert_eq!(hdu.read_key::<i64>(&mut fits, "BITPIX").unwrap(), -64);
    assert_eq!(hdu.read_key::<i64>(&mut fits, "NAXIS").unwrap(), 2);
    assert!(hdu.read_key::<f64>(&mut fits, "BZERO").is_err());
    assert!(hdu.read_key::<i64>(&mut fits, "BLANK").is_err());
    drop(fits);

    let mut source = FitsSource::open(&out_path).unwrap();
    assert_eq!(source.crpix(), (Some(1.5), Some(-3.0)));
    assert_eq!(source.read_row().unwrap(), [110.0, 99.0]);

    let header = String::from_utf8_lossy(&read(&out_path).unwrap()[..2880]).to_string();
    assert!(header.contains("COMMENT made for a test"));
    assert_eq!(header.matches("BITPIX").count(), 1);

    let _ = std::fs::remove_file(&in_path);
    let _ = std::fs::remove_file(&out_path);
}

#[test]
fn degenerate_third_axis_is_accepted() {
    let path = temp_path("degenerate.fits");
    write(&path, fits_file_with_axes(-64, &[2, 1, 1], &[], &[0; 16])).unwrap();

    let mut source = FitsSource::open(&path).unwrap();

    assert_eq!(source.dimensions(), (2, 1));
    assert_eq!(source.read_row().unwrap(), [0.0, 0.0]);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn real_cubes_are_rejected() {
    let path = temp_path("cube.fits");
    write(&path, fits_file_with_axes(-64, &[1, 1, 2], &[], &[0; 16])).unwrap();

    let err = FitsSource::open(&path).err().unwrap();

    assert!(matches!(err, FitsDecodeErrors::UnsupportedDimensions(_)));
    assert_eq!(err.status_code(), 212);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn decoder_limits_are_enforced() {
    let path = temp_path("wide.fits");
    write(&path, fits_file(8, 100, 1, &[], &[0; 100])).unwrap();

    let options = DecoderOptions::default().set_max_width(99);
    let err = FitsSource::open_with_options(&path, options).err().unwrap();

    assert!(matches!(err, FitsDecodeErrors::TooLargeDimensions(..)));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn remap_streams_many_rows() {
    let width = 33;
    let height = 257;
    let samples: Vec<f64> = (0..width * height).map(|x| x as f64).collect();

    let in_path = temp_path("many-rows-in.fits");
    let out_path = temp_path("many-rows-out.fits");

    write(&in_path, f64_file(width, &samples)).unwrap();

    let options = CmdOptions::new(
        in_path.to_string_lossy().to_string(),
        Some(out_path.to_string_lossy().to_string())
    );
    let counts = run(&options).unwrap();

    assert_eq!(counts.nan_count, 0);
    assert_eq!(read_samples(&out_path), samples);

    let _ = std::fs::remove_file(&in_path);
    let _ = std::fs::remove_file(&out_path);
}
