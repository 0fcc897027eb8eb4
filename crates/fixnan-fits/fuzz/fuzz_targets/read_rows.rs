#![no_main]

use libfuzzer_sys::fuzz_target;

// CFITSIO only opens files, so every input goes through one on disk
fuzz_target!(|data: &[u8]| {
    let path = std::env::temp_dir().join(format!("fixnan-fuzz-{}.fits", std::process::id()));

    if std::fs::write(&path, data).is_err() {
        return;
    }
    if let Ok(mut source) = fixnan_fits::FitsSource::open(&path) {
        let _ = source.crpix();

        while source.read_row().is_ok() {}
    }
    let _ = std::fs::remove_file(&path);
});
