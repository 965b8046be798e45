#![no_main]

//! Fuzz target for OCR text extraction.
//!
//! The extractor must be total: arbitrary bytes that decode as UTF-8 go
//! through every detector and the downstream evaluator without panicking.

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let profile = sahayak_extract::extract(text);

    // The extracted profile must also evaluate cleanly.
    let schemes = sahayak_catalog::builtin_schemes();
    let _ = sahayak_engine::evaluate(&profile, &schemes);
    let _ = sahayak_engine::evaluate_detailed(&profile, &schemes);
});
