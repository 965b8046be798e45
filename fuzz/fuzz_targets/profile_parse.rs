#![no_main]

//! Fuzz target for profile JSON parsing.

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    // Parsing must never panic, and any parsed profile must re-serialize and
    // re-parse cleanly.
    if let Ok(profile) = serde_json::from_str::<sahayak_types::profile::Profile>(s) {
        let json = serde_json::to_string(&profile).expect("serialize parsed profile");
        let _ = serde_json::from_str::<sahayak_types::profile::Profile>(&json);
    }
});
