#![no_main]

//! Fuzz target for scheme record JSON parsing.

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    let _ = serde_json::from_str::<sahayak_types::scheme::RuleSet>(s);

    if let Ok(scheme) = serde_json::from_str::<sahayak_types::scheme::SchemeRecord>(s) {
        // A parsed scheme must evaluate cleanly against any profile.
        let profile = sahayak_types::profile::Profile::default();
        let catalog = vec![scheme];
        let _ = sahayak_engine::evaluate(&profile, &catalog);
    }
});
