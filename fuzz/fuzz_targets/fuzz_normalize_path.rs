#![no_main]

use libfuzzer_sys::fuzz_target;
use wsl_backup::domain::services::{normalize_platform_path, paths_overlap};

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let normalized = normalize_platform_path(raw);
        assert!(!normalized.contains('\\'));
        assert!(paths_overlap(&normalized, &normalized));
    }
});
