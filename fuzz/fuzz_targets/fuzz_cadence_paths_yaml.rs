#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Either shape, or an error; never a panic
        if let Ok(paths) = serde_yaml_ng::from_str::<wsl_backup::CadencePaths>(content) {
            for cadence in wsl_backup::Cadence::ALL {
                let _ = paths.get(cadence);
            }
            let _ = paths.for_cadence(content);
        }
    }
});
