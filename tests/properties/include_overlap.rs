//! Property tests for include overlap detection across profiles.

use std::collections::BTreeMap;
use std::path::PathBuf;

use proptest::prelude::*;

use wsl_backup::config::{AppConfig, CadencePaths, ProfileConfig};
use wsl_backup::domain::entities::RunPlan;
use wsl_backup::domain::services::{detect_include_overlaps, find_platform_include_overlap_warnings};

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9]{0,6}").unwrap()
}

fn config(wsl: &[String], windows: &[String]) -> AppConfig {
    let mut profiles = BTreeMap::new();
    for (target, includes) in [("wsl", wsl), ("windows", windows)] {
        profiles.insert(
            target.to_string(),
            ProfileConfig {
                include_by_cadence: CadencePaths::uniform(includes),
                repository: format!("/repo/{}", target),
                ..ProfileConfig::default()
            },
        );
    }
    AppConfig {
        path: PathBuf::from("/cfg/config.yaml"),
        exists: true,
        profiles,
        unknown_keys: Vec::new(),
    }
}

fn plan(targets: &[&str]) -> RunPlan {
    RunPlan {
        cadence: "daily".to_string(),
        targets: targets.iter().map(|t| t.to_string()).collect(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Linux-only trees never overlap drive-letter trees.
    #[test]
    fn property_home_and_drive_trees_never_overlap(
        wsl in proptest::collection::vec(name(), 0..5),
        windows in proptest::collection::vec(name(), 0..5),
    ) {
        let wsl: Vec<String> = wsl.iter().map(|n| format!("/home/{}", n)).collect();
        let windows: Vec<String> = windows.iter().map(|n| format!("C:\\Users\\{}", n)).collect();
        let config = config(&wsl, &windows);
        prop_assert!(find_platform_include_overlap_warnings(&plan(&["wsl", "windows"]), &config).is_empty());
    }

    /// PROPERTY: the same folder under both spellings is reported exactly once,
    /// with the translation tip last, whichever order the targets are planned in.
    #[test]
    fn property_shared_folder_reported_once(user in name(), reversed in any::<bool>()) {
        let config = config(
            &[format!("/mnt/c/Users/{}", user)],
            &[format!("C:\\Users\\{}", user)],
        );
        let targets = if reversed { ["windows", "wsl"] } else { ["wsl", "windows"] };
        let warnings = find_platform_include_overlap_warnings(&plan(&targets), &config);
        prop_assert_eq!(warnings.len(), 2);
        prop_assert!(warnings[0].starts_with("warning: platform include overlap detected: "));
        prop_assert!(warnings[1].starts_with("warning: path translation tip"));
    }

    /// PROPERTY: every reported pair spans two different targets.
    #[test]
    fn property_pairs_span_targets(
        wsl in proptest::collection::vec(name(), 1..4),
        windows in proptest::collection::vec(name(), 1..4),
    ) {
        let wsl: Vec<String> = wsl.iter().map(|n| format!("/mnt/d/{}", n)).collect();
        let windows: Vec<String> = windows.iter().map(|n| format!("D:\\{}", n)).collect();
        let config = config(&wsl, &windows);
        for overlap in detect_include_overlaps(&plan(&["wsl", "windows"]), &config) {
            prop_assert_ne!(&overlap.left.target, &overlap.right.target);
        }
    }
}
