//! Property tests for platform path normalization.

use proptest::prelude::*;

use wsl_backup::domain::services::{normalize_platform_path, paths_overlap};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{1,8}").unwrap()
}

/// Relative, POSIX-absolute, or drive-letter paths with either separator.
fn platform_path() -> impl Strategy<Value = String> {
    (
        prop_oneof![
            Just(String::new()),
            Just("/".to_string()),
            proptest::string::string_regex("[A-Za-z]:[/\\\\]").unwrap(),
        ],
        proptest::collection::vec(segment(), 0..6),
        prop_oneof![Just("/"), Just("\\")],
    )
        .prop_map(|(prefix, segments, separator)| {
            format!("{}{}", prefix, segments.join(separator))
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: normalization never panics on arbitrary input.
    #[test]
    fn property_normalize_never_panics(raw in "(?s).{0,64}") {
        let _ = normalize_platform_path(&raw);
    }

    /// PROPERTY: normalizing twice changes nothing.
    #[test]
    fn property_normalize_is_idempotent(raw in platform_path()) {
        let once = normalize_platform_path(&raw);
        prop_assert_eq!(normalize_platform_path(&once), once);
    }

    /// PROPERTY: output never carries backslashes, upper case, or `.` segments.
    #[test]
    fn property_normalized_form_is_canonical(raw in platform_path()) {
        let normalized = normalize_platform_path(&raw);
        prop_assert!(!normalized.contains('\\'));
        prop_assert_eq!(normalized.to_lowercase(), normalized.clone());
        prop_assert!(!normalized.split('/').any(|s| s == "."));
        prop_assert!(normalized == "/" || !normalized.ends_with('/'));
    }

    /// PROPERTY: a drive path and its /mnt spelling normalize identically.
    #[test]
    fn property_drive_and_mount_spellings_agree(
        drive in "[a-zA-Z]",
        segments in proptest::collection::vec(segment(), 0..5),
    ) {
        let windows = format!("{}:\\{}", drive, segments.join("\\"));
        let wsl = format!("/mnt/{}/{}", drive.to_lowercase(), segments.join("/"));
        prop_assert_eq!(normalize_platform_path(&windows), normalize_platform_path(&wsl));
    }

    /// PROPERTY: overlap is symmetric and reflexive.
    #[test]
    fn property_overlap_symmetric(a in platform_path(), b in platform_path()) {
        let a = normalize_platform_path(&a);
        let b = normalize_platform_path(&b);
        prop_assert_eq!(paths_overlap(&a, &b), paths_overlap(&b, &a));
        prop_assert!(paths_overlap(&a, &a));
    }

    /// PROPERTY: a directory overlaps everything beneath it.
    #[test]
    fn property_parent_overlaps_child(
        parent in proptest::collection::vec(segment(), 1..4),
        child in segment(),
    ) {
        let parent_path = normalize_platform_path(&format!("/{}", parent.join("/")));
        prop_assume!(!parent_path.split('/').any(|s| s == ".."));
        let child_path = format!("{}/{}", parent_path, child.to_lowercase());
        prop_assume!(!child.starts_with('.'));
        prop_assert!(paths_overlap(&parent_path, &child_path));
    }
}
