//! Property tests for per-cadence path lists.

use proptest::prelude::*;

use wsl_backup::config::CadencePaths;
use wsl_backup::Cadence;

fn paths() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        proptest::string::string_regex("/[a-z]{1,6}").unwrap(),
        0..5,
    )
}

fn cadence_paths() -> impl Strategy<Value = CadencePaths> {
    (paths(), paths(), paths()).prop_map(|(daily, weekly, monthly)| CadencePaths {
        daily,
        weekly,
        monthly,
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: concatenation keeps every entry of both sides, in order.
    #[test]
    fn property_concat_preserves_order(head in cadence_paths(), tail in cadence_paths()) {
        let merged = head.concat(&tail);
        for cadence in Cadence::ALL {
            let mut expected = head.get(cadence).to_vec();
            expected.extend_from_slice(tail.get(cadence));
            prop_assert_eq!(merged.get(cadence), &expected[..]);
        }
    }

    /// PROPERTY: anything that is not a cadence name selects nothing.
    #[test]
    fn property_unknown_cadence_selects_nothing(
        lists in cadence_paths(),
        key in "[A-Za-z]{0,10}",
    ) {
        prop_assume!(!["daily", "weekly", "monthly"].contains(&key.as_str()));
        prop_assert!(lists.for_cadence(&key).is_empty());
    }

    /// PROPERTY: a flat YAML list applies unchanged to every cadence.
    #[test]
    fn property_flat_list_is_uniform(values in paths()) {
        let yaml = serde_yaml_ng::to_string(&values).unwrap();
        let parsed: CadencePaths = serde_yaml_ng::from_str(&yaml).unwrap();
        for cadence in Cadence::ALL {
            prop_assert_eq!(parsed.get(cadence), &values[..]);
        }
    }
}
