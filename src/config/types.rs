//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::value_objects::{Cadence, NATIVE_TARGET, SANDBOX_TARGET};

/// Path lists for every cadence.
///
/// All three lists are always present. An empty list is a valid value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CadencePaths {
    pub daily: Vec<String>,
    pub weekly: Vec<String>,
    pub monthly: Vec<String>,
}

impl CadencePaths {
    /// The same list for every cadence.
    pub fn uniform(values: &[String]) -> Self {
        Self {
            daily: values.to_vec(),
            weekly: values.to_vec(),
            monthly: values.to_vec(),
        }
    }

    /// List configured for `cadence`; unknown cadences select nothing.
    pub fn for_cadence(&self, cadence: &str) -> &[String] {
        match cadence.parse::<Cadence>() {
            Ok(cadence) => self.get(cadence),
            Err(_) => &[],
        }
    }

    pub fn get(&self, cadence: Cadence) -> &[String] {
        match cadence {
            Cadence::Daily => &self.daily,
            Cadence::Weekly => &self.weekly,
            Cadence::Monthly => &self.monthly,
        }
    }

    fn get_mut(&mut self, cadence: Cadence) -> &mut Vec<String> {
        match cadence {
            Cadence::Daily => &mut self.daily,
            Cadence::Weekly => &mut self.weekly,
            Cadence::Monthly => &mut self.monthly,
        }
    }

    /// Set the list for one cadence.
    pub fn set(&mut self, cadence: Cadence, values: Vec<String>) {
        *self.get_mut(cadence) = values;
    }

    /// `self` followed by `tail`, per cadence. Nothing is dropped or reordered.
    pub fn concat(&self, tail: &CadencePaths) -> CadencePaths {
        let mut merged = self.clone();
        for cadence in Cadence::ALL {
            merged.get_mut(cadence).extend_from_slice(tail.get(cadence));
        }
        merged
    }
}

/// Cadence path lists come in two shapes:
///
///   include: ["/home/me"]
///
/// or
///
///   include:
///     daily: ["/home/me/work"]
///     monthly: ["/home/me"]
///
/// A null value (every entry commented out) is the same as leaving the
/// field unset.
#[derive(Debug, Clone, Deserialize)]
#[serde(
    untagged,
    expecting = "invalid cadence path format: expected a list or a daily/weekly/monthly mapping"
)]
enum CadencePathsDe {
    Unset,
    Flat(Vec<PathEntry>),
    ByCadence(CadenceMap),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct CadenceMap {
    #[serde(default)]
    daily: Option<Vec<PathEntry>>,
    #[serde(default)]
    weekly: Option<Vec<PathEntry>>,
    #[serde(default)]
    monthly: Option<Vec<PathEntry>>,
}

/// One list item. Plain YAML scalars are taken as their text, so
/// `- 2024` is the path `2024`.
#[derive(Debug, Clone)]
struct PathEntry(String);

impl<'de> Deserialize<'de> for PathEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl serde::de::Visitor<'_> for ScalarVisitor {
            type Value = PathEntry;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a path string")
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<PathEntry, E> {
                Ok(PathEntry(value.to_string()))
            }

            fn visit_string<E: serde::de::Error>(self, value: String) -> Result<PathEntry, E> {
                Ok(PathEntry(value))
            }

            fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<PathEntry, E> {
                Ok(PathEntry(value.to_string()))
            }

            fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<PathEntry, E> {
                Ok(PathEntry(value.to_string()))
            }

            fn visit_f64<E: serde::de::Error>(self, value: f64) -> Result<PathEntry, E> {
                Ok(PathEntry(value.to_string()))
            }

            fn visit_bool<E: serde::de::Error>(self, value: bool) -> Result<PathEntry, E> {
                Ok(PathEntry(value.to_string()))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

fn into_strings(entries: Option<Vec<PathEntry>>) -> Vec<String> {
    entries
        .unwrap_or_default()
        .into_iter()
        .map(|PathEntry(path)| path)
        .collect()
}

impl<'de> Deserialize<'de> for CadencePaths {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match CadencePathsDe::deserialize(deserializer)? {
            CadencePathsDe::Unset => Ok(Self::default()),
            CadencePathsDe::Flat(values) => Ok(Self::uniform(&into_strings(Some(values)))),
            CadencePathsDe::ByCadence(map) => Ok(Self {
                daily: into_strings(map.daily),
                weekly: into_strings(map.weekly),
                monthly: into_strings(map.monthly),
            }),
        }
    }
}

/// Rule-list file references per cadence. Unset entries fall back to the
/// conventional `rules/<profile>.<direction>.<cadence>.txt` name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CadencePathFiles {
    #[serde(default)]
    pub daily: Option<String>,
    #[serde(default)]
    pub weekly: Option<String>,
    #[serde(default)]
    pub monthly: Option<String>,
}

impl CadencePathFiles {
    pub fn get(&self, cadence: Cadence) -> Option<&str> {
        match cadence {
            Cadence::Daily => self.daily.as_deref(),
            Cadence::Weekly => self.weekly.as_deref(),
            Cadence::Monthly => self.monthly.as_deref(),
        }
    }

    /// File reference for `cadence`, defaulting blank or missing entries.
    pub fn resolve(&self, profile: &str, direction: RuleDirection, cadence: Cadence) -> PathBuf {
        match self.get(cadence).map(str::trim) {
            Some(explicit) if !explicit.is_empty() => PathBuf::from(explicit),
            _ => default_rule_file(profile, direction, cadence),
        }
    }
}

/// Which side of the rules a list feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleDirection {
    Include,
    Exclude,
}

impl RuleDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleDirection::Include => "include",
            RuleDirection::Exclude => "exclude",
        }
    }
}

/// `rules/<profile>.<direction>.<cadence>.txt`, relative to the config dir.
pub fn default_rule_file(profile: &str, direction: RuleDirection, cadence: Cadence) -> PathBuf {
    Path::new(super::loader::RULES_DIR_NAME).join(format!(
        "{}.{}.{}.txt",
        profile,
        direction.as_str(),
        cadence.as_str()
    ))
}

/// How many snapshots `forget --prune` keeps per cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    pub keep_daily: u32,
    pub keep_weekly: u32,
    pub keep_monthly: u32,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            keep_daily: 30,
            keep_weekly: 12,
            keep_monthly: 12,
        }
    }
}

/// Resolved configuration for one platform profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileConfig {
    pub include_by_cadence: CadencePaths,
    pub exclude_by_cadence: CadencePaths,
    pub use_fs_snapshot: bool,
    pub repository: String,
    pub retention: RetentionPolicy,
}

impl ProfileConfig {
    pub fn include_paths(&self, cadence: &str) -> &[String] {
        self.include_by_cadence.for_cadence(cadence)
    }

    pub fn exclude_paths(&self, cadence: &str) -> &[String] {
        self.exclude_by_cadence.for_cadence(cadence)
    }
}

/// Configuration for one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub path: PathBuf,
    /// False when no file was found and built-in defaults are in effect
    pub exists: bool,
    pub profiles: BTreeMap<String, ProfileConfig>,
    /// Dotted paths of keys the loader did not recognise
    pub unknown_keys: Vec<String>,
}

impl AppConfig {
    /// Built-in defaults. These are placeholders, not a usable setup.
    pub fn defaults(path: PathBuf) -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert(
            SANDBOX_TARGET.to_string(),
            ProfileConfig {
                include_by_cadence: CadencePaths::uniform(&["$HOME".to_string()]),
                exclude_by_cadence: CadencePaths::default(),
                use_fs_snapshot: false,
                repository: DEFAULT_REPOSITORY_HINT.to_string(),
                retention: RetentionPolicy::default(),
            },
        );
        profiles.insert(
            NATIVE_TARGET.to_string(),
            ProfileConfig {
                include_by_cadence: CadencePaths::uniform(&["C:\\Users\\<user>".to_string()]),
                exclude_by_cadence: CadencePaths::default(),
                use_fs_snapshot: true,
                repository: DEFAULT_REPOSITORY_HINT.to_string(),
                retention: RetentionPolicy::default(),
            },
        );

        Self {
            path,
            exists: false,
            profiles,
            unknown_keys: Vec::new(),
        }
    }

    pub fn profile(&self, target: &str) -> Option<&ProfileConfig> {
        self.profiles.get(target)
    }
}

/// Repository placeholder used by the built-in defaults
pub const DEFAULT_REPOSITORY_HINT: &str = "configure per-environment";

/// On-disk profile schema
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct FileProfileConfig {
    #[serde(default)]
    pub repository: String,
    #[serde(default)]
    pub include: CadencePaths,
    #[serde(default)]
    pub exclude: CadencePaths,
    #[serde(default)]
    pub include_files: CadencePathFiles,
    #[serde(default)]
    pub exclude_files: CadencePathFiles,
    #[serde(default)]
    pub use_fs_snapshot: bool,
    #[serde(default)]
    pub keep_daily: Option<u32>,
    #[serde(default)]
    pub keep_weekly: Option<u32>,
    #[serde(default)]
    pub keep_monthly: Option<u32>,
}

impl FileProfileConfig {
    /// Retention counts, with unset entries taken from the default policy.
    pub fn retention(&self) -> RetentionPolicy {
        let defaults = RetentionPolicy::default();
        RetentionPolicy {
            keep_daily: self.keep_daily.unwrap_or(defaults.keep_daily),
            keep_weekly: self.keep_weekly.unwrap_or(defaults.keep_weekly),
            keep_monthly: self.keep_monthly.unwrap_or(defaults.keep_monthly),
        }
    }
}

/// On-disk document schema
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct FileAppConfig {
    #[serde(default)]
    pub profiles: BTreeMap<String, FileProfileConfig>,
}
