//! Platform include overlap detection
//!
//! The WSL profile and the Windows profile can name the same files under
//! different spellings (`/mnt/c/Users/me` and `C:\Users\me`). Backing both
//! up stores the same data twice. This service compares the include sets of
//! different targets for one cadence and reports same-or-ancestor pairs.
//! It never fails; callers decide whether an overlap is fatal.

use std::collections::HashSet;

use crate::config::AppConfig;
use crate::domain::entities::RunPlan;

/// Appended after the overlap lines whenever at least one is reported.
pub const PATH_TRANSLATION_TIP: &str =
    "warning: path translation tip: use 'wslpath <path>' and 'wslpath -w <path>' to compare equivalents.";

/// One include entry of one target, with its comparison form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IncludeEntry {
    pub target: String,
    pub normalized: String,
    pub raw: String,
}

/// Two include entries from different targets that cover the same files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeOverlap {
    pub left: IncludeEntry,
    pub right: IncludeEntry,
}

impl IncludeOverlap {
    pub fn warning(&self) -> String {
        format!(
            "warning: platform include overlap detected: {}={} overlaps {}={}",
            self.left.target, self.left.raw, self.right.target, self.right.raw
        )
    }
}

/// All overlapping include pairs for the plan's cadence, in discovery order.
pub fn detect_include_overlaps(plan: &RunPlan, config: &AppConfig) -> Vec<IncludeOverlap> {
    if plan.targets.len() < 2 {
        return Vec::new();
    }

    let mut entries = Vec::new();
    for target in &plan.targets {
        let Some(profile) = config.profile(target) else {
            continue;
        };
        for raw in profile.include_paths(&plan.cadence) {
            let normalized = normalize_platform_path(raw);
            if normalized.is_empty() {
                continue;
            }
            entries.push(IncludeEntry {
                target: target.clone(),
                normalized,
                raw: raw.clone(),
            });
        }
    }

    let mut seen: HashSet<(&IncludeEntry, &IncludeEntry)> = HashSet::new();
    let mut overlaps = Vec::new();
    for (i, left) in entries.iter().enumerate() {
        for right in &entries[i + 1..] {
            if left.target == right.target {
                continue;
            }
            if !paths_overlap(&left.normalized, &right.normalized) {
                continue;
            }
            let key = if left <= right {
                (left, right)
            } else {
                (right, left)
            };
            if !seen.insert(key) {
                continue;
            }
            overlaps.push(IncludeOverlap {
                left: left.clone(),
                right: right.clone(),
            });
        }
    }
    overlaps
}

/// Human-readable warnings for [`detect_include_overlaps`], followed by a
/// translation tip when there is anything to report.
pub fn find_platform_include_overlap_warnings(plan: &RunPlan, config: &AppConfig) -> Vec<String> {
    let mut warnings: Vec<String> = detect_include_overlaps(plan, config)
        .iter()
        .map(IncludeOverlap::warning)
        .collect();
    if !warnings.is_empty() {
        warnings.push(PATH_TRANSLATION_TIP.to_string());
    }
    warnings
}

/// Comparison form of a WSL or Windows path.
///
/// Backslashes become `/`, `X:/` becomes `/mnt/x/`, everything is
/// lower-cased and lexically cleaned. Returns an empty string for blank
/// input or a path that cleans to `.`.
pub fn normalize_platform_path(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut slashed = trimmed.replace('\\', "/");
    if let Some(drive) = drive_letter(&slashed) {
        slashed = format!("/mnt/{}{}", drive.to_ascii_lowercase(), &slashed[2..]);
    }

    let cleaned = clean_slash_path(&slashed.to_lowercase());
    if cleaned == "." {
        String::new()
    } else {
        cleaned
    }
}

/// `C` for `C:/...`; `None` for anything else.
fn drive_letter(path: &str) -> Option<char> {
    let bytes = path.as_bytes();
    if bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'/'
    {
        Some(bytes[0] as char)
    } else {
        None
    }
}

/// Lexical cleanup of a `/`-separated path: repeated separators collapse,
/// `.` segments drop, `..` removes the previous segment. `..` never climbs
/// above the root of an absolute path. An empty result is `.`.
fn clean_slash_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last().copied() {
                Some(previous) if previous != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Whether two normalized paths cover any of the same files.
pub fn paths_overlap(left: &str, right: &str) -> bool {
    is_same_or_ancestor(left, right) || is_same_or_ancestor(right, left)
}

fn is_same_or_ancestor(ancestor: &str, path: &str) -> bool {
    if ancestor == path || ancestor == "/" {
        return true;
    }
    path.strip_prefix(ancestor)
        .is_some_and(|rest| rest.starts_with('/'))
}
