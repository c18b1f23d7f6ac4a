//! Domain Services
//!
//! Pure planning logic. Nothing here touches the file system or spawns
//! processes.

mod invocation_builder;
mod overlap;
mod planner;

pub use invocation_builder::{
    build_backup_invocations, build_prune_invocations, build_restore_invocation,
};
pub use overlap::{
    detect_include_overlaps, find_platform_include_overlap_warnings, normalize_platform_path,
    paths_overlap, IncludeEntry, IncludeOverlap, PATH_TRANSLATION_TIP,
};
pub use planner::{build_prune_plan, build_restore_plan, build_run_plan, ensure_supported_session};
