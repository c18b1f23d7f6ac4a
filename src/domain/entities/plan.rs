//! Run, prune and restore plans

/// Which profiles a backup run acts on, and for which cadence.
///
/// Target order is significant: invocations and results follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub cadence: String,
    pub targets: Vec<String>,
}

/// A restore of the latest snapshot of one profile into a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestorePlan {
    pub target: String,
    pub restore_destination: String,
}

/// Which profiles a retention pass (`forget --prune`) acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrunePlan {
    pub targets: Vec<String>,
}
