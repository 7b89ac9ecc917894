use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupOptions {
    pub dry_run: bool,
    pub force: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// The operator answered something other than `yes`.
    Declined,
    /// No answer could be read and `--force` was not given.
    NotInteractive,
}

/// What to do once entries have been listed and a reply (if any) is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Delete { bypassed: bool },
    Cancel(CancelReason),
}

/// How a run ended. All of these are successful exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NothingToDo,
    ReportOnly { matched: usize },
    Cancelled { matched: usize, reason: CancelReason },
    Completed { matched: usize, deleted: u64 },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NothingToDo => write!(f, "nothing to delete"),
            Outcome::ReportOnly { matched } => write!(f, "dry run, {} matched", matched),
            Outcome::Cancelled { matched, reason } => {
                write!(f, "cancelled ({:?}), {} matched", reason, matched)
            }
            Outcome::Completed { matched, deleted } => {
                write!(f, "deleted {} of {} listed", deleted, matched)
            }
        }
    }
}
