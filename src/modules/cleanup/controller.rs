use chrono::{DateTime, Utc};
use std::io::Write;
use tracing::{info, warn};

use crate::error::CleanupError;
use crate::modules::cleanup::prompt::{decide, Confirm};
use crate::modules::cleanup::schema::{CancelReason, CleanupOptions, Decision, Outcome};
use crate::modules::history::crud::HistoryStore;
use crate::modules::history::schema::{EntryListing, SinceFilter};

const RULE_WIDTH: usize = 80;

/// Lists today's history, asks for confirmation and deletes.
///
/// The delete reuses the exact [`SinceFilter`] the listing was built from and
/// never re-reads the clock, so the window cannot widen while the operator is
/// deciding. Rows inserted into that window during the pause are still
/// deleted, which is why the reported count can exceed the listed one.
pub struct CleanupRunner<S, C, W> {
    store: S,
    confirm: C,
    out: W,
    options: CleanupOptions,
}

impl<S, C, W> CleanupRunner<S, C, W>
where
    S: HistoryStore,
    C: Confirm,
    W: Write,
{
    pub fn new(store: S, confirm: C, out: W, options: CleanupOptions) -> Self {
        Self {
            store,
            confirm,
            out,
            options,
        }
    }

    pub fn into_parts(self) -> (W, C) {
        (self.out, self.confirm)
    }

    pub async fn run(&mut self, boundary: DateTime<Utc>) -> Result<Outcome, CleanupError> {
        let filter = SinceFilter::new(boundary);

        writeln!(self.out, "📅 Finding entries from today (since {})...\n", boundary.to_rfc3339())?;

        let entries = self.store.find_since(&filter).await?;
        let matched = entries.len();
        info!(matched, "history query finished");

        if entries.is_empty() {
            writeln!(self.out, "✅ No entries found from today!")?;
            return Ok(Outcome::NothingToDo);
        }

        writeln!(self.out, "📊 Found {} entries from today:\n", matched)?;
        writeln!(self.out, "{}", "─".repeat(RULE_WIDTH))?;
        for (i, entry) in entries.iter().enumerate() {
            writeln!(self.out, "{}\n", EntryListing { index: i + 1, entry })?;
        }
        writeln!(self.out, "{}", "─".repeat(RULE_WIDTH))?;

        if self.options.dry_run {
            writeln!(self.out, "\n🔍 DRY RUN - Would delete {} entries", matched)?;
            writeln!(self.out, "   Run without --dry-run to actually delete")?;
            return Ok(Outcome::ReportOnly { matched });
        }

        writeln!(self.out, "\n⚠️  About to DELETE {} entries from today!", matched)?;
        write!(self.out, "Are you sure? Type 'yes' to confirm: ")?;
        self.out.flush()?;

        let reply = self.confirm.read_reply()?;
        match decide(self.options, &reply) {
            Decision::Cancel(reason) => {
                match reason {
                    CancelReason::Declined => writeln!(self.out, "\n❌ Deletion cancelled")?,
                    CancelReason::NotInteractive => writeln!(
                        self.out,
                        "\n❌ Not running interactively. Use --force to delete without confirmation"
                    )?,
                }
                Ok(Outcome::Cancelled { matched, reason })
            }
            Decision::Delete { bypassed } => {
                if bypassed {
                    warn!(matched, "no confirmation available, deleting because --force was given");
                    writeln!(self.out, "\n🔥 Force flag detected - proceeding with deletion")?;
                }

                let deleted = self.store.delete_since(&filter).await?;
                info!(matched, deleted, "history delete finished");
                writeln!(self.out, "\n✅ Deleted {} entries from today", deleted)?;

                Ok(Outcome::Completed { matched, deleted })
            }
        }
    }
}
