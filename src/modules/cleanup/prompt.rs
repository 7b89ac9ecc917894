use std::io::{self, BufRead};

use crate::modules::cleanup::schema::{CancelReason, CleanupOptions, Decision};

pub const CONFIRM_WORD: &str = "yes";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Answer(String),
    /// Nothing to read from, e.g. stdin closed or redirected from /dev/null.
    Unavailable,
}

/// Source of the operator's answer to the confirmation question.
pub trait Confirm {
    /// `Err` means input was there but could not be read; the run must stop
    /// rather than fall through to `--force`.
    fn read_reply(&mut self) -> io::Result<Reply>;
}

/// Reads one line from any buffered reader. Only end of input means no answer
/// is available.
pub struct LineConfirm<R> {
    reader: R,
}

impl<R: BufRead> LineConfirm<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Confirm for LineConfirm<R> {
    fn read_reply(&mut self) -> io::Result<Reply> {
        let mut line = String::new();
        match self.reader.read_line(&mut line)? {
            0 => Ok(Reply::Unavailable),
            _ => Ok(Reply::Answer(strip_line_ending(&line).to_string())),
        }
    }
}

pub type StdinConfirm = LineConfirm<io::StdinLock<'static>>;

pub fn stdin_confirm() -> StdinConfirm {
    LineConfirm::new(io::stdin().lock())
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

/// Only a literal `yes` (any case) confirms. `force` matters only when no
/// answer could be read at all.
pub fn decide(options: CleanupOptions, reply: &Reply) -> Decision {
    match reply {
        Reply::Answer(answer) if answer.eq_ignore_ascii_case(CONFIRM_WORD) => Decision::Delete { bypassed: false },
        Reply::Answer(_) => Decision::Cancel(CancelReason::Declined),
        Reply::Unavailable if options.force => Decision::Delete { bypassed: true },
        Reply::Unavailable => Decision::Cancel(CancelReason::NotInteractive),
    }
}
