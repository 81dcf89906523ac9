//! Preference collection
//!
//! Asks the user, one tag at a time, whether they have/want it. Every tag
//! that is not confirmed with exactly `y` ends up in the exclusion set.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::DeciderResult;
use crate::models::{Catalog, ExclusionSet};

/// The only answer that keeps a tag
pub const YES: &str = "y";

/// Source of yes/no answers for tags.
///
/// Implementations can be interactive (console) or scripted (tests).
pub trait PreferencePrompt {
    /// Ask about a single tag; `true` means the tag is wanted.
    fn wants(&mut self, tag: &str) -> DeciderResult<bool>;
}

/// Console prompt reading one whitespace-delimited token per question.
///
/// Several answers typed on one line are consumed in order. Bytes that are
/// not UTF-8 are decoded lossily and simply never match `y`. Once input is
/// exhausted every further tag counts as not wanted.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Read the next token, or `None` at end of input
    fn next_token(&mut self) -> DeciderResult<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            let line = String::from_utf8_lossy(&line);
            self.pending
                .extend(line.split_ascii_whitespace().map(str::to_string));
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> PreferencePrompt for ConsolePrompt<R, W> {
    fn wants(&mut self, tag: &str) -> DeciderResult<bool> {
        write!(self.output, "Do you have/want {}? (y/n): ", tag)?;
        self.output.flush()?;

        let answer = self.next_token()?;
        Ok(answer.as_deref() == Some(YES))
    }
}

/// Build the exclusion set by asking about every distinct tag in sorted order
pub fn collect_exclusions<P>(catalog: &Catalog, prompt: &mut P) -> DeciderResult<ExclusionSet>
where
    P: PreferencePrompt + ?Sized,
{
    let tags = catalog.distinct_tags();
    let mut excluded = Vec::new();

    for tag in &tags {
        if !prompt.wants(tag)? {
            excluded.push(*tag);
        }
    }

    debug!(tags = tags.len(), excluded = ?excluded, "collected preferences");
    Ok(excluded.into_iter().collect())
}
