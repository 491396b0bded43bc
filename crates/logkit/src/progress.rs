//! Progress reporting over an iterator
//!
//! Every yielded item logs `Progress: i/total`. With the `progress` feature
//! and a terminal on stderr an `indicatif` bar is drawn instead.

use logkit_core::{Location, Severity};

use crate::handle::ContextualLogger;

pub struct Progress<I> {
    inner: I,
    log: ContextualLogger,
    location: Location,
    severity: Severity,
    total: usize,
    index: usize,
    every: usize,
    #[cfg(feature = "progress")]
    bar: Option<indicatif::ProgressBar>,
}

/// Wrap `iter` so each item reports progress through `log` at INFO.
#[track_caller]
pub fn track_progress<I>(iter: I, log: &ContextualLogger) -> Progress<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    let inner = iter.into_iter();
    let total = inner.len();
    Progress {
        inner,
        log: log.clone(),
        location: Location::caller(),
        severity: Severity::INFO,
        total,
        index: 0,
        every: 1,
        #[cfg(feature = "progress")]
        bar: terminal_bar(total),
    }
}

#[cfg(feature = "progress")]
fn terminal_bar(total: usize) -> Option<indicatif::ProgressBar> {
    use std::io::IsTerminal;
    std::io::stderr()
        .is_terminal()
        .then(|| indicatif::ProgressBar::new(total as u64))
}

impl<I> Progress<I> {
    /// Log only every `n`th item, plus the last one
    pub fn every(mut self, n: usize) -> Self {
        self.every = n.max(1);
        self
    }

    pub fn level(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Always log lines, even when a bar could be drawn
    #[allow(unused_mut)]
    pub fn without_bar(mut self) -> Self {
        #[cfg(feature = "progress")]
        {
            self.bar = None;
        }
        self
    }

    pub fn total(&self) -> usize {
        self.total
    }

    fn report(&self) {
        #[cfg(feature = "progress")]
        {
            if let Some(bar) = &self.bar {
                bar.set_position(self.index as u64);
                if self.index == self.total {
                    bar.finish();
                }
                return;
            }
        }

        if self.index % self.every == 0 || self.index == self.total {
            self.log.log_at(
                self.severity.clone(),
                self.location.clone(),
                format!("Progress: {}/{}", self.index, self.total),
            );
        }
    }
}

impl<I: Iterator> Iterator for Progress<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.index += 1;
        self.report();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Progress<I> {}
