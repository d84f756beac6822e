//! Post assembly and persistence.
//!
//! [`ContentGenerator`] turns a [`Topic`](crate::topic::Topic) into prompts,
//! and a topic plus body text into a markdown file with YAML frontmatter:
//!
//! ```text
//! <output_dir>/<category>/<YYYY-MM-DD>-<slug>.md
//! ---
//! title: Docker Security Practices
//! date: 2024-01-01T10:00:00+05:30
//! draft: false
//! ...
//! ---
//!
//! <body>
//!
//! ---
//!
//! *This article was generated using AI ...*
//! ```
//!
//! Time comes from a [`Clock`] so dates and collision suffixes are testable.

mod filename;
mod frontmatter;
mod post;
mod prompt;


pub use filename::slugify;
pub use frontmatter::{PostFrontmatter, reading_time, word_count};

use crate::config::PostSettings;
use chrono::{DateTime, FixedOffset, Local, Utc};
use std::path::{Path, PathBuf};

/// Source of the current time for dates and filenames.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock, in a fixed offset or the local one.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    offset: Option<FixedOffset>,
}

impl SystemClock {
    pub fn new(offset: Option<FixedOffset>) -> Self {
        Self { offset }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        match self.offset {
            Some(offset) => Utc::now().with_timezone(&offset),
            None => Local::now().fixed_offset(),
        }
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Builds prompts and writes posts under an output root.
pub struct ContentGenerator {
    base_dir: PathBuf,
    author: String,
    clock: Box<dyn Clock>,
}

impl ContentGenerator {
    /// Generator writing under `base_dir`, dated by the local clock.
    pub fn new(base_dir: impl Into<PathBuf>, author: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            author: author.into(),
            clock: Box::new(SystemClock::default()),
        }
    }

    /// Generator for the configured post settings.
    pub fn from_settings(settings: &PostSettings, offset: Option<FixedOffset>) -> Self {
        Self::new(&settings.output_dir, &settings.author).with_clock(SystemClock::new(offset))
    }

    /// Replace the clock.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Output root; categories are subdirectories of it.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}
