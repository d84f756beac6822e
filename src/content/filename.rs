use super::ContentGenerator;
use chrono::{DateTime, FixedOffset};
use regex::Regex;
use std::sync::LazyLock;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("Invalid slug filter regex"));
static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s-]+").expect("Invalid slug separator regex"));

/// URL-safe slug of a title.
///
/// Lower-cases, drops everything outside `[a-z0-9]`, whitespace and `-`,
/// then collapses whitespace/hyphen runs into one hyphen. The result only
/// contains `[a-z0-9-]`, never starts or ends with `-`, and falls back to
/// `untitled` when nothing is left.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let cleaned = DISALLOWED.replace_all(&lowered, "");
    let slug = SEPARATOR_RUNS.replace_all(&cleaned, "-");
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug.to_string()
    }
}

impl ContentGenerator {
    /// `<YYYY-MM-DD>-<slug>.md` for today's date.
    pub fn generate_filename(&self, title: &str) -> String {
        format!("{}.md", file_stem(title, self.clock.now()))
    }
}

pub(super) fn file_stem(title: &str, now: DateTime<FixedOffset>) -> String {
    format!("{}-{}", now.format("%Y-%m-%d"), slugify(title))
}
