use super::ContentGenerator;
use super::filename::file_stem;
use crate::error::{PostError, Result};
use crate::fs::{ensure_dir, write_new_file};
use crate::topic::Topic;
use std::path::PathBuf;
use tracing::{debug, info};

const FOOTER: &str = "\n\n---\n\n*This article was generated using AI with technical validation. \
Have questions or feedback? Feel free to reach out!*\n";

/// Numbered names tried after the time-suffixed one is also taken.
const MAX_NUMBERED_NAMES: u32 = 100;

impl ContentGenerator {
    /// Write `content` as a post for `topic` and return the path written.
    ///
    /// The file lands in `<base_dir>/<category>/`. If `<date>-<slug>.md`
    /// exists, `-HHMMSS` is appended to the stem (then `-HHMMSS-2`, ...).
    /// An existing file is never overwritten.
    pub fn save_post(&self, topic: &Topic, content: &str) -> Result<PathBuf> {
        let category_dir = self.base_dir.join(&topic.category);
        ensure_dir(&category_dir)?;

        let now = self.clock.now();
        let stem = file_stem(&topic.title, now);
        let time_suffix = now.format("%H%M%S").to_string();

        let mut document = self.frontmatter_at(topic, content, now)?;
        document.push_str(content);
        document.push_str(FOOTER);

        let candidates = std::iter::once(format!("{}.md", stem))
            .chain(std::iter::once(format!("{}-{}.md", stem, time_suffix)))
            .chain((2..=MAX_NUMBERED_NAMES).map(|n| format!("{}-{}-{}.md", stem, time_suffix, n)));

        for filename in candidates {
            let path = category_dir.join(&filename);
            if write_new_file(&path, &document)? {
                info!(path = %path.display(), "post saved");
                return Ok(path);
            }
            debug!(filename = %filename, "name taken, trying next");
        }

        Err(PostError::io(
            format!(
                "no free filename for '{}' in '{}'",
                stem,
                category_dir.display()
            ),
            std::io::Error::from(std::io::ErrorKind::AlreadyExists),
        ))
    }

    /// Write a placeholder post for `topic`, used when generation is unavailable.
    pub fn create_fallback_post(&self, topic: &Topic) -> Result<PathBuf> {
        self.save_post(topic, &fallback_body(topic))
    }
}

pub(super) fn fallback_body(topic: &Topic) -> String {
    format!(
        "# {title}

## Introduction

{description}

## Key Concepts

[Key concepts to be completed]

## Implementation

[Implementation steps to be completed]

## Best Practices

[Best practices to be completed]

## Conclusion

[Summary and next steps to be completed]

---

**Note**: This is a template post created when AI generation was unavailable. Manual completion required.",
        title = topic.title,
        description = topic.description,
    )
}
