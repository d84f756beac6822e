use super::ContentGenerator;
use crate::error::{PostError, Result};
use crate::topic::Topic;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

const WORDS_PER_MINUTE: usize = 200;

/// Hugo frontmatter written at the top of every post.
///
/// Serialized with serde_yaml, so quotes and colons in titles or
/// descriptions are escaped rather than breaking the block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostFrontmatter {
    pub title: String,
    /// `YYYY-MM-DDTHH:MM:SS+HH:MM`
    pub date: String,
    pub draft: bool,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub description: String,
    #[serde(rename = "showToc")]
    pub show_toc: bool,
    #[serde(rename = "TocOpen")]
    pub toc_open: bool,
    pub word_count: usize,
    pub reading_time: usize,
    pub author: String,
}

impl PostFrontmatter {
    /// Frontmatter for `topic` with statistics computed from `content`.
    pub fn new(topic: &Topic, content: &str, date: DateTime<FixedOffset>, author: &str) -> Self {
        let words = word_count(content);
        Self {
            title: topic.title.clone(),
            date: date.format("%Y-%m-%dT%H:%M:%S%:z").to_string(),
            draft: false,
            tags: topic.keywords.clone(),
            categories: vec![topic.category.clone()],
            description: topic.description.clone(),
            show_toc: true,
            toc_open: false,
            word_count: words,
            reading_time: reading_time(words),
            author: author.to_string(),
        }
    }

    /// Render as a `---` delimited block followed by a blank line.
    pub fn to_block(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| PostError::Config(format!("failed to serialize frontmatter: {}", e)))?;
        Ok(format!("---\n{}---\n\n", yaml))
    }
}

/// Number of whitespace-separated words.
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Minutes to read `words` at 200 words per minute, rounded half up, at least 1.
pub fn reading_time(words: usize) -> usize {
    ((words + WORDS_PER_MINUTE / 2) / WORDS_PER_MINUTE).max(1)
}

impl ContentGenerator {
    /// Frontmatter block for `topic`, dated now.
    pub fn create_frontmatter(&self, topic: &Topic, content: &str) -> Result<String> {
        self.frontmatter_at(topic, content, self.clock.now())
    }

    pub(super) fn frontmatter_at(
        &self,
        topic: &Topic,
        content: &str,
        now: DateTime<FixedOffset>,
    ) -> Result<String> {
        PostFrontmatter::new(topic, content, now, &self.author).to_block()
    }
}
