//! Topic records and random topic selection.
//!
//! Topics come from the loaded [`Config`](crate::config::Config); the selector
//! never mutates them. Selection goes through an injectable chooser so tests
//! can pick a known topic instead of relying on the thread RNG.

use crate::error::{PostError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A prospective post subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Post title.
    pub title: String,

    /// Category, used as the output subdirectory.
    pub category: String,

    /// Ordered keywords; they become the post's tags.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// One-line summary of the post.
    #[serde(default)]
    pub description: String,

    /// Optional audience level (beginner, intermediate, advanced).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

impl Topic {
    /// Build a topic without a difficulty level.
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        keywords: &[&str],
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            description: description.into(),
            difficulty: None,
        }
    }
}

/// Picks an index in `0..len`. Only called with `len > 0`.
pub type Chooser = Box<dyn FnMut(usize) -> usize>;

/// Holds the configured topics and picks one per run.
pub struct TopicSelector {
    topics: Vec<Topic>,
    chooser: Chooser,
}

impl TopicSelector {
    /// Create a selector that picks uniformly at random.
    pub fn new(topics: Vec<Topic>) -> Self {
        Self::with_chooser(topics, Box::new(|len| rand::thread_rng().gen_range(0..len)))
    }

    /// Create a selector with a custom index chooser.
    pub fn with_chooser(topics: Vec<Topic>, chooser: Chooser) -> Self {
        Self { topics, chooser }
    }

    /// Pick one topic.
    ///
    /// Returns `PostError::NoTopics` when the list is empty. An out-of-range
    /// index from a custom chooser wraps around instead of panicking.
    pub fn get_random_topic(&mut self) -> Result<&Topic> {
        if self.topics.is_empty() {
            return Err(PostError::NoTopics);
        }
        let index = (self.chooser)(self.topics.len()) % self.topics.len();
        Ok(&self.topics[index])
    }

    /// All topics in declaration order.
    pub fn get_all_topics(&self) -> &[Topic] {
        &self.topics
    }
}
