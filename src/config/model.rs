//! Config struct definition and default implementation.

use super::types::*;
use crate::topic::Topic;
use serde::{Deserialize, Serialize};

/// Configuration for a postsmith run.
///
/// This struct represents the contents of `topics.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Topics to pick from, in listing order.
    pub topics: Vec<Topic>,

    /// Posting cadence shown by `--list`.
    pub schedule: Schedule,

    /// Generation endpoint settings.
    pub endpoint: EndpointSettings,

    /// Output settings for written posts.
    pub posts: PostSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            topics: default_topics(),
            schedule: Schedule::default(),
            endpoint: EndpointSettings::default(),
            posts: PostSettings::default(),
        }
    }
}
