//! Configuration sections and defaults for postsmith.
//!
//! This module defines the nested sections of `topics.yaml` and the default
//! value functions used by serde.

use crate::topic::Topic;
use serde::{Deserialize, Serialize};

/// Posting schedule. Informational only; nothing in postsmith schedules runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    /// Free-form cadence label (e.g. "twice_weekly").
    pub frequency: String,

    /// Days of the week posts go out.
    pub days: Vec<String>,

    /// Time of day, `HH:MM`.
    pub time: String,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            frequency: "twice_weekly".to_string(),
            days: vec!["tuesday".to_string(), "friday".to_string()],
            time: "10:00".to_string(),
        }
    }
}

/// Settings for the chat-completion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointSettings {
    /// Base URL of the OpenAI-compatible API, without the `/chat/completions` suffix.
    pub base_url: String,

    /// Bearer token sent with every request. Ollama ignores the value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Timeout for the reachability probe.
    pub probe_timeout_secs: u64,

    /// Timeout for a full generation request.
    pub request_timeout_secs: u64,

    /// Upper bound on generated tokens.
    pub max_tokens: u32,

    /// Sampling temperature for generation.
    pub temperature: f32,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: Some("ollama".to_string()),
            probe_timeout_secs: 10,
            request_timeout_secs: 600,
            max_tokens: 3000,
            temperature: 0.7,
        }
    }
}

/// Settings for written posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostSettings {
    /// Root directory; each category becomes a subdirectory.
    pub output_dir: String,

    /// Value of the `author` frontmatter field.
    pub author: String,

    /// Fixed UTC offset for post dates (e.g. "+05:30"). Local offset when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone_offset: Option<String>,
}

impl Default for PostSettings {
    fn default() -> Self {
        Self {
            output_dir: "content".to_string(),
            author: "DevOps Expert".to_string(),
            timezone_offset: None,
        }
    }
}

pub(crate) fn default_base_url() -> String {
    "http://localhost:11434/v1".to_string()
}

/// Topics written to a fresh `topics.yaml`.
pub fn default_topics() -> Vec<Topic> {
    vec![
        Topic::new(
            "Modern DevOps Practices",
            "tech",
            &["DevOps", "CI/CD", "automation", "infrastructure"],
            "Exploring cutting-edge DevOps methodologies and automation tools",
        ),
        Topic::new(
            "Kubernetes Best Practices",
            "tech",
            &["Kubernetes", "containers", "orchestration", "deployment"],
            "Production-ready Kubernetes deployment strategies and best practices",
        ),
        Topic::new(
            "Infrastructure as Code",
            "tech",
            &["Terraform", "IaC", "automation", "cloud"],
            "Managing infrastructure through declarative code",
        ),
        Topic::new(
            "Site Reliability Engineering",
            "tech",
            &["SRE", "monitoring", "reliability", "observability"],
            "Building and maintaining reliable systems at scale",
        ),
        Topic::new(
            "Docker Security Practices",
            "tutorials",
            &["Docker", "security", "containers", "hardening"],
            "Securing containerized applications and infrastructure",
        ),
        Topic::new(
            "GitOps Workflows",
            "tutorials",
            &["GitOps", "Git", "deployment", "automation"],
            "Implementing GitOps for reliable deployments",
        ),
        Topic::new(
            "Cloud Migration Strategies",
            "tutorials",
            &["cloud", "migration", "AWS", "strategy"],
            "Planning and executing successful cloud migrations",
        ),
        Topic::new(
            "Platform Engineering Insights",
            "personal",
            &["platform", "developer experience", "productivity"],
            "Building platforms that empower development teams",
        ),
        Topic::new(
            "DevOps Career Journey",
            "personal",
            &["career", "growth", "skills", "leadership"],
            "Lessons learned from a DevOps engineering career",
        ),
        Topic::new(
            "Building Engineering Culture",
            "personal",
            &["culture", "team", "collaboration", "leadership"],
            "Creating a positive engineering culture and team dynamics",
        ),
    ]
}
