//! The generation run: topic, prompts, model, file.
//!
//! # What a run does
//!
//! 1. Picks a topic
//! 2. Probes the model; an unreachable model skips straight to step 5
//! 3. Builds the system and user prompts
//! 4. Requests one completion and saves it on success
//! 5. Otherwise writes a template post with placeholder sections
//!
//! Falling back is a handled outcome, not an error.

use crate::content::{ContentGenerator, word_count};
use crate::error::Result;
use crate::model::TextGenerator;
use crate::topic::TopicSelector;
use std::path::PathBuf;
use tracing::{info, warn};

/// What a run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Model output saved.
    Generated { path: PathBuf, word_count: usize },
    /// Template post saved because generation was unavailable.
    Fallback { path: PathBuf },
}

impl Outcome {
    /// Path of the written post.
    pub fn path(&self) -> &PathBuf {
        match self {
            Outcome::Generated { path, .. } | Outcome::Fallback { path } => path,
        }
    }
}

/// Run one generation and write exactly one post.
///
/// Errors only for failures outside generation itself (empty topic list,
/// filesystem errors).
pub async fn generate_post<G: TextGenerator + ?Sized>(
    selector: &mut TopicSelector,
    model: &G,
    content: &ContentGenerator,
    temperature: f32,
) -> Result<Outcome> {
    let topic = selector.get_random_topic()?.clone();
    println!("Selected topic: {} ({})", topic.title, topic.category);
    info!(title = %topic.title, category = %topic.category, "topic selected");

    println!("Testing connection to model: {}", model.model_name());
    let generated = if model.test_connection().await {
        let system_prompt = content.create_system_prompt();
        let user_prompt = content.create_user_prompt(&topic);

        println!("Generating content using {}...", model.model_name());
        model
            .generate_content(&system_prompt, &user_prompt, temperature)
            .await
    } else {
        println!("Model {} is not available", model.model_name());
        println!("Make sure Ollama is running and the model is installed");
        println!("Try: ollama pull {}", model.model_name());
        None
    };

    match generated {
        Some(body) => {
            let path = content.save_post(&topic, &body)?;
            Ok(Outcome::Generated {
                path,
                word_count: word_count(&body),
            })
        }
        None => {
            warn!(title = %topic.title, "generation unavailable, writing template post");
            let path = content.create_fallback_post(&topic)?;
            Ok(Outcome::Fallback { path })
        }
    }
}

/// Print the outcome for the user.
pub fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Generated { path, word_count } => {
            println!("Content generated and saved!");
            println!("File: {}", path.display());
            println!("Word count: {} words", word_count);
        }
        Outcome::Fallback { path } => {
            println!("AI generation failed, created a template instead");
            println!("Template created: {}", path.display());
        }
    }
}
