//! `--list`: print configured topics and the posting schedule.

use crate::config::Config;
use std::fmt::Write;

/// Print the topic listing to stdout.
pub fn cmd_list(config: &Config) {
    print!("{}", render_topic_list(config));
}

/// Numbered topic listing followed by the schedule.
pub fn render_topic_list(config: &Config) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Available Topics:");
    let _ = writeln!(out, "{}", "=".repeat(50));

    for (i, topic) in config.topics.iter().enumerate() {
        let _ = writeln!(out, "{:2}. {}", i + 1, topic.title);
        let _ = writeln!(out, "    Category: {}", topic.category);
        let _ = writeln!(out, "    Keywords: {}", topic.keywords.join(", "));
        let _ = writeln!(out, "    Description: {}", topic.description);
        if let Some(difficulty) = &topic.difficulty {
            let _ = writeln!(out, "    Difficulty: {}", difficulty);
        }
        let _ = writeln!(out);
    }

    let schedule = &config.schedule;
    let _ = writeln!(
        out,
        "Schedule: {} ({}) at {}",
        schedule.frequency,
        schedule.days.join(", "),
        schedule.time
    );
    out
}
