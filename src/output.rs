//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is information-centric, not record-centric. The primary display
//! for every entity (topic, post) is its semantic identity: positional
//! index plus display name, with ids and timestamps shown as secondary
//! context via indented lines. The caption itself is printed verbatim so
//! it can be pasted straight into a scheduler.
//!
//! # Output Format
//!
//! ## Topics
//!
//! ```text
//! Topics
//! 001 Autonomous AI Agents
//!     Id: ai-agents
//!     Focus: Agentic workflows
//! 002 Spatial Computing
//!     Id: spatial-computing
//!     Focus: Mixed-reality interfaces
//! ```
//!
//! ## Post
//!
//! ```text
//! Autonomous AI Agents (Reel)
//!
//! <caption, verbatim>
//!
//! Best post time: 9:00 PM
//! Visual direction: fast-cut motion teaser
//! Moodboard: Agentic workflows · futuristic · terminal glow · motion blur stills
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::catalog::{Catalog, TrendTopic};
use crate::generate::GeneratedPost;
use crate::options::Format;
use crate::queue::PostQueue;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

// ============================================================================
// Topic views
// ============================================================================

/// Format the catalog as an indexed topic list.
pub fn format_topic_list(catalog: &Catalog) -> Vec<String> {
    let mut lines = vec!["Topics".to_string()];
    for (i, topic) in catalog.topics.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), topic.name));
        lines.push(format!("    Id: {}", topic.id));
        lines.push(format!("    Focus: {}", topic.focus));
    }
    lines
}

/// Format a single topic card: description, focus, hashtags, proof points.
pub fn format_topic_detail(topic: &TrendTopic) -> Vec<String> {
    let mut lines = vec![
        topic.name.clone(),
        format!("    Id: {}", topic.id),
        format!("    Focus: {}", topic.focus),
        format!("    {}", truncate_desc(&topic.description, 120)),
        format!("    Hashtags: {}", topic.hashtags.join(" ")),
        "    Proof points:".to_string(),
    ];
    for point in &topic.proof_points {
        lines.push(format!("        {point}"));
    }
    lines
}

// ============================================================================
// Post views
// ============================================================================

/// Format a generated post: header, verbatim caption, recommendations.
pub fn format_post(topic_name: &str, format: Format, post: &GeneratedPost) -> Vec<String> {
    let mut lines = vec![format!("{} ({})", topic_name, format.label()), String::new()];
    lines.extend(post.caption.lines().map(str::to_string));
    lines.push(String::new());
    lines.push(format!("Best post time: {}", post.posting_time));
    lines.push(format!("Visual direction: {}", post.recommended_visual));
    lines.push(format!(
        "Moodboard: {}",
        post.mood_board_keywords.join(" · ")
    ));
    lines
}

/// Format the session queue, newest first, with per-post identity context.
pub fn format_queue(queue: &PostQueue, catalog: &Catalog, format: Format) -> Vec<String> {
    let mut lines = vec!["Post queue".to_string()];
    if queue.is_empty() {
        lines.push("    (no posts generated)".to_string());
        return lines;
    }
    for (i, entry) in queue.posts().iter().enumerate() {
        let topic = catalog.find_topic(&entry.topic_id);
        lines.push(format!("{} {}", format_index(i + 1), topic.name));
        lines.push(format!("    Id: {}", entry.id));
        lines.push(format!(
            "    Generated: {}",
            entry.created_at.format("%H:%M")
        ));
        lines.push(String::new());
        for line in format_post(&topic.name, format, &entry.post) {
            if line.is_empty() {
                lines.push(line);
            } else {
                lines.push(format!("    {line}"));
            }
        }
        lines.push(String::new());
    }
    // Recent-topics footer, one entry per topic
    let recent = queue.recent_topic_ids();
    if recent.len() > 1 {
        lines.push("Trending board".to_string());
        for id in recent {
            let topic = catalog.find_topic(id);
            lines.push(format!("    {} ({})", topic.name, topic.focus));
        }
    }
    lines
}

// ============================================================================
// Print wrappers
// ============================================================================

pub fn print_topic_list(catalog: &Catalog) {
    for line in format_topic_list(catalog) {
        println!("{line}");
    }
}

pub fn print_topic_detail(topic: &TrendTopic) {
    for line in format_topic_detail(topic) {
        println!("{line}");
    }
}

pub fn print_post(topic_name: &str, format: Format, post: &GeneratedPost) {
    for line in format_post(topic_name, format, post) {
        println!("{line}");
    }
}

pub fn print_queue(queue: &PostQueue, catalog: &Catalog, format: Format) {
    for line in format_queue(queue, catalog, format) {
        println!("{line}");
    }
}
