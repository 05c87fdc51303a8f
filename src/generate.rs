//! Post generation: the pure core of TrendSpark.
//!
//! [`generate`] maps a `(topic, config)` pair to a [`GeneratedPost`] by
//! deterministic template composition. No I/O, no randomness, no shared
//! state: two calls with identical inputs produce byte-identical output,
//! which is what makes the whole pipeline testable. Any "variety" a caller
//! offers (randomized tone shuffling and the like) lives on the caller's
//! side of the boundary.
//!
//! ## Caption Assembly
//!
//! The caption is built from up to four segments joined by blank lines:
//!
//! ```text
//! 🚨 Autonomous AI Agents is blowing up. Here's what you need to know.    (hook, optional)
//!
//! AI agents are moving from chat toys to ... And it's moving fast. If     (body, always)
//! you're building right now, Agentic workflows is the edge your
//! competitors haven't priced in. Swipe through for the full breakdown.
//!
//! Proof points:                                                           (stats, optional)
//! • 70% of teams piloting agents in 2024
//!
//! Follow for more signals before they hit the mainstream.                 (CTA + hashtags)
//!
//! #AIAgents #AutonomousAI #FutureOfWork
//! ```
//!
//! - **Hook**: one canonical phrasing per tone, derived from the topic name.
//! - **Body**: tone-led sentence wrapping the description, an audience
//!   framing clause around the topic focus, and a format closing note.
//! - **Proof section**: a bounded prefix of the topic's proof points,
//!   verbatim; never padded with invented facts.
//! - **CTA + hashtags**: audience-parameterized call-to-action, then the
//!   first few hashtags, de-duplicated.
//!
//! ## Recommendations
//!
//! Posting time comes from a fixed (format × tone) table; visual direction
//! from a per-format table; moodboard keywords from topic focus plus tone,
//! audience, and format derived phrases. All three are static mappings with
//! no clock and no analytics input. The exact strings are a design choice
//! of this crate, not a compatibility surface.

use crate::catalog::TrendTopic;
use crate::options::{Audience, Format, GenerationConfig, Tone};
use serde::{Deserialize, Serialize};

/// Proof points kept when stats are enabled.
pub const MAX_PROOF_POINTS: usize = 3;
/// Hashtags kept in the closing segment.
pub const MAX_HASHTAGS: usize = 5;
/// Moodboard keyword cap.
pub const MAX_MOOD_KEYWORDS: usize = 5;

/// The structured output of one generation call.
///
/// Immutable once returned. Callers that retain posts decorate them with an
/// identity and timestamp (see [`crate::queue`]); that decoration is
/// caller-owned and not part of this contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPost {
    /// Full composed caption text.
    pub caption: String,
    /// Recommended time-of-day slot, human-readable (e.g. "6:30 PM").
    pub posting_time: String,
    /// Short visual-direction phrase for the creative.
    pub recommended_visual: String,
    /// Bounded, de-duplicated keyword list for a moodboard.
    pub mood_board_keywords: Vec<String>,
}

/// Generate a post from a topic and a configuration.
///
/// Total and pure: every topic/config combination produces a post, and
/// identical inputs produce identical output.
pub fn generate(topic: &TrendTopic, config: &GenerationConfig) -> GeneratedPost {
    let mut segments: Vec<String> = Vec::with_capacity(5);

    if config.add_hook {
        segments.push(hook_line(topic, config.tone));
    }
    segments.push(body_segment(topic, config));
    if config.include_stats {
        if let Some(proof) = proof_segment(topic) {
            segments.push(proof);
        }
    }
    segments.push(call_to_action(config.audience).to_string());
    segments.push(hashtag_line(topic));

    GeneratedPost {
        caption: segments.join("\n\n"),
        posting_time: posting_time(config.format, config.tone).to_string(),
        recommended_visual: visual_direction(config.format).to_string(),
        mood_board_keywords: mood_board_keywords(topic, config),
    }
}

/// One canonical hook phrasing per tone.
fn hook_line(topic: &TrendTopic, tone: Tone) -> String {
    let name = &topic.name;
    match tone {
        Tone::HighEnergy => {
            format!("🚨 {name} is blowing up. Here's what you need to know.")
        }
        Tone::Analytical => format!("The data behind {name} tells a clear story."),
        Tone::Storytelling => {
            format!("A year ago nobody was talking about {name}. Then everything changed.")
        }
        Tone::Playful => format!("Plot twist: {name} just ate everyone's roadmap."),
        Tone::Visionary => {
            format!("{name} isn't the future. It's the present you haven't noticed yet.")
        }
    }
}

/// Body: tone-led description, audience framing, format closing note.
fn body_segment(topic: &TrendTopic, config: &GenerationConfig) -> String {
    format!(
        "{} {} {}",
        tone_lead(&topic.description, config.tone),
        audience_frame(&topic.focus, config.audience),
        format_note(config.format),
    )
}

/// Wrap the topic description in the tone's sentence register.
fn tone_lead(description: &str, tone: Tone) -> String {
    match tone {
        Tone::HighEnergy => format!("{description} And it's moving fast."),
        Tone::Analytical => format!("{description} The numbers back it up."),
        Tone::Storytelling => format!("{description} Here's how it's unfolding."),
        Tone::Playful => format!("{description} Yes, really."),
        Tone::Visionary => format!("{description} This is only the beginning."),
    }
}

/// Audience framing clause built around the topic focus. One fixed template
/// per audience value.
fn audience_frame(focus: &str, audience: Audience) -> String {
    match audience {
        Audience::StartupFounders => format!(
            "If you're building right now, {focus} is the edge your competitors haven't priced in."
        ),
        Audience::ProductManagers => {
            format!("For your roadmap, {focus} is the capability worth scoping this quarter.")
        }
        Audience::CreatorsMarketers => {
            format!("For your content engine, {focus} is the angle your audience hasn't seen yet.")
        }
        Audience::Investors => {
            format!("On the thesis side, {focus} is where the next round of value is compounding.")
        }
        Audience::Engineers => {
            format!("Under the hood, {focus} is the layer worth learning before it's table stakes.")
        }
    }
}

/// Closing structural note: how to consume the content in this format.
fn format_note(format: Format) -> &'static str {
    match format {
        Format::Carousel => "Swipe through for the full breakdown.",
        Format::Reel => "Watch to the end. The last point matters most.",
        Format::SingleImage => "Save this for your next planning session.",
    }
}

/// Evidence list from the first [`MAX_PROOF_POINTS`] proof points.
///
/// Returns `None` when the topic carries no proof points at all; shorter
/// lists render as-is, never padded.
fn proof_segment(topic: &TrendTopic) -> Option<String> {
    if topic.proof_points.is_empty() {
        return None;
    }
    let mut lines = vec!["Proof points:".to_string()];
    for point in topic.proof_points.iter().take(MAX_PROOF_POINTS) {
        lines.push(format!("• {point}"));
    }
    Some(lines.join("\n"))
}

/// Closing call-to-action, parameterized by audience.
fn call_to_action(audience: Audience) -> &'static str {
    match audience {
        Audience::StartupFounders => "Follow for more signals before they hit the mainstream.",
        Audience::ProductManagers => "Share this with the PM who needs it on their radar.",
        Audience::CreatorsMarketers => "Comment with the trend you want broken down next.",
        Audience::Investors => "Save this and revisit it next quarter.",
        Audience::Engineers => "Tag an engineer who should be building with this.",
    }
}

/// First [`MAX_HASHTAGS`] hashtags, de-duplicated, space-separated.
fn hashtag_line(topic: &TrendTopic) -> String {
    let mut kept: Vec<&str> = Vec::new();
    for tag in &topic.hashtags {
        if kept.len() == MAX_HASHTAGS {
            break;
        }
        if !kept.contains(&tag.as_str()) {
            kept.push(tag);
        }
    }
    kept.join(" ")
}

/// Recommended posting slot for a (format, tone) pair.
///
/// A fixed editorial table, not a scheduling decision: reels skew to
/// evening peaks, carousels to work-break windows, single images to
/// scroll-heavy commute slots.
pub fn posting_time(format: Format, tone: Tone) -> &'static str {
    match (format, tone) {
        (Format::Carousel, Tone::HighEnergy) => "11:00 AM",
        (Format::Carousel, Tone::Analytical) => "9:30 AM",
        (Format::Carousel, Tone::Storytelling) => "12:30 PM",
        (Format::Carousel, Tone::Playful) => "1:00 PM",
        (Format::Carousel, Tone::Visionary) => "10:00 AM",
        (Format::Reel, Tone::HighEnergy) => "6:30 PM",
        (Format::Reel, Tone::Analytical) => "5:00 PM",
        (Format::Reel, Tone::Storytelling) => "8:00 PM",
        (Format::Reel, Tone::Playful) => "7:30 PM",
        (Format::Reel, Tone::Visionary) => "9:00 PM",
        (Format::SingleImage, Tone::HighEnergy) => "8:00 AM",
        (Format::SingleImage, Tone::Analytical) => "10:30 AM",
        (Format::SingleImage, Tone::Storytelling) => "6:00 PM",
        (Format::SingleImage, Tone::Playful) => "3:00 PM",
        (Format::SingleImage, Tone::Visionary) => "7:00 AM",
    }
}

/// Visual direction phrase per format.
pub fn visual_direction(format: Format) -> &'static str {
    match format {
        Format::Carousel => "multi-slide data story",
        Format::Reel => "fast-cut motion teaser",
        Format::SingleImage => "bold statement graphic",
    }
}

/// Moodboard adjective per tone.
fn tone_adjective(tone: Tone) -> &'static str {
    match tone {
        Tone::HighEnergy => "electric",
        Tone::Analytical => "precise",
        Tone::Storytelling => "cinematic",
        Tone::Playful => "vibrant",
        Tone::Visionary => "futuristic",
    }
}

/// Moodboard scene per audience.
fn audience_scene(audience: Audience) -> &'static str {
    match audience {
        Audience::StartupFounders => "founder desk setup",
        Audience::ProductManagers => "roadmap wall",
        Audience::CreatorsMarketers => "creator studio",
        Audience::Investors => "market chart wall",
        Audience::Engineers => "terminal glow",
    }
}

/// Moodboard texture per format.
fn format_texture(format: Format) -> &'static str {
    match format {
        Format::Carousel => "layered slide frames",
        Format::Reel => "motion blur stills",
        Format::SingleImage => "bold typography",
    }
}

/// Assemble the moodboard: topic focus first, then tone/audience/format
/// derived phrases. De-duplicated, order-preserving, capped at
/// [`MAX_MOOD_KEYWORDS`].
fn mood_board_keywords(topic: &TrendTopic, config: &GenerationConfig) -> Vec<String> {
    let candidates = [
        topic.focus.as_str(),
        tone_adjective(config.tone),
        audience_scene(config.audience),
        format_texture(config.format),
    ];
    let mut keywords: Vec<String> = Vec::new();
    for candidate in candidates {
        if keywords.len() == MAX_MOOD_KEYWORDS {
            break;
        }
        if !candidate.is_empty() && !keywords.iter().any(|k| k == candidate) {
            keywords.push(candidate.to_string());
        }
    }
    keywords
}
