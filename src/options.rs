//! The closed configuration domain steering generation.
//!
//! Tone, format, and audience are closed sets: each is a Rust enum with an
//! exhaustive-match template table in [`crate::generate`], so adding a value
//! is a compile-time-checked, localized change rather than a free-form
//! string floating through the caption pipeline.
//!
//! Every enum exposes:
//! - `ALL`: the canonical ordering (also the CLI and display order)
//! - `label()`: the human-facing name shown in output
//! - `from_label()`: lenient parsing that falls back to the first value,
//!   so a stale or misspelled label can never abort a generation
//!
//! The full domain is 5 × 3 × 5 × 2 × 2 = 300 configuration combinations,
//! all of which must produce a valid post (see the totality tests in
//! [`crate::generate`]).

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Sentence register for the caption body and hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    HighEnergy,
    Analytical,
    Storytelling,
    Playful,
    Visionary,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::HighEnergy,
        Tone::Analytical,
        Tone::Storytelling,
        Tone::Playful,
        Tone::Visionary,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tone::HighEnergy => "High energy",
            Tone::Analytical => "Analytical",
            Tone::Storytelling => "Storytelling",
            Tone::Playful => "Playful",
            Tone::Visionary => "Visionary",
        }
    }

    /// Parse a display label, falling back to the first value on a miss.
    pub fn from_label(label: &str) -> Tone {
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(label.trim()))
            .unwrap_or(Self::ALL[0])
    }
}

impl Default for Tone {
    fn default() -> Self {
        Self::ALL[0]
    }
}

/// Content format the caption is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    Carousel,
    Reel,
    SingleImage,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Carousel, Format::Reel, Format::SingleImage];

    pub fn label(&self) -> &'static str {
        match self {
            Format::Carousel => "Carousel",
            Format::Reel => "Reel",
            Format::SingleImage => "Single image",
        }
    }

    /// Parse a display label, falling back to the first value on a miss.
    pub fn from_label(label: &str) -> Format {
        Self::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(label.trim()))
            .unwrap_or(Self::ALL[0])
    }
}

impl Default for Format {
    fn default() -> Self {
        Self::ALL[0]
    }
}

/// Who the caption is framed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Audience {
    StartupFounders,
    ProductManagers,
    CreatorsMarketers,
    Investors,
    Engineers,
}

impl Audience {
    pub const ALL: [Audience; 5] = [
        Audience::StartupFounders,
        Audience::ProductManagers,
        Audience::CreatorsMarketers,
        Audience::Investors,
        Audience::Engineers,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Audience::StartupFounders => "Startup founders",
            Audience::ProductManagers => "Product managers",
            Audience::CreatorsMarketers => "Creators & marketers",
            Audience::Investors => "Investors",
            Audience::Engineers => "Engineers",
        }
    }

    /// Parse a display label, falling back to the first value on a miss.
    pub fn from_label(label: &str) -> Audience {
        Self::ALL
            .into_iter()
            .find(|a| a.label().eq_ignore_ascii_case(label.trim()))
            .unwrap_or(Self::ALL[0])
    }
}

impl Default for Audience {
    fn default() -> Self {
        Self::ALL[0]
    }
}

/// One generation request's worth of stylistic choices.
///
/// Defaults mirror a fresh session: first value of each closed set, both
/// content toggles on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Sentence register for hook and body.
    pub tone: Tone,
    /// Content format; selects the closing structural note and time slot.
    pub format: Format,
    /// Audience the body framing and call-to-action address.
    pub audience: Audience,
    /// Weave proof points into the caption as an evidence list.
    pub include_stats: bool,
    /// Open the caption with a hook headline.
    pub add_hook: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            tone: Tone::default(),
            format: Format::default(),
            audience: Audience::default(),
            include_stats: true,
            add_hook: true,
        }
    }
}
