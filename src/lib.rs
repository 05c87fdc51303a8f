//! # TrendSpark
//!
//! A deterministic caption studio for tech-trend social posts. Pick a
//! curated trend topic, set a tone, format, and audience, and TrendSpark
//! composes a ready-to-publish caption together with a recommended posting
//! time, a visual direction, and moodboard keywords.
//!
//! # Architecture: Catalog → Generator → Queue
//!
//! Three units collaborate, each with a single responsibility:
//!
//! ```text
//! 1. Catalog    catalog.toml  →  TrendTopic      (static data, validated once)
//! 2. Generator  (topic, config)  →  GeneratedPost  (pure, total, deterministic)
//! 3. Queue      GeneratedPost  →  QueuedPost     (caller-owned session state)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Determinism**: the generator performs no I/O and holds no state, so
//!   identical inputs give byte-identical captions. All session state lives
//!   in the caller-owned queue.
//! - **Totality**: lookup falls back to the catalog's first topic and the
//!   option enums are closed sets, so a generation can never fail on user
//!   input. The only fallible surface is loading a catalog file.
//! - **Testability**: each unit is exercised in isolation; the totality
//!   suite sweeps every topic against all 300 configuration combinations.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Trend topics: stock catalog, TOML loading, validation, total lookup |
//! | [`options`] | Closed configuration domain: tone, format, audience, toggles |
//! | [`generate`] | The core: caption assembly, posting-time and visual tables, moodboard |
//! | [`queue`] | Caller-owned newest-first post store with id/timestamp decoration |
//! | [`output`] | CLI output formatting — indexed, information-first display |
//!
//! # Design Decisions
//!
//! ## Closed Enums Over Strings
//!
//! Tone, format, and audience are Rust enums with exhaustive-match template
//! tables. Adding a value is a compile-time-checked, localized change; a
//! free-form string can never reach the template layer. Where loose text
//! does enter (CLI labels, stale topic ids), it is absorbed at the boundary
//! by first-value fallbacks rather than rejected.
//!
//! ## Template Composition, Not Inference
//!
//! Captions are assembled from fixed template fragments keyed off the
//! closed option sets. There is no language model, no randomness, and no
//! network: the "pseudo-random" posting time is a static (format × tone)
//! table. Variety, when a caller wants it, belongs on the caller's side.
//!
//! ## Catalog as Data
//!
//! The topic catalog is configuration, not behavior: a TOML file with one
//! `[[topics]]` table per trend, validated up front (unique ids, non-empty
//! hashtag and proof-point lists) so the generator can truncate freely
//! without re-checking. A stock catalog ships in the binary; `gen-catalog`
//! prints it as a documented starting point for custom files.

pub mod catalog;
pub mod generate;
pub mod options;
pub mod output;
pub mod queue;

#[cfg(test)]
pub(crate) mod test_helpers;
