//! Topic catalog: the read-only data source generation draws from.
//!
//! A catalog is an ordered collection of trend topics, each carrying the
//! descriptive and promotional fields the generator consumes as template
//! inputs. The catalog is static configuration, not behavior: it is loaded
//! once, validated, and only ever read.
//!
//! ## Catalog File Format
//!
//! Catalogs are TOML files with one `[[topics]]` table per topic:
//!
//! ```toml
//! [[topics]]
//! id = "ai-agents"
//! name = "Autonomous AI Agents"
//! description = "AI agents are moving from chat toys to systems that plan."
//! focus = "Agentic workflows"
//! hashtags = ["#AIAgents", "#AutonomousAI"]
//! proof_points = ["70% of teams piloting agents in 2024"]
//! ```
//!
//! A built-in stock catalog ships in the binary and is used when no file is
//! given; `trendspark gen-catalog` prints it as a documented starting point.
//! Unknown keys are rejected to catch typos early.
//!
//! ## Invariants
//!
//! [`Catalog::validate`] enforces what the generator relies on:
//!
//! - the catalog is non-empty
//! - topic ids are unique
//! - every topic has at least one hashtag and one proof point
//!
//! Lookup is total: [`Catalog::find_topic`] falls back to the first entry
//! for unknown or empty ids, so a stale id from a caller can never fail a
//! generation.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Catalog validation error: {0}")]
    Validation(String),
}

/// One curated trend topic.
///
/// Fields are consumed by the generator via truncation (first N hashtags,
/// first N proof points), so lists only need to be non-empty, not long.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrendTopic {
    /// Unique stable identifier, referenced from the CLI and the post queue.
    pub id: String,
    /// Display name, woven into the hook headline.
    pub name: String,
    /// Prose summary; becomes the opening of the caption body.
    pub description: String,
    /// Short thematic label used in audience framing and the moodboard.
    pub focus: String,
    /// Ordered tag strings; the caption keeps the first few, de-duplicated.
    pub hashtags: Vec<String>,
    /// Supporting facts, surfaced verbatim when stats are enabled.
    pub proof_points: Vec<String>,
}

/// An ordered, validated collection of trend topics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    pub topics: Vec<TrendTopic>,
}

impl Catalog {
    /// Look up a topic by id, falling back to the first entry.
    ///
    /// Total over any id the caller can produce: unknown and empty ids
    /// resolve to the catalog's canonical default (its first topic). The
    /// catalog is guaranteed non-empty by [`Catalog::validate`].
    pub fn find_topic(&self, id: &str) -> &TrendTopic {
        self.topics
            .iter()
            .find(|topic| topic.id == id)
            .unwrap_or(&self.topics[0])
    }

    /// Validate the invariants the generator relies on.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.topics.is_empty() {
            return Err(CatalogError::Validation(
                "catalog must contain at least one topic".into(),
            ));
        }
        let mut seen = std::collections::HashSet::new();
        for topic in &self.topics {
            if topic.id.trim().is_empty() {
                return Err(CatalogError::Validation(format!(
                    "topic '{}' has an empty id",
                    topic.name
                )));
            }
            if !seen.insert(topic.id.as_str()) {
                return Err(CatalogError::Validation(format!(
                    "duplicate topic id: {}",
                    topic.id
                )));
            }
            if topic.hashtags.is_empty() {
                return Err(CatalogError::Validation(format!(
                    "topic '{}' must have at least one hashtag",
                    topic.id
                )));
            }
            if topic.proof_points.is_empty() {
                return Err(CatalogError::Validation(format!(
                    "topic '{}' must have at least one proof point",
                    topic.id
                )));
            }
        }
        Ok(())
    }
}

/// Load and validate a catalog from a TOML file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path)?;
    let catalog: Catalog = toml::from_str(&content)?;
    catalog.validate()?;
    Ok(catalog)
}

/// The built-in stock catalog.
///
/// Parsed from the embedded TOML so the `gen-catalog` output and the
/// in-memory stock catalog can never drift apart.
pub fn stock_catalog() -> Catalog {
    toml::from_str(stock_catalog_toml()).expect("stock catalog must parse")
}

/// Returns the documented stock `catalog.toml`.
///
/// Used by the `gen-catalog` CLI command as a starting point for custom
/// catalogs.
pub fn stock_catalog_toml() -> &'static str {
    r##"# TrendSpark Topic Catalog
# ========================
# Each [[topics]] table is one trend topic the generator can write about.
# Required fields: id, name, description, focus, hashtags, proof_points.
# Every topic needs at least one hashtag and one proof point; the caption
# only keeps the first few of each, so lists can stay short.
#
# Point the CLI at a custom file with --catalog path/to/catalog.toml.

[[topics]]
id = "ai-agents"
name = "Autonomous AI Agents"
description = "AI agents are moving from chat toys to systems that plan, execute, and verify multi-step work on their own."
focus = "Agentic workflows"
hashtags = ["#AIAgents", "#AutonomousAI", "#FutureOfWork"]
proof_points = [
    "70% of teams piloting agents in 2024",
    "Agent frameworks tripled their GitHub stars year over year",
    "Early adopters report 40% faster ticket resolution",
]

[[topics]]
id = "spatial-computing"
name = "Spatial Computing"
description = "Headsets and passthrough AR are turning the room around you into a canvas for software."
focus = "Mixed-reality interfaces"
hashtags = ["#SpatialComputing", "#AR", "#XR", "#MixedReality"]
proof_points = [
    "Headset shipments crossed 10M units last year",
    "Retailers using AR try-ons cut returns by a quarter",
]

[[topics]]
id = "open-source-llms"
name = "Open-Source LLMs"
description = "Open-weight models are closing the gap with frontier labs while running on hardware you own."
focus = "Local-first AI"
hashtags = ["#OpenSource", "#LLM", "#LocalAI"]
proof_points = [
    "Open-weight models now hold half the leaderboard spots",
    "A capable model runs on a laptop for pennies per session",
]

[[topics]]
id = "edge-ai"
name = "Edge AI"
description = "Inference is leaving the data center and landing in phones, cameras, and sensors."
focus = "On-device inference"
hashtags = ["#EdgeAI", "#TinyML", "#IoT"]
proof_points = [
    "On-device inference cuts round-trip latency below 20ms",
    "Edge AI chip revenue doubled in two years",
]

[[topics]]
id = "ai-creator-tools"
name = "AI Creator Tools"
description = "Generative tooling is collapsing the distance between an idea and a published piece."
focus = "Generative workflows"
hashtags = ["#CreatorEconomy", "#GenerativeAI", "#ContentCreation"]
proof_points = [
    "One-person studios now ship broadcast-grade video weekly",
    "AI-assisted edits cut production time by 60%",
]

[[topics]]
id = "digital-twins"
name = "Digital Twins"
description = "Live virtual replicas of factories, grids, and fleets are becoming the control plane for physical operations."
focus = "Simulation-driven ops"
hashtags = ["#DigitalTwin", "#Simulation", "#Industry40"]
proof_points = [
    "Factories running twins report double-digit downtime drops",
    "Twin deployments grew 3x across logistics",
]
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // =========================================================================
    // Stock catalog tests
    // =========================================================================

    #[test]
    fn stock_catalog_toml_is_valid_toml() {
        let _: toml::Value =
            toml::from_str(stock_catalog_toml()).expect("stock catalog must be valid TOML");
    }

    #[test]
    fn stock_catalog_passes_validation() {
        let catalog = stock_catalog();
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn stock_catalog_has_ai_agents_first() {
        let catalog = stock_catalog();
        assert_eq!(catalog.topics[0].id, "ai-agents");
        assert_eq!(catalog.topics[0].name, "Autonomous AI Agents");
    }

    #[test]
    fn stock_topics_are_generation_ready() {
        for topic in &stock_catalog().topics {
            assert!(!topic.description.is_empty(), "{} description", topic.id);
            assert!(!topic.focus.is_empty(), "{} focus", topic.id);
            assert!(!topic.hashtags.is_empty(), "{} hashtags", topic.id);
            assert!(!topic.proof_points.is_empty(), "{} proof points", topic.id);
        }
    }

    // =========================================================================
    // find_topic tests
    // =========================================================================

    #[test]
    fn find_topic_by_id() {
        let catalog = stock_catalog();
        assert_eq!(catalog.find_topic("edge-ai").name, "Edge AI");
    }

    #[test]
    fn find_topic_unknown_id_falls_back_to_first() {
        let catalog = stock_catalog();
        assert_eq!(catalog.find_topic("does-not-exist").id, "ai-agents");
    }

    #[test]
    fn find_topic_empty_id_falls_back_to_first() {
        let catalog = stock_catalog();
        assert_eq!(catalog.find_topic("").id, "ai-agents");
    }

    // =========================================================================
    // load_catalog tests
    // =========================================================================

    fn write_catalog(tmp: &TempDir, content: &str) -> std::path::PathBuf {
        let path = tmp.path().join("catalog.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_catalog_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = write_catalog(
            &tmp,
            r##"
[[topics]]
id = "quantum"
name = "Quantum Computing"
description = "Qubits are leaving the lab."
focus = "Error correction"
hashtags = ["#Quantum"]
proof_points = ["Logical qubit counts doubled this year"]
"##,
        );
        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.topics.len(), 1);
        assert_eq!(catalog.find_topic("quantum").focus, "Error correction");
    }

    #[test]
    fn load_catalog_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_catalog(&tmp.path().join("nope.toml"));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[test]
    fn load_catalog_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_catalog(&tmp, "this is not valid toml [[[");
        let result = load_catalog(&path);
        assert!(matches!(result, Err(CatalogError::Toml(_))));
    }

    #[test]
    fn load_catalog_unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = write_catalog(
            &tmp,
            r##"
[[topics]]
id = "quantum"
name = "Quantum Computing"
description = "Qubits are leaving the lab."
focus = "Error correction"
hashtgs = ["#Quantum"]
proof_points = ["Logical qubit counts doubled this year"]
"##,
        );
        let result = load_catalog(&path);
        assert!(matches!(result, Err(CatalogError::Toml(_))));
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    fn minimal_topic(id: &str) -> TrendTopic {
        TrendTopic {
            id: id.to_string(),
            name: "Topic".to_string(),
            description: "Something is happening.".to_string(),
            focus: "A theme".to_string(),
            hashtags: vec!["#Tag".to_string()],
            proof_points: vec!["A fact".to_string()],
        }
    }

    #[test]
    fn validate_empty_catalog_rejected() {
        let catalog = Catalog { topics: vec![] };
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("at least one topic"));
    }

    #[test]
    fn validate_duplicate_id_rejected() {
        let catalog = Catalog {
            topics: vec![minimal_topic("a"), minimal_topic("a")],
        };
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate topic id"));
    }

    #[test]
    fn validate_empty_id_rejected() {
        let catalog = Catalog {
            topics: vec![minimal_topic("  ")],
        };
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn validate_missing_hashtags_rejected() {
        let mut topic = minimal_topic("a");
        topic.hashtags.clear();
        let catalog = Catalog { topics: vec![topic] };
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("hashtag"));
    }

    #[test]
    fn validate_missing_proof_points_rejected() {
        let mut topic = minimal_topic("a");
        topic.proof_points.clear();
        let catalog = Catalog { topics: vec![topic] };
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("proof point"));
    }

    #[test]
    fn load_catalog_validates_content() {
        let tmp = TempDir::new().unwrap();
        let path = write_catalog(
            &tmp,
            r#"
[[topics]]
id = "quantum"
name = "Quantum Computing"
description = "Qubits are leaving the lab."
focus = "Error correction"
hashtags = []
proof_points = ["Logical qubit counts doubled this year"]
"#,
        );
        let result = load_catalog(&path);
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }
}
