//! Shared test utilities for the trendspark test suite.
//!
//! Provides a canonical sample topic plus the exhaustive configuration grid
//! used by the totality and determinism tests in [`crate::generate`].

use crate::catalog::TrendTopic;
use crate::options::{Audience, Format, GenerationConfig, Tone};

/// A representative topic with multiple hashtags and proof points.
pub fn sample_topic() -> TrendTopic {
    TrendTopic {
        id: "ai-agents".to_string(),
        name: "Autonomous AI Agents".to_string(),
        description: "AI agents are moving from chat toys to systems that plan, \
                      execute, and verify multi-step work on their own."
            .to_string(),
        focus: "Agentic workflows".to_string(),
        hashtags: vec![
            "#AIAgents".to_string(),
            "#AutonomousAI".to_string(),
            "#FutureOfWork".to_string(),
        ],
        proof_points: vec![
            "70% of teams piloting agents in 2024".to_string(),
            "Agent frameworks tripled their GitHub stars year over year".to_string(),
        ],
    }
}

/// Every configuration combination: 5 tones × 3 formats × 5 audiences × 2
/// stats states × 2 hook states = 300.
pub fn all_configs() -> Vec<GenerationConfig> {
    let mut configs = Vec::with_capacity(300);
    for tone in Tone::ALL {
        for format in Format::ALL {
            for audience in Audience::ALL {
                for include_stats in [false, true] {
                    for add_hook in [false, true] {
                        configs.push(GenerationConfig {
                            tone,
                            format,
                            audience,
                            include_stats,
                            add_hook,
                        });
                    }
                }
            }
        }
    }
    configs
}
