//! Caller-owned post queue.
//!
//! The generator is stateless; anything a session keeps is the caller's
//! problem. [`PostQueue`] is that explicit store: an append-only,
//! newest-first list of generated posts, each decorated on entry with a
//! content-derived id and a creation timestamp. The decoration happens
//! here, at the boundary, so [`crate::generate`] stays a pure function.
//!
//! The queue also carries the one piece of transient session state the
//! surrounding UI needs: a single "copied" acknowledgment that marks which
//! post's caption was last exported. Exactly one post can hold the
//! acknowledgment at a time, and clearing it is the caller's job once the
//! acknowledgment has been shown.
//!
//! Nothing in this module is persisted or shared between sessions.

use crate::generate::GeneratedPost;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// A generated post decorated with queue-level identity.
#[derive(Debug, Clone, Serialize)]
pub struct QueuedPost {
    /// Short content-derived identifier, unique within a session.
    pub id: String,
    /// Id of the topic the post was generated from.
    pub topic_id: String,
    /// When the caller enqueued the post.
    pub created_at: DateTime<Utc>,
    /// The immutable generation result.
    #[serde(flatten)]
    pub post: GeneratedPost,
}

/// Newest-first session store for generated posts.
#[derive(Debug, Default)]
pub struct PostQueue {
    posts: Vec<QueuedPost>,
    copied: Option<String>,
}

impl PostQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decorate a post with an id and timestamp and store it newest-first.
    pub fn push(
        &mut self,
        topic_id: &str,
        post: GeneratedPost,
        created_at: DateTime<Utc>,
    ) -> &QueuedPost {
        let entry = QueuedPost {
            id: post_id(topic_id, &post.caption, created_at),
            topic_id: topic_id.to_string(),
            created_at,
            post,
        };
        self.posts.insert(0, entry);
        &self.posts[0]
    }

    /// Posts in display order, newest first.
    pub fn posts(&self) -> &[QueuedPost] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Record that a post's caption was exported. Returns `false` if the id
    /// is not in the queue; the previous acknowledgment (if any) is replaced.
    pub fn mark_copied(&mut self, id: &str) -> bool {
        if self.posts.iter().any(|p| p.id == id) {
            self.copied = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// Whether the given post currently holds the copied acknowledgment.
    pub fn is_copied(&self, id: &str) -> bool {
        self.copied.as_deref() == Some(id)
    }

    /// Drop the copied acknowledgment.
    pub fn clear_copied(&mut self) {
        self.copied = None;
    }

    /// Topic ids represented in the queue, unique, in queue order.
    ///
    /// Drives the "what have I posted about lately" view: each topic
    /// appears once, at the position of its most recent post.
    pub fn recent_topic_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for post in &self.posts {
            if !ids.contains(&post.topic_id.as_str()) {
                ids.push(&post.topic_id);
            }
        }
        ids
    }
}

/// Short hex id derived from topic, caption, and timestamp.
fn post_id(topic_id: &str, caption: &str, created_at: DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(topic_id.as_bytes());
    hasher.update(caption.as_bytes());
    hasher.update(created_at.timestamp_millis().to_le_bytes());
    let digest = hasher.finalize();
    digest.iter().take(6).map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate;
    use crate::options::{GenerationConfig, Tone};
    use crate::test_helpers::sample_topic;
    use chrono::TimeZone;

    fn sample_post() -> GeneratedPost {
        generate(&sample_topic(), &GenerationConfig::default())
    }

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + seconds, 0).unwrap()
    }

    #[test]
    fn push_stores_newest_first() {
        let mut queue = PostQueue::new();
        queue.push("first", sample_post(), at(0));
        queue.push("second", sample_post(), at(1));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.posts()[0].topic_id, "second");
        assert_eq!(queue.posts()[1].topic_id, "first");
    }

    #[test]
    fn push_decorates_with_id_and_timestamp() {
        let mut queue = PostQueue::new();
        let created = at(42);
        let entry = queue.push("edge-ai", sample_post(), created);

        assert_eq!(entry.id.len(), 12);
        assert!(entry.id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(entry.created_at, created);
    }

    #[test]
    fn ids_are_stable_for_identical_input() {
        assert_eq!(
            post_id("a", "caption", at(0)),
            post_id("a", "caption", at(0))
        );
        assert_ne!(
            post_id("a", "caption", at(0)),
            post_id("a", "caption", at(1))
        );
    }

    #[test]
    fn ids_differ_across_topics_and_times() {
        let mut queue = PostQueue::new();
        let a = queue.push("a", sample_post(), at(0)).id.clone();
        let b = queue.push("b", sample_post(), at(0)).id.clone();
        let c = queue.push("a", sample_post(), at(1)).id.clone();
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn copied_flag_lifecycle() {
        let mut queue = PostQueue::new();
        let first = queue.push("a", sample_post(), at(0)).id.clone();
        let second = queue.push("b", sample_post(), at(1)).id.clone();

        assert!(!queue.is_copied(&first));
        assert!(queue.mark_copied(&first));
        assert!(queue.is_copied(&first));

        // Acknowledgment moves, one post at a time
        assert!(queue.mark_copied(&second));
        assert!(queue.is_copied(&second));
        assert!(!queue.is_copied(&first));

        queue.clear_copied();
        assert!(!queue.is_copied(&second));
    }

    #[test]
    fn mark_copied_rejects_unknown_id() {
        let mut queue = PostQueue::new();
        queue.push("a", sample_post(), at(0));
        assert!(!queue.mark_copied("not-a-post"));
    }

    #[test]
    fn recent_topic_ids_are_unique_in_queue_order() {
        let topic = sample_topic();
        let mut queue = PostQueue::new();
        let configs = [
            GenerationConfig::default(),
            GenerationConfig {
                tone: Tone::Playful,
                ..GenerationConfig::default()
            },
        ];
        queue.push("alpha", generate(&topic, &configs[0]), at(0));
        queue.push("beta", generate(&topic, &configs[1]), at(1));
        queue.push("alpha", generate(&topic, &configs[1]), at(2));

        assert_eq!(queue.recent_topic_ids(), vec!["alpha", "beta"]);
    }

    #[test]
    fn queued_post_serializes_flattened() {
        let mut queue = PostQueue::new();
        queue.push("edge-ai", sample_post(), at(0));
        let json = serde_json::to_value(&queue.posts()[0]).unwrap();
        assert!(json.get("id").is_some());
        assert!(json.get("caption").is_some());
        assert!(json.get("posting_time").is_some());
    }
}
