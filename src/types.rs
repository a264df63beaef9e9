//! Common types used throughout tweet-history
//!
//! Posts as the timeline endpoint returns them, the page wrapper the
//! fetcher hands to the pagination engine, and the endpoint constants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Endpoints
// ============================================================================

/// Default API host
pub const DEFAULT_API_BASE: &str = "https://api.twitter.com";

/// Application-only token endpoint, relative to the API host
pub const TOKEN_PATH: &str = "/oauth2/token";

/// User timeline endpoint, relative to the API host
pub const USER_TIMELINE_PATH: &str = "/1.1/statuses/user_timeline.json";

/// Largest page the timeline endpoint will return
pub const MAX_PAGE_SIZE: u32 = 200;

/// Timestamp layout used by `created_at`
const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

// ============================================================================
// Post
// ============================================================================

/// A single post from a user timeline
///
/// Only `id` is interpreted by the pagination engine. Everything else is
/// passed through to the sink unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Post {
    /// Post id, strictly increasing with recency
    pub id: u64,

    /// Creation timestamp as sent by the platform
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,

    /// Full text (requested with `tweet_mode=extended`)
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_text: String,

    /// Whether the platform flagged the text as truncated
    #[serde(default, deserialize_with = "null_as_default")]
    pub truncated: bool,

    /// Like count, 0 when the platform sends none
    #[serde(default, deserialize_with = "null_as_default")]
    pub favorite_count: u64,

    /// Repost count
    #[serde(default, deserialize_with = "null_as_default")]
    pub retweet_count: u64,

    /// Language tag, empty when undetermined
    #[serde(default, deserialize_with = "null_as_default")]
    pub lang: String,

    /// Id of the post this one replies to
    #[serde(default)]
    pub in_reply_to_status_id_str: Option<String>,

    /// Screen name of the user this one replies to
    #[serde(default)]
    pub in_reply_to_screen_name: Option<String>,
}

impl Post {
    /// Create a post with only an id and text
    pub fn new(id: u64, full_text: impl Into<String>) -> Self {
        Self {
            id,
            full_text: full_text.into(),
            ..Default::default()
        }
    }

    /// Parse `created_at`, if it is in the platform format
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_str(&self.created_at, CREATED_AT_FORMAT)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Nullable platform fields decode to their default instead of failing
/// the whole page
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Page
// ============================================================================

/// One response from the timeline endpoint, newest post first
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Page(Vec<Post>);

impl Page {
    /// Wrap posts that are already in newest-first order
    pub fn new(posts: Vec<Post>) -> Self {
        Self(posts)
    }

    /// First (newest) post
    pub fn newest(&self) -> Option<&Post> {
        self.0.first()
    }

    /// Last (oldest) post
    pub fn oldest(&self) -> Option<&Post> {
        self.0.last()
    }

    /// Number of posts
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the page has no posts
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Posts in page order
    pub fn posts(&self) -> &[Post] {
        &self.0
    }

    /// Take the posts out of the page
    pub fn into_posts(self) -> Vec<Post> {
        self.0
    }

    /// Ids in page order
    pub fn ids(&self) -> Vec<u64> {
        self.0.iter().map(|p| p.id).collect()
    }
}

impl From<Vec<Post>> for Page {
    fn from(posts: Vec<Post>) -> Self {
        Self(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_deserialize_timeline_fields() {
        let post: Post = serde_json::from_value(json!({
            "created_at": "Wed Oct 10 20:19:24 +0000 2018",
            "id": 1_050_118_621_198_921_728_u64,
            "id_str": "1050118621198921728",
            "full_text": "To make room for more expression",
            "truncated": false,
            "favorite_count": 12,
            "retweet_count": 3,
            "lang": "en",
            "in_reply_to_status_id_str": null,
            "in_reply_to_screen_name": null,
            "entities": {"hashtags": []}
        }))
        .unwrap();

        assert_eq!(post.id, 1_050_118_621_198_921_728);
        assert_eq!(post.full_text, "To make room for more expression");
        assert_eq!(post.favorite_count, 12);
        assert_eq!(post.retweet_count, 3);
        assert_eq!(post.lang, "en");
        assert!(post.in_reply_to_status_id_str.is_none());
    }

    #[test]
    fn test_post_reply_fields() {
        let post: Post = serde_json::from_value(json!({
            "id": 10,
            "in_reply_to_status_id_str": "9",
            "in_reply_to_screen_name": "someone"
        }))
        .unwrap();

        assert_eq!(post.in_reply_to_status_id_str.as_deref(), Some("9"));
        assert_eq!(post.in_reply_to_screen_name.as_deref(), Some("someone"));
        assert!(post.full_text.is_empty());
    }

    #[test]
    fn test_post_null_fields_use_defaults() {
        let page: Page = serde_json::from_str(
            r#"[{"id":100,"full_text":"a","lang":null,"favorite_count":null,"created_at":null},
                {"id":99,"full_text":"b","lang":"en","retweet_count":null,"truncated":null}]"#,
        )
        .unwrap();

        assert_eq!(page.ids(), vec![100, 99]);
        let newest = page.newest().unwrap();
        assert_eq!(newest.lang, "");
        assert_eq!(newest.favorite_count, 0);
        assert!(newest.created_at.is_empty());
        let oldest = page.oldest().unwrap();
        assert_eq!(oldest.lang, "en");
        assert_eq!(oldest.retweet_count, 0);
        assert!(!oldest.truncated);
    }

    #[test]
    fn test_post_created_at_utc() {
        let mut post = Post::new(1, "hi");
        post.created_at = "Wed Oct 10 20:19:24 +0000 2018".to_string();
        let ts = post.created_at_utc().unwrap();
        assert_eq!(ts.to_rfc3339(), "2018-10-10T20:19:24+00:00");

        post.created_at = "yesterday".to_string();
        assert!(post.created_at_utc().is_none());
    }

    #[test]
    fn test_page_from_json_array() {
        let page: Page = serde_json::from_value(json!([
            {"id": 100}, {"id": 99}, {"id": 98}
        ]))
        .unwrap();

        assert_eq!(page.len(), 3);
        assert_eq!(page.newest().map(|p| p.id), Some(100));
        assert_eq!(page.oldest().map(|p| p.id), Some(98));
        assert_eq!(page.ids(), vec![100, 99, 98]);
    }

    #[test]
    fn test_empty_page() {
        let page = Page::default();
        assert!(page.is_empty());
        assert!(page.newest().is_none());
        assert!(page.oldest().is_none());
    }
}
