//! Reddit listing wire format.
//!
//! Reddit wraps everything in `Thing` envelopes: a listing is
//! `{"kind": "Listing", "data": {"children": [{"kind": "t3", "data": {...}}]}}`
//! where `t3` children are posts and `t1` children are comments. The
//! comments endpoint returns a two-element array: the post listing, then
//! the comment listing.

use serde::Deserialize;

use crate::ports::feed::FeedItem;

/// Envelope kind for a post child.
pub const KIND_POST: &str = "t3";
/// Envelope kind for a comment child.
pub const KIND_COMMENT: &str = "t1";

/// OAuth2 token endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
}

/// A listing of post `Thing`s.
#[derive(Debug, Clone, Deserialize)]
pub struct PostListing {
    pub data: PostListingData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostListingData {
    #[serde(default)]
    pub children: Vec<PostThing>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostThing {
    pub kind: String,
    pub data: Post,
}

/// The post fields the crawler cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub selftext: String,
}

impl From<Post> for FeedItem {
    fn from(post: Post) -> Self {
        FeedItem::new(post.id, post.title, post.selftext)
    }
}

/// A listing of comment `Thing`s.
///
/// Parses the post listing of the comments endpoint too: a `t3` child has
/// no `body`, which defaults to empty and is filtered out by kind anyway.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentListing {
    pub data: CommentListingData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentListingData {
    #[serde(default)]
    pub children: Vec<CommentThing>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentThing {
    pub kind: String,
    #[serde(default)]
    pub data: Comment,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_post_listing() {
        let json = r#"{
            "kind": "Listing",
            "data": {
                "children": [
                    {"kind": "t3", "data": {"id": "1abc", "title": "GME yolo", "selftext": "all in"}},
                    {"kind": "t3", "data": {"id": "1def", "title": "Daily thread"}}
                ],
                "after": "t3_1def"
            }
        }"#;

        let listing: PostListing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.data.children.len(), 2);
        assert_eq!(listing.data.children[0].data.id, "1abc");
        assert_eq!(listing.data.children[0].data.selftext, "all in");
        // selftext is optional on link posts
        assert_eq!(listing.data.children[1].data.selftext, "");
    }

    #[test]
    fn test_parse_comments_response() {
        // Two-element response: post listing first, comments second.
        let json = r#"[
            {"kind": "Listing", "data": {"children": [
                {"kind": "t3", "data": {"id": "1abc", "title": "GME yolo", "selftext": ""}}
            ]}},
            {"kind": "Listing", "data": {"children": [
                {"kind": "t1", "data": {"id": "c1", "body": "buy TSLA"}},
                {"kind": "t1", "data": {"id": "c2", "body": "paper hands"}},
                {"kind": "more", "data": {"count": 120, "children": ["c3", "c4"]}}
            ]}}
        ]"#;

        let listings: Vec<CommentListing> = serde_json::from_str(json).unwrap();
        assert_eq!(listings.len(), 2);

        let bodies: Vec<&str> = listings[1]
            .data
            .children
            .iter()
            .filter(|thing| thing.kind == KIND_COMMENT)
            .map(|thing| thing.data.body.as_str())
            .collect();
        assert_eq!(bodies, vec!["buy TSLA", "paper hands"]);
    }

    #[test]
    fn test_post_converts_to_feed_item() {
        let post = Post {
            id: "1abc".to_string(),
            title: "title".to_string(),
            selftext: "body".to_string(),
        };
        let item: FeedItem = post.into();
        assert_eq!(item.id, "1abc");
        assert_eq!(item.title, "title");
        assert_eq!(item.body, "body");
    }

    #[test]
    fn test_parse_token_response() {
        let json = r#"{"access_token": "abc123", "token_type": "bearer", "expires_in": 3600, "scope": "*"}"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "abc123");
        assert_eq!(token.expires_in, 3600);
    }
}
