//! Text fragments harvested from a feed.

use std::fmt;

/// Where a piece of text came from within a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Title,
    Body,
    Comment,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Title => write!(f, "title"),
            Provenance::Body => write!(f, "body"),
            Provenance::Comment => write!(f, "comment"),
        }
    }
}

/// One unit of free text pulled from a post, tagged with its origin.
///
/// Fragments are transient: they live only long enough to be scanned for
/// ticker symbols and are never persisted. The post id is carried for
/// diagnostics and potential future weighting; ranking ignores it.
#[derive(Debug, Clone)]
pub struct TextFragment {
    pub post_id: String,
    pub provenance: Provenance,
    pub text: String,
}

impl TextFragment {
    pub fn new(
        post_id: impl Into<String>,
        provenance: Provenance,
        text: impl Into<String>,
    ) -> Self {
        Self {
            post_id: post_id.into(),
            provenance,
            text: text.into(),
        }
    }

    pub fn title(post_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(post_id, Provenance::Title, text)
    }

    pub fn body(post_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(post_id, Provenance::Body, text)
    }

    pub fn comment(post_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(post_id, Provenance::Comment, text)
    }
}
