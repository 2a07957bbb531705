use chrono::NaiveDateTime;
use serde::Serialize;

/// A post as the feed presents it to a single viewer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PostView {
    pub id: i64,
    pub username: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub tags: Vec<String>,
    pub likes: i64,
    pub liked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest first.
    Latest,
    /// Most liked first; unliked posts rank last.
    Popular,
}

impl SortOrder {
    /// Unknown values mean "no sort", same as an absent parameter.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "latest" => Some(SortOrder::Latest),
            "popular" => Some(SortOrder::Popular),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    pub tag: Option<String>,
    pub sort: Option<SortOrder>,
}

impl PostQuery {
    pub fn new(tag: Option<String>, sort: Option<&str>) -> Self {
        Self {
            tag: tag.filter(|t| !t.is_empty()),
            sort: sort.and_then(SortOrder::parse),
        }
    }
}
