use chrono::NaiveDateTime;

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct PostKey(pub String);

/// Opaque pagination token handed back by the content API.
/// Absence means there are no further pages.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Cursor(pub String);

#[derive(Debug, Clone, PartialEq)]
pub struct PostSummary {
    pub key: PostKey,
    pub publication_date: Option<NaiveDateTime>,
    pub title: String,
    pub subtitle: String,
    pub author: String,
}

/// One page of summaries as returned by the content API.
#[derive(Debug)]
pub struct PostPage {
    pub items: Vec<PostSummary>,
    pub next_cursor: Option<Cursor>,
}

/// Plain text of a body block, already sanitized by the content source.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock(pub String);

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: String,
    pub body: Vec<TextBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostDocument {
    pub publication_date: Option<NaiveDateTime>,
    pub title: String,
    pub banner_url: String,
    pub author: String,
    pub sections: Vec<Section>,
}
