use std::fmt;

use serde::Serialize;

use crate::span::Span;

/// The three kinds of entity the scan passes recognise, in pass order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Url,
    Username,
    Hashtag,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Url => "url",
            EntityKind::Username => "username",
            EntityKind::Hashtag => "hashtag",
        })
    }
}

/// One extracted entity.
///
/// `span` is present only when the parser was built with `include_spans`.
/// URL spans cover exactly `text`; username and hashtag spans also cover the
/// leading `@`/`#` sigil.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl Entity {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl PartialEq<str> for Entity {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Entity {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

/// Everything found in one caption or comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub urls: Vec<Entity>,
    pub users: Vec<Entity>,
    /// Username the text opens with, if any.
    pub reply: Option<String>,
    pub tags: Vec<Entity>,
    /// Rendered markup; `None` when only extraction was requested.
    pub html: Option<String>,
}

impl ParseResult {
    pub fn url_texts(&self) -> Vec<&str> {
        texts(&self.urls)
    }

    pub fn user_texts(&self) -> Vec<&str> {
        texts(&self.users)
    }

    pub fn tag_texts(&self) -> Vec<&str> {
        texts(&self.tags)
    }
}

fn texts(entities: &[Entity]) -> Vec<&str> {
    entities.iter().map(Entity::as_str).collect()
}
