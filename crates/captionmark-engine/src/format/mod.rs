//! # Rendering Hooks
//!
//! How accepted entities become markup. [`Formatter`] has one method per
//! entity kind; each has a default anchor rendering and can be overridden
//! independently.
//!
//! ## Modules
//!
//! - **`escape`**: the five-character HTML escaper used for hrefs and labels
//! - **`truncate`**: entity-safe shortening of URL labels

pub mod escape;
pub mod truncate;

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

pub use escape::escape;
pub use truncate::truncate_display;

/// Base URLs the default renderings link to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkTargets {
    /// Prefix of a profile page; the username is appended.
    pub profile_url_base: String,
    /// Prefix of a tag page; the percent-encoded tag and a `/` are appended.
    pub tag_url_base: String,
}

impl Default for LinkTargets {
    fn default() -> Self {
        Self {
            profile_url_base: "https://instagram.com/".to_string(),
            tag_url_base: "https://instagram.com/explore/tags/".to_string(),
        }
    }
}

static DEFAULT_LINK_TARGETS: LazyLock<LinkTargets> = LazyLock::new(LinkTargets::default);

/// Renders entities during an HTML parse.
///
/// Implementors override any subset of the `format_*` methods; the rest fall
/// back to anchors pointing at [`Formatter::link_targets`].
pub trait Formatter {
    fn link_targets(&self) -> &LinkTargets {
        &DEFAULT_LINK_TARGETS
    }

    /// `full_url` always carries a scheme. `display_text` is already escaped
    /// and shortened and must be inserted as is.
    fn format_url(&self, full_url: &str, display_text: &str) -> String {
        format!(r#"<a href="{}">{display_text}</a>"#, escape(full_url))
    }

    fn format_username(&self, at_char: &str, username: &str) -> String {
        let username = escape(username);
        format!(
            r#"<a href="{}{username}">{}{username}</a>"#,
            escape(&self.link_targets().profile_url_base),
            escape(at_char),
        )
    }

    fn format_tag(&self, tag_char: &str, tag_text: &str) -> String {
        format!(
            r#"<a href="{}{}/">{}{}</a>"#,
            escape(&self.link_targets().tag_url_base),
            urlencoding::encode(tag_text),
            escape(tag_char),
            escape(tag_text),
        )
    }
}

/// The stock anchor rendering, with configurable link targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultFormatter {
    targets: LinkTargets,
}

impl DefaultFormatter {
    pub fn new(targets: LinkTargets) -> Self {
        Self { targets }
    }
}

impl Formatter for DefaultFormatter {
    fn link_targets(&self) -> &LinkTargets {
        &self.targets
    }
}

impl<F: Formatter + ?Sized> Formatter for &F {
    fn link_targets(&self) -> &LinkTargets {
        (**self).link_targets()
    }

    fn format_url(&self, full_url: &str, display_text: &str) -> String {
        (**self).format_url(full_url, display_text)
    }

    fn format_username(&self, at_char: &str, username: &str) -> String {
        (**self).format_username(at_char, username)
    }

    fn format_tag(&self, tag_char: &str, tag_text: &str) -> String {
        (**self).format_tag(tag_char, tag_text)
    }
}
