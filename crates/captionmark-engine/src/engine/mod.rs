//! # Scan/Rewrite Engine
//!
//! Three ordered passes (URLs, then usernames, then hashtags) plus an
//! independent reply lookup.
//!
//! ## Composition
//!
//! When rendering, each pass scans the previous pass's output, and markup an
//! earlier pass generated is opaque to later ones: a `#fragment` inside a
//! rendered URL is not turned into a tag. When only extracting, every pass
//! scans the untouched input, so that same `#fragment` *is* reported as a tag.
//!
//! ## Spans
//!
//! Every rendering pass returns a source map alongside its text, so spans
//! are always reported against the caller's input.
//!
//! All per-call state lives on the stack of [`Parser::parse_with`]; a parser
//! can be shared freely between threads.

mod passes;
pub mod reply;
mod source_map;

use crate::{
    error::EntityError,
    format::{DefaultFormatter, Formatter},
    options::ParserOptions,
    result::ParseResult,
};

use passes::{Scan, scan_hashtags, scan_urls, scan_usernames};
use reply::detect_reply;
use source_map::SourceMap;

/// Extracts entities from captions and optionally renders them as links.
#[derive(Debug, Clone)]
pub struct Parser<F = DefaultFormatter> {
    max_url_length: Option<usize>,
    include_spans: bool,
    formatter: F,
}

impl Parser {
    pub fn new(options: ParserOptions) -> Result<Self, EntityError> {
        Self::with_formatter(options, DefaultFormatter::default())
    }
}

impl<F: Formatter> Parser<F> {
    pub fn with_formatter(options: ParserOptions, formatter: F) -> Result<Self, EntityError> {
        Ok(Self {
            max_url_length: options.url_length_limit()?,
            include_spans: options.include_spans,
            formatter,
        })
    }

    pub fn include_spans(&self) -> bool {
        self.include_spans
    }

    /// Extracts all entities and renders HTML.
    pub fn parse(&self, text: &str) -> ParseResult {
        self.parse_with(text, true)
    }

    /// Extracts all entities without rendering.
    pub fn extract(&self, text: &str) -> ParseResult {
        self.parse_with(text, false)
    }

    pub fn parse_with(&self, text: &str, render_html: bool) -> ParseResult {
        let mut result = ParseResult {
            reply: detect_reply(text),
            ..ParseResult::default()
        };
        let identity = SourceMap::identity(text.len());

        let after_urls = scan_urls(
            &self.scan(text, text, &identity, render_html),
            &self.formatter,
            self.max_url_length,
            &mut result.urls,
        );

        let (input, map) = match &after_urls {
            Some(prev) => (prev.text.as_str(), &prev.map),
            None => (text, &identity),
        };
        let after_users = scan_usernames(
            &self.scan(text, input, map, render_html),
            &self.formatter,
            &mut result.users,
        );

        let (input, map) = match &after_users {
            Some(prev) => (prev.text.as_str(), &prev.map),
            None => (text, &identity),
        };
        let after_tags = scan_hashtags(
            &self.scan(text, input, map, render_html),
            &self.formatter,
            &mut result.tags,
        );

        result.html = after_tags.map(|rewritten| rewritten.text);
        result
    }

    fn scan<'a>(
        &self,
        original: &'a str,
        input: &'a str,
        map: &'a SourceMap,
        render: bool,
    ) -> Scan<'a> {
        Scan {
            original,
            input,
            map,
            render,
            include_spans: self.include_spans,
        }
    }
}

/// One-shot convenience: validates `options`, then parses `text`.
pub fn parse(
    text: &str,
    render_html: bool,
    options: &ParserOptions,
) -> Result<ParseResult, EntityError> {
    Ok(Parser::new(*options)?.parse_with(text, render_html))
}
