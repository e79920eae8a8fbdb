use std::borrow::Cow;
use std::ops::Range;

use regex::{Captures, Regex};

use super::source_map::{SourceMap, SourceMapBuilder};
use crate::{
    disambiguate::{disambiguate_username, validate_domain},
    format::{Formatter, escape, truncate_display},
    patterns,
    result::{Entity, EntityKind},
    span::Span,
};

/// The text one pass scans and how it relates to the caller's input.
pub(crate) struct Scan<'a> {
    pub original: &'a str,
    pub input: &'a str,
    pub map: &'a SourceMap,
    pub render: bool,
    pub include_spans: bool,
}

/// A rendering pass's output, ready to be scanned by the next pass.
pub(crate) struct Rewritten {
    pub text: String,
    pub map: SourceMap,
}

/// A candidate that survived disambiguation.
struct Accepted {
    text: String,
    /// Bytes of the pass input replaced by `markup`.
    range: Range<usize>,
    /// Empty unless rendering.
    markup: String,
}

impl Scan<'_> {
    fn span_of(&self, range: Range<usize>) -> Span {
        let start = self.map.source_start(range.start);
        let end = self.map.source_end(range.end);
        Span::from_byte_range(self.original, start..end)
    }

    /// One left-to-right, non-overlapping substitution sweep.
    ///
    /// Candidates overlapping markup from an earlier pass are left alone.
    /// Returns the rewritten text only when rendering.
    fn run(
        &self,
        kind: EntityKind,
        regex: &Regex,
        entities: &mut Vec<Entity>,
        mut accept: impl FnMut(&Captures<'_>) -> Option<Accepted>,
    ) -> Option<Rewritten> {
        let mut out = String::new();
        let mut builder = SourceMapBuilder::default();
        let mut copied = 0;
        let before = entities.len();

        for caps in regex.captures_iter(self.input) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if !self.map.is_verbatim(whole.range()) {
                log::debug!(
                    "skipping {kind} candidate {:?} inside rendered markup",
                    whole.as_str()
                );
                continue;
            }
            let Some(accepted) = accept(&caps) else {
                continue;
            };

            let span = self
                .include_spans
                .then(|| self.span_of(accepted.range.clone()));
            entities.push(Entity {
                text: accepted.text,
                span,
            });

            if self.render {
                out.push_str(&self.input[copied..accepted.range.start]);
                builder.copy(self.map, copied..accepted.range.start);
                let src = self.map.source_start(accepted.range.start)
                    ..self.map.source_end(accepted.range.end);
                out.push_str(&accepted.markup);
                builder.generated(accepted.markup.len(), src);
                copied = accepted.range.end;
            }
        }

        log::trace!("{kind} pass accepted {} entities", entities.len() - before);

        if !self.render {
            return None;
        }
        out.push_str(&self.input[copied..]);
        builder.copy(self.map, copied..self.input.len());
        Some(Rewritten {
            text: out,
            map: builder.finish(),
        })
    }
}

/// `www.` links get `https://` for the href; links with a scheme keep theirs.
fn with_scheme<'a>(scheme: &str, url: &'a str) -> Cow<'a, str> {
    if scheme.to_ascii_lowercase().starts_with("http") {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("https://{url}"))
    }
}

pub(crate) fn scan_urls<F: Formatter>(
    scan: &Scan<'_>,
    formatter: &F,
    max_url_length: Option<usize>,
    urls: &mut Vec<Entity>,
) -> Option<Rewritten> {
    scan.run(EntityKind::Url, &patterns::URL, urls, |caps| {
        let url = caps.name("url")?;
        let domain = caps.name("domain")?;
        if let Err(reason) = validate_domain(domain.as_str()) {
            log::debug!("rejected url candidate {:?}: {reason}", url.as_str());
            return None;
        }

        let markup = if scan.render {
            let full_url = with_scheme(caps.name("scheme")?.as_str(), url.as_str());
            let display = escape(url.as_str());
            formatter.format_url(&full_url, &truncate_display(&display, max_url_length))
        } else {
            String::new()
        };

        Some(Accepted {
            text: url.as_str().to_owned(),
            range: url.range(),
            markup,
        })
    })
}

pub(crate) fn scan_usernames<F: Formatter>(
    scan: &Scan<'_>,
    formatter: &F,
    users: &mut Vec<Entity>,
) -> Option<Rewritten> {
    scan.run(EntityKind::Username, &patterns::USERNAME, users, |caps| {
        let whole = caps.get(0)?;
        // the `\B` saw the rewritten text; re-check it against the caller's
        let start = scan.map.source_start(whole.start());
        if scan.original[..start]
            .chars()
            .next_back()
            .is_some_and(patterns::is_word_char)
        {
            log::debug!(
                "rejected username candidate {:?} after a word character",
                whole.as_str()
            );
            return None;
        }

        // `@user/list` mentions are recognised but never linked
        if caps.name("list").is_some() {
            log::debug!("passing through list mention {:?}", whole.as_str());
            return None;
        }

        let name = caps.name("name")?;
        let Some(username) = disambiguate_username(name.as_str()) else {
            log::debug!("rejected username candidate {:?}", whole.as_str());
            return None;
        };

        let at_char = &scan.input[whole.start()..name.start()];
        let markup = if scan.render {
            formatter.format_username(at_char, username.name)
        } else {
            String::new()
        };

        // the trailing dots stay in the text, right after the link
        Some(Accepted {
            text: username.name.to_owned(),
            range: whole.start()..name.start() + username.name.len(),
            markup,
        })
    })
}

pub(crate) fn scan_hashtags<F: Formatter>(
    scan: &Scan<'_>,
    formatter: &F,
    tags: &mut Vec<Entity>,
) -> Option<Rewritten> {
    scan.run(EntityKind::Hashtag, &patterns::HASHTAG, tags, |caps| {
        let whole = caps.get(0)?;
        let sigil = caps.name("sigil")?;
        let tag = caps.name("tag")?;

        let markup = if scan.render {
            formatter.format_tag(sigil.as_str(), tag.as_str())
        } else {
            String::new()
        };

        Some(Accepted {
            text: tag.as_str().to_owned(),
            range: whole.range(),
            markup,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::DefaultFormatter;

    #[test]
    fn scheme_detection_ignores_case() {
        assert_eq!(with_scheme("HTTP://", "HTTP://A.COM"), "HTTP://A.COM");
        assert_eq!(with_scheme("https://", "https://a.com"), "https://a.com");
        assert_eq!(with_scheme("WWW.", "WWW.a.com"), "https://WWW.a.com");
    }

    #[test]
    fn extraction_pass_does_not_rewrite() {
        let text = "#one #two";
        let map = SourceMap::identity(text.len());
        let scan = Scan {
            original: text,
            input: text,
            map: &map,
            render: false,
            include_spans: true,
        };
        let mut tags = vec![];
        let rewritten = scan_hashtags(&scan, &DefaultFormatter::default(), &mut tags);

        assert!(rewritten.is_none());
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[1].span, Some(Span::new(5, 9)));
    }

    #[test]
    fn rendering_pass_maps_back_to_original() {
        let text = "#a @bob";
        let map = SourceMap::identity(text.len());
        let formatter = DefaultFormatter::default();
        let mut tags = vec![];
        let first = Scan {
            original: text,
            input: text,
            map: &map,
            render: true,
            include_spans: true,
        };
        let after_tags = scan_hashtags(&first, &formatter, &mut tags).unwrap();

        let second = Scan {
            original: text,
            input: &after_tags.text,
            map: &after_tags.map,
            render: true,
            include_spans: true,
        };
        let mut users = vec![];
        let after_users = scan_usernames(&second, &formatter, &mut users).unwrap();

        assert_eq!(users[0].span, Some(Span::new(3, 7)));
        let link = r#"<a href="https://instagram.com/bob">@bob</a>"#;
        assert!(after_users.text.ends_with(link));
    }
}
