//! # Pattern Library
//!
//! Candidate patterns for each entity kind. They deliberately over-match:
//! leading-dot usernames, `foo..bar` usernames and unregistered one-letter
//! domains all get through here and are rejected by [`crate::disambiguate`].
//!
//! All patterns are compiled once, on first use, and shared process-wide.

use std::sync::LazyLock;

use regex::Regex;

/// ASCII `@` or full-width `＠`.
pub const AT_SIGNS: &str = "[@\u{FF20}]";

/// ASCII `#` or full-width `＃`.
pub const HASH_SIGNS: &str = "[#\u{FF03}]";

/// Word characters plus the accented Latin-1 letters (no `×` or `÷`).
const UTF_CHARS: &str = r"a-z0-9_\xC0-\xD6\xD8-\xF6\xF8-\xFF";

/// Space plus the Unicode space separators allowed before a reply mention.
const SPACES: &str = "[\u{0020}\u{00A0}\u{1680}\u{180E}\u{2002}-\u{202F}\u{205F}\u{2060}\u{3000}]";

/// A single character that may precede a URL, or the start of text.
const PRE_CHARS: &str = r#"[^/"':!=]|^|:"#;

const DOMAIN_CHARS: &str = r"(?:[.-]|[^\s_!./])+\.[a-z]{2,}(?::[0-9]+)?";

const QUERY_CHARS: &str = r"[a-z0-9!*'();:&=+$/%#\[\]\-_.,~]";

/// Last character of a query, so `?a=1.` leaves the period behind.
const QUERY_ENDING_CHARS: &str = r"[a-z0-9_&=#]";

fn path_chars() -> String {
    format!(r"(?:[.,]?[{UTF_CHARS}!*'();:=+$/%#\[\]\-,~@])")
}

/// Last character of a path: `)` for Wikipedia links, `=#/` for join artifacts.
/// A single `.` or `,` may sit before it, but never trail the path.
fn path_ending_chars() -> String {
    format!(r"(?:[.,]?[{UTF_CHARS})=#/])")
}

/// `@name`, optionally followed by a `/list` segment. Must not follow a word
/// character, so `foo@bar` is not a mention.
pub static USERNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\B{AT_SIGNS}(?P<name>[A-Za-z0-9_.]{{1,30}})(?P<list>/[A-Za-z][A-Za-z0-9\x80-\xFF-]{{0,79}})?"
    ))
    .expect("Invalid username regex")
});

static WORD_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\w\z").expect("Invalid word regex"));

/// Whether `c` is a word character in the sense of the `\B` used by [`USERNAME`].
pub fn is_word_char(c: char) -> bool {
    WORD_CHAR.is_match(c.encode_utf8(&mut [0; 4]))
}

/// A mention at the very start of the text, after optional spaces.
pub static REPLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?:{SPACES})*{AT_SIGNS}(?P<name>[A-Za-z0-9_]{{1,20}})"
    ))
    .expect("Invalid reply regex")
});

pub static HASHTAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?P<sigil>{HASH_SIGNS})(?P<tag>[0-9A-Za-z_]+[A-Z{UTF_CHARS}]*)"
    ))
    .expect("Invalid hashtag regex")
});

/// `pre` is the consumed leading character (re-emitted, never part of the
/// entity), `url` the entity itself, `scheme` either `http(s)://` or `www.`.
pub static URL: LazyLock<Regex> = LazyLock::new(|| {
    let path = path_chars();
    let path_end = path_ending_chars();
    Regex::new(&format!(
        r"(?i)(?P<pre>{PRE_CHARS})(?P<url>(?P<scheme>https?://|www\.)(?P<domain>{DOMAIN_CHARS})(?:/(?:{path}*{path_end})?)?(?:\?{QUERY_CHARS}*{QUERY_ENDING_CHARS})?)"
    ))
    .expect("Invalid URL regex")
});
