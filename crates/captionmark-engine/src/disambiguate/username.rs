/// A username accepted out of a mention candidate.
///
/// `name + trailing` always reproduces the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Username<'a> {
    pub name: &'a str,
    /// Dots (and anything after a `..`) that belong to the surrounding text.
    pub trailing: &'a str,
}

/// Splits a mention candidate (without its `@`) into a username and the text
/// that follows it.
///
/// - A candidate starting with `.` is not a username at all.
/// - Trailing dots are handed back: `bob.` is `bob` followed by `.`.
/// - A `..` run ends the name: `foo..bar` is `foo` followed by `..bar`.
pub fn disambiguate_username(candidate: &str) -> Option<Username<'_>> {
    if candidate.is_empty() || candidate.starts_with('.') {
        return None;
    }

    let stripped = candidate.trim_end_matches('.');
    let name = match stripped.find("..") {
        Some(index) if index > 0 => &stripped[..index],
        _ => stripped,
    };

    Some(Username {
        name,
        trailing: &candidate[name.len()..],
    })
}
