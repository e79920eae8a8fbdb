use std::borrow::Cow;

const ELLIPSIS: &str = "...";

/// Shortens already-escaped link text to `limit` characters, ellipsis included.
///
/// The cut never lands inside a character reference: if the kept text ends in
/// an unterminated `&...`, the cut moves back to before the `&`. `None` means
/// no limit.
pub fn truncate_display(text: &str, limit: Option<usize>) -> Cow<'_, str> {
    let Some(limit) = limit else {
        return Cow::Borrowed(text);
    };
    if text.chars().count() <= limit {
        return Cow::Borrowed(text);
    }

    let keep = limit.saturating_sub(ELLIPSIS.len());
    let cut = text
        .char_indices()
        .nth(keep)
        .map_or(text.len(), |(index, _)| index);
    let mut head = &text[..cut];

    if let Some(amp) = head.rfind('&') {
        match head.rfind(';') {
            Some(close) if close > amp => {}
            _ => head = &head[..amp],
        }
    }

    Cow::Owned(format!("{head}{ELLIPSIS}"))
}
