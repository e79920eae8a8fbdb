use crate::patterns::REPLY;

/// The username a caption opens with, looked up on the raw text only.
///
/// At most 20 word characters are captured; dot rules do not apply here.
pub fn detect_reply(text: &str) -> Option<String> {
    REPLY
        .captures(text)
        .and_then(|caps| caps.name("name"))
        .map(|name| name.as_str().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("@reply_target hi!", Some("reply_target"))]
    #[case("   @bob", Some("bob"))]
    #[case("\u{00A0}\u{FF20}Bob_2 yes", Some("Bob_2"))]
    #[case("@bob.smith", Some("bob"))]
    #[case("hi @bob", None)]
    #[case("\t@bob", None)]
    #[case("", None)]
    fn detects_leading_mention(#[case] text: &str, #[case] expected: Option<&str>) {
        assert_eq!(detect_reply(text).as_deref(), expected);
    }

    #[test]
    fn caps_at_twenty_characters() {
        let text = format!("@{} hey", "a".repeat(25));
        assert_eq!(detect_reply(&text), Some("a".repeat(20)));
    }
}
