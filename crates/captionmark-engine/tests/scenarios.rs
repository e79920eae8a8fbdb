use captionmark_engine::{EntityError, ParseResult, Parser, ParserOptions, parse};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

#[fixture]
fn parser() -> Parser {
    Parser::new(ParserOptions::default()).unwrap()
}

struct Expected<'a> {
    urls: &'a [&'a str],
    users: &'a [&'a str],
    tags: &'a [&'a str],
    reply: Option<&'a str>,
}

fn assert_entities(result: &ParseResult, expected: &Expected<'_>) {
    assert_eq!(result.url_texts(), expected.urls, "urls");
    assert_eq!(result.user_texts(), expected.users, "users");
    assert_eq!(result.tag_texts(), expected.tags, "tags");
    assert_eq!(result.reply.as_deref(), expected.reply, "reply");
}

#[rstest]
#[case(
    "Hello @jane_doe check out #sunset http://example.com/a.b",
    Expected { urls: &["http://example.com/a.b"], users: &["jane_doe"], tags: &["sunset"], reply: None }
)]
#[case(
    "@bob.. great shot",
    Expected { urls: &[], users: &["bob"], tags: &[], reply: Some("bob") }
)]
#[case(
    "www.o.com",
    Expected { urls: &[], users: &[], tags: &[], reply: None }
)]
#[case(
    "@reply_target hi!",
    Expected { urls: &[], users: &["reply_target"], tags: &[], reply: Some("reply_target") }
)]
#[case(
    "love this www.x.com and q.com",
    Expected { urls: &["www.x.com"], users: &[], tags: &[], reply: None }
)]
#[case(
    "HTTP://EXAMPLE.COM rocks",
    Expected { urls: &["HTTP://EXAMPLE.COM"], users: &[], tags: &[], reply: None }
)]
#[case(
    "mail me at foo@bar.com",
    Expected { urls: &[], users: &[], tags: &[], reply: None }
)]
#[case(
    "@bob/friends are here",
    Expected { urls: &[], users: &[], tags: &[], reply: Some("bob") }
)]
#[case(
    "ignore @.hidden but @shown. ok",
    Expected { urls: &[], users: &["shown"], tags: &[], reply: None }
)]
#[case(
    "\u{FF20}wide and \u{FF03}wide2 #caf\u{e9}",
    Expected { urls: &[], users: &["wide"], tags: &["wide2", "caf\u{e9}"], reply: Some("wide") }
)]
#[case(
    "www.example.com@bob",
    Expected { urls: &["www.example.com"], users: &[], tags: &[], reply: None }
)]
#[case(
    "www.-foo.com and www...com",
    Expected { urls: &[], users: &[], tags: &[], reply: None }
)]
#[case(
    "",
    Expected { urls: &[], users: &[], tags: &[], reply: None }
)]
fn extracts_same_entities_in_both_modes(
    parser: Parser,
    #[case] text: &str,
    #[case] expected: Expected<'static>,
) {
    let rendered = parser.parse(text);
    assert_entities(&rendered, &expected);
    assert!(rendered.html.is_some());

    let extracted = parser.extract(text);
    assert_entities(&extracted, &expected);
    assert_eq!(extracted.html, None);
}

#[rstest]
fn hashtag_in_url_is_only_extracted_without_html(parser: Parser) {
    let text = "see http://foo.com/#frag and more";

    let extracted = parser.extract(text);
    assert_eq!(extracted.url_texts(), ["http://foo.com/#frag"]);
    assert_eq!(extracted.tag_texts(), ["frag"]);

    let rendered = parser.parse(text);
    assert_eq!(rendered.url_texts(), ["http://foo.com/#frag"]);
    assert!(rendered.tags.is_empty());
    assert_eq!(
        rendered.html.as_deref(),
        Some(r#"see <a href="http://foo.com/#frag">http://foo.com/#frag</a> and more"#)
    );
}

#[rstest]
fn mention_in_url_is_only_extracted_without_html(parser: Parser) {
    let text = "check http://example.com/@bob now";

    assert_eq!(parser.extract(text).user_texts(), ["bob"]);

    let rendered = parser.parse(text);
    assert_eq!(rendered.url_texts(), ["http://example.com/@bob"]);
    assert!(rendered.users.is_empty());
}

#[rstest]
fn mention_glued_to_url_is_not_linked(parser: Parser) {
    let rendered = parser.parse("www.example.com@bob");
    assert!(rendered.users.is_empty());
    assert_eq!(
        rendered.html.as_deref(),
        Some(r#"<a href="https://www.example.com">www.example.com</a>@bob"#)
    );
}

#[rstest]
fn entities_keep_scan_order(parser: Parser) {
    let result = parser.extract("#c @z #a @y www.b.io http://a.io");
    assert_eq!(result.tag_texts(), ["c", "a"]);
    assert_eq!(result.user_texts(), ["z", "y"]);
    assert_eq!(result.url_texts(), ["www.b.io", "http://a.io"]);
}

#[test]
fn one_shot_parse_validates_options() {
    let options = ParserOptions::default().with_max_url_length(-5);
    let err = parse("www.example.com", true, &options).unwrap_err();
    assert!(matches!(err, EntityError::InvalidConfiguration { .. }));

    let result = parse("www.example.com", false, &ParserOptions::default()).unwrap();
    assert_eq!(result.url_texts(), ["www.example.com"]);
    assert_eq!(result.html, None);
}

#[test]
fn parser_is_shareable_across_threads() {
    let parser = Parser::new(ParserOptions::default().with_spans(true)).unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let parser = &parser;
                scope.spawn(move || parser.parse(&format!("#tag{i} @user{i}")))
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.join().unwrap();
            assert_eq!(result.tag_texts(), [format!("tag{i}").as_str()]);
            assert_eq!(result.user_texts(), [format!("user{i}").as_str()]);
        }
    });
}
