//! Markdown → HTML 変換
//!
//! レスポンスのMarkdownは信頼できない入力として扱う:
//! - 埋め込みHTMLはエスケープしてテキストとして表示
//! - リンク/画像URLは安全なスキーム以外を空にする

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// 許可するURLスキーム（相対URLは常に許可）
const SAFE_SCHEMES: [&str; 6] = ["http", "https", "mailto", "irc", "ircs", "xmpp"];

/// MarkdownをHTMLに変換
///
/// # Examples
/// ```
/// use docparser_common::render_markdown;
///
/// assert_eq!(render_markdown("# H"), "<h1>H</h1>\n");
/// ```
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).map(sanitize);

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

fn sanitize(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        CowStr::Borrowed("")
    }
}

fn is_safe_url(url: &str) -> bool {
    let Some(colon) = url.find(':') else {
        return true;
    };
    let scheme = &url[..colon];

    // `:` より前に / ? # があればスキームではない
    if scheme.contains(['/', '?', '#']) {
        return true;
    }

    SAFE_SCHEMES.iter().any(|s| scheme.eq_ignore_ascii_case(s))
}
