use super::*;

#[test]
fn plain_text_becomes_paragraph() {
    assert_eq!(render_markdown_html("hello"), "<p>hello</p>\n");
}

#[test]
fn emphasis_and_code_are_rendered() {
    let html = render_markdown_html("**bold** and `code`");
    assert!(html.contains("<strong>bold</strong>"));
    assert!(html.contains("<code>code</code>"));
}

#[test]
fn lists_are_rendered() {
    let html = render_markdown_html("- one\n- two");
    assert!(html.contains("<ul>"));
    assert!(html.contains("<li>one</li>"));
}

#[test]
fn raw_html_is_dropped() {
    let html = render_markdown_html("hi <script>alert(1)</script>");
    assert!(!html.contains("<script>"));

    let block = render_markdown_html("<div onclick=\"x()\">boom</div>");
    assert!(!block.contains("onclick"));
}

#[test]
fn text_entities_are_escaped() {
    let html = render_markdown_html("a < b & c");
    assert!(html.contains("a &lt; b &amp; c"));
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(render_markdown_html(""), "");
}

#[test]
fn script_links_are_neutralized() {
    let html = render_markdown_html("[click](javascript:alert(document.cookie))");
    assert!(!html.contains("javascript:"));
    assert_eq!(html, "<p><a href=\"#\">click</a></p>\n");
}

#[test]
fn script_autolinks_and_images_are_neutralized() {
    let auto = render_markdown_html("<javascript:alert(1)>");
    assert!(!auto.contains("href=\"javascript:"));

    let image = render_markdown_html("![x](data:image/svg+xml;base64,PHN2Zz4=)");
    assert!(!image.contains("data:"));
    assert!(image.contains("src=\"#\""));
}

#[test]
fn mixed_case_scheme_is_neutralized() {
    let html = render_markdown_html("[x](JaVaScRiPt:alert(1))");
    assert!(!html.to_ascii_lowercase().contains("javascript:"));
}

#[test]
fn web_and_relative_links_are_kept() {
    let html = render_markdown_html("[a](https://example.com/x) [b](/docs) [c](mailto:me@example.com)");
    assert!(html.contains("href=\"https://example.com/x\""));
    assert!(html.contains("href=\"/docs\""));
    assert!(html.contains("href=\"mailto:me@example.com\""));
}

#[test]
fn url_allowlist() {
    assert!(is_allowed_url("http://example.com"));
    assert!(is_allowed_url("HTTPS://example.com"));
    assert!(is_allowed_url("page.html"));
    assert!(is_allowed_url("./a:b"));
    assert!(is_allowed_url("?q=a:b"));
    assert!(!is_allowed_url("javascript:alert(1)"));
    assert!(!is_allowed_url("  vbscript:x"));
    assert!(!is_allowed_url("data:text/html,hi"));
}
