use super::*;

#[test]
fn renders_basic_markdown() {
    let html = render_markdown("**Bold** claim\n\n- one\n- two");
    assert!(html.contains("<strong>Bold</strong>"));
    assert!(html.contains("<li>one</li>"));
}

#[test]
fn escapes_inline_html() {
    let html = render_markdown("hello <script>alert(1)</script>");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn escapes_html_blocks() {
    let html = render_markdown("<div onclick=\"x()\">hi</div>");
    assert!(!html.contains("<div"));
    assert!(html.contains("&lt;div"));
}

#[test]
fn empty_source_renders_nothing() {
    assert_eq!(render_markdown(""), "");
}

#[test]
fn script_links_are_neutralized() {
    let html = render_markdown("[click](javascript:alert(document.cookie))");
    assert!(!html.contains("javascript:"));
    assert!(html.contains(r##"<a href="#">click</a>"##));
}

#[test]
fn obfuscated_and_image_schemes_are_neutralized() {
    let html = render_markdown("[a](JaVa\tScRiPt:alert(1)) ![b](data:image/svg+xml;base64,AAAA)");
    assert!(!html.to_lowercase().contains("javascript"));
    assert!(!html.contains("data:"));
    assert!(html.contains(r##"src="#""##));
}

#[test]
fn web_mail_and_relative_links_are_kept() {
    let html = render_markdown("[w](https://who.int/report) [m](mailto:desk@example.com) [r](/claims/101) [q](?page=2)");
    assert!(html.contains(r#"href="https://who.int/report""#));
    assert!(html.contains(r#"href="mailto:desk@example.com""#));
    assert!(html.contains(r#"href="/claims/101""#));
    assert!(html.contains(r#"href="?page=2""#));
}

#[test]
fn url_check_ignores_colons_after_the_path() {
    assert!(is_safe_url("/search?q=a:b"));
    assert!(is_safe_url("notes/time:12"));
    assert!(!is_safe_url("vbscript:msgbox"));
    assert!(!is_safe_url(" javascript:x"));
}
