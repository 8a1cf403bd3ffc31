//! String helpers for asserting on rendered HTML.

/// Number of non-overlapping occurrences of `needle`.
pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Values of every `attr="..."` occurrence, in document order.
pub fn attr_values(html: &str, attr: &str) -> Vec<String> {
    let marker = format!("{}=\"", attr);
    html.match_indices(&marker)
        .filter_map(|(idx, _)| {
            let rest = &html[idx + marker.len()..];
            rest.find('"').map(|end| rest[..end].to_string())
        })
        .collect()
}

/// `(href, text)` of every anchor tagged `data-nav="{scope}"`, in order.
pub fn anchors_in(html: &str, scope: &str) -> Vec<(String, String)> {
    let marker = format!("data-nav=\"{}\"", scope);
    html.match_indices(&marker)
        .filter_map(|(idx, _)| {
            let rest = &html[idx..];
            let tag_end = rest.find('>')?;
            let href = attr_values(&rest[..tag_end], "href").into_iter().next()?;
            let body = &rest[tag_end + 1..];
            let text = &body[..body.find("</a>")?];
            Some((href, text.replace("<!>", "").trim().to_string()))
        })
        .collect()
}

#[test]
fn helpers_parse_simple_markup() {
    let html = r##"<a data-nav="bar" href="#home" class="nav-link">Home</a><a data-nav="bar" href="#about" class="nav-link">About</a>"##;
    assert_eq!(count(html, "data-nav="), 2);
    assert_eq!(attr_values(html, "href"), ["#home", "#about"]);
    assert_eq!(
        anchors_in(html, "bar"),
        vec![
            ("#home".to_string(), "Home".to_string()),
            ("#about".to_string(), "About".to_string())
        ]
    );
}
