//! `{token}` placeholders in message templates.
//!
//! A placeholder is `{` followed by one or more lowercase ASCII letters,
//! digits or underscores, then `}`. Anything else in braces is plain text.
//! Rendering replaces known tokens and leaves unknown ones verbatim.

/// One piece of a template: literal text or a placeholder name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Placeholder(&'a str),
}

fn is_token(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}

/// Split `text` into literal and placeholder segments.
#[must_use]
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = text;

    while let Some((before, after_open)) = rest.split_once('{') {
        if !before.is_empty() {
            out.push(Segment::Text(before));
        }
        match after_open.split_once('}') {
            Some((name, after_close)) if is_token(name) => {
                out.push(Segment::Placeholder(name));
                rest = after_close;
            }
            _ => {
                out.push(Segment::Text("{"));
                rest = after_open;
            }
        }
    }

    if !rest.is_empty() {
        out.push(Segment::Text(rest));
    }
    out
}

/// Placeholder names in order of first appearance, without duplicates.
#[must_use]
pub fn placeholders(text: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for segment in segments(text) {
        if let Segment::Placeholder(name) = segment {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

/// Substitute `values` into `text`.
///
/// Tokens without a value are kept as `{name}`.
#[must_use]
pub fn render(text: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in segments(text) {
        match segment {
            Segment::Text(literal) => out.push_str(literal),
            Segment::Placeholder(name) => {
                match values.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIPPING: &str =
        "Great news {customer_name}! Your order #{order_id} is on its way! Track: {tracking_url}";

    #[test]
    fn test_placeholders_in_order() {
        assert_eq!(
            placeholders(SHIPPING),
            vec!["customer_name", "order_id", "tracking_url"]
        );
    }

    #[test]
    fn test_placeholders_deduplicated() {
        assert_eq!(placeholders("{a} and {b} and {a}"), vec!["a", "b"]);
    }

    #[test]
    fn test_no_placeholders() {
        assert!(placeholders("Welcome to MISS Accessories!").is_empty());
    }

    #[test]
    fn test_render_known_and_unknown() {
        let rendered = render(
            SHIPPING,
            &[("customer_name", "Sarah"), ("order_id", "ORD-001")],
        );
        assert_eq!(
            rendered,
            "Great news Sarah! Your order #ORD-001 is on its way! Track: {tracking_url}"
        );
    }

    #[test]
    fn test_braces_that_are_not_tokens() {
        assert_eq!(segments("{}"), vec![Segment::Text("{"), Segment::Text("}")]);
        assert!(placeholders("{Customer Name}").is_empty());
        assert_eq!(render("{{name}}", &[("name", "Amy")]), "{Amy}");
        assert_eq!(render("open { only", &[]), "open { only");
    }
}
