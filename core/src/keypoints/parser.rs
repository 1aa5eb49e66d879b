use super::input::KeypointsInput;
use regex::Regex;
use std::sync::OnceLock;

/// Left over when a blob is split on an escaped delimiter and one side was
/// nothing but the escape.
const ESCAPED_QUOTE_RESIDUE: &str = "\\\"";

/// Quote, comma, quote: literal `"`/`'` on either side, or the
/// backslash-escaped `\",\"` form.
fn blob_delimiter() -> &'static Regex {
    static DELIMITER: OnceLock<Regex> = OnceLock::new();
    DELIMITER.get_or_init(|| {
        Regex::new(r#"["'],["']|\\",\\""#).unwrap_or_else(|_| Regex::new("^$").unwrap())
    })
}

/// Normalize an `actions_keypoints` value into display-ready bullet points.
///
/// Total over its input: absent, empty, or malformed values yield an empty
/// list. Order follows the input; nothing is deduplicated.
pub fn parse_action_keypoints(input: Option<&KeypointsInput>) -> Vec<String> {
    let Some(input) = input.filter(|i| !i.is_empty()) else {
        return Vec::new();
    };

    let raw_points: Vec<&str> = match input {
        KeypointsInput::List(items) => match items.as_slice() {
            [single] if is_blob(single) => split_blob(single),
            _ => items.iter().map(String::as_str).collect(),
        },
        KeypointsInput::Text(text) if is_blob(text) => split_blob(text),
        KeypointsInput::Text(text) => text.split(',').collect(),
    };

    raw_points
        .into_iter()
        .map(clean_point)
        .filter(|p| !p.is_empty() && *p != ESCAPED_QUOTE_RESIDUE)
        .map(str::to_string)
        .collect()
}

fn is_blob(text: &str) -> bool {
    blob_delimiter().is_match(text)
}

fn split_blob(text: &str) -> Vec<&str> {
    blob_delimiter().split(text).collect()
}

// The escaped form is checked first: stripping a bare `"` off `foo\"` would
// strand the backslash.
fn clean_point(raw: &str) -> &str {
    let p = raw.trim();
    let p = p
        .strip_prefix(ESCAPED_QUOTE_RESIDUE)
        .or_else(|| p.strip_prefix(['"', '\'']))
        .unwrap_or(p);
    let p = p
        .strip_suffix(ESCAPED_QUOTE_RESIDUE)
        .or_else(|| p.strip_suffix(['"', '\'']))
        .unwrap_or(p);
    p.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> KeypointsInput {
        KeypointsInput::Text(s.to_string())
    }

    fn list(items: &[&str]) -> KeypointsInput {
        KeypointsInput::List(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn plain_comma_string_splits() {
        assert_eq!(
            parse_action_keypoints(Some(&text("a, b, c"))),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn empty_inputs_yield_nothing() {
        assert!(parse_action_keypoints(None).is_empty());
        assert!(parse_action_keypoints(Some(&text(""))).is_empty());
        assert!(parse_action_keypoints(Some(&list(&[]))).is_empty());
        assert!(parse_action_keypoints(Some(&text(" , ,, "))).is_empty());
    }

    #[test]
    fn single_element_blob_is_split() {
        let input = list(&[r#""Point one","Point two","Point three""#]);
        assert_eq!(
            parse_action_keypoints(Some(&input)),
            vec!["Point one", "Point two", "Point three"]
        );
    }

    #[test]
    fn escaped_delimiter_in_text_is_split() {
        let input = text(r#"Point A\",\"Point B"#);
        assert_eq!(
            parse_action_keypoints(Some(&input)),
            vec!["Point A", "Point B"]
        );
    }

    #[test]
    fn escaped_quotes_around_every_point_are_stripped() {
        let input = list(&[r#"\"Feed families\",\"Fund school kits\""#]);
        assert_eq!(
            parse_action_keypoints(Some(&input)),
            vec!["Feed families", "Fund school kits"]
        );
    }

    #[test]
    fn single_quoted_blob_is_split() {
        let input = text("'one','two'");
        assert_eq!(parse_action_keypoints(Some(&input)), vec!["one", "two"]);
    }

    #[test]
    fn single_quoted_blob_keeps_internal_commas() {
        let input = text("'Feed, clothe','Teach'");
        assert_eq!(
            parse_action_keypoints(Some(&input)),
            vec!["Feed, clothe", "Teach"]
        );
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(
            parse_action_keypoints(Some(&text("  first  ,second   "))),
            vec!["first", "second"]
        );
    }

    #[test]
    fn clean_sequence_is_unchanged() {
        let input = list(&["Door-to-door visits", "School materials", "Health insurance"]);
        let once = parse_action_keypoints(Some(&input));
        assert_eq!(once, vec!["Door-to-door visits", "School materials", "Health insurance"]);
        let twice = parse_action_keypoints(Some(&KeypointsInput::List(once.clone())));
        assert_eq!(once, twice);
    }

    #[test]
    fn multi_element_list_is_not_treated_as_blob() {
        let input = list(&[r#""a","b""#, "c"]);
        assert_eq!(parse_action_keypoints(Some(&input)), vec![r#"a","b"#, "c"]);
    }

    #[test]
    fn residue_and_empty_points_are_dropped() {
        let input = list(&["\"\\\"\"", "", "   ", "\\\"", "kept"]);
        assert_eq!(parse_action_keypoints(Some(&input)), vec!["kept"]);
    }

    #[test]
    fn duplicates_are_preserved_in_order() {
        assert_eq!(
            parse_action_keypoints(Some(&text("b, a, b"))),
            vec!["b", "a", "b"]
        );
    }

    #[test]
    fn single_element_without_delimiter_is_kept_whole() {
        assert_eq!(
            parse_action_keypoints(Some(&list(&["a, b"]))),
            vec!["a, b"]
        );
    }
}
