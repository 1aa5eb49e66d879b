use outreach_core::keypoints::{parse_action_keypoints, KeypointsInput};

fn parse(input: KeypointsInput) -> Vec<String> {
    parse_action_keypoints(Some(&input))
}

#[test]
fn plain_comma_lists_split_on_commas() {
    for (raw, want) in [
        ("a, b, c", vec!["a", "b", "c"]),
        ("one", vec!["one"]),
        ("x,y", vec!["x", "y"]),
        ("  first  ,second   ", vec!["first", "second"]),
    ] {
        assert_eq!(parse(KeypointsInput::from(raw)), want, "input {:?}", raw);
    }
}

#[test]
fn absent_and_empty_inputs() {
    assert!(parse_action_keypoints(None).is_empty());
    assert!(parse(KeypointsInput::from("")).is_empty());
    assert!(parse(KeypointsInput::List(vec![])).is_empty());
}

#[test]
fn blob_shapes_from_the_api() {
    let one_element = KeypointsInput::List(vec![
        r#""Point one","Point two","Point three""#.to_string(),
    ]);
    assert_eq!(parse(one_element), vec!["Point one", "Point two", "Point three"]);

    let escaped = KeypointsInput::from(r#"Point A\",\"Point B"#);
    assert_eq!(parse(escaped), vec!["Point A", "Point B"]);
}

#[test]
fn decoded_from_json_body() {
    let v: serde_json::Value =
        serde_json::from_str(r#"["\"Weekly workshops\",\"Annual celebration\""]"#).unwrap();
    let input = KeypointsInput::from_json(&v);
    assert_eq!(
        parse_action_keypoints(input.as_ref()),
        vec!["Weekly workshops", "Annual celebration"]
    );
}

#[test]
fn reparsing_clean_output_is_a_no_op() {
    let first = parse(KeypointsInput::from("visits, food , kits"));
    let second = parse(KeypointsInput::List(first.clone()));
    assert_eq!(first, second);
}

#[test]
fn outputs_never_contain_empty_or_residue() {
    let inputs = vec![
        KeypointsInput::from(r#"\",\"a\",\"\",\"b"#),
        KeypointsInput::from(",,,"),
        KeypointsInput::List(vec!["\\\"".to_string(), " ".to_string()]),
        KeypointsInput::List(vec![r#""","a","""#.to_string()]),
    ];
    for input in inputs {
        for p in parse(input.clone()) {
            assert!(!p.is_empty(), "{:?}", input);
            assert_ne!(p, "\\\"", "{:?}", input);
        }
    }
}

#[test]
fn order_follows_input() {
    let out = parse(KeypointsInput::from(r#""z","y","x","y""#));
    assert_eq!(out, vec!["z", "y", "x", "y"]);
}
