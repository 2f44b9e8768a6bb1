use rstest::rstest;
use serde_json::{json, Value};

use array_view::{ArrayView, DecodeOptions, EncodeOptions, ErrorKind, Indent, Mode};

fn books() -> Value {
    json!([
        {"id": 1, "title": "1984", "author": "George Orwell"},
        {"id": 2, "title": "Pride and Prejudice", "author": "Jane Austen"}
    ])
}

#[rstest]
fn from_value_keeps_node_data() {
    let view = ArrayView::from_value(json!({"id": 1234, "subject": "hello"}));
    assert_eq!(view.mode(), Mode::Node);
    assert!(!view.is_collection());
    assert_eq!(view.to_value(), json!({"id": 1234, "subject": "hello"}));
}

#[rstest]
fn from_value_keeps_collection_data() {
    let view = ArrayView::from_value(books());
    assert!(view.is_collection());
    assert_eq!(view.count(), 2);
    assert_eq!(view.to_value(), books());
}

#[rstest]
#[case(json!({"id": 1}), false)]
#[case(json!({"a": {"b": 1}, "c": []}), false)]
#[case(json!([1, 2, 3]), true)]
#[case(json!([{"id": 1}]), true)]
#[case(json!([]), true)]
#[case(json!({}), true)]
fn mode_follows_input_shape(#[case] raw: Value, #[case] collection: bool) {
    assert_eq!(ArrayView::from_value(raw).is_collection(), collection);
}

#[rstest]
fn from_json_associative_and_sequential() {
    let view = ArrayView::from_json(r#"{"id": 1234, "subject": "hello"}"#).unwrap();
    assert_eq!(view.to_value(), json!({"id": 1234, "subject": "hello"}));

    let view = ArrayView::from_json(r#"["one", 2, "three"]"#).unwrap();
    assert!(view.is_collection());
    assert_eq!(view.to_value(), json!(["one", 2, "three"]));
}

#[rstest]
#[case("null")]
#[case("42")]
#[case("\"text\"")]
#[case("true")]
fn from_json_scalar_yields_empty_collection(#[case] input: &str) {
    let view = ArrayView::from_json(input).unwrap();
    assert!(view.is_collection());
    assert!(!view.has_items());
    assert_eq!(view.to_value(), json!([]));
}

#[rstest]
#[case("x")]
#[case("{\"id\": }")]
#[case("[1, 2")]
#[case("")]
fn from_json_rejects_malformed_text(#[case] input: &str) {
    let err = ArrayView::from_json(input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert!(err.to_string().starts_with("json decode failed: "));
}

#[rstest]
fn from_json_honors_max_depth() {
    let options = DecodeOptions::new().with_max_depth(1);
    assert!(ArrayView::from_json_with_options("[1, 2]", &options).is_ok());
    let err = ArrayView::from_json_with_options(r#"[{"a": 1}]"#, &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[rstest]
fn to_json_matches_compact_encoding() {
    let view = ArrayView::from_value(books());
    assert_eq!(
        view.to_json().unwrap(),
        r#"[{"id":1,"title":"1984","author":"George Orwell"},{"id":2,"title":"Pride and Prejudice","author":"Jane Austen"}]"#
    );
    assert_eq!(view.to_string(), view.to_json().unwrap());
}

#[rstest]
fn to_json_pretty() {
    let view = ArrayView::from_value(json!({"id": 1}));
    let options = EncodeOptions::new().with_indent(Indent::spaces(2));
    assert_eq!(view.to_json_with_options(&options).unwrap(), "{\n  \"id\": 1\n}");
    assert_eq!(array_view::to_string_pretty(&view).unwrap(), "{\n  \"id\": 1\n}");
}

#[rstest]
fn empty_collection_encodes_as_list() {
    assert_eq!(ArrayView::new().to_json().unwrap(), "[]");
    assert_eq!(ArrayView::from_value(json!({})).to_json().unwrap(), "[]");
}

#[rstest]
#[case(json!({"id": 1, "sub": {"x": [1, 2.5, null]}}))]
#[case(books())]
#[case(json!([]))]
#[case(json!({"0": "a", "1": "b"}))]
#[case(json!(["mixed", 1, true, null, {"k": "v"}]))]
fn json_round_trip_preserves_data(#[case] raw: Value) {
    let view = ArrayView::from_value(raw);
    let decoded = ArrayView::from_json(&view.to_json().unwrap()).unwrap();
    assert_eq!(decoded.to_value(), view.to_value());
    assert_eq!(decoded.mode(), view.mode());
}

#[rstest]
fn crate_level_codec_functions() {
    let view = array_view::from_str(r#"{"id": 5}"#).unwrap();
    assert_eq!(array_view::to_string(&view).unwrap(), r#"{"id":5}"#);

    let view = array_view::from_slice(br#"[1, 2]"#).unwrap();
    assert_eq!(array_view::to_vec(&view).unwrap(), b"[1,2]".to_vec());

    let view = array_view::from_reader(&br#"{"a": [true]}"#[..]).unwrap();
    let mut out = Vec::new();
    array_view::to_writer(&mut out, &view).unwrap();
    assert_eq!(out, br#"{"a":[true]}"#.to_vec());
}

#[rstest]
fn parse_via_from_str_trait() {
    let view: ArrayView = r#"[{"id": 1}]"#.parse().unwrap();
    assert_eq!(view.count(), 1);
    assert!("nope".parse::<ArrayView>().is_err());
}

#[rstest]
fn serde_uses_raw_data() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Envelope {
        items: ArrayView,
    }

    let envelope: Envelope = serde_json::from_value(json!({"items": [{"id": 1}]})).unwrap();
    assert!(envelope.items.is_collection());
    assert_eq!(
        serde_json::to_value(&envelope).unwrap(),
        json!({"items": [{"id": 1}]})
    );
}

#[rstest]
fn collect_values_into_collection() {
    let view: ArrayView = vec![json!(1), json!({"id": 2})].into_iter().collect();
    assert!(view.is_collection());
    assert_eq!(view.to_value(), json!([1, {"id": 2}]));
}
