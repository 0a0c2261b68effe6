use onoma::{
    nlp::align::{
        align, align_batch, annotate_with, normalize_category, AnnotatedExample, EntityMention,
        Span,
    },
    text::tokenizer::tokenize,
};
use serde_json::json;

fn mention(text: &str, types: &[&str]) -> EntityMention {
    EntityMention {
        text: text.to_string(),
        types: types.iter().map(|t| t.to_string()).collect(),
    }
}

#[test]
fn two_names_align_in_discovery_order() {
    let tokens = tokenize("John Smith met Jane Doe today.");
    let entities = vec![mention("John Smith", &["name"]), mention("Jane Doe", &["name"])];
    let spans = align(&tokens, &entities);
    assert_eq!(
        spans,
        vec![
            Span { start: 0, end: 1, label: "name".into() },
            Span { start: 3, end: 4, label: "name".into() },
        ]
    );
}

#[test]
fn matching_is_case_insensitive() {
    let tokens = tokenize("John Smith arrived early.");
    let spans = align(&tokens, &[mention("john smith", &["name"])]);
    assert_eq!(spans.len(), 1);
    assert_eq!((spans[0].start, spans[0].end), (0, 1));
}

#[test]
fn repeated_mentions_each_get_a_span() {
    let tokens = tokenize("Ana met Ana near Ana's house.");
    let spans = align(&tokens, &[mention("Ana", &["first_name"])]);
    assert_eq!(spans.len(), 3);
    assert!(spans.iter().all(|s| s.label == "first name"));
}

#[test]
fn each_category_emits_its_own_span() {
    let tokens = tokenize("Dr. Lee spoke.");
    let spans = align(&tokens, &[mention("Lee", &["last_name", "surname"])]);
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0].label, "last name");
    assert_eq!(spans[1].label, "surname");
    assert_eq!(spans[0].start, spans[1].start);
}

#[test]
fn no_match_and_no_entities_are_silent() {
    let tokens = tokenize("Nothing to see here.");
    assert!(align(&tokens, &[]).is_empty());
    assert!(align(&tokens, &[mention("Emma", &["name"])]).is_empty());
}

#[test]
fn category_normalization_replaces_underscores() {
    assert_eq!(normalize_category("first_name"), "first name");
    assert_eq!(normalize_category("NAME"), "name");
}

#[test]
fn malformed_record_is_skipped_and_counted() {
    let records = vec![
        json!({"text": "Emma Williams waved.", "entities": [{"entity": "Emma Williams", "types": ["name"]}]}),
        json!({"text": "no entities key here"}),
        json!({"text": "Liam Brown left.", "entities": [{"entity": "Liam Brown", "types": ["name"]}]}),
    ];
    let report = align_batch(&records);
    assert_eq!(report.examples.len(), 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.examples[0].ner[0].start, 0);
}

#[test]
fn caller_supplied_entities_override_the_record() {
    let record = json!({
        "text": "Omar Diop greeted everyone.",
        "entities": [{"entity": "everyone", "types": ["name"]}]
    });
    let planted = vec![mention("Omar", &["first_name"]), mention("Diop", &["last_name"])];
    let example = annotate_with(&record, &planted).unwrap();
    assert_eq!(example.ner.len(), 2);
    assert_eq!(example.ner[0].label, "first name");
    assert_eq!(example.ner[1].label, "last name");
}

#[test]
fn spans_serialize_as_triples() {
    let example = AnnotatedExample {
        tokenized_text: vec!["John".into(), "Smith".into(), ".".into()],
        ner: vec![Span { start: 0, end: 1, label: "name".into() }],
    };
    let encoded = serde_json::to_string(&example).unwrap();
    assert_eq!(
        encoded,
        r#"{"tokenized_text":["John","Smith","."],"ner":[[0,1,"name"]]}"#
    );
    let decoded: AnnotatedExample = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, example);
}
