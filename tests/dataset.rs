use std::path::PathBuf;

use onoma::{
    config::Settings,
    data::dataset::{load_records, persist_examples},
    nlp::align::{AnnotatedExample, Span},
};

fn settings_with_data_dir(data_dir: PathBuf) -> Settings {
    Settings {
        ollama_url: "http://localhost:11434".into(),
        ollama_model: "gemma2".into(),
        ner_url: "http://localhost:9090".into(),
        ner_base_model: "urchade/gliner_medium-v2.1".into(),
        ner_tuned_model: "models/checkpoint-510".into(),
        ner_threshold: 0.5,
        input_dir: data_dir.clone(),
        data_dir,
        skip_pages: 2,
        read_pages: 2,
        max_paragraphs: 3,
        max_sentences: 10,
        min_words: 3,
    }
}

#[test]
fn examples_survive_a_write_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_with_data_dir(dir.path().to_path_buf());
    let examples = vec![AnnotatedExample {
        tokenized_text: vec!["Emma".into(), "waved".into(), ".".into()],
        ner: vec![Span {
            start: 0,
            end: 0,
            label: "first name".into(),
        }],
    }];

    let path = persist_examples(&examples, &settings).unwrap();
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));

    let raw = std::fs::read_to_string(&path).unwrap();
    let reloaded: Vec<AnnotatedExample> = serde_json::from_str(&raw).unwrap();
    assert_eq!(reloaded, examples);
}

#[test]
fn raw_record_files_load_as_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("raw.json");
    std::fs::write(
        &path,
        r#"[{"text": "Hi.", "entities": []}, {"text": "missing entities"}]"#,
    )
    .unwrap();

    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn a_non_array_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{\"text\": \"not an array\"}").unwrap();
    assert!(load_records(&path).is_err());
}
