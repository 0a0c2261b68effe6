use onoma::nlp::synth::generation_prompt;

#[test]
fn attributes_render_into_the_start_tag() {
    let prompt = generation_prompt(&[
        ("language", "english"),
        ("name", "Emma"),
        ("surname", "Williams"),
    ]);
    assert!(prompt.contains(r#"<start language="english" name="Emma" surname="Williams">"#));
    assert!(prompt.contains("**Objective:**"));
}

#[test]
fn not_applicable_attributes_are_omitted() {
    let prompt = generation_prompt(&[("name", "Emma"), ("country", "n/a")]);
    assert!(prompt.contains(r#"<start name="Emma">"#));
    assert!(!prompt.contains("country"));
}
