use recite::app::{App, AppEvent, Response};
use recite::engine::Scorer;
use recite::input;
use recite::scoring::{normalize, score, FeedbackKind};
use std::fs::{self, File};
use std::io::Write;

#[test]
fn normalize_examples() {
    assert_eq!(normalize("Hello, World!").tokens(), ["hello", "world"]);
    assert_eq!(
        normalize("  multiple   spaces ").tokens(),
        ["multiple", "spaces"]
    );
    assert!(normalize("").is_empty());
}

#[test]
fn exact_sentence_scores_100_without_feedback() {
    let report = score("I am learning English", "I am learning English");
    assert_eq!(report.similarity, 100.0);
    assert!(report.feedback.is_empty());
}

#[test]
fn single_mispronounced_word() {
    let report = score("I am learning English", "I am learning Engrish");

    assert_eq!(report.feedback.len(), 1);
    let entry = &report.feedback[0];
    assert_eq!(entry.word, "english");
    assert_eq!(entry.feedback, FeedbackKind::Mispronounced);
    assert!(entry.suggestion.as_deref().unwrap().contains("english"));
    assert!(report.similarity > 75.0 && report.similarity < 100.0);
}

#[test]
fn empty_candidate_scores_zero() {
    let report = score("the cat sat", "");
    assert_eq!(report.similarity, 0.0);
    assert!(report.feedback.is_empty());
}

#[test]
fn report_serializes_to_json() {
    let report = Scorer::default().score("good night", "good knight");
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["feedback"][0]["word"], "night");
    assert_eq!(value["feedback"][0]["feedback"], "mispronounced");
    assert_eq!(value["feedback"][0]["suggestion"], "Expected word: night");
    assert!(value["similarity"].as_f64().unwrap() < 100.0);
}

#[test]
fn end_to_end_practice() {
    let test_file = "test_e2e_library.txt";
    let content = "Where is the library?\n도서관이 어디예요?\nI would like some water.\n물 좀 주세요.\n";

    let mut file = File::create(test_file).unwrap();
    file.write_all(content.as_bytes()).unwrap();

    let library = input::load(test_file).expect("Should load library successfully");
    assert_eq!(library.sentences.len(), 2);
    assert_eq!(library.sentences[1].translation, "물 좀 주세요.");

    let mut app = App::new();
    let response = app.handle_event(AppEvent::LoadFile(test_file.to_string()));
    assert!(matches!(response, Response::Sentence { total: 2, .. }));

    let response = app.handle_event(AppEvent::Attempt("where is the liberty".to_string()));
    match response {
        Response::Scored { report, stats, .. } => {
            assert_eq!(report.feedback.len(), 1);
            assert_eq!(report.feedback[0].word, "library?");
            assert_eq!(stats.total_practices, 1);
        }
        other => panic!("Expected Scored response, got {:?}", other),
    }

    app.handle_event(AppEvent::NextSentence);
    assert_eq!(
        app.current_sentence().map(|s| s.text.as_str()),
        Some("I would like some water.")
    );

    fs::remove_file(test_file).unwrap();
}
