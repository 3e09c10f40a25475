mod common;

use mcq_quiz::protocol::UploadResponse;
use mcq_quiz::{load_questions, parse, Grammar, LoadError, Quiz};

use common::{temp_file, SAMPLE};

#[test]
fn text_file_is_parsed() {
    let file = temp_file("txt", SAMPLE.as_bytes());
    let questions = load_questions(file.path(), Grammar::Positional).expect("text should load");

    assert_eq!(questions, parse(SAMPLE));
}

#[test]
fn upload_response_json_loads_back() {
    let response = UploadResponse {
        questions: parse(SAMPLE),
    };
    let json = serde_json::to_vec(&response).expect("serialize");
    let file = temp_file("json", &json);

    let questions = load_questions(file.path(), Grammar::Positional).expect("json should load");
    assert_eq!(questions, response.questions);
}

#[test]
fn bare_question_list_json_loads() {
    let json = r#"[{"question":"2+2?","options":[{"letter":"A","text":"4","isCorrect":true}]}]"#;
    let file = temp_file("json", json.as_bytes());

    let questions = load_questions(file.path(), Grammar::Positional).expect("json should load");
    assert_eq!(questions[0].correct_letter(), Some("A"));
}

#[test]
fn file_without_questions_is_rejected() {
    let file = temp_file("txt", b"A) orphan option\n*B) another\n");
    let result = load_questions(file.path(), Grammar::Positional);

    assert!(matches!(result, Err(LoadError::Empty { .. })));
}

#[test]
fn malformed_json_is_rejected() {
    let file = temp_file("json", b"{ not json");
    let result = load_questions(file.path(), Grammar::Positional);

    assert!(matches!(result, Err(LoadError::Json { .. })));
}

#[test]
fn corrupt_pdf_is_rejected_without_parsing() {
    let file = temp_file("pdf", b"Q: looks like text\n*A) but is not a pdf");
    let result = load_questions(file.path(), Grammar::Positional);

    assert!(matches!(result, Err(LoadError::Extraction { .. })));
}

#[test]
fn quiz_from_path_applies_limit() {
    let file = temp_file("txt", SAMPLE.as_bytes());
    let mut quiz = Quiz::from_path(file.path(), Grammar::Positional)
        .expect("quiz should load")
        .with_question_limit(Some(1));

    quiz.app_mut().start_quiz();
    assert_eq!(quiz.app().total_questions(), 1);
    assert_eq!(quiz.app().pool_size(), 2);
}

#[test]
fn byte_order_mark_does_not_drop_first_question() {
    let file = temp_file("txt", "\u{FEFF}Q: 2+2?\nA) 3\n*B) 4\n".as_bytes());
    let questions = load_questions(file.path(), Grammar::Positional).expect("text should load");

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].text, "2+2?");
}
