use super::*;

fn draft(title: &str, difficulty: &str) -> TaskDraft {
    TaskDraft {
        title: title.to_owned(),
        description: " Add two numbers ".to_owned(),
        answer: "4".to_owned(),
        difficulty: difficulty.to_owned(),
        subject: "math".to_owned(),
    }
}

#[test]
fn default_draft_starts_at_difficulty_one() {
    assert_eq!(TaskDraft::default().difficulty, "1");
}

#[test]
fn validate_trims_fields_and_parses_difficulty() {
    let payload = draft("  Sum  ", " 3 ").validate().unwrap();
    assert_eq!(payload.title, "Sum");
    assert_eq!(payload.description, "Add two numbers");
    assert_eq!(payload.difficulty, 3);
}

#[test]
fn validate_requires_title() {
    assert_eq!(draft("   ", "2").validate(), Err("Enter a title."));
}

#[test]
fn validate_rejects_difficulty_outside_range() {
    for bad in ["0", "6", "abc", ""] {
        assert_eq!(draft("Sum", bad).validate(), Err("Difficulty must be between 1 and 5."));
    }
    assert!(draft("Sum", "5").validate().is_ok());
}
