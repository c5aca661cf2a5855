use super::*;

#[test]
fn stage_labels_and_modifiers() {
    assert_eq!(Stage::Done.label(), "Done");
    assert_eq!(Stage::InProgress.modifier(), "in-progress");
    assert_eq!(Stage::Planned.label(), "Planned");
}
