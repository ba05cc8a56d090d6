use doclens::domain::ExtractedText;

#[test]
fn given_text_within_budget_when_limiting_then_unchanged_and_not_truncated() {
    let text = ExtractedText::within_budget("short text".to_string(), 100);

    assert_eq!(text.content, "short text");
    assert!(!text.was_truncated);
}

#[test]
fn given_text_at_exact_budget_when_limiting_then_not_truncated() {
    let text = ExtractedText::within_budget("abcde".to_string(), 5);

    assert_eq!(text.content, "abcde");
    assert!(!text.was_truncated);
}

#[test]
fn given_text_over_budget_when_limiting_then_exactly_max_chars_remain() {
    let text = ExtractedText::within_budget("abcdefghij".to_string(), 4);

    assert_eq!(text.content, "abcd");
    assert!(text.was_truncated);
}

#[test]
fn given_multibyte_text_when_limiting_then_budget_counts_characters_not_bytes() {
    let text = ExtractedText::within_budget("日本語のテキスト".to_string(), 3);

    assert_eq!(text.content, "日本語");
    assert_eq!(text.content.chars().count(), 3);
    assert!(text.was_truncated);
}

#[test]
fn given_already_limited_text_when_limiting_again_then_result_is_identical() {
    let once = ExtractedText::within_budget("abcdefghij".to_string(), 4);
    let twice = ExtractedText::within_budget(once.content.clone(), 4);

    assert_eq!(once.content, twice.content);
    assert!(!twice.was_truncated);
}
