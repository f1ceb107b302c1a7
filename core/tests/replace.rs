use kwmatch_core::KeywordProcessor;

fn processor_with(keywords: &[(&str, &str)]) -> KeywordProcessor {
    let mut processor = KeywordProcessor::new();
    for (keyword, value) in keywords {
        processor.insert(keyword, value.to_string());
    }
    processor
}

/// Verify the trailing period and spacing survive replacement.
#[test]
fn test_replace_multi_word_keyword() {
    let processor = processor_with(&[("Big Apple", "New York")]);

    assert_eq!(processor.replace("I love Big Apple.", 0), "I love New York.");
}

/// Verify unmatched text keeps its original casing and whitespace.
#[test]
fn test_replace_preserves_unmatched_text() {
    let processor = processor_with(&[("ec2", "EC2"), ("s3", "S3")]);

    assert_eq!(
        processor.replace("Open  Ec2\tand S3,  NOW", 0),
        "Open  EC2\tand S3,  NOW"
    );
}

/// Verify the longest keyword is the one replaced.
#[test]
fn test_replace_longest_match() {
    let processor = processor_with(&[("New", "A"), ("New York", "B")]);

    assert_eq!(processor.replace("I live in New York", 0), "I live in B");
    assert_eq!(processor.replace("New Jersey is near", 0), "A Jersey is near");
}

/// Verify text without keywords is returned unchanged.
#[test]
fn test_replace_without_matches() {
    let processor = processor_with(&[("java", "Java")]);
    let text = "JavaScript is not java_script.";

    assert_eq!(processor.replace(text, 0), text);
}

/// Verify empty input yields an empty string.
#[test]
fn test_replace_empty_text() {
    let processor = processor_with(&[("a", "A")]);

    assert_eq!(processor.replace("", 0), "");
    assert_eq!(processor.replace("", 1), "");
}

/// Verify an approximately matched word is replaced whole.
#[test]
fn test_replace_approximate() {
    let processor = processor_with(&[("Marie", "Mary")]);

    assert_eq!(
        processor.replace("I met Maria yesterday", 1),
        "I met Mary yesterday"
    );
}

/// Verify a match survives when the text after it is not a keyword continuation.
#[test]
fn test_replace_keeps_match_when_continuation_fails() {
    let processor = processor_with(&[("new york", "B"), ("new york city", "C")]);

    assert_eq!(processor.replace("new york zzzz", 1), "B zzzz");
}

/// Verify replacement and extraction agree on spans.
#[test]
fn test_replace_matches_extract_spans() {
    let processor = processor_with(&[("big apple", "NYC"), ("bay area", "SF")]);
    let text = "From the Big Apple to the Bay Area, then home.";

    let mut expected = String::new();
    let mut copied = 0;
    for m in processor.extract_with_spans(text, 0) {
        expected.push_str(&text[copied..m.start]);
        expected.push_str(m.value);
        copied = m.end;
    }
    expected.push_str(&text[copied..]);

    assert_eq!(processor.replace(text, 0), expected);
    assert_eq!(expected, "From the NYC to the SF, then home.");
}
