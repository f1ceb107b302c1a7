use kwmatch_core::KeywordProcessor;

fn processor_with(keywords: &[(&str, &str)]) -> KeywordProcessor {
    let mut processor = KeywordProcessor::new();
    for (keyword, value) in keywords {
        processor.insert(keyword, value.to_string());
    }
    processor
}

/// Verify a multi-word keyword matches across the space and stops before punctuation.
#[test]
fn test_extract_multi_word_keyword() {
    let processor = processor_with(&[("Big Apple", "New York")]);

    assert_eq!(processor.extract("I love Big Apple.", 0), vec!["New York"]);
}

/// Verify spans are byte ranges of the keyword in the original text.
#[test]
fn test_extract_spans() {
    let processor = processor_with(&[("Big Apple", "New York"), ("Bay Area", "SF")]);
    let text = "I love Big Apple and Bay Area.";

    let matches = processor.extract_with_spans(text, 0);

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].value, "New York");
    assert_eq!(&text[matches[0].span()], "Big Apple");
    assert_eq!(matches[1].value, "SF");
    assert_eq!((matches[1].start, matches[1].end), (21, 29));
}

/// Verify the longest keyword wins over a keyword that is its prefix.
#[test]
fn test_extract_longest_match() {
    let processor = processor_with(&[("New", "A"), ("New York", "B")]);

    assert_eq!(processor.extract("I live in New York", 0), vec!["B"]);
    assert_eq!(processor.extract("I live in New Jersey", 0), vec!["A"]);
}

/// Verify a match ending at end of text needs no trailing boundary.
#[test]
fn test_extract_match_at_end_of_text() {
    let processor = processor_with(&[("python", "Python")]);

    let matches = processor.extract_with_spans("I like python", 0);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].span(), 7..13);
}

/// Verify keywords only match whole words.
#[test]
fn test_extract_respects_word_boundaries() {
    let processor = processor_with(&[("java", "Java")]);

    assert!(processor.extract("javascript and myjava", 0).is_empty());
    assert_eq!(processor.extract("java_script, java!", 0), vec!["Java"]);
}

/// Verify the same keyword is reported once per occurrence, in order.
#[test]
fn test_extract_repeated_keywords() {
    let processor = processor_with(&[("ec2", "EC2"), ("s3", "S3")]);

    assert_eq!(
        processor.extract("ec2 s3 ec2", 0),
        vec!["EC2", "S3", "EC2"]
    );
}

/// Verify empty input yields no matches regardless of contents.
#[test]
fn test_extract_empty_text() {
    let processor = processor_with(&[("a", "A")]);

    assert!(processor.extract("", 0).is_empty());
    assert!(processor.extract("", 2).is_empty());
}

/// Verify case folding drives matching while spans keep original casing.
#[test]
fn test_extract_case_insensitive_spans() {
    let processor = processor_with(&[("cloudwatch", "CloudWatch")]);
    let text = "open CLOUDWATCH now";

    let matches = processor.extract_with_spans(text, 0);

    assert_eq!(matches.len(), 1);
    assert_eq!(&text[matches[0].span()], "CLOUDWATCH");
}

/// Verify case-sensitive processors do not fold.
#[test]
fn test_extract_case_sensitive() {
    let mut processor = KeywordProcessor::with_case_sensitivity(true);
    processor.insert("AWS", "Amazon".to_string());

    assert_eq!(processor.extract("aws AWS", 0), vec!["Amazon"]);
}

/// Verify spans stay byte-accurate around multi-byte characters.
#[test]
fn test_extract_spans_with_multibyte_text() {
    let processor = processor_with(&[("café", "coffee")]);
    let text = "Ünïcode CAFÉ ok";

    let matches = processor.extract_with_spans(text, 0);

    assert_eq!(matches.len(), 1);
    assert_eq!(&text[matches[0].span()], "CAFÉ");
}

mod approximate {
    use super::*;

    /// Verify one substitution is tolerated with a budget of one.
    #[test]
    fn test_extract_with_substitution() {
        let processor = processor_with(&[("Marie", "Mary")]);

        assert_eq!(processor.extract("I met Maria yesterday", 1), vec!["Mary"]);
        assert!(processor.extract("I met Maria yesterday", 0).is_empty());
    }

    /// Verify an insertion and a deletion are both tolerated.
    #[test]
    fn test_extract_with_insertion_and_deletion() {
        let processor = processor_with(&[("cloudfront", "CloudFront")]);

        assert_eq!(processor.extract("open cloudfrnt", 1), vec!["CloudFront"]);
        assert_eq!(processor.extract("open cloudfroont", 1), vec!["CloudFront"]);
    }

    /// Verify words further than the budget are not matched.
    #[test]
    fn test_extract_over_budget() {
        let processor = processor_with(&[("lambda", "Lambda")]);

        assert!(processor.extract("lamxxa", 1).is_empty());
        assert_eq!(processor.extract("lamxxa", 2), vec!["Lambda"]);
    }

    /// Verify approximate matching reaches the second word of a multi-word keyword.
    #[test]
    fn test_extract_approximate_second_word() {
        let processor = processor_with(&[("big apple", "New York")]);

        let text = "I love big aple today";
        let matches = processor.extract_with_spans(text, 1);

        assert_eq!(matches.len(), 1);
        assert_eq!(&text[matches[0].span()], "big aple");
    }

    /// Verify the budget is restored after each match.
    #[test]
    fn test_extract_budget_resets_between_matches() {
        let processor = processor_with(&[("marie", "Mary"), ("john", "John")]);

        assert_eq!(
            processor.extract("maria met jahn", 1),
            vec!["Mary", "John"]
        );
    }

    /// Verify exact matches still work when a budget is given.
    #[test]
    fn test_extract_exact_with_budget() {
        let processor = processor_with(&[("New", "A"), ("New York", "B")]);

        assert_eq!(processor.extract("I live in New York", 1), vec!["B"]);
    }

    /// Verify a failed approximate continuation keeps the terminal already passed.
    #[test]
    fn test_extract_keeps_match_when_continuation_fails() {
        let processor = processor_with(&[("new york", "B"), ("new york city", "C")]);

        assert_eq!(processor.extract("new york zzzz", 0), vec!["B"]);
        assert_eq!(processor.extract("new york zzzz", 1), vec!["B"]);

        let matches = processor.extract_with_spans("new york zzzz", 1);
        assert_eq!(matches[0].span(), 0..8);
    }

    /// Verify a shorter keyword wins when the longer one breaks off mid-lookahead.
    #[test]
    fn test_extract_falls_back_to_prefix_keyword() {
        let processor = processor_with(&[("new", "A"), ("new york city", "C")]);

        assert_eq!(processor.extract("new york zzzz", 1), vec!["A"]);
        assert_eq!(processor.extract("new york citi", 1), vec!["C"]);
    }
}
