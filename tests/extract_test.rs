use vibestream::anthropic::extract_candidates;
use vibestream::error::Error;

#[test]
fn test_extract_pure_json_array() {
    let text = r#"[{"artist": "Khruangbin", "track": "Maria También"}]"#;
    let candidates = extract_candidates(text).unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].artist, "Khruangbin");
    assert_eq!(candidates[0].track, "Maria También");
}

#[test]
fn test_extract_array_wrapped_in_prose() {
    let text = "Sure! Here is a playlist matching that vibe:\n\n\
                [{\"artist\": \"A\", \"track\": \"T1\"}, {\"artist\": \"B\", \"track\": \"T2\"}]\n\n\
                Enjoy the music.";
    let candidates = extract_candidates(text).unwrap();

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].artist, "A");
    assert_eq!(candidates[1].track, "T2");
}

#[test]
fn test_extract_no_array_is_parse_failure() {
    let text = "I'm sorry, I can't produce a playlist for that.";
    let err = extract_candidates(text).unwrap_err();

    assert!(matches!(err, Error::NoCandidateArray));
}

#[test]
fn test_extract_closing_bracket_before_opening_is_parse_failure() {
    let text = "weird] text [unterminated";
    let err = extract_candidates(text).unwrap_err();

    assert!(matches!(err, Error::NoCandidateArray));
}

#[test]
fn test_extract_invalid_json_is_parse_failure() {
    let text = "[{\"artist\": \"A\", \"track\": }]";
    let err = extract_candidates(text).unwrap_err();

    assert!(matches!(err, Error::CandidateJson(_)));
}

#[test]
fn test_extract_wrong_shape_is_parse_failure() {
    // Valid JSON array, but not candidate objects.
    let text = "[1, 2, 3]";
    let err = extract_candidates(text).unwrap_err();

    assert!(matches!(err, Error::CandidateJson(_)));
}

#[test]
fn test_extract_tolerates_fewer_than_ten_candidates() {
    let text = r#"[{"artist": "A", "track": "T1"}, {"artist": "B", "track": "T2"}, {"artist": "C", "track": "T3"}]"#;
    let candidates = extract_candidates(text).unwrap();

    // The ten-count asked of the model is not enforced.
    assert_eq!(candidates.len(), 3);
}

#[test]
fn test_extract_handles_brackets_inside_values() {
    let text = r#"Here you go: [{"artist": "Sigur Rós", "track": "( )"}, {"artist": "A", "track": "Song [Live]"}]"#;
    let candidates = extract_candidates(text).unwrap();

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[1].track, "Song [Live]");
}

#[test]
fn test_extract_empty_array() {
    let candidates = extract_candidates("[]").unwrap();
    assert!(candidates.is_empty());
}
