use trickdex::dictionary::{WordDictionary, WordRecord};
use trickdex::error::TrickdexError;
use trickdex::spot::{GeneralSpot, Landing};
use trickdex::trick::{Trick, TrickDescription, TrickPart};

// --- FIXTURES ---

fn fixture_dict() -> WordDictionary {
    let records = vec![
        WordRecord::new("whip").points(100.0),
        WordRecord::new("double").after(0.1),
        WordRecord::new("fakie").whole_trick(),
        WordRecord::new("bar").points(150.0).before(0.2),
        WordRecord::new("crossfoot").after(0.2).whole_trick(),
        WordRecord::new("spinwhip").points(100.0).after(0.5),
    ];
    WordDictionary::from_records(records).unwrap()
}

fn desc(tokens: &[&str], spots: &[GeneralSpot]) -> TrickDescription {
    TrickDescription::new(
        tokens.iter().map(|s| s.to_string()).collect(),
        spots.iter().map(|&s| Landing::new(s)).collect(),
    )
}

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{}: expected {}, got {}",
        what,
        expected,
        actual
    );
}

// --- PIPELINE TESTS ---

#[test]
fn test_fakie_double_whip_flat_scores_165() {
    let dict = fixture_dict();
    let trick = Trick::from_description(
        &dict,
        desc(&["fakie", "double", "whip"], &[GeneralSpot::Flat]),
    )
    .unwrap();

    assert_eq!(trick.name(), "fakie double whip");
    assert_close(trick.default_points(), 110.0, "default points");
    assert_close(trick.points(), 165.0, "final points");
}

#[test]
fn test_partition_whole_trick_word_stands_alone() {
    let dict = fixture_dict();
    let trick = Trick::from_description(
        &dict,
        desc(&["fakie", "double", "whip"], &[GeneralSpot::Flat]),
    )
    .unwrap();

    let parts = trick.parts();
    assert_eq!(parts.len(), 2);
    assert!(matches!(parts[0], TrickPart::Word(_)));
    assert!(matches!(parts[1], TrickPart::Block(_)));
    assert_eq!(parts[1].tokens(), vec!["double", "whip"]);
}

#[test]
fn test_trailing_connector_degrades_to_standalone_word() {
    let dict = fixture_dict();
    let trick =
        Trick::from_description(&dict, desc(&["whip", "double"], &[])).unwrap();

    let parts = trick.parts();
    assert_eq!(parts.len(), 2);
    assert!(parts[0].is_block());
    assert!(!parts[1].is_block());
    // The dangling connector contributes nothing.
    assert_close(trick.default_points(), 100.0, "default points");
}

#[test]
fn test_forward_pass_applies_next_parts_leading_modifier() {
    let dict = fixture_dict();
    // Two blocks: [whip] then [bar]. The bar block's leading 0.2 applies to
    // the running 100 before bar's own points join.
    let trick = Trick::from_description(&dict, desc(&["whip", "bar"], &[])).unwrap();

    assert_close(trick.default_points(), 270.0, "default points");
}

#[test]
fn test_backward_pass_applies_leading_words_trailing_modifier() {
    let dict = fixture_dict();
    let trick =
        Trick::from_description(&dict, desc(&["crossfoot", "whip"], &[])).unwrap();

    // 100 from the block, then crossfoot's 0.2 folds in backwards.
    assert_close(trick.default_points(), 120.0, "default points");
}

#[test]
fn test_terminator_trailing_modifier_compounds_onto_itself() {
    let dict = fixture_dict();
    // spinwhip carries points 100 and percentageAfter 0.5; the block fold
    // applies that 0.5 to its own 100.
    let trick = Trick::from_description(&dict, desc(&["spinwhip"], &[])).unwrap();

    assert_close(trick.default_points(), 150.0, "default points");
}

#[test]
fn test_block_compounding_is_order_sensitive() {
    let dict = fixture_dict();
    let a = Trick::from_description(&dict, desc(&["double", "whip"], &[])).unwrap();
    let b = Trick::from_description(&dict, desc(&["whip", "double"], &[])).unwrap();

    assert_close(a.default_points(), 110.0, "double whip");
    assert_close(b.default_points(), 100.0, "whip double");
}

#[test]
fn test_resolution_is_case_insensitive_and_keeps_spelling() {
    let dict = fixture_dict();
    let trick = Trick::from_description(&dict, desc(&["WHIP"], &[])).unwrap();

    assert_eq!(trick.name(), "WHIP");
    assert_close(trick.default_points(), 100.0, "default points");
}

// --- FAILURE MODES ---

#[test]
fn test_unrecognized_token_names_the_offender() {
    let dict = fixture_dict();
    let err =
        Trick::from_description(&dict, desc(&["whip", "blargh"], &[])).unwrap_err();

    match err {
        TrickdexError::UnrecognizedWord { token } => assert_eq!(token, "blargh"),
        other => panic!("expected UnrecognizedWord, got {:?}", other),
    }
}

#[test]
fn test_no_positive_word_fails_with_no_block() {
    let dict = fixture_dict();
    let err =
        Trick::from_description(&dict, desc(&["double", "double"], &[])).unwrap_err();

    assert!(matches!(err, TrickdexError::NoBlockFound));
}

#[test]
fn test_only_whole_trick_words_fail_with_no_block() {
    let dict = fixture_dict();
    let err = Trick::from_description(&dict, desc(&["fakie"], &[])).unwrap_err();

    assert!(matches!(err, TrickdexError::NoBlockFound));
}

// --- SPOT BONUS ---

#[test]
fn test_no_landings_means_no_bonus() {
    let dict = fixture_dict();
    let trick = Trick::from_description(&dict, desc(&["whip"], &[])).unwrap();

    assert_close(trick.points(), trick.default_points(), "final points");
}

#[test]
fn test_best_landing_wins() {
    let dict = fixture_dict();
    let trick = Trick::from_description(
        &dict,
        desc(&["whip"], &[GeneralSpot::Park, GeneralSpot::Street]),
    )
    .unwrap();

    assert_close(trick.points(), 130.0, "final points");
}

#[test]
fn test_difficulty_ignores_spot_bonus() {
    let dict = fixture_dict();
    let flat = Trick::from_description(&dict, desc(&["whip"], &[GeneralSpot::Flat])).unwrap();
    let park = Trick::from_description(&dict, desc(&["whip"], &[GeneralSpot::Park])).unwrap();

    assert_eq!(flat.difficulty(), park.difficulty());
}

#[test]
fn test_landed_at_checks_spot_membership() {
    let dict = fixture_dict();
    let trick = Trick::from_description(
        &dict,
        desc(&["whip"], &[GeneralSpot::Flat, GeneralSpot::Park]),
    )
    .unwrap();

    assert!(trick.landed_at(GeneralSpot::Flat));
    assert!(trick.landed_at(GeneralSpot::Park));
    assert!(!trick.landed_at(GeneralSpot::Street));
}

// --- OUTPUT CONTRACT ---

#[test]
fn test_trick_serializes_scoring_fields() {
    let dict = fixture_dict();
    let trick = Trick::from_description(
        &dict,
        desc(&["fakie", "double", "whip"], &[GeneralSpot::Flat]),
    )
    .unwrap();

    let json = serde_json::to_value(&trick).unwrap();
    assert_eq!(json["name"], "fakie double whip");
    assert_eq!(json["difficulty"], "Intermediate");
    assert!(json["defaultPoints"].is_number());
    assert!(json["points"].is_number());
    assert!(json.get("parts").is_none());
}
