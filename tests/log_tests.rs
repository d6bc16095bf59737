use chrono::{TimeZone, Utc};
use std::io::Cursor;
use std::io::Write;
use tempfile::NamedTempFile;
use trickdex::error::TrickdexError;
use trickdex::log::{load_log, load_log_from_path, parse_date};
use trickdex::spot::GeneralSpot;

fn load_str(csv: &str) -> Result<Vec<trickdex::trick::TrickDescription>, TrickdexError> {
    load_log(Cursor::new(csv.to_string()))
}

// --- HAPPY PATH ---

#[test]
fn test_load_full_log() {
    let csv = "tokens,spots,date\n\
               fakie double whip,flat,2019-10-20\n\
               bar,flat|street,2021-06-01T12:30:00Z\n\
               whip,park\n";
    let descs = load_str(csv).unwrap();

    assert_eq!(descs.len(), 3);
    assert_eq!(descs[0].tokens, vec!["fakie", "double", "whip"]);
    assert_eq!(
        descs[0].date,
        Some(Utc.with_ymd_and_hms(2019, 10, 20, 0, 0, 0).unwrap())
    );
    assert_eq!(descs[1].landings.len(), 2);
    assert_eq!(descs[1].landings[0].spot, GeneralSpot::Flat);
    assert_eq!(descs[1].landings[1].spot, GeneralSpot::Street);
    assert_eq!(descs[2].date, None);
    assert_eq!(descs[2].landings[0].spot, GeneralSpot::Park);
}

#[test]
fn test_load_from_path() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "tokens,spots,date").unwrap();
    writeln!(file, "whip,flat,2020-01-01").unwrap();

    let descs = load_log_from_path(file.path()).unwrap();
    assert_eq!(descs.len(), 1);
    assert_eq!(descs[0].tokens, vec!["whip"]);
}

#[test]
fn test_empty_spots_column_gives_trick_with_no_landings() {
    let descs = load_str("tokens,spots,date\nwhip,,2020-01-01\n").unwrap();
    assert_eq!(descs.len(), 1);
    assert!(descs[0].landings.is_empty());
}

#[test]
fn test_spots_are_trimmed() {
    let descs = load_str("tokens,spots\nwhip,flat | street\n").unwrap();
    assert_eq!(descs[0].landings.len(), 2);
}

#[test]
fn test_header_only_log_is_empty() {
    let descs = load_str("tokens,spots,date\n").unwrap();
    assert!(descs.is_empty());
}

// --- MALFORMED ROWS ---

#[test]
fn test_unknown_spot_names_the_row() {
    let csv = "tokens,spots,date\nwhip,flat\nbar,volcano\n";
    let err = load_str(csv).unwrap_err();
    match err {
        TrickdexError::Log(msg) => {
            assert!(msg.contains("row 3"), "message was: {}", msg);
            assert!(msg.contains("volcano"), "message was: {}", msg);
        }
        other => panic!("expected Log error, got {:?}", other),
    }
}

#[test]
fn test_blank_tokens_column_is_rejected() {
    let err = load_str("tokens,spots,date\n  ,flat,2020-01-01\n").unwrap_err();
    match err {
        TrickdexError::Log(msg) => assert!(msg.contains("empty token list")),
        other => panic!("expected Log error, got {:?}", other),
    }
}

#[test]
fn test_single_column_row_is_rejected() {
    let err = load_str("tokens,spots,date\nwhip\n").unwrap_err();
    assert!(matches!(err, TrickdexError::Log(_)));
}

#[test]
fn test_invalid_date_is_rejected() {
    let err = load_str("tokens,spots,date\nwhip,flat,20-10-2019\n").unwrap_err();
    match err {
        TrickdexError::Log(msg) => {
            assert!(msg.contains("row 2"), "message was: {}", msg);
            assert!(msg.contains("20-10-2019"), "message was: {}", msg);
        }
        other => panic!("expected Log error, got {:?}", other),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_log_from_path("no/such/session.csv").unwrap_err();
    assert!(matches!(err, TrickdexError::Io(_)));
}

// --- DATE PARSING ---

#[test]
fn test_parse_date_bare_day_is_midnight_utc() {
    let parsed = parse_date("2019-10-20").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2019, 10, 20, 0, 0, 0).unwrap());
}

#[test]
fn test_parse_date_rfc3339_offset_is_normalized_to_utc() {
    let parsed = parse_date("2021-06-01T12:30:00+02:00").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2021, 6, 1, 10, 30, 0).unwrap());
}

#[test]
fn test_parse_date_garbage_is_none() {
    assert!(parse_date("yesterday").is_none());
    assert!(parse_date("").is_none());
}

// --- SHIPPED DATA ---

#[test]
fn test_shipped_session_log_loads() {
    let descs = load_log_from_path("data/session.csv").unwrap();
    assert!(!descs.is_empty());
    for desc in &descs {
        assert!(!desc.tokens.is_empty());
    }
}
