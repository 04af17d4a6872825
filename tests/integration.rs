//! Integration tests for the full pipeline with realistic files.

use std::fs;
use std::path::Path;
use std::sync::Once;

use chrono::NaiveDate;

use chatsift::prelude::*;

static INIT: Once = Once::new();

fn fixtures_dir() -> &'static str {
    "tests/fixtures"
}

fn ensure_fixtures() {
    INIT.call_once(|| {
        let dir = fixtures_dir();
        if !Path::new(dir).exists() {
            fs::create_dir_all(dir).unwrap();
        }

        // English-dialect export: two sessions, continuations, a status
        // notice, and a participant banner
        let english = ".--------------------------------------------------------------.
| Session Start: Mon May 01 20:14:03 2006                      |
| Participants:                                                |
|    Daan (daan@example.net)                                   |
|    Alice (alice@example.net)                                 |
.--------------------------------------------------------------.
[20:15] Alice: hi there
   how are you
[20:16] Daan: doing fine, just got back from a long bike ride
   through the polder
[20:17] Alice is nu Afwezig:
| Session Start: Tue May 02 09:30:00 2006                      |
[09:31] Alice: morning!
";
        fs::write(format!("{dir}/english.txt"), english).unwrap();

        // Dutch-dialect export with localized marker and date
        let dutch = "| Start van sessie: zaterdag 13 mei 2006
[21:24] Bram: hee, ben je er nog?
[21:25] Daan: ja hoor
   was even koffie halen
[21:26] Bram: dit is een auto-bericht
";
        fs::write(format!("{dir}/dutch.txt"), dutch).unwrap();

        // Export with a BOM and Latin-1 damage
        let mut bom_file = vec![0xEF, 0xBB, 0xBF];
        bom_file.extend_from_slice(b"| Session Start: 2006-05-01\n[20:15] Alice: caf\xE9 tijd\n");
        fs::write(format!("{dir}/bom_latin1.txt"), bom_file).unwrap();
    });
}

fn parser() -> ChatlogParser {
    ChatlogParser::new(ParserConfig::dutch().with_self_names(["Daan"])).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_english_export_end_to_end() {
    ensure_fixtures();
    let transcript = parser()
        .parse(Path::new(&format!("{}/english.txt", fixtures_dir())))
        .unwrap();

    assert_eq!(transcript.session_count(), 2);
    assert!(transcript.warnings().is_empty());

    let may_first = &transcript.by_date()[&date(2006, 5, 1)];
    // the status notice is filtered out
    assert_eq!(may_first.len(), 2);
    assert_eq!(may_first[0].text(), "hi there how are you");
    assert_eq!(may_first[0].speaker(), Speaker::Counterpart);
    assert_eq!(
        may_first[1].text(),
        "doing fine, just got back from a long bike ride through the polder"
    );
    assert_eq!(may_first[1].speaker(), Speaker::SelfAccount);

    let may_second = &transcript.by_date()[&date(2006, 5, 2)];
    assert_eq!(may_second.len(), 1);
    assert_eq!(may_second[0].time(), "09:31");
}

#[test]
fn test_dutch_export_end_to_end() {
    ensure_fixtures();
    let transcript = parser()
        .parse(Path::new(&format!("{}/dutch.txt", fixtures_dir())))
        .unwrap();

    let messages = &transcript.by_date()[&date(2006, 5, 13)];
    // the auto-bericht is filtered
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].text(), "ja hoor was even koffie halen");
    assert_eq!(messages[1].speaker(), Speaker::SelfAccount);
}

#[test]
fn test_damaged_encoding_still_parses() {
    ensure_fixtures();
    let transcript = parser()
        .parse(Path::new(&format!("{}/bom_latin1.txt", fixtures_dir())))
        .unwrap();

    let messages = &transcript.by_date()[&date(2006, 5, 1)];
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text(), "café tijd");
}

#[test]
fn test_every_message_carries_the_preceding_session_date() {
    ensure_fixtures();
    let transcript = parser()
        .parse(Path::new(&format!("{}/english.txt", fixtures_dir())))
        .unwrap();

    for (bucket_date, messages) in transcript.by_date() {
        for message in messages {
            assert_eq!(message.date(), Some(*bucket_date));
        }
    }
}

#[test]
fn test_no_automated_messages_in_output() {
    ensure_fixtures();
    for fixture in ["english.txt", "dutch.txt"] {
        let transcript = parser()
            .parse(Path::new(&format!("{}/{fixture}", fixtures_dir())))
            .unwrap();
        assert!(transcript.iter().all(|m| !m.is_automated()));
    }
}

#[test]
fn test_idempotent_over_identical_bytes() {
    ensure_fixtures();
    let path = format!("{}/english.txt", fixtures_dir());
    let p = parser();
    let first = p.parse(Path::new(&path)).unwrap();
    let second = p.parse(Path::new(&path)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_merge_two_files_per_account() {
    ensure_fixtures();
    let p = parser();
    let mut combined = p
        .parse(Path::new(&format!("{}/english.txt", fixtures_dir())))
        .unwrap();
    let dutch = p
        .parse(Path::new(&format!("{}/dutch.txt", fixtures_dir())))
        .unwrap();
    let expected = combined.len() + dutch.len();

    combined.merge(dutch);
    assert_eq!(combined.len(), expected);
    assert_eq!(combined.session_count(), 3);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = parser()
        .parse(Path::new("tests/fixtures/does_not_exist.txt"))
        .unwrap_err();
    assert!(err.is_io());
}

#[cfg(feature = "json-output")]
#[test]
fn test_json_output_matches_grouping() {
    ensure_fixtures();
    let transcript = parser()
        .parse(Path::new(&format!("{}/english.txt", fixtures_dir())))
        .unwrap();

    let json = to_json(&transcript).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["by_date"]["2006-05-01"].is_array());
    assert!(value["by_date"]["2006-05-02"].is_array());
}
