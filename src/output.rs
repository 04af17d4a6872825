//! JSON output writers for the persistence collaborator.
//!
//! The pipeline's contract ends at the date-grouped [`Transcript`]; these
//! writers serialize that structure so an external storage layer can
//! ingest it. Two shapes are offered:
//!
//! - **JSON**: the whole transcript as one document, dates as object keys
//! - **JSONL**: one message per line (with its date inlined), for
//!   streaming ingestion

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::transcript::Transcript;

/// Converts a transcript to a pretty-printed JSON document.
///
/// # Format
/// ```json
/// {
///   "by_date": {
///     "2006-05-01": [
///       {"date": "2006-05-01", "time": "20:15", "speaker": "counterpart",
///        "status": "none", "text": "hi there"}
///     ]
///   },
///   "undated": []
/// }
/// ```
pub fn to_json(transcript: &Transcript) -> Result<String> {
    Ok(serde_json::to_string_pretty(transcript)?)
}

/// Writes a transcript to a JSON file.
pub fn write_json(transcript: &Transcript, output_path: &Path) -> Result<()> {
    let json = to_json(transcript)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a transcript to JSON Lines: one message object per line,
/// undated messages first, then the dated buckets in calendar order.
pub fn to_jsonl(transcript: &Transcript) -> Result<String> {
    let mut out = String::new();
    for message in transcript.iter() {
        out.push_str(&serde_json::to_string(message)?);
        out.push('\n');
    }
    Ok(out)
}

/// Writes a transcript to a JSONL file.
pub fn write_jsonl(transcript: &Transcript, output_path: &Path) -> Result<()> {
    let jsonl = to_jsonl(transcript)?;
    let mut file = File::create(output_path)?;
    file.write_all(jsonl.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParserConfig;
    use crate::parser::ChatlogParser;
    use std::io::Read;
    use tempfile::NamedTempFile;

    fn sample() -> Transcript {
        let parser = ChatlogParser::new(ParserConfig::dutch()).unwrap();
        parser.parse_str(
            "| Session Start: 2006-05-01\n[20:15] Alice: hi there\n[20:16] Alice: again\n",
        )
    }

    #[test]
    fn test_to_json_groups_by_date() {
        let json = to_json(&sample()).unwrap();
        assert!(json.contains("2006-05-01"));
        assert!(json.contains("hi there"));
        assert!(json.contains("counterpart"));
    }

    #[test]
    fn test_to_jsonl_one_line_per_message() {
        let jsonl = to_jsonl(&sample()).unwrap();
        assert_eq!(jsonl.lines().count(), 2);
        for line in jsonl.lines() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["date"], "2006-05-01");
        }
    }

    #[test]
    fn test_write_json_roundtrip() {
        let temp_file = NamedTempFile::new().unwrap();
        write_json(&sample(), temp_file.path()).unwrap();

        let mut content = String::new();
        File::open(temp_file.path())
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();

        let parsed: Transcript = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_filtered_messages_absent_from_output() {
        let parser = ChatlogParser::new(ParserConfig::dutch()).unwrap();
        let transcript = parser.parse_str(
            "| Session Start: 2006-05-01\n\
             [20:15] Alice: echte tekst\n\
             [20:16] Alice: dit is een auto-bericht\n",
        );
        let json = to_json(&transcript).unwrap();
        assert!(json.contains("echte tekst"));
        assert!(!json.contains("auto-bericht"));
    }
}
