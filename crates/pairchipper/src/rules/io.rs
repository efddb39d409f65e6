//! # Rule Set JSON IO
//!
//! A rule set is persisted as a JSON array of records, in learned order:
//! ```json
//! [
//!   { "pair": [97, 97], "new_token": 256, "count": 3 },
//!   { "pair": [256, 98], "new_token": 257, "count": 2 }
//! ]
//! ```
//!
//! Loading is all-or-nothing: a document which fails to parse, or whose
//! rules fail [`crate::rules::try_validate_rules`], yields no [`RuleSet`].

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde::de::DeserializeOwned;

use crate::errors::{PCResult, PairchipperError, RuleSetFormatError};
use crate::rules::{MergeRule, RuleSet};
use crate::types::TokenType;

fn json_error(err: serde_json::Error) -> PairchipperError {
    if err.is_io() {
        PairchipperError::Io(err.into())
    } else {
        RuleSetFormatError::Json(err).into()
    }
}

fn validated<T: TokenType>(rules: Vec<MergeRule<T>>) -> PCResult<RuleSet<T>> {
    RuleSet::try_from_rules(rules).map_err(|e| {
        log::warn!("rejected rule set: {e}");
        e.into()
    })
}

/// Parse a [`RuleSet`] from a JSON string.
pub fn rules_from_json_str<T>(json: &str) -> PCResult<RuleSet<T>>
where
    T: TokenType + DeserializeOwned,
{
    let rules: Vec<MergeRule<T>> =
        serde_json::from_str(json).map_err(RuleSetFormatError::Json)?;
    validated(rules)
}

/// Render a [`RuleSet`] as a pretty-printed JSON string.
pub fn rules_to_json_string<T>(rules: &RuleSet<T>) -> PCResult<String>
where
    T: TokenType + serde::Serialize,
{
    serde_json::to_string_pretty(rules).map_err(json_error)
}

/// Read a [`RuleSet`] from a JSON reader.
///
/// # Arguments
/// * `reader` - the JSON source.
pub fn read_rules_json<T, R>(reader: R) -> PCResult<RuleSet<T>>
where
    T: TokenType + DeserializeOwned,
    R: Read,
{
    let rules: Vec<MergeRule<T>> = serde_json::from_reader(reader).map_err(json_error)?;
    validated(rules)
}

/// Load a [`RuleSet`] from a JSON file.
///
/// # Arguments
/// * `path` - the path to the rules file.
pub fn load_rules_json_path<T, P>(path: P) -> PCResult<RuleSet<T>>
where
    T: TokenType + DeserializeOwned,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_rules_json(reader)
}

/// Write a [`RuleSet`] to a [`Write`] writer, as pretty-printed JSON.
///
/// # Arguments
/// * `rules` - the rules to write.
/// * `writer` - the target writer.
pub fn write_rules_json<T, W>(
    rules: &RuleSet<T>,
    writer: &mut W,
) -> PCResult<()>
where
    T: TokenType + serde::Serialize,
    W: Write,
{
    serde_json::to_writer_pretty(&mut *writer, rules).map_err(json_error)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Save a [`RuleSet`] to a JSON file.
///
/// # Arguments
/// * `rules` - the rules to save.
/// * `path` - the path to save the rules to.
pub fn save_rules_json_path<T, P>(
    rules: &RuleSet<T>,
    path: P,
) -> PCResult<()>
where
    T: TokenType + serde::Serialize,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_rules_json(rules, &mut writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rules() -> RuleSet<u32> {
        RuleSet::try_from_rules(vec![
            MergeRule::new((97, 97), 256, 3),
            MergeRule::new((256, 98), 257, 2),
            MergeRule::new((32, 257), 258, 2),
        ])
        .unwrap()
    }

    #[test]
    fn test_json_string_roundtrip() {
        let rules = sample_rules();
        let json = rules_to_json_string(&rules).unwrap();

        assert!(json.starts_with("[\n  {"));
        assert!(json.contains("\"new_token\": 256"));

        let loaded: RuleSet<u32> = rules_from_json_str(&json).unwrap();
        assert_eq!(loaded, rules);
    }

    #[test]
    fn test_json_record_format() {
        let json = r#"[{"pair": [97, 97], "new_token": 256, "count": 3}]"#;
        let loaded: RuleSet<u16> = rules_from_json_str(json).unwrap();
        assert_eq!(loaded.rules(), &[MergeRule::new((97, 97), 256, 3)]);
    }

    #[test]
    fn test_save_load_path() {
        let rules = sample_rules();

        let tempdir = tempdir::TempDir::new("rules_test").unwrap();
        let path = tempdir.path().join("rules.json");

        save_rules_json_path(&rules, &path).unwrap();
        let loaded: RuleSet<u32> = load_rules_json_path(&path).unwrap();

        assert_eq!(loaded, rules);
        assert_eq!(
            loaded.iter().map(|r| r.new_token).collect::<Vec<_>>(),
            vec![256, 257, 258]
        );
    }

    #[test]
    fn test_missing_field() {
        let json = r#"[{"pair": [97, 97], "new_token": 256}]"#;
        let err = rules_from_json_str::<u32>(json).unwrap_err();
        assert!(matches!(
            err,
            PairchipperError::RuleSetFormat(RuleSetFormatError::Json(_))
        ));
    }

    #[test]
    fn test_malformed_records() {
        for json in [
            "",
            "{}",
            r#"[{"pair": [97], "new_token": 256, "count": 3}]"#,
            r#"[{"pair": [97, -1], "new_token": 256, "count": 3}]"#,
            r#"[{"pair": "ab", "new_token": 256, "count": 3}]"#,
        ] {
            let err = rules_from_json_str::<u32>(json).unwrap_err();
            assert!(
                matches!(
                    err,
                    PairchipperError::RuleSetFormat(RuleSetFormatError::Json(_))
                ),
                "{json:?}: {err:?}"
            );
        }
    }

    #[test]
    fn test_token_out_of_range() {
        let json = r#"[{"pair": [97, 97], "new_token": 70000, "count": 3}]"#;
        assert!(rules_from_json_str::<u16>(json).is_err());
        assert!(rules_from_json_str::<u32>(json).is_ok());
    }

    #[test]
    fn test_invalid_rules_do_not_load() {
        let json = r#"[
            {"pair": [97, 97], "new_token": 256, "count": 3},
            {"pair": [256, 999], "new_token": 257, "count": 2}
        ]"#;
        let err = rules_from_json_str::<u32>(json).unwrap_err();
        assert!(matches!(
            err,
            PairchipperError::RuleSetFormat(RuleSetFormatError::UndefinedOperand {
                index: 1,
                operand: 999
            })
        ));
    }

    #[test]
    fn test_missing_file() {
        let tempdir = tempdir::TempDir::new("rules_test").unwrap();
        let err = load_rules_json_path::<u32, _>(tempdir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, PairchipperError::Io(_)));
    }
}
