use crate::error::{Error, Result};
use crate::platform::{CharacterSet, ALL_FORBIDDEN};
use crate::substitution::SubstitutionSpec;
use std::collections::BTreeMap;
use std::{fs, path::Path};

/// Loads a replacement table from a JSON object such as
/// `{ ":": "_", "?": "", "*": null }`.
///
/// Strings replace (the empty string deletes), `null` disables replacement,
/// and characters not mentioned keep their default.
pub fn load_replacements(path: &Path) -> Result<SubstitutionSpec> {
    let s = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_replacements(&s).map_err(|e| match e {
        ParseError::Json(source) => Error::InvalidConfig { path: path.to_path_buf(), source },
        ParseError::Key(key) => Error::UnknownReplacementKey(key),
    })
}

/// Loads the table and checks it against `platform` before anything is scanned.
pub fn load_validated(path: &Path, platform: CharacterSet) -> Result<SubstitutionSpec> {
    let spec = load_replacements(path)?;
    spec.validate(platform, true)?;
    Ok(spec)
}

enum ParseError {
    Json(serde_json::Error),
    Key(String),
}

fn parse_replacements(s: &str) -> std::result::Result<SubstitutionSpec, ParseError> {
    let raw: BTreeMap<String, Option<String>> = serde_json::from_str(s).map_err(ParseError::Json)?;
    let mut spec = SubstitutionSpec::default();
    for (key, value) in raw {
        let mut chars = key.chars();
        let ch = match (chars.next(), chars.next()) {
            (Some(c), None) if ALL_FORBIDDEN.contains(&c) => c,
            _ => return Err(ParseError::Key(key)),
        };
        spec.set(ch, value);
    }
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn overrides_keep_unlisted_defaults() {
        let f = write_config(r#"{ ":": "_", "?": "", "*": null }"#);
        let spec = load_replacements(f.path()).unwrap();
        assert_eq!(spec.get(':'), Some("_"));
        assert_eq!(spec.get('?'), Some(""));
        assert_eq!(spec.get('*'), None);
        assert_eq!(spec.get('<'), Some("(lt)"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        for body in [r#"{ "a": "b" }"#, r#"{ "::": "b" }"#] {
            let f = write_config(body);
            assert!(matches!(load_replacements(f.path()), Err(Error::UnknownReplacementKey(_))));
        }
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let f = write_config(r#"{ ":": 3 }"#);
        assert!(matches!(load_replacements(f.path()), Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn validation_runs_against_the_platform() {
        let f = write_config(r#"{ ":": "|" }"#);
        assert!(load_validated(f.path(), CharacterSet::MacOs).is_ok());
        assert!(matches!(
            load_validated(f.path(), CharacterSet::Windows),
            Err(Error::ConflictingReplacement { source_char: ':', .. })
        ));
        let f = write_config(r#"{ "/": "∕" }"#);
        assert!(matches!(
            load_validated(f.path(), CharacterSet::Unix),
            Err(Error::NonAsciiReplacement { .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_replacements(Path::new("/no/such/replacements.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
