//! Parser for the seed data files.
//!
//! Two `::`-separated formats are supported:
//! - techniques.dat: id::slug::category::name::duration_minutes::instruction
//! - accounts.dat: token::athlete_uuid::display_name::role
//!
//! Blank lines and lines starting with `#` are ignored. The last field of a
//! technique record is free text and may itself contain `::`.

use crate::error::{CatalogError, Result};
use crate::types::*;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a seed file and return its meaningful lines with their 1-based numbers
fn read_records(path: &Path) -> Result<Vec<(usize, String)>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;

    Ok(content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim().to_string()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .collect())
}

/// Pull the next field off a record, reporting which one was missing
fn next_field<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    file: &str,
    line: usize,
    name: &str,
) -> Result<&'a str> {
    parts
        .next()
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .ok_or_else(|| CatalogError::ParseError {
            file: file.to_string(),
            line,
            reason: format!("Missing {}", name),
        })
}

/// Parse the techniques.dat file
///
/// Format: id::slug::category::name::duration_minutes::instruction
pub fn parse_techniques(path: &Path) -> Result<Vec<Technique>> {
    const FILE: &str = "techniques.dat";
    let mut techniques = Vec::new();

    for (line_no, line) in read_records(path)? {
        let mut parts = line.splitn(6, "::");

        let id = next_field(&mut parts, FILE, line_no, "id")?;
        let slug = next_field(&mut parts, FILE, line_no, "slug")?;
        let category = next_field(&mut parts, FILE, line_no, "category")?;
        let name = next_field(&mut parts, FILE, line_no, "name")?;
        let duration = next_field(&mut parts, FILE, line_no, "duration_minutes")?;
        let instruction = next_field(&mut parts, FILE, line_no, "instruction")?;

        let technique = Technique {
            id: id.parse().map_err(|e| CatalogError::ParseError {
                file: FILE.to_string(),
                line: line_no,
                reason: format!("Invalid id: {}", e),
            })?,
            slug: slug.to_string(),
            name: name.to_string(),
            category: category.parse()?,
            instruction: instruction.to_string(),
            duration_minutes: duration.parse().map_err(|e| CatalogError::ParseError {
                file: FILE.to_string(),
                line: line_no,
                reason: format!("Invalid duration_minutes: {}", e),
            })?,
        };

        techniques.push(technique);
    }

    Ok(techniques)
}

/// Parse the accounts.dat file
///
/// Format: token::athlete_uuid::display_name::role
pub fn parse_accounts(path: &Path) -> Result<Vec<Account>> {
    const FILE: &str = "accounts.dat";
    let mut accounts = Vec::new();

    for (line_no, line) in read_records(path)? {
        let mut parts = line.split("::");

        let token = next_field(&mut parts, FILE, line_no, "token")?;
        let id = next_field(&mut parts, FILE, line_no, "athlete id")?;
        let display_name = next_field(&mut parts, FILE, line_no, "display_name")?;
        let role = next_field(&mut parts, FILE, line_no, "role")?;

        accounts.push(Account {
            id: id.parse().map_err(|e| CatalogError::ParseError {
                file: FILE.to_string(),
                line: line_no,
                reason: format!("Invalid athlete id: {}", e),
            })?,
            token: token.to_string(),
            display_name: display_name.to_string(),
            role: role.parse()?,
        });
    }

    Ok(accounts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Removed when the returned handle drops
    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_techniques() {
        let file = write_temp(
            "# id::slug::category::name::minutes::instruction\n\
             1::box_breathing::breathing::Box Breathing::2::Inhale 4, hold 4, exhale 4, hold 4\n\
             \n\
             2::focus_word::focus::Focus Word::1::Pick a cue word :: say it before each play\n",
        );

        let techniques = parse_techniques(file.path()).unwrap();
        assert_eq!(techniques.len(), 2);
        assert_eq!(techniques[0].slug, "box_breathing");
        assert_eq!(techniques[0].category, Category::Breathing);
        assert_eq!(techniques[0].duration_minutes, 2);
        assert_eq!(
            techniques[1].instruction,
            "Pick a cue word :: say it before each play"
        );
    }

    #[test]
    fn test_parse_techniques_reports_line() {
        let file = write_temp("1::box_breathing::breathing::Box\n");

        match parse_techniques(file.path()) {
            Err(CatalogError::ParseError { line, reason, .. }) => {
                assert_eq!(line, 1);
                assert!(reason.contains("duration_minutes"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_techniques_rejects_unknown_category() {
        let file = write_temp("1::x::juggling::X::1::Juggle\n");
        assert!(matches!(
            parse_techniques(file.path()),
            Err(CatalogError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_parse_accounts() {
        let file = write_temp(
            "tok-1::6f1c1a4e-8a3b-4c55-9a55-3d1f2b7c9e01::Jordan::athlete\n\
             tok-2::0b8d7f62-3c1e-4a9f-8d2b-5e6f7a8b9c0d::Coach Lee::coach\n",
        );

        let accounts = parse_accounts(file.path()).unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].token, "tok-1");
        assert_eq!(accounts[1].role, Role::Coach);
    }

    #[test]
    fn test_missing_file() {
        let result = parse_accounts(Path::new("/definitely/not/here/accounts.dat"));
        assert!(matches!(result, Err(CatalogError::FileNotFound { .. })));
    }
}
