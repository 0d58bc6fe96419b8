use crate::domain::model::{EntryDraft, ProjectEntry};
use crate::utils::error::{FormError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses the budget field. Anything that is not a strictly positive whole
/// number is rejected before entries are even looked at.
pub fn validate_budget(raw: &str) -> Result<u64> {
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(FormError::InvalidBudget {
            value: raw.to_string(),
        }),
    }
}

/// Validates the drafts in form order, fail-fast: the first offending entry
/// produces the error and later entries are not inspected.
pub fn validate_entries(drafts: &[EntryDraft]) -> Result<Vec<ProjectEntry>> {
    if drafts.is_empty() {
        return Err(FormError::NoEntries);
    }

    let mut entries = Vec::with_capacity(drafts.len());

    for draft in drafts {
        let name = draft.name.trim();
        let cost = parse_positive(&draft.cost);
        let profit = parse_positive(&draft.profit);

        match (name.is_empty(), cost, profit) {
            (false, Some(cost), Some(profit)) => entries.push(ProjectEntry {
                name: name.to_string(),
                cost,
                profit,
            }),
            _ => {
                return Err(FormError::InvalidEntry {
                    name: if name.is_empty() {
                        "unnamed".to_string()
                    } else {
                        name.to_string()
                    },
                })
            }
        }
    }

    Ok(entries)
}

fn parse_positive(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|value| *value > 0)
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FormError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FormError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(FormError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::EntryId;

    fn draft(id: u64, name: &str, cost: &str, profit: &str) -> EntryDraft {
        EntryDraft {
            id: EntryId(id),
            name: name.to_string(),
            cost: cost.to_string(),
            profit: profit.to_string(),
        }
    }

    #[test]
    fn test_validate_budget() {
        assert_eq!(validate_budget("100").unwrap(), 100);
        assert_eq!(validate_budget(" 42 ").unwrap(), 42);
        assert!(validate_budget("0").is_err());
        assert!(validate_budget("-5").is_err());
        assert!(validate_budget("abc").is_err());
        assert!(validate_budget("").is_err());
        assert!(validate_budget("3.5").is_err());
    }

    #[test]
    fn test_validate_entries_accepts_well_formed() {
        let drafts = vec![draft(1, "Fund A", "30", "50"), draft(2, "Fund B", "20", "40")];
        let entries = validate_entries(&drafts).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Fund A");
        assert_eq!(entries[0].cost, 30);
        assert_eq!(entries[1].profit, 40);
    }

    #[test]
    fn test_validate_entries_empty_list() {
        assert!(matches!(validate_entries(&[]), Err(FormError::NoEntries)));
    }

    #[test]
    fn test_validate_entries_fails_on_first_offender() {
        let drafts = vec![
            draft(1, "Good", "10", "20"),
            draft(2, "Bad", "0", "20"),
            draft(3, "", "nonsense", "also nonsense"),
        ];

        match validate_entries(&drafts) {
            Err(FormError::InvalidEntry { name }) => assert_eq!(name, "Bad"),
            other => panic!("expected InvalidEntry for \"Bad\", got {:?}", other),
        }
    }

    #[test]
    fn test_validate_entries_blank_name_gets_placeholder() {
        let drafts = vec![draft(1, "   ", "10", "20")];

        match validate_entries(&drafts) {
            Err(FormError::InvalidEntry { name }) => assert_eq!(name, "unnamed"),
            other => panic!("expected InvalidEntry, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_entries_rejects_non_numeric_fields() {
        assert!(validate_entries(&[draft(1, "A", "ten", "20")]).is_err());
        assert!(validate_entries(&[draft(1, "A", "10", "")]).is_err());
        assert!(validate_entries(&[draft(1, "A", "-10", "20")]).is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("solver_endpoint", "https://example.com").is_ok());
        assert!(validate_url("solver_endpoint", "http://127.0.0.1:8000/optimizar").is_ok());
        assert!(validate_url("solver_endpoint", "").is_err());
        assert!(validate_url("solver_endpoint", "invalid-url").is_err());
        assert!(validate_url("solver_endpoint", "ftp://example.com").is_err());
    }
}
