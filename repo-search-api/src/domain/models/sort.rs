use std::str::FromStr;

use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantNames};

use crate::domain::ValidationError;

/// Field GitHub orders search results by.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, VariantNames, Serialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Stars,
    Forks,
    Updated,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, VariantNames, Serialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortField {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::from_str(value).map_err(|_| ValidationError::InvalidToken {
            field: "sort field",
            value: value.to_string(),
            allowed: Self::VARIANTS,
        })
    }
}

impl SortDirection {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::from_str(value).map_err(|_| ValidationError::InvalidToken {
            field: "sort direction",
            value: value.to_string(),
            allowed: Self::VARIANTS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_field_parses_case_insensitively() {
        assert_eq!(SortField::parse("stars").unwrap(), SortField::Stars);
        assert_eq!(SortField::parse("FORKS").unwrap(), SortField::Forks);
        assert_eq!(SortField::parse("UpDaTeD").unwrap(), SortField::Updated);
    }

    #[test]
    fn sort_direction_parses_case_insensitively() {
        assert_eq!(SortDirection::parse("asc").unwrap(), SortDirection::Asc);
        assert_eq!(SortDirection::parse("DESC").unwrap(), SortDirection::Desc);
    }

    #[test]
    fn tokens_render_lowercase() {
        assert_eq!(SortField::Updated.as_ref(), "updated");
        assert_eq!(SortDirection::Desc.to_string(), "desc");
    }

    #[test]
    fn unknown_sort_field_reports_value_and_allowed_set() {
        let err = SortField::parse("watchers").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid sort field: 'watchers'. Must be one of: stars, forks, updated"
        );
        assert_eq!(
            err.allowed_values(),
            Some(&["stars", "forks", "updated"][..])
        );
    }

    #[test]
    fn unknown_direction_reports_allowed_set() {
        let err = SortDirection::parse("sideways").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid sort direction: 'sideways'. Must be one of: asc, desc"
        );
    }
}
