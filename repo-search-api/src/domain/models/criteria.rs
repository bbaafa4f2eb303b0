use time::{macros::format_description, Date};

use super::{SortDirection, SortField};
use crate::domain::ValidationError;

pub const MIN_PAGE: i64 = 1;
pub const MAX_PAGE: i64 = u32::MAX as i64;
pub const MIN_PAGE_SIZE: i64 = 1;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Validated search parameters. Also the cache key, so equality and hashing
/// cover every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchCriteria {
    language: Option<String>,
    created_since: Option<Date>,
    sort: SortField,
    direction: SortDirection,
    page: u32,
    size: u32,
}

impl SearchCriteria {
    pub fn new(
        language: Option<String>,
        created_since: Option<Date>,
        sort: SortField,
        direction: SortDirection,
        page: i64,
        size: i64,
    ) -> Result<Self, ValidationError> {
        if page < MIN_PAGE {
            return Err(ValidationError::PageOutOfRange(page));
        }
        if page > MAX_PAGE {
            return Err(ValidationError::PageTooLarge(page));
        }
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&size) {
            return Err(ValidationError::SizeOutOfRange(size));
        }

        Ok(Self {
            language,
            created_since,
            sort,
            direction,
            page: page as u32,
            size: size as u32,
        })
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn created_since(&self) -> Option<Date> {
        self.created_since
    }

    pub fn sort(&self) -> SortField {
        self.sort
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// 1-based page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }
}

/// Search parameters as they arrive from a caller, before validation.
#[derive(Debug, Clone, Default)]
pub struct RawSearchCriteria {
    pub language: Option<String>,
    pub created_since: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl TryFrom<RawSearchCriteria> for SearchCriteria {
    type Error = ValidationError;

    fn try_from(raw: RawSearchCriteria) -> Result<Self, Self::Error> {
        let sort = raw
            .sort
            .as_deref()
            .ok_or(ValidationError::Missing { field: "sort" })
            .and_then(SortField::parse)?;
        let direction = raw
            .direction
            .as_deref()
            .ok_or(ValidationError::Missing { field: "direction" })
            .and_then(SortDirection::parse)?;
        let page = raw.page.ok_or(ValidationError::Missing { field: "page" })?;
        let size = raw.size.ok_or(ValidationError::Missing { field: "size" })?;

        let created_since = raw
            .created_since
            .as_deref()
            .map(parse_iso_date)
            .transpose()?;

        Self::new(raw.language, created_since, sort, direction, page, size)
    }
}

/// Parse a `YYYY-MM-DD` calendar date, ignoring surrounding whitespace.
pub fn parse_iso_date(value: &str) -> Result<Date, ValidationError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(value.trim(), &format).map_err(|_| ValidationError::InvalidDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use time::macros::date;

    use super::*;

    fn raw() -> RawSearchCriteria {
        RawSearchCriteria {
            language: Some("rust".to_string()),
            created_since: Some("2020-01-01".to_string()),
            sort: Some("stars".to_string()),
            direction: Some("desc".to_string()),
            page: Some(1),
            size: Some(10),
        }
    }

    #[test]
    fn valid_raw_criteria_are_accepted() {
        let criteria = SearchCriteria::try_from(raw()).unwrap();

        assert_eq!(criteria.language(), Some("rust"));
        assert_eq!(criteria.created_since(), Some(date!(2020 - 01 - 01)));
        assert_eq!(criteria.sort(), SortField::Stars);
        assert_eq!(criteria.direction(), SortDirection::Desc);
        assert_eq!(criteria.page(), 1);
        assert_eq!(criteria.size(), 10);
    }

    #[test]
    fn tokens_are_case_insensitive() {
        let criteria = SearchCriteria::try_from(RawSearchCriteria {
            sort: Some("Updated".to_string()),
            direction: Some("ASC".to_string()),
            ..raw()
        })
        .unwrap();

        assert_eq!(criteria.sort(), SortField::Updated);
        assert_eq!(criteria.direction(), SortDirection::Asc);
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        let cases = [
            (RawSearchCriteria { sort: None, ..raw() }, "sort"),
            (RawSearchCriteria { direction: None, ..raw() }, "direction"),
            (RawSearchCriteria { page: None, ..raw() }, "page"),
            (RawSearchCriteria { size: None, ..raw() }, "size"),
        ];

        for (input, field) in cases {
            assert_eq!(
                SearchCriteria::try_from(input).unwrap_err(),
                ValidationError::Missing { field }
            );
        }
    }

    #[test]
    fn optional_filters_may_be_absent() {
        let criteria = SearchCriteria::try_from(RawSearchCriteria {
            language: None,
            created_since: None,
            ..raw()
        })
        .unwrap();

        assert_eq!(criteria.language(), None);
        assert_eq!(criteria.created_since(), None);
    }

    #[test]
    fn page_must_be_at_least_one() {
        for page in [0, -1, i64::MIN] {
            let err = SearchCriteria::try_from(RawSearchCriteria {
                page: Some(page),
                ..raw()
            })
            .unwrap_err();
            assert_eq!(err, ValidationError::PageOutOfRange(page));
        }
    }

    #[test]
    fn page_must_fit_the_page_counter() {
        let criteria = SearchCriteria::try_from(RawSearchCriteria {
            page: Some(MAX_PAGE),
            ..raw()
        })
        .unwrap();
        assert_eq!(criteria.page(), u32::MAX);

        let err = SearchCriteria::try_from(RawSearchCriteria {
            page: Some(99_999_999_999),
            ..raw()
        })
        .unwrap_err();
        assert_eq!(err, ValidationError::PageTooLarge(99_999_999_999));
        assert_eq!(
            err.to_string(),
            "Page must be less than or equal to 4294967295, got 99999999999"
        );
    }

    #[test]
    fn size_bounds_are_inclusive() {
        for size in [1, 50, 100] {
            let criteria = SearchCriteria::try_from(RawSearchCriteria {
                size: Some(size),
                ..raw()
            })
            .unwrap();
            assert_eq!(criteria.size() as i64, size);
        }

        for size in [0, 101, -5] {
            let err = SearchCriteria::try_from(RawSearchCriteria {
                size: Some(size),
                ..raw()
            })
            .unwrap_err();
            assert_eq!(err, ValidationError::SizeOutOfRange(size));
        }
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        let err = SearchCriteria::try_from(RawSearchCriteria {
            sort: Some("watchers".to_string()),
            ..raw()
        })
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidToken { field: "sort field", .. }));

        let err = SearchCriteria::try_from(RawSearchCriteria {
            direction: Some("up".to_string()),
            ..raw()
        })
        .unwrap_err();
        assert_eq!(err.allowed_values(), Some(&["asc", "desc"][..]));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let err = SearchCriteria::try_from(RawSearchCriteria {
            created_since: Some("01/02/2020".to_string()),
            ..raw()
        })
        .unwrap_err();
        assert_eq!(err, ValidationError::InvalidDate("01/02/2020".to_string()));
    }

    #[test]
    fn equal_criteria_hash_equally() {
        let a = SearchCriteria::try_from(raw()).unwrap();
        let b = SearchCriteria::try_from(RawSearchCriteria {
            sort: Some("STARS".to_string()),
            ..raw()
        })
        .unwrap();
        let c = SearchCriteria::try_from(RawSearchCriteria {
            page: Some(2),
            ..raw()
        })
        .unwrap();

        let set: HashSet<_> = [a.clone(), b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&a));
    }
}
