//! Case-insensitive substring search over record lists.
//!
//! Every list view filters the same way: a record is kept when at least one
//! of its searchable fields contains the query, ignoring case. There is no
//! tokenization, ranking or fuzzy matching, and the original order is kept.
//!
//! ```
//! use miss_accessories_core::{SearchQuery, filter_records};
//!
//! struct Product { name: String, sku: String }
//!
//! let products = vec![
//!     Product { name: "Silver Hoop Earrings".into(), sku: "SHE-001".into() },
//!     Product { name: "Pearl Necklace".into(), sku: "PN-004".into() },
//! ];
//!
//! let query = SearchQuery::new("pn-");
//! let hits = filter_records(&products, &query, |p| [p.name.as_str(), p.sku.as_str()]);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].name, "Pearl Necklace");
//! ```

/// A normalized search term.
///
/// The raw input is lowercased once; it is not trimmed, so a query of `" "`
/// matches fields that contain a space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    /// Build a query from user input.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_owned(),
            needle: raw.to_lowercase(),
        }
    }

    /// Build a query from an optional query-string parameter.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        param.map_or_else(Self::default, Self::new)
    }

    /// The input exactly as the user typed it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether this query matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Whether `field` contains the query, ignoring case.
    #[must_use]
    pub fn matches(&self, field: &str) -> bool {
        self.is_empty() || field.to_lowercase().contains(&self.needle)
    }

    /// Whether any of `fields` contains the query, ignoring case.
    pub fn matches_any<'f>(&self, fields: impl IntoIterator<Item = &'f str>) -> bool {
        self.is_empty() || fields.into_iter().any(|field| self.matches(field))
    }
}

/// Keep the records where at least one selected field matches `query`.
///
/// `fields` picks the searchable text of a record. The result preserves the
/// input order and borrows from it; an empty query returns every record.
pub fn filter_records<'a, T, I, F, const N: usize>(
    records: I,
    query: &SearchQuery,
    fields: F,
) -> Vec<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> [&str; N],
{
    records
        .into_iter()
        .filter(|record| query.matches_any(fields(*record)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Person {
        name: &'static str,
        email: &'static str,
        phone: &'static str,
    }

    fn people() -> Vec<Person> {
        vec![
            Person {
                name: "Sarah Johnson",
                email: "sarah.j@email.com",
                phone: "+1234567890",
            },
            Person {
                name: "Emily Davis",
                email: "emily.davis@email.com",
                phone: "+1234567891",
            },
            Person {
                name: "Maria Garcia",
                email: "maria.g@email.com",
                phone: "+1234567892",
            },
            Person {
                name: "Jessica Wilson",
                email: "jessica.w@email.com",
                phone: "+1234567893",
            },
            Person {
                name: "Amanda Brown",
                email: "amanda.b@email.com",
                phone: "+1234567894",
            },
        ]
    }

    fn contact_fields(p: &Person) -> [&str; 3] {
        [p.name, p.email, p.phone]
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let people = people();
        let hits = filter_records(&people, &SearchQuery::new(""), contact_fields);
        let expected: Vec<&Person> = people.iter().collect();
        assert_eq!(hits, expected);
    }

    #[test]
    fn test_case_insensitive() {
        let people = people();
        let hits = filter_records(&people, &SearchQuery::new("SARAH"), contact_fields);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Sarah Johnson");
    }

    #[test]
    fn test_any_field_matches() {
        let people = people();

        let by_email = filter_records(&people, &SearchQuery::new("davis@"), contact_fields);
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].name, "Emily Davis");

        let by_phone = filter_records(&people, &SearchQuery::new("7894"), contact_fields);
        assert_eq!(by_phone.len(), 1);
        assert_eq!(by_phone[0].name, "Amanda Brown");
    }

    #[test]
    fn test_preserves_original_order() {
        let people = people();
        let hits = filter_records(&people, &SearchQuery::new("son"), |p| [p.name]);
        let names: Vec<&str> = hits.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Sarah Johnson", "Jessica Wilson"]);
    }

    #[test]
    fn test_idempotent() {
        let people = people();
        for term in ["", "a", "MARIA", "email.com", "zzz", "+12345678"] {
            let query = SearchQuery::new(term);
            let once = filter_records(&people, &query, contact_fields);
            let twice = filter_records(once.iter().copied(), &query, contact_fields);
            assert_eq!(once, twice, "filtering twice by {term:?} changed the result");
        }
    }

    #[test]
    fn test_no_match() {
        let people = people();
        let hits = filter_records(&people, &SearchQuery::new("necklace"), contact_fields);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let query = SearchQuery::new(" ");
        assert!(!query.is_empty());
        assert!(query.matches("Sarah Johnson"));
        assert!(!query.matches("SHE-001"));
    }

    #[test]
    fn test_from_param() {
        assert!(SearchQuery::from_param(None).is_empty());
        assert_eq!(SearchQuery::from_param(Some("Pearl")).as_str(), "Pearl");
    }
}
