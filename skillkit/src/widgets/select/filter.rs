//! Prefix filtering for the inline filter input.

use log::warn;
use regex::{Regex, RegexBuilder};

use super::SelectOption;

/// Anchored, case-insensitive pattern matching values that start with `query`.
/// The query is literal text; regex metacharacters are escaped.
fn prefix_pattern(query: &str) -> Option<Regex> {
    RegexBuilder::new(&format!("^{}", regex::escape(query)))
        .case_insensitive(true)
        .build()
        .map_err(|e| warn!("Failed to build filter pattern for {:?}: {}", query, e))
        .ok()
}

/// Options whose value starts with `query`, ignoring case, in original order.
pub fn filter_prefix(options: &[SelectOption], query: &str) -> Vec<SelectOption> {
    if query.is_empty() {
        return options.to_vec();
    }

    match prefix_pattern(query) {
        Some(re) => options
            .iter()
            .filter(|option| re.is_match(&option.value))
            .cloned()
            .collect(),
        None => lowercase_prefix(options, query),
    }
}

/// Plain string comparison used when the pattern cannot be built, e.g. for a
/// query over the regex size limit.
fn lowercase_prefix(options: &[SelectOption], query: &str) -> Vec<SelectOption> {
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|option| option.value.to_lowercase().starts_with(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> Vec<SelectOption> {
        vec![
            SelectOption::new("1", "Apple"),
            SelectOption::new("2", "Banana"),
            SelectOption::new("3", "Apricot"),
        ]
    }

    #[test]
    fn test_prefix_is_case_insensitive() {
        let ids: Vec<_> = filter_prefix(&fruit(), "aP").into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_only_prefix_not_substring() {
        assert!(filter_prefix(&fruit(), "nana").is_empty());
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let options = vec![
            SelectOption::new("a", "C++"),
            SelectOption::new("b", "C#"),
            SelectOption::new("c", "Clojure"),
        ];
        let ids: Vec<_> = filter_prefix(&options, "c+").into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["a"]);
        assert!(filter_prefix(&options, ".*").is_empty());
    }

    #[test]
    fn test_lowercase_prefix_matches_pattern_filter() {
        let options = vec![
            SelectOption::new("1", "Apple"),
            SelectOption::new("2", "apricot"),
            SelectOption::new("3", "C++"),
            SelectOption::new("4", "Banana"),
        ];
        for query in ["a", "AP", "c+", "nana", "Banana!"] {
            assert_eq!(
                lowercase_prefix(&options, query),
                filter_prefix(&options, query),
                "query {:?}",
                query
            );
        }
        let ids: Vec<_> = lowercase_prefix(&options, "aP").into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        assert_eq!(filter_prefix(&fruit(), ""), fruit());
    }
}
