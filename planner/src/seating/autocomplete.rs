//! Name suggestions for the seat lookup box

use shared::models::Guest;

use super::finder::normalize;

/// Shortest query, in characters, that produces suggestions
pub const MIN_QUERY_CHARS: usize = 2;

/// Upper bound on suggestions shown at once
pub const MAX_SUGGESTIONS: usize = 5;

/// Up to [`MAX_SUGGESTIONS`] guests whose name contains `query`, in collection order.
pub fn suggest<'a>(query: &str, guests: &'a [Guest]) -> Vec<&'a Guest> {
    let query = normalize(query);
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }
    guests
        .iter()
        .filter(|g| normalize(&g.name).contains(&query))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Suggestion box state
///
/// Suggestions follow the query as it is typed and hide once the query is
/// dispatched to the resolver, until the query is edited again.
#[derive(Debug, Clone, Default)]
pub struct Autocomplete {
    query: String,
    suggestions: Vec<Guest>,
    suppressed: bool,
}

impl Autocomplete {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Query edited by the user
    pub fn set_query(&mut self, query: impl Into<String>, guests: &[Guest]) {
        self.query = query.into();
        self.suppressed = false;
        self.refresh(guests);
    }

    /// Guest list changed under the current query
    pub fn refresh(&mut self, guests: &[Guest]) {
        self.suggestions = suggest(&self.query, guests).into_iter().cloned().collect();
    }

    /// Query submitted; returns what should be resolved.
    pub fn dispatch(&mut self) -> &str {
        self.suppressed = true;
        &self.query
    }

    /// Suggestion picked; fills the box with the guest's name and dispatches it.
    pub fn select(&mut self, guest: &Guest) -> &str {
        self.query = guest.name.clone();
        self.dispatch()
    }

    pub fn visible(&self) -> &[Guest] {
        if self.suppressed {
            &[]
        } else {
            &self.suggestions
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guests(names: &[&str]) -> Vec<Guest> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                serde_json::from_value(serde_json::json!({"id": i.to_string(), "name": name}))
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_short_query_has_no_suggestions() {
        let list = guests(&["Ana", "Anabel"]);
        assert!(suggest("a", &list).is_empty());
        assert_eq!(suggest("an", &list).len(), 2);
    }

    #[test]
    fn test_query_length_counts_characters() {
        let list = guests(&["Émile"]);
        assert!(suggest("é", &list).is_empty());
        assert_eq!(suggest("ém", &list).len(), 1);
    }

    #[test]
    fn test_whitespace_counts_toward_length() {
        let list = guests(&["Ana Lopez", "Bo"]);
        let names: Vec<_> = suggest("a ", &list).iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Ana Lopez"]);
        assert!(suggest("bo ", &list).is_empty());
    }

    #[test]
    fn test_at_most_five_in_order() {
        let list = guests(&["Lee 1", "Lee 2", "Bo", "Lee 3", "Lee 4", "Lee 5", "Lee 6"]);
        let names: Vec<_> = suggest("LEE", &list).iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Lee 1", "Lee 2", "Lee 3", "Lee 4", "Lee 5"]);
    }

    #[test]
    fn test_dispatch_suppresses_until_edited() {
        let list = guests(&["Jane Doe", "Jane Smith"]);
        let mut box_ = Autocomplete::new();

        box_.set_query("jane", &list);
        assert_eq!(box_.visible().len(), 2);

        assert_eq!(box_.dispatch(), "jane");
        assert!(box_.visible().is_empty());

        box_.refresh(&list);
        assert!(box_.visible().is_empty());

        box_.set_query("jane s", &list);
        assert_eq!(box_.visible().len(), 1);
    }

    #[test]
    fn test_select_fills_query() {
        let list = guests(&["Jane Doe", "Jane Smith"]);
        let mut box_ = Autocomplete::new();
        box_.set_query("ja", &list);

        let picked = list[1].clone();
        assert_eq!(box_.select(&picked), "Jane Smith");
        assert_eq!(box_.query(), "Jane Smith");
        assert!(box_.visible().is_empty());
    }
}
