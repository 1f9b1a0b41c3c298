use crate::domain::model::{Certification, Collaborator};

/// A record that can be matched by the search box.
pub trait Searchable {
    /// Fields the query is matched against, in display order.
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Certification {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.provider.as_str(),
            self.category.as_str(),
            self.collaborator.name.as_str(),
        ]
    }
}

impl Searchable for Collaborator {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.department.as_str(),
        ]
    }
}

/// Case-insensitive substring match over the record's search fields.
/// No accent folding: "chloe" does not match "Chloé".
pub fn matches<T: Searchable>(record: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Records matching `query`, in collection order.
pub fn filter<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    let filtered: Vec<&T> = records.iter().filter(|r| matches(*r, query)).collect();
    tracing::debug!(
        "Search '{}' matched {} of {} records",
        query,
        filtered.len(),
        records.len()
    );
    filtered
}
