//! Result ordering

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    /// Parse an ordering key: `name` sorts ascending, `-name` descending
    pub fn parse_key(key: &str) -> (&str, SortOrder) {
        match key.strip_prefix('-') {
            Some(field) => (field, SortOrder::Desc),
            None => (key, SortOrder::Asc),
        }
    }
}
