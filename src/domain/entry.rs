/// Status given to every entry on creation. The waitlist also describes
/// "served" and "cancelled" states, but no operation transitions an entry
/// out of "waiting" yet; the field stays free text until one exists.
pub const DEFAULT_STATUS: &str = "waiting";

/// A single waitlisted person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub status: String,
}

/// Validated input for a new entry. A `NewEntry` always carries a non-empty,
/// trimmed name; `parse` is the single place that rule is enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub name: String,
    pub phone: Option<String>,
}

impl NewEntry {
    // None means "no usable name"; the caller decides whether that is a
    // silent no-op (the form) or a 400 (the API)
    pub fn parse(name: Option<String>, phone: Option<String>) -> Option<Self> {
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())?;

        // blank phone fields become NULL rather than empty strings
        let phone = phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        Some(Self { name, phone })
    }
}
