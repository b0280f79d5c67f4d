use crate::domain::Entry;
use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

// row shape exactly as sqlite hands it back
#[derive(sqlx::FromRow, Eq, PartialEq, Clone, Display)]
#[display("{}", name)]
pub struct DbEntry {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub status: String,
}

impl From<DbEntry> for Entry {
    fn from(db_entry: DbEntry) -> Self {
        Entry {
            id: db_entry.id,
            name: db_entry.name,
            phone: db_entry.phone,
            status: db_entry.status,
        }
    }
}

// wire shape for /api/list; a missing phone serializes as null
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct JsonEntry {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub status: String,
}

impl From<&Entry> for JsonEntry {
    fn from(entry: &Entry) -> Self {
        JsonEntry {
            id: entry.id,
            name: entry.name.clone(),
            phone: entry.phone.clone(),
            status: entry.status.clone(),
        }
    }
}

// browser form fields; both optional so a blank submission still deserializes
#[derive(Deserialize)]
pub struct AddEntryForm {
    pub name: Option<String>,
    pub phone: Option<String>,
}

// body of POST /api/add; name is checked by hand so we control the 400 payload
#[derive(Deserialize)]
pub struct AddEntryRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
}
