//! Note domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A stored note. Timestamps are free text supplied by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Note {
    #[schema(example = "0190a6f2-7b1c-7d4e-9a3f-5c2b1e8d4f60")]
    pub id: Uuid,
    #[schema(example = "Lista de compras")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}

/// Note data before the store assigns an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub description: Option<String>,
    pub created: Option<String>,
    pub modified: Option<String>,
}

impl NewNote {
    pub fn into_note(self, id: Uuid) -> Note {
        Note {
            id,
            title: self.title,
            description: self.description,
            created: self.created,
            modified: self.modified,
        }
    }
}
