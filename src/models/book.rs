//! Book model

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Assigned by the store, never by the caller
    pub id: i64,
    pub title: String,
    pub description: String,
    pub author: String,
}

/// Create / full replace request
///
/// Fields that are missing or not strings decode as empty strings. Any `id`
/// sent by the client is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct BookCandidate {
    pub title: String,
    pub description: String,
    pub author: String,
}

/// Partial update request
///
/// Only string-valued fields are kept. Unknown fields and fields of any other
/// JSON type (including `null`) are dropped during decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct BookPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
}

impl Book {
    /// Build a stored record from a candidate and an assigned id
    pub fn from_candidate(id: i64, candidate: BookCandidate) -> Self {
        Self {
            id,
            title: candidate.title,
            description: candidate.description,
            author: candidate.author,
        }
    }

    /// Overwrite every mutable field; the id is kept
    pub fn replace_with(&mut self, candidate: BookCandidate) {
        self.title = candidate.title;
        self.description = candidate.description;
        self.author = candidate.author;
    }

    /// Overwrite only the fields present in the patch
    pub fn apply(&mut self, patch: BookPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
    }
}

impl BookCandidate {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            author: author.into(),
        }
    }

    /// Decode a replace body without ever rejecting it.
    ///
    /// A body that is not a JSON object yields a candidate with every field
    /// empty, so a full replace then clears the record.
    pub fn from_slice_lenient(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

impl BookPatch {
    /// True when the patch would leave a record unchanged
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.author.is_none()
    }
}

/// Field names accepted on input: lowercase, then the capitalized form
const TITLE: [&str; 2] = ["title", "Title"];
const DESCRIPTION: [&str; 2] = ["description", "Description"];
const AUTHOR: [&str; 2] = ["author", "Author"];

// Decoding through a map makes repeated keys last-wins instead of an error.
// The capitalized spelling overrides the lowercase one when both are strings.
fn string_field(object: &Map<String, Value>, names: [&str; 2]) -> Option<String> {
    names
        .iter()
        .rev()
        .find_map(|name| match object.get(*name) {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        })
}

impl From<Map<String, Value>> for BookCandidate {
    fn from(object: Map<String, Value>) -> Self {
        Self {
            title: string_field(&object, TITLE).unwrap_or_default(),
            description: string_field(&object, DESCRIPTION).unwrap_or_default(),
            author: string_field(&object, AUTHOR).unwrap_or_default(),
        }
    }
}

impl From<Map<String, Value>> for BookPatch {
    fn from(object: Map<String, Value>) -> Self {
        Self {
            title: string_field(&object, TITLE),
            description: string_field(&object, DESCRIPTION),
            author: string_field(&object, AUTHOR),
        }
    }
}

impl<'de> Deserialize<'de> for BookCandidate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Map::deserialize(deserializer).map(Self::from)
    }
}

impl<'de> Deserialize<'de> for BookPatch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Map::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Book {
        Book {
            id: 5,
            title: "A".to_string(),
            description: "B".to_string(),
            author: "C".to_string(),
        }
    }

    #[test]
    fn test_book_serializes_expected_fields() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({ "id": 5, "title": "A", "description": "B", "author": "C" })
        );
    }

    #[test]
    fn test_candidate_ignores_client_id() {
        let candidate: BookCandidate =
            serde_json::from_value(json!({ "id": 99, "title": "1984" })).unwrap();
        assert_eq!(candidate, BookCandidate::new("1984", "", ""));
    }

    #[test]
    fn test_candidate_accepts_capitalized_names() {
        let candidate: BookCandidate = serde_json::from_value(json!({
            "Title": "Emma",
            "Description": "A comedy of manners.",
            "Author": "Jane Austen"
        }))
        .unwrap();
        assert_eq!(
            candidate,
            BookCandidate::new("Emma", "A comedy of manners.", "Jane Austen")
        );
    }

    #[test]
    fn test_candidate_wrong_type_is_empty() {
        let candidate: BookCandidate =
            serde_json::from_value(json!({ "title": 42, "author": "X" })).unwrap();
        assert_eq!(candidate, BookCandidate::new("", "", "X"));
    }

    #[test]
    fn test_candidate_lenient_on_garbage() {
        assert_eq!(
            BookCandidate::from_slice_lenient(b"{not json"),
            BookCandidate::default()
        );
        assert_eq!(BookCandidate::from_slice_lenient(b""), BookCandidate::default());
        assert_eq!(
            BookCandidate::from_slice_lenient(br#"{"title":"X"}"#),
            BookCandidate::new("X", "", "")
        );
    }

    #[test]
    fn test_patch_skips_unknown_and_mistyped_fields() {
        let patch: BookPatch = serde_json::from_value(json!({
            "title": "X",
            "description": 7,
            "author": null,
            "isbn": "123"
        }))
        .unwrap();
        assert_eq!(patch.title.as_deref(), Some("X"));
        assert!(patch.description.is_none());
        assert!(patch.author.is_none());
    }

    #[test]
    fn test_candidate_repeated_keys_last_wins() {
        let candidate: BookCandidate =
            serde_json::from_str(r#"{"title":"X","title":"Y","author":"A"}"#).unwrap();
        assert_eq!(candidate, BookCandidate::new("Y", "", "A"));
    }

    #[test]
    fn test_candidate_capitalized_overrides_lowercase() {
        let candidate: BookCandidate =
            serde_json::from_str(r#"{"title":"X","Title":"Y","author":"A"}"#).unwrap();
        assert_eq!(candidate, BookCandidate::new("Y", "", "A"));

        let candidate =
            BookCandidate::from_slice_lenient(br#"{"Title":"Y","title":"X","author":"A"}"#);
        assert_eq!(candidate, BookCandidate::new("Y", "", "A"));
    }

    #[test]
    fn test_patch_mistyped_name_falls_back_to_other_spelling() {
        let patch: BookPatch =
            serde_json::from_str(r#"{"title":5,"Title":"X","author":"A","author":"B"}"#).unwrap();
        assert_eq!(patch.title.as_deref(), Some("X"));
        assert_eq!(patch.author.as_deref(), Some("B"));
        assert!(patch.description.is_none());

        let patch: BookPatch = serde_json::from_str(r#"{"title":"X","Title":null}"#).unwrap();
        assert_eq!(patch.title.as_deref(), Some("X"));
    }

    #[test]
    fn test_null_patch_is_empty() {
        let patch = serde_json::from_str::<Option<BookPatch>>("null")
            .unwrap()
            .unwrap_or_default();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_patch_rejects_non_object() {
        assert!(serde_json::from_slice::<BookPatch>(b"[1, 2]").is_err());
        assert!(serde_json::from_slice::<BookPatch>(b"{oops").is_err());
    }

    #[test]
    fn test_apply_preserves_untouched_fields() {
        let mut book = sample();
        book.apply(BookPatch {
            title: Some("X".to_string()),
            ..Default::default()
        });
        assert_eq!(book.title, "X");
        assert_eq!(book.description, "B");
        assert_eq!(book.author, "C");
        assert_eq!(book.id, 5);
    }

    #[test]
    fn test_replace_resets_absent_fields() {
        let mut book = sample();
        book.replace_with(BookCandidate::new("X", "", ""));
        assert_eq!(
            book,
            Book {
                id: 5,
                title: "X".to_string(),
                description: String::new(),
                author: String::new(),
            }
        );
    }

    #[test]
    fn test_empty_patch() {
        assert!(BookPatch::default().is_empty());
        let patch: BookPatch = serde_json::from_value(json!({ "pages": 300 })).unwrap();
        assert!(patch.is_empty());
    }
}
