//! The parsing request — the unit of work for prompt construction.
//!
//! A `ParseRequest` carries everything the prompt assembler needs to render
//! the two prompt parts: the target schema, entity-linking results, the
//! current date, and free-form context carried over from prior turns. It is
//! immutable for the duration of prompt construction.

use serde::{Deserialize, Serialize};

use crate::error::RequestError;

/// A natural-language parsing request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseRequest {
    /// The raw user question.
    pub query_text: String,

    /// The target dataset schema.
    pub schema: ParseSchema,

    /// Entity-linking results: field values already resolved upstream.
    #[serde(default)]
    pub linked_values: Vec<LinkedValue>,

    /// The current date, pre-formatted by the caller.
    pub current_date: String,

    /// Free-form context carried from prior conversation turns. May be empty.
    #[serde(default)]
    pub prior_context: String,
}

/// The target dataset's structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseSchema {
    /// Dataset (table) name.
    pub dataset_name: String,

    /// Field names, in presentation order.
    pub field_names: Vec<String>,

    /// Business-glossary terms attached to this dataset. May be empty.
    #[serde(default)]
    pub terms: Vec<Term>,
}

/// A business-glossary entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    /// Unique display label.
    pub name: String,

    /// Optional explanatory text. Blank descriptions are treated as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Alternate names, in presentation order. May be empty.
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// One entity-linking result: a value recognized in the question mapped to
/// the schema field it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedValue {
    /// The schema field the value belongs to.
    pub field_name: String,

    /// The value as recognized in the question.
    pub field_value: String,
}

impl ParseRequest {
    /// Check the fields required for prompt assembly.
    ///
    /// Assembly is all-or-nothing: callers validate before building any
    /// prompt text, so a malformed request never yields a partial render.
    pub fn validate(&self) -> std::result::Result<(), RequestError> {
        if self.schema.dataset_name.trim().is_empty() {
            return Err(RequestError::MissingDatasetName);
        }
        if self.schema.field_names.is_empty() {
            return Err(RequestError::EmptyFieldList);
        }
        Ok(())
    }
}
