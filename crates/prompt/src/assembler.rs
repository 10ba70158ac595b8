//! Prompt assembly — deterministic rendering of the two prompt parts.
//!
//! The assembler turns a validated `ParseRequest` into:
//!
//! 1. **Schema descriptor** — one line naming the dataset and its columns
//! 2. **Augmented question** — the raw question followed by a
//!    parenthesized supplementary block: entity-linking statements, the
//!    current date, the business-term glossary, and verbatim prior context
//!
//! # Determinism
//!
//! Rendering is a pure function of the request and the phrase pack:
//! identical inputs always produce byte-identical output. All four
//! supplementary segments appear even when empty — empty segments render
//! as empty text between separators, keeping the template shape stable for
//! the downstream parser.

use serde::{Deserialize, Serialize};
use tracing::debug;

use nl2sql_core::error::RequestError;
use nl2sql_core::request::{ParseRequest, Term};

use crate::phrases::{fill, PhrasePack};

/// The two independent prompt parts consumed by the LLM request template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptParts {
    /// Compact textual representation of the target dataset's structure.
    pub schema_descriptor: String,
    /// The question with all contextual hints embedded.
    pub augmented_question: String,
}

/// Renders prompt parts with a fixed phrase pack.
#[derive(Debug, Clone, Default)]
pub struct PromptAssembler {
    phrases: PhrasePack,
}

impl PromptAssembler {
    /// Create an assembler with the default (zh-CN) phrase pack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an assembler with a specific phrase pack.
    pub fn with_phrases(phrases: PhrasePack) -> Self {
        Self { phrases }
    }

    /// Render the schema descriptor and augmented question.
    ///
    /// All-or-nothing: a malformed request fails before any text is built,
    /// never after a partial render.
    pub fn render(&self, request: &ParseRequest) -> Result<PromptParts, RequestError> {
        request.validate()?;

        let schema_descriptor = format!(
            "Table: {}, Columns = [{}]",
            request.schema.dataset_name,
            request.schema.field_names.join(", ")
        );

        let linking = request
            .linked_values
            .iter()
            .map(|lv| {
                fill(
                    &self.phrases.linking_template,
                    &[("value", &lv.field_value), ("field", &lv.field_name)],
                )
            })
            .collect::<Vec<_>>()
            .join(&self.phrases.linking_joiner);

        let date_statement = fill(&self.phrases.date_template, &[("date", &request.current_date)]);
        let term_block = self.term_block(&request.schema.terms);

        let sep = &self.phrases.segment_separator;
        let augmented_question = format!(
            "{} ({}{linking}{sep}{date_statement}{sep}{term_block}{sep}{})",
            request.query_text, self.phrases.supplementary_lead, request.prior_context
        );

        debug!(
            fields = request.schema.field_names.len(),
            linked = request.linked_values.len(),
            terms = request.schema.terms.len(),
            "rendered prompt parts"
        );

        Ok(PromptParts {
            schema_descriptor,
            augmented_question,
        })
    }

    /// Render the numbered glossary narrative, or an empty string when the
    /// request carries no terms.
    fn term_block(&self, terms: &[Term]) -> String {
        if terms.is_empty() {
            return String::new();
        }

        let mut out = self.phrases.term_lead.clone();
        for (idx, term) in terms.iter().enumerate() {
            let index = (idx + 1).to_string();
            out.push_str(&fill(
                &self.phrases.term_clause_template,
                &[("index", &index), ("name", &term.name)],
            ));

            if let Some(description) = term.description.as_deref().filter(|d| !d.trim().is_empty())
            {
                out.push_str(&fill(
                    &self.phrases.term_description_template,
                    &[("description", description)],
                ));
            }

            if !term.aliases.is_empty() {
                let aliases = format!("[{}]", term.aliases.join(", "));
                out.push_str(&fill(
                    &self.phrases.term_aliases_template,
                    &[("aliases", &aliases)],
                ));
            }

            out.push_str(&self.phrases.clause_separator);
        }

        // Strip the terminator after the final clause.
        out.truncate(out.len() - self.phrases.clause_separator.len());
        out
    }
}
