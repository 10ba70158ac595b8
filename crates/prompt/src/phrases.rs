//! Locale phrase packs for the augmented question.
//!
//! The natural-language fragments woven into the prompt (linking
//! statements, date statement, glossary lead-in) are tied to a human
//! language. They live here as data — a serde-loadable struct of template
//! strings — so the assembly logic stays language-agnostic and packs can
//! be shipped as configuration.
//!
//! Templates use `{placeholder}` substitution. Values are inserted
//! verbatim, byte for byte.

use serde::{Deserialize, Serialize};

/// The phrase templates and separators for one locale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhrasePack {
    /// Lead-in of the parenthesized supplementary-information block.
    pub supplementary_lead: String,

    /// One entity-linking statement. Placeholders: `{value}`, `{field}`.
    pub linking_template: String,

    /// Joiner between linking statements.
    pub linking_joiner: String,

    /// The current-date statement. Placeholder: `{date}`.
    pub date_template: String,

    /// Lead-in of the business-term glossary block.
    pub term_lead: String,

    /// Opening of one glossary clause. Placeholders: `{index}` (1-based),
    /// `{name}`.
    pub term_clause_template: String,

    /// Optional description clause. Placeholder: `{description}`.
    pub term_description_template: String,

    /// Optional aliases clause. Placeholder: `{aliases}` (pre-rendered
    /// `[a, b]` list).
    pub term_aliases_template: String,

    /// Terminator after each glossary clause; stripped after the last.
    pub clause_separator: String,

    /// Separator between the four supplementary segments.
    pub segment_separator: String,
}

impl PhrasePack {
    /// Simplified-Chinese pack. Matches the phrasing the downstream parser
    /// models were tuned on, including the U+2018 quote marks around linked
    /// values and the fullwidth punctuation.
    pub fn zh_cn() -> Self {
        Self {
            supplementary_lead: "补充信息:".into(),
            linking_template: "‘{value}‘是一个‘{field}‘".into(),
            linking_joiner: "，".into(),
            date_template: "当前的日期是{date}".into(),
            term_lead: "相关业务术语：".into(),
            term_clause_template: "{index}.<{name}>是业务术语".into(),
            term_description_template: "，它通常是指<{description}>".into(),
            term_aliases_template: "，类似的表达还有{aliases}".into(),
            clause_separator: "；".into(),
            segment_separator: ";".into(),
        }
    }

    /// English pack.
    pub fn en_us() -> Self {
        Self {
            supplementary_lead: "supplementary information: ".into(),
            linking_template: "'{value}' is a '{field}'".into(),
            linking_joiner: ", ".into(),
            date_template: "the current date is {date}".into(),
            term_lead: "Relevant business terms: ".into(),
            term_clause_template: "{index}.<{name}> is a business term".into(),
            term_description_template: ", it usually refers to <{description}>".into(),
            term_aliases_template: ", similar expressions include {aliases}".into(),
            clause_separator: "; ".into(),
            segment_separator: ";".into(),
        }
    }
}

impl Default for PhrasePack {
    fn default() -> Self {
        Self::zh_cn()
    }
}

/// Substitute `{key}` placeholders in `template` with the given values.
pub(crate) fn fill(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in substitutions {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_substitutes_all_placeholders() {
        let out = fill("{index}.<{name}>", &[("index", "1"), ("name", "GMV")]);
        assert_eq!(out, "1.<GMV>");
    }

    #[test]
    fn fill_leaves_unknown_placeholders_untouched() {
        let out = fill("{value} / {other}", &[("value", "Beijing")]);
        assert_eq!(out, "Beijing / {other}");
    }

    #[test]
    fn zh_cn_linking_phrase_is_byte_exact() {
        let pack = PhrasePack::zh_cn();
        let out = fill(
            &pack.linking_template,
            &[("value", "Beijing"), ("field", "city")],
        );
        assert_eq!(out, "‘Beijing‘是一个‘city‘");
    }

    #[test]
    fn pack_roundtrips_through_serde() {
        let pack = PhrasePack::en_us();
        let json = serde_json::to_string(&pack).unwrap();
        let parsed: PhrasePack = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.linking_template, pack.linking_template);
    }
}
