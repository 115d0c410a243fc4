//! The `Retrieve` call and record normalization.
//!
//! The API collapses one-element lists to bare objects, keeps custom fields
//! in a `CustomFieldDetail` side list and nests registration survey answers
//! under `EventSurveyDetail`. [`build_record_set`] turns all of that into
//! one flat, ordered record per returned object.
//!
//! Field resolution, first match wins:
//! 1. a non-empty field on the object itself,
//! 2. the last `CustomFieldDetail` whose `FieldName` matches (its
//!    `FieldValue`),
//! 3. for `Answer`, a text summary of the survey answers.
//!
//! Anything else resolves to `""`.

use cvent_client::normalize::{is_blank, one_or_many, path, text};
use indexmap::IndexMap;
use serde_json::{json, Map, Value};

/// Field every record carries.
pub const ID_FIELD: &str = "Id";

/// Field resolved from survey answers when no direct value exists.
pub const ANSWER_FIELD: &str = "Answer";

/// Extra field holding question → answer pairs when not flat.
pub const ANSWER_ARRAY_FIELD: &str = "Answer Array";

/// One retrieved record: field name → value, in requested order.
pub type Record = IndexMap<String, Value>;

/// Retrieved records keyed by id, in the order the API returned them.
pub type RecordSet = IndexMap<String, Record>;

/// Ids to retrieve. One id or many.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ids(Vec<String>);

impl Ids {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Ids {
    fn from(id: &str) -> Self {
        Ids(vec![id.to_string()])
    }
}

impl From<String> for Ids {
    fn from(id: String) -> Self {
        Ids(vec![id])
    }
}

impl From<Vec<String>> for Ids {
    fn from(ids: Vec<String>) -> Self {
        Ids(ids)
    }
}

impl From<Vec<&str>> for Ids {
    fn from(ids: Vec<&str>) -> Self {
        Ids(ids.into_iter().map(str::to_string).collect())
    }
}

impl From<&[String]> for Ids {
    fn from(ids: &[String]) -> Self {
        Ids(ids.to_vec())
    }
}

impl From<&[&str]> for Ids {
    fn from(ids: &[&str]) -> Self {
        Ids(ids.iter().map(|id| id.to_string()).collect())
    }
}

impl FromIterator<String> for Ids {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Ids(iter.into_iter().collect())
    }
}

/// Options for [`build_record_set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetrieveOptions {
    /// When false, records with synthesized survey answers also carry an
    /// `Answer Array` object of question → answer.
    pub always_flat: bool,
}

impl Default for RetrieveOptions {
    fn default() -> Self {
        Self { always_flat: true }
    }
}

impl RetrieveOptions {
    pub fn with_always_flat(mut self, always_flat: bool) -> Self {
        self.always_flat = always_flat;
        self
    }
}

/// The field list actually resolved: requested names minus empty ones, with
/// `Id` appended when missing.
pub fn effective_fields<S: AsRef<str>>(fields: &[S]) -> Vec<&str> {
    let mut effective: Vec<&str> = fields
        .iter()
        .map(|f| f.as_ref())
        .filter(|f| !f.is_empty())
        .collect();

    if !effective.contains(&ID_FIELD) {
        effective.push(ID_FIELD);
    }
    effective
}

pub(crate) fn retrieve_params(object_type: &str, ids: &Ids) -> Value {
    json!({
        "ObjectType": object_type,
        "Ids": { "Id": ids.as_slice() },
    })
}

/// Normalize a `RetrieveResponse` into a record set.
pub fn build_record_set<S: AsRef<str>>(response: &Value, fields: &[S], options: RetrieveOptions) -> RecordSet {
    let fields = effective_fields(fields);

    one_or_many(path(response, &["RetrieveResult", "CvObject"]))
        .into_iter()
        .map(|object| {
            let record = build_record(object, &fields, options);
            let id = text(record.get(ID_FIELD)).unwrap_or_default();
            (id, record)
        })
        .collect()
}

fn build_record(object: &Value, fields: &[&str], options: RetrieveOptions) -> Record {
    let custom_fields = one_or_many(object.get("CustomFieldDetail"));
    let mut record = Record::new();

    for &field in fields {
        let mut value = resolve_direct(object, field)
            .or_else(|| resolve_custom(&custom_fields, field))
            .unwrap_or_else(|| Value::String(String::new()));

        let mut answers = None;
        if field == ANSWER_FIELD && is_blank(Some(&value)) {
            if let Some(summary) = SurveySummary::from_object(object) {
                value = Value::String(summary.text);
                answers = Some(summary.answers);
            }
        }

        record.insert(field.to_string(), value);

        if let (false, Some(answers)) = (options.always_flat, answers) {
            record.insert(ANSWER_ARRAY_FIELD.to_string(), Value::Object(answers));
        }
    }

    record
}

fn resolve_direct(object: &Value, field: &str) -> Option<Value> {
    object.get(field).filter(|v| !is_blank(Some(v))).cloned()
}

fn resolve_custom(custom_fields: &[&Value], field: &str) -> Option<Value> {
    custom_fields
        .iter()
        .rev()
        .find(|detail| text(detail.get("FieldName")).as_deref() == Some(field))
        .map(|detail| match detail.get("FieldValue") {
            None | Some(Value::Null) => Value::String(String::new()),
            Some(value) => value.clone(),
        })
}

/// Registration survey answers rendered as text.
struct SurveySummary {
    text: String,
    answers: Map<String, Value>,
}

impl SurveySummary {
    fn from_object(object: &Value) -> Option<Self> {
        let details = object.get("EventSurveyDetail");
        if is_blank(details) {
            return None;
        }

        let mut text_block = String::new();
        let mut answers = Map::new();

        for detail in one_or_many(details) {
            let question = text(detail.get("QuestionText")).unwrap_or_default();
            let answer = answer_text(detail);

            text_block.push_str(&format!("Question:\n{}\nResponse:\n{}\n\n", question, answer));
            answers.insert(question, Value::String(answer));
        }

        Some(Self {
            text: text_block.trim_end().to_string(),
            answers,
        })
    }
}

fn answer_text(detail: &Value) -> String {
    let mut answer = String::new();

    for part in one_or_many(detail.get("Answer")) {
        if !is_blank(part.get("AnswerText")) {
            answer.push_str(&text(part.get("AnswerText")).unwrap_or_default());
            answer.push_str(", ");
        }
        if !is_blank(part.get("AnswerPart")) {
            answer.push_str(&text(part.get("AnswerPart")).unwrap_or_default());
            answer.push_str(": ");
            if !is_blank(part.get("AnswerOther")) {
                answer.push_str(&text(part.get("AnswerOther")).unwrap_or_default());
            }
        }
    }

    match answer.strip_suffix(", ") {
        Some(trimmed) => trimmed.to_string(),
        None => answer,
    }
}
