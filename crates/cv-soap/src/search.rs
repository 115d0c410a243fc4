//! The `Search` call.

use cvent_client::normalize::{one_or_many, path, text};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::Result;
use crate::filter::Predicate;

/// How filters combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchType {
    #[default]
    AndSearch,
    OrSearch,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::AndSearch => "AndSearch",
            SearchType::OrSearch => "OrSearch",
        }
    }
}

impl std::fmt::Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the `Search` parameter tree. Fails if a filter has a bad operator.
pub(crate) fn search_params(object_type: &str, predicates: &[Predicate], mode: SearchType) -> Result<Value> {
    let filters = predicates
        .iter()
        .map(Predicate::to_tree)
        .collect::<Result<Vec<_>>>()?;

    Ok(json!({
        "ObjectType": object_type,
        "CvSearchObject": {
            "@SearchType": mode.as_str(),
            "Filter": filters,
        },
    }))
}

/// Ids from a `SearchResponse`. Absent → empty, scalar → one id.
pub(crate) fn ids_from_response(response: &Value) -> Vec<String> {
    one_or_many(path(response, &["SearchResult", "Id"]))
        .into_iter()
        .filter_map(|id| text(Some(id)))
        .collect()
}
