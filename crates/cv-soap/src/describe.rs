//! The `DescribeCvObject` call.

use cvent_client::normalize::{boolean, one_or_many, path, text};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Schema of one object type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvObjectDescription {
    pub name: String,
    pub fields: Vec<FieldDescription>,
    pub custom_fields: Vec<CustomFieldDescription>,
    /// The describe result as returned.
    pub raw: Value,
}

/// A standard field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescription {
    pub name: String,
    pub data_type: Option<String>,
    pub searchable: Option<bool>,
    pub required: Option<bool>,
}

/// A tenant-configured custom field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldDescription {
    pub name: String,
    pub id: Option<String>,
    pub field_type: Option<String>,
}

impl CvObjectDescription {
    pub fn from_tree(tree: &Value) -> Self {
        let fields = one_or_many(tree.get("Field"))
            .into_iter()
            .map(|field| FieldDescription {
                name: text(field.get("Name")).unwrap_or_default(),
                data_type: text(field.get("DataType")),
                searchable: boolean(field.get("Searchable")),
                required: boolean(field.get("Required")),
            })
            .collect();

        let custom_fields = one_or_many(tree.get("CustomField"))
            .into_iter()
            .map(|field| CustomFieldDescription {
                name: text(field.get("Name")).unwrap_or_default(),
                id: text(field.get("Id")),
                field_type: text(field.get("FieldType")),
            })
            .collect();

        Self {
            name: text(tree.get("Name")).unwrap_or_default(),
            fields,
            custom_fields,
            raw: tree.clone(),
        }
    }

    /// Standard field names, then custom field names if requested.
    pub fn field_names(&self, include_custom: bool) -> Vec<String> {
        let mut names: Vec<String> = self.fields.iter().map(|f| f.name.clone()).collect();
        if include_custom {
            names.extend(self.custom_fields.iter().map(|f| f.name.clone()));
        }
        names
    }
}

pub(crate) fn describe_params<S: AsRef<str>>(object_types: &[S]) -> Value {
    let types: Vec<&str> = object_types.iter().map(|t| t.as_ref()).collect();
    json!({ "ObjectTypes": { "CvObjectType": types } })
}

pub(crate) fn descriptions_from_response(response: &Value) -> Vec<CvObjectDescription> {
    one_or_many(path(response, &["DescribeCvObjectResult", "DescribeCvObjectResult"]))
        .into_iter()
        .map(CvObjectDescription::from_tree)
        .collect()
}
