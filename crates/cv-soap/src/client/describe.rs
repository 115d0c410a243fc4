use cvent_client::SoapTransport;
use tracing::instrument;

use crate::describe::{describe_params, descriptions_from_response, CvObjectDescription};
use crate::error::{Error, ErrorKind, Result};

impl<T: SoapTransport> super::CventClient<T> {
    /// Describe one object type.
    pub async fn describe(&self, object_type: &str) -> Result<CvObjectDescription> {
        self.describe_many(&[object_type])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                Error::new(ErrorKind::InvalidResponse(format!(
                    "DescribeCvObject returned no description for {}",
                    object_type
                )))
            })
    }

    /// Describe several object types in one call.
    #[instrument(skip_all, fields(count = object_types.len()))]
    pub async fn describe_many<S: AsRef<str>>(&self, object_types: &[S]) -> Result<Vec<CvObjectDescription>> {
        for object_type in object_types {
            self.object_types.validate(object_type.as_ref())?;
        }

        let response = self
            .connection
            .call("DescribeCvObject", describe_params(object_types))
            .await?;
        Ok(descriptions_from_response(&response))
    }

    /// Field names of an object type: standard fields, then custom fields
    /// when `include_custom` is set.
    pub async fn describe_fields(&self, object_type: &str, include_custom: bool) -> Result<Vec<String>> {
        Ok(self.describe(object_type).await?.field_names(include_custom))
    }
}
