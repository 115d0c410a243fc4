use cvent_client::SoapTransport;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::retrieve::{build_record_set, effective_fields, retrieve_params, Ids, RecordSet, RetrieveOptions};

impl<T: SoapTransport> super::CventClient<T> {
    /// Retrieve records by id.
    ///
    /// Every record carries `Id`, requested or not. Fields the record does
    /// not have resolve to `""`.
    pub async fn retrieve<S: AsRef<str>>(
        &self,
        object_type: &str,
        ids: impl Into<Ids>,
        fields: &[S],
    ) -> Result<RecordSet> {
        self.retrieve_with(object_type, ids, fields, RetrieveOptions::default())
            .await
    }

    /// [`retrieve`](Self::retrieve) with explicit options.
    #[instrument(skip_all, fields(object_type = %object_type))]
    pub async fn retrieve_with<S: AsRef<str>>(
        &self,
        object_type: &str,
        ids: impl Into<Ids>,
        fields: &[S],
        options: RetrieveOptions,
    ) -> Result<RecordSet> {
        let ids = ids.into();
        debug!(ids = ids.len(), fields = ?effective_fields(fields), "Retrieving");

        let response = self
            .call(object_type, "Retrieve", retrieve_params(object_type, &ids))
            .await?;
        let records = build_record_set(&response, fields, options);

        debug!(count = records.len(), "Retrieve complete");
        Ok(records)
    }
}
