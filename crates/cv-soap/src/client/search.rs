use cvent_client::SoapTransport;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::filter::Predicate;
use crate::retrieve::{Ids, RecordSet, RetrieveOptions};
use crate::search::{ids_from_response, search_params, SearchType};

impl<T: SoapTransport> super::CventClient<T> {
    /// Search for ids of `object_type` matching the predicates.
    ///
    /// Always returns a list: empty when nothing matched, one element when
    /// the API answered with a single id.
    #[instrument(skip_all, fields(object_type = %object_type, mode = %mode))]
    pub async fn search<P: Into<Predicate>>(
        &self,
        object_type: &str,
        predicates: impl IntoIterator<Item = P>,
        mode: SearchType,
    ) -> Result<Vec<String>> {
        let predicates: Vec<Predicate> = predicates.into_iter().map(Into::into).collect();
        self.object_types.validate(object_type)?;
        let params = search_params(object_type, &predicates, mode)?;

        let response = self.call(object_type, "Search", params).await?;
        let ids = ids_from_response(&response);

        debug!(count = ids.len(), "Search complete");
        Ok(ids)
    }

    /// Search, then retrieve the given fields for every match.
    ///
    /// The search completes before the retrieve is issued. The retrieve is
    /// issued even when the search matched nothing.
    pub async fn search_and_retrieve<P: Into<Predicate>, S: AsRef<str>>(
        &self,
        object_type: &str,
        predicates: impl IntoIterator<Item = P>,
        fields: &[S],
        mode: SearchType,
    ) -> Result<RecordSet> {
        self.search_and_retrieve_with(object_type, predicates, fields, mode, RetrieveOptions::default())
            .await
    }

    /// [`search_and_retrieve`](Self::search_and_retrieve) with explicit
    /// retrieve options.
    pub async fn search_and_retrieve_with<P: Into<Predicate>, S: AsRef<str>>(
        &self,
        object_type: &str,
        predicates: impl IntoIterator<Item = P>,
        fields: &[S],
        mode: SearchType,
        options: RetrieveOptions,
    ) -> Result<RecordSet> {
        let ids: Ids = self.search(object_type, predicates, mode).await?.into();
        self.retrieve_with(object_type, ids, fields, options).await
    }
}
