pub mod error;
pub mod reference;
pub mod schema;
pub mod search;
pub mod upstream;

pub use error::LookupError;
pub use reference::ReferenceData;
pub use schema::{CaseRecord, Commission, DataSource, Fetched, SearchKind, SearchRequest, State};
pub use upstream::{CaseProvider, UpstreamClient};

use tracing::{debug, warn};

/// Case lookup over a remote provider, falling back to the local
/// reference data whenever the provider fails.
pub struct CaseLookup<P> {
    reference: ReferenceData,
    provider: Option<P>,
}

impl<P: CaseProvider> CaseLookup<P> {
    pub fn new(reference: ReferenceData, provider: P) -> Self {
        Self {
            reference,
            provider: Some(provider),
        }
    }

    /// Never contacts a provider; every answer comes from `reference`.
    pub fn offline(reference: ReferenceData) -> Self {
        Self {
            reference,
            provider: None,
        }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn provider(&self) -> Option<&P> {
        self.provider.as_ref()
    }

    pub async fn states(&self) -> Fetched<State> {
        if let Some(provider) = &self.provider {
            match provider.fetch_states().await {
                Ok(states) => {
                    debug!(count = states.len(), "States served by upstream");
                    return Fetched::upstream(states);
                }
                Err(e) => warn!(operation = "states", error = %e, "Upstream failed, using mock data"),
            }
        }
        Fetched::mock(self.reference.states().to_vec())
    }

    /// Unknown state IDs yield an empty list.
    pub async fn commissions(&self, state_id: &str) -> Fetched<Commission> {
        if let Some(provider) = &self.provider {
            match provider.fetch_commissions(state_id).await {
                Ok(commissions) => {
                    debug!(state_id, count = commissions.len(), "Commissions served by upstream");
                    return Fetched::upstream(commissions);
                }
                Err(e) => warn!(
                    operation = "commissions",
                    state_id,
                    error = %e,
                    "Upstream failed, using mock data"
                ),
            }
        }
        Fetched::mock(self.reference.commissions_for(state_id))
    }

    /// Validate, resolve the state and commission names, then search.
    ///
    /// Only input errors are returned. Upstream failures fall back to the
    /// local records, and both paths are ranked the same way. An empty
    /// result is not an error.
    pub async fn search(
        &self,
        kind: &str,
        request: &SearchRequest,
    ) -> Result<Fetched<CaseRecord>, LookupError> {
        let kind: SearchKind = kind.parse()?;
        request.validate()?;

        let state_id = self.reference.resolve_state(&request.state)?;
        let commission_id = self.reference.resolve_commission(state_id, &request.commission)?;
        debug!(%kind, state_id, commission_id, "Resolved search scope");

        if let Some(provider) = &self.provider {
            match provider.fetch_cases(kind, request).await {
                Ok(records) => {
                    debug!(%kind, count = records.len(), "Cases served by upstream");
                    return Ok(Fetched::upstream(search::rank(records)));
                }
                Err(e) => warn!(
                    operation = "cases",
                    %kind,
                    error = %e,
                    "Upstream failed, searching mock data"
                ),
            }
        }

        Ok(Fetched::mock(self.search_local(kind, &request.value)))
    }

    /// The fallback search over the local records, ranked.
    pub fn search_local(&self, kind: SearchKind, value: &str) -> Vec<CaseRecord> {
        search::rank(search::search_records(self.reference.cases(), kind, value))
    }
}
