use std::sync::Arc;

use tracing::debug;

use crate::body::converter::convert_orbital_record;
use crate::body::descriptor::BodyDescriptor;
use crate::feed::decode_json;
use crate::feed::feed_records::RawOrbitalRecord;
use crate::feed::ranker::CloseApproachCandidate;
use crate::neo_errors::NeoError;
use crate::transport::NeoTransport;

/// Retrieves the full orbital record of a candidate and converts it.
///
/// Every call issues exactly one request. A failed request, an undecodable body or (when
/// `reject_invalid_elements` is set) a record with non-finite elements fails the fetch; no
/// partial descriptor is ever returned.
#[derive(Clone)]
pub struct DetailFetcher {
    transport: Arc<dyn NeoTransport>,
    reject_invalid_elements: bool,
}

impl DetailFetcher {
    pub fn new(transport: Arc<dyn NeoTransport>, reject_invalid_elements: bool) -> Self {
        DetailFetcher {
            transport,
            reject_invalid_elements,
        }
    }

    /// Fetch and convert the orbital record behind `candidate.detail_reference`.
    ///
    /// Arguments
    /// ---------
    /// * `candidate`: a ranked close approach
    ///
    /// Return
    /// ------
    /// * the converted body
    /// * [`NeoError::Http`] / [`NeoError::MalformedResponse`] on transport or decoding failure
    /// * [`NeoError::InvalidEpoch`] / [`NeoError::InvalidElements`] on unusable orbital data
    pub async fn fetch(
        &self,
        candidate: &CloseApproachCandidate,
    ) -> Result<BodyDescriptor, NeoError> {
        let url = candidate.detail_reference.as_str();
        let body = self.transport.get_text(url, &[]).await?;
        let record: RawOrbitalRecord = decode_json(url, &body)?;

        let descriptor = convert_orbital_record(&record)?;
        if self.reject_invalid_elements {
            descriptor.validate()?;
        }

        debug!(
            neo = %descriptor.name,
            distance_au = candidate.distance_au,
            "orbital record converted"
        );
        Ok(descriptor)
    }
}

impl std::fmt::Debug for DetailFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailFetcher")
            .field("reject_invalid_elements", &self.reject_invalid_elements)
            .finish_non_exhaustive()
    }
}
