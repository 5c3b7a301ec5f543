//! # Close-approach filtering and ranking
//!
//! Turns a list-feed response into the ordered set of objects worth fetching in detail:
//!
//! 1. keep only the **first** close approach of every summary (the feed lists them chronologically);
//! 2. drop summaries without an approach, without a detail link, or whose miss distance is not
//!    strictly below the configured threshold;
//! 3. flatten all dates into one sequence (ascending date order);
//! 4. sort by miss distance with a stable sort, so ties keep their flattened order;
//! 5. keep at most `max_candidates` entries. Fewer qualifying entries are returned as is, the
//!    result is never padded.
use itertools::Itertools;
use tracing::{debug, warn};

use crate::constants::{AstronomicalUnit, MIN_DIST_AU, N_TO_SHOW};
use crate::feed::feed_records::{FeedResponse, NeoSummary};

/// An object selected for detail retrieval
#[derive(Debug, Clone, PartialEq)]
pub struct CloseApproachCandidate {
    /// Miss distance of the first close approach
    pub distance_au: AstronomicalUnit,
    /// Opaque locator of the full orbital record
    pub detail_reference: String,
}

/// Bounds applied by [`rank_close_approaches`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingParams {
    pub max_candidates: usize,
    pub max_miss_distance_au: AstronomicalUnit,
}

impl Default for RankingParams {
    fn default() -> Self {
        RankingParams {
            max_candidates: N_TO_SHOW,
            max_miss_distance_au: MIN_DIST_AU,
        }
    }
}

fn candidate_from_summary(
    summary: &NeoSummary,
    params: &RankingParams,
) -> Option<CloseApproachCandidate> {
    let approach = summary.first_approach()?;
    let distance_au = approach.miss_distance_au();

    // NaN never compares below the threshold
    if !(distance_au < params.max_miss_distance_au) {
        return None;
    }

    let Some(detail_reference) = summary.detail_link() else {
        warn!(
            neo = summary.name.as_deref().unwrap_or("<unnamed>"),
            date = approach.close_approach_date.as_deref().unwrap_or("<undated>"),
            distance_au,
            "close approach without detail link, discarded"
        );
        return None;
    };

    Some(CloseApproachCandidate {
        distance_au,
        detail_reference: detail_reference.to_string(),
    })
}

/// Extract, filter, sort and truncate the close-approach candidates of a list feed.
///
/// Arguments
/// ---------
/// * `feed`: the decoded list-feed response
/// * `params`: threshold and maximum number of candidates
///
/// Return
/// ------
/// * up to `params.max_candidates` candidates, closest first. A feed without
///   `near_earth_objects` yields an empty list.
pub fn rank_close_approaches(
    feed: &FeedResponse,
    params: &RankingParams,
) -> Vec<CloseApproachCandidate> {
    let Some(days) = feed.near_earth_objects.as_ref() else {
        return Vec::new();
    };

    let candidates = days
        .values()
        .flatten()
        .filter_map(|summary| candidate_from_summary(summary, params))
        .sorted_by(|a, b| a.distance_au.total_cmp(&b.distance_au))
        .take(params.max_candidates)
        .collect_vec();

    debug!(
        summaries = days.values().map(Vec::len).sum::<usize>(),
        selected = candidates.len(),
        "close approaches ranked"
    );

    candidates
}
