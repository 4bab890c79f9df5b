use futures::future::join_all;

use super::top::{FetchPlan, TopItemsClient};
use crate::{
    error::FetchError,
    types::{Category, RankedItem, TimeRange},
};

/// How the per-range fetches are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Schedule {
    /// All ranges in flight together.
    #[default]
    Concurrent,
    /// One range after the other, in the order given.
    Sequential,
}

/// The ranked list for one range, or why it could not be built.
#[derive(Debug)]
pub struct RangeOutcome {
    pub range: TimeRange,
    pub result: Result<Vec<RankedItem>, FetchError>,
}

pub async fn aggregate_one(
    client: &TopItemsClient,
    category: Category,
    range: TimeRange,
    plan: FetchPlan,
) -> Result<Vec<RankedItem>, FetchError> {
    client.fetch_top(category, range, plan).await
}

/// Fetches every range in `ranges`.
///
/// The outcomes come back in the order of `ranges`, one per entry, and a
/// failed range is reported in place rather than dropped.
pub async fn aggregate_all(
    client: &TopItemsClient,
    category: Category,
    ranges: &[TimeRange],
    plan: FetchPlan,
    schedule: Schedule,
) -> Vec<RangeOutcome> {
    match schedule {
        Schedule::Concurrent => {
            join_all(ranges.iter().map(|&range| async move {
                RangeOutcome {
                    range,
                    result: aggregate_one(client, category, range, plan).await,
                }
            }))
            .await
        }
        Schedule::Sequential => {
            let mut outcomes = Vec::with_capacity(ranges.len());
            for &range in ranges {
                outcomes.push(RangeOutcome {
                    range,
                    result: aggregate_one(client, category, range, plan).await,
                });
            }
            outcomes
        }
    }
}
