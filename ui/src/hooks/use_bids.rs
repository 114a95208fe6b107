use listing::resources::{BidList, BidStatus, BidsByStatus};
use payloads::requests::BidQuery;
use payloads::{Bid, Listing};
use yew::prelude::*;

use super::{ResourceHandle, use_resource};

/// Falls back to the sample tenders when the API is down.
#[hook]
pub fn use_bids(query: BidQuery) -> ResourceHandle<Listing<Bid>> {
    use_resource::<BidList>(query)
}

/// Only the open or only the closed tenders; the fallback is the sample set
/// with that status.
#[hook]
pub fn use_bids_by_status(status: BidStatus) -> ResourceHandle<Listing<Bid>> {
    use_resource::<BidsByStatus>(status)
}
