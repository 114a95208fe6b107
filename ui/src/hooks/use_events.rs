use listing::resources::{EventList, FeaturedEvents, UpcomingEvents};
use payloads::requests::EventQuery;
use payloads::{Event, Listing};
use yew::prelude::*;

use super::{ResourceHandle, use_resource};

/// One server page of events.
#[hook]
pub fn use_events(query: EventQuery) -> ResourceHandle<Listing<Event>> {
    use_resource::<EventList>(query)
}

#[hook]
pub fn use_featured_events() -> ResourceHandle<Listing<Event>> {
    use_resource::<FeaturedEvents>(())
}

#[hook]
pub fn use_upcoming_events() -> ResourceHandle<Listing<Event>> {
    use_resource::<UpcomingEvents>(())
}
