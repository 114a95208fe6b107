//! The listing pipeline shared by every collection page: fetch a resource,
//! hold it in a tri-state record, then search, filter and paginate it on
//! the client.

pub mod catalog;
pub mod resource;
pub mod resources;
pub mod view;

pub use resource::{
    FailurePolicy, FetchOutcome, Loader, Resource, ResourceState, Ticket,
    TicketCounter,
};
pub use view::{
    Facet, Filterable, NoFacet, PageSlice, ViewAction, ViewPhase, ViewState,
};
