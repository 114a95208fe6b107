use std::ops::Deref;
use std::rc::Rc;

use listing::resource::{self, FetchOutcome, ResourceState};
use listing::{Resource, Ticket, TicketCounter};
use yew::prelude::*;

use crate::{failure_policy, get_api_client};

pub enum ResourceAction<T> {
    Start(Ticket),
    Finish(Ticket, FetchOutcome<T>),
}

/// Reducer wrapper so a [`ResourceState`] can live in `use_reducer`.
pub struct ResourceSlot<T>(ResourceState<T>);

impl<T> Default for ResourceSlot<T> {
    fn default() -> Self {
        Self(ResourceState::default())
    }
}

impl<T: Clone> Reducible for ResourceSlot<T> {
    type Action = ResourceAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        match action {
            ResourceAction::Start(ticket) => state.start(ticket),
            ResourceAction::Finish(ticket, outcome) => {
                if !state.finish(ticket, outcome) {
                    return self;
                }
            }
        }
        Rc::new(Self(state))
    }
}

/// Hook return type: the resource state plus a way to fetch it again.
pub struct ResourceHandle<T: Clone + 'static> {
    slot: UseReducerHandle<ResourceSlot<T>>,
    pub refetch: Callback<()>,
}

impl<T: Clone + 'static> Deref for ResourceHandle<T> {
    type Target = ResourceState<T>;

    fn deref(&self) -> &ResourceState<T> {
        &self.slot.0
    }
}

/// Fetch a resource on mount and whenever `params` changes.
///
/// Each fetch takes a fresh ticket before it is spawned, so when the
/// parameters change faster than the server answers only the response to
/// the newest parameters is kept.
#[hook]
pub fn use_resource<R>(params: R::Params) -> ResourceHandle<R::Output>
where
    R: Resource + 'static,
{
    let slot = use_reducer(ResourceSlot::<R::Output>::default);
    let tickets = use_mut_ref(TicketCounter::default);

    let refetch = {
        let dispatcher = slot.dispatcher();

        use_callback(params.clone(), move |_: (), params| {
            let ticket = tickets.borrow_mut().issue();
            dispatcher.dispatch(ResourceAction::Start(ticket));

            let dispatcher = dispatcher.clone();
            let params = params.clone();
            yew::platform::spawn_local(async move {
                let client = get_api_client();
                let outcome =
                    resource::fetch::<R>(&client, &params, failure_policy())
                        .await;
                dispatcher.dispatch(ResourceAction::Finish(ticket, outcome));
            });
        })
    };

    // Auto-fetch on mount and when params change
    {
        let refetch = refetch.clone();
        use_effect_with(params, move |_| {
            refetch.emit(());
        });
    }

    ResourceHandle { slot, refetch }
}
