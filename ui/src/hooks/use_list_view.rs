use std::rc::Rc;

use listing::{Facet, ViewAction, ViewState};
use yew::prelude::*;

pub struct ViewSlot<F: Facet>(ViewState<F>);

impl<F: Facet> Default for ViewSlot<F> {
    fn default() -> Self {
        Self(ViewState::new())
    }
}

impl<F: Facet> Reducible for ViewSlot<F> {
    type Action = ViewAction<F>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        if next.reduce(action) {
            Rc::new(Self(next))
        } else {
            self
        }
    }
}

/// Search, filter and page selection for one listing page.
#[derive(Clone)]
pub struct ListView<F: Facet> {
    slot: UseReducerHandle<ViewSlot<F>>,
}

impl<F: Facet> ListView<F> {
    pub fn state(&self) -> &ViewState<F> {
        &self.slot.0
    }

    pub fn on_search(&self) -> Callback<String> {
        let slot = self.slot.clone();
        Callback::from(move |text| slot.dispatch(ViewAction::SetSearch(text)))
    }

    pub fn on_filter(&self, facet: F) -> Callback<String> {
        let slot = self.slot.clone();
        Callback::from(move |value| {
            slot.dispatch(ViewAction::SetFilter(facet, value))
        })
    }

    pub fn on_page(&self) -> Callback<usize> {
        let slot = self.slot.clone();
        Callback::from(move |page| slot.dispatch(ViewAction::SetPage(page)))
    }

    pub fn on_reset(&self) -> Callback<()> {
        let slot = self.slot.clone();
        Callback::from(move |_| slot.dispatch(ViewAction::Reset))
    }
}

/// View state that starts over on every mount.
#[hook]
pub fn use_list_view<F: Facet>() -> ListView<F> {
    ListView {
        slot: use_reducer(ViewSlot::<F>::default),
    }
}
