//! Async drivers connecting a page's workflow signal to the backend.
//!
//! DESIGN
//! ======
//! Every driver applies a synchronous `Workflow` transition inside a signal
//! update, awaits the network outside of it, then applies the settling
//! transition. A mutation that settles with `Settle::Reload` always triggers
//! a fresh list load, so no page edits its list locally.
//!
//! Network work is spawned only under `hydrate`; on the server the drivers
//! stop after the synchronous transition.
//!
//! A response that arrives after its page unmounted finds the signal disposed;
//! `try_update` returns `None` and the settle is dropped without a reload.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use leptos::prelude::*;
use records::{Entity, LoadTicket, Notice, NoticeToken, Workflow};

use crate::util::dialog::{confirm, delete_prompt};

/// Page state signal for entity `E`.
pub type PageState<E> = RwSignal<Workflow<E>>;

/// Current notice of the page, changing only when the notice does.
pub fn notice<E: Entity>(state: PageState<E>) -> Memo<Option<Notice>> {
    Memo::new(move |_| state.with(|wf| wf.notice.current().cloned()))
}

/// Dismiss the notice identified by the token, if it is still shown.
pub fn dismiss_notice<E: Entity>(state: PageState<E>) -> Callback<NoticeToken> {
    Callback::new(move |token| {
        state.update(|wf| {
            wf.notice.dismiss_if(token);
        });
    })
}

/// Load the list with the current filter.
pub fn load<E: Entity>(state: PageState<E>) {
    start_load(state, Workflow::begin_load);
}

/// Reload with the filter as entered in the filter bar.
pub fn apply_filter<E: Entity>(state: PageState<E>) {
    start_load(state, Workflow::apply_filter);
}

/// Reset the filter bar and reload unfiltered.
pub fn clear_filter<E: Entity>(state: PageState<E>) {
    start_load(state, Workflow::clear_filter);
}

fn start_load<E: Entity>(state: PageState<E>, begin: fn(&mut Workflow<E>) -> LoadTicket) {
    let Some(ticket) = state.try_update(begin) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let api = crate::net::api::records_api();
        let result = E::list(&api, &ticket.query).await;
        state.update(|wf| {
            wf.finish_load(&ticket, result);
        });
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ticket;
    }
}

/// Validate and send the open dialog's create or update.
pub fn submit<E: Entity>(state: PageState<E>) {
    let Some(Some(mutation)) = state.try_update(Workflow::begin_submit) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let api = crate::net::api::records_api();
        let result = E::execute(&api, &mutation).await;
        let settle = state.try_update(|wf| wf.settle_submit(&mutation, result));
        if settle == Some(records::Settle::Reload) {
            load(state);
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mutation;
    }
}

/// Ask for confirmation, then delete `id`. A declined prompt sends nothing.
///
/// A record whose delete is still in flight is refused before prompting.
pub fn delete<E: Entity>(state: PageState<E>, id: String) {
    // begin_delete posts the refusal notice for a record already in flight.
    let refused = state.try_update(|wf| wf.is_deleting(&id) && !wf.begin_delete(&id));
    if refused != Some(false) {
        return;
    }
    if !confirm(&delete_prompt(E::NOUN)) {
        return;
    }
    if state.try_update(|wf| wf.begin_delete(&id)) != Some(true) {
        return;
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let api = crate::net::api::records_api();
        let result = E::remove(&api, &id).await;
        let settle = state.try_update(|wf| wf.settle_delete(&id, result));
        if settle == Some(records::Settle::Reload) {
            load(state);
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
