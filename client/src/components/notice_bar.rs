//! Transient notice shown at the top of a page.
//!
//! A notice auto-dismisses after `NOTICE_TIMEOUT`. The timer carries the
//! token of the notice it was started for, so a newer notice shown in the
//! meantime is not cleared early.

use leptos::prelude::*;
use records::{Notice, NoticeToken};

#[component]
pub fn NoticeBar(#[prop(into)] notice: Signal<Option<Notice>>, on_dismiss: Callback<NoticeToken>) -> impl IntoView {
    Effect::new(move || {
        let Some(current) = notice.get() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let token = current.token;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(records::notice::NOTICE_TIMEOUT).await;
                on_dismiss.run(token);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = current;
        }
    });

    view! {
        {move || {
            notice
                .get()
                .map(|n| {
                    let class = format!("notice notice--{}", n.severity.as_str());
                    let token = n.token;
                    view! {
                        <div class=class role="status">
                            <span class="notice__text">{n.text}</span>
                            <button class="notice__close" title="Dismiss" on:click=move |_| on_dismiss.run(token)>
                                "×"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
