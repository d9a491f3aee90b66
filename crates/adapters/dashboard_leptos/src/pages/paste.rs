//! Paste page: an editor, a send button and a simulated progress bar.

use std::rc::Rc;

use leptos::html::Textarea;
use leptos::prelude::*;
use leptos::task::spawn_local;
use plwrd_app::services::paste_page::PastePage as PasteService;
use plwrd_domain::paste::{CONTENT_FIELD, PasteEvent, PasteView};

use crate::api::GlooPasteEndpoint;
use crate::components::ProgressBar;
use crate::presenter::SignalPastePresenter;

/// Root of the paste page.
#[component]
pub fn PastePage(
    /// URL the paste form posts to.
    endpoint: String,
    /// Scheme and host used to build paste links.
    origin: String,
) -> impl IntoView {
    let state = RwSignal::new(PasteView::default());
    let editor = NodeRef::<Textarea>::new();
    let service = StoredValue::new_local(Rc::new(PasteService::new(
        GlooPasteEndpoint::new(endpoint),
        SignalPastePresenter::new(state, editor),
        origin,
    )));

    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    let page = service.get_value();
    spawn_local(async move { page.open(&path).await });

    let submit = move || {
        if !state.with_untracked(PasteView::can_submit) {
            return;
        }
        let content = state.with_untracked(|view| view.content.clone());
        let page = service.get_value();
        spawn_local(async move { page.submit(&content).await });
    };

    let on_input = move |ev: web_sys::Event| {
        state.update(|view| view.apply(PasteEvent::ContentChanged(event_target_value(&ev))));
    };
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.ctrl_key() && ev.key() == "Enter" {
            ev.prevent_default();
            submit();
        }
    };

    let bar = Signal::derive(move || state.with(|view| view.progress.clone()));
    let link = move || state.with(|view| view.link.clone());
    let error = move || state.with(|view| view.error.clone());

    view! {
        <div id="main">
            <div class="toolbar">
                <button
                    id="send"
                    type="button"
                    disabled=move || !state.with(PasteView::can_submit)
                    on:click=move |_| submit()
                >
                    "Send"
                </button>
                <ProgressBar bar/>
                {move || link().map(|link| view! {
                    <a id="link" href=link.url.clone() title=link.title target="_blank">
                        {link.url}
                    </a>
                })}
                {move || error().map(|message| view! {
                    <span id="error" class="error">{message}</span>
                })}
            </div>
            <textarea
                id="editor"
                name=CONTENT_FIELD
                node_ref=editor
                class:hidden=move || !state.with(|view| view.editor_visible)
                prop:value=move || state.with(|view| view.content.clone())
                on:input=on_input
                on:keydown=on_keydown
            ></textarea>
        </div>
    }
}
