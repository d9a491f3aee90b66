//! Presenters folding service events into Leptos signals.

use gloo_timers::future::TimeoutFuture;
use leptos::html::Textarea;
use leptos::prelude::*;
use leptos::task::spawn_local;
use plwrd_app::ports::{AdminPresenter, PastePresenter};
use plwrd_domain::admin_view::{AdminEvent, AdminView};
use plwrd_domain::paste::{PasteEvent, PasteView};
use plwrd_domain::progress::{STEP_INTERVAL_MS, Step};
use plwrd_domain::route::Route;

use crate::hash;

/// Admin presenter backed by an [`AdminView`] signal and the location hash.
#[derive(Clone, Copy)]
pub struct SignalAdminPresenter {
    state: RwSignal<AdminView>,
}

impl SignalAdminPresenter {
    pub fn new(state: RwSignal<AdminView>) -> Self {
        Self { state }
    }
}

impl AdminPresenter for SignalAdminPresenter {
    fn present(&self, event: AdminEvent) {
        self.state.update(|view| view.apply(event));
    }

    fn redirect(&self, route: &Route) {
        hash::set(&route.to_hash());
    }
}

/// Paste presenter backed by a [`PasteView`] signal.
///
/// Starting a request also starts the progress timer; settling one
/// focuses the editor.
#[derive(Clone, Copy)]
pub struct SignalPastePresenter {
    state: RwSignal<PasteView>,
    editor: NodeRef<Textarea>,
}

impl SignalPastePresenter {
    pub fn new(state: RwSignal<PasteView>, editor: NodeRef<Textarea>) -> Self {
        Self { state, editor }
    }
}

impl PastePresenter for SignalPastePresenter {
    fn present(&self, event: PasteEvent) {
        let starts = matches!(event, PasteEvent::LoadStarted | PasteEvent::SubmitStarted);
        let settles = matches!(
            event,
            PasteEvent::EditorReady
                | PasteEvent::Loaded(_)
                | PasteEvent::Created(_)
                | PasteEvent::Failed(_)
        );

        self.state.update(|view| view.apply(event));

        if starts {
            drive_progress(self.state);
        }
        if settles {
            focus_later(self.editor);
        }
    }
}

/// Step the progress bar of the current run until it stops.
fn drive_progress(state: RwSignal<PasteView>) {
    let run = state.with_untracked(|view| view.progress.run());
    spawn_local(async move {
        let mut next = Some(Step::Advance);
        while let Some(step) = next {
            TimeoutFuture::new(STEP_INTERVAL_MS).await;
            next = state.try_update(|view| view.tick(run, step)).flatten();
        }
    });
}

/// Focus the editor once the pending view update has been rendered.
fn focus_later(editor: NodeRef<Textarea>) {
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        if let Some(el) = editor.get_untracked() {
            let _ = el.focus();
        }
    });
}
