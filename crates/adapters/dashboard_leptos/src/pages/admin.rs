//! Admin panel page: one screen per location hash.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use plwrd_app::services::admin_panel::AdminPanel;
use plwrd_domain::admin_view::{AdminEvent, AdminView, Panel};
use plwrd_domain::route::Route;

use super::{AppDetail, CreateAppForm, EditAppForm, WipeConfirm};
use crate::api::GlooAdminEndpoint;
use crate::components::{AppTable, Loading, Nav};
use crate::hash;
use crate::presenter::SignalAdminPresenter;

type AdminService = AdminPanel<GlooAdminEndpoint, SignalAdminPresenter>;

/// Handles shared by every admin screen.
#[derive(Clone, Copy)]
pub struct AdminContext {
    pub state: RwSignal<AdminView>,
    service: StoredValue<Rc<AdminService>, LocalStorage>,
}

impl AdminContext {
    fn new(state: RwSignal<AdminView>, service: AdminService) -> Self {
        Self {
            state,
            service: StoredValue::new_local(Rc::new(service)),
        }
    }

    /// Run an admin operation in the background.
    pub fn spawn<F, Fut>(self, task: F)
    where
        F: FnOnce(Rc<AdminService>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(task(self.service.get_value()));
    }

    /// Fold a local form edit into the view.
    pub fn apply(self, event: AdminEvent) {
        self.state.update(|view| view.apply(event));
    }
}

/// Access the admin handles from Leptos context.
///
/// Must be called below an [`AdminPage`].
pub fn use_admin() -> AdminContext {
    use_context::<AdminContext>().expect("AdminContext not found in context")
}

/// Root of the admin panel.
#[component]
pub fn AdminPage(
    /// URL of the admin action endpoint.
    endpoint: String,
) -> impl IntoView {
    let state = RwSignal::new(AdminView::default());
    let service = AdminPanel::new(
        GlooAdminEndpoint::new(endpoint),
        SignalAdminPresenter::new(state),
    );
    let ctx = AdminContext::new(state, service);
    provide_context(ctx);

    let enter = move |fragment: String| match Route::parse(&fragment) {
        Some(route) => ctx.spawn(|service| async move { service.enter(route).await }),
        None => leptos::logging::log!("ignoring unknown route {fragment:?}"),
    };
    // Dropped, and unregistered, together with the page.
    let _listener = StoredValue::new_local(hash::listen(enter));
    enter(hash::current());

    let panel = Memo::new(move |_| state.with(AdminView::panel));
    let loading = Signal::derive(move || state.with(AdminView::is_loading));
    let error = move || state.with(|view| view.error.clone());

    view! {
        <Nav/>
        <main>
            <Loading loading/>
            {move || error().map(|message| view! {
                <p class="error">{message}</p>
            })}
            {move || match panel.get() {
                Panel::List => view! { <AppList/> }.into_any(),
                Panel::App => view! { <AppDetail/> }.into_any(),
                Panel::Edit => view! { <EditAppForm/> }.into_any(),
                Panel::Create => view! { <CreateAppForm/> }.into_any(),
                Panel::WipeConfirm => view! { <WipeConfirm/> }.into_any(),
                Panel::Blank => ().into_any(),
            }}
        </main>
    }
}

/// The sorted list of apps.
#[component]
fn AppList() -> impl IntoView {
    let ctx = use_admin();
    let apps = Memo::new(move |_| ctx.state.with(|view| view.apps.clone()));
    let on_remove = Callback::new(move |name: String| {
        ctx.spawn(|service| async move { service.remove_app(name).await });
    });

    view! {
        <div>
            <h1>"Apps"</h1>
            {move || view! { <AppTable apps=apps.get() on_remove/> }}
        </div>
    }
}
