use leptos::prelude::*;
use plwrd_domain::route::Route;

use super::admin::use_admin;

/// Confirmation before removing every app.
#[component]
pub fn WipeConfirm() -> impl IntoView {
    let ctx = use_admin();
    let wipe = move |_| ctx.spawn(|service| async move { service.wipe_apps().await });

    view! {
        <div class="card">
            <h2>"Wipe all apps?"</h2>
            <p>"Every app and its logs will be removed."</p>
            <p class="actions">
                <button type="button" class="btn-danger" on:click=wipe>"Wipe"</button>
                <a href=Route::List.to_string()>"Cancel"</a>
            </p>
        </div>
    }
}
