//! Forms for creating and editing apps.

use leptos::prelude::*;
use plwrd_domain::admin_view::{AdminEvent, CreateForm};
use plwrd_domain::route::Route;

use super::admin::use_admin;

/// The new-app form.
#[component]
pub fn CreateAppForm() -> impl IntoView {
    let ctx = use_admin();
    let draft = move || {
        ctx.state
            .with_untracked(|view| view.create_form.clone().unwrap_or_default())
    };
    let field = move |read: fn(&CreateForm) -> String| {
        move || {
            ctx.state
                .with(|view| view.create_form.as_ref().map(read).unwrap_or_default())
        }
    };

    let set_name = move |ev: web_sys::Event| {
        let mut form = draft();
        form.name = event_target_value(&ev);
        ctx.apply(AdminEvent::CreateFormChanged(form));
    };
    let set_cmd = move |ev: web_sys::Event| {
        let mut form = draft();
        form.cmd = event_target_value(&ev);
        ctx.apply(AdminEvent::CreateFormChanged(form));
    };
    let save = move |_| {
        let form = draft();
        ctx.spawn(|service| async move { service.add_app(form).await });
    };

    view! {
        <div class="card">
            <h2>"New app"</h2>
            <label>
                "Name"
                <input type="text" prop:value=field(|form| form.name.clone()) on:input=set_name/>
            </label>
            <label>
                "Command"
                <input type="text" prop:value=field(|form| form.cmd.clone()) on:input=set_cmd/>
            </label>
            <p class="actions">
                <button type="button" on:click=save>"Create"</button>
                <a href=Route::List.to_string()>"Cancel"</a>
            </p>
        </div>
    }
}

/// The edit form of one app. Only the command can change.
#[component]
pub fn EditAppForm() -> impl IntoView {
    let ctx = use_admin();
    let name = move || {
        ctx.state
            .with(|view| view.edit_app.as_ref().map(|app| app.name.clone()))
            .unwrap_or_default()
    };
    let cmd = move || {
        ctx.state
            .with(|view| view.edit_app.as_ref().map(|app| app.cmd.clone()))
            .unwrap_or_default()
    };

    let set_cmd = move |ev: web_sys::Event| {
        ctx.apply(AdminEvent::EditCommandChanged(event_target_value(&ev)));
    };
    let save = move |_| {
        if let Some(app) = ctx.state.with_untracked(|view| view.edit_app.clone()) {
            ctx.spawn(|service| async move { service.update_app(app).await });
        }
    };

    view! {
        <div class="card">
            <h2>"Edit " {name}</h2>
            <label>
                "Command"
                <input type="text" prop:value=cmd on:input=set_cmd/>
            </label>
            <p class="actions">
                <button type="button" on:click=save>"Save"</button>
                <a href=Route::List.to_string()>"Cancel"</a>
            </p>
        </div>
    }
}
