//! One app with its last run status and captured output.

use leptos::prelude::*;
use plwrd_domain::route::Route;

use super::admin::use_admin;

#[component]
pub fn AppDetail() -> impl IntoView {
    let ctx = use_admin();
    let app = move || ctx.state.with(|view| view.chosen_app.clone());
    let status = move || {
        ctx.state
            .with(|view| view.command_status.zip(view.formatted_status()))
    };
    let logs = move || ctx.state.with(|view| view.logs.clone());

    view! {
        <div>
            {move || app().map(|app| view! {
                <div class="card">
                    <h2>{app.name.clone()}</h2>
                    <p><strong>"Command: "</strong> <code>{app.cmd.clone()}</code></p>
                    <p class="actions">
                        <a href=Route::Run(app.name.clone()).to_string()>"Run"</a>
                        <a href=Route::Log(app.name.clone()).to_string()>"Refresh logs"</a>
                        <a href=Route::Edit(app.name).to_string()>"Edit"</a>
                    </p>
                </div>
            })}
            {move || status().map(|(ok, text)| {
                let class = if ok { "status status-ok" } else { "status status-failed" };
                view! {
                    <p class=class>
                        <strong>"Status: "</strong> {text}
                    </p>
                }
            })}
            {move || logs().map(|logs| view! {
                <h3>"stdout"</h3>
                <pre class="log">{logs.stdout}</pre>
                <h3>"stderr"</h3>
                <pre class="log">{logs.stderr}</pre>
            })}
            <p><a href=Route::List.to_string()>"\u{2190} Back to apps"</a></p>
        </div>
    }
}
