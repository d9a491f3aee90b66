//! App table component for displaying the list of apps.

use leptos::prelude::*;
use plwrd_domain::app::App;
use plwrd_domain::route::Route;

/// A table displaying a list of apps, each with its actions.
#[component]
pub fn AppTable(
    /// The apps to display, already sorted.
    apps: Vec<App>,
    /// Invoked with the app name when its delete button is pressed.
    on_remove: Callback<String>,
) -> impl IntoView {
    if apps.is_empty() {
        view! {
            <p>"No apps found."</p>
        }
        .into_any()
    } else {
        view! {
            <table>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Command"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {apps.into_iter().map(|app| {
                        view! {
                            <AppRow app on_remove/>
                        }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any()
    }
}

/// A single row in the app table.
#[component]
fn AppRow(
    /// The app to display.
    app: App,
    on_remove: Callback<String>,
) -> impl IntoView {
    let run = Route::Run(app.name.clone()).to_string();
    let log = Route::Log(app.name.clone()).to_string();
    let edit = Route::Edit(app.name.clone()).to_string();
    let name = app.name.clone();

    view! {
        <tr>
            <td>{app.name}</td>
            <td><code>{app.cmd}</code></td>
            <td class="actions">
                <a href=run>"Run"</a>
                <a href=log>"Logs"</a>
                <a href=edit>"Edit"</a>
                <button class="btn-danger" on:click=move |_| on_remove.run(name.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
