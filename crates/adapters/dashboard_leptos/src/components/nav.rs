use leptos::prelude::*;
use plwrd_domain::route::Route;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav>
            <ul>
                <li><a href=Route::List.to_string()>"Apps"</a></li>
                <li><a href=Route::Create.to_string()>"New app"</a></li>
                <li><a href=Route::wipe_apps().to_string()>"Wipe"</a></li>
            </ul>
        </nav>
    }
}
