//! Admin panel service — route dispatch and app management use-cases.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::de::DeserializeOwned;

use plwrd_domain::action::{Ack, Action, RunOutcome, decode_reply};
use plwrd_domain::admin_view::{AdminEvent, CreateForm};
use plwrd_domain::app::{App, validate_command};
use plwrd_domain::error::PlwrdError;
use plwrd_domain::logs::AppLogs;
use plwrd_domain::route::Route;

use crate::ports::{AdminEndpoint, AdminPresenter};

/// Application service behind the admin panel.
///
/// Every route entry starts a new navigation. Responses that arrive after the
/// user has moved on are discarded, so a slow request can never overwrite the
/// screen of a later route.
pub struct AdminPanel<E, P> {
    endpoint: E,
    presenter: P,
    navigation: AtomicU64,
}

impl<E: AdminEndpoint, P: AdminPresenter> AdminPanel<E, P> {
    /// Create a new panel talking to `endpoint` and rendering through `presenter`.
    pub fn new(endpoint: E, presenter: P) -> Self {
        Self {
            endpoint,
            presenter,
            navigation: AtomicU64::new(0),
        }
    }

    /// Enter `route`: reset the view, then load what the route shows.
    pub async fn enter(&self, route: Route) {
        let nav = self.navigation.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(%route, nav, "entering route");
        self.presenter
            .present(AdminEvent::RouteEntered(route.clone()));

        match route {
            Route::List => self.load_list(nav).await,
            Route::Create | Route::Wipe(_) => {}
            Route::Edit(name) => {
                if let Some(app) = self
                    .call::<App>(nav, Action::GetApp { name })
                    .await
                {
                    self.presenter.present(AdminEvent::EditLoaded(app));
                }
            }
            Route::Log(name) => {
                self.load_app(nav, &name).await;
                self.load_logs(nav, &name).await;
            }
            Route::Run(name) => {
                self.load_app(nav, &name).await;
                let action = Action::RunApp { name: name.clone() };
                if let Some(outcome) = self.call::<RunOutcome>(nav, action).await {
                    tracing::info!(%name, ok = outcome.succeeded(), "app run finished");
                    self.presenter
                        .present(AdminEvent::RunCompleted(outcome.succeeded()));
                    self.load_logs(nav, &name).await;
                }
            }
        }
    }

    /// Submit the new-app form.
    ///
    /// Invalid input is reported without contacting the server. On success
    /// the form is cleared and the browser returns to the list; on failure
    /// the form keeps its values.
    pub async fn add_app(&self, form: CreateForm) {
        let nav = self.current();
        let app = App::new(form.name, form.cmd);
        if let Err(err) = app.validate() {
            self.report("addApp", err.into());
            return;
        }

        let action = Action::AddApp {
            name: app.name.clone(),
            cmd: app.cmd,
        };
        if self.call::<Ack>(nav, action).await.is_some() {
            tracing::info!(name = %app.name, "app created");
            self.presenter.present(AdminEvent::AppCreated);
            self.presenter.redirect(&Route::List);
        }
    }

    /// Save the command of an existing app.
    ///
    /// The edit form closes once the server has answered, whatever the outcome.
    pub async fn update_app(&self, app: App) {
        let nav = self.current();
        if let Err(err) = validate_command(&app.cmd) {
            self.report("editApp", err.into());
            return;
        }

        let name = app.name.clone();
        let action = Action::EditApp {
            name: app.name,
            cmd: app.cmd,
        };
        let saved = self.call::<Ack>(nav, action).await;
        if !self.is_current(nav) {
            return;
        }
        self.presenter.present(AdminEvent::EditClosed);
        if saved.is_some() {
            tracing::info!(%name, "app updated");
            self.presenter.redirect(&Route::List);
        }
    }

    /// Delete one app and drop it from the list.
    pub async fn remove_app(&self, name: String) {
        let nav = self.current();
        let action = Action::DelApp { name: name.clone() };
        if self.call::<Ack>(nav, action).await.is_some() {
            tracing::info!(%name, "app removed");
            self.presenter.present(AdminEvent::AppRemoved(name));
            self.presenter.redirect(&Route::List);
        }
    }

    /// Delete every app.
    pub async fn wipe_apps(&self) {
        let nav = self.current();
        if self.call::<Ack>(nav, Action::WipeApps).await.is_some() {
            tracing::info!("all apps wiped");
            self.presenter.redirect(&Route::List);
        }
    }

    async fn load_list(&self, nav: u64) {
        if let Some(apps) = self.call::<Vec<App>>(nav, Action::ListApps).await {
            self.presenter.present(AdminEvent::AppsLoaded(apps));
        }
    }

    async fn load_app(&self, nav: u64, name: &str) {
        let action = Action::GetApp {
            name: name.to_string(),
        };
        if let Some(app) = self.call::<App>(nav, action).await {
            self.presenter.present(AdminEvent::AppChosen(app));
        }
    }

    async fn load_logs(&self, nav: u64, name: &str) {
        let action = Action::GetLogs {
            name: name.to_string(),
        };
        if let Some(logs) = self.call::<AppLogs>(nav, action).await {
            self.presenter.present(AdminEvent::LogsLoaded(logs));
        }
    }

    /// Send `action` and decode its reply.
    ///
    /// Failures are presented here and yield `None`, as do replies that
    /// belong to a superseded navigation.
    async fn call<T: DeserializeOwned>(&self, nav: u64, action: Action) -> Option<T> {
        let keyword = action.keyword();
        self.presenter.present(AdminEvent::RequestStarted);
        let reply = self.endpoint.send(action).await;
        self.presenter.present(AdminEvent::RequestFinished);

        if !self.is_current(nav) {
            tracing::debug!(action = keyword, nav, "dropping stale response");
            return None;
        }

        match reply.map_err(PlwrdError::from).and_then(|body| decode_reply(&body)) {
            Ok(payload) => Some(payload),
            Err(err) => {
                self.report(keyword, err);
                None
            }
        }
    }

    /// Show `err`. Transport failures also clear the view.
    fn report(&self, keyword: &'static str, err: PlwrdError) {
        match err {
            PlwrdError::Transport(err) => {
                tracing::warn!(action = keyword, status = err.status, error = %err, "request failed");
                self.presenter
                    .present(AdminEvent::TransportFailed(err.to_string()));
            }
            PlwrdError::Validation(err) => {
                tracing::debug!(action = keyword, error = %err, "invalid input");
                self.presenter.present(AdminEvent::Failed(err.to_string()));
            }
            PlwrdError::Remote(err) => {
                tracing::debug!(action = keyword, error = %err, "server rejected action");
                self.presenter.present(AdminEvent::Failed(err.to_string()));
            }
        }
    }

    fn current(&self) -> u64 {
        self.navigation.load(Ordering::Relaxed)
    }

    fn is_current(&self, nav: u64) -> bool {
        self.current() == nav
    }
}
