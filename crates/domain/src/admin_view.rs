//! View state of the admin panel.
//!
//! The panel renders from a single [`AdminView`] snapshot. Nothing mutates it
//! directly: services and form inputs emit [`AdminEvent`]s and the view folds
//! them with [`AdminView::apply`].

use crate::app::{App, sort_by_name};
use crate::logs::AppLogs;
use crate::route::{Route, WIPE_APPS};

/// Draft values of the new-app form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub name: String,
    pub cmd: String,
}

/// The screen currently shown. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    List,
    App,
    Edit,
    Create,
    WipeConfirm,
    Blank,
}

/// Something that happened to the admin panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminEvent {
    /// A new route was entered; all transient state is reset.
    RouteEntered(Route),
    RequestStarted,
    RequestFinished,
    AppsLoaded(Vec<App>),
    AppChosen(App),
    EditLoaded(App),
    LogsLoaded(AppLogs),
    RunCompleted(bool),
    CreateFormChanged(CreateForm),
    /// The command field of the edit form changed.
    EditCommandChanged(String),
    AppCreated,
    /// An edit request finished, whatever its outcome.
    EditClosed,
    AppRemoved(String),
    /// Validation or remote failure. Only the message changes.
    Failed(String),
    /// The request itself failed. Everything is cleared except the message.
    TransportFailed(String),
}

/// Snapshot of everything the admin panel shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminView {
    pub route: Route,
    pub apps: Vec<App>,
    pub chosen_app: Option<App>,
    pub logs: Option<AppLogs>,
    pub edit_app: Option<App>,
    pub command_status: Option<bool>,
    pub create_form: Option<CreateForm>,
    pub wiping: bool,
    pub error: Option<String>,
    /// Requests currently in flight.
    pub pending: u32,
}

impl AdminView {
    /// Fold one event into the view.
    pub fn apply(&mut self, event: AdminEvent) {
        match event {
            AdminEvent::RouteEntered(route) => {
                self.clear();
                self.create_form = (route == Route::Create).then(CreateForm::default);
                self.wiping = matches!(&route, Route::Wipe(target) if target == WIPE_APPS);
                self.route = route;
            }
            AdminEvent::RequestStarted => self.pending += 1,
            AdminEvent::RequestFinished => self.pending = self.pending.saturating_sub(1),
            AdminEvent::AppsLoaded(mut apps) => {
                sort_by_name(&mut apps);
                self.apps = apps;
            }
            AdminEvent::AppChosen(app) => self.chosen_app = Some(app),
            AdminEvent::EditLoaded(app) => self.edit_app = Some(app),
            AdminEvent::LogsLoaded(logs) => self.logs = Some(logs.to_text()),
            AdminEvent::RunCompleted(ok) => self.command_status = Some(ok),
            AdminEvent::CreateFormChanged(form) => {
                if self.create_form.is_some() {
                    self.create_form = Some(form);
                }
            }
            AdminEvent::EditCommandChanged(cmd) => {
                if let Some(app) = self.edit_app.as_mut() {
                    app.cmd = cmd;
                }
            }
            AdminEvent::AppCreated => self.create_form = None,
            AdminEvent::EditClosed => self.edit_app = None,
            AdminEvent::AppRemoved(name) => self.apps.retain(|app| app.name != name),
            AdminEvent::Failed(message) => self.error = Some(message),
            AdminEvent::TransportFailed(message) => {
                self.clear();
                self.error = Some(message);
            }
        }
    }

    /// Reset every transient field. The route and request counter survive.
    fn clear(&mut self) {
        self.apps.clear();
        self.chosen_app = None;
        self.logs = None;
        self.edit_app = None;
        self.command_status = None;
        self.create_form = None;
        self.wiping = false;
        self.error = None;
    }

    /// The screen to render.
    #[must_use]
    pub fn panel(&self) -> Panel {
        if self.create_form.is_some() {
            Panel::Create
        } else if self.wiping {
            Panel::WipeConfirm
        } else if self.edit_app.is_some() {
            Panel::Edit
        } else if self.chosen_app.is_some() || self.logs.is_some() {
            Panel::App
        } else if self.route == Route::List {
            Panel::List
        } else {
            Panel::Blank
        }
    }

    /// `"Success"` or `"Failed"` once a run has completed.
    #[must_use]
    pub fn formatted_status(&self) -> Option<&'static str> {
        self.command_status
            .map(|ok| if ok { "Success" } else { "Failed" })
    }

    /// Whether any request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> AdminView {
        let mut view = AdminView::default();
        view.apply(AdminEvent::RouteEntered(Route::Run("web".into())));
        view.apply(AdminEvent::AppChosen(App::new("web", "./web")));
        view.apply(AdminEvent::LogsLoaded(AppLogs {
            stdout: "ok".into(),
            stderr: String::new(),
        }));
        view.apply(AdminEvent::RunCompleted(true));
        view.apply(AdminEvent::Failed("Not found".into()));
        view
    }

    #[test]
    fn should_clear_transient_fields_when_entering_list() {
        let mut view = populated();
        view.apply(AdminEvent::RouteEntered(Route::List));

        assert_eq!(view.route, Route::List);
        assert!(view.chosen_app.is_none());
        assert!(view.logs.is_none());
        assert!(view.command_status.is_none());
        assert!(view.error.is_none());
        assert_eq!(view.panel(), Panel::List);
    }

    #[test]
    fn should_open_empty_form_on_create_route() {
        let mut view = populated();
        view.apply(AdminEvent::RouteEntered(Route::Create));

        assert_eq!(view.create_form, Some(CreateForm::default()));
        assert_eq!(view.panel(), Panel::Create);
    }

    #[test]
    fn should_confirm_wipe_only_for_apps_target() {
        let mut view = AdminView::default();
        view.apply(AdminEvent::RouteEntered(Route::wipe_apps()));
        assert_eq!(view.panel(), Panel::WipeConfirm);

        view.apply(AdminEvent::RouteEntered(Route::Wipe("other".into())));
        assert!(!view.wiping);
        assert_eq!(view.panel(), Panel::Blank);
    }

    #[test]
    fn should_sort_loaded_apps() {
        let mut view = AdminView::default();
        view.apply(AdminEvent::AppsLoaded(vec![
            App::new("zeta", "z"),
            App::new("alpha", "a"),
        ]));
        assert_eq!(view.apps[0].name, "alpha");
        assert_eq!(view.apps[1].name, "zeta");
    }

    #[test]
    fn should_unescape_logs_on_load() {
        let mut view = AdminView::default();
        view.apply(AdminEvent::LogsLoaded(AppLogs {
            stdout: "&lt;ok&gt;".into(),
            stderr: String::new(),
        }));
        assert_eq!(view.logs.unwrap().stdout, "<ok>");
    }

    #[test]
    fn should_keep_form_populated_when_remote_fails() {
        let mut view = AdminView::default();
        view.apply(AdminEvent::RouteEntered(Route::Create));
        let form = CreateForm {
            name: "ab".into(),
            cmd: "x".into(),
        };
        view.apply(AdminEvent::CreateFormChanged(form.clone()));
        view.apply(AdminEvent::Failed("Duplicate entry in a database".into()));

        assert_eq!(view.create_form, Some(form));
        assert_eq!(
            view.error.as_deref(),
            Some("Duplicate entry in a database")
        );
    }

    #[test]
    fn should_ignore_form_changes_outside_create_screen() {
        let mut view = AdminView::default();
        view.apply(AdminEvent::CreateFormChanged(CreateForm::default()));
        assert!(view.create_form.is_none());
    }

    #[test]
    fn should_clear_everything_but_message_on_transport_failure() {
        let mut view = populated();
        view.apply(AdminEvent::AppsLoaded(vec![App::new("a1", "x")]));
        view.apply(AdminEvent::TransportFailed("Internal Server Error".into()));

        assert!(view.apps.is_empty());
        assert!(view.chosen_app.is_none());
        assert!(view.logs.is_none());
        assert_eq!(view.error.as_deref(), Some("Internal Server Error"));
    }

    #[test]
    fn should_track_pending_requests() {
        let mut view = AdminView::default();
        view.apply(AdminEvent::RequestStarted);
        view.apply(AdminEvent::RequestStarted);
        view.apply(AdminEvent::RequestFinished);
        assert!(view.is_loading());
        view.apply(AdminEvent::RequestFinished);
        view.apply(AdminEvent::RequestFinished);
        assert_eq!(view.pending, 0);
    }

    #[test]
    fn should_keep_pending_count_across_route_changes() {
        let mut view = AdminView::default();
        view.apply(AdminEvent::RequestStarted);
        view.apply(AdminEvent::RouteEntered(Route::Create));
        assert_eq!(view.pending, 1);
    }

    #[test]
    fn should_remove_app_from_list() {
        let mut view = AdminView::default();
        view.apply(AdminEvent::AppsLoaded(vec![
            App::new("a1", "x"),
            App::new("b1", "y"),
        ]));
        view.apply(AdminEvent::AppRemoved("a1".into()));
        assert_eq!(view.apps, [App::new("b1", "y")]);
    }

    #[test]
    fn should_edit_command_of_loaded_app() {
        let mut view = AdminView::default();
        view.apply(AdminEvent::RouteEntered(Route::Edit("web".into())));
        view.apply(AdminEvent::EditLoaded(App::new("web", "old")));
        view.apply(AdminEvent::EditCommandChanged("new".into()));

        assert_eq!(view.panel(), Panel::Edit);
        assert_eq!(view.edit_app.as_ref().unwrap().cmd, "new");

        view.apply(AdminEvent::EditClosed);
        assert!(view.edit_app.is_none());
    }

    #[test]
    fn should_format_command_status() {
        let mut view = AdminView::default();
        assert_eq!(view.formatted_status(), None);
        view.apply(AdminEvent::RunCompleted(true));
        assert_eq!(view.formatted_status(), Some("Success"));
        view.apply(AdminEvent::RunCompleted(false));
        assert_eq!(view.formatted_status(), Some("Failed"));
    }

    #[test]
    fn should_show_app_panel_after_app_is_chosen() {
        let view = populated();
        assert_eq!(view.panel(), Panel::App);
    }
}
