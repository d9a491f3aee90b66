//! Hash routes of the admin panel.
//!
//! The admin panel is driven entirely by the URL fragment. Each fragment maps
//! to one screen; anything that does not match is ignored.

use std::fmt;

/// Target of the only supported wipe route.
pub const WIPE_APPS: &str = "apps";

/// A parsed admin panel location.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// `''` or `'/'` — the app list.
    #[default]
    List,
    /// `create` — the new-app form.
    Create,
    /// `edit/<name>` — the edit form for one app.
    Edit(String),
    /// `log/<name>` — one app with its captured output.
    Log(String),
    /// `run/<name>` — run one app, then show its status and output.
    Run(String),
    /// `wipe/<target>` — confirmation screen; only `wipe/apps` shows anything.
    Wipe(String),
}

impl Route {
    /// Parse a fragment, with or without the leading `#`.
    ///
    /// Leading and trailing slashes are ignored. Returns `None` when the
    /// fragment matches no route. An unknown `<action>/<name>` pair falls
    /// back to the app list.
    #[must_use]
    pub fn parse(hash: &str) -> Option<Self> {
        let path = hash.strip_prefix('#').unwrap_or(hash).trim_matches('/');

        if path.is_empty() {
            return Some(Self::List);
        }
        if path == "create" {
            return Some(Self::Create);
        }

        let (action, name) = path.split_once('/')?;
        if action.is_empty() || name.is_empty() || name.contains('/') {
            return None;
        }

        let name = name.to_string();
        Some(match action {
            "edit" => Self::Edit(name),
            "log" => Self::Log(name),
            "run" => Self::Run(name),
            "wipe" => Self::Wipe(name),
            _ => Self::List,
        })
    }

    /// The wipe confirmation screen.
    #[must_use]
    pub fn wipe_apps() -> Self {
        Self::Wipe(WIPE_APPS.to_string())
    }

    /// Canonical fragment for this route, without the leading `#`.
    #[must_use]
    pub fn to_hash(&self) -> String {
        match self {
            Self::List => String::new(),
            Self::Create => "create".to_string(),
            Self::Edit(name) => format!("edit/{name}"),
            Self::Log(name) => format!("log/{name}"),
            Self::Run(name) => format!("run/{name}"),
            Self::Wipe(target) => format!("wipe/{target}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hash())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_empty_and_slash_as_list() {
        assert_eq!(Route::parse(""), Some(Route::List));
        assert_eq!(Route::parse("/"), Some(Route::List));
        assert_eq!(Route::parse("#"), Some(Route::List));
    }

    #[test]
    fn should_parse_create() {
        assert_eq!(Route::parse("create"), Some(Route::Create));
        assert_eq!(Route::parse("#create"), Some(Route::Create));
    }

    #[test]
    fn should_parse_app_actions() {
        assert_eq!(Route::parse("edit/web"), Some(Route::Edit("web".into())));
        assert_eq!(Route::parse("log/web"), Some(Route::Log("web".into())));
        assert_eq!(Route::parse("#run/web"), Some(Route::Run("web".into())));
    }

    #[test]
    fn should_parse_wipe_routes() {
        assert_eq!(Route::parse("wipe/apps"), Some(Route::wipe_apps()));
        assert_eq!(
            Route::parse("wipe/logs"),
            Some(Route::Wipe("logs".into()))
        );
    }

    #[test]
    fn should_fall_back_to_list_for_unknown_action() {
        assert_eq!(Route::parse("stop/web"), Some(Route::List));
    }

    #[test]
    fn should_ignore_unmatched_fragments() {
        assert_eq!(Route::parse("settings"), None);
        assert_eq!(Route::parse("edit/"), None);
        assert_eq!(Route::parse("edit/a/b"), None);
    }

    #[test]
    fn should_ignore_surrounding_slashes() {
        assert_eq!(Route::parse("/edit/web/"), Some(Route::Edit("web".into())));
    }

    #[test]
    fn should_produce_hash_that_parses_back() {
        let routes = [
            Route::List,
            Route::Create,
            Route::Edit("a1".into()),
            Route::Log("a1".into()),
            Route::Run("a1".into()),
            Route::wipe_apps(),
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.to_hash()), Some(route));
        }
    }

    #[test]
    fn should_display_with_hash_prefix() {
        assert_eq!(Route::Log("web".into()).to_string(), "#log/web");
    }
}
