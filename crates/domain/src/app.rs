//! App — a named, shell-command-backed process managed by the remote service.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Accepted length of an app name, in characters.
pub const NAME_LENGTH: (usize, usize) = (2, 16);

/// Accepted length of a command, in characters.
pub const COMMAND_LENGTH: (usize, usize) = (1, 255);

/// A managed app as reported by the remote endpoint.
///
/// The client holds no authority over apps: values are mirrored from the
/// server and only validated when the user submits a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    pub name: String,
    pub cmd: String,
}

impl App {
    #[must_use]
    pub fn new(name: impl Into<String>, cmd: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cmd: cmd.into(),
        }
    }

    /// Check the form rules for both fields.
    ///
    /// Name length is checked first, then name characters, then command
    /// length; the first failure is reported.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_command(&self.cmd)
    }
}

/// Check an app name: 2 to 16 characters, a leading ASCII letter followed by
/// letters, digits, `_`, `.` or `-`. Letters may be of either case.
///
/// # Errors
///
/// Returns [`ValidationError::Length`] or
/// [`ValidationError::InvalidCharacters`].
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    check_length(name, "Name", NAME_LENGTH)?;

    let mut chars = name.chars();
    let valid_head = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let valid_tail = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));
    if valid_head && valid_tail {
        Ok(())
    } else {
        Err(ValidationError::InvalidCharacters { field: "Name" })
    }
}

/// Check a command: 1 to 255 characters, any content.
///
/// # Errors
///
/// Returns [`ValidationError::Length`].
pub fn validate_command(cmd: &str) -> Result<(), ValidationError> {
    check_length(cmd, "Command", COMMAND_LENGTH)
}

fn check_length(
    value: &str,
    field: &'static str,
    (min, max): (usize, usize),
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if (min..=max).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::Length { field, min, max })
    }
}

/// Order apps by name, as the list view shows them.
pub fn sort_by_name(apps: &mut [App]) {
    apps.sort_by(|a, b| a.name.cmp(&b.name));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_minimal_valid_app() {
        assert!(App::new("ab", "x").validate().is_ok());
    }

    #[test]
    fn should_accept_name_with_every_allowed_character() {
        assert!(validate_name("My_app.v-2").is_ok());
        assert!(validate_name("ABCDEFGHIJKLMNOP").is_ok());
    }

    #[test]
    fn should_reject_name_that_is_too_short() {
        assert_eq!(
            validate_name("a"),
            Err(ValidationError::Length {
                field: "Name",
                min: 2,
                max: 16
            })
        );
    }

    #[test]
    fn should_reject_name_that_is_too_long() {
        let result = validate_name("abcdefghijklmnopq");
        assert!(matches!(result, Err(ValidationError::Length { .. })));
    }

    #[test]
    fn should_reject_name_starting_with_digit() {
        assert_eq!(
            validate_name("1app"),
            Err(ValidationError::InvalidCharacters { field: "Name" })
        );
    }

    #[test]
    fn should_reject_name_with_space_or_slash() {
        assert!(validate_name("my app").is_err());
        assert!(validate_name("my/app").is_err());
    }

    #[test]
    fn should_reject_non_ascii_letters() {
        assert!(validate_name("\u{e9}cole").is_err());
    }

    #[test]
    fn should_check_name_length_before_characters() {
        assert!(matches!(
            validate_name("1"),
            Err(ValidationError::Length { .. })
        ));
    }

    #[test]
    fn should_reject_empty_command() {
        assert_eq!(
            App::new("ab", "").validate(),
            Err(ValidationError::Length {
                field: "Command",
                min: 1,
                max: 255
            })
        );
    }

    #[test]
    fn should_accept_command_of_maximum_length() {
        assert!(validate_command(&"x".repeat(255)).is_ok());
        assert!(validate_command(&"x".repeat(256)).is_err());
    }

    #[test]
    fn should_report_name_error_before_command_error() {
        let result = App::new("", "").validate();
        assert!(matches!(
            result,
            Err(ValidationError::Length { field: "Name", .. })
        ));
    }

    #[test]
    fn should_sort_apps_by_name() {
        let mut apps = vec![
            App::new("web", "a"),
            App::new("api", "b"),
            App::new("db", "c"),
        ];
        sort_by_name(&mut apps);
        let names: Vec<_> = apps.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["api", "db", "web"]);
    }

    #[test]
    fn should_parse_from_json() {
        let app: App = serde_json::from_str(r#"{"name":"web","cmd":"./run.sh"}"#).unwrap();
        assert_eq!(app, App::new("web", "./run.sh"));
    }
}
