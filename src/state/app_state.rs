//! Application state definitions

use super::forms::ContactForm;
use crate::config::ProfileConfig;
use chrono::{DateTime, Local};

/// Contact details shown beside the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            email: "keshariavedant@gmail.com".to_string(),
            linkedin: "linkedin.com/in/vedant-kesharia".to_string(),
            github: "github.com/vedantkesharia".to_string(),
        }
    }
}

impl From<&ProfileConfig> for Profile {
    fn from(config: &ProfileConfig) -> Self {
        let defaults = Profile::default();
        Self {
            email: config.email.clone().unwrap_or(defaults.email),
            linkedin: config.linkedin.clone().unwrap_or(defaults.linkedin),
            github: config.github.clone().unwrap_or(defaults.github),
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The contact form, created empty when the app starts
    pub form: ContactForm,
    pub profile: Profile,
    /// Local time of the last successful send
    pub last_sent_at: Option<DateTime<Local>>,
}

impl AppState {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_has_empty_form() {
        let state = AppState::new(Profile::default());
        assert!(state.form.first_name.as_text().is_empty());
        assert!(state.form.errors.is_empty());
        assert!(state.last_sent_at.is_none());
    }

    #[test]
    fn test_profile_from_partial_config() {
        let config = ProfileConfig {
            email: Some("me@example.com".to_string()),
            ..Default::default()
        };
        let profile = Profile::from(&config);
        assert_eq!(profile.email, "me@example.com");
        assert_eq!(profile.github, Profile::default().github);
    }
}
