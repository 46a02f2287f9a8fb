use serde::{Deserialize, Serialize};

/// UI theme - persisted alongside the saved accounts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// A saved GitHub account
///
/// `login` is the identity key. The remaining fields are a subset of the
/// `/users/{name}` payload; anything else the API returns is ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    /// Epoch milliseconds of the search that saved this entry
    #[serde(default, rename = "savedAt")]
    pub saved_at: i64,
}

impl Account {
    pub fn new(login: impl Into<String>) -> Self {
        Account {
            login: login.into(),
            name: None,
            avatar_url: String::new(),
            bio: None,
            html_url: None,
            company: None,
            location: None,
            blog: None,
            public_repos: 0,
            followers: 0,
            following: 0,
            saved_at: 0,
        }
    }

    /// Stamp the account with the current time
    pub fn stamped_now(mut self) -> Self {
        self.saved_at = chrono::Utc::now().timestamp_millis();
        self
    }

    /// Human readable save time, local timezone
    pub fn saved_at_display(&self) -> Option<String> {
        use chrono::TimeZone;
        chrono::Local
            .timestamp_millis_opt(self.saved_at)
            .single()
            .filter(|_| self.saved_at > 0)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
    }
}

/// A public repository, fetched fresh whenever an account is opened
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_ignores_unknown_fields() {
        let json = r#"{
            "login": "octocat",
            "id": 583231,
            "name": "The Octocat",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "bio": null,
            "public_repos": 8,
            "site_admin": false
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.login, "octocat");
        assert_eq!(account.name.as_deref(), Some("The Octocat"));
        assert_eq!(account.bio, None);
        assert_eq!(account.public_repos, 8);
        assert_eq!(account.saved_at, 0);
    }

    #[test]
    fn test_repository_optional_fields() {
        let json = r#"{
            "id": 1296269,
            "name": "Hello-World",
            "description": null,
            "html_url": "https://github.com/octocat/Hello-World",
            "stargazers_count": 80,
            "forks_count": 9,
            "language": null
        }"#;
        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name, "Hello-World");
        assert_eq!(repo.description, None);
        assert_eq!(repo.language, None);
        assert_eq!(repo.stargazers_count, 80);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
    }
}
