use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use tracing::debug;

use crate::error::{BumpError, Result};
use crate::github::ProfileSource;
use crate::identity::UserProfile;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Blocking client for the GitHub REST API.
pub struct GitHubClient {
    client: Client,
    api_url: String,
}

impl GitHubClient {
    /// Builds a client against `api_url`, authenticating with `token` when given.
    pub fn new(api_url: &str, token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("homebrew-bump-formula/{VERSION}"))
                .map_err(|e| BumpError::config(e.to_string()))?,
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        if let Some(token) = token {
            debug!("adding token to GitHub API requests");
            let mut auth_val = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| BumpError::config("token contains invalid header characters"))?;
            auth_val.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth_val);
        }

        let client = Client::builder().default_headers(headers).build()?;
        Ok(GitHubClient {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    fn profile_url(&self, actor: Option<&str>) -> String {
        match actor {
            Some(actor) => format!("{}/users/{}", self.api_url, actor),
            None => format!("{}/user", self.api_url),
        }
    }
}

impl ProfileSource for GitHubClient {
    fn fetch_profile(&self, actor: Option<&str>) -> Result<UserProfile> {
        let url = self.profile_url(actor);
        debug!(%url, "fetching user profile");

        let profile = self
            .client
            .get(&url)
            .send()?
            .error_for_status()?
            .json::<UserProfile>()?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_url_for_actor() {
        let client = GitHubClient::new("https://api.github.com/", None).unwrap();
        assert_eq!(
            client.profile_url(Some("octocat")),
            "https://api.github.com/users/octocat"
        );
    }

    #[test]
    fn test_profile_url_for_token_owner() {
        let client = GitHubClient::new("https://ghe.example.com/api/v3", Some("t0ken")).unwrap();
        assert_eq!(client.profile_url(None), "https://ghe.example.com/api/v3/user");
    }
}
