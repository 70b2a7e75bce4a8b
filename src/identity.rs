//! Commit identity resolution from a hosting-platform user profile.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Accounts created after this day get the `{id}+{login}` no-reply form.
const PLUS_EMAIL_CUTOFF: (i32, u32, u32) = (2017, 7, 18);

/// User record as returned by the hosting API.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UserProfile {
    pub id: u64,
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Commit author written into the git configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn needs_id_prefix(created_at: &DateTime<Utc>) -> bool {
    let (y, m, d) = PLUS_EMAIL_CUTOFF;
    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(cutoff) => created_at.date_naive() > cutoff,
        None => false,
    }
}

/// Derives the commit author from a profile.
///
/// The profile's own name and email win when set. A missing email falls back
/// to the platform no-reply address under `noreply_domain`.
pub fn resolve_identity(profile: &UserProfile, noreply_domain: &str) -> Identity {
    let name = present(&profile.name).unwrap_or(profile.login.as_str()).to_string();

    let email = match present(&profile.email) {
        Some(email) => email.to_string(),
        None if needs_id_prefix(&profile.created_at) => {
            format!("{}+{}@{}", profile.id, profile.login, noreply_domain)
        }
        None => format!("{}@{}", profile.login, noreply_domain),
    };

    Identity { name, email }
}
