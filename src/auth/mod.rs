use std::sync::Arc;

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, Key},
};
use chrono::{Days, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util_resp::FailureResponse;

pub mod login;

pub const LOGIN_COOKIE: &str = "pubscore_session";
pub const FLASH_COOKIE: &str = "pubscore_flash";

pub struct AdminAccount {
    pub id: i64,
    pub username: String,
    password_hash: String,
}

/// The fixed set of admin accounts. There is no registration flow; the
/// accounts are injected at startup and live in memory only.
pub struct AuthConfig {
    accounts: Vec<AdminAccount>,
}

impl AuthConfig {
    pub fn new<'a>(
        credentials: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let accounts = credentials
            .into_iter()
            .enumerate()
            .map(|(n, (username, password))| {
                let salt = SaltString::generate(&mut OsRng);
                let password_hash = Argon2::default()
                    .hash_password(password.as_bytes(), &salt)
                    .unwrap()
                    .to_string();
                AdminAccount {
                    id: (n + 1) as i64,
                    username: username.to_string(),
                    password_hash,
                }
            })
            .collect();

        Self { accounts }
    }

    /// The two scoreboard admins, with passwords drawn from the environment.
    /// An account whose password variable is missing is left out entirely, so
    /// it can never be logged into.
    pub fn from_env() -> Self {
        let mut credentials = Vec::new();
        for (username, var) in
            [("Frances", "SECRET_PASSWORD_ONE"), ("Admin", "SECRET_PASSWORD_TWO")]
        {
            match std::env::var(var) {
                Ok(password) => credentials.push((username, password)),
                Err(_) => {
                    tracing::warn!(
                        username,
                        "{var} is not set, account disabled"
                    );
                }
            }
        }

        Self::new(
            credentials
                .iter()
                .map(|(username, password)| (*username, password.as_str())),
        )
    }

    pub fn verify(
        &self,
        username: &str,
        password: &str,
    ) -> Option<&AdminAccount> {
        let account =
            self.accounts.iter().find(|a| a.username == username)?;
        let parsed = PasswordHash::new(&account.password_hash).ok()?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .ok()
            .map(|()| account)
    }

    pub fn lookup(&self, id: i64) -> Option<&AdminAccount> {
        self.accounts.iter().find(|a| a.id == id)
    }
}

/// Extractor for a logged-in admin. Rejection sends the browser to the login
/// form, which is the gate on every admin page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    pub id: i64,
    pub username: String,
}

#[derive(Serialize, Deserialize)]
struct LoginSession {
    id: i64,
    expiry: NaiveDateTime,
}

#[async_trait]
impl<S> FromRequestParts<S> for Admin
where
    S: Send + Sync,
    Key: FromRef<S>,
    Arc<AuthConfig>: FromRef<S>,
{
    type Rejection = FailureResponse;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let jar: PrivateCookieJar<Key> =
            PrivateCookieJar::from_request_parts(parts, state)
                .await
                .map_err(|_| FailureResponse::LoginRequired(()))?;

        let login_cookie = match jar.get(LOGIN_COOKIE) {
            Some(cookie) => cookie,
            None => return Err(FailureResponse::LoginRequired(())),
        };

        let session = match serde_json::from_str::<LoginSession>(
            login_cookie.value(),
        ) {
            Ok(t) if Utc::now().naive_utc() < t.expiry => t,
            _ => return Err(FailureResponse::LoginRequired(())),
        };

        let auth = Arc::<AuthConfig>::from_ref(state);
        match auth.lookup(session.id) {
            Some(account) => Ok(Admin {
                id: account.id,
                username: account.username.clone(),
            }),
            None => Err(FailureResponse::LoginRequired(())),
        }
    }
}

pub fn set_login_cookie(id: i64, jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.add(
        Cookie::build((
            LOGIN_COOKIE,
            serde_json::to_string(&LoginSession {
                id,
                expiry: Utc::now()
                    .naive_utc()
                    .checked_add_days(Days::new(7))
                    .unwrap(),
            })
            .unwrap(),
        ))
        .path("/")
        .http_only(true)
        .build(),
    )
}

pub fn clear_login_cookie(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.remove(Cookie::build((LOGIN_COOKIE, "")).path("/").build())
}

/// One-shot message shown on the next page load, kept in its own cookie.
pub fn set_flash(msg: &str, jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.add(
        Cookie::build((FLASH_COOKIE, msg.to_string()))
            .path("/")
            .http_only(true)
            .build(),
    )
}

pub fn take_flash(jar: PrivateCookieJar) -> (Option<String>, PrivateCookieJar) {
    match jar.get(FLASH_COOKIE) {
        Some(cookie) => {
            let msg = cookie.value().to_string();
            let jar = jar
                .remove(Cookie::build((FLASH_COOKIE, "")).path("/").build());
            (Some(msg), jar)
        }
        None => (None, jar),
    }
}
