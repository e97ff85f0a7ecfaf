//! Credential validator for the register and login endpoints.
//!
//! Runs before the handler: buffers the JSON body, checks that the required
//! fields are present and that the email looks like `local@domain.tld`, then
//! hands the untouched body on. Anything else about the request is left to the
//! handler.

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    middleware::Next,
    response::Response,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use crate::error::ApiError;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email regex"));

/// Upper bound on a credentials body; anything larger is not a login form
const MAX_CREDENTIALS_BYTES: usize = 64 * 1024;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Missing Credentials")]
    MissingCredentials,

    #[error("Invalid Email")]
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    Register,
    Login,
}

impl CredentialKind {
    fn for_path(path: &str) -> Option<Self> {
        if path.ends_with("/register") {
            Some(Self::Register)
        } else if path.ends_with("/login") {
            Some(Self::Login)
        } else {
            None
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.is_empty())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Check a payload against the requirements of `kind`
pub fn validate(kind: CredentialKind, credentials: &Credentials) -> Result<(), CredentialError> {
    let complete = match kind {
        CredentialKind::Register => {
            present(&credentials.email) && present(&credentials.name) && present(&credentials.password)
        }
        CredentialKind::Login => present(&credentials.email) && present(&credentials.password),
    };

    if !complete {
        return Err(CredentialError::MissingCredentials);
    }

    match credentials.email.as_deref() {
        Some(email) if is_valid_email(email) => Ok(()),
        _ => Err(CredentialError::InvalidEmail),
    }
}

/// Middleware wrapper around [`validate`]; paths other than register/login pass through
pub async fn validate_credentials_middleware(
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(kind) = CredentialKind::for_path(request.uri().path()) else {
        return Ok(next.run(request).await);
    };

    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, MAX_CREDENTIALS_BYTES)
        .await
        .map_err(|_| ApiError::from(CredentialError::MissingCredentials))?;

    // An unparseable body has no usable credentials in it
    let credentials: Credentials = serde_json::from_slice(&bytes).unwrap_or_default();
    validate(kind, &credentials).map_err(|e| {
        tracing::debug!("Credential check failed for {:?}: {}", kind, e);
        ApiError::from(e)
    })?;

    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(email: Option<&str>, name: Option<&str>, password: Option<&str>) -> Credentials {
        Credentials {
            email: email.map(str::to_string),
            name: name.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn register_requires_all_three_fields() {
        let cases = [
            creds(None, Some("Ada"), Some("pw")),
            creds(Some("ada@example.com"), None, Some("pw")),
            creds(Some("ada@example.com"), Some("Ada"), None),
            creds(Some(""), Some("Ada"), Some("pw")),
            creds(Some("ada@example.com"), Some(""), Some("pw")),
        ];
        for case in &cases {
            assert_eq!(
                validate(CredentialKind::Register, case),
                Err(CredentialError::MissingCredentials)
            );
        }
        assert_eq!(
            validate(CredentialKind::Register, &creds(Some("ada@example.com"), Some("Ada"), Some("pw"))),
            Ok(())
        );
    }

    #[test]
    fn login_does_not_need_a_name() {
        assert_eq!(
            validate(CredentialKind::Login, &creds(Some("ada@example.com"), None, Some("pw"))),
            Ok(())
        );
        assert_eq!(
            validate(CredentialKind::Login, &creds(Some("ada@example.com"), None, None)),
            Err(CredentialError::MissingCredentials)
        );
    }

    #[test]
    fn email_shape() {
        for good in ["a@b.c", "ada.lovelace@example.co.uk", "x y@host.org"] {
            assert!(is_valid_email(good), "{good} should pass");
        }
        for bad in ["plainaddress", "ada@example", "@.", "ada@ example.com", "a@b."] {
            assert!(!is_valid_email(bad), "{bad} should fail");
        }
    }

    #[test]
    fn bad_email_reported_after_presence_check() {
        assert_eq!(
            validate(CredentialKind::Login, &creds(Some("nope"), None, Some("pw"))),
            Err(CredentialError::InvalidEmail)
        );
    }

    #[test]
    fn routes_by_path_suffix() {
        assert_eq!(CredentialKind::for_path("/auth/register"), Some(CredentialKind::Register));
        assert_eq!(CredentialKind::for_path("/auth/login"), Some(CredentialKind::Login));
        assert_eq!(CredentialKind::for_path("/auth/verify"), None);
    }
}
