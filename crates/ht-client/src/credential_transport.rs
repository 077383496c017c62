use crate::{AUTH_LOGIN_PATH, AUTH_REGISTER_PATH, ApiClient, ClientError, ClientResult};

use ht_core::{Credentials, Identity, RegistrationProfile};

use async_trait::async_trait;
use log::debug;
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

/// What a successful login or registration hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGrant {
    pub identity: Identity,
    /// Server-issued credential, when the auth service provides one
    pub token: Option<String>,
}

/// Network boundary for establishing an identity.
///
/// Implementations return either a typed grant or a typed failure; untyped
/// payloads never cross this boundary.
#[async_trait]
pub trait CredentialTransport: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> ClientResult<AuthGrant>;

    async fn register(&self, profile: &RegistrationProfile) -> ClientResult<AuthGrant>;
}

/// `{"user": Identity, "token": ..}`
#[derive(Deserialize)]
struct WrappedPayload {
    user: Identity,
    #[serde(default, alias = "accessToken")]
    token: Option<String>,
}

/// The identity object itself, optionally carrying a token.
#[derive(Deserialize)]
struct FlatPayload {
    #[serde(flatten)]
    identity: Identity,
    #[serde(default, alias = "accessToken")]
    token: Option<String>,
}

/// Decodes either response shape, reporting the field error of the shape the body claims.
fn decode_grant(body: Value) -> ClientResult<AuthGrant> {
    if body.get("user").is_some_and(Value::is_object) {
        let WrappedPayload { user, token } =
            serde_json::from_value(body).map_err(ClientError::from_json)?;
        return Ok(AuthGrant {
            identity: user,
            token,
        });
    }

    let FlatPayload { identity, token } =
        serde_json::from_value(body).map_err(ClientError::from_json)?;
    Ok(AuthGrant { identity, token })
}

/// `CredentialTransport` over the REST auth endpoints.
#[derive(Clone)]
pub struct HttpCredentialTransport {
    api: ApiClient,
}

impl HttpCredentialTransport {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CredentialTransport for HttpCredentialTransport {
    async fn login(&self, credentials: &Credentials) -> ClientResult<AuthGrant> {
        debug!("POST {AUTH_LOGIN_PATH} as {}", credentials.username);

        let req = self.api.request(Method::POST, AUTH_LOGIN_PATH).json(credentials);
        decode_grant(self.api.execute(req).await?)
    }

    async fn register(&self, profile: &RegistrationProfile) -> ClientResult<AuthGrant> {
        debug!("POST {AUTH_REGISTER_PATH} as {}", profile.username);

        let req = self.api.request(Method::POST, AUTH_REGISTER_PATH).json(profile);
        decode_grant(self.api.execute(req).await?)
    }
}
