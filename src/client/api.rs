/**
 * HTTP API Client
 *
 * Thin async client over the REST surface. Error bodies of the shape
 * `{"error": "..."}` become `ClientError::Api`; transport failures become
 * `ClientError::Network`.
 */

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::shared::api::{
    AuthResponse, LanguageResponse, LoginRequest, LogoutRequest, PasswordChangeRequest,
    ProfileUpdateRequest, RefreshRequest, RegisterRequest, ThemeResponse, TokenResponse,
    UserConfigResponse,
};
use crate::shared::config::{ConfigPayload, User};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Network(_) => None,
        }
    }
}

/// Client for one server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body["error"].as_str().map(str::to_string))
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        Err(ClientError::Api { status, message })
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        self.send(self.http.post(self.url("/auth/login")).json(request))
            .await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        self.send(self.http.post(self.url("/auth/register")).json(request))
            .await
    }

    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenResponse, ClientError> {
        let request = RefreshRequest {
            refresh_token: refresh_token.to_string(),
        };
        self.send(self.http.post(self.url("/auth/refresh")).json(&request))
            .await
    }

    pub async fn logout(&self, refresh_token: &str) -> Result<(), ClientError> {
        let request = LogoutRequest {
            refresh_token: refresh_token.to_string(),
        };
        let response = self
            .http
            .post(self.url("/auth/logout"))
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::Api {
                status,
                message: format!("Logout failed with status {}", status),
            })
        }
    }

    pub async fn fetch_user_config(
        &self,
        access_token: &str,
    ) -> Result<UserConfigResponse, ClientError> {
        self.send(
            self.http
                .get(self.url("/config/user"))
                .bearer_auth(access_token),
        )
        .await
    }

    pub async fn update_user_config(
        &self,
        access_token: &str,
        payload: &ConfigPayload,
        expected_version: Option<i64>,
    ) -> Result<UserConfigResponse, ClientError> {
        let mut request = self
            .http
            .put(self.url("/config/user"))
            .bearer_auth(access_token)
            .json(payload);
        if let Some(version) = expected_version {
            request = request.query(&[("expectedVersion", version)]);
        }
        self.send(request).await
    }

    pub async fn fetch_profile(&self, access_token: &str) -> Result<User, ClientError> {
        self.send(
            self.http
                .get(self.url("/user/profile"))
                .bearer_auth(access_token),
        )
        .await
    }

    pub async fn update_profile(
        &self,
        access_token: &str,
        request: &ProfileUpdateRequest,
    ) -> Result<User, ClientError> {
        self.send(
            self.http
                .put(self.url("/user/profile"))
                .bearer_auth(access_token)
                .json(request),
        )
        .await
    }

    pub async fn change_password(
        &self,
        access_token: &str,
        password: &str,
    ) -> Result<(), ClientError> {
        let request = PasswordChangeRequest {
            password: password.to_string(),
        };
        let response = self
            .http
            .put(self.url("/user/password"))
            .bearer_auth(access_token)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| body["error"].as_str().map(str::to_string))
                .unwrap_or_else(|| format!("Password change failed with status {}", status));
            Err(ClientError::Api { status, message })
        }
    }

    pub async fn languages(&self) -> Result<Vec<LanguageResponse>, ClientError> {
        self.send(self.http.get(self.url("/resource/languages"))).await
    }

    pub async fn language(&self, code: &str) -> Result<LanguageResponse, ClientError> {
        self.send(self.http.get(self.url(&format!("/resource/languages/{}", code))))
            .await
    }

    pub async fn themes(&self) -> Result<Vec<ThemeResponse>, ClientError> {
        self.send(self.http.get(self.url("/resource/themes"))).await
    }

    pub async fn theme(&self, id: &str) -> Result<ThemeResponse, ClientError> {
        self.send(self.http.get(self.url(&format!("/resource/themes/{}", id))))
            .await
    }

    pub async fn default_theme(&self) -> Result<ThemeResponse, ClientError> {
        self.send(self.http.get(self.url("/resource/themes/default")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = ApiClient::new("http://localhost:3001/");
        assert_eq!(client.url("/auth/login"), "http://localhost:3001/auth/login");
    }
}
