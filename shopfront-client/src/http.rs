//! HTTP transport for the storefront backend

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::client::{LoginRequest, LoginResponse};
use shopfront_core::error::{ServiceError, ServiceResult};
use shopfront_core::session::Session;

use crate::ClientConfig;

/// HTTP client for the storefront REST API
///
/// Cheap to clone; the session is shared across clones, so a login through
/// one handle authenticates every request from all of them.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    session: Session,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig, session: Session) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the session's bearer token when one is present
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.token() {
            Some(token) => request.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ServiceResult<T> {
        let request = self.authorize(self.client.get(self.url(path)));
        let response = request.send().await.map_err(ServiceError::network)?;
        Self::handle_response(response).await
    }

    /// Make a GET request with query parameters
    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ServiceResult<T> {
        let request = self.authorize(self.client.get(self.url(path)).query(query));
        let response = request.send().await.map_err(ServiceError::network)?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ServiceResult<T> {
        let request = self.authorize(self.client.post(self.url(path)).json(body));
        let response = request.send().await.map_err(ServiceError::network)?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ServiceResult<T> {
        let request = self.authorize(self.client.put(self.url(path)).json(body));
        let response = request.send().await.map_err(ServiceError::network)?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body, ignoring any response body
    pub async fn post_no_content<B: Serialize>(&self, path: &str, body: &B) -> ServiceResult<()> {
        let request = self.authorize(self.client.post(self.url(path)).json(body));
        let response = request.send().await.map_err(ServiceError::network)?;
        Self::check_status(response).await.map(|_| ())
    }

    /// Make a DELETE request, ignoring any response body
    pub async fn delete(&self, path: &str) -> ServiceResult<()> {
        let request = self.authorize(self.client.delete(self.url(path)));
        let response = request.send().await.map_err(ServiceError::network)?;
        Self::check_status(response).await.map(|_| ())
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ServiceResult<T> {
        let response = Self::check_status(response).await?;
        response.json().await.map_err(ServiceError::internal)
    }

    async fn check_status(response: reqwest::Response) -> ServiceResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);
        Err(match status {
            StatusCode::UNAUTHORIZED => ServiceError::Unauthorized,
            StatusCode::FORBIDDEN => ServiceError::Forbidden(message),
            StatusCode::NOT_FOUND => ServiceError::NotFound(message),
            StatusCode::BAD_REQUEST => ServiceError::Validation(message),
            _ => ServiceError::Internal(message),
        })
    }

    // ========== Auth API ==========

    /// Login with email and password, populating the session on success
    pub async fn login(&self, email: &str, password: &str) -> ServiceResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.post("api/auth/login", &request).await?;

        tracing::info!(user_id = %response.user.id, "Login succeeded");
        self.session
            .authenticate(response.token.clone(), response.user.clone());
        Ok(response)
    }

    /// Drop the session's credentials
    pub fn logout(&self) {
        self.session.clear();
    }
}

/// Pull the server's error message out of a `{"message": …}` body
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_the_json_field() {
        assert_eq!(
            error_message(r#"{"message":"Override already exists","code":409}"#),
            "Override already exists"
        );
        assert_eq!(error_message("plain body"), "plain body");
        assert_eq!(error_message(""), "");
    }

    #[test]
    fn urls_join_without_double_slashes() {
        let client = ClientConfig::new("http://localhost:8080/").build(Session::new());
        assert_eq!(client.url("/api/products"), "http://localhost:8080/api/products");
        assert_eq!(client.url("api/products"), "http://localhost:8080/api/products");
    }
}
