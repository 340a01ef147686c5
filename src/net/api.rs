//! REST client for the Mentify backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every call returns
//! [`ApiError::Unavailable`] since these endpoints are only reachable from
//! the browser bundle.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses carry the
//! backend's `message` field when it sent one so views can show it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginResponse, Mentor, MentorListResponse, NewMentor, User};
#[cfg(feature = "csr")]
use super::types::{LoginRequest, UserDataResponse};
use crate::config::AppConfig;
use crate::error::ApiError;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const USER_DATA_PATH: &str = "/api/auth/getUserData";
pub const MENTORS_PATH: &str = "/api/get-mentors";
pub const ADD_MENTOR_PATH: &str = "/api/addMentor";

/// Configured call surface for the backend: origin plus optional bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self { base_url: config.backend_url.clone(), token: None }
    }

    /// Same origin, authenticated with `token`.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Absolute URL for an API path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// Transport failure, non-2xx status, or an undecodable body.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let payload = LoginRequest { email: email.to_owned(), password: password.to_owned() };
            let req = gloo_net::http::Request::post(&self.endpoint(LOGIN_PATH))
                .json(&payload)
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            let resp = checked(req.send().await.map_err(network)?).await?;
            resp.json::<LoginResponse>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /api/auth/logout` with the bearer token.
    ///
    /// # Errors
    ///
    /// Transport failure or non-2xx status. Callers treat this as advisory.
    pub async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let req = self.authorized(gloo_net::http::Request::post(&self.endpoint(LOGOUT_PATH)));
            checked(req.send().await.map_err(network)?).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /api/auth/getUserData`: the user behind the bearer token.
    ///
    /// # Errors
    ///
    /// Transport failure, non-2xx status (expired/invalid token), or an
    /// undecodable body.
    pub async fn fetch_user_data(&self) -> Result<User, ApiError> {
        #[cfg(feature = "csr")]
        {
            let req = self.authorized(gloo_net::http::Request::get(&self.endpoint(USER_DATA_PATH)));
            let resp = checked(req.send().await.map_err(network)?).await?;
            let body = resp
                .json::<UserDataResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(body.user)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /api/get-mentors`, normalized through [`MentorListResponse`].
    ///
    /// # Errors
    ///
    /// Transport failure, non-2xx status, or [`ApiError::UnexpectedShape`]
    /// when the body is JSON in none of the accepted envelopes.
    pub async fn fetch_mentors(&self) -> Result<Vec<Mentor>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let req = self.authorized(gloo_net::http::Request::get(&self.endpoint(MENTORS_PATH)));
            let resp = checked(req.send().await.map_err(network)?).await?;
            let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            parse_mentor_list(&text)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /api/addMentor`. Only 200 and 201 count as created.
    ///
    /// # Errors
    ///
    /// Transport failure or any other status.
    pub async fn add_mentor(&self, mentor: &NewMentor) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let req = self
                .authorized(gloo_net::http::Request::post(&self.endpoint(ADD_MENTOR_PATH)))
                .json(mentor)
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            let resp = checked(req.send().await.map_err(network)?).await?;
            if is_created(resp.status()) {
                Ok(())
            } else {
                Err(ApiError::Status { status: resp.status(), message: None })
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = mentor;
            Err(ApiError::Unavailable)
        }
    }

    /// `DELETE /api/deleteMentor/:id`.
    ///
    /// # Errors
    ///
    /// Transport failure or non-2xx status.
    pub async fn delete_mentor(&self, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let req = self.authorized(gloo_net::http::Request::delete(&self.endpoint(&delete_mentor_path(id))));
            checked(req.send().await.map_err(network)?).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "csr")]
    fn authorized(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &bearer(token)),
            None => builder,
        }
    }
}

pub fn delete_mentor_path(id: &str) -> String {
    format!("/api/deleteMentor/{id}")
}

/// `Authorization` header value for `token`.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "csr"))]
fn is_created(status: u16) -> bool {
    matches!(status, 200 | 201)
}

/// Decode a mentor-list body in any accepted envelope.
///
/// # Errors
///
/// [`ApiError::Decode`] when the body is not JSON, [`ApiError::UnexpectedShape`]
/// when it is JSON of an unrecognized shape.
pub fn parse_mentor_list(body: &str) -> Result<Vec<Mentor>, ApiError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    match serde_json::from_value::<MentorListResponse>(value) {
        Ok(list) => Ok(list.into_mentors()),
        Err(err) => {
            log::warn!("unexpected mentor list shape: {err}");
            Err(ApiError::UnexpectedShape)
        }
    }
}

#[cfg(feature = "csr")]
fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "csr")]
async fn checked(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}
