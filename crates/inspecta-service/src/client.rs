//! Request wrapper for the backend `*.asmx` web services.
//!
//! Every call is `method + path + JSON body → JSON response`. Responses are
//! wrapped either as `{"data": ...}` or, by ASP.NET script services, as
//! `{"d": ...}` where `d` may itself be a JSON document encoded as a string.

use inspecta_core::config::ApiConfig;
use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ServiceError, ServiceResult};

/// Longest response body kept in an `ApiError`.
const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// ## Summary
    /// Creates a client for the backend at `config.base_url`.
    ///
    /// ## Errors
    /// Returns `ServiceError::InvalidConfiguration` if the base URL does not parse,
    /// or `ServiceError::HttpError` if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> ServiceResult<Self> {
        let base_url = parse_base_url(&config.base_url)?;
        let http = reqwest::Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            http,
            base_url,
            token: config.token.clone().filter(|token| !token.is_empty()),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// ## Summary
    /// Resolves a service path such as `schedule_service.asmx/GetScheduleList`
    /// against the base URL.
    ///
    /// ## Errors
    /// Returns `ServiceError::InvalidConfiguration` if the joined URL is invalid.
    pub fn endpoint(&self, path: &str) -> ServiceResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| ServiceError::InvalidConfiguration(format!("invalid path {path:?}: {err}")))
    }

    /// ## Summary
    /// Sends `body` as JSON to `path` and decodes the unwrapped response.
    ///
    /// ## Errors
    /// Returns `ServiceError::HttpError` on transport failures and timeouts,
    /// `ServiceError::ApiError` on non-success statuses and
    /// `ServiceError::DecodeError` if the payload does not match `T`.
    #[tracing::instrument(skip(self, body), fields(url = tracing::field::Empty))]
    pub async fn call<B, T>(&self, method: Method, path: &str, body: &B) -> ServiceResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        tracing::Span::current().record("url", tracing::field::display(&url));

        let mut request = self.http.request(method, url).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(status = status.as_u16(), bytes = text.len(), "Backend responded");

        if !status.is_success() {
            return Err(ServiceError::ApiError {
                status: status.as_u16(),
                body: truncate(text),
            });
        }

        decode_envelope(&text)
    }

    /// ## Summary
    /// POSTs `body` to `path`; the verb every `*.asmx` method is invoked with.
    ///
    /// ## Errors
    /// See [`ApiClient::call`].
    pub async fn post<B, T>(&self, path: &str, body: &B) -> ServiceResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call(Method::POST, path, body).await
    }
}

fn parse_base_url(raw: &str) -> ServiceResult<Url> {
    let raw = raw.trim();
    // Without a trailing slash `join` would replace the last path segment.
    let with_slash = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&with_slash)
        .map_err(|err| ServiceError::InvalidConfiguration(format!("invalid base URL {raw:?}: {err}")))
}

fn truncate(mut body: String) -> String {
    if body.len() > MAX_ERROR_BODY {
        let mut cut = MAX_ERROR_BODY;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
        body.push('…');
    }
    body
}

/// ## Summary
/// Decodes a backend response, unwrapping `{"data": ...}` or `{"d": ...}`.
///
/// A bare payload without either key is decoded as is. A string-valued
/// envelope is parsed again as JSON.
///
/// ## Errors
/// Returns `ServiceError::DecodeError` if the text or the unwrapped payload
/// is not valid for `T`.
pub fn decode_envelope<T: DeserializeOwned>(text: &str) -> ServiceResult<T> {
    let value: Value = serde_json::from_str(text)?;
    let payload = match value {
        Value::Object(mut object) => match object.remove("data").or_else(|| object.remove("d")) {
            Some(inner) => inner,
            None => Value::Object(object),
        },
        other => other,
    };

    let payload = match payload {
        Value::String(encoded) => serde_json::from_str(&encoded)?,
        other => other,
    };

    Ok(serde_json::from_value(payload)?)
}
