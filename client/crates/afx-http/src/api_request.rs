use crate::{HttpError, HttpResult};

use afx_core::CredentialToken;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::Form;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Description of one call: endpoint, method, optional payload, extra headers.
///
/// `P` is the JSON payload type; requests without a JSON body use `()`.
pub struct ApiRequest<P = ()> {
    pub(crate) endpoint: String,
    pub(crate) method: Method,
    pub(crate) data: Option<P>,
    pub(crate) form: Option<Form>,
    pub(crate) headers: Vec<(String, String)>,
}

impl ApiRequest<()> {
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            data: None,
            form: None,
            headers: Vec::new(),
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::POST, endpoint)
    }

    pub fn put(endpoint: impl Into<String>) -> Self {
        Self::new(Method::PUT, endpoint)
    }

    pub fn patch(endpoint: impl Into<String>) -> Self {
        Self::new(Method::PATCH, endpoint)
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(Method::DELETE, endpoint)
    }

    /// Attach a multipart body. The transport picks the boundary, so any
    /// Content-Type header is dropped when the request is built.
    pub fn multipart(mut self, form: Form) -> Self {
        self.form = Some(form);
        self
    }

    /// Attach a JSON payload
    pub fn json<Q>(self, data: Q) -> ApiRequest<Q> {
        ApiRequest {
            endpoint: self.endpoint,
            method: self.method,
            data: Some(data),
            form: self.form,
            headers: self.headers,
        }
    }
}

impl<P> ApiRequest<P> {
    /// Add or override a header. Later values for the same name win.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// `Authorization: Bearer <token>`
    pub fn bearer(self, token: &CredentialToken) -> Self {
        self.header(AUTHORIZATION.as_str(), token.bearer())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn is_multipart(&self) -> bool {
        self.form.is_some()
    }

    /// Final header set: JSON content type by default, caller headers on top.
    pub(crate) fn header_map(&self) -> HttpResult<HeaderMap> {
        let mut map = HeaderMap::new();

        if !self.is_multipart() {
            map.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }

        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| HttpError::invalid_header(name.as_str(), e.to_string()))?;

            if self.is_multipart() && header_name == CONTENT_TYPE {
                continue;
            }

            let header_value = HeaderValue::from_str(value)
                .map_err(|e| HttpError::invalid_header(name.as_str(), e.to_string()))?;

            map.insert(header_name, header_value);
        }

        Ok(map)
    }
}
