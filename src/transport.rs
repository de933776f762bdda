use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::SyncError;

const USER_AGENT: &str = "toggl2clockify";
const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn post_json<T: Serialize>(url: Url, payload: &T) -> Result<Self, SyncError> {
        let body = serde_json::to_vec(payload)
            .map_err(|err| SyncError::RequestBuild(format!("invalid body: {err}")))?;
        Ok(Self {
            method: Method::POST,
            url,
            headers: HeaderMap::new(),
            body: Some(body),
        })
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, SyncError> {
        serde_json::from_slice(&self.body).map_err(SyncError::Decode)
    }

    /// Turns the response into a rejection, keeping the body when it is JSON.
    pub fn rejection(&self) -> SyncError {
        SyncError::Rejected {
            status: self.status,
            detail: serde_json::from_slice(&self.body).ok(),
        }
    }
}

/// Something that can put a request on the wire and hand back the response.
#[cfg_attr(test, mockall::automock)]
pub trait Transport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, SyncError>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, SyncError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(SyncError::Transport)?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, SyncError> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        let response = builder.send().map_err(SyncError::Transport)?;
        let status = response.status();
        let body = response.bytes().map_err(SyncError::Transport)?;
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

#[derive(Clone)]
pub enum Credentials {
    /// HTTP Basic, as Toggl expects.
    Basic { user: String, password: String },
    /// Clockify's `X-Api-Key` header.
    ApiKey(String),
}

impl Credentials {
    fn header(&self) -> Result<(HeaderName, HeaderValue), SyncError> {
        let (name, raw) = match self {
            Credentials::Basic { user, password } => {
                let encoded = STANDARD.encode(format!("{user}:{password}"));
                (AUTHORIZATION, format!("Basic {encoded}"))
            }
            Credentials::ApiKey(key) => (HeaderName::from_static(API_KEY_HEADER), key.clone()),
        };
        let mut value = HeaderValue::from_str(&raw).map_err(|_| {
            SyncError::RequestBuild("credentials are not a valid header".to_string())
        })?;
        value.set_sensitive(true);
        Ok((name, value))
    }
}

pub struct AuthTransport<T> {
    next: T,
    credentials: Credentials,
}

impl<T: Transport> AuthTransport<T> {
    pub fn new(credentials: Credentials, next: T) -> Self {
        Self { next, credentials }
    }
}

impl<T: Transport> Transport for AuthTransport<T> {
    fn send(&self, mut request: HttpRequest) -> Result<HttpResponse, SyncError> {
        let (name, value) = self.credentials.header()?;
        request.headers.insert(name, value);
        self.next.send(request)
    }
}

pub struct ContentTypeTransport<T> {
    next: T,
    content: HeaderValue,
}

impl<T: Transport> ContentTypeTransport<T> {
    pub fn new(content: &'static str, next: T) -> Self {
        Self {
            next,
            content: HeaderValue::from_static(content),
        }
    }
}

impl<T: Transport> Transport for ContentTypeTransport<T> {
    fn send(&self, mut request: HttpRequest) -> Result<HttpResponse, SyncError> {
        request.headers.insert(CONTENT_TYPE, self.content.clone());
        self.next.send(request)
    }
}
