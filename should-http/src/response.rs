//! The response subject: a fully materialized HTTP response.
//!
//! [`HttpResponse`] is what every assertion runs against. It is immutable,
//! holds its body in memory, and splits headers into the response envelope
//! and the content that describes the body, so that content-scoped checks
//! can distinguish "header absent" from "no content at all".

use std::fmt;

use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::response::Parts;
use http::{HeaderMap, StatusCode};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;

use crate::codec::{DeserializationError, JsonCodec};

/// Header names that describe the body rather than the response envelope.
/// When a subject is built from a raw response these land on the content;
/// everything else stays on the envelope.
const CONTENT_HEADER_NAMES: [&str; 10] = [
    "allow",
    "content-encoding",
    "content-language",
    "content-length",
    "content-location",
    "content-md5",
    "content-range",
    "content-type",
    "expires",
    "last-modified",
];

fn is_content_header(name: &HeaderName) -> bool {
    CONTENT_HEADER_NAMES.contains(&name.as_str())
}

/// The body of a response together with the headers that describe it.
#[derive(Debug, Clone, Default)]
pub struct HttpContent {
    headers: HeaderMap,
    body: Bytes,
}

impl HttpContent {
    /// The content-level headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw body bytes.
    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

/// A fully materialized HTTP response: the subject of every assertion.
///
/// Build one with [`HttpResponse::builder`] in unit tests, or with
/// [`HttpResponse::read`] from a response produced by a real client.
///
/// # Examples
///
/// ```
/// use http::StatusCode;
/// use should_http::response::HttpResponse;
///
/// let response = HttpResponse::builder()
///     .status(StatusCode::ACCEPTED)
///     .header("accept-ranges", "range1")
///     .header("accept-ranges", "range2")
///     .build();
///
/// assert_eq!(response.status(), StatusCode::ACCEPTED);
/// assert_eq!(response.header_values("ACCEPT-RANGES"), ["range1", "range2"]);
/// ```
#[derive(Debug, Clone)]
pub struct HttpResponse {
    status: StatusCode,
    headers: HeaderMap,
    content: Option<HttpContent>,
}

impl HttpResponse {
    /// Starts building a response subject.
    pub fn builder() -> HttpResponseBuilder {
        HttpResponseBuilder::new()
    }

    /// Builds a subject from already-collected response parts, splitting
    /// content-level headers off the envelope.
    ///
    /// A response with an empty body and no content-level headers has no
    /// content at all.
    pub fn from_parts(parts: Parts, body: Bytes) -> Self {
        let mut headers = HeaderMap::new();
        let mut content_headers = HeaderMap::new();

        for (name, value) in parts.headers.iter() {
            if is_content_header(name) {
                content_headers.append(name.clone(), value.clone());
            } else {
                headers.append(name.clone(), value.clone());
            }
        }

        let content = if body.is_empty() && content_headers.is_empty() {
            None
        } else {
            Some(HttpContent {
                headers: content_headers,
                body,
            })
        };

        Self {
            status: parts.status,
            headers,
            content,
        }
    }

    /// Reads a response, fully materializing its body before returning.
    ///
    /// Checks never touch the wire: by the time a subject exists its body
    /// is complete.
    pub async fn read<B>(response: http::Response<B>) -> Result<Self, B::Error>
    where
        B: hyper::body::Body,
    {
        let (parts, body) = response.into_parts();
        let body = body.collect().await?.to_bytes();
        tracing::debug!(status = %parts.status, bytes = body.len(), "materialized response body");
        Ok(Self::from_parts(parts, body))
    }

    /// The response status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response-level headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The content attached to the response, if any.
    pub fn content(&self) -> Option<&HttpContent> {
        self.content.as_ref()
    }

    /// Returns every value of the named response-level header, or an empty
    /// list when the header is absent. Lookup is case-insensitive.
    pub fn header_values(&self, name: impl AsRef<str>) -> Vec<String> {
        collect_values(&self.headers, name.as_ref())
    }

    /// Returns every value of the named content-level header.
    ///
    /// The header being absent yields an empty list; the response having
    /// no content at all yields [`NoContent`].
    pub fn content_header_values(&self, name: impl AsRef<str>) -> Result<Vec<String>, NoContent> {
        let content = self.content.as_ref().ok_or(NoContent)?;
        Ok(collect_values(&content.headers, name.as_ref()))
    }

    /// Returns the body decoded as UTF-8 text, replacing invalid sequences.
    pub fn text(&self) -> Result<String, NoContent> {
        let content = self.content.as_ref().ok_or(NoContent)?;
        Ok(String::from_utf8_lossy(&content.body).into_owned())
    }

    /// Deserializes the body as `T` with the given codec.
    pub fn json<T: DeserializeOwned>(&self, codec: &JsonCodec) -> Result<T, ContentError> {
        let text = self.text()?;
        tracing::debug!(target_type = std::any::type_name::<T>(), "deserializing response content");
        Ok(codec.deserialize(&text)?)
    }
}

fn collect_values(headers: &HeaderMap, name: &str) -> Vec<String> {
    headers
        .get_all(name)
        .iter()
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .collect()
}

/// Builder for constructing response subjects in tests.
#[derive(Debug, Default)]
pub struct HttpResponseBuilder {
    status: StatusCode,
    headers: HeaderMap,
    content_headers: HeaderMap,
    body: Option<Bytes>,
}

impl HttpResponseBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Sets the status code. Defaults to 200 OK.
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Appends a response-level header; repeating a name accumulates values.
    pub fn header(mut self, name: impl AsRef<str>, value: &str) -> Self {
        append(&mut self.headers, name.as_ref(), value);
        self
    }

    /// Appends a content-level header.
    ///
    /// Attaches an (empty-bodied) content container if the response does
    /// not have one yet.
    pub fn content_header(mut self, name: impl AsRef<str>, value: &str) -> Self {
        append(&mut self.content_headers, name.as_ref(), value);
        self
    }

    /// Sets raw body bytes.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets a plain-text body.
    pub fn text_body(mut self, text: &str) -> Self {
        self.body = Some(Bytes::from(text.to_owned()));
        self
    }

    /// Sets a JSON body serialized from `value`, and a
    /// `Content-Type: application/json` content header unless one was
    /// already set.
    pub fn json_body<T: serde::Serialize>(mut self, value: &T) -> Self {
        let body = serde_json::to_vec(value).expect("failed to serialize JSON body");
        self.body = Some(Bytes::from(body));
        if !self.content_headers.contains_key(http::header::CONTENT_TYPE) {
            self.content_headers.insert(
                http::header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
        }
        self
    }

    /// Builds the subject.
    pub fn build(self) -> HttpResponse {
        let content = if self.body.is_none() && self.content_headers.is_empty() {
            None
        } else {
            Some(HttpContent {
                headers: self.content_headers,
                body: self.body.unwrap_or_default(),
            })
        };

        HttpResponse {
            status: self.status,
            headers: self.headers,
            content,
        }
    }
}

fn append(headers: &mut HeaderMap, name: &str, value: &str) {
    let name = HeaderName::from_bytes(name.as_bytes()).expect("invalid header name");
    let value = HeaderValue::from_str(value).expect("invalid header value");
    headers.append(name, value);
}

/// The response has no content attached at all.
///
/// Distinct from a header or a body merely being empty: a subject built
/// from a status-only response carries no content container, and reads
/// against it surface this error instead of an opaque transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoContent;

impl fmt::Display for NoContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("the response has no content")
    }
}

impl std::error::Error for NoContent {}

/// Error reading a typed value out of a response body.
#[derive(Debug, Clone)]
pub enum ContentError {
    /// The response has no content attached.
    NoContent(NoContent),
    /// The body text could not be deserialized as the requested type.
    Deserialization(DeserializationError),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::NoContent(error) => error.fmt(f),
            ContentError::Deserialization(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContentError::NoContent(error) => Some(error),
            ContentError::Deserialization(error) => Some(error),
        }
    }
}

impl From<NoContent> for ContentError {
    fn from(error: NoContent) -> Self {
        ContentError::NoContent(error)
    }
}

impl From<DeserializationError> for ContentError {
    fn from(error: DeserializationError) -> Self {
        ContentError::Deserialization(error)
    }
}
