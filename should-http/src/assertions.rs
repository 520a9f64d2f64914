//! The fluent assertion surface.
//!
//! [`Should`] begins a chain on a response (or its absence); every check
//! on [`HttpResponseAssertions`] verifies one condition and returns an
//! [`AndConstraint`] whose [`and()`](AndConstraint::and) resumes the
//! chain. A failing check fails the surrounding test with a descriptive
//! message, so the rest of the chain never runs.

use http::{StatusCode, Uri};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::codec::JsonCodec;
use crate::equivalency::{self, EquivalencyOptions};
use crate::headers::KnownHeader;
use crate::render::{render_json, render_value_set};
use crate::response::{ContentError, HttpResponse, NoContent};
use crate::typed::{CacheControl, EntityTag, PragmaDirective, TransferCoding};

/// Entry point: wraps a response, or its absence, for assertion.
///
/// Implemented for [`HttpResponse`] and for `Option<HttpResponse>`; the
/// latter covers the failed-to-obtain-a-response case, where every check
/// fails with a message ending "…but the response was `<none>`."
pub trait Should {
    /// Begins an assertion chain on this response.
    fn should(&self) -> HttpResponseAssertions<'_>;
}

impl Should for HttpResponse {
    fn should(&self) -> HttpResponseAssertions<'_> {
        HttpResponseAssertions::new(Some(self))
    }
}

impl Should for Option<HttpResponse> {
    fn should(&self) -> HttpResponseAssertions<'_> {
        HttpResponseAssertions::new(self.as_ref())
    }
}

/// Continuation returned by every check; `and()` resumes the chain.
#[derive(Debug, Clone)]
pub struct AndConstraint<'a> {
    assertions: HttpResponseAssertions<'a>,
}

impl<'a> AndConstraint<'a> {
    /// Continues the chain on the same response.
    pub fn and(self) -> HttpResponseAssertions<'a> {
        self.assertions
    }
}

/// Fluent assertions over a wrapped [`HttpResponse`].
///
/// # Examples
///
/// ```
/// use http::StatusCode;
/// use should_http::prelude::*;
///
/// let response = HttpResponse::builder()
///     .status(StatusCode::CREATED)
///     .header("location", "/customers/7")
///     .build();
///
/// response
///     .should()
///     .have_status_code(StatusCode::CREATED)
///     .and()
///     .have_response_header("location");
/// ```
#[derive(Debug, Clone)]
pub struct HttpResponseAssertions<'a> {
    subject: Option<&'a HttpResponse>,
    codec: JsonCodec,
}

impl<'a> HttpResponseAssertions<'a> {
    fn new(subject: Option<&'a HttpResponse>) -> Self {
        Self {
            subject,
            codec: JsonCodec::default(),
        }
    }

    /// Replaces the JSON codec used by typed-content checks.
    pub fn with_codec(mut self, codec: JsonCodec) -> Self {
        self.codec = codec;
        self
    }

    fn chain(self) -> AndConstraint<'a> {
        AndConstraint { assertions: self }
    }

    /// Fail-fast guard: every check goes through here first, so an absent
    /// response produces a uniform diagnostic instead of a dereference of
    /// nothing.
    #[track_caller]
    fn subject_or_fail(&self, expectation: &str) -> &'a HttpResponse {
        match self.subject {
            Some(response) => response,
            None => fail(format!("{expectation}, but the response was <none>.")),
        }
    }

    // ---- status codes ------------------------------------------------

    /// Asserts the exact status code.
    #[track_caller]
    pub fn have_status_code(self, expected: StatusCode) -> AndConstraint<'a> {
        let response = self.subject_or_fail(&format!("Expected status code to be {expected}"));
        if response.status() != expected {
            fail(format!(
                "Expected status code to be {expected}, but found {}.",
                response.status()
            ));
        }
        self.chain()
    }

    /// Asserts a 1xx (informational) status code.
    #[track_caller]
    pub fn have_informational_status_code(self) -> AndConstraint<'a> {
        self.have_status_code_between(100, 199)
    }

    /// Asserts a 2xx (success) status code.
    #[track_caller]
    pub fn have_success_status_code(self) -> AndConstraint<'a> {
        self.have_status_code_between(200, 299)
    }

    /// Asserts a 3xx (redirection) status code.
    #[track_caller]
    pub fn have_redirection_status_code(self) -> AndConstraint<'a> {
        self.have_status_code_between(300, 399)
    }

    /// Asserts a 4xx (client error) status code.
    #[track_caller]
    pub fn have_client_error_status_code(self) -> AndConstraint<'a> {
        self.have_status_code_between(400, 499)
    }

    /// Asserts a 5xx (server error) status code.
    #[track_caller]
    pub fn have_server_error_status_code(self) -> AndConstraint<'a> {
        self.have_status_code_between(500, 599)
    }

    // Closed interval over the numeric code: unnamed codes such as 299
    // still satisfy their class check.
    #[track_caller]
    fn have_status_code_between(self, lower: u16, upper: u16) -> AndConstraint<'a> {
        let response = self.subject_or_fail(&format!(
            "Expected status code to be between {lower} and {upper}"
        ));
        let code = response.status().as_u16();
        if code < lower || code > upper {
            fail(format!(
                "Expected status code to be between {lower} and {upper}, but found {}.",
                response.status()
            ));
        }
        self.chain()
    }

    // ---- content -----------------------------------------------------

    /// Asserts the body text equals `expected` exactly.
    #[track_caller]
    pub fn have_content(self, expected: &str) -> AndConstraint<'a> {
        let response = self.subject_or_fail("Expected response content");
        match response.text() {
            Ok(actual) if actual == expected => self.chain(),
            Ok(actual) => fail(format!(
                "Expected response content to be \"{expected}\", but found \"{actual}\"."
            )),
            Err(NoContent) => fail(format!(
                "Expected response content to be \"{expected}\", but the response has no content."
            )),
        }
    }

    /// Asserts the body is JSON structurally equivalent to `expected`.
    ///
    /// `expected` is serialized with serde and compared as a JSON value
    /// tree; extra fields in the actual body are ignored, and keys fold
    /// case when the codec says so.
    #[track_caller]
    pub fn have_json_content<T: Serialize>(self, expected: &T) -> AndConstraint<'a> {
        self.have_json_content_with(expected, EquivalencyOptions::new())
    }

    /// Like [`have_json_content`](Self::have_json_content), scoped by
    /// include/exclude field options.
    #[track_caller]
    pub fn have_json_content_with<T: Serialize>(
        self,
        expected: &T,
        options: EquivalencyOptions,
    ) -> AndConstraint<'a> {
        let response = self.subject_or_fail("Expected response content");
        let expected_value = match serde_json::to_value(expected) {
            Ok(value) => value,
            Err(error) => fail(format!("Failed to serialize the expected content: {error}.")),
        };
        let actual_value = self.body_value(response);

        if let Err(difference) = equivalency::compare(
            &expected_value,
            &actual_value,
            &options,
            self.codec.case_insensitive_keys,
        ) {
            fail(format!(
                "Expected response content to be equivalent to {}, but found {difference}.",
                render_json(&expected_value)
            ));
        }
        self.chain()
    }

    /// Asserts the body text satisfies `predicate`.
    #[track_caller]
    pub fn have_content_matching<P>(self, predicate: P) -> AndConstraint<'a>
    where
        P: FnOnce(&str) -> bool,
    {
        let response = self.subject_or_fail("Expected response content");
        match response.text() {
            Ok(text) if predicate(&text) => self.chain(),
            Ok(_) => fail(
                "Expected response content to match the given predicate, but it did not."
                    .to_string(),
            ),
            Err(NoContent) => fail(
                "Expected response content to match the given predicate, but the response has no content."
                    .to_string(),
            ),
        }
    }

    /// Asserts the body, deserialized as `T`, satisfies `predicate`.
    ///
    /// Malformed content surfaces the codec's own
    /// [`DeserializationError`](crate::codec::DeserializationError)
    /// message, not an assertion mismatch.
    #[track_caller]
    pub fn have_json_content_matching<T, P>(self, predicate: P) -> AndConstraint<'a>
    where
        T: DeserializeOwned,
        P: FnOnce(&T) -> bool,
    {
        let response = self.subject_or_fail("Expected response content");
        let value: T = match response.json(&self.codec) {
            Ok(value) => value,
            Err(ContentError::NoContent(_)) => fail(
                "Expected response content to match the given predicate, but the response has no content."
                    .to_string(),
            ),
            Err(ContentError::Deserialization(error)) => fail(format!("{error}.")),
        };
        if !predicate(&value) {
            fail(
                "Expected response content to match the given predicate, but it did not."
                    .to_string(),
            );
        }
        self.chain()
    }

    #[track_caller]
    fn body_value(&self, response: &HttpResponse) -> Value {
        match response.text() {
            Err(NoContent) => fail(
                "Expected response content, but the response has no content.".to_string(),
            ),
            Ok(text) => match self.codec.parse(&text) {
                Ok(value) => value,
                Err(error) => fail(format!("{error}.")),
            },
        }
    }

    // ---- response-level headers --------------------------------------

    /// Asserts the named response-level header exists with any value.
    #[track_caller]
    pub fn have_response_header(self, name: impl AsRef<str>) -> AndConstraint<'a> {
        let name = name.as_ref();
        let response = self.subject_or_fail(&format!("Expected header \"{name}\" to exist"));
        if response.header_values(name).is_empty() {
            fail(format!(
                "Expected header \"{name}\" to exist, but it does not exist."
            ));
        }
        self.chain()
    }

    /// Asserts the named response-level header contains `expected`.
    #[track_caller]
    pub fn have_response_header_value(
        self,
        name: impl AsRef<str>,
        expected: &str,
    ) -> AndConstraint<'a> {
        self.have_response_header_values(name, &[expected])
    }

    /// Asserts the named response-level header contains every expected
    /// value, in any order.
    #[track_caller]
    pub fn have_response_header_values(
        self,
        name: impl AsRef<str>,
        expected: &[&str],
    ) -> AndConstraint<'a> {
        let name = name.as_ref();
        let response = self.subject_or_fail(&format!(
            "Expected value(s) {} to exist in header \"{name}\"",
            render_value_set(expected)
        ));
        let actual = response.header_values(name);
        if !contains_all(&actual, expected) {
            fail(format!(
                "Expected value(s) {} to exist in header \"{name}\", but found {}.",
                render_value_set(expected),
                render_value_set(&actual)
            ));
        }
        self.chain()
    }

    // ---- content-level headers ---------------------------------------

    /// Asserts the named content-level header exists with any value.
    #[track_caller]
    pub fn have_content_header(self, name: impl AsRef<str>) -> AndConstraint<'a> {
        let name = name.as_ref();
        let response = self.subject_or_fail(&format!("Expected header \"{name}\" to exist"));
        match response.content_header_values(name) {
            Ok(values) if !values.is_empty() => self.chain(),
            Ok(_) => fail(format!(
                "Expected header \"{name}\" to exist, but it does not exist."
            )),
            Err(NoContent) => fail(format!(
                "Expected header \"{name}\" to exist, but the response has no content."
            )),
        }
    }

    /// Asserts the named content-level header contains `expected`.
    #[track_caller]
    pub fn have_content_header_value(
        self,
        name: impl AsRef<str>,
        expected: &str,
    ) -> AndConstraint<'a> {
        self.have_content_header_values(name, &[expected])
    }

    /// Asserts the named content-level header contains every expected
    /// value, in any order.
    #[track_caller]
    pub fn have_content_header_values(
        self,
        name: impl AsRef<str>,
        expected: &[&str],
    ) -> AndConstraint<'a> {
        let name = name.as_ref();
        let response = self.subject_or_fail(&format!(
            "Expected value(s) {} to exist in header \"{name}\"",
            render_value_set(expected)
        ));
        match response.content_header_values(name) {
            Ok(actual) if contains_all(&actual, expected) => self.chain(),
            Ok(actual) => fail(format!(
                "Expected value(s) {} to exist in header \"{name}\", but found {}.",
                render_value_set(expected),
                render_value_set(&actual)
            )),
            Err(NoContent) => fail(format!(
                "Expected value(s) {} to exist in header \"{name}\", but the response has no content.",
                render_value_set(expected)
            )),
        }
    }

    // ---- typed well-known headers ------------------------------------

    /// Asserts the `Location` header parses to exactly `expected`.
    #[track_caller]
    pub fn have_header_for_location(self, expected: Uri) -> AndConstraint<'a> {
        let expectation = format!("Expected the Location header to be \"{expected}\"");
        let response = self.subject_or_fail(&expectation);
        let raw = single_header_value(response, KnownHeader::Location, &expectation);
        let actual: Uri = match raw.parse() {
            Ok(uri) => uri,
            Err(_) => fail(format!(
                "{expectation}, but found the unparseable value \"{raw}\"."
            )),
        };
        if actual != expected {
            fail(format!("{expectation}, but found \"{actual}\"."));
        }
        self.chain()
    }

    /// Asserts the `ETag` header parses to exactly `expected`.
    #[track_caller]
    pub fn have_header_for_etag(self, expected: EntityTag) -> AndConstraint<'a> {
        let expectation = format!("Expected the ETag header to be {expected}");
        let response = self.subject_or_fail(&expectation);
        let raw = single_header_value(response, KnownHeader::ETag, &expectation);
        let actual: EntityTag = match raw.parse() {
            Ok(tag) => tag,
            Err(error) => fail(format!("{expectation}, but {error}.")),
        };
        if actual != expected {
            fail(format!("{expectation}, but found {actual}."));
        }
        self.chain()
    }

    /// Asserts the `Cache-Control` header parses to exactly `expected`.
    #[track_caller]
    pub fn have_header_for_cache_control(self, expected: CacheControl) -> AndConstraint<'a> {
        let expectation = format!("Expected the Cache-Control header to be \"{expected}\"");
        let response = self.subject_or_fail(&expectation);
        let raw = single_header_value(response, KnownHeader::CacheControl, &expectation);
        let actual: CacheControl = match raw.parse() {
            Ok(value) => value,
            Err(error) => fail(format!("{expectation}, but {error}.")),
        };
        if actual != expected {
            fail(format!("{expectation}, but found \"{actual}\"."));
        }
        self.chain()
    }

    /// Asserts the `Pragma` header contains the `expected` directive.
    #[track_caller]
    pub fn have_header_for_pragma(self, expected: PragmaDirective) -> AndConstraint<'a> {
        let expectation = format!("Expected the Pragma header to contain \"{expected}\"");
        let response = self.subject_or_fail(&expectation);
        let values = response.header_values(KnownHeader::Pragma);
        if values.is_empty() {
            fail(format!("{expectation}, but the header does not exist."));
        }
        let directives: Vec<PragmaDirective> = split_list(&values)
            .iter()
            .filter_map(|item| item.parse().ok())
            .collect();
        if !directives.contains(&expected) {
            fail(format!(
                "{expectation}, but found {}.",
                render_value_set(&values)
            ));
        }
        self.chain()
    }

    /// Asserts the `Transfer-Encoding` header contains the `expected`
    /// coding.
    #[track_caller]
    pub fn have_header_for_transfer_encoding(self, expected: TransferCoding) -> AndConstraint<'a> {
        let expectation = format!("Expected the Transfer-Encoding header to contain \"{expected}\"");
        let response = self.subject_or_fail(&expectation);
        let values = response.header_values(KnownHeader::TransferEncoding);
        if values.is_empty() {
            fail(format!("{expectation}, but the header does not exist."));
        }
        let codings: Vec<TransferCoding> = split_list(&values)
            .iter()
            .filter_map(|item| item.parse().ok())
            .collect();
        if !codings.contains(&expected) {
            fail(format!(
                "{expectation}, but found {}.",
                render_value_set(&values)
            ));
        }
        self.chain()
    }
}

#[track_caller]
fn single_header_value(
    response: &HttpResponse,
    header: KnownHeader,
    expectation: &str,
) -> String {
    match response.header_values(header).into_iter().next() {
        Some(value) => value,
        None => fail(format!("{expectation}, but the header does not exist.")),
    }
}

fn contains_all(actual: &[String], expected: &[&str]) -> bool {
    expected
        .iter()
        .all(|value| actual.iter().any(|candidate| candidate == value))
}

// Header values may carry comma-separated lists on a single line.
fn split_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| value.split(','))
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Fails the surrounding test with `message`.
#[track_caller]
fn fail(message: String) -> ! {
    panic!("{message}")
}
