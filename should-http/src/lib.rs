//! Fluent assertions for HTTP responses.
//!
//! `should-http` wraps a fully materialized HTTP response in a chainable
//! assertion API for use inside tests. Checks compose left-to-right with
//! `and()`; the first failing check fails the surrounding test with a
//! descriptive message.
//!
//! # Examples
//!
//! ```
//! use http::StatusCode;
//! use should_http::prelude::*;
//!
//! let response = HttpResponse::builder()
//!     .status(StatusCode::OK)
//!     .header("x-request-id", "42")
//!     .text_body("hello world")
//!     .build();
//!
//! response
//!     .should()
//!     .have_success_status_code()
//!     .and()
//!     .have_response_header("x-request-id")
//!     .and()
//!     .have_content("hello world");
//! ```
//!
//! Responses produced by a real client are materialized with
//! [`HttpResponse::read`](response::HttpResponse::read), which collects the
//! body before any check runs.

pub mod assertions;
pub mod codec;
pub mod equivalency;
pub mod headers;
pub mod response;
pub mod typed;

mod render;

pub mod prelude {
    pub use crate::assertions::{AndConstraint, HttpResponseAssertions, Should};
    pub use crate::codec::{DeserializationError, JsonCodec};
    pub use crate::equivalency::EquivalencyOptions;
    pub use crate::headers::KnownHeader;
    pub use crate::response::{HttpContent, HttpResponse};
    pub use crate::typed::{CacheControl, EntityTag, PragmaDirective, TransferCoding};

    pub use http::{StatusCode, Uri};
}
