//! Well-known HTTP response and content header names.

use std::fmt;

/// The standard response and content headers, mapped to their canonical
/// wire names.
///
/// Every assertion that takes a header name accepts a `KnownHeader` in
/// place of a string, so these two checks are the same check:
///
/// ```
/// use should_http::prelude::*;
///
/// let response = HttpResponse::builder()
///     .header("accept-ranges", "bytes")
///     .build();
///
/// response.should().have_response_header(KnownHeader::AcceptRanges);
/// response.should().have_response_header("accept-ranges");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownHeader {
    AcceptRanges,
    Age,
    Allow,
    CacheControl,
    Connection,
    ContentEncoding,
    ContentLanguage,
    ContentLength,
    ContentLocation,
    ContentMd5,
    ContentRange,
    ContentType,
    Date,
    ETag,
    Expires,
    KeepAlive,
    LastModified,
    Location,
    Pragma,
    ProxyAuthenticate,
    RetryAfter,
    Server,
    SetCookie,
    Trailer,
    TransferEncoding,
    Upgrade,
    Vary,
    Via,
    Warning,
    WwwAuthenticate,
}

impl KnownHeader {
    /// Returns the canonical wire name for this header.
    ///
    /// The mapping is an explicit `match`: adding or reordering variants
    /// cannot silently remap a name.
    pub fn as_str(self) -> &'static str {
        match self {
            KnownHeader::AcceptRanges => "Accept-Ranges",
            KnownHeader::Age => "Age",
            KnownHeader::Allow => "Allow",
            KnownHeader::CacheControl => "Cache-Control",
            KnownHeader::Connection => "Connection",
            KnownHeader::ContentEncoding => "Content-Encoding",
            KnownHeader::ContentLanguage => "Content-Language",
            KnownHeader::ContentLength => "Content-Length",
            KnownHeader::ContentLocation => "Content-Location",
            KnownHeader::ContentMd5 => "Content-MD5",
            KnownHeader::ContentRange => "Content-Range",
            KnownHeader::ContentType => "Content-Type",
            KnownHeader::Date => "Date",
            KnownHeader::ETag => "ETag",
            KnownHeader::Expires => "Expires",
            KnownHeader::KeepAlive => "Keep-Alive",
            KnownHeader::LastModified => "Last-Modified",
            KnownHeader::Location => "Location",
            KnownHeader::Pragma => "Pragma",
            KnownHeader::ProxyAuthenticate => "Proxy-Authenticate",
            KnownHeader::RetryAfter => "Retry-After",
            KnownHeader::Server => "Server",
            KnownHeader::SetCookie => "Set-Cookie",
            KnownHeader::Trailer => "Trailer",
            KnownHeader::TransferEncoding => "Transfer-Encoding",
            KnownHeader::Upgrade => "Upgrade",
            KnownHeader::Vary => "Vary",
            KnownHeader::Via => "Via",
            KnownHeader::Warning => "Warning",
            KnownHeader::WwwAuthenticate => "WWW-Authenticate",
        }
    }
}

impl AsRef<str> for KnownHeader {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for KnownHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names() {
        assert_eq!(KnownHeader::AcceptRanges.as_str(), "Accept-Ranges");
        assert_eq!(KnownHeader::CacheControl.as_str(), "Cache-Control");
        assert_eq!(KnownHeader::ContentMd5.as_str(), "Content-MD5");
        assert_eq!(KnownHeader::ETag.as_str(), "ETag");
        assert_eq!(KnownHeader::WwwAuthenticate.as_str(), "WWW-Authenticate");
    }

    #[test]
    fn test_as_ref_matches_as_str() {
        let header = KnownHeader::ContentLanguage;
        let name: &str = header.as_ref();
        assert_eq!(name, header.as_str());
    }

    #[test]
    fn test_display_is_canonical_name() {
        assert_eq!(KnownHeader::TransferEncoding.to_string(), "Transfer-Encoding");
    }
}
