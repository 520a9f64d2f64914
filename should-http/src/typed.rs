//! Typed values for well-known headers.
//!
//! The `have_header_for_*` checks compare a parsed header against one of
//! these value types instead of a raw string. `Location` values reuse
//! [`http::Uri`] rather than a new type.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// A well-known header value that could not be parsed from its wire form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderValueParseError {
    header: &'static str,
    value: String,
}

impl HeaderValueParseError {
    fn new(header: &'static str, value: &str) -> Self {
        Self {
            header,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for HeaderValueParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} header value \"{}\"", self.header, self.value)
    }
}

impl std::error::Error for HeaderValueParseError {}

/// An HTTP entity tag (`ETag`), strong or weak.
///
/// # Examples
///
/// ```
/// use should_http::typed::EntityTag;
///
/// assert_eq!(EntityTag::strong("v1").to_string(), "\"v1\"");
/// assert_eq!(EntityTag::weak("v1").to_string(), "W/\"v1\"");
/// assert_eq!("\"v1\"".parse::<EntityTag>().unwrap(), EntityTag::strong("v1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityTag {
    weak: bool,
    tag: String,
}

impl EntityTag {
    /// A strong entity tag with the given opaque value.
    pub fn strong(tag: impl Into<String>) -> Self {
        Self {
            weak: false,
            tag: tag.into(),
        }
    }

    /// A weak entity tag (`W/"…"`).
    pub fn weak(tag: impl Into<String>) -> Self {
        Self {
            weak: true,
            tag: tag.into(),
        }
    }

    /// Whether this is a weak tag.
    pub fn is_weak(&self) -> bool {
        self.weak
    }

    /// The opaque tag without quotes.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for EntityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.weak {
            write!(f, "W/\"{}\"", self.tag)
        } else {
            write!(f, "\"{}\"", self.tag)
        }
    }
}

impl FromStr for EntityTag {
    type Err = HeaderValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (weak, rest) = match trimmed.strip_prefix("W/") {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let tag = rest
            .strip_prefix('"')
            .and_then(|quoted| quoted.strip_suffix('"'))
            .ok_or_else(|| HeaderValueParseError::new("ETag", s))?;

        Ok(Self {
            weak,
            tag: tag.to_string(),
        })
    }
}

/// A parsed `Cache-Control` header value.
///
/// Covers the common response directives; unrecognized directives are
/// preserved verbatim in `extensions`. Builder methods mirror the fields:
///
/// ```
/// use std::time::Duration;
/// use should_http::typed::CacheControl;
///
/// let value = CacheControl::new().public().max_age(Duration::from_secs(60));
/// assert_eq!(value.to_string(), "public, max-age=60");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheControl {
    pub public: bool,
    pub private: bool,
    pub no_cache: bool,
    pub no_store: bool,
    pub no_transform: bool,
    pub must_revalidate: bool,
    pub proxy_revalidate: bool,
    pub max_age: Option<Duration>,
    pub s_max_age: Option<Duration>,
    /// Unrecognized directives, kept as written.
    pub extensions: Vec<String>,
}

impl CacheControl {
    /// Creates an empty value; combine with the builder methods below.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `public` directive.
    pub fn public(mut self) -> Self {
        self.public = true;
        self
    }

    /// Sets the `private` directive.
    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }

    /// Sets the `no-cache` directive.
    pub fn no_cache(mut self) -> Self {
        self.no_cache = true;
        self
    }

    /// Sets the `no-store` directive.
    pub fn no_store(mut self) -> Self {
        self.no_store = true;
        self
    }

    /// Sets the `no-transform` directive.
    pub fn no_transform(mut self) -> Self {
        self.no_transform = true;
        self
    }

    /// Sets the `must-revalidate` directive.
    pub fn must_revalidate(mut self) -> Self {
        self.must_revalidate = true;
        self
    }

    /// Sets the `proxy-revalidate` directive.
    pub fn proxy_revalidate(mut self) -> Self {
        self.proxy_revalidate = true;
        self
    }

    /// Sets the `max-age` directive.
    pub fn max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }

    /// Sets the `s-maxage` directive.
    pub fn s_max_age(mut self, s_max_age: Duration) -> Self {
        self.s_max_age = Some(s_max_age);
        self
    }
}

impl fmt::Display for CacheControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut directives: Vec<String> = Vec::new();
        if self.public {
            directives.push("public".to_string());
        }
        if self.private {
            directives.push("private".to_string());
        }
        if self.no_cache {
            directives.push("no-cache".to_string());
        }
        if self.no_store {
            directives.push("no-store".to_string());
        }
        if self.no_transform {
            directives.push("no-transform".to_string());
        }
        if self.must_revalidate {
            directives.push("must-revalidate".to_string());
        }
        if self.proxy_revalidate {
            directives.push("proxy-revalidate".to_string());
        }
        if let Some(max_age) = self.max_age {
            directives.push(format!("max-age={}", max_age.as_secs()));
        }
        if let Some(s_max_age) = self.s_max_age {
            directives.push(format!("s-maxage={}", s_max_age.as_secs()));
        }
        directives.extend(self.extensions.iter().cloned());

        f.write_str(&directives.join(", "))
    }
}

impl FromStr for CacheControl {
    type Err = HeaderValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut value = CacheControl::new();

        for directive in s.split(',') {
            let directive = directive.trim();
            if directive.is_empty() {
                continue;
            }
            match directive.to_ascii_lowercase().as_str() {
                "public" => value.public = true,
                "private" => value.private = true,
                "no-cache" => value.no_cache = true,
                "no-store" => value.no_store = true,
                "no-transform" => value.no_transform = true,
                "must-revalidate" => value.must_revalidate = true,
                "proxy-revalidate" => value.proxy_revalidate = true,
                lowered => {
                    if let Some(seconds) = lowered.strip_prefix("max-age=") {
                        let seconds: u64 = seconds
                            .parse()
                            .map_err(|_| HeaderValueParseError::new("Cache-Control", s))?;
                        value.max_age = Some(Duration::from_secs(seconds));
                    } else if let Some(seconds) = lowered.strip_prefix("s-maxage=") {
                        let seconds: u64 = seconds
                            .parse()
                            .map_err(|_| HeaderValueParseError::new("Cache-Control", s))?;
                        value.s_max_age = Some(Duration::from_secs(seconds));
                    } else {
                        value.extensions.push(directive.to_string());
                    }
                }
            }
        }

        Ok(value)
    }
}

/// A single `Pragma` directive, `name` or `name=value`.
///
/// Directive names are normalized to lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PragmaDirective {
    name: String,
    value: Option<String>,
}

impl PragmaDirective {
    /// A bare directive such as `no-cache`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            value: None,
        }
    }

    /// A `name=value` directive.
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            value: Some(value.into()),
        }
    }

    /// The directive name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The directive value, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl fmt::Display for PragmaDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.name, value),
            None => f.write_str(&self.name),
        }
    }
}

impl FromStr for PragmaDirective {
    type Err = HeaderValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(HeaderValueParseError::new("Pragma", s));
        }
        match trimmed.split_once('=') {
            Some((name, value)) => Ok(Self::with_value(name.trim(), value.trim())),
            None => Ok(Self::new(trimmed)),
        }
    }
}

/// A single transfer coding token (`chunked`, `gzip`, …), normalized to
/// lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCoding(String);

impl TransferCoding {
    /// A coding with the given token.
    pub fn new(coding: impl Into<String>) -> Self {
        Self(coding.into().to_ascii_lowercase())
    }

    /// The `chunked` coding.
    pub fn chunked() -> Self {
        Self::new("chunked")
    }

    /// The coding token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransferCoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TransferCoding {
    type Err = HeaderValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.contains(' ') {
            return Err(HeaderValueParseError::new("Transfer-Encoding", s));
        }
        Ok(Self::new(trimmed))
    }
}
