// crates/guardrail-core/src/uri.rs
// ============================================================================
// Module: URI Guards
// Description: Absolute/relative classification and scheme checks for URIs.
// Purpose: Validate URI arguments before they reach network or storage code.
// Dependencies: crate::{error, throw}, url
// ============================================================================

//! ## Overview
//! A string is classified as a [`UriReference`]: absolute when it parses as a
//! URL with a scheme, relative when it only resolves against a base. Strings
//! that are neither fail with `InvalidUri`. Scheme checks operate on parsed
//! [`Url`] values and compare schemes case-insensitively.

// ============================================================================
// SECTION: Imports
// ============================================================================

use url::ParseError;
use url::Url;

use crate::error::GuardResult;
use crate::throw;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Base used only to validate relative references.
const RELATIVE_BASE: &str = "http://relative.invalid/";
/// Scheme accepted by `must_be_https_url`.
const HTTPS: &str = "https";
/// Schemes accepted by `must_be_http_or_https_url`.
const HTTP_OR_HTTPS: &[&str] = &["http", "https"];

// ============================================================================
// SECTION: URI References
// ============================================================================

/// A parsed URI reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriReference {
    /// URI with a scheme.
    Absolute(Url),
    /// URI that needs a base to resolve.
    Relative(String),
}

impl UriReference {
    /// Parses `value` as an absolute or relative URI reference.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUri` when `value` is neither.
    pub fn parse(value: &str, parameter: &str) -> GuardResult<Self> {
        match Url::parse(value) {
            Ok(url) => Ok(Self::Absolute(url)),
            Err(ParseError::RelativeUrlWithoutBase) => {
                let base = Url::parse(RELATIVE_BASE)
                    .map_err(|err| throw::invalid_uri(value, &err.to_string(), parameter))?;
                base.join(value)
                    .map(|_| Self::Relative(value.to_string()))
                    .map_err(|err| throw::invalid_uri(value, &err.to_string(), parameter))
            }
            Err(err) => Err(throw::invalid_uri(value, &err.to_string(), parameter)),
        }
    }

    /// Returns true for absolute references.
    #[must_use]
    pub const fn is_absolute(&self) -> bool {
        matches!(self, Self::Absolute(_))
    }

    /// Classifies without reporting: `Some(true)` absolute, `Some(false)`
    /// relative, `None` malformed.
    fn classify(value: &str) -> Option<bool> {
        match Url::parse(value) {
            Ok(_) => Some(true),
            Err(ParseError::RelativeUrlWithoutBase) => {
                let base = Url::parse(RELATIVE_BASE).ok()?;
                base.join(value).ok().map(|_| false)
            }
            Err(_) => None,
        }
    }
}

// ============================================================================
// SECTION: URI String Guards
// ============================================================================

/// Absolute/relative checks for URI strings.
pub trait UriStrGuards {
    /// Returns the checked string; backs the provided methods.
    #[doc(hidden)]
    fn as_uri_str(&self) -> &str;

    /// Returns true when the string is an absolute URI.
    fn is_absolute_uri(&self) -> bool {
        Url::parse(self.as_uri_str()).is_ok()
    }

    /// Returns true when the string is a relative URI reference.
    fn is_relative_uri(&self) -> bool {
        matches!(UriReference::classify(self.as_uri_str()), Some(false))
    }

    /// Parses the string as an absolute URI.
    ///
    /// # Errors
    ///
    /// Returns `RelativeUri` for relative references and `InvalidUri` for
    /// malformed input.
    fn must_be_absolute_uri(&self, parameter: &str) -> GuardResult<Url> {
        let value = self.as_uri_str();
        match UriReference::parse(value, parameter)? {
            UriReference::Absolute(url) => Ok(url),
            UriReference::Relative(_) => Err(throw::relative_uri(value, parameter)),
        }
    }

    /// Returns the string when it is a relative URI reference.
    ///
    /// # Errors
    ///
    /// Returns `AbsoluteUri` for absolute URIs and `InvalidUri` for malformed
    /// input.
    fn must_be_relative_uri(&self, parameter: &str) -> GuardResult<&str> {
        let value = self.as_uri_str();
        match UriReference::parse(value, parameter)? {
            UriReference::Relative(_) => Ok(value),
            UriReference::Absolute(_) => Err(throw::absolute_uri(value, parameter)),
        }
    }
}

impl UriStrGuards for str {
    fn as_uri_str(&self) -> &str {
        self
    }
}

// ============================================================================
// SECTION: Scheme Guards
// ============================================================================

/// Scheme checks for parsed URLs.
pub trait UriSchemeGuards {
    /// Returns the checked URL; backs the provided methods.
    #[doc(hidden)]
    fn as_url(&self) -> &Url;

    /// Returns true when the URL uses `scheme` (case-insensitive).
    fn has_scheme(&self, scheme: &str) -> bool {
        self.as_url().scheme().eq_ignore_ascii_case(scheme)
    }

    /// Returns true when the URL uses one of `schemes`.
    fn has_one_scheme_of(&self, schemes: &[&str]) -> bool {
        schemes.iter().any(|scheme| self.has_scheme(scheme))
    }

    /// Returns the URL when it uses `scheme`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUriScheme` otherwise.
    fn must_have_scheme(&self, scheme: &str, parameter: &str) -> GuardResult<&Url> {
        self.must_have_one_scheme_of(&[scheme], parameter)
    }

    /// Returns the URL when it uses `https`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUriScheme` otherwise.
    fn must_be_https_url(&self, parameter: &str) -> GuardResult<&Url> {
        self.must_have_one_scheme_of(&[HTTPS], parameter)
    }

    /// Returns the URL when it uses `http` or `https`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUriScheme` otherwise.
    fn must_be_http_or_https_url(&self, parameter: &str) -> GuardResult<&Url> {
        self.must_have_one_scheme_of(HTTP_OR_HTTPS, parameter)
    }

    /// Returns the URL when it uses one of `schemes`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUriScheme` otherwise.
    fn must_have_one_scheme_of(&self, schemes: &[&str], parameter: &str) -> GuardResult<&Url> {
        let url = self.as_url();
        if self.has_one_scheme_of(schemes) {
            Ok(url)
        } else {
            Err(throw::invalid_uri_scheme(url.as_str(), schemes, parameter))
        }
    }
}

impl UriSchemeGuards for Url {
    fn as_url(&self) -> &Url {
        self
    }
}
