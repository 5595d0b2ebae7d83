use std::mem;
use std::str::FromStr;

use http::header::HeaderName;
use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;
use http::Uri;

use crate::Error;
use crate::Result;

/// Signing context for request.
///
/// Built from `http::request::Parts`, mutated by the signing pipeline and
/// applied back once signing is done. The query string is kept as sent by
/// the caller: `query` is a parsed view used for canonicalization only.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Option<Scheme>,
    /// HTTP authority.
    pub authority: Option<Authority>,
    /// HTTP path.
    pub path: String,
    /// HTTP query parameters, percent decoded.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,

    raw_query: Option<String>,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        let uri = mem::take(&mut parts.uri).into_parts();
        let (path, raw_query) = match uri.path_and_query {
            Some(paq) => (paq.path().to_string(), paq.query().map(|v| v.to_string())),
            None => (String::new(), None),
        };

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: uri.scheme,
            authority: uri.authority,
            path,
            query: raw_query
                .as_deref()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),

            // Take the headers out of the request to avoid copy.
            // We will return it back when apply the context.
            headers: mem::take(&mut parts.headers),

            raw_query,
        })
    }

    /// Apply the signing context back to http::request::Parts.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        // Return headers back.
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;
        parts.uri = {
            let mut uri_parts = mem::take(&mut parts.uri).into_parts();
            uri_parts.scheme = self.scheme;
            uri_parts.authority = self.authority;
            uri_parts.path_and_query = {
                let paq = match self.raw_query {
                    None => self.path,
                    Some(q) => format!("{}?{}", self.path, q),
                };

                Some(PathAndQuery::from_str(&paq)?)
            };
            Uri::from_parts(uri_parts)?
        };

        Ok(())
    }

    /// Get the raw query string as sent by the caller.
    pub fn raw_query(&self) -> Option<&str> {
        self.raw_query.as_deref()
    }

    /// Get the host of this request.
    ///
    /// The `Host` header wins over the uri authority.
    pub fn host(&self) -> Result<String> {
        if let Some(v) = self.headers.get(http::header::HOST) {
            return Ok(v.to_str()?.to_string());
        }

        self.authority
            .as_ref()
            .map(|v| v.as_str().to_string())
            .ok_or_else(|| Error::request_invalid("request without host is invalid for signing"))
    }

    /// Get header value by name.
    ///
    /// Returns empty string if header not found.
    #[inline]
    pub fn header_get_or_default(&self, key: impl http::header::AsHeaderName) -> Result<&str> {
        match self.headers.get(key) {
            Some(v) => Ok(v.to_str()?),
            None => Ok(""),
        }
    }

    /// Insert header if it's absent or empty.
    ///
    /// Returns `true` if the header has been inserted.
    pub fn header_insert_if_absent(&mut self, key: HeaderName, value: HeaderValue) -> bool {
        match self.headers.get(&key) {
            Some(v) if !v.is_empty() => false,
            _ => {
                self.headers.insert(key, value);
                true
            }
        }
    }

    /// Get all values of a header joined by `,` and normalized.
    pub fn header_value_joined(&self, key: &HeaderName) -> Result<String> {
        let mut values = Vec::new();
        for v in self.headers.get_all(key) {
            values.push(Self::header_value_normalize(v.to_str()?));
        }

        Ok(values.join(","))
    }

    /// Normalize header value.
    ///
    /// Leading and trailing whitespace is trimmed and inner whitespace runs
    /// collapse into a single space.
    pub fn header_value_normalize(v: &str) -> String {
        v.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Get header names with given filter as sorted vector.
    pub fn header_name_to_vec_sorted(&self, filter: impl Fn(&str) -> bool) -> Vec<&HeaderName> {
        let mut h = self
            .headers
            .keys()
            .filter(|k| filter(k.as_str()))
            .collect::<Vec<_>>();
        h.sort_unstable_by(|a, b| a.as_str().cmp(b.as_str()));

        h
    }

    /// Convert sorted pairs to string.
    ///
    /// ```shell
    /// [(a, b), (c, d)] => "a=b&c=d"
    /// ```
    pub fn pairs_to_string(mut pairs: Vec<(String, String)>, sep: &str, join: &str) -> String {
        let mut s = String::with_capacity(16);

        pairs.sort();

        for (idx, (k, v)) in pairs.into_iter().enumerate() {
            if idx != 0 {
                s.push_str(join);
            }

            s.push_str(&k);
            s.push_str(sep);
            s.push_str(&v);
        }

        s
    }
}
