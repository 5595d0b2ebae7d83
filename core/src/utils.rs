//! Helpers to keep secrets out of logs.

use std::fmt;

/// Secret wrapper whose `Debug` and `Display` only show the edges of the value.
///
/// Values shorter than 12 bytes are hidden completely, longer ones keep
/// their first and last three characters so different keys can still be
/// told apart in logs.
#[derive(Clone, Copy)]
pub struct Redact<'a>(&'a str);

impl<'a> Redact<'a> {
    const EDGE: usize = 3;
    const MIN_VISIBLE_LEN: usize = 12;

    fn edges(&self) -> Option<(&'a str, &'a str)> {
        let s = self.0;
        if s.len() < Self::MIN_VISIBLE_LEN {
            return None;
        }

        let tail = s.len() - Self::EDGE;
        if !s.is_char_boundary(Self::EDGE) || !s.is_char_boundary(tail) {
            return None;
        }
        Some((&s[..Self::EDGE], &s[tail..]))
    }
}

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value)
    }
}

impl<'a> From<Option<&'a str>> for Redact<'a> {
    fn from(value: Option<&'a str>) -> Self {
        Redact(value.unwrap_or_default())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact::from(value.as_deref())
    }
}

impl fmt::Display for Redact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("EMPTY");
        }

        match self.edges() {
            Some((head, tail)) => write!(f, "{head}***{tail}"),
            None => f.write_str("***"),
        }
    }
}

impl fmt::Debug for Redact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
