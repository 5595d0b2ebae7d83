use std::fmt::Debug;
use std::fmt::Formatter;
use std::io::Read;

use bytes::Buf;
use bytes::Bytes;
use log::debug;

use crate::Error;
use crate::Result;

/// Body of a request that is going to be signed.
///
/// Signing needs the raw bytes of the body while the transport still has to
/// send them later. A streaming body can only be read once, so
/// [`Body::replay`] drains it into memory and keeps a buffered copy in place
/// of the stream.
#[derive(Default)]
pub struct Body {
    inner: Inner,
}

#[derive(Default)]
enum Inner {
    #[default]
    Empty,
    Bytes(Bytes),
    Reader(Box<dyn Read + Send + Sync>),
}

impl Body {
    /// Create an empty body.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a body from a single-read stream.
    pub fn from_reader(r: impl Read + Send + Sync + 'static) -> Self {
        Self {
            inner: Inner::Reader(Box::new(r)),
        }
    }

    /// Returns `true` if the body has been buffered or was created from
    /// bytes.
    pub fn is_buffered(&self) -> bool {
        !matches!(self.inner, Inner::Reader(_))
    }

    /// Read the whole body and return its bytes.
    ///
    /// A streaming body is replaced by a buffered copy, so calling this again
    /// returns the same bytes and the body can still be read by the
    /// transport. An empty body yields empty bytes.
    pub fn replay(&mut self) -> Result<Bytes> {
        match &mut self.inner {
            Inner::Empty => Ok(Bytes::new()),
            Inner::Bytes(bs) => Ok(bs.clone()),
            Inner::Reader(r) => {
                let mut buf = Vec::new();
                r.read_to_end(&mut buf).map_err(|e| {
                    Error::body_unreadable("failed to read request body").with_source(e)
                })?;
                debug!("buffered request body of {} bytes", buf.len());

                let bs = Bytes::from(buf);
                self.inner = Inner::Bytes(bs.clone());
                Ok(bs)
            }
        }
    }

    /// Consume the body into its bytes, draining a stream if needed.
    pub fn into_bytes(mut self) -> Result<Bytes> {
        self.replay()
    }
}

impl Read for Body {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match &mut self.inner {
            Inner::Empty => Ok(0),
            Inner::Bytes(bs) => {
                let n = bs.remaining().min(buf.len());
                bs.copy_to_slice(&mut buf[..n]);
                if !bs.has_remaining() {
                    self.inner = Inner::Empty;
                }
                Ok(n)
            }
            Inner::Reader(r) => r.read(buf),
        }
    }
}

impl Debug for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            Inner::Empty => f.write_str("Body::Empty"),
            Inner::Bytes(bs) => write!(f, "Body::Bytes({} bytes)", bs.len()),
            Inner::Reader(_) => f.write_str("Body::Reader"),
        }
    }
}

impl From<Bytes> for Body {
    fn from(bs: Bytes) -> Self {
        Self {
            inner: Inner::Bytes(bs),
        }
    }
}

impl From<Vec<u8>> for Body {
    fn from(v: Vec<u8>) -> Self {
        Bytes::from(v).into()
    }
}

impl From<String> for Body {
    fn from(s: String) -> Self {
        Bytes::from(s).into()
    }
}

impl From<&'static str> for Body {
    fn from(s: &'static str) -> Self {
        Bytes::from_static(s.as_bytes()).into()
    }
}

impl From<&'static [u8]> for Body {
    fn from(s: &'static [u8]) -> Self {
        Bytes::from_static(s).into()
    }
}

impl From<()> for Body {
    fn from(_: ()) -> Self {
        Self::empty()
    }
}
