//! # JSON Resource Provider
//!
//! File: cli/src/common/rest/provider.rs
//!
//! ## Overview
//!
//! Controls how a managed `Resource` is marshalled into an HTTP response body.
//! The produced document always has the shape:
//!
//! ```json
//! {
//!   "description": "...",
//!   "children": [ { "name": "...", "description": "...", "link": { "rel": "...", "href": "...", "type": "...", "method": "..." } } ],
//!   "operations": [ { "operation-name": "...", "operation-description": "...", "link": { "href": "..." } } ]
//! }
//! ```
//!
//! `children` is always present, `operations` only when the resource carries an
//! operations list, and link attributes other than `href` only when set.
//!
//! ## Architecture
//!
//! - `MessageBodyWriter<T>`: the seam an HTTP layer uses to ask "can you write
//!   this, how long is it, write it here".
//! - `JsonResourceProvider`: the JSON implementation, available for every type
//!   that can be viewed as a `Resource` (`AsRef<Resource>`).
//! - `ResourceResponse`: adapts the provider to `axum`, so handlers can return
//!   a resource directly.
//!
use super::model::Resource;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use mime::Mime;
use std::io::{self, BufWriter, Write};
use thiserror::Error;
use tracing::error;

/// Content length reported when the size is not known before writing.
pub const UNKNOWN_LENGTH: i64 = -1;

/// Media type produced by `JsonResourceProvider`.
pub const PRODUCES: &str = "application/json";

/// Writes values of type `T` into a response body.
pub trait MessageBodyWriter<T: ?Sized> {
    /// Whether this writer can produce the requested media type.
    fn is_writeable(&self, media_type: &Mime) -> bool;

    /// Body length in bytes, or `UNKNOWN_LENGTH`.
    fn size(&self, value: &T) -> i64;

    /// Writes `value` to `out`. `out` is flushed before returning successfully
    /// and dropped on every path.
    fn write_to<W: Write>(&self, value: &T, out: W) -> io::Result<()>;
}

#[derive(Error, Debug)]
#[error("Exception writing json result.")]
struct JsonWriteError(#[source] serde_json::Error);

/// JSON marshalling of managed resources.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonResourceProvider;

impl<T: AsRef<Resource> + ?Sized> MessageBodyWriter<T> for JsonResourceProvider {
    fn is_writeable(&self, media_type: &Mime) -> bool {
        let type_ok = media_type.type_() == mime::APPLICATION || media_type.type_() == mime::STAR;
        let subtype_ok = media_type.subtype() == mime::JSON || media_type.subtype() == mime::STAR;
        type_ok && subtype_ok
    }

    fn size(&self, _value: &T) -> i64 {
        UNKNOWN_LENGTH
    }

    fn write_to<W: Write>(&self, value: &T, out: W) -> io::Result<()> {
        let mut writer = BufWriter::new(out);
        serde_json::to_writer(&mut writer, value.as_ref()).map_err(|e| {
            if e.is_io() {
                io::Error::from(e)
            } else {
                io::Error::other(JsonWriteError(e))
            }
        })?;
        writer.flush()
    }
}

impl JsonResourceProvider {
    /// Convenience wrapper producing the body as bytes.
    pub fn to_vec<T: AsRef<Resource> + ?Sized>(&self, value: &T) -> io::Result<Vec<u8>> {
        let mut body = Vec::new();
        self.write_to(value, &mut body)?;
        Ok(body)
    }
}

/// An `axum` response carrying a managed resource as `application/json`.
#[derive(Debug, Clone)]
pub struct ResourceResponse<T = Resource>(pub T);

impl<T: AsRef<Resource>> IntoResponse for ResourceResponse<T> {
    fn into_response(self) -> Response {
        match JsonResourceProvider.to_vec(&self.0) {
            Ok(body) => ([(header::CONTENT_TYPE, PRODUCES)], body).into_response(),
            Err(e) => {
                error!("Failed to write managed resource: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
        }
    }
}
