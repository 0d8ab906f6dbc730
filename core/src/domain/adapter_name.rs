//! Adapter name domain model.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Width of one device-name record, NUL terminator included.
///
/// Matches `UMAD_CA_NAME_LEN` from libibumad.
pub const CA_NAME_LEN: usize = 20;

/// Longest adapter name that fits in a record.
pub const MAX_NAME_LEN: usize = CA_NAME_LEN - 1;

/// Logical name of one host channel adapter (e.g. `mlx5_0`).
///
/// The name is opaque: it is never parsed, only carried and printed.
/// Construction guarantees it is non-empty, free of NUL bytes and at most
/// [`MAX_NAME_LEN`] bytes long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AdapterName(heapless::String<MAX_NAME_LEN>);

impl AdapterName {
    /// Create an adapter name from a string.
    pub fn new(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::InvalidName("name is empty".to_string()));
        }
        if name.contains('\0') {
            return Err(Error::InvalidName(format!("{:?} contains a NUL byte", name)));
        }

        let mut inner = heapless::String::new();
        inner.push_str(name).map_err(|_| {
            Error::InvalidName(format!(
                "{:?} is {} bytes, at most {} fit",
                name,
                name.len(),
                MAX_NAME_LEN
            ))
        })?;

        Ok(Self(inner))
    }

    /// Decode a fixed-width, NUL-padded record as filled in by
    /// `umad_get_cas_names`.
    ///
    /// Bytes after the first NUL are ignored. A record without a terminator
    /// keeps its first [`MAX_NAME_LEN`] bytes, minus any character the cut
    /// split in half. Invalid UTF-8 is replaced rather than rejected, since
    /// the bytes are only ever printed. Only an empty record is an error.
    pub fn from_record(record: &[u8; CA_NAME_LEN]) -> Result<Self> {
        let len = record
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(CA_NAME_LEN)
            .min(MAX_NAME_LEN);

        let mut bytes = &record[..len];
        if let Err(e) = std::str::from_utf8(bytes) {
            if e.error_len().is_none() {
                bytes = &bytes[..e.valid_up_to()];
            }
        }

        let mut inner = heapless::String::new();
        for c in String::from_utf8_lossy(bytes).chars() {
            if inner.push(c).is_err() {
                break;
            }
        }

        if inner.is_empty() {
            return Err(Error::InvalidName("record is empty".to_string()));
        }
        Ok(Self(inner))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for AdapterName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AdapterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
