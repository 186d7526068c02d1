// crates/shared-kernel/src/value_objects/byte_size.rs
use std::fmt;

use serde::{Deserialize, Serialize};

const KIB: u64 = 1024;

/// Size of a text payload in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct ByteSize(u64);

impl ByteSize {
    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn kib(value: u64) -> Self {
        Self(value * KIB)
    }

    #[inline]
    pub const fn mib(value: u64) -> Self {
        Self(value * KIB * KIB)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Byte length of a UTF-8 string.
    #[inline]
    pub fn of_str(text: &str) -> Self {
        Self(text.len() as u64)
    }

    /// Returns a base-2 human readable representation (KiB, MiB, GiB, TiB).
    pub fn to_human(self) -> String {
        const UNIT: f64 = 1024.0;
        let bytes = self.bytes();
        if bytes < KIB {
            return format!("{bytes} B");
        }

        let kib = bytes as f64 / UNIT;
        if kib < UNIT {
            return format!("{kib:.1} KiB");
        }

        let mib = kib / UNIT;
        if mib < UNIT {
            return format!("{mib:.1} MiB");
        }

        let gib = mib / UNIT;
        if gib < UNIT {
            return format!("{gib:.1} GiB");
        }

        let tib = gib / UNIT;
        format!("{tib:.1} TiB")
    }
}

impl From<u64> for ByteSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl From<ByteSize> for u64 {
    fn from(size: ByteSize) -> Self {
        size.bytes()
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.to_human())
        } else {
            write!(f, "{}", self.0)
        }
    }
}
