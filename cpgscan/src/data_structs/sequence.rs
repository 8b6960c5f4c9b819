use std::fmt::Display;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};

use super::typedef::{
    PosType,
    NUCLEOTIDES,
};
use crate::error::{
    Result,
    ScanError,
};

/// Validated nucleotide sequence.
///
/// Holds an uppercase string over `{A, C, G, T}`. Lowercase input is
/// normalized on construction; any other character is rejected, as is an
/// empty input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sequence {
    inner: String,
}

impl Sequence {
    /// Validates and normalizes `seq`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidArgument`] if `seq` is empty or contains a
    /// character other than `A`, `C`, `G`, `T` (in either case).
    pub fn try_new(seq: impl AsRef<str>) -> Result<Self> {
        let seq = seq.as_ref();
        if seq.is_empty() {
            return Err(ScanError::invalid_argument(
                "sequence",
                "sequence must not be empty",
            ));
        }

        let mut inner = String::with_capacity(seq.len());
        for (pos, ch) in seq.chars().enumerate() {
            let upper = ch.to_ascii_uppercase();
            if !upper.is_ascii() || !NUCLEOTIDES.contains(&(upper as u8)) {
                return Err(ScanError::invalid_argument(
                    "sequence",
                    format!("unexpected character '{ch}' at position {pos}"),
                ));
            }
            inner.push(upper);
        }
        Ok(Self { inner })
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    pub fn len(&self) -> PosType {
        self.inner.len()
    }

    /// Always false for a constructed sequence.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.inner
    }
}

impl FromStr for Sequence {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_new(s)
    }
}

impl TryFrom<String> for Sequence {
    type Error = ScanError;

    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Sequence> for String {
    fn from(value: Sequence) -> Self {
        value.inner
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Display for Sequence {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}
