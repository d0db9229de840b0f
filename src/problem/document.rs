//! Problem documents.
//!
//! A problem is stored as a JSON object holding the share counts under
//! `keys` and one entry per share, keyed by the share index:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Several problems can be batched under a `test_cases` array. Share
//! entries keep the order in which they appear in the document, and a
//! repeated index yields one share per occurrence.

use std::{fmt, fs, path::Path};

use serde::{
    Deserialize, Deserializer,
    de::{DeserializeOwned, Error as _, MapAccess, Visitor},
};
use serde_json::Value;

use crate::error::LoadError;

/// Read a document from a JSON file.
pub trait Import: DeserializeOwned {
    fn import(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| LoadError::Io {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_slice(&data)
    }

    fn from_slice(data: &[u8]) -> Result<Self, LoadError> {
        Ok(serde_json::from_slice(data)?)
    }
}

/// One share exactly as written in a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareRecord {
    /// The share index, as text.
    pub index: String,
    /// The radix of `value`, as text.
    pub base: String,
    /// The encoded share value.
    pub value: String,
}

impl ShareRecord {
    pub fn new(index: impl Into<String>, base: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            base: base.into(),
            value: value.into(),
        }
    }
}

/// A single reconstruction problem before decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    /// Total number of shares.
    pub n: usize,
    /// Reconstruction threshold.
    pub k: usize,
    /// Shares in document order.
    pub shares: Vec<ShareRecord>,
}

impl Problem {
    pub fn new(n: usize, k: usize, shares: Vec<ShareRecord>) -> Self {
        Self { n, k, shares }
    }
}

#[derive(Deserialize)]
struct Keys {
    n: usize,
    k: usize,
}

#[derive(Deserialize)]
struct Entry {
    base: String,
    value: String,
}

impl Problem {
    /// Builds a problem from the members of its JSON object, in document
    /// order. Repeated share indices are kept.
    fn from_fields(fields: Vec<(String, Value)>) -> Result<Self, String> {
        let mut keys = None;
        let mut shares = Vec::with_capacity(fields.len().saturating_sub(1));

        for (name, entry) in fields {
            if name == "keys" {
                if keys.is_some() {
                    return Err("duplicate 'keys' section".to_string());
                }
                let Keys { n, k } = serde_json::from_value(entry)
                    .map_err(|e| format!("invalid 'keys' section: {e}"))?;
                keys = Some((n, k));
                continue;
            }

            let Entry { base, value } =
                serde_json::from_value(entry).map_err(|e| format!("share '{name}': {e}"))?;
            shares.push(ShareRecord {
                index: name,
                base,
                value,
            });
        }

        let (n, k) = keys.ok_or_else(|| "missing 'keys' section".to_string())?;

        Ok(Problem { n, k, shares })
    }
}

struct ProblemVisitor;

impl<'de> Visitor<'de> for ProblemVisitor {
    type Value = Problem;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a problem object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Problem, A::Error> {
        let mut fields = Vec::new();
        while let Some(field) = map.next_entry::<String, Value>()? {
            fields.push(field);
        }
        Problem::from_fields(fields).map_err(A::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Problem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ProblemVisitor)
    }
}

/// Every problem held by one document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemSet {
    problems: Vec<Problem>,
}

impl ProblemSet {
    pub fn new(problems: Vec<Problem>) -> Self {
        Self { problems }
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// Number of problems in the document.
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}

struct ProblemSetVisitor;

impl<'de> Visitor<'de> for ProblemSetVisitor {
    type Value = ProblemSet;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a problem object or a 'test_cases' batch")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ProblemSet, A::Error> {
        let mut fields = Vec::new();
        let mut cases = None;

        while let Some(name) = map.next_key::<String>()? {
            if name == "test_cases" {
                cases = Some(map.next_value::<Vec<Problem>>()?);
            } else {
                fields.push((name, map.next_value::<Value>()?));
            }
        }

        let problems = match cases {
            Some(cases) => cases,
            None => vec![Problem::from_fields(fields).map_err(A::Error::custom)?],
        };

        Ok(ProblemSet { problems })
    }
}

impl<'de> Deserialize<'de> for ProblemSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ProblemSetVisitor)
    }
}

impl Import for ProblemSet {}
