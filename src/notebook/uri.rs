// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Document locators and minting of interactive window identifiers

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::InteractiveError;

/// Scheme of the cell-history document of an interactive window
pub const INTERACTIVE_SCHEME: &str = "interactive";

/// Scheme of the input pane of an interactive window
pub const INTERACTIVE_INPUT_SCHEME: &str = "interactive-input";

const INTERACTIVE_PREFIX: &str = "/Interactive-";
const INTERACTIVE_EXTENSION: &str = ".interactive";
const INPUT_PREFIX: &str = "/InteractiveInput-";

/// Locator of a document, rendered as `scheme:path`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentUri {
    scheme: String,
    path: String,
}

impl DocumentUri {
    /// Create a locator from its parts
    pub fn new(scheme: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            path: path.into(),
        }
    }

    /// Locator of the `n`-th interactive document
    pub fn interactive(n: u32) -> Self {
        Self::new(
            INTERACTIVE_SCHEME,
            format!("{}{}{}", INTERACTIVE_PREFIX, n, INTERACTIVE_EXTENSION),
        )
    }

    /// Locator of the `n`-th interactive input pane
    pub fn interactive_input(n: u32) -> Self {
        Self::new(INTERACTIVE_INPUT_SCHEME, format!("{}{}", INPUT_PREFIX, n))
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Numeric suffix of a minted interactive locator, if this is one
    pub fn suffix(&self) -> Option<u32> {
        let digits = match self.scheme.as_str() {
            INTERACTIVE_SCHEME => self
                .path
                .strip_prefix(INTERACTIVE_PREFIX)?
                .strip_suffix(INTERACTIVE_EXTENSION)?,
            INTERACTIVE_INPUT_SCHEME => self.path.strip_prefix(INPUT_PREFIX)?,
            _ => return None,
        };
        digits.parse().ok()
    }
}

impl fmt::Display for DocumentUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scheme, self.path)
    }
}

impl FromStr for DocumentUri {
    type Err = InteractiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((scheme, path)) if !scheme.is_empty() && !path.is_empty() => {
                Ok(Self::new(scheme, path))
            }
            _ => Err(InteractiveError::InvalidInput(format!(
                "Not a document locator: {}",
                s
            ))),
        }
    }
}

impl TryFrom<String> for DocumentUri {
    type Error = InteractiveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DocumentUri> for String {
    fn from(uri: DocumentUri) -> Self {
        uri.to_string()
    }
}

/// Mint the locator pair for a new interactive window.
///
/// The suffix is the smallest positive integer not used by any of `open`.
pub fn mint_pair<'a>(
    open: impl IntoIterator<Item = &'a DocumentUri>,
) -> (DocumentUri, DocumentUri) {
    let used: HashSet<u32> = open.into_iter().filter_map(DocumentUri::suffix).collect();
    let n = (1..).find(|n| !used.contains(n)).unwrap_or(1);
    (DocumentUri::interactive(n), DocumentUri::interactive_input(n))
}
