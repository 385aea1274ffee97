//! Mnemonic lookup
//!
//! Curve names in LAS files are free text. A lookup resolves a raw curve name
//! to a standard mnemonic. It only annotates curves and never changes how a
//! file is parsed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Resolve a raw curve name to a standard mnemonic
pub trait MnemonicLookup: std::fmt::Debug + Send + Sync {
    /// Standard mnemonic for `name`, empty when unknown
    fn mnemonic(&self, name: &str) -> String;
}

/// In-memory mnemonic table with a vocabulary fallback
///
/// `mnemonics` holds the standard mnemonics themselves, `vocabulary` maps
/// alternative spellings to a standard mnemonic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MnemonicDictionary {
    pub mnemonics: HashMap<String, String>,
    pub vocabulary: HashMap<String, String>,
}

impl MnemonicDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a standard mnemonic with its description
    pub fn with_mnemonic(
        mut self,
        mnemonic: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.mnemonics.insert(mnemonic.into(), description.into());
        self
    }

    /// Map an alternative curve name to a standard mnemonic
    pub fn with_alias(mut self, name: impl Into<String>, mnemonic: impl Into<String>) -> Self {
        self.vocabulary.insert(name.into(), mnemonic.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.mnemonics.is_empty() && self.vocabulary.is_empty()
    }
}

impl MnemonicLookup for MnemonicDictionary {
    fn mnemonic(&self, name: &str) -> String {
        if self.mnemonics.contains_key(name) {
            return name.to_string();
        }
        self.vocabulary.get(name).cloned().unwrap_or_default()
    }
}
