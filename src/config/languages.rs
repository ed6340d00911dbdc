// src/config/languages.rs
//! Language table + lexicon configuration (TOML).
//!
//! Shape:
//! ```toml
//! baseline = "en"
//!
//! [[language]]
//! code = "te"
//! name = "Telugu (Type in English)"
//! positive = ["bagundi", "chala bagundi"]
//! negative = ["chetha"]
//! ```
//!
//! Lookup order in [`LanguageConfig::load`]:
//! 1) `$LANGUAGE_CONFIG_PATH` (must exist)
//! 2) `config/languages.toml` relative to the working dir
//! 3) the copy embedded at build time

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::language::{LanguageEntry, LanguageResolver};
use crate::lexicon::{Lexicon, LexiconStore};

pub const DEFAULT_LANGUAGE_CONFIG_PATH: &str = "config/languages.toml";
pub const ENV_LANGUAGE_CONFIG_PATH: &str = "LANGUAGE_CONFIG_PATH";

const BUILTIN_LANGUAGES: &str = include_str!("../../config/languages.toml");

/// Parsed and validated language configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageConfig {
    /// Code used when a request names no language; its display name is the
    /// fallback for unknown codes.
    pub baseline: String,
    #[serde(rename = "language", default)]
    pub languages: Vec<LanguageDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageDef {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub positive: Option<Vec<String>>,
    #[serde(default)]
    pub negative: Option<Vec<String>>,
}

impl LanguageDef {
    /// A language has a custom lexicon iff it declares either term list.
    pub fn lexicon(&self) -> Option<Lexicon> {
        if self.positive.is_none() && self.negative.is_none() {
            return None;
        }
        Some(Lexicon::new(
            self.positive.clone().unwrap_or_default(),
            self.negative.clone().unwrap_or_default(),
        ))
    }
}

impl LanguageConfig {
    /// Resolve the config source (env -> file -> embedded) and parse it.
    pub fn load() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_LANGUAGE_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                bail!(
                    "{} points to non-existent path {}",
                    ENV_LANGUAGE_CONFIG_PATH,
                    pb.display()
                );
            }
            return Self::from_path(&pb);
        }

        let local = PathBuf::from(DEFAULT_LANGUAGE_CONFIG_PATH);
        if local.exists() {
            return Self::from_path(&local);
        }

        let cfg = Self::builtin()?;
        info!(
            source = "embedded",
            languages = cfg.languages.len(),
            "language config loaded"
        );
        Ok(cfg)
    }

    /// Load from an explicit TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading language config from {}", path.display()))?;
        let cfg = Self::from_toml_str(&content)
            .with_context(|| format!("parsing language config {}", path.display()))?;
        info!(
            source = %path.display(),
            languages = cfg.languages.len(),
            "language config loaded"
        );
        Ok(cfg)
    }

    /// The configuration compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_LANGUAGES).context("embedded language config")
    }

    /// Parse + validate a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let mut cfg: LanguageConfig = toml::from_str(s)?;
        cfg.sanitize();
        cfg.validate()?;
        Ok(cfg)
    }

    /// Trim codes/names; terms keep their stored spelling apart from
    /// surrounding whitespace.
    fn sanitize(&mut self) {
        self.baseline = self.baseline.trim().to_string();
        for lang in &mut self.languages {
            lang.code = lang.code.trim().to_string();
            lang.name = lang.name.trim().to_string();
            for list in [&mut lang.positive, &mut lang.negative].into_iter().flatten() {
                for term in list.iter_mut() {
                    *term = term.trim().to_string();
                }
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            bail!("language config declares no languages");
        }

        let mut seen = HashSet::new();
        for lang in &self.languages {
            if lang.code.is_empty() {
                bail!("language entry with empty code (name `{}`)", lang.name);
            }
            if lang.name.is_empty() {
                bail!("language `{}` has an empty display name", lang.code);
            }
            if !seen.insert(lang.code.as_str()) {
                bail!("duplicate language code `{}`", lang.code);
            }
            let lists = [("positive", &lang.positive), ("negative", &lang.negative)];
            for (kind, list) in lists {
                if let Some(terms) = list {
                    if let Some(i) = terms.iter().position(|t| t.is_empty()) {
                        bail!("language `{}`: empty {kind} term at index {i}", lang.code);
                    }
                }
            }
        }

        if !seen.contains(self.baseline.as_str()) {
            return Err(anyhow!(
                "baseline language `{}` is not in the language table",
                self.baseline
            ));
        }
        Ok(())
    }

    /// Build the immutable resolver (display table + lexicon store).
    pub fn into_resolver(self) -> LanguageResolver {
        let lexicons: HashMap<String, Lexicon> = self
            .languages
            .iter()
            .filter_map(|l| l.lexicon().map(|lex| (l.code.clone(), lex)))
            .collect();
        let entries = self
            .languages
            .into_iter()
            .map(|l| LanguageEntry::new(l.code, l.name))
            .collect();
        LanguageResolver::new(entries, &self.baseline, LexiconStore::new(lexicons))
    }
}
