//! Method and variant registries used at pipeline-construction time.

use std::collections::BTreeMap;
use std::collections::HashMap;

use super::error::BuildError;
use crate::methods::{Accenter, BracketAdder, Expander, FakeBidi, HtmlPreserver, PigLatin};
use crate::model::Visitor;

/// A factory producing a fresh method instance from a merged option map.
pub type MethodFactory =
    Box<dyn Fn(&HashMap<String, String>) -> Result<Box<dyn Visitor>, BuildError> + Send + Sync>;

/// Name-to-factory registry of pseudolocalization methods.
///
/// The registry is consulted only while building pipelines; execution never
/// touches it. Hosts that register methods from several threads must wrap
/// the registry in their own synchronization, but sharing a finished
/// registry immutably needs none.
///
/// [`MethodRegistry::default`] registers the built-in methods: `accents`,
/// `brackets`, `expand`, `fakebidi`, `html`, and `piglatin`.
pub struct MethodRegistry {
    factories: BTreeMap<String, MethodFactory>,
}

impl MethodRegistry {
    /// A registry with no methods at all.
    pub fn empty() -> MethodRegistry {
        MethodRegistry {
            factories: BTreeMap::new(),
        }
    }

    /// Registers a factory under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&HashMap<String, String>) -> Result<Box<dyn Visitor>, BuildError>
            + Send
            + Sync
            + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// Looks up the factory for a method name.
    pub fn lookup(&self, name: &str) -> Option<&MethodFactory> {
        self.factories.get(name)
    }

    /// The registered method names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl Default for MethodRegistry {
    fn default() -> Self {
        let mut registry = MethodRegistry::empty();
        registry.register("accents", |options| {
            Ok(Box::new(Accenter::from_options(options)))
        });
        registry.register("brackets", |_| Ok(Box::new(BracketAdder)));
        registry.register("expand", |options| {
            Ok(Box::new(Expander::from_options(options)?))
        });
        registry.register("fakebidi", |_| Ok(Box::new(FakeBidi::new())));
        registry.register("html", |_| Ok(Box::new(HtmlPreserver::new())));
        registry.register("piglatin", |_| Ok(Box::new(PigLatin)));
        registry
    }
}

/// Registry mapping locale variant tags to canned method spec lists.
///
/// Tags are stored lowercased and looked up case-insensitively; a lookup
/// that misses retries with a private-use `x-` prefix stripped.
///
/// [`VariantRegistry::default`] registers `psaccent` (accents, expand,
/// brackets) and `psbidi` (fakebidi).
pub struct VariantRegistry {
    variants: BTreeMap<String, Vec<String>>,
}

impl VariantRegistry {
    /// A registry with no variants at all.
    pub fn empty() -> VariantRegistry {
        VariantRegistry {
            variants: BTreeMap::new(),
        }
    }

    /// Registers the method specs applied for a variant tag.
    pub fn register<S>(&mut self, tag: &str, specs: impl IntoIterator<Item = S>)
    where
        S: Into<String>,
    {
        self.variants.insert(
            tag.to_ascii_lowercase(),
            specs.into_iter().map(Into::into).collect(),
        );
    }

    /// The method specs for a tag, or `None` if it is not registered.
    pub fn lookup(&self, tag: &str) -> Option<&[String]> {
        let tag = tag.to_ascii_lowercase();
        if let Some(specs) = self.variants.get(&tag) {
            return Some(specs);
        }
        tag.strip_prefix("x-")
            .and_then(|stripped| self.variants.get(stripped))
            .map(Vec::as_slice)
    }

    /// The registered variant tags, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }
}

impl Default for VariantRegistry {
    fn default() -> Self {
        let mut registry = VariantRegistry::empty();
        registry.register("psaccent", ["accents", "expand", "brackets"]);
        registry.register("psbidi", ["fakebidi"]);
        registry
    }
}

/// Whether a variant should pseudo-localize source-language text rather
/// than pick up real translations for its locale.
///
/// `psbidi` output should stay readable while the locale itself is
/// recognized as right-to-left, so it works from the source language.
pub fn use_source_language(variant: &str) -> bool {
    variant.eq_ignore_ascii_case("psbidi")
}
