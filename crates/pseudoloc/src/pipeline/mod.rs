//! Pipeline construction and execution.
//!
//! A [`Pipeline`] is an immutable ordered chain of transformation methods
//! applied one after another to the same message, so each stage observes
//! every earlier stage's mutations. Pipelines are built from method specs
//! (`name:key=value`) resolved against an explicit [`MethodRegistry`];
//! [`VariantRegistry`] maps locale variant tags to canned spec lists.

mod error;
mod registry;
mod spec;

use std::collections::HashMap;

pub use error::{BuildError, compute_suggestions};
pub use registry::{MethodFactory, MethodRegistry, VariantRegistry, use_source_language};
pub use spec::MethodSpec;

use crate::methods::HtmlPreserver;
use crate::model::{Message, Visitor};

/// An ordered chain of pseudolocalization methods.
///
/// A pipeline is reusable across any number of messages processed one after
/// another; methods reset their per-message state at the start of each
/// traversal. It is not meant to be shared across threads working on the
/// same message.
///
/// # Example
///
/// ```
/// use pseudoloc::{MethodRegistry, Pipeline};
///
/// let registry = MethodRegistry::default();
/// let mut pipeline = Pipeline::builder(&registry)
///     .methods(["accents", "brackets"])
///     .build()
///     .unwrap();
/// assert_eq!(pipeline.localize_text("ab"), "[\u{e5}\u{180}]");
/// ```
pub struct Pipeline {
    methods: Vec<Box<dyn Visitor>>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("methods", &self.methods.len())
            .finish()
    }
}

impl Pipeline {
    /// Starts building a pipeline against `registry`.
    pub fn builder(registry: &MethodRegistry) -> PipelineBuilder<'_> {
        PipelineBuilder {
            registry,
            options: HashMap::new(),
            preserve_html: false,
            specs: Vec::new(),
        }
    }

    /// A pipeline that applies no methods at all.
    pub fn identity() -> Pipeline {
        Pipeline {
            methods: Vec::new(),
        }
    }

    /// Applies every method, in order, to `message`.
    pub fn localize(&mut self, message: &mut Message) {
        for method in &mut self.methods {
            message.accept(method.as_mut());
        }
    }

    /// Localizes a message with no structure: wraps `text` as a
    /// single-fragment message, runs the pipeline, and flattens the result.
    pub fn localize_text(&mut self, text: &str) -> String {
        let mut message = Message::new(text);
        self.localize(&mut message);
        message.flatten()
    }

    /// The number of method stages, including a prepended HTML preserver.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

/// Builder for [`Pipeline`].
pub struct PipelineBuilder<'r> {
    registry: &'r MethodRegistry,
    options: HashMap<String, String>,
    preserve_html: bool,
    specs: Vec<MethodSpec>,
}

impl PipelineBuilder<'_> {
    /// Prepends an HTML-preserving stage so markup inside messages survives
    /// the rest of the chain. False positives are possible on text that
    /// merely looks like markup.
    pub fn preserve_html(mut self, preserve: bool) -> Self {
        self.preserve_html = preserve;
        self
    }

    /// Supplies one global option, visible to every method.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Supplies a batch of global options.
    pub fn options<K, V>(mut self, options: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in options {
            self.options.insert(key.into(), value.into());
        }
        self
    }

    /// Appends one method spec (`name:key=value` grammar).
    pub fn method(mut self, spec: &str) -> Self {
        self.specs.push(MethodSpec::parse(spec));
        self
    }

    /// Appends a list of method specs.
    pub fn methods<S>(mut self, specs: impl IntoIterator<Item = S>) -> Self
    where
        S: AsRef<str>,
    {
        for spec in specs {
            self.specs.push(MethodSpec::parse(spec.as_ref()));
        }
        self
    }

    /// Resolves every spec against the registry and instantiates the chain.
    ///
    /// # Errors
    ///
    /// Fails on the first unknown method name or invalid option value.
    /// Pipelines are never partially constructed.
    pub fn build(self) -> Result<Pipeline, BuildError> {
        let mut methods: Vec<Box<dyn Visitor>> = Vec::new();
        if self.preserve_html {
            methods.push(Box::new(HtmlPreserver::new()));
        }
        for spec in &self.specs {
            let factory = self.registry.lookup(&spec.name).ok_or_else(|| {
                BuildError::UnknownMethod {
                    name: spec.name.clone(),
                    suggestions: compute_suggestions(&spec.name, self.registry.names()),
                }
            })?;
            let mut options = self.options.clone();
            spec.merge_into(&mut options);
            methods.push(factory(&options)?);
        }
        Ok(Pipeline { methods })
    }
}

/// Builds the pipeline registered for a variant tag, or `None` if the tag is
/// unknown. Lookup is case-insensitive and strips a private-use `x-` prefix
/// before giving up.
pub fn variant_pipeline(
    methods: &MethodRegistry,
    variants: &VariantRegistry,
    tag: &str,
    preserve_html: bool,
) -> Option<Result<Pipeline, BuildError>> {
    let specs = variants.lookup(tag)?;
    Some(
        Pipeline::builder(methods)
            .preserve_html(preserve_html)
            .methods(specs)
            .build(),
    )
}
