pub mod format;
pub mod methods;
pub mod model;
pub mod pipeline;

pub use model::{
    FormSpec, Fragment, FragmentId, Message, Traversal, VariantForm, VariantFragment,
    VariantSelector, Visitor, VisitorContext,
};
pub use pipeline::{
    BuildError, MethodRegistry, MethodSpec, Pipeline, PipelineBuilder, VariantRegistry,
    compute_suggestions, use_source_language, variant_pipeline,
};
