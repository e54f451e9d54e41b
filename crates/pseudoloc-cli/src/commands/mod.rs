mod localize;
mod methods;
mod variants;

pub use localize::{LocalizeArgs, run_localize};
pub use methods::{MethodsArgs, run_methods};
pub use variants::{VariantsArgs, run_variants};
