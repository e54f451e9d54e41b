use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// A parsed method spec: a method name plus optional arguments.
///
/// The grammar is `name(":" key ("=" value)?)*`, colon-delimited; an
/// argument without `=` gets the empty string as its value. Arguments are
/// merged into the option map a method factory receives under
/// `name:key` keys, combined with any globally supplied options.
///
/// # Example
///
/// ```
/// use pseudoloc::MethodSpec;
///
/// let spec = MethodSpec::parse("expand:threshold=5:trace");
/// assert_eq!(spec.name, "expand");
/// assert_eq!(
///     spec.args,
///     vec![
///         ("threshold".to_string(), "5".to_string()),
///         ("trace".to_string(), String::new()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSpec {
    pub name: String,
    pub args: Vec<(String, String)>,
}

impl MethodSpec {
    /// Parses a spec string. The grammar has no failure cases; an empty
    /// string yields an empty method name, rejected later at build time.
    pub fn parse(spec: &str) -> MethodSpec {
        let mut parts = spec.split(':');
        let name = parts.next().unwrap_or("").to_string();
        let args = parts
            .map(|arg| match arg.split_once('=') {
                Some((key, value)) => (key.to_string(), value.to_string()),
                None => (arg.to_string(), String::new()),
            })
            .collect();
        MethodSpec { name, args }
    }

    /// Merges this spec's arguments into `options` under `name:key` keys.
    pub fn merge_into(&self, options: &mut HashMap<String, String>) {
        for (key, value) in &self.args {
            options.insert(format!("{}:{}", self.name, key), value.clone());
        }
    }
}

impl Display for MethodSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name)?;
        for (key, value) in &self.args {
            if value.is_empty() {
                write!(f, ":{key}")?;
            } else {
                write!(f, ":{key}={value}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_name() {
        let spec = MethodSpec::parse("accents");
        assert_eq!(spec.name, "accents");
        assert!(spec.args.is_empty());
    }

    #[test]
    fn arg_without_value_defaults_to_empty() {
        let spec = MethodSpec::parse("accents:extended");
        assert_eq!(spec.args, vec![("extended".to_string(), String::new())]);
    }

    #[test]
    fn merge_prefixes_keys_with_method_name() {
        let mut options = HashMap::new();
        options.insert("global".to_string(), "yes".to_string());
        MethodSpec::parse("expand:threshold=7").merge_into(&mut options);
        assert_eq!(options.get("expand:threshold").map(String::as_str), Some("7"));
        assert_eq!(options.get("global").map(String::as_str), Some("yes"));
    }

    #[test]
    fn display_round_trips() {
        for raw in ["accents", "accents:extended", "expand:threshold=5:x"] {
            assert_eq!(MethodSpec::parse(raw).to_string(), raw);
        }
    }

    #[test]
    fn value_may_contain_equals() {
        let spec = MethodSpec::parse("m:key=a=b");
        assert_eq!(spec.args, vec![("key".to_string(), "a=b".to_string())]);
    }
}
