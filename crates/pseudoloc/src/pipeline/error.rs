//! Error types for pipeline construction.

use thiserror::Error;

/// An error building a pipeline from method specs.
///
/// Build errors are fatal and surface immediately; a pipeline is never
/// partially constructed.
#[derive(Debug, Error)]
pub enum BuildError {
    /// No factory is registered under the requested method name.
    #[error("unknown method '{name}'{}", suggestion_text(suggestions))]
    UnknownMethod {
        name: String,
        suggestions: Vec<String>,
    },

    /// A method option had a value its factory could not use.
    #[error("invalid value '{value}' for option '{option}': {message}")]
    InvalidOption {
        option: String,
        value: String,
        message: String,
    },
}

fn suggestion_text(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean {}?", suggestions.join(" or "))
    }
}

/// Ranks `candidates` by similarity to `input` and returns the closest
/// matches, best first, for "did you mean" hints in errors.
pub fn compute_suggestions<I, S>(input: &str, candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scored: Vec<(f64, String)> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let candidate = candidate.as_ref();
            let score = strsim::jaro_winkler(input, candidate);
            (score >= 0.85).then(|| (score, candidate.to_string()))
        })
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().take(3).map(|(_, name)| name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_misspellings_are_suggested() {
        let names = ["accents", "brackets", "expand", "fakebidi"];
        assert_eq!(compute_suggestions("acents", names), vec!["accents"]);
        assert_eq!(compute_suggestions("expnd", names), vec!["expand"]);
    }

    #[test]
    fn distant_names_are_not() {
        let names = ["accents", "brackets"];
        assert!(compute_suggestions("zzzzzz", names).is_empty());
    }

    #[test]
    fn error_message_includes_suggestions() {
        let error = BuildError::UnknownMethod {
            name: "acents".to_string(),
            suggestions: vec!["accents".to_string()],
        };
        assert_eq!(error.to_string(), "unknown method 'acents', did you mean accents?");
    }
}
