use serde::{Deserialize, Serialize};

/// A catalog entry: one downstream capability the system can dispatch
/// to. Immutable after catalog load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    /// Unique key within the catalog.
    pub name: String,
    /// Natural-language description, part of the embedding text.
    pub description: String,
    /// Example utterances, part of the embedding text.
    pub examples: Vec<String>,
    /// Keywords used by fallback matching and the embedding text.
    pub keywords: Vec<String>,
    /// Parameter names the downstream executor expects.
    pub parameters: Vec<String>,
}

impl Action {
    /// Build an action from string slices. Convenient for hardcoded
    /// catalogs.
    pub fn new(
        name: &str,
        description: &str,
        examples: &[&str],
        keywords: &[&str],
        parameters: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            examples: examples.iter().map(|s| s.to_string()).collect(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            parameters: parameters.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The text an embedding is derived from: description, examples,
    /// and keywords joined with single spaces, in that order.
    pub fn embedding_text(&self) -> String {
        let mut parts = Vec::with_capacity(1 + self.examples.len() + self.keywords.len());
        parts.push(self.description.as_str());
        parts.extend(self.examples.iter().map(String::as_str));
        parts.extend(self.keywords.iter().map(String::as_str));
        parts.join(" ")
    }
}

/// Identity equality: two actions are equal if they have the same name.
/// An action's identity is its catalog key, not its content.
impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Action {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedding_text_joins_in_order() {
        let action = Action::new(
            "weather",
            "Get weather information",
            &["what's the weather like?"],
            &["weather", "rain"],
            &["location"],
        );
        assert_eq!(
            action.embedding_text(),
            "Get weather information what's the weather like? weather rain"
        );
    }

    #[test]
    fn identity_is_the_name() {
        let a = Action::new("time", "Show the time", &[], &["time"], &[]);
        let b = Action::new("time", "Completely different text", &[], &[], &[]);
        assert_eq!(a, b);
    }
}
