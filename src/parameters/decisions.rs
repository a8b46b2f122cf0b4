//! Record of every resolved decision, for introspection and `--log-choices`

use std::fmt;

/// The outcome of one resolved decision
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DecisionValue {
    /// A numeric draw
    Number(f64),
    /// The display name of a categorical choice
    Name(&'static str),
}

impl fmt::Display for DecisionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// A single `key = value` log entry
#[derive(Clone, Debug, PartialEq)]
pub struct Decision {
    /// The key the decision was resolved under
    pub key: String,
    /// What it resolved to
    pub value: DecisionValue,
}

/// Append-only, insertion-ordered log of resolved decisions
///
/// Resolution is a pure function of `(seed, key)`, so a key resolved twice
/// always yields the same value and is recorded only once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecisionLog {
    entries: Vec<Decision>,
}

impl DecisionLog {
    /// Create an empty log
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a decision unless its key is already present
    pub fn record(&mut self, key: &str, value: DecisionValue) {
        if self.get(key).is_some() {
            return;
        }
        log::debug!("resolved {key} = {value}");
        self.entries.push(Decision {
            key: key.to_string(),
            value,
        });
    }

    /// Look up the value recorded for `key`
    pub fn get(&self, key: &str) -> Option<DecisionValue> {
        self.entries
            .iter()
            .find(|decision| decision.key == key)
            .map(|decision| decision.value)
    }

    /// Entries in first-resolution order
    pub fn iter(&self) -> impl Iterator<Item = &Decision> {
        self.entries.iter()
    }

    /// Number of recorded keys
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a DecisionLog {
    type Item = &'a Decision;
    type IntoIter = std::slice::Iter<'a, Decision>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
