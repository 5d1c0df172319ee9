//! Ordered key list consumed by keyed solvers.

/// An ordered list of opaque key strings.
///
/// Construction splits every supplied part on `|` (the CLI join character)
/// and drops empty segments, so keyed solvers never see an empty key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keychain {
    keys: Vec<String>,
}

impl Keychain {
    /// Build a keychain from raw parts, splitting on `|` and skipping
    /// empty keys.
    #[must_use]
    pub fn from_parts<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys = parts
            .into_iter()
            .flat_map(|part| {
                part.as_ref()
                    .split('|')
                    .filter(|k| !k.is_empty())
                    .map(str::to_owned)
                    .collect::<Vec<_>>()
            })
            .collect();
        Self { keys }
    }

    /// The keys, in supplied order.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the keychain holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
