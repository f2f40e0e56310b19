//! Typed position in the model table.

/// Index of a model in a [`Catalog`](crate::Catalog).
///
/// Only meaningful together with the catalog that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModelIndex(usize);

impl ModelIndex {
    /// Creates a ModelIndex from a raw table position.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying table position.
    #[must_use]
    pub const fn value(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ModelIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for ModelIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<ModelIndex> for usize {
    fn from(index: ModelIndex) -> Self {
        index.0
    }
}

impl serde::Serialize for ModelIndex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.0 as u64)
    }
}

impl<'de> serde::Deserialize<'de> for ModelIndex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let index = u64::deserialize(deserializer)?;
        usize::try_from(index)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_index_json_roundtrip() {
        let index = ModelIndex::new(33);
        let json = serde_json::to_string(&index).unwrap();
        assert_eq!(json, "33");
        let parsed: ModelIndex = serde_json::from_str(&json).unwrap();
        assert_eq!(index, parsed);
    }

    #[test]
    fn test_model_index_display() {
        assert_eq!(ModelIndex::from(7).to_string(), "7");
        assert_eq!(usize::from(ModelIndex::new(7)), 7);
    }
}
