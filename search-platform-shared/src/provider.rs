//! Content provider capability.

/// The part of a host content provider the search platform relies on.
///
/// Any type able to name itself can stand in for a provider; the platform
/// never needs more than its identity.
pub trait ContentProvider: Send + Sync {
    /// Stable identifier, used to build document ids.
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;
}

/// A provider described by plain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticProvider {
    id: String,
    name: String,
}

impl StaticProvider {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl ContentProvider for StaticProvider {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
