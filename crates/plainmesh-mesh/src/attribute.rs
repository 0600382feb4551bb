//! Named data fields attached to a mesh.

use std::collections::BTreeMap;

/// Metadata key holding the attribute name.
pub const NAME_KEY: &str = "Name";

/// Metadata key holding the attribute association.
pub const CENTER_KEY: &str = "Center";

/// Where an attribute's values live, as declared by its `Center` metadata.
///
/// The declaration is informational only. Plotting dispatches on the
/// array length, never on this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Center {
    /// One value per vertex.
    Node,
    /// One value per triangle.
    Cell,
    /// Any other declared association (`Grid`, `Face`, `Edge`, ...).
    Other(String),
}

impl Center {
    fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Node" => Center::Node,
            "Cell" => Center::Cell,
            other => Center::Other(other.to_string()),
        }
    }
}

/// A named numeric array associated with vertices or triangles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attribute {
    /// Every XML attribute of the declaring element, verbatim.
    pub metadata: BTreeMap<String, String>,
    /// Flat values, one per vertex or one per triangle.
    pub value: Vec<f64>,
}

impl Attribute {
    pub fn new(metadata: BTreeMap<String, String>, value: Vec<f64>) -> Self {
        Self { metadata, value }
    }

    /// Creates an attribute carrying only a `Name` entry.
    pub fn named(name: &str, value: Vec<f64>) -> Self {
        let mut metadata = BTreeMap::new();
        metadata.insert(NAME_KEY.to_string(), name.to_string());
        Self { metadata, value }
    }

    /// The `Name` metadata entry, if declared.
    pub fn name(&self) -> Option<&str> {
        self.metadata.get(NAME_KEY).map(String::as_str)
    }

    /// The `Center` metadata entry, if declared.
    pub fn center(&self) -> Option<Center> {
        self.metadata.get(CENTER_KEY).map(|c| Center::parse(c))
    }

    /// Number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
