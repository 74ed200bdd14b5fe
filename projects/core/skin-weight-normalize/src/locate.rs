//! Finding the accessors behind the requested weight attributes.

use crate::document::Mesh;
use tracing::warn;

/// The attribute skin weights are stored in by default.
pub const DEFAULT_WEIGHT_ATTRIBUTE: &str = "WEIGHTS_0";

/// The accessors found for a set of requested attribute names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeLocations {
    /// Accessor indices in encounter order: mesh, then primitive, then requested name.
    /// An accessor shared between primitives appears once per reference.
    pub accessors: Vec<usize>,
    /// Each requested name, in request order, and whether any primitive had it.
    pub found: Vec<(String, bool)>,
}

impl AttributeLocations {
    /// Requested names no primitive had.
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.found
            .iter()
            .filter(|(_, found)| !found)
            .map(|(name, _)| name.as_str())
    }
}

/// Collects the accessor of every requested attribute on every primitive of `meshes`.
///
/// Logs a warning for each requested name that no primitive has.
pub fn locate_attributes<S: AsRef<str>>(meshes: &[Mesh], requested: &[S]) -> AttributeLocations {
    let mut found: Vec<(String, bool)> = requested
        .iter()
        .map(|name| (name.as_ref().to_owned(), false))
        .collect();
    let mut accessors = Vec::new();

    for primitive in meshes.iter().flat_map(|mesh| &mesh.primitives) {
        for (name, was_found) in &mut found {
            if let Some(&accessor) = primitive.attributes.get(name.as_str()) {
                accessors.push(accessor);
                *was_found = true;
            }
        }
    }

    let locations = AttributeLocations { accessors, found };
    for name in locations.missing() {
        warn!("no mesh primitive has a {name} attribute");
    }
    locations
}
