use log::info;
use std::fs;
use std::path::Path;

use refute::{Property, RefuteResult};

pub mod check;
pub mod compare;
pub mod explore;
pub mod strategies;

/// Load a property tree from a JSON file and check the input contract.
///
/// The file is expected to hold the already-expanded tree produced by the
/// external parser and quantifier-expansion step; a malformed tree is
/// rejected here, before any strategy sees it.
pub(crate) fn load_property(path: &Path) -> RefuteResult<Property> {
    info!("Loading property from {}", path.display());
    let content = fs::read_to_string(path)?;
    let property: Property = serde_json::from_str(&content)?;
    property.validate()?;
    info!("Loaded property with {} nodes", property.node_count());
    Ok(property)
}
