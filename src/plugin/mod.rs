//! Plugins and the built-in rule sources.
//!
//! A plugin is a named, versioned batch of rules. Plugins are installed in
//! sequence into a [`RegistryBuilder`]; a plugin only sees rules registered
//! before it.
//!
//! # Example
//!
//! ```ignore
//! use coral::plugin::{core_plugins, Plugin};
//! use coral::registry::RegistryBuilder;
//!
//! let mut builder = RegistryBuilder::new();
//! for plugin in core_plugins() {
//!     builder.install(plugin.as_ref());
//! }
//! let registry = builder.build()?;
//! ```

mod backgrounds;
mod effects;
mod filters;
mod grid;
mod scales;
mod sizing;
mod transforms;
mod typography;

use crate::registry::RegistryBuilder;
use crate::rule::PropertyMap;

pub use backgrounds::Backgrounds;
pub use effects::Effects;
pub use filters::Filters;
pub use grid::Grid;
pub use sizing::Sizing;
pub use transforms::Transforms;
pub use typography::Typography;

/// A named, versioned unit that registers rules.
pub trait Plugin {
    fn name(&self) -> &str;

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    /// Register this plugin's rules.
    fn install(&self, registry: &mut RegistryBuilder);
}

/// Names of the built-in plugins, in install order.
pub const CORE_PLUGINS: &[&str] = &[
    "backgrounds",
    "effects",
    "filters",
    "grid",
    "sizing",
    "transforms",
    "typography",
];

/// All built-in plugins, in install order.
pub fn core_plugins() -> Vec<Box<dyn Plugin>> {
    CORE_PLUGINS
        .iter()
        .filter_map(|name| plugin_by_name(name))
        .collect()
}

/// Look up a built-in plugin by name.
pub fn plugin_by_name(name: &str) -> Option<Box<dyn Plugin>> {
    let plugin: Box<dyn Plugin> = match name {
        "backgrounds" => Box::new(Backgrounds),
        "effects" => Box::new(Effects),
        "filters" => Box::new(Filters),
        "grid" => Box::new(Grid),
        "sizing" => Box::new(Sizing),
        "transforms" => Box::new(Transforms),
        "typography" => Box::new(Typography),
        _ => return None,
    };
    Some(plugin)
}

/// Token for a scale key; `DEFAULT` means the bare prefix.
fn scale_token(prefix: &str, key: &str) -> String {
    if key == scales::DEFAULT {
        prefix.to_string()
    } else {
        format!("{}-{}", prefix, key)
    }
}

/// Register one exact rule per scale entry.
fn register_scale<F>(registry: &mut RegistryBuilder, prefix: &str, scale: &[(&str, &str)], declare: F)
where
    F: Fn(&str) -> PropertyMap,
{
    for &(key, value) in scale {
        registry.exact(scale_token(prefix, key), declare(value));
    }
}

/// Register `-prefix-key` rules with negated values, skipping zero.
fn register_negative_scale<F>(
    registry: &mut RegistryBuilder,
    prefix: &str,
    scale: &[(&str, &str)],
    declare: F,
) where
    F: Fn(&str) -> PropertyMap,
{
    for &(key, value) in scale.iter().filter(|(_, v)| !scales::is_zero(v)) {
        registry.exact(
            format!("-{}", scale_token(prefix, key)),
            declare(&format!("-{}", value)),
        );
    }
}

/// A single-property map.
fn single(property: &str, value: &str) -> PropertyMap {
    PropertyMap::from([(property, value)])
}
