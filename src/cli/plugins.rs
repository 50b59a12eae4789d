//! Plugins command: list installed plugins and family policies.

use std::path::Path;

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};

/// List installed plugins and family policies
#[derive(Args, Debug)]
pub struct PluginsArgs {
    /// Also print each family's composite template
    #[arg(long)]
    pub templates: bool,
}

pub fn run(args: PluginsArgs, config: Option<&Path>, printer: &Printer) -> Result<()> {
    let compiler = super::project(config)?.manifest.compiler()?;
    let registry = compiler.registry();

    for plugin in registry.plugins() {
        println!(
            "{:<12} {:<8} {}",
            plugin.name,
            plugin.version,
            plural(plugin.rules, "rule", "rules")
        );
    }

    println!();
    for family in registry.families().families() {
        println!("{:<16} {}", family.kind().name(), family.policy());
        if args.templates {
            println!("  {}: {}", family.property(), printer.dim(family.template()));
        }
    }

    printer.info(
        "Installed",
        &format!(
            "{} ({} exact, {} pattern)",
            plural(registry.plugins().len(), "plugin", "plugins"),
            registry.exact_len(),
            registry.pattern_len()
        ),
    );

    Ok(())
}
