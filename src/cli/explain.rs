//! Explain command: show the declarations behind each token.

use clap::Args;
use serde::Serialize;

use crate::compiler::Resolution;
use crate::emit::emit_rule;
use crate::error::{CoralError, Result};
use crate::output::Printer;

/// Show what individual tokens resolve to
#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// Tokens to resolve
    #[arg(required = true)]
    pub tokens: Vec<String>,

    /// Print resolutions as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Explained<'a> {
    token: &'a str,
    #[serde(flatten)]
    resolution: Resolution,
}

pub fn run(args: ExplainArgs, config: Option<&std::path::Path>, printer: &Printer) -> Result<()> {
    let compiler = super::project(config)?.manifest.compiler()?;

    let explained: Vec<Explained> = args
        .tokens
        .iter()
        .map(|token| Explained {
            token,
            resolution: compiler.explain(token),
        })
        .collect();

    if args.json {
        let json = serde_json::to_string_pretty(&explained).map_err(|e| CoralError::Parse {
            message: format!("Failed to serialize resolutions: {}", e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    }

    for item in &explained {
        match &item.resolution {
            Resolution::Resolved { properties } => print!("{}", emit_rule(item.token, properties)),
            Resolution::Unresolved => printer.warning("Unresolved", item.token),
        }
    }

    Ok(())
}
