use anyhow::anyhow;
use bygg_schema::SchemaRegistry;

use crate::cli::root_commands::SchemaArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

/// Handle `byggkoll schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new()?;

    let Some(name) = &args.name else {
        return output::output(&registry.list(), flags.format);
    };

    let schema = registry.get(name).ok_or_else(|| {
        anyhow!(
            "unknown schema '{name}' (available: {})",
            registry.list().join(", ")
        )
    })?;

    // A schema is a document; a key/value table would only flatten it.
    let format = match flags.format {
        OutputFormat::Table => OutputFormat::Json,
        other => other,
    };
    output::output(schema, format)
}
