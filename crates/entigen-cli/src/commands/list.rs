//! Implementation of the `entigen list` command.

use entigen_adapters::JsonDefinitionStore;
use entigen_core::application::ports::DefinitionStore;

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let root = std::env::current_dir()?;
    let store = JsonDefinitionStore::new(&root);

    if store.load_context()?.is_none() {
        return Err(CliError::ServiceNotInitialised { path: root });
    }

    let entities = store.list()?;

    match args.format {
        ListFormat::Table => {
            if entities.is_empty() {
                output.info("No entities generated yet")?;
                output.print("  Create one: entigen entity Foo --field title:String")?;
                return Ok(());
            }
            output.header("Persisted entities:")?;
            for name in &entities {
                match store.load(name)? {
                    Some(def) => output.print(&format!(
                        "  {} ({} fields, dto: {:?}, owned by: {})",
                        def.name,
                        def.fields.len(),
                        def.dto,
                        def.microservice_name.as_deref().unwrap_or("this service"),
                    ))?,
                    None => output.print(&format!("  {name}"))?,
                }
            }
        }

        ListFormat::List => {
            for name in &entities {
                println!("{name}");
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(&entities).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
    }

    Ok(())
}
