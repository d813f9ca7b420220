//! `entigen init` — record the service metadata in the current directory.

use tracing::info;

use entigen_adapters::JsonDefinitionStore;
use entigen_core::domain::{ApplicationType, DatabaseType, ProjectContext};

use crate::{
    cli::{AppTypeOption, DatabaseOption, GlobalArgs, InitArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Create the `.entigen/service.json` metadata for the current directory.
pub fn execute(args: InitArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let root = std::env::current_dir()?;

    if JsonDefinitionStore::is_initialised(&root) && !args.force {
        return Err(CliError::ServiceExists {
            path: root.join(".entigen").join("service.json"),
        });
    }

    let app_name = match args.app_name {
        Some(name) => name,
        None => derive_app_name(&root)?,
    };

    let mut ctx = ProjectContext::new(&app_name);
    ctx.application_type = convert_app_type(args.app_type);
    ctx.database_type = convert_database(args.database);
    ctx.enable_translation = args.with_translation;
    ctx.languages = args.languages;
    ctx.search_engine = args.with_search;
    ctx.load_tests = args.with_load_tests;

    if ctx.enable_translation && ctx.languages.is_empty() {
        return Err(CliError::InvalidInput {
            message: "--with-translation requires at least one --languages entry".into(),
            source: None,
        });
    }

    JsonDefinitionStore::new(&root).save_context(&ctx)?;

    info!(app = %app_name, app_type = %ctx.application_type, "service initialised");
    output.success(&format!(
        "Service '{}' initialised ({}, {})",
        app_name, ctx.application_type, ctx.database_type,
    ))?;
    output.print("  Generate your first entity: entigen entity Foo --field title:String")?;

    Ok(())
}

fn derive_app_name(root: &std::path::Path) -> CliResult<String> {
    root.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_owned)
        .ok_or_else(|| CliError::InvalidInput {
            message: "cannot derive an application name from the current directory; pass --app-name"
                .into(),
            source: None,
        })
}

fn convert_app_type(app_type: AppTypeOption) -> ApplicationType {
    match app_type {
        AppTypeOption::Monolith => ApplicationType::Monolith,
        AppTypeOption::Microservice => ApplicationType::Microservice,
        AppTypeOption::Gateway => ApplicationType::Gateway,
    }
}

fn convert_database(database: DatabaseOption) -> DatabaseType {
    match database {
        DatabaseOption::Sql => DatabaseType::Sql,
        DatabaseOption::Mongodb => DatabaseType::Mongodb,
        DatabaseOption::Cassandra => DatabaseType::Cassandra,
        DatabaseOption::None => DatabaseType::No,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn app_type_conversion_covers_all_variants() {
        assert_eq!(
            convert_app_type(AppTypeOption::Microservice),
            ApplicationType::Microservice
        );
        assert_eq!(
            convert_app_type(AppTypeOption::Gateway),
            ApplicationType::Gateway
        );
    }

    #[test]
    fn database_conversion_covers_all_variants() {
        assert_eq!(convert_database(DatabaseOption::Cassandra), DatabaseType::Cassandra);
        assert_eq!(convert_database(DatabaseOption::None), DatabaseType::No);
    }

    #[test]
    fn app_name_derived_from_directory() {
        assert_eq!(derive_app_name(PathBuf::from("/work/myapp").as_path()).unwrap(), "myapp");
    }
}
