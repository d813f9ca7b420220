//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "entigen",
    bin_name = "entigen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Entity-driven artifact generation",
    long_about = "Entigen turns one declarative entity definition into the \
                  matching server, client, translation and test artifacts, \
                  and keeps them regenerable.",
    after_help = "EXAMPLES:\n\
        \x20 entigen init --app-name myapp\n\
        \x20 entigen entity Foo --field title:String --dto mapstruct --service-layer service-impl\n\
        \x20 entigen entity Bar --from-service ../inventory\n\
        \x20 entigen list\n\
        \x20 entigen completions bash > /usr/share/bash-completion/completions/entigen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialise the service metadata in the current directory.
    #[command(
        about = "Initialise a service for entity generation",
        after_help = "EXAMPLES:\n\
            \x20 entigen init --app-name myapp\n\
            \x20 entigen init --app-name store --app-type microservice --database mongodb\n\
            \x20 entigen init --app-name portal --app-type gateway --with-translation --languages en,fr"
    )]
    Init(InitArgs),

    /// Generate (or regenerate) one entity.
    #[command(
        visible_alias = "e",
        about = "Generate an entity",
        after_help = "EXAMPLES:\n\
            \x20 entigen entity Foo --field title:String --field count:Integer\n\
            \x20 entigen entity Foo --dto mapstruct --service-layer service-class --pagination pagination\n\
            \x20 entigen entity Bar --from-service ../inventory\n\
            \x20 entigen entity Foo --dry-run"
    )]
    Entity(EntityArgs),

    /// List entities persisted in this service.
    #[command(
        visible_alias = "ls",
        about = "List persisted entities",
        after_help = "EXAMPLES:\n\
            \x20 entigen list\n\
            \x20 entigen list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 entigen completions bash > ~/.local/share/bash-completion/completions/entigen\n\
            \x20 entigen completions zsh  > ~/.zfunc/_entigen\n\
            \x20 entigen completions fish > ~/.config/fish/completions/entigen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `entigen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Application name recorded in the service metadata.
    #[arg(
        long = "app-name",
        value_name = "NAME",
        help = "Application name (default: current directory name)"
    )]
    pub app_name: Option<String>,

    /// Service topology.
    #[arg(
        long = "app-type",
        value_name = "TYPE",
        value_enum,
        default_value = "monolith",
        help = "Application type"
    )]
    pub app_type: AppTypeOption,

    /// Persistence backend.
    #[arg(
        long = "database",
        value_name = "DB",
        value_enum,
        default_value = "sql",
        help = "Database type"
    )]
    pub database: DatabaseOption,

    /// Enable client-side translation bundles.
    #[arg(long = "with-translation", help = "Enable i18n artifact generation")]
    pub with_translation: bool,

    /// UI languages, comma separated.
    #[arg(
        long = "languages",
        value_name = "LANGS",
        value_delimiter = ',',
        help = "UI languages (e.g. en,fr)"
    )]
    pub languages: Vec<String>,

    /// Back entities with a search index by default.
    #[arg(long = "with-search", help = "Enable search engine support")]
    pub with_search: bool,

    /// Generate load-test scripts alongside entities.
    #[arg(long = "with-load-tests", help = "Enable load-test generation")]
    pub with_load_tests: bool,

    /// Overwrite existing service metadata.
    #[arg(short = 'f', long = "force", help = "Overwrite existing metadata")]
    pub force: bool,
}

// ── entity ────────────────────────────────────────────────────────────────────

/// Arguments for `entigen entity`.
#[derive(Debug, Args)]
pub struct EntityArgs {
    /// Entity name.  Normalised to PascalCase (`foo-bar` becomes `FooBar`).
    #[arg(value_name = "NAME", help = "Entity name")]
    pub name: String,

    /// DTO generation mode.
    #[arg(long = "dto", value_name = "MODE", value_enum, help = "DTO mode")]
    pub dto: Option<DtoOption>,

    /// Service layer shape.
    #[arg(
        long = "service-layer",
        value_name = "MODE",
        value_enum,
        help = "Service layer shape"
    )]
    pub service_layer: Option<ServiceOption>,

    /// Collection listing style.
    #[arg(
        long = "pagination",
        value_name = "MODE",
        value_enum,
        help = "Pagination style"
    )]
    pub pagination: Option<PaginationOption>,

    /// Back this entity with a search index.
    #[arg(long = "search", help = "Generate a search repository")]
    pub search: bool,

    /// Entity fields, repeatable, as `name:Type` pairs.
    #[arg(
        long = "field",
        value_name = "NAME:TYPE",
        help = "Add a field (repeatable, e.g. --field title:String)"
    )]
    pub fields: Vec<String>,

    /// Suffix for generated client route/module identifiers.
    #[arg(
        long = "angular-suffix",
        value_name = "SUFFIX",
        help = "Suffix for client identifiers"
    )]
    pub angular_suffix: Option<String>,

    /// Namespace folder for client artifacts.
    #[arg(
        long = "client-root-folder",
        value_name = "FOLDER",
        help = "Client artifact namespace folder"
    )]
    pub client_root_folder: Option<String>,

    /// Generate no client-tier artifacts.
    #[arg(long = "skip-client", help = "Skip client artifacts")]
    pub skip_client: bool,

    /// Generate no server-tier artifacts.
    #[arg(long = "skip-server", help = "Skip server artifacts")]
    pub skip_server: bool,

    /// Import the definition from the owning service instead of authoring it.
    #[arg(
        long = "from-service",
        value_name = "PATH",
        help = "Import the definition from another service's root"
    )]
    pub from_service: Option<PathBuf>,

    /// Resolve and report without persisting or writing anything.
    #[arg(long = "dry-run", help = "Show what would be generated without generating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `entigen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `entigen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// DTO mode choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DtoOption {
    No,
    Yes,
    Mapstruct,
}

/// Service layer choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum ServiceOption {
    No,
    ServiceClass,
    ServiceImpl,
}

/// Pagination choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum PaginationOption {
    No,
    Pagination,
    InfiniteScroll,
}

/// Application topology choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum AppTypeOption {
    Monolith,
    Microservice,
    Gateway,
}

/// Database choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DatabaseOption {
    Sql,
    Mongodb,
    Cassandra,
    None,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_entity_command() {
        let cli = Cli::parse_from([
            "entigen",
            "entity",
            "Foo",
            "--dto",
            "mapstruct",
            "--service-layer",
            "service-impl",
            "--pagination",
            "infinite-scroll",
            "--field",
            "title:String",
        ]);
        let Commands::Entity(args) = cli.command else {
            panic!("expected Entity command");
        };
        assert_eq!(args.name, "Foo");
        assert_eq!(args.dto, Some(DtoOption::Mapstruct));
        assert_eq!(args.service_layer, Some(ServiceOption::ServiceImpl));
        assert_eq!(args.pagination, Some(PaginationOption::InfiniteScroll));
        assert_eq!(args.fields, vec!["title:String"]);
    }

    #[test]
    fn entity_alias() {
        let cli = Cli::parse_from(["entigen", "e", "Foo"]);
        assert!(matches!(cli.command, Commands::Entity(_)));
    }

    #[test]
    fn parse_init_languages() {
        let cli = Cli::parse_from([
            "entigen",
            "init",
            "--app-name",
            "myapp",
            "--with-translation",
            "--languages",
            "en,fr",
        ]);
        let Commands::Init(args) = cli.command else {
            panic!("expected Init command");
        };
        assert_eq!(args.app_name.as_deref(), Some("myapp"));
        assert!(args.with_translation);
        assert_eq!(args.languages, vec!["en", "fr"]);
    }

    #[test]
    fn parse_remote_import() {
        let cli = Cli::parse_from(["entigen", "entity", "Bar", "--from-service", "../inventory"]);
        let Commands::Entity(args) = cli.command else {
            panic!("expected Entity command");
        };
        assert_eq!(args.from_service, Some(PathBuf::from("../inventory")));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["entigen", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
