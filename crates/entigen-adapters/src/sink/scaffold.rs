//! Scaffolding artifact sink.
//!
//! Materialises each resolved artifact as a stub file under an output root,
//! using plain `{{variable}}` substitution. Full template rendering is the
//! job of a dedicated engine; this sink writes just enough structure that
//! the generated tree is navigable and diffs show what each run produced.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use entigen_core::application::ApplicationError;
use entigen_core::application::ports::ArtifactSink;
use entigen_core::domain::{ArtifactDescriptor, EntityDefinition, naming};
use entigen_core::error::{GenError, GenResult};

/// Production sink writing stub files with `std::fs`.
#[derive(Debug, Clone)]
pub struct ScaffoldSink {
    output_root: PathBuf,
}

impl ScaffoldSink {
    /// Create a sink rooted at `output_root`. The root itself is created on
    /// the first hand-off.
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }
}

impl ArtifactSink for ScaffoldSink {
    #[instrument(skip_all, fields(entity = %definition.name))]
    fn accept(
        &self,
        definition: &EntityDefinition,
        artifacts: &[ArtifactDescriptor],
    ) -> GenResult<()> {
        let vars = variables(definition);
        for artifact in artifacts {
            let target = self.output_root.join(&artifact.path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| sink_error(parent, "create directory", e))?;
            }
            let content = render(stub_for(artifact.variant), &vars);
            fs::write(&target, content).map_err(|e| sink_error(&target, "write file", e))?;
            debug!(path = %target.display(), variant = artifact.variant, "artifact written");
        }
        Ok(())
    }
}

fn sink_error(path: &Path, operation: &str, e: std::io::Error) -> GenError {
    ApplicationError::SinkFailed {
        reason: format!("failed to {operation} '{}': {e}", path.display()),
    }
    .into()
}

/// Substitution variables shared by every stub.
fn variables(def: &EntityDefinition) -> HashMap<&'static str, String> {
    let mut vars = HashMap::new();
    vars.insert("name", def.name.clone());
    vars.insert("nameSnake", def.server_file_name());
    vars.insert("nameKebab", def.client_file_name());
    vars.insert("nameCamel", naming::lower_first(&def.name));
    vars.insert(
        "changelogDate",
        def.changelog_date.clone().unwrap_or_default(),
    );
    vars.insert(
        "fields",
        def.fields
            .iter()
            .map(|f| format!("{}: {}", f.name, f.field_type))
            .collect::<Vec<_>>()
            .join(", "),
    );
    vars
}

fn render(template: &str, vars: &HashMap<&'static str, String>) -> String {
    let mut out = template.to_string();
    for (key, value) in vars {
        out = out.replace(&format!("{{{{{key}}}}}"), value);
    }
    out
}

fn stub_for(variant: &str) -> &'static str {
    match variant {
        "repository" => "// {{name}} repository ({{changelogDate}})\npub struct {{name}}Repository;\n",
        "search-repository" => "// {{name}} search repository\npub struct {{name}}SearchRepository;\n",
        "rest-resource" => "// {{name}} REST resource\n// fields: {{fields}}\npub struct {{name}}Resource;\n",
        "service-class" | "service-impl" => "// {{name}} service\npub struct {{name}}Service;\n",
        "service-interface" => "// {{name}} service interface\npub trait {{name}}Service {}\n",
        "dto" => "// {{name}} DTO\n// fields: {{fields}}\npub struct {{name}}Dto;\n",
        "mapper" => "// {{name}} mapper\npub struct {{name}}Mapper;\n",
        "model" => "// {{name}} model\n// fields: {{fields}}\nexport interface I{{name}} {}\n",
        "list" | "list-paginated" | "list-infinite-scroll" => {
            "// {{name}} list component\nexport class {{name}}Component {}\n"
        }
        "detail" => "// {{name}} detail component\nexport class {{name}}DetailComponent {}\n",
        "update" => "// {{name}} update component\nexport class {{name}}UpdateComponent {}\n",
        "client-service" => "// {{name}} client service\nexport class {{name}}Service {}\n",
        "page-controls" | "scroll-controls" => {
            "// {{name}} pagination\nexport class {{name}}Pagination {}\n"
        }
        "entity-i18n" => "{\n  \"{{nameCamel}}\": {\n    \"title\": \"{{name}}\"\n  }\n}\n",
        "load-test" => "// {{name}} load test\npub struct {{name}}LoadTest;\n",
        _ => "// {{name}}\n",
    }
}
