//! Artifact-set resolution: the rule table.
//!
//! [`resolve_artifacts`] is a pure function from a canonical definition plus
//! project context to an ordered artifact list. The rules are data, not
//! control flow: an ordered slice of (predicate, emitter) pairs, evaluated
//! tier by tier (server, client, i18n, test). Identical inputs always yield
//! an identical, identically ordered list — regeneration diffs depend on it.
//!
//! A duplicate output path across rules is a bug in this table, reported as
//! [`DomainError::DuplicateArtifactPath`] and never silently deduplicated.

use std::collections::HashMap;

use crate::domain::{
    ApplicationType, ArtifactCategory, ArtifactDescriptor, CLIENT_ENTITIES_DIR, CLIENT_I18N_DIR,
    DomainError, DtoKind, EntityDefinition, LOAD_TEST_DIR, PaginationKind, ProjectContext,
    SERVER_SRC_DIR, ServiceKind,
};

/// One row of the rule table.
struct ArtifactRule {
    name: &'static str,
    applies: fn(&EntityDefinition, &ProjectContext) -> bool,
    emit: fn(&EntityDefinition, &ProjectContext) -> Vec<ArtifactDescriptor>,
}

/// Resolve the full artifact set for one entity.
///
/// # Errors
///
/// `DuplicateArtifactPath` when two rules computed the same output path
/// (an internal invariant violation).
pub fn resolve_artifacts(
    def: &EntityDefinition,
    ctx: &ProjectContext,
) -> Result<Vec<ArtifactDescriptor>, DomainError> {
    evaluate(RULES, def, ctx)
}

fn evaluate(
    rules: &[ArtifactRule],
    def: &EntityDefinition,
    ctx: &ProjectContext,
) -> Result<Vec<ArtifactDescriptor>, DomainError> {
    let mut seen: HashMap<String, &'static str> = HashMap::new();
    let mut out = Vec::new();

    for rule in rules {
        if !(rule.applies)(def, ctx) {
            continue;
        }
        for artifact in (rule.emit)(def, ctx) {
            if let Some(first_rule) = seen.insert(artifact.path.clone(), rule.name) {
                return Err(DomainError::DuplicateArtifactPath {
                    path: artifact.path,
                    first_rule,
                    second_rule: rule.name,
                });
            }
            out.push(artifact);
        }
    }

    Ok(out)
}

// ── predicates ────────────────────────────────────────────────────────────────

/// A gateway presenting an entity owned by a microservice: server and test
/// artifacts are suppressed regardless of `skip_server`, only the client
/// surface (under the remote root) and its i18n bundles are generated.
fn gateway_consumed(def: &EntityDefinition, ctx: &ProjectContext) -> bool {
    def.is_remote() && ctx.application_type == ApplicationType::Gateway
}

fn server_tier(def: &EntityDefinition, ctx: &ProjectContext) -> bool {
    !def.skip_server && !gateway_consumed(def, ctx)
}

fn client_tier(def: &EntityDefinition, _ctx: &ProjectContext) -> bool {
    !def.skip_client
}

// ── path construction ─────────────────────────────────────────────────────────

/// Root folder that actually namespaces paths: only when it differs from the
/// generating service's own application name.
fn effective_root<'a>(def: &'a EntityDefinition, ctx: &ProjectContext) -> Option<&'a str> {
    def.client_root_folder
        .as_deref()
        .filter(|root| *root != ctx.application_name)
}

fn server_path(def: &EntityDefinition, sub_dir: &str, file_suffix: &str) -> String {
    format!(
        "{SERVER_SRC_DIR}{sub_dir}{}{file_suffix}.rs",
        def.server_file_name()
    )
}

fn client_dir(def: &EntityDefinition, ctx: &ProjectContext) -> String {
    let file = def.client_file_name();
    match effective_root(def, ctx) {
        Some(root) => format!("{CLIENT_ENTITIES_DIR}{root}/{file}/"),
        None => format!("{CLIENT_ENTITIES_DIR}{file}/"),
    }
}

fn client_path(def: &EntityDefinition, ctx: &ProjectContext, file_suffix: &str) -> String {
    format!(
        "{}{}{file_suffix}",
        client_dir(def, ctx),
        def.client_file_name()
    )
}

// ── the table ─────────────────────────────────────────────────────────────────

use ArtifactCategory::{Client, I18n, Server, Test};

/// Evaluation order is emission order: server, client, i18n, test.
static RULES: &[ArtifactRule] = &[
    ArtifactRule {
        name: "repository",
        applies: server_tier,
        emit: |def, _| {
            vec![ArtifactDescriptor::new(
                server_path(def, "repository/", "_repository"),
                Server,
                "repository",
            )]
        },
    },
    ArtifactRule {
        name: "search-repository",
        applies: |def, ctx| server_tier(def, ctx) && def.search_engine,
        emit: |def, _| {
            vec![ArtifactDescriptor::new(
                server_path(def, "repository/search/", "_search_repository"),
                Server,
                "search-repository",
            )]
        },
    },
    ArtifactRule {
        name: "rest-resource",
        applies: server_tier,
        emit: |def, _| {
            vec![ArtifactDescriptor::new(
                server_path(def, "web/rest/", "_resource"),
                Server,
                "rest-resource",
            )]
        },
    },
    ArtifactRule {
        name: "service-layer",
        applies: |def, ctx| server_tier(def, ctx) && def.service != ServiceKind::No,
        emit: |def, _| {
            let mut artifacts = Vec::new();
            match def.service {
                ServiceKind::ServiceClass => artifacts.push(ArtifactDescriptor::new(
                    server_path(def, "service/", "_service"),
                    Server,
                    "service-class",
                )),
                ServiceKind::ServiceImpl => {
                    artifacts.push(ArtifactDescriptor::new(
                        server_path(def, "service/", "_service"),
                        Server,
                        "service-interface",
                    ));
                    artifacts.push(ArtifactDescriptor::new(
                        server_path(def, "service/impl/", "_service_impl"),
                        Server,
                        "service-impl",
                    ));
                }
                ServiceKind::No => {}
            }
            artifacts
        },
    },
    ArtifactRule {
        name: "dto",
        applies: |def, ctx| server_tier(def, ctx) && def.dto != DtoKind::No,
        emit: |def, _| {
            let mut artifacts = vec![ArtifactDescriptor::new(
                server_path(def, "service/dto/", "_dto"),
                Server,
                "dto",
            )];
            if def.dto == DtoKind::Mapstruct {
                artifacts.push(ArtifactDescriptor::new(
                    server_path(def, "service/mapper/", "_mapper"),
                    Server,
                    "mapper",
                ));
            }
            artifacts
        },
    },
    ArtifactRule {
        name: "client-model",
        applies: client_tier,
        emit: |def, ctx| {
            vec![ArtifactDescriptor::new(
                client_path(def, ctx, ".model.ts"),
                Client,
                "model",
            )]
        },
    },
    ArtifactRule {
        name: "client-list",
        applies: client_tier,
        emit: |def, ctx| {
            let variant = match def.pagination {
                PaginationKind::No => "list",
                PaginationKind::Pagination => "list-paginated",
                PaginationKind::InfiniteScroll => "list-infinite-scroll",
            };
            vec![ArtifactDescriptor::new(
                client_path(def, ctx, ".component.ts"),
                Client,
                variant,
            )]
        },
    },
    ArtifactRule {
        name: "client-detail",
        applies: client_tier,
        emit: |def, ctx| {
            vec![ArtifactDescriptor::new(
                client_path(def, ctx, "-detail.component.ts"),
                Client,
                "detail",
            )]
        },
    },
    ArtifactRule {
        name: "client-update",
        applies: client_tier,
        emit: |def, ctx| {
            vec![ArtifactDescriptor::new(
                client_path(def, ctx, "-update.component.ts"),
                Client,
                "update",
            )]
        },
    },
    ArtifactRule {
        name: "client-service",
        applies: client_tier,
        emit: |def, ctx| {
            vec![ArtifactDescriptor::new(
                client_path(def, ctx, ".service.ts"),
                Client,
                "client-service",
            )]
        },
    },
    ArtifactRule {
        // Dedicated query-parameter module for paged listings. Never emitted
        // when the entity has no client tier: pagination is meaningless
        // without a listing surface.
        name: "client-pagination",
        applies: |def, ctx| client_tier(def, ctx) && def.pagination != PaginationKind::No,
        emit: |def, ctx| {
            let variant = match def.pagination {
                PaginationKind::Pagination => "page-controls",
                PaginationKind::InfiniteScroll => "scroll-controls",
                PaginationKind::No => unreachable!("guarded by applies"),
            };
            vec![ArtifactDescriptor::new(
                client_path(def, ctx, ".pagination.ts"),
                Client,
                variant,
            )]
        },
    },
    ArtifactRule {
        name: "entity-i18n",
        applies: |def, ctx| ctx.enable_translation && client_tier(def, ctx),
        emit: |def, ctx| {
            let key = def.i18n_name(effective_root(def, ctx));
            ctx.languages
                .iter()
                .map(|language| {
                    ArtifactDescriptor::new(
                        format!("{CLIENT_I18N_DIR}{language}/{key}.json"),
                        I18n,
                        "entity-i18n",
                    )
                })
                .collect()
        },
    },
    ArtifactRule {
        name: "load-test",
        applies: |def, ctx| ctx.load_tests && server_tier(def, ctx),
        emit: |def, _| {
            vec![ArtifactDescriptor::new(
                format!("{LOAD_TEST_DIR}{}_load_test.rs", def.server_file_name()),
                Test,
                "load-test",
            )]
        },
    },
];
