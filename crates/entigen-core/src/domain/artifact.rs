//! Artifact descriptors: the abstract output of a resolution pass.
//!
//! The artifact resolver never touches the filesystem; it produces an ordered
//! list of descriptors which the external rendering collaborator (an
//! [`ArtifactSink`](crate::application::ports::ArtifactSink) implementation)
//! turns into real files.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tier a generated file belongs to. Also the resolver's emission order:
/// server, then client, then i18n, then test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArtifactCategory {
    Server,
    Client,
    I18n,
    Test,
}

impl fmt::Display for ArtifactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Server => "server",
            Self::Client => "client",
            Self::I18n => "i18n",
            Self::Test => "test",
        };
        f.write_str(s)
    }
}

/// One output file, described abstractly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactDescriptor {
    /// Output path relative to the service root. Unique within one
    /// resolution pass.
    pub path: String,
    pub category: ArtifactCategory,
    /// Identifier of the template variant the renderer must use.
    pub variant: &'static str,
}

impl ArtifactDescriptor {
    pub fn new(path: impl Into<String>, category: ArtifactCategory, variant: &'static str) -> Self {
        Self {
            path: path.into(),
            category,
            variant,
        }
    }
}

impl fmt::Display for ArtifactDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.category, self.path, self.variant)
    }
}

// ── generated-tree layout ─────────────────────────────────────────────────────

/// Root of server-tier sources in the generated project.
pub const SERVER_SRC_DIR: &str = "server/src/";
/// Root of client entity modules.
pub const CLIENT_ENTITIES_DIR: &str = "client/src/app/entities/";
/// Root of client translation bundles.
pub const CLIENT_I18N_DIR: &str = "client/src/i18n/";
/// Root of generated load-test scripts.
pub const LOAD_TEST_DIR: &str = "tests/load/";
