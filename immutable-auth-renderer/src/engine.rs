//! Tera rendering engine — [`TemplateEngine`] and [`Renderer`].
//!
//! # Templates
//!
//! | Name                 | Rendered                                     |
//! |----------------------|----------------------------------------------|
//! | `header.sol.tera`    | once, at the top of the document             |
//! | `immutable.sol.tera` | once per contract, with `name` and `salt`    |
//!
//! A user template directory may override either by file name.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::Tera;

use immutable_auth_core::{Manifest, NameSaltPair};

use crate::context::BlockContext;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

/// Name of the header template.
pub const HEADER: &str = "header.sol.tera";
/// Name of the per-contract template.
pub const IMMUTABLE: &str = "immutable.sol.tera";

/// Embedded header text. Contains no template syntax, so it renders verbatim.
pub const HEADER_TEMPLATE: &str = include_str!("templates/header.sol.tera");
/// Embedded per-contract template.
pub const IMMUTABLE_TEMPLATE: &str = include_str!("templates/immutable.sol.tera");

const TPLS: &[(&str, &str)] = &[(HEADER, HEADER_TEMPLATE), (IMMUTABLE, IMMUTABLE_TEMPLATE)];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy()
        .replace('\\', "/")
        .to_lowercase()
}

fn load_user_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    let mut templates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((name, contents.replace("\r\n", "\n")));
    }
    Ok(templates)
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = TPLS
        .iter()
        .map(|(name, content)| (name.to_string(), content.to_string()))
        .collect();
    if let Some(dir) = user_template_dir {
        for (name, content) in load_user_templates(dir)? {
            tracing::debug!("template override: {name}");
            templates.insert(name, content);
        }
    }

    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    tera.add_raw_templates(templates)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine holding the header and per-contract templates.
///
/// `user_template_dir` may contain `header.sol.tera` and/or
/// `immutable.sol.tera`, which replace the embedded defaults.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(TemplateEngine { tera })
    }

    /// Render the shared header block.
    pub fn render_header(&self) -> Result<String, RenderError> {
        Ok(self.tera.render(HEADER, &tera::Context::new())?)
    }

    /// Render one contract block.
    pub fn render_block(&self, ctx: &BlockContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        Ok(self.tera.render(IMMUTABLE, &tera_ctx)?)
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders a full document: header, then one block per manifest entry.
///
/// Create once with [`Renderer::new`] and reuse; rendering has no side effects.
pub struct Renderer {
    engine: TemplateEngine,
}

impl Renderer {
    /// Construct a new [`Renderer`] with embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer { engine: TemplateEngine::new(None)? })
    }

    /// Construct a [`Renderer`] whose templates may be overridden from `dir`.
    pub fn with_templates(dir: &Path) -> Result<Self, RenderError> {
        Ok(Renderer { engine: TemplateEngine::new(Some(dir))? })
    }

    /// Render every contract in `manifest`, in order.
    ///
    /// All salts are derived before any text is produced; a rejected seed
    /// fails the whole render.
    pub fn render(&self, manifest: &Manifest) -> Result<String, RenderError> {
        let salts = manifest.salts()?;
        let mut out = self.engine.render_header()?;
        for (pair, salt) in &salts {
            let ctx = BlockContext::new(pair, salt);
            tracing::debug!("rendering immutable{} with salt {}", ctx.name, ctx.salt);
            out.push_str(&self.engine.render_block(&ctx)?);
        }
        Ok(out)
    }
}

/// Render `pairs` with the embedded templates and the default salt policy.
pub fn render(pairs: &[NameSaltPair]) -> Result<String, RenderError> {
    Renderer::new()?.render(&Manifest::new(pairs.to_vec()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_new_succeeds() {
        Renderer::new().expect("Renderer::new should succeed with embedded templates");
    }

    #[test]
    fn header_renders_verbatim() {
        let engine = TemplateEngine::new(None).unwrap();
        assert_eq!(engine.render_header().unwrap(), HEADER_TEMPLATE);
    }

    #[test]
    fn block_interpolates_every_occurrence() {
        let engine = TemplateEngine::new(None).unwrap();
        let ctx = BlockContext {
            name: "Governance".to_string(),
            salt: format!("0x{}", "ab".repeat(32)),
        };
        let block = engine.render_block(&ctx).unwrap();
        assert!(!block.contains("{{"));
        assert!(block.contains("abstract contract immutableGovernance is immutableFactory {"));
        assert!(block.contains("modifier onlyGovernance()"));
        assert!(block.contains("function _GovernanceAddress() internal view returns(address)"));
        assert!(block.contains("function _saltForGovernance() internal pure returns(bytes32)"));
        assert_eq!(block.matches(&ctx.salt).count(), 2);
    }

    #[test]
    fn names_are_not_escaped() {
        let engine = TemplateEngine::new(None).unwrap();
        let ctx = BlockContext {
            name: "<&>".to_string(),
            salt: "0x00".to_string(),
        };
        let block = engine.render_block(&ctx).unwrap();
        assert!(block.contains("contract immutable<&> is"));
    }

    #[test]
    fn no_crlf_in_rendered_output() {
        let doc = render(&[NameSaltPair::named("MadByte")]).unwrap();
        assert!(!doc.contains('\r'));
    }
}
