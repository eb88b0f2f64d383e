/* Codegen command - generate the Zig and TypeScript chain catalogs */

use super::common::load_registry;
use crate::codegen::ts::{TypeScriptCodeGenerator, TypeScriptCodeGeneratorOptions};
use crate::codegen::zig::{ZigCodeGenerator, ZigCodeGeneratorOptions};
use crate::codegen::{
  DEFAULT_REGEN_COMMAND, DEFAULT_SOURCE_LABEL, DEFAULT_TS_OUTPUT, DEFAULT_ZIG_OUTPUT,
};
use anyhow::{Context, bail};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

pub struct CodegenConfig {
  pub registry_dir: PathBuf,
  pub extra_rpcs: Option<PathBuf>,
  pub zig_output: PathBuf,
  pub ts_output: PathBuf,
  pub source_label: String,
  pub regen_command: String,
  pub verbose: bool,
}

impl CodegenConfig {
  pub fn new(registry_dir: impl Into<PathBuf>) -> Self {
    Self {
      registry_dir: registry_dir.into(),
      extra_rpcs: None,
      zig_output: PathBuf::from(DEFAULT_ZIG_OUTPUT),
      ts_output: PathBuf::from(DEFAULT_TS_OUTPUT),
      source_label: DEFAULT_SOURCE_LABEL.to_string(),
      regen_command: DEFAULT_REGEN_COMMAND.to_string(),
      verbose: false,
    }
  }
}

/* What a successful run produced */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenSummary {
  pub chains: usize,
  pub skipped: usize,
  pub zig_output: PathBuf,
  pub ts_output: PathBuf,
}

/* Execute the codegen command */
pub fn run(config: &CodegenConfig) -> anyhow::Result<CodegenSummary> {
  if config.verbose {
    println!("Chainlist Generator - Code Generation Tool");
    println!("==========================================\n");
    println!("[~] Configuration:");
    println!("  Registry directory: {}", config.registry_dir.display());
    if let Some(extra_rpcs) = &config.extra_rpcs {
      println!("  Extra rpc source: {}", extra_rpcs.display());
    }
    println!("  Zig output: {}", config.zig_output.display());
    println!("  TypeScript output: {}", config.ts_output.display());
    println!();
  }

  println!("[~] Loading chain data from {}...", config.registry_dir.display());
  let loaded = load_registry(&config.registry_dir, config.extra_rpcs.clone(), config.verbose)?;
  let catalog = &loaded.catalog;
  println!("[~] Loaded {} chains", catalog.len());

  /* Render both artifacts before touching the filesystem */
  println!("[~] Generating Zig code...");
  let zig_code = ZigCodeGenerator::new(ZigCodeGeneratorOptions {
    source_label: config.source_label.clone(),
    regen_command: config.regen_command.clone(),
  })
  .emit_code(catalog);

  println!("[~] Generating TypeScript code...");
  let ts_code = TypeScriptCodeGenerator::new(TypeScriptCodeGeneratorOptions {
    source_label: config.source_label.clone(),
    regen_command: config.regen_command.clone(),
  })
  .emit_code(catalog);

  /* Stage both next to their targets; nothing is replaced until both are staged */
  let staged = vec![
    stage_artifact(&config.zig_output, &zig_code)?,
    stage_artifact(&config.ts_output, &ts_code)?,
  ];
  for artifact in staged {
    let path = artifact.path.clone();
    artifact.persist()?;
    println!("[✓] Generated {}", path.display());
  }

  println!("\n[✓] Generation complete!");
  println!("  Chains: {}", catalog.len());
  if !loaded.skipped.is_empty() {
    println!("  Skipped entries: {}", loaded.skipped.len());
  }

  Ok(CodegenSummary {
    chains: catalog.len(),
    skipped: loaded.skipped.len(),
    zig_output: config.zig_output.clone(),
    ts_output: config.ts_output.clone(),
  })
}

/* Rendered artifact held in a temporary file in its target directory */
struct StagedArtifact {
  path: PathBuf,
  file: NamedTempFile,
}

impl StagedArtifact {
  fn persist(self) -> anyhow::Result<()> {
    let bytes = self.file.as_file().metadata().map(|m| m.len()).unwrap_or(0);
    self
      .file
      .persist(&self.path)
      .map_err(|err| err.error)
      .with_context(|| format!("writing {}", self.path.display()))?;
    debug!(path = %self.path.display(), bytes, "wrote artifact");
    Ok(())
  }
}

fn stage_artifact(path: &Path, contents: &str) -> anyhow::Result<StagedArtifact> {
  if path.is_dir() {
    bail!("output path {} is a directory", path.display());
  }

  let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
    Some(parent) => {
      std::fs::create_dir_all(parent)
        .with_context(|| format!("creating output directory {}", parent.display()))?;
      parent
    }
    None => Path::new("."),
  };

  let mut file = tempfile::Builder::new()
    .prefix(".chainlist-gen")
    .tempfile_in(parent)
    .with_context(|| format!("staging {}", path.display()))?;
  file
    .write_all(contents.as_bytes())
    .and_then(|()| file.flush())
    .with_context(|| format!("staging {}", path.display()))?;

  Ok(StagedArtifact {
    path: path.to_path_buf(),
    file,
  })
}
