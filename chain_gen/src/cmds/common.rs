/* Common utilities shared between analyze and codegen commands */

use crate::codegen::shared::Catalog;
use chain_loader::{ExtraRpcsSource, ExtraRpcsStatus, RegistryLoader, SkippedEntry};
use std::path::{Path, PathBuf};
use tracing::info;

/* Registry contents ready for emission */
pub struct LoadedRegistry {
  pub catalog: Catalog,
  pub skipped: Vec<SkippedEntry>,
  pub extra_rpcs: ExtraRpcsStatus,
}

/* Load the registry, probe the extra rpc source, and build the catalog.
   Skipped entries are tolerated; an identifier collision is not. */
pub fn load_registry(
  registry_dir: &Path,
  extra_rpcs: Option<PathBuf>,
  verbose: bool,
) -> anyhow::Result<LoadedRegistry> {
  let loader = RegistryLoader::new(registry_dir);
  let report = loader.load()?;

  if verbose {
    println!(
      "[~] Read {} registry entries ({} skipped)",
      report.record_count() + report.skipped_count(),
      report.skipped_count()
    );
    for skipped in &report.skipped {
      println!("    [!] {}: {}", skipped.file_name, skipped.error);
    }
  }

  /* Probed only; extra endpoints are never merged into records */
  let extra_rpcs = ExtraRpcsSource::new(extra_rpcs).probe();
  if let ExtraRpcsStatus::Available { bytes } = &extra_rpcs {
    info!(bytes = *bytes, "extra rpc source present; augmentation is not applied");
  }

  let catalog = Catalog::new(report.records)?;

  Ok(LoadedRegistry {
    catalog,
    skipped: report.skipped,
    extra_rpcs,
  })
}
