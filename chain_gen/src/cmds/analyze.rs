/* Analyze command - show how registry entries map onto generated names */

use super::common::load_registry;
use chain_loader::ExtraRpcsStatus;
use std::path::PathBuf;

/* Execute the analyze command */
pub fn run(registry_dir: PathBuf, extra_rpcs: Option<PathBuf>) -> anyhow::Result<()> {
  println!("Chainlist Generator - Registry Analysis");
  println!("=======================================\n");

  let loaded = load_registry(&registry_dir, extra_rpcs, false)?;
  let catalog = &loaded.catalog;

  println!(
    "[~] {} chain(s) from {}\n",
    catalog.len(),
    registry_dir.display()
  );
  println!(
    "  {:>12}  {:<32}  {:<40}  {:>4}  {:>9}",
    "CHAIN ID", "IDENTIFIER", "CONSTANT", "RPCS", "EXPLORERS"
  );
  for entry in catalog.entries() {
    println!(
      "  {:>12}  {:<32}  {:<40}  {:>4}  {:>9}",
      entry.record.chain_id,
      entry.ident,
      entry.const_name,
      entry.record.http_rpc_urls().count(),
      entry.record.explorer_list().len()
    );
  }

  if loaded.skipped.is_empty() {
    println!("\n[✓] No entries skipped");
  } else {
    println!("\n[✗] {} skipped entries:", loaded.skipped.len());
    for skipped in &loaded.skipped {
      println!("  [!] {}: {}", skipped.file_name, skipped.error);
    }
  }

  match &loaded.extra_rpcs {
    ExtraRpcsStatus::NotConfigured => {}
    ExtraRpcsStatus::Missing => println!("[~] Extra rpc source: missing"),
    ExtraRpcsStatus::Unreadable(reason) => println!("[~] Extra rpc source: unreadable ({})", reason),
    ExtraRpcsStatus::Available { bytes } => {
      println!("[~] Extra rpc source: present ({} bytes, not applied)", bytes)
    }
  }

  Ok(())
}
