pub mod shared;
pub mod ts;
pub mod zig;

use thiserror::Error;

pub const DEFAULT_ZIG_OUTPUT: &str = "src/chains.zig";
pub const DEFAULT_TS_OUTPUT: &str = "src/chains.ts";
pub const DEFAULT_SOURCE_LABEL: &str = "DefiLlama/chainlist";
pub const DEFAULT_REGEN_COMMAND: &str = "chainlist-gen codegen";

/* Invariant violations detected before emission. Any of these aborts the run. */
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
  #[error("identifier '{ident}' is produced by both chain {first_chain_id} and chain {second_chain_id}")]
  DuplicateIdentifier {
    ident: String,
    first_chain_id: u64,
    second_chain_id: u64,
  },

  /* Any top-level name (identifier, constant or auxiliary array) declared twice */
  #[error("declaration '{name}' is produced by both '{first_ident}' and '{second_ident}'")]
  DuplicateDeclaration {
    name: String,
    first_ident: String,
    second_ident: String,
  },
}

/* Provenance header shared by both targets (both use `//` line comments) */
pub(crate) fn provenance_header(source_label: &str, regen_command: &str) -> String {
  let single_line = |text: &str| text.replace(['\r', '\n'], " ");
  let mut output = String::new();
  output.push_str(&format!(
    "// This file is auto-generated from {}\n",
    single_line(source_label)
  ));
  output.push_str(&format!(
    "// Do not edit manually - run `{}` to regenerate\n",
    single_line(regen_command)
  ));
  output
}
