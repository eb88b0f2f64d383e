use crate::codegen::shared::{Catalog, CatalogEntry, quote};
use crate::codegen::{DEFAULT_REGEN_COMMAND, DEFAULT_SOURCE_LABEL, provenance_header};
use chain_types::{ChainRecord, Explorer};

const INDENT: &str = "  ";

pub struct TypeScriptCodeGenerator {
  options: TypeScriptCodeGeneratorOptions,
}

pub struct TypeScriptCodeGeneratorOptions {
  pub source_label: String,
  pub regen_command: String,
}

impl Default for TypeScriptCodeGeneratorOptions {
  fn default() -> Self {
    Self {
      source_label: DEFAULT_SOURCE_LABEL.to_string(),
      regen_command: DEFAULT_REGEN_COMMAND.to_string(),
    }
  }
}

impl TypeScriptCodeGenerator {
  pub fn new(options: TypeScriptCodeGeneratorOptions) -> Self {
    Self { options }
  }

  pub fn emit_code(&self, catalog: &Catalog) -> String {
    let mut output = provenance_header(&self.options.source_label, &self.options.regen_command);
    output.push('\n');

    output.push_str(&emit_type_definitions());

    output.push_str("// Chain IDs\n");
    for entry in catalog.entries() {
      output.push_str(&format!(
        "export const {} = {};\n",
        entry.const_name, entry.record.chain_id
      ));
    }
    output.push('\n');

    for entry in catalog.entries() {
      output.push_str(&emit_chain(entry));
    }

    output.push_str("export const allChains: Chain[] = [\n");
    for entry in catalog.entries() {
      output.push_str(&format!("  {},\n", entry.ident));
    }
    output.push_str("];\n\n");

    output.push_str("export function getChainById(chainId: number): Chain | undefined {\n");
    output.push_str("  return allChains.find((chain) => chain.chainId === chainId);\n");
    output.push_str("}\n\n");

    /* Built once at module load */
    output.push_str("export const chainById: Record<number, Chain> = Object.fromEntries(\n");
    output.push_str("  allChains.map((chain) => [chain.chainId, chain])\n");
    output.push_str(");\n");

    output
  }
}

fn emit_type_definitions() -> String {
  let mut output = String::new();

  output.push_str("export interface NativeCurrency {\n");
  output.push_str("  name: string;\n");
  output.push_str("  symbol: string;\n");
  output.push_str("  decimals: number;\n");
  output.push_str("}\n\n");

  output.push_str("export interface Explorer {\n");
  output.push_str("  name: string;\n");
  output.push_str("  url: string;\n");
  output.push_str("  standard?: string;\n");
  output.push_str("}\n\n");

  output.push_str("export interface Chain {\n");
  output.push_str("  name: string;\n");
  output.push_str("  chain: string;\n");
  output.push_str("  chainId: number;\n");
  output.push_str("  networkId: number;\n");
  output.push_str("  shortName: string;\n");
  output.push_str("  rpc: string[];\n");
  output.push_str("  nativeCurrency: NativeCurrency;\n");
  output.push_str("  infoURL?: string;\n");
  output.push_str("  explorers?: Explorer[];\n");
  output.push_str("}\n\n");

  output
}

fn emit_chain(entry: &CatalogEntry) -> String {
  format!(
    "export const {}: Chain = {};\n\n",
    entry.ident,
    chain_literal(&entry.record, 0)
  )
}

/* Object literal in `JSON.stringify(value, null, 2)` layout. Absent optionals are left out. */
fn chain_literal(record: &ChainRecord, depth: usize) -> String {
  let rpc: Vec<String> = record.http_rpc_urls().map(quote).collect();

  let mut fields = vec![
    ("name", quote(&record.name)),
    ("chain", quote(&record.chain)),
    ("chainId", record.chain_id.to_string()),
    ("networkId", record.network_id.to_string()),
    ("shortName", quote(&record.short_name)),
    ("rpc", array_literal(rpc, depth + 1)),
    (
      "nativeCurrency",
      object_literal(
        vec![
          ("name", quote(&record.native_currency.name)),
          ("symbol", quote(&record.native_currency.symbol)),
          ("decimals", record.native_currency.decimals.to_string()),
        ],
        depth + 1,
      ),
    ),
  ];

  if let Some(info_url) = &record.info_url {
    fields.push(("infoURL", quote(info_url)));
  }
  if let Some(explorers) = &record.explorers {
    let items = explorers
      .iter()
      .map(|explorer| explorer_literal(explorer, depth + 2))
      .collect();
    fields.push(("explorers", array_literal(items, depth + 1)));
  }

  object_literal(fields, depth)
}

fn explorer_literal(explorer: &Explorer, depth: usize) -> String {
  object_literal(
    vec![("name", quote(&explorer.name)), ("url", quote(&explorer.url))],
    depth,
  )
}

/* Values must already be rendered for `depth + 1` */
fn object_literal(fields: Vec<(&str, String)>, depth: usize) -> String {
  if fields.is_empty() {
    return "{}".to_string();
  }
  let pad = INDENT.repeat(depth + 1);
  let body: Vec<String> = fields
    .into_iter()
    .map(|(key, value)| format!("{}{}: {}", pad, quote(key), value))
    .collect();
  format!("{{\n{}\n{}}}", body.join(",\n"), INDENT.repeat(depth))
}

fn array_literal(items: Vec<String>, depth: usize) -> String {
  if items.is_empty() {
    return "[]".to_string();
  }
  let pad = INDENT.repeat(depth + 1);
  let body: Vec<String> = items.into_iter().map(|item| format!("{}{}", pad, item)).collect();
  format!("[\n{}\n{}]", body.join(",\n"), INDENT.repeat(depth))
}
