use crate::codegen::shared::{Catalog, CatalogEntry, quote};
use crate::codegen::{DEFAULT_REGEN_COMMAND, DEFAULT_SOURCE_LABEL, provenance_header};

pub struct ZigCodeGenerator {
  options: ZigCodeGeneratorOptions,
}

pub struct ZigCodeGeneratorOptions {
  pub source_label: String,
  pub regen_command: String,
}

impl Default for ZigCodeGeneratorOptions {
  fn default() -> Self {
    Self {
      source_label: DEFAULT_SOURCE_LABEL.to_string(),
      regen_command: DEFAULT_REGEN_COMMAND.to_string(),
    }
  }
}

impl ZigCodeGenerator {
  pub fn new(options: ZigCodeGeneratorOptions) -> Self {
    Self { options }
  }

  pub fn emit_code(&self, catalog: &Catalog) -> String {
    let mut output = provenance_header(&self.options.source_label, &self.options.regen_command);
    output.push('\n');
    output.push_str("const std = @import(\"std\");\n\n");

    output.push_str(&emit_type_definitions());

    output.push_str("// Chain IDs\n");
    for entry in catalog.entries() {
      output.push_str(&format!(
        "pub const {}: u64 = {};\n",
        entry.const_name, entry.record.chain_id
      ));
    }
    output.push('\n');

    for entry in catalog.entries() {
      output.push_str(&emit_chain(entry));
    }

    output.push_str("pub const all_chains = [_]Chain{\n");
    for entry in catalog.entries() {
      output.push_str(&format!("    {},\n", entry.ident));
    }
    output.push_str("};\n\n");

    output.push_str(&emit_lookup_fn());
    output
  }
}

fn emit_type_definitions() -> String {
  let mut output = String::new();

  output.push_str("pub const NativeCurrency = struct {\n");
  output.push_str("    name: []const u8,\n");
  output.push_str("    symbol: []const u8,\n");
  output.push_str("    decimals: u8,\n");
  output.push_str("};\n\n");

  output.push_str("pub const Explorer = struct {\n");
  output.push_str("    name: []const u8,\n");
  output.push_str("    url: []const u8,\n");
  output.push_str("};\n\n");

  output.push_str("pub const Chain = struct {\n");
  output.push_str("    name: []const u8,\n");
  output.push_str("    chain: []const u8,\n");
  output.push_str("    chain_id: u64,\n");
  output.push_str("    network_id: u64,\n");
  output.push_str("    short_name: []const u8,\n");
  output.push_str("    rpc: []const []const u8,\n");
  output.push_str("    native_currency: NativeCurrency,\n");
  output.push_str("    info_url: ?[]const u8,\n");
  output.push_str("    explorers: []const Explorer,\n");
  output.push_str("};\n\n");

  output
}

/* Slices need a named backing array, so rpcs and explorers are declared ahead of the chain */
fn emit_chain(entry: &CatalogEntry) -> String {
  let ident = &entry.ident;
  let record = &entry.record;
  let mut output = String::new();

  output.push_str(&format!("pub const {}_rpcs = [_][]const u8{{\n", ident));
  for url in record.http_rpc_urls() {
    output.push_str(&format!("    {},\n", quote(url)));
  }
  output.push_str("};\n\n");

  if record.has_explorers() {
    output.push_str(&format!("pub const {}_explorers = [_]Explorer{{\n", ident));
    for explorer in record.explorer_list() {
      output.push_str("    .{\n");
      output.push_str(&format!("        .name = {},\n", quote(&explorer.name)));
      output.push_str(&format!("        .url = {},\n", quote(&explorer.url)));
      output.push_str("    },\n");
    }
    output.push_str("};\n\n");
  }

  let info_url = match &record.info_url {
    Some(url) => quote(url),
    None => "null".to_string(),
  };
  let explorers = if record.has_explorers() {
    format!("&{}_explorers", ident)
  } else {
    "&.{}".to_string()
  };

  output.push_str(&format!("pub const {} = Chain{{\n", ident));
  output.push_str(&format!("    .name = {},\n", quote(&record.name)));
  output.push_str(&format!("    .chain = {},\n", quote(&record.chain)));
  output.push_str(&format!("    .chain_id = {},\n", record.chain_id));
  output.push_str(&format!("    .network_id = {},\n", record.network_id));
  output.push_str(&format!("    .short_name = {},\n", quote(&record.short_name)));
  output.push_str(&format!("    .rpc = &{}_rpcs,\n", ident));
  output.push_str("    .native_currency = .{\n");
  output.push_str(&format!("        .name = {},\n", quote(&record.native_currency.name)));
  output.push_str(&format!("        .symbol = {},\n", quote(&record.native_currency.symbol)));
  output.push_str(&format!("        .decimals = {},\n", record.native_currency.decimals));
  output.push_str("    },\n");
  output.push_str(&format!("    .info_url = {},\n", info_url));
  output.push_str(&format!("    .explorers = {},\n", explorers));
  output.push_str("};\n\n");

  output
}

fn emit_lookup_fn() -> String {
  let mut output = String::new();
  output.push_str("pub fn getChainById(chain_id: u64) ?Chain {\n");
  output.push_str("    for (all_chains) |chain| {\n");
  output.push_str("        if (chain.chain_id == chain_id) return chain;\n");
  output.push_str("    }\n");
  output.push_str("    return null;\n");
  output.push_str("}\n");
  output
}
