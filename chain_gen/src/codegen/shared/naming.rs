use chain_types::ChainRecord;

/* Label an identifier is derived from: the short name when present, else the display name */
pub fn identifier_label(record: &ChainRecord) -> &str {
  if record.short_name.is_empty() {
    &record.name
  } else {
    &record.short_name
  }
}

/* Map a chain label to an identifier valid in both targets.
   Non-word chars become `_`, a leading digit gets a `_` prefix, `_` runs collapse,
   and `_<chain_id>` is always appended. Total for any input. */
pub fn sanitize(label: &str, chain_id: u64) -> String {
  let replaced: String = label
    .chars()
    .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
    .collect();

  let prefixed = if replaced.starts_with(|c: char| c.is_ascii_digit()) {
    format!("_{}", replaced)
  } else {
    replaced
  };

  let mut sanitized = String::with_capacity(prefixed.len() + 21);
  for c in prefixed.chars() {
    if c == '_' && sanitized.ends_with('_') {
      continue;
    }
    sanitized.push(c);
  }

  sanitized.push('_');
  sanitized.push_str(&chain_id.to_string());
  sanitized
}

pub fn chain_id_const_name(ident: &str) -> String {
  format!("CHAIN_ID_{}", ident.to_ascii_uppercase())
}
