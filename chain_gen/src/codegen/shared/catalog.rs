use super::naming::{chain_id_const_name, identifier_label, sanitize};
use crate::codegen::GenError;
use chain_loader::sort_by_chain_id;
use chain_types::ChainRecord;
use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::warn;

/* Largest integer a JavaScript number holds exactly (`Number.MAX_SAFE_INTEGER`) */
pub const MAX_SAFE_JS_INTEGER: u64 = (1 << 53) - 1;

/* Every top-level name an entry declares across both targets */
fn declared_names(ident: &str, const_name: &str) -> [String; 4] {
  [
    ident.to_string(),
    const_name.to_string(),
    format!("{}_rpcs", ident),
    format!("{}_explorers", ident),
  ]
}

/* One chain together with the names it is emitted under */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
  /* Sanitized identifier, shared verbatim by both targets */
  pub ident: String,
  /* `CHAIN_ID_<IDENT>` */
  pub const_name: String,
  pub record: ChainRecord,
}

/* Sorted chain records with identifiers assigned and checked for collisions.
   Both emitters render from the same catalog, so they agree on names and order. */
#[derive(Debug, Clone, Default)]
pub struct Catalog {
  entries: Vec<CatalogEntry>,
  /* ident -> position in `entries` */
  by_ident: IndexMap<String, usize>,
}

impl Catalog {
  pub fn new(mut records: Vec<ChainRecord>) -> Result<Self, GenError> {
    sort_by_chain_id(&mut records);

    let mut entries = Vec::with_capacity(records.len());
    let mut by_ident: IndexMap<String, usize> = IndexMap::with_capacity(records.len());
    /* declared name -> ident of the entry that declared it */
    let mut declared: HashMap<String, String> = HashMap::with_capacity(records.len() * 4);

    for record in records {
      let ident = sanitize(identifier_label(&record), record.chain_id);
      let const_name = chain_id_const_name(&ident);

      if let Some(&existing) = by_ident.get(&ident) {
        let first: &CatalogEntry = &entries[existing];
        return Err(GenError::DuplicateIdentifier {
          ident,
          first_chain_id: first.record.chain_id,
          second_chain_id: record.chain_id,
        });
      }

      let names = declared_names(&ident, &const_name);
      if let Some((name, first_ident)) = names
        .iter()
        .find_map(|name| declared.get(name).map(|owner| (name, owner)))
      {
        return Err(GenError::DuplicateDeclaration {
          name: name.clone(),
          first_ident: first_ident.clone(),
          second_ident: ident,
        });
      }

      if record.chain_id > MAX_SAFE_JS_INTEGER {
        warn!(
          chain_id = record.chain_id,
          ident = %ident,
          "chain id exceeds Number.MAX_SAFE_INTEGER; TypeScript lookups by this id are inexact"
        );
      }

      by_ident.insert(ident.clone(), entries.len());
      for name in names {
        declared.insert(name, ident.clone());
      }
      entries.push(CatalogEntry {
        ident,
        const_name,
        record,
      });
    }

    Ok(Self { entries, by_ident })
  }

  /* Entries in ascending chain id order */
  pub fn entries(&self) -> &[CatalogEntry] {
    &self.entries
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn identifiers(&self) -> impl Iterator<Item = &str> {
    self.by_ident.keys().map(String::as_str)
  }

  pub fn get(&self, ident: &str) -> Option<&CatalogEntry> {
    self.by_ident.get(ident).map(|&index| &self.entries[index])
  }

  /* Same semantics as the generated `getChainById`: first match in catalog order */
  pub fn find_by_chain_id(&self, chain_id: u64) -> Option<&CatalogEntry> {
    self.entries.iter().find(|entry| entry.record.chain_id == chain_id)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chain_types::NativeCurrency;

  fn record(name: &str, short_name: &str, chain_id: u64) -> ChainRecord {
    ChainRecord {
      name: name.to_string(),
      chain: "TST".to_string(),
      chain_id,
      network_id: chain_id,
      short_name: short_name.to_string(),
      rpc: Vec::new(),
      native_currency: NativeCurrency {
        name: "Test".to_string(),
        symbol: "TST".to_string(),
        decimals: 18,
      },
      info_url: None,
      explorers: None,
    }
  }

  #[test]
  fn assigns_identifiers_in_chain_id_order() {
    let catalog = Catalog::new(vec![
      record("Polygon", "matic", 137),
      record("Ethereum", "eth", 1),
    ])
    .unwrap();

    let idents: Vec<&str> = catalog.identifiers().collect();
    assert_eq!(idents, vec!["eth_1", "matic_137"]);
    assert_eq!(catalog.entries()[0].const_name, "CHAIN_ID_ETH_1");
    assert_eq!(catalog.get("matic_137").unwrap().record.chain_id, 137);
  }

  #[test]
  fn falls_back_to_display_name() {
    let catalog = Catalog::new(vec![record("Some Net", "", 77)]).unwrap();
    assert_eq!(catalog.entries()[0].ident, "Some_Net_77");
  }

  #[test]
  fn same_short_name_different_ids() {
    let catalog = Catalog::new(vec![record("A", "test", 5), record("B", "test", 6)]).unwrap();
    let idents: Vec<&str> = catalog.identifiers().collect();
    assert_eq!(idents, vec!["test_5", "test_6"]);
  }

  #[test]
  fn duplicate_identifier_is_rejected() {
    let err = Catalog::new(vec![record("A", "dup", 9), record("B", "dup", 9)]).unwrap_err();
    assert_eq!(
      err,
      GenError::DuplicateIdentifier {
        ident: "dup_9".to_string(),
        first_chain_id: 9,
        second_chain_id: 9,
      }
    );
  }

  #[test]
  fn case_only_difference_collides_on_constant() {
    let err = Catalog::new(vec![record("A", "eth", 1), record("B", "ETH", 1)]).unwrap_err();
    assert!(matches!(err, GenError::DuplicateDeclaration { ref name, .. } if name == "CHAIN_ID_ETH_1"));
  }

  #[test]
  fn identifier_colliding_with_another_constant_is_rejected() {
    let err = Catalog::new(vec![record("A", "x", 1), record("B", "CHAIN_ID_X", 1)]).unwrap_err();
    assert_eq!(
      err,
      GenError::DuplicateDeclaration {
        name: "CHAIN_ID_X_1".to_string(),
        first_ident: "x_1".to_string(),
        second_ident: "CHAIN_ID_X_1".to_string(),
      }
    );
  }

  #[test]
  fn constant_colliding_with_an_earlier_identifier_is_rejected() {
    let err = Catalog::new(vec![record("A", "CHAIN_ID_X", 1), record("B", "x", 1)]).unwrap_err();
    assert!(matches!(
      err,
      GenError::DuplicateDeclaration { ref name, ref first_ident, ref second_ident }
        if name == "CHAIN_ID_X_1" && first_ident == "CHAIN_ID_X_1" && second_ident == "x_1"
    ));
  }

  #[test]
  fn ids_beyond_js_precision_are_kept() {
    let big = MAX_SAFE_JS_INTEGER + 2;
    let catalog = Catalog::new(vec![record("Big", "big", big), record("Edge", "edge", MAX_SAFE_JS_INTEGER)]).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.find_by_chain_id(big).unwrap().ident, format!("big_{}", big));
  }

  #[test]
  fn lookup_returns_first_match_or_none() {
    let catalog = Catalog::new(vec![record("A", "a", 3), record("B", "b", 3), record("C", "c", 4)]).unwrap();
    assert_eq!(catalog.find_by_chain_id(3).unwrap().ident, "a_3");
    assert_eq!(catalog.find_by_chain_id(4).unwrap().ident, "c_4");
    assert!(catalog.find_by_chain_id(999).is_none());
  }
}
