use serde_derive::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Explorer {
    pub name: String,
    pub url: String,
    /// Explorer API standard (e.g. "EIP3091"). Kept in the model, never emitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard: Option<String>,
}

/* Object-form rpc entry, as used by registries that annotate endpoints with tracking info */
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RpcEndpointInfo {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_open_source: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(untagged)]
pub enum RpcEndpoint {
    /// Plain URL string
    Url(String),
    /// Structured entry with a `url` field
    Structured(RpcEndpointInfo),
    /// Anything else the registry carries; never emitted
    Other(serde_json::Value),
}

impl RpcEndpoint {
    /* Plain string entry with an http(s) scheme, if this is one */
    pub fn as_http_url(&self) -> Option<&str> {
        match self {
            RpcEndpoint::Url(url) if url.starts_with("http") => Some(url),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChainRecord {
    pub name: String,
    /// Chain family label ("ETH", "Polygon", ...)
    #[serde(default)]
    pub chain: String,
    pub chain_id: u64,
    #[serde(default)]
    pub network_id: u64,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub rpc: Vec<RpcEndpoint>,
    pub native_currency: NativeCurrency,
    #[serde(default, rename = "infoURL", skip_serializing_if = "Option::is_none")]
    pub info_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorers: Option<Vec<Explorer>>,
}

impl ChainRecord {
    /* Rpc URLs that end up in generated code, in registry order */
    pub fn http_rpc_urls(&self) -> impl Iterator<Item = &str> + '_ {
        self.rpc.iter().filter_map(RpcEndpoint::as_http_url)
    }

    /* Explorers as a slice; absent and empty lists look the same here */
    pub fn explorer_list(&self) -> &[Explorer] {
        self.explorers.as_deref().unwrap_or(&[])
    }

    pub fn has_explorers(&self) -> bool {
        !self.explorer_list().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "name": "Ethereum Mainnet",
            "chain": "ETH",
            "chainId": 1,
            "networkId": 1,
            "shortName": "eth",
            "rpc": [
                "https://eth.llamarpc.com",
                { "url": "https://rpc.ankr.com/eth", "tracking": "none", "isOpenSource": true },
                "wss://mainnet.infura.io/ws/v3/${INFURA_API_KEY}",
                "http://localhost:8545"
            ],
            "nativeCurrency": { "name": "Ether", "symbol": "ETH", "decimals": 18 },
            "infoURL": "https://ethereum.org",
            "explorers": [
                { "name": "etherscan", "url": "https://etherscan.io", "standard": "EIP3091" }
            ]
        })
    }

    #[test]
    fn decodes_registry_shape() {
        let record: ChainRecord = serde_json::from_value(sample()).unwrap();
        assert_eq!(record.chain_id, 1);
        assert_eq!(record.short_name, "eth");
        assert_eq!(record.info_url.as_deref(), Some("https://ethereum.org"));
        assert_eq!(record.native_currency.decimals, 18);
        assert_eq!(record.explorer_list()[0].standard.as_deref(), Some("EIP3091"));
        assert!(matches!(record.rpc[1], RpcEndpoint::Structured(_)));
    }

    #[test]
    fn http_filter_keeps_order_and_drops_structured() {
        let record: ChainRecord = serde_json::from_value(sample()).unwrap();
        let urls: Vec<&str> = record.http_rpc_urls().collect();
        assert_eq!(urls, vec!["https://eth.llamarpc.com", "http://localhost:8545"]);
    }

    #[test]
    fn optional_fields_default() {
        let record: ChainRecord = serde_json::from_value(json!({
            "name": "Bare",
            "chainId": 42,
            "nativeCurrency": { "name": "B", "symbol": "B", "decimals": 0 }
        }))
        .unwrap();
        assert_eq!(record.network_id, 0);
        assert!(record.short_name.is_empty());
        assert!(record.rpc.is_empty());
        assert!(record.info_url.is_none());
        assert!(record.explorers.is_none());
        assert!(!record.has_explorers());
    }

    #[test]
    fn odd_rpc_entries_do_not_fail_the_record() {
        let record: ChainRecord = serde_json::from_value(json!({
            "name": "Odd",
            "chainId": 7,
            "rpc": [42, { "note": "no url" }, "https://ok.example"],
            "nativeCurrency": { "name": "O", "symbol": "O", "decimals": 18 }
        }))
        .unwrap();
        assert_eq!(record.rpc.len(), 3);
        assert_eq!(record.http_rpc_urls().collect::<Vec<_>>(), vec!["https://ok.example"]);
    }

    #[test]
    fn decimals_must_fit_a_byte() {
        let result: Result<ChainRecord, _> = serde_json::from_value(json!({
            "name": "Wide",
            "chainId": 9,
            "nativeCurrency": { "name": "W", "symbol": "W", "decimals": 256 }
        }));
        assert!(result.is_err());
    }
}
