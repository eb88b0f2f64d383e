/* Shared fixtures for generator tests */
#![allow(dead_code)]

use chain_gen::codegen::shared::Catalog;
use chain_types::{ChainRecord, Explorer, NativeCurrency, RpcEndpoint, RpcEndpointInfo};

pub fn record(name: &str, short_name: &str, chain_id: u64) -> ChainRecord {
    ChainRecord {
        name: name.to_string(),
        chain: "ETH".to_string(),
        chain_id,
        network_id: chain_id,
        short_name: short_name.to_string(),
        rpc: vec![RpcEndpoint::Url(format!("https://rpc.{}.example", short_name))],
        native_currency: NativeCurrency {
            name: "Ether".to_string(),
            symbol: "ETH".to_string(),
            decimals: 18,
        },
        info_url: None,
        explorers: None,
    }
}

pub fn explorer(name: &str, url: &str) -> Explorer {
    Explorer {
        name: name.to_string(),
        url: url.to_string(),
        standard: Some("EIP3091".to_string()),
    }
}

/* eth (1) with explorers and info url, matic (137) without */
pub fn eth_and_matic() -> Catalog {
    let mut eth = record("Ethereum Mainnet", "eth", 1);
    eth.info_url = Some("https://ethereum.org".to_string());
    eth.explorers = Some(vec![explorer("etherscan", "https://etherscan.io")]);

    let mut matic = record("Polygon Mainnet", "matic", 137);
    matic.chain = "Polygon".to_string();
    matic.native_currency.name = "POL".to_string();
    matic.native_currency.symbol = "POL".to_string();

    Catalog::new(vec![matic, eth]).unwrap()
}

/* Rpc list mixing every endpoint form the registry uses */
pub fn mixed_rpcs() -> Vec<RpcEndpoint> {
    vec![
        RpcEndpoint::Url("https://first.example".to_string()),
        RpcEndpoint::Url("wss://socket.example".to_string()),
        RpcEndpoint::Structured(RpcEndpointInfo {
            url: "https://structured.example".to_string(),
            tracking: Some("none".to_string()),
            is_open_source: Some(true),
        }),
        RpcEndpoint::Url("http://second.example".to_string()),
        RpcEndpoint::Url("ipc:///tmp/geth.ipc".to_string()),
        RpcEndpoint::Url("https://third.example".to_string()),
    ]
}

/* Lines strictly between `open` and the next line equal to `close` */
pub fn block_lines<'a>(source: &'a str, open: &str, close: &str) -> Vec<&'a str> {
    let mut lines = source.lines().skip_while(|line| *line != open);
    assert!(lines.next().is_some(), "block opening {:?} not found", open);
    lines.take_while(|line| *line != close).collect()
}

/* Undo Zig string literal escaping for the escapes the generator emits */
pub fn unescape_zig_literal(literal: &str) -> String {
    let inner = literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .expect("quoted literal");
    let mut out = String::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => {
                assert_eq!(chars.next(), Some('{'));
                let hex: String = chars.by_ref().take_while(|c| *c != '}').collect();
                let code = u32::from_str_radix(&hex, 16).unwrap();
                out.push(char::from_u32(code).unwrap());
            }
            other => panic!("unexpected escape {:?}", other),
        }
    }
    out
}
