//! Serialized supply chain decoding.
//!
//! The flat request surface carries the supply chain in its serialized form:
//! `ver,complete!asi,sid,hp,rid,name,domain[,ext]` with one `!`-separated
//! group per node and URL-escaped node fields.

use std::fmt;

use serde_json::Value;

use crate::openrtb::{SupplyChain, SupplyChainNode};
use crate::query::percent_decode;

const NODE_FIELDS_WITHOUT_EXT: usize = 6;
const NODE_FIELDS_WITH_EXT: usize = 7;
const METADATA_FIELDS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct SChainError(String);

impl fmt::Display for SChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for SChainError {}

/// Deserialize the serialized supply chain value.
///
/// The first `!` group holds `ver,complete`; every following group is one
/// node with fields `asi,sid,hp,rid,name,domain` plus an optional trailing
/// JSON ext. `hp` is a required integer.
pub fn deserialize_supply_chain(serialized: &str) -> Result<SupplyChain, SChainError> {
    if serialized.is_empty() {
        return Err(SChainError("empty schain value".to_string()));
    }

    let groups: Vec<&str> = serialized.split('!').collect();
    if groups.len() < 2 {
        return Err(SChainError(
            "invalid schain value | schain value should have schain object and schain nodes"
                .to_string(),
        ));
    }

    let metadata: Vec<&str> = groups[0].split(',').collect();
    if metadata.len() != METADATA_FIELDS {
        return Err(SChainError(
            "invalid schain value | invalid schain object metadata".to_string(),
        ));
    }

    let mut schain = SupplyChain {
        ver: metadata[0].to_string(),
        complete: 0,
        nodes: Vec::with_capacity(groups.len() - 1),
        ext: None,
    };

    if !metadata[1].is_empty() {
        schain.complete = metadata[1].parse::<i64>().map_err(|_| {
            SChainError(format!("unable to convert [{}] to integer", metadata[1]))
        })?;
    }

    for group in &groups[1..] {
        schain.nodes.push(deserialize_node(group)?);
    }

    Ok(schain)
}

fn deserialize_node(group: &str) -> Result<SupplyChainNode, SChainError> {
    let fields: Vec<&str> = group.split(',').collect();
    if fields.len() < NODE_FIELDS_WITHOUT_EXT || fields.len() > NODE_FIELDS_WITH_EXT {
        return Err(SChainError(
            "invalid schain value | invalid schain node fields".to_string(),
        ));
    }

    let hp = fields[2]
        .parse::<i64>()
        .map_err(|_| SChainError(format!("unable to convert [{}] to integer", fields[2])))?;

    let mut ext = None;
    if fields.len() == NODE_FIELDS_WITH_EXT {
        let decoded = percent_decode(fields[6]);
        ext = serde_json::from_str::<Value>(&decoded)
            .ok()
            .or_else(|| serde_json::from_str::<Value>(fields[6]).ok());
    }

    Ok(SupplyChainNode {
        asi: percent_decode(fields[0]),
        sid: percent_decode(fields[1]),
        hp: Some(hp),
        rid: percent_decode(fields[3]),
        name: percent_decode(fields[4]),
        domain: percent_decode(fields[5]),
        ext,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_single_node() {
        let schain =
            deserialize_supply_chain("1.0,1!exchange.com,1234,1,bid-request-1,pub,pub.com")
                .unwrap();
        assert_eq!(schain.ver, "1.0");
        assert_eq!(schain.complete, 1);
        assert_eq!(schain.nodes.len(), 1);

        let node = &schain.nodes[0];
        assert_eq!(node.asi, "exchange.com");
        assert_eq!(node.sid, "1234");
        assert_eq!(node.hp, Some(1));
        assert_eq!(node.rid, "bid-request-1");
        assert_eq!(node.name, "pub");
        assert_eq!(node.domain, "pub.com");
    }

    #[test]
    fn test_deserialize_multiple_nodes_with_escapes() {
        let schain = deserialize_supply_chain(
            "1.0,1!a.com,s1,1,,,%20ad%20!b.com,s2,0,,,b.com",
        )
        .unwrap();
        assert_eq!(schain.nodes.len(), 2);
        assert_eq!(schain.nodes[0].domain, " ad ");
        assert_eq!(schain.nodes[1].hp, Some(0));
    }

    #[test]
    fn test_empty_complete_defaults_to_zero() {
        let schain = deserialize_supply_chain("1.0,!a.com,s1,1,,,a.com").unwrap();
        assert_eq!(schain.complete, 0);
    }

    #[test]
    fn test_missing_nodes_rejected() {
        assert!(deserialize_supply_chain("1.0,1").is_err());
        assert!(deserialize_supply_chain("").is_err());
    }

    #[test]
    fn test_bad_metadata_rejected() {
        assert!(deserialize_supply_chain("1.0!a.com,s1,1,,,a.com").is_err());
        assert!(deserialize_supply_chain("1.0,x!a.com,s1,1,,,a.com").is_err());
    }

    #[test]
    fn test_bad_node_field_count_rejected() {
        assert!(deserialize_supply_chain("1.0,1!a.com,s1,1").is_err());
    }

    #[test]
    fn test_non_integer_hp_rejected() {
        assert!(deserialize_supply_chain("1.0,1!a.com,s1,one,,,a.com").is_err());
    }
}
