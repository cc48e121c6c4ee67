//! Request-level setters that need more than a typed field write: the
//! serialized supply chain, regulatory mirrors, and the nested request
//! extension blocks.

use serde_json::Value;

use crate::keys;
use crate::parser::{ext_map, ext_set_path, RequestParser};
use crate::query::FieldError;
use crate::schain;

/// Write `value` at a nested path under the request-level ext object.
pub(crate) fn set_req_ext_path(
    p: &mut RequestParser,
    key: &str,
    path: &[&str],
    value: Value,
) -> Result<(), FieldError> {
    let map = ext_map(&mut p.ortb_mut().ext, key)?;
    ext_set_path(map, path, value);
    Ok(())
}

/// Decode the serialized supply chain into `source.schain`.
///
/// A malformed value is logged and dropped rather than recorded as a field
/// error; the rest of the request is unaffected.
pub(crate) fn source_schain(p: &mut RequestParser) -> Result<(), FieldError> {
    let raw = match p.values().get(keys::SRC_SCHAIN).map(str::to_string) {
        Some(v) => v,
        None => return Ok(()),
    };
    match schain::deserialize_supply_chain(&raw) {
        Ok(sc) => p.source().schain = Some(sc),
        Err(e) => {
            tracing::warn!(key = keys::SRC_SCHAIN, error = %e, "dropping unparsable schain");
        }
    }
    Ok(())
}

/// GDPR applicability: mirrored into both the typed `regs.gdpr` field and
/// the regs extension object.
pub(crate) fn regs_ext_gdpr(p: &mut RequestParser) -> Result<(), FieldError> {
    if let Some(v) = p.values().get_int(keys::REGS_EXT_GDPR)? {
        let regs = p.regs();
        regs.gdpr = Some(v);
        let map = ext_map(&mut regs.ext, keys::REGS_EXT_GDPR)?;
        map.insert(keys::EXT_GDPR.to_string(), Value::from(v));
    }
    Ok(())
}

/// US privacy string: mirrored like GDPR above.
pub(crate) fn regs_ext_us_privacy(p: &mut RequestParser) -> Result<(), FieldError> {
    if let Some(v) = p.values().get(keys::REGS_EXT_US_PRIVACY).map(str::to_string) {
        let regs = p.regs();
        regs.us_privacy = Some(v.clone());
        let map = ext_map(&mut regs.ext, keys::REGS_EXT_US_PRIVACY)?;
        map.insert(keys::EXT_US_PRIVACY.to_string(), Value::String(v));
    }
    Ok(())
}

/// Custom key/value targeting passed as nested query parameters
/// (`age=23&name=x`).
pub(crate) fn wrapper_key_values(p: &mut RequestParser) -> Result<(), FieldError> {
    if let Some(v) = p.values().get_nested_params(keys::REQ_EXT_WRAPPER_KV)? {
        set_req_ext_path(
            p,
            keys::REQ_EXT_WRAPPER_KV,
            &[keys::EXT_WRAPPER, keys::EXT_KV],
            v,
        )?;
    }
    Ok(())
}

/// Custom key/value targeting passed as a JSON object. Lands on the same
/// ext slot as the nested-parameter form.
pub(crate) fn wrapper_key_values_map(p: &mut RequestParser) -> Result<(), FieldError> {
    if let Some(v) = p.values().get_json(keys::REQ_EXT_WRAPPER_KVM)? {
        set_req_ext_path(
            p,
            keys::REQ_EXT_WRAPPER_KVM,
            &[keys::EXT_WRAPPER, keys::EXT_KV],
            v,
        )?;
    }
    Ok(())
}

/// Transparency rules for the auction. An empty object is a no-op.
pub(crate) fn prebid_transparency_content(p: &mut RequestParser) -> Result<(), FieldError> {
    if let Some(v) = p
        .values()
        .get_json(keys::REQ_EXT_PREBID_TRANSPARENCY_CONTENT)?
    {
        if v.as_object().map(|o| o.is_empty()).unwrap_or(false) {
            return Ok(());
        }
        set_req_ext_path(
            p,
            keys::REQ_EXT_PREBID_TRANSPARENCY_CONTENT,
            &[
                keys::EXT_PREBID,
                keys::EXT_TRANSPARENCY,
                keys::EXT_TRANSPARENCY_CONTENT,
            ],
            v,
        )?;
    }
    Ok(())
}

pub(crate) fn prebid_floors_enforcement(p: &mut RequestParser) -> Result<(), FieldError> {
    if let Some(v) = p
        .values()
        .get_json(keys::REQ_EXT_PREBID_FLOORS_ENFORCEMENT)?
    {
        set_req_ext_path(
            p,
            keys::REQ_EXT_PREBID_FLOORS_ENFORCEMENT,
            &[keys::EXT_PREBID, keys::EXT_FLOORS, keys::EXT_FLOORS_ENFORCEMENT],
            v,
        )?;
    }
    Ok(())
}

/// `"1"` enables returning the status of every bid; any other value
/// disables it.
pub(crate) fn prebid_return_all_bid_status(p: &mut RequestParser) -> Result<(), FieldError> {
    if let Some(v) = p
        .values()
        .get(keys::REQ_EXT_PREBID_RETURNALLBIDSTATUS)
        .map(str::to_string)
    {
        set_req_ext_path(
            p,
            keys::REQ_EXT_PREBID_RETURNALLBIDSTATUS,
            &[keys::EXT_PREBID, keys::EXT_RETURNALLBIDSTATUS],
            Value::Bool(v == "1"),
        )?;
    }
    Ok(())
}

/// Bidder params arrive URL-escaped; unescape and parse before nesting.
pub(crate) fn prebid_bidder_params_cds(p: &mut RequestParser) -> Result<(), FieldError> {
    if let Some(v) = p
        .values()
        .get_unescaped_json(keys::REQ_EXT_PREBID_BIDDERPARAMS_CDS)?
    {
        set_req_ext_path(
            p,
            keys::REQ_EXT_PREBID_BIDDERPARAMS_CDS,
            &[
                keys::EXT_PREBID,
                keys::EXT_BIDDERPARAMS,
                keys::EXT_BIDDERPARAMS_CDS,
            ],
            v,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::openrtb::BidRequest;
    use crate::parser::{ParseErrors, RequestParser};
    use crate::query::QueryParams;
    use crate::registry;
    use serde_json::json;

    fn parse(pairs: &[(&str, &str)]) -> (BidRequest, Option<ParseErrors>) {
        let values = QueryParams::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        RequestParser::parse(values, registry::default_registry())
    }

    #[test]
    fn test_regs_gdpr_mirrored_into_ext() {
        let (ortb, err) = parse(&[("regs.ext.gdpr", "1")]);
        assert!(err.is_none());
        let regs = ortb.regs.unwrap();
        assert_eq!(regs.gdpr, Some(1));
        assert_eq!(regs.ext.unwrap(), json!({"gdpr": 1}));
    }

    #[test]
    fn test_regs_us_privacy_mirrored_into_ext() {
        let (ortb, err) = parse(&[("regs.ext.us_privacy", "1YNN")]);
        assert!(err.is_none());
        let regs = ortb.regs.unwrap();
        assert_eq!(regs.us_privacy.as_deref(), Some("1YNN"));
        assert_eq!(regs.ext.unwrap(), json!({"us_privacy": "1YNN"}));
    }

    #[test]
    fn test_wrapper_kv_nested_params() {
        let (ortb, err) = parse(&[("req.ext.wrapper.kv", "age=23&name=test")]);
        assert!(err.is_none());
        assert_eq!(
            ortb.ext.unwrap(),
            json!({"wrapper": {"kv": {"age": 23, "name": "test"}}})
        );
    }

    #[test]
    fn test_wrapper_kvm_json_object() {
        let (ortb, err) = parse(&[("req.ext.wrapper.kvm", r#"{"seg":["a","b"]}"#)]);
        assert!(err.is_none());
        assert_eq!(
            ortb.ext.unwrap(),
            json!({"wrapper": {"kv": {"seg": ["a", "b"]}}})
        );
    }

    #[test]
    fn test_req_adpod_ext() {
        let (ortb, err) = parse(&[
            ("req.ext.adpod.minads", "2"),
            ("req.ext.adpod.admaxduration", "30"),
            ("req.ext.adpod.excladv", "25"),
        ]);
        assert!(err.is_none());
        assert_eq!(
            ortb.ext.unwrap(),
            json!({"adpod": {"minads": 2, "admaxduration": 30, "excladv": 25.0}})
        );
    }

    #[test]
    fn test_transparency_content_empty_object_is_noop() {
        let (ortb, err) = parse(&[("req.ext.prebid.transparency.content", "{}")]);
        assert!(err.is_none());
        assert!(ortb.ext.is_none());
    }

    #[test]
    fn test_transparency_content_nested() {
        let (ortb, err) = parse(&[(
            "req.ext.prebid.transparency.content",
            r#"{"default":{"include":true}}"#,
        )]);
        assert!(err.is_none());
        assert_eq!(
            ortb.ext.unwrap(),
            json!({"prebid": {"transparency": {"content": {"default": {"include": true}}}}})
        );
    }

    #[test]
    fn test_returnallbidstatus_flag() {
        let (ortb, err) = parse(&[("req.ext.prebid.returnallbidstatus", "1")]);
        assert!(err.is_none());
        assert_eq!(
            ortb.ext.unwrap(),
            json!({"prebid": {"returnallbidstatus": true}})
        );

        let (ortb, _) = parse(&[("req.ext.prebid.returnallbidstatus", "0")]);
        assert_eq!(
            ortb.ext.unwrap(),
            json!({"prebid": {"returnallbidstatus": false}})
        );
    }

    #[test]
    fn test_bidderparams_cds_unescaped() {
        let (ortb, err) = parse(&[(
            "req.ext.prebid.bidderparams.cds",
            "%7B%22acat%22%3A%5B%22IAB1%22%5D%7D",
        )]);
        assert!(err.is_none());
        assert_eq!(
            ortb.ext.unwrap(),
            json!({"prebid": {"bidderparams": {"cds": {"acat": ["IAB1"]}}}})
        );
    }

    #[test]
    fn test_bidderparams_cds_bad_json_is_field_error() {
        let (_, err) = parse(&[("req.ext.prebid.bidderparams.cds", "not-json")]);
        let err = err.unwrap();
        assert_eq!(err.len(), 1);
        assert_eq!(err.errors[0].key, "req.ext.prebid.bidderparams.cds");
    }
}
