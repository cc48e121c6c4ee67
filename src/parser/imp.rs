//! Impression-level setters: floor handling, private marketplace, the
//! bidder/prebid extension payloads, and the video extension paths.

use serde_json::Value;

use crate::keys;
use crate::parser::{ext_map, ext_set_path, RequestParser};
use crate::query::FieldError;

/// Bid floor. Only positive values are kept; a kept floor defaults the
/// currency to USD until an explicit currency overwrites it.
pub(crate) fn imp_bid_floor(p: &mut RequestParser) -> Result<(), FieldError> {
    if let Some(v) = p.values().get_float(keys::IMP_BIDFLOOR)? {
        if v > 0.0 {
            let imp = p.imp();
            imp.bidfloor = Some(v);
            imp.bidfloorcur = Some(keys::USD.to_string());
        }
    }
    Ok(())
}

/// Bid floor currency. Meaningless without a floor value, so it is dropped
/// when no floor was kept.
pub(crate) fn imp_bid_floor_cur(p: &mut RequestParser) -> Result<(), FieldError> {
    if let Some(v) = p.values().get(keys::IMP_BIDFLOORCUR).map(str::to_string) {
        if p.imp().bidfloor.is_some() {
            p.imp().bidfloorcur = Some(v);
        }
    }
    Ok(())
}

pub(crate) fn imp_pmp(p: &mut RequestParser) -> Result<(), FieldError> {
    if let Some(v) = p.values().get_json(keys::IMP_PMP)? {
        p.imp().pmp = Some(v);
    }
    Ok(())
}

/// Bidder-specific parameters, nested under `"bidder"` in the impression
/// ext.
pub(crate) fn imp_ext_bidder(p: &mut RequestParser) -> Result<(), FieldError> {
    if let Some(v) = p.values().get_json(keys::IMP_EXT_BIDDER)? {
        let map = ext_map(&mut p.imp().ext, keys::IMP_EXT_BIDDER)?;
        map.insert(keys::BIDDER_KEY.to_string(), v);
    }
    Ok(())
}

/// Prebid-specific parameters, nested under `"prebid"` in the impression
/// ext.
pub(crate) fn imp_ext_prebid(p: &mut RequestParser) -> Result<(), FieldError> {
    if let Some(v) = p.values().get_json(keys::IMP_EXT_PREBID)? {
        let map = ext_map(&mut p.imp().ext, keys::IMP_EXT_PREBID)?;
        map.insert(keys::PREBID_KEY.to_string(), v);
    }
    Ok(())
}

/// Write `value` at a nested path under the video ext object.
pub(crate) fn set_video_ext_path(
    p: &mut RequestParser,
    key: &str,
    path: &[&str],
    value: Value,
) -> Result<(), FieldError> {
    let map = ext_map(&mut p.video().ext, key)?;
    ext_set_path(map, path, value);
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
    fn test_non_positive_floor_is_dropped() {
        let (ortb, err) = parse(&[("imp.bidfloor", "0"), ("imp.bidfloorcur", "EUR")]);
        assert!(err.is_none());
        assert_eq!(ortb.imp[0].bidfloor, None);
        assert_eq!(ortb.imp[0].bidfloorcur, None);
    }

    #[test]
    fn test_pmp_json_object() {
        let (ortb, err) = parse(&[(
            "imp.pmp",
            r#"{"private_auction":1,"deals":[{"id":"d1"}]}"#,
        )]);
        assert!(err.is_none());
        assert_eq!(
            ortb.imp[0].pmp.as_ref().unwrap(),
            &json!({"private_auction": 1, "deals": [{"id": "d1"}]})
        );
    }

    #[test]
    fn test_pmp_non_object_is_field_error() {
        let (_, err) = parse(&[("imp.pmp", "[1,2]")]);
        let err = err.unwrap();
        assert_eq!(err.errors[0].key, "imp.pmp");
    }

    #[test]
    fn test_video_adpod_ext() {
        let (ortb, err) = parse(&[
            ("imp.vid.ext.offset", "10"),
            ("imp.vid.ext.adpod.minads", "2"),
            ("imp.vid.ext.adpod.maxads", "5"),
            ("imp.vid.ext.adpod.adminduration", "5"),
            ("imp.vid.ext.adpod.admaxduration", "30"),
        ]);
        assert!(err.is_none());
        let video = ortb.imp[0].video.as_ref().unwrap();
        assert_eq!(
            video.ext.as_ref().unwrap(),
            &json!({
                "offset": 10,
                "adpod": {"minads": 2, "maxads": 5, "adminduration": 5, "admaxduration": 30}
            })
        );
    }

    #[test]
    fn test_video_adpod_bad_value_is_field_error() {
        let (ortb, err) = parse(&[("imp.vid.ext.adpod.minads", "two")]);
        let err = err.unwrap();
        assert_eq!(err.errors[0].key, "imp.vid.ext.adpod.minads");
        // The value is rejected before the video object is created.
        assert!(ortb.imp[0].video.is_none());
    }

    #[test]
    fn test_iframebuster_array() {
        let (ortb, err) = parse(&[("imp.iframebuster", "a,b")]);
        assert!(err.is_none());
        assert_eq!(
            ortb.imp[0].iframebuster.as_ref().unwrap(),
            &vec!["a".to_string(), "b".to_string()]
        );
    }
}
