//! User and device extension setters: consent strings, external ids, and
//! the device attribution fields.

use serde_json::Value;

use crate::keys;
use crate::parser::{ext_map, RequestParser};
use crate::query::FieldError;

/// Segment data as a JSON array on the typed `user.data` field.
pub(crate) fn user_data(p: &mut RequestParser) -> Result<(), FieldError> {
    let raw = match p.values().get(keys::USER_DATA).map(str::to_string) {
        Some(v) => v,
        None => return Ok(()),
    };
    let parsed = serde_json::from_str::<Value>(&raw)
        .map_err(|e| FieldError::new(keys::USER_DATA, e.to_string()))?;
    if !parsed.is_array() {
        return Err(FieldError::new(keys::USER_DATA, "value is not a JSON array"));
    }
    p.user().data = Some(parsed);
    Ok(())
}

/// TCF consent string in the user ext.
pub(crate) fn user_ext_consent(p: &mut RequestParser) -> Result<(), FieldError> {
    if let Some(v) = p.values().get(keys::USER_EXT_CONSENT).map(str::to_string) {
        let map = ext_map(&mut p.user().ext, keys::USER_EXT_CONSENT)?;
        map.insert(keys::EXT_CONSENT.to_string(), Value::String(v));
    }
    Ok(())
}

/// External user ids as a JSON array in the user ext. Unlike the supply
/// chain, a malformed value here is a field error.
pub(crate) fn user_ext_eids(p: &mut RequestParser) -> Result<(), FieldError> {
    let raw = match p.values().get(keys::USER_EXT_EIDS).map(str::to_string) {
        Some(v) => v,
        None => return Ok(()),
    };
    let parsed = serde_json::from_str::<Value>(&raw)
        .map_err(|e| FieldError::new(keys::USER_EXT_EIDS, e.to_string()))?;
    if !parsed.is_array() {
        return Err(FieldError::new(
            keys::USER_EXT_EIDS,
            "value is not a JSON array",
        ));
    }
    let map = ext_map(&mut p.user().ext, keys::USER_EXT_EIDS)?;
    map.insert(keys::EXT_EIDS.to_string(), parsed);
    Ok(())
}

pub(crate) fn device_ext_ifa_type(p: &mut RequestParser) -> Result<(), FieldError> {
    if let Some(v) = p.values().get(keys::DEV_EXT_IFA_TYPE).map(str::to_string) {
        let map = ext_map(&mut p.device().ext, keys::DEV_EXT_IFA_TYPE)?;
        map.insert(keys::EXT_IFA_TYPE.to_string(), Value::String(v));
    }
    Ok(())
}

pub(crate) fn device_ext_session_id(p: &mut RequestParser) -> Result<(), FieldError> {
    if let Some(v) = p.values().get(keys::DEV_EXT_SESSION_ID).map(str::to_string) {
        let map = ext_map(&mut p.device().ext, keys::DEV_EXT_SESSION_ID)?;
        map.insert(keys::EXT_SESSION_ID.to_string(), Value::String(v));
    }
    Ok(())
}

/// App tracking transparency status.
pub(crate) fn device_ext_atts(p: &mut RequestParser) -> Result<(), FieldError> {
    if let Some(v) = p.values().get_float(keys::DEV_EXT_ATTS)? {
        let map = ext_map(&mut p.device().ext, keys::DEV_EXT_ATTS)?;
        map.insert(keys::EXT_ATTS.to_string(), Value::from(v));
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
    fn test_user_data_array() {
        let (ortb, err) = parse(&[(
            "user.data",
            r#"[{"id":"seg","segment":[{"id":"1"}]}]"#,
        )]);
        assert!(err.is_none());
        assert_eq!(
            ortb.user.unwrap().data.unwrap(),
            json!([{"id": "seg", "segment": [{"id": "1"}]}])
        );
    }

    #[test]
    fn test_user_data_non_array_is_field_error() {
        let (_, err) = parse(&[("user.data", r#"{"id":"seg"}"#)]);
        assert_eq!(err.unwrap().errors[0].key, "user.data");
    }

    #[test]
    fn test_consent_in_user_ext() {
        let (ortb, err) = parse(&[("user.ext.consent", "CP0sXyT")]);
        assert!(err.is_none());
        assert_eq!(ortb.user.unwrap().ext.unwrap(), json!({"consent": "CP0sXyT"}));
    }

    #[test]
    fn test_eids_array_in_user_ext() {
        let (ortb, err) = parse(&[(
            "user.ext.eids",
            r#"[{"source":"id5-sync.com","uids":[{"id":"u1"}]}]"#,
        )]);
        assert!(err.is_none());
        assert_eq!(
            ortb.user.unwrap().ext.unwrap(),
            json!({"eids": [{"source": "id5-sync.com", "uids": [{"id": "u1"}]}]})
        );
    }

    #[test]
    fn test_eids_bad_json_is_field_error() {
        let (_, err) = parse(&[("user.ext.eids", "not-json")]);
        assert_eq!(err.unwrap().errors[0].key, "user.ext.eids");
    }

    #[test]
    fn test_device_ext_fields() {
        let (ortb, err) = parse(&[
            ("dev.ext.ifa_type", "idfa"),
            ("dev.ext.session_id", "abc-123"),
            ("dev.ext.atts", "3"),
        ]);
        assert!(err.is_none());
        assert_eq!(
            ortb.device.unwrap().ext.unwrap(),
            json!({"ifa_type": "idfa", "session_id": "abc-123", "atts": 3.0})
        );
    }
}
