//! Flat request parsing.
//!
//! [`RequestParser`] owns one request's query parameters and the bid request
//! being built from them. Parsing walks every query key, dispatches it
//! through a [`FieldKeyRegistry`](crate::registry::FieldKeyRegistry), and
//! collects per-field failures without stopping: the result is a best-effort
//! document plus an aggregate error the caller can inspect.

mod imp;
mod request;
mod user;

pub(crate) use imp::*;
pub(crate) use request::*;
pub(crate) use user::*;

use std::fmt;

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::openrtb::{
    App, BidRequest, Channel, Content, Device, Geo, Imp, Network, Producer, Publisher, Regs,
    Site, Source, User, Video,
};
use crate::query::{FieldError, QueryParams};
use crate::registry::{Classification, FieldKeyRegistry};

/// Aggregate of the per-field failures of one parse call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseErrors {
    pub errors: Vec<FieldError>,
}

impl ParseErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msgs: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", msgs.join("; "))
    }
}

impl std::error::Error for ParseErrors {}

/// In-progress state of one flat request parse.
///
/// Parent objects (site, app, device, ...) are created lazily on the first
/// write into them, so an untouched section never appears in the output.
pub struct RequestParser {
    values: QueryParams,
    ortb: BidRequest,
}

impl RequestParser {
    fn new(values: QueryParams) -> Self {
        Self {
            values,
            ortb: BidRequest {
                imp: vec![Imp::default()],
                ..Default::default()
            },
        }
    }

    /// Parse the query parameters into a structured bid request.
    ///
    /// Per-field failures are recorded and parsing continues with the
    /// remaining keys. After all keys are processed a fresh random id is
    /// assigned to the request and to the first impression when absent.
    pub fn parse(
        values: QueryParams,
        registry: &FieldKeyRegistry,
    ) -> (BidRequest, Option<ParseErrors>) {
        let mut parser = Self::new(values);
        let mut errors = ParseErrors::default();

        let mut keys: Vec<String> = parser.values.keys().map(str::to_string).collect();
        keys.sort();

        for key in keys {
            if parser.values.get(&key).is_none() {
                continue;
            }
            match registry.classify(&key) {
                Classification::Exact => {
                    if let Some(setter) = registry.field(&key) {
                        if let Err(e) = setter(&mut parser) {
                            errors.errors.push(e);
                        }
                    }
                }
                Classification::Extension { namespace, child } => {
                    let raw = parser
                        .values
                        .get(&key)
                        .map(str::to_string)
                        .unwrap_or_default();
                    let (namespace, child) = (namespace.to_string(), child.to_string());
                    if let Some(setter) = registry.ext_setter(&namespace) {
                        if let Err(e) = setter(&mut parser, &child, &raw) {
                            errors.errors.push(e);
                        }
                    }
                }
                Classification::Ignored => {}
                Classification::Unrecognized => {
                    tracing::warn!(key = %key, "unrecognized request parameter");
                }
            }
        }

        parser.finalize();

        let err = if errors.is_empty() { None } else { Some(errors) };
        (parser.ortb, err)
    }

    /// Generate request and first-impression ids when absent.
    fn finalize(&mut self) {
        if self.ortb.id.is_empty() {
            self.ortb.id = Uuid::new_v4().to_string();
        }
        if let Some(imp) = self.ortb.imp.first_mut() {
            if imp.id.is_empty() {
                imp.id = Uuid::new_v4().to_string();
            }
        }
    }

    pub(crate) fn values(&self) -> &QueryParams {
        &self.values
    }

    pub(crate) fn ortb_mut(&mut self) -> &mut BidRequest {
        &mut self.ortb
    }

    // Lazily-initialized parent accessors.

    pub(crate) fn source(&mut self) -> &mut Source {
        self.ortb.source.get_or_insert_with(Source::default)
    }

    pub(crate) fn regs(&mut self) -> &mut Regs {
        self.ortb.regs.get_or_insert_with(Regs::default)
    }

    pub(crate) fn imp(&mut self) -> &mut Imp {
        if self.ortb.imp.is_empty() {
            self.ortb.imp.push(Imp::default());
        }
        &mut self.ortb.imp[0]
    }

    pub(crate) fn video(&mut self) -> &mut Video {
        self.imp().video.get_or_insert_with(Video::default)
    }

    pub(crate) fn site(&mut self) -> &mut Site {
        self.ortb.site.get_or_insert_with(Site::default)
    }

    pub(crate) fn site_publisher(&mut self) -> &mut Publisher {
        self.site().publisher.get_or_insert_with(Publisher::default)
    }

    pub(crate) fn site_content(&mut self) -> &mut Content {
        self.site().content.get_or_insert_with(Content::default)
    }

    pub(crate) fn site_content_producer(&mut self) -> &mut Producer {
        self.site_content()
            .producer
            .get_or_insert_with(Producer::default)
    }

    pub(crate) fn site_content_network(&mut self) -> &mut Network {
        self.site_content()
            .network
            .get_or_insert_with(Network::default)
    }

    pub(crate) fn site_content_channel(&mut self) -> &mut Channel {
        self.site_content()
            .channel
            .get_or_insert_with(Channel::default)
    }

    pub(crate) fn app(&mut self) -> &mut App {
        self.ortb.app.get_or_insert_with(App::default)
    }

    pub(crate) fn app_publisher(&mut self) -> &mut Publisher {
        self.app().publisher.get_or_insert_with(Publisher::default)
    }

    pub(crate) fn app_content(&mut self) -> &mut Content {
        self.app().content.get_or_insert_with(Content::default)
    }

    pub(crate) fn app_content_producer(&mut self) -> &mut Producer {
        self.app_content()
            .producer
            .get_or_insert_with(Producer::default)
    }

    pub(crate) fn app_content_network(&mut self) -> &mut Network {
        self.app_content()
            .network
            .get_or_insert_with(Network::default)
    }

    pub(crate) fn app_content_channel(&mut self) -> &mut Channel {
        self.app_content()
            .channel
            .get_or_insert_with(Channel::default)
    }

    pub(crate) fn device(&mut self) -> &mut Device {
        self.ortb.device.get_or_insert_with(Device::default)
    }

    pub(crate) fn device_geo(&mut self) -> &mut Geo {
        self.device().geo.get_or_insert_with(Geo::default)
    }

    pub(crate) fn user(&mut self) -> &mut User {
        self.ortb.user.get_or_insert_with(User::default)
    }

    pub(crate) fn user_geo(&mut self) -> &mut Geo {
        self.user().geo.get_or_insert_with(Geo::default)
    }
}

/// Ensure the ext slot holds a JSON object and hand out its map.
///
/// An existing non-object ext is a field-level error, matching the legacy
/// unmarshal-into-map behavior.
pub(crate) fn ext_map<'a>(
    slot: &'a mut Option<Value>,
    key: &str,
) -> Result<&'a mut Map<String, Value>, FieldError> {
    if slot.is_none() {
        *slot = Some(Value::Object(Map::new()));
    }
    match slot.as_mut() {
        Some(Value::Object(map)) => Ok(map),
        _ => Err(FieldError::new(key, "existing ext is not a JSON object")),
    }
}

/// Set `value` at a nested object path inside an ext map, creating (or
/// replacing wrongly-shaped) intermediate objects along the way.
pub(crate) fn ext_set_path(map: &mut Map<String, Value>, path: &[&str], value: Value) {
    let (last, parents) = match path.split_last() {
        Some(split) => split,
        None => return,
    };
    let mut current = map;
    for seg in parents {
        let entry = current
            .entry(seg.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        current = match entry {
            Value::Object(sub) => sub,
            _ => return,
        };
    }
    current.insert(last.to_string(), value);
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn test_empty_query_generates_ids() {
        let (ortb, err) = parse(&[]);
        assert!(err.is_none());
        assert!(!ortb.id.is_empty());
        assert_eq!(ortb.imp.len(), 1);
        assert!(!ortb.imp[0].id.is_empty());
        assert_ne!(ortb.id, ortb.imp[0].id);
    }

    #[test]
    fn test_explicit_ids_are_kept() {
        let (ortb, _) = parse(&[("req.id", "r-1"), ("imp.id", "i-1")]);
        assert_eq!(ortb.id, "r-1");
        assert_eq!(ortb.imp[0].id, "i-1");
    }

    #[test]
    fn test_field_errors_do_not_stop_parsing() {
        let (ortb, err) = parse(&[
            ("req.tmax", "not-a-number"),
            ("site.domain", "example.com"),
        ]);
        let err = err.unwrap();
        assert_eq!(err.len(), 1);
        assert_eq!(err.errors[0].key, "req.tmax");
        assert_eq!(ortb.site.unwrap().domain.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_untouched_sections_stay_absent() {
        let (ortb, _) = parse(&[("site.page", "https://a.com")]);
        assert!(ortb.app.is_none());
        assert!(ortb.device.is_none());
        assert!(ortb.user.is_none());
        assert!(ortb.regs.is_none());
    }

    #[test]
    fn test_video_fields() {
        let (ortb, err) = parse(&[
            ("imp.vid.mimes", "video/mp4,video/webm"),
            ("imp.vid.minduration", "5"),
            ("imp.vid.maxduration", "30"),
            ("imp.vid.protocols", "2,3"),
            ("imp.vid.w", "1920"),
            ("imp.vid.h", "1080"),
        ]);
        assert!(err.is_none());
        let video = ortb.imp[0].video.as_ref().unwrap();
        assert_eq!(
            video.mimes.as_ref().unwrap(),
            &vec!["video/mp4".to_string(), "video/webm".to_string()]
        );
        assert_eq!(video.minduration, Some(5));
        assert_eq!(video.maxduration, Some(30));
        assert_eq!(video.protocols.as_ref().unwrap(), &vec![2, 3]);
        assert_eq!(video.w, Some(1920));
        assert_eq!(video.h, Some(1080));
    }

    #[test]
    fn test_floor_currency_defaults_only_with_floor_value() {
        let (ortb, _) = parse(&[("imp.bidfloor", "2.5")]);
        assert_eq!(ortb.imp[0].bidfloor, Some(2.5));
        assert_eq!(ortb.imp[0].bidfloorcur.as_deref(), Some("USD"));

        let (ortb, _) = parse(&[("imp.bidfloor", "2.5"), ("imp.bidfloorcur", "EUR")]);
        assert_eq!(ortb.imp[0].bidfloorcur.as_deref(), Some("EUR"));

        let (ortb, _) = parse(&[("imp.bidfloorcur", "EUR")]);
        assert_eq!(ortb.imp[0].bidfloor, None);
        assert_eq!(ortb.imp[0].bidfloorcur, None);
    }

    #[test]
    fn test_schain_failure_is_dropped_not_errored() {
        let (ortb, err) = parse(&[("src.schain", "garbage-without-nodes")]);
        assert!(err.is_none());
        assert!(ortb.source.is_none());
    }

    #[test]
    fn test_schain_parsed_into_source() {
        let (ortb, err) = parse(&[(
            "src.schain",
            "1.0,1!exchange.com,1234,1,,,exchange.com",
        )]);
        assert!(err.is_none());
        let schain = ortb.source.unwrap().schain.unwrap();
        assert_eq!(schain.ver, "1.0");
        assert_eq!(schain.nodes.len(), 1);
        assert_eq!(schain.nodes[0].asi, "exchange.com");
    }

    #[test]
    fn test_open_ext_namespace() {
        let (ortb, err) = parse(&[
            ("site.ext.custom.flag", "yes"),
            ("user.geo.ext.source", "gps"),
        ]);
        assert!(err.is_none());
        assert_eq!(
            ortb.site.unwrap().ext.unwrap(),
            json!({"custom": {"flag": "yes"}})
        );
        assert_eq!(
            ortb.user.unwrap().geo.unwrap().ext.unwrap(),
            json!({"source": "gps"})
        );
    }

    #[test]
    fn test_wrapper_ext_keys() {
        let (ortb, err) = parse(&[
            ("req.ext.wrapper.profileid", "1234"),
            ("req.ext.wrapper.ssai", "mediatailor"),
        ]);
        assert!(err.is_none());
        assert_eq!(
            ortb.ext.unwrap(),
            json!({"wrapper": {"profileid": 1234, "ssai": "mediatailor"}})
        );
    }

    #[test]
    fn test_imp_ext_bidder_merge() {
        let (ortb, err) = parse(&[
            ("imp.ext.bidder", r#"{"pubId":"5890"}"#),
            ("imp.ext.prebid", r#"{"keywords":["a"]}"#),
        ]);
        assert!(err.is_none());
        assert_eq!(
            ortb.imp[0].ext.as_ref().unwrap(),
            &json!({"bidder": {"pubId": "5890"}, "prebid": {"keywords": ["a"]}})
        );
    }

    #[test]
    fn test_debug_key_is_ignored_silently() {
        let (ortb, err) = parse(&[("debug", "1")]);
        assert!(err.is_none());
        assert!(ortb.ext.is_none());
    }
}
