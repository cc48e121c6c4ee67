//! Final response rendering: raw combined VAST, structured JSON, or a
//! validated redirect target, plus the structured error body.

use std::fmt;

use serde_json::{json, Value};
use url::Url;

use crate::openrtb::BidResponse;
use crate::stitch::{new_pod_builder, XmlEngine, EMPTY_VAST};

#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    InvalidRedirect(String),
    UnsupportedFormat(String),
    Json(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidRedirect(msg) => write!(f, "invalid redirect target: {}", msg),
            RenderError::UnsupportedFormat(v) => write!(f, "unsupported response format: {}", v),
            RenderError::Json(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// How the caller wants the response delivered. Structured when the flag is
/// absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Structured,
    Redirect,
}

impl ResponseFormat {
    pub fn parse(flag: &str) -> Result<Self, RenderError> {
        match flag {
            "" | "json" => Ok(ResponseFormat::Structured),
            "redirect" => Ok(ResponseFormat::Redirect),
            other => Err(RenderError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// A caller-supplied redirect target that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RedirectTarget(Url);

impl RedirectTarget {
    /// The target must be an absolute http or https URL.
    pub fn validate(raw: &str) -> Result<Self, RenderError> {
        if !raw.starts_with("http://") && !raw.starts_with("https://") {
            return Err(RenderError::InvalidRedirect(format!(
                "'{}' is not an http or https url",
                raw
            )));
        }
        let url = Url::parse(raw).map_err(|e| RenderError::InvalidRedirect(e.to_string()))?;
        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Merge every positive-price creative across all seats into one combined
/// document, ignoring seat grouping. Individually bad creatives are
/// skipped; any top-level failure, or nothing to stitch, yields the fixed
/// empty document.
pub fn render_raw_vast(response: &BidResponse, engine: XmlEngine) -> String {
    let mut pod = new_pod_builder(engine);
    for seat in &response.seatbid {
        for bid in &seat.bid {
            if bid.price <= 0.0 {
                continue;
            }
            if let Err(e) = pod.append(bid) {
                tracing::warn!(bid = %bid.id, error = %e, "skipping creative");
            }
        }
    }
    if pod.is_empty() {
        return EMPTY_VAST.to_string();
    }
    match pod.build() {
        Ok(out) => out,
        Err(e) => {
            tracing::warn!(error = %e, "raw vast assembly failed");
            EMPTY_VAST.to_string()
        }
    }
}

/// JSON passthrough of the assembled response.
pub fn render_structured(response: &BidResponse) -> Result<String, RenderError> {
    serde_json::to_string(response).map_err(|e| RenderError::Json(e.to_string()))
}

/// The structured error body: echoed request id, no-bid reason, and an
/// error-detail block only when the debug flag is set.
pub fn render_error_body(id: &str, nbr: i64, errors: &[String], debug: bool) -> String {
    let mut body = json!({"id": id, "nbr": nbr});
    if debug {
        body["ext"] = json!({"errors": errors});
    }
    Value::to_string(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nbr;
    use crate::openrtb::{Bid, SeatBid};
    use serde_json::json;

    fn bid(id: &str, price: f64, adm: &str) -> Bid {
        Bid {
            id: id.to_string(),
            impid: id.to_string(),
            price,
            adm: Some(adm.to_string()),
            ..Default::default()
        }
    }

    fn response(bids: Vec<Bid>) -> BidResponse {
        BidResponse {
            id: "r1".to_string(),
            seatbid: vec![SeatBid {
                bid: bids,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_raw_vast_merges_across_seats() {
        let mut resp = response(vec![bid(
            "a",
            1.0,
            "<VAST version=\"3.0\"><Ad id=\"a\"><InLine/></Ad></VAST>",
        )]);
        resp.seatbid.push(SeatBid {
            bid: vec![bid(
                "b",
                2.0,
                "<VAST version=\"2.0\"><Ad id=\"b\"><InLine/></Ad></VAST>",
            )],
            ..Default::default()
        });

        for engine in [XmlEngine::Tree, XmlEngine::Stream] {
            let out = render_raw_vast(&resp, engine);
            assert!(out.starts_with("<VAST version=\"3.0\">"));
            assert!(out.contains("id=\"a\"") && out.contains("id=\"b\""));
        }
    }

    #[test]
    fn test_raw_vast_skips_bad_creatives() {
        let resp = response(vec![
            bid("bad", 1.0, "<VAST version=\"2.0\"></VAST>"),
            bid("good", 1.0, "<VAST version=\"2.0\"><Ad id=\"g\"><InLine/></Ad></VAST>"),
        ]);

        let out = render_raw_vast(&resp, XmlEngine::Tree);
        assert!(out.contains("id=\"g\""));
        assert!(out.contains("sequence=\"1\""));
    }

    #[test]
    fn test_raw_vast_empty_fallback() {
        let resp = response(vec![bid("free", 0.0, "<VAST/>")]);
        assert_eq!(render_raw_vast(&resp, XmlEngine::Stream), EMPTY_VAST);
        assert_eq!(
            render_raw_vast(&BidResponse::default(), XmlEngine::Tree),
            EMPTY_VAST
        );
    }

    #[test]
    fn test_response_format_parse() {
        assert_eq!(ResponseFormat::parse("").unwrap(), ResponseFormat::Structured);
        assert_eq!(
            ResponseFormat::parse("json").unwrap(),
            ResponseFormat::Structured
        );
        assert_eq!(
            ResponseFormat::parse("redirect").unwrap(),
            ResponseFormat::Redirect
        );
        assert!(ResponseFormat::parse("xml").is_err());
    }

    #[test]
    fn test_redirect_validation() {
        assert!(RedirectTarget::validate("https://pub.example.com/r?uid=1").is_ok());
        assert!(RedirectTarget::validate("ftp://pub.example.com").is_err());
        assert!(RedirectTarget::validate("relative/path").is_err());
        assert!(RedirectTarget::validate("https://").is_err());
    }

    #[test]
    fn test_error_body_debug_gated() {
        let errors = vec!["parsing error key:req.tmax msg:'x' is not a int".to_string()];

        let plain: serde_json::Value = serde_json::from_str(&render_error_body(
            "r1",
            nbr::INVALID_REQUEST,
            &errors,
            false,
        ))
        .unwrap();
        assert_eq!(plain, json!({"id": "r1", "nbr": 2}));

        let debug: serde_json::Value = serde_json::from_str(&render_error_body(
            "r1",
            nbr::INVALID_REQUEST,
            &errors,
            true,
        ))
        .unwrap();
        assert_eq!(debug["ext"]["errors"][0], errors[0]);
    }

    #[test]
    fn test_error_body_no_bid_reasons() {
        let empty: serde_json::Value =
            serde_json::from_str(&render_error_body("r1", nbr::EMPTY_SEATBID, &[], false))
                .unwrap();
        assert_eq!(empty["nbr"], json!(nbr::EMPTY_SEATBID));

        let missing: serde_json::Value = serde_json::from_str(&render_error_body(
            "r1",
            nbr::MISSING_REDIRECT_TARGET,
            &[],
            false,
        ))
        .unwrap();
        assert_eq!(missing["nbr"], json!(702));
    }

    #[test]
    fn test_structured_passthrough() {
        let resp = response(vec![bid("a", 1.0, "<VAST/>")]);
        let out = render_structured(&resp).unwrap();
        let parsed: BidResponse = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.seatbid[0].bid[0].id, "a");
    }
}
