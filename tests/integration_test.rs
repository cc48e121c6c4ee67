//! End-to-end flow: flat query string → structured bid request → ad-rule
//! expansion → (fake auction) → seat merge → rendering, exercised with both
//! stitching backends.

use std::collections::HashMap;

use serde_json::json;

use podstitch::adrule::{self, AdRule};
use podstitch::openrtb::{Bid, BidResponse, SeatBid};
use podstitch::{
    merge_seat_bids, registry, render_raw_vast, render_structured, QueryParams, RequestParser,
    XmlEngine,
};

fn decompose(slot_id: &str) -> Option<String> {
    slot_id.split_once('-').map(|(parent, _)| parent.to_string())
}

fn inline_vast(version: &str, ad_id: &str) -> String {
    format!(
        "<VAST version=\"{}\"><Ad id=\"{}\"><InLine><AdTitle>t</AdTitle></InLine></Ad></VAST>",
        version, ad_id
    )
}

fn pod_bid(impid: &str, price: f64, adm: String) -> Bid {
    Bid {
        id: format!("bid-{}", impid),
        impid: impid.to_string(),
        price,
        adm: Some(adm),
        cat: Some(vec!["IAB1".to_string()]),
        adomain: Some(vec!["adv.example.com".to_string()]),
        ext: Some(json!({"adpod": {"isAdpodBid": true}})),
        ..Default::default()
    }
}

#[test]
fn test_full_flow_both_engines() {
    for engine in [XmlEngine::Tree, XmlEngine::Stream] {
        // Parse the flat request.
        let values = QueryParams::from_query_string(
            "req.id=req-1&imp.id=imp1&imp.vid.mimes=video%2Fmp4&imp.vid.minduration=5\
             &imp.vid.maxduration=90&site.page=https%3A%2F%2Fpub.example.com%2Fwatch\
             &req.ext.wrapper.profileid=1234&debug=1",
        );
        let (mut ortb, errors) = RequestParser::parse(values, registry::default_registry());
        assert!(errors.is_none());
        assert_eq!(ortb.id, "req-1");
        assert_eq!(ortb.imp.len(), 1);
        assert_eq!(
            ortb.ext.as_ref().unwrap(),
            &json!({"wrapper": {"profileid": 1234}})
        );

        // Expand the single video impression into two pod slots.
        let rules = vec![
            AdRule {
                pod_id: "pod1".to_string(),
                min_duration: 5,
                max_duration: 30,
                ..Default::default()
            },
            AdRule {
                pod_id: "pod1".to_string(),
                min_duration: 5,
                max_duration: 60,
                ..Default::default()
            },
        ];
        adrule::validate_rules(&rules).unwrap();
        let mut sets = HashMap::new();
        sets.insert("imp1".to_string(), rules);
        adrule::expand(&mut ortb, &sets);

        let slot_ids: Vec<&str> = ortb.imp.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(slot_ids, vec!["imp1-pod1-0", "imp1-pod1-1"]);

        // Fake auction: one pod bid per slot plus one plain bid.
        let mut response = BidResponse {
            id: ortb.id.clone(),
            seatbid: vec![SeatBid {
                seat: Some("bidder-a".to_string()),
                bid: vec![
                    pod_bid("imp1-pod1-0", 2.0, inline_vast("2.0", "first")),
                    pod_bid("imp1-pod1-1", 3.0, inline_vast("4.0", "second")),
                    Bid {
                        id: "plain".to_string(),
                        impid: "banner".to_string(),
                        price: 1.0,
                        adm: Some(inline_vast("2.0", "plain")),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            }],
            ..Default::default()
        };

        let errs = merge_seat_bids(&mut response, engine, &decompose);
        assert!(errs.is_none());
        assert_eq!(response.seatbid.len(), 2);

        let original = &response.seatbid[0];
        assert_eq!(original.seat.as_deref(), Some("bidder-a"));
        assert_eq!(original.bid.len(), 1);
        assert_eq!(original.bid[0].id, "plain");

        let synthetic = &response.seatbid[1];
        assert_eq!(synthetic.seat.as_deref(), Some(podstitch::POD_SEAT));
        assert_eq!(synthetic.bid.len(), 1);
        let merged = &synthetic.bid[0];
        assert_eq!(merged.impid, "imp1");
        assert!((merged.price - 5.0).abs() < f64::EPSILON);
        assert_eq!(merged.cat.as_ref().unwrap(), &vec!["IAB1".to_string()]);

        let adm = merged.adm.as_deref().unwrap();
        assert!(adm.starts_with("<VAST version=\"4.0\">"));
        assert!(adm.contains("sequence=\"1\""));
        assert!(adm.contains("sequence=\"2\""));
        let first = adm.find("id=\"first\"").unwrap();
        let second = adm.find("id=\"second\"").unwrap();
        assert!(first < second);

        // Structured passthrough survives a round trip.
        let body = render_structured(&response).unwrap();
        let parsed: BidResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.seatbid.len(), 2);
    }
}

#[test]
fn test_full_flow_raw_vast_rendering() {
    let mut response = BidResponse {
        id: "req-2".to_string(),
        seatbid: vec![
            SeatBid {
                bid: vec![pod_bid("imp1-pod1-0", 2.0, inline_vast("3.0", "a"))],
                ..Default::default()
            },
            SeatBid {
                bid: vec![Bid {
                    id: "tag".to_string(),
                    impid: "imp1-pod1-1".to_string(),
                    price: 1.0,
                    adm: Some("https://ads.example.com/vast?slot=2".to_string()),
                    ext: Some(json!({"adpod": {"isAdpodBid": true}})),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
        ..Default::default()
    };

    // The raw renderer ignores seat grouping and the pod flag entirely.
    for engine in [XmlEngine::Tree, XmlEngine::Stream] {
        let out = render_raw_vast(&response, engine);
        assert!(out.starts_with("<VAST version=\"3.0\">"));
        assert!(out.contains("id=\"a\""));
        assert!(out.contains("<![CDATA[https://ads.example.com/vast?slot=2]]>"));
    }

    // Merging the same response collapses both bids into one synthetic seat.
    let errs = merge_seat_bids(&mut response, XmlEngine::Tree, &decompose);
    assert!(errs.is_none());
    assert_eq!(response.seatbid.len(), 1);
    assert_eq!(response.seatbid[0].bid[0].impid, "imp1");
}

#[test]
fn test_parse_errors_surface_but_do_not_block() {
    let values = QueryParams::from_query_string(
        "req.tmax=soon&imp.vid.w=1920&imp.vid.h=1080&unknown.key=1",
    );
    let (ortb, errors) = RequestParser::parse(values, registry::default_registry());

    let errors = errors.unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors[0].key, "req.tmax");

    let video = ortb.imp[0].video.as_ref().unwrap();
    assert_eq!(video.w, Some(1920));
    assert_eq!(video.h, Some(1080));
    assert_eq!(ortb.tmax, None);
}
