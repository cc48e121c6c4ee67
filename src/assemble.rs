//! Response assembly: group pod-flagged bids by parent impression, stitch
//! each bucket into one creative, and synthesize a seat per pod.
//!
//! The decomposition from a slot impression id back to its parent id lives
//! outside this crate and is injected as a pure function.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;
use uuid::Uuid;

use crate::keys;
use crate::openrtb::{Bid, BidResponse, SeatBid};
use crate::stitch::{new_pod_builder, StitchError, XmlEngine};

/// Seat name stamped on every synthetic pod seat.
pub const POD_SEAT: &str = "prebid_ctv";

/// One pod bucket that failed to stitch.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeError {
    pub imp_id: String,
    pub error: StitchError,
}

impl fmt::Display for MergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "merge error imp:{} {}", self.imp_id, self.error)
    }
}

impl std::error::Error for MergeError {}

/// Aggregate of the per-bucket failures of one merge call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeErrors {
    pub errors: Vec<MergeError>,
}

impl MergeErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for MergeErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msgs: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", msgs.join("; "))
    }
}

impl std::error::Error for MergeErrors {}

/// Merge pod-flagged bids into synthetic per-pod seats, in place.
///
/// Zero and negative price bids are dropped. Pod-flagged bids whose slot
/// impression id does not decompose into a parent impression id stay in
/// their original seat as plain bids. A bucket whose stitch fails is dropped from the output and
/// recorded. Seats left without bids are dropped.
pub fn merge_seat_bids(
    response: &mut BidResponse,
    engine: XmlEngine,
    decompose: &dyn Fn(&str) -> Option<String>,
) -> Option<MergeErrors> {
    let mut buckets: IndexMap<String, Vec<Bid>> = IndexMap::new();
    let mut kept: Vec<SeatBid> = Vec::new();

    for mut seat in std::mem::take(&mut response.seatbid) {
        let mut plain = Vec::new();
        for mut bid in std::mem::take(&mut seat.bid) {
            if bid.price <= 0.0 {
                continue;
            }
            let flagged = take_pod_flag(&mut bid);
            if flagged {
                if let Some(parent) = decompose(&bid.impid) {
                    buckets.entry(parent).or_default().push(bid);
                    continue;
                }
            }
            plain.push(bid);
        }
        if !plain.is_empty() {
            seat.bid = plain;
            kept.push(seat);
        }
    }

    let mut errors = Vec::new();
    for (parent, bids) in buckets {
        // The pod price covers the whole bucket, creatives that fail to
        // append included.
        let price: f64 = bids.iter().map(|b| b.price).sum();

        match stitch_bucket(engine, &bids) {
            Ok(adm) => {
                let first = &bids[0];
                kept.push(SeatBid {
                    seat: Some(POD_SEAT.to_string()),
                    bid: vec![Bid {
                        id: Uuid::new_v4().to_string(),
                        impid: parent,
                        price,
                        adm: Some(adm),
                        cat: first.cat.clone(),
                        adomain: first.adomain.clone(),
                        ..Default::default()
                    }],
                    ..Default::default()
                });
            }
            Err(error) => errors.push(MergeError {
                imp_id: parent,
                error,
            }),
        }
    }

    response.seatbid = kept;

    if errors.is_empty() {
        None
    } else {
        Some(MergeErrors { errors })
    }
}

/// Stitch one bucket. The first failed append aborts the rest of the
/// bucket.
fn stitch_bucket(engine: XmlEngine, bids: &[Bid]) -> Result<String, StitchError> {
    let mut pod = new_pod_builder(engine);
    for bid in bids {
        pod.append(bid)?;
    }
    pod.build()
}

/// Read the ad-pod slot flag from the bid ext and strip the pod block.
fn take_pod_flag(bid: &mut Bid) -> bool {
    let mut flagged = false;
    let mut clear = false;
    if let Some(map) = bid.ext.as_mut().and_then(Value::as_object_mut) {
        flagged = map
            .get(keys::EXT_ADPOD)
            .and_then(|a| a.get(keys::EXT_IS_ADPOD_BID))
            .and_then(Value::as_bool)
            .unwrap_or(false);
        map.remove(keys::EXT_ADPOD);
        clear = map.is_empty();
    }
    if clear {
        bid.ext = None;
    }
    flagged
}
