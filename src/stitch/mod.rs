//! Creative stitching: accumulate per-slot winning creatives into one
//! combined VAST document.
//!
//! Two capability-equivalent backends implement [`PodBuilder`]: a tree
//! backend that parses every creative into an owned element tree, and a
//! stream backend that captures raw ad spans and splices attributes
//! textually. The backend is chosen once, at construction, never from
//! global state mid-operation.

mod dom;
mod stream;
mod tree;

pub use stream::StreamPodBuilder;
pub use tree::TreePodBuilder;

use std::fmt;

use crate::openrtb::Bid;

pub(crate) const VAST_TAG: &str = "VAST";
pub(crate) const AD_TAG: &str = "Ad";
pub(crate) const WRAPPER_TAG: &str = "Wrapper";
pub(crate) const AD_TAG_URI_TAG: &str = "VASTAdTagURI";
pub(crate) const VERSION_ATTR: &str = "version";
pub(crate) const SEQUENCE_ATTR: &str = "sequence";

/// Supported VAST versions, in ascending order. The running maximum floors
/// into this table by integer part and never indexes out of it.
pub(crate) const VAST_VERSIONS: [&str; 5] = ["0", "1.0", "2.0", "3.0", "4.0"];

/// The baseline version every pod starts from.
pub(crate) const BASELINE_VERSION: f64 = 2.0;

/// The document emitted when there is nothing to stitch.
pub const EMPTY_VAST: &str = "<VAST version=\"2.0\"/>";

#[derive(Debug, Clone, PartialEq)]
pub enum StitchError {
    /// Required creative structure is absent (no root, no ad child, or an
    /// unparsable payload).
    Structural(String),
    /// The XML layer failed while reading or writing.
    Xml(String),
}

impl fmt::Display for StitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StitchError::Structural(msg) => write!(f, "structural error: {}", msg),
            StitchError::Xml(msg) => write!(f, "xml error: {}", msg),
        }
    }
}

impl std::error::Error for StitchError {}

/// Which stitching backend to use. Selected once per response from
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XmlEngine {
    Tree,
    Stream,
}

/// One in-progress ad pod. Owned by exactly one assembly call.
pub trait PodBuilder {
    fn name(&self) -> &'static str;

    /// Append one bid's creative to the pod, stamping it with the next
    /// sequence number. A failed append leaves the pod unchanged; the
    /// caller decides whether to continue with the remaining bids.
    fn append(&mut self, bid: &Bid) -> Result<(), StitchError>;

    /// Stamp the root version from the running maximum and serialize.
    /// Calling twice without an intervening append is byte-identical.
    fn build(&mut self) -> Result<String, StitchError>;

    /// Number of creatives appended so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn new_pod_builder(engine: XmlEngine) -> Box<dyn PodBuilder> {
    match engine {
        XmlEngine::Tree => Box::new(TreePodBuilder::new()),
        XmlEngine::Stream => Box::new(StreamPodBuilder::new()),
    }
}

/// A creative payload that is just a redirect URL rather than a document.
pub(crate) fn is_bare_url(payload: &str) -> bool {
    payload.starts_with("http://") || payload.starts_with("https://")
}

/// Numeric value of a declared version; absent or unparsable declarations
/// fall back to the baseline.
pub(crate) fn version_value(declared: Option<&str>) -> f64 {
    declared
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(BASELINE_VERSION)
}

/// Table label for a running version maximum: integer part, clamped to the
/// table.
pub(crate) fn version_label(version: f64) -> &'static str {
    let idx = (version.max(0.0) as usize).min(VAST_VERSIONS.len() - 1);
    VAST_VERSIONS[idx]
}

/// The creative markup of a bid, if any.
pub(crate) fn bid_payload(bid: &Bid) -> Result<&str, StitchError> {
    match bid.adm.as_deref().map(str::trim) {
        Some(adm) if !adm.is_empty() => Ok(adm),
        _ => Err(StitchError::Structural(format!(
            "bid {} has no creative",
            bid.id
        ))),
    }
}
