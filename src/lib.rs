//! # Podstitch: CTV Ad-Pod Request/Response Transformation
//!
//! Podstitch turns the flat, dot-keyed query surface of a CTV ad request
//! into a structured bid request, explodes video impressions into pod
//! slots, and on the way back stitches per-slot winning creatives into one
//! combined VAST document.
//!
//! ## Pipeline
//!
//! - **Parse**: [`RequestParser`] walks every query key through the
//!   [`FieldKeyRegistry`] dispatch tables, collecting per-field errors
//!   without stopping.
//! - **Expand**: [`adrule::expand`] replaces each eligible video impression
//!   with one impression per configured pod slot.
//! - **Merge**: after the external auction, [`merge_seat_bids`] buckets
//!   pod-flagged bids by parent impression and stitches each bucket with a
//!   [`PodBuilder`] backend ([`XmlEngine::Tree`] or [`XmlEngine::Stream`]).
//! - **Render**: [`render`] emits raw VAST, structured JSON, or validates a
//!   redirect target.
//!
//! ## Example
//!
//! ```ignore
//! use podstitch::{registry, QueryParams, RequestParser};
//!
//! let values = QueryParams::from_query_string(
//!     "req.id=r1&imp.vid.mimes=video/mp4&site.page=https%3A%2F%2Fpub.com",
//! );
//! let (ortb, errors) = RequestParser::parse(values, registry::default_registry());
//! assert_eq!(ortb.id, "r1");
//! assert!(errors.is_none());
//! ```
//!
//! This core performs no I/O: the auction itself, caching, and HTTP
//! handling belong to the caller.

pub mod adrule;
pub mod assemble;
pub mod keys;
pub mod nbr;
pub mod openrtb;
pub mod parser;
pub mod path;
pub mod query;
pub mod registry;
pub mod render;
pub mod schain;
pub mod stitch;

pub use assemble::{merge_seat_bids, MergeError, MergeErrors, POD_SEAT};
pub use parser::{ParseErrors, RequestParser};
pub use query::{FieldError, QueryParams};
pub use registry::{default_registry, Classification, FieldKeyRegistry};
pub use render::{
    render_error_body, render_raw_vast, render_structured, RedirectTarget, RenderError,
    ResponseFormat,
};
pub use stitch::{new_pod_builder, PodBuilder, StitchError, XmlEngine};
