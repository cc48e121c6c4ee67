//! Numeric no-bid reason codes for the structured error body. Values 1 and
//! 2 follow the standard response codes; the 700 range is local to this
//! service.

pub const TECHNICAL_ERROR: i64 = 1;
pub const INVALID_REQUEST: i64 = 2;

pub const INTERNAL_ERROR: i64 = 700;
pub const EMPTY_SEATBID: i64 = 701;
pub const MISSING_REDIRECT_TARGET: i64 = 702;
pub const INVALID_REDIRECT_TARGET: i64 = 703;
