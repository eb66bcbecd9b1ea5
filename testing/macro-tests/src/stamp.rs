use crate::prelude::*;
use std::time::SystemTime;
use time::OffsetDateTime;

///
/// SpecialTime
/// Tuple record around a third-party timestamp.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Trim)]
pub struct SpecialTime(pub OffsetDateTime);

///
/// Revision
/// Carries its own text but is treated as a value, not a record.
///

#[derive(Clone, Debug, Eq, PartialEq, Trim)]
#[trim(opaque)]
pub struct Revision {
    pub tag: String,
    pub at: SystemTime,
}

///
/// Event
///

#[derive(Clone, Debug, PartialEq, Trim)]
pub struct Event {
    pub title: String,
    pub special: SpecialTime,
    pub created_at: OffsetDateTime,
    pub seen_at: Option<SystemTime>,
    pub revision: Revision,
    pub note: Option<String>,
}

///
/// TESTS
///
