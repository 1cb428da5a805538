//! Space launch bookings server.
//!
//! Accepts seat bookings on launches from a named launch pad, refusing any
//! date on which the pad already has a launch scheduled. The launch schedule
//! comes from the SpaceX v4 API, with past days cached since they cannot
//! change.

pub mod availability;
pub mod bookings;
pub mod cache;
pub mod clock;
pub mod config;
pub mod domain;
pub mod spacex;
pub mod web;
