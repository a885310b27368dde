//! Checked-in output of a generation run against
//! `fixtures/device_cloud.json`, plus the hand-written local models the
//! generated client imports.

pub mod client;
pub mod types;
