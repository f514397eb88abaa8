//! Identifier and time sources
//!
//! Both are traits so tests can pin ids and timestamps.

use std::fmt::Debug;

/// Produces globally unique opaque identifiers
pub trait IdGenerator: Send + Sync + Debug {
    fn generate_id(&self) -> String;
}

/// UUID v4, hyphenated lowercase text
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Current time as Unix seconds
pub trait Clock: Send + Sync + Debug {
    fn now_timestamp(&self) -> i64;
}

/// Wall clock (UTC)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_timestamp(&self) -> i64 {
        shared::util::now_seconds()
    }
}
