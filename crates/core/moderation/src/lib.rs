//! Action workflow driving the moderation of one report at a time.

#[macro_use]
extern crate async_trait;

#[macro_use]
extern crate log;

#[macro_use]
extern crate bazaar_result;

mod catalogue;
mod executor;
mod session;

pub use catalogue::*;
pub use executor::*;
pub use session::*;
