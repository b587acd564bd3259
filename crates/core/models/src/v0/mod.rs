mod filters;
mod moderation;
mod reports;

pub use filters::*;
pub use moderation::*;
pub use reports::*;
