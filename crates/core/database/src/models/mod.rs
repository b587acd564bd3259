mod moderation_audits;
mod reports;

pub use moderation_audits::*;
pub use reports::*;

use crate::{Database, ReferenceDb};

pub trait AbstractDatabase:
    Sync + Send + moderation_audits::AbstractModerationAudits + reports::AbstractReports
{
}

impl AbstractDatabase for ReferenceDb {}

impl std::ops::Deref for Database {
    type Target = dyn AbstractDatabase;

    fn deref(&self) -> &Self::Target {
        match &self {
            Database::Reference(dummy) => dummy,
        }
    }
}
