use std::sync::Arc;

use futures::lock::Mutex;
use indexmap::IndexMap;

use bazaar_models::v0::Report;

use crate::{ModerationAuditItem, ReportCompositeKey};

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        /// Insertion order of reports is the collection order queries preserve
        pub reports: Arc<Mutex<IndexMap<ReportCompositeKey, Report>>>,
        pub moderation_audits: Arc<Mutex<IndexMap<String, ModerationAuditItem>>>,
    }
);
