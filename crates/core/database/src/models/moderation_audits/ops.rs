use bazaar_result::Result;

use crate::ModerationAuditItem;

mod reference;

#[async_trait]
pub trait AbstractModerationAudits: Sync + Send {
    /// Insert a new audit item into the database
    async fn insert_audit_item(&self, item: &ModerationAuditItem) -> Result<()>;

    /// Fetch the audit items recorded against a report, oldest first
    async fn fetch_audit_items(&self, report_id: &str) -> Result<Vec<ModerationAuditItem>>;
}
