use bazaar_result::Result;

use crate::ModerationAuditItem;
use crate::ReferenceDb;

use super::AbstractModerationAudits;

#[async_trait]
impl AbstractModerationAudits for ReferenceDb {
    /// Insert a new audit item into the database
    async fn insert_audit_item(&self, item: &ModerationAuditItem) -> Result<()> {
        let mut audits = self.moderation_audits.lock().await;
        if audits.contains_key(&item.id) {
            Err(create_database_error!("insert", "moderation_audits"))
        } else {
            audits.insert(item.id.to_string(), item.clone());
            Ok(())
        }
    }

    /// Fetch the audit items recorded against a report, oldest first
    async fn fetch_audit_items(&self, report_id: &str) -> Result<Vec<ModerationAuditItem>> {
        let audits = self.moderation_audits.lock().await;
        Ok(audits
            .values()
            .filter(|item| item.report_id == report_id)
            .cloned()
            .collect())
    }
}
