use bazaar_models::v0::{ActionIntent, ModerationAction};

auto_derived!(
    /// Record of one committed moderation action
    pub struct ModerationAuditItem {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Report the action was taken against
        pub report_id: String,
        /// The committed action
        pub action: ModerationAction,
        /// Attached context: warning message, removal comment or reason
        #[serde(skip_serializing_if = "Option::is_none")]
        pub context: Option<String>,
    }
);

impl ModerationAuditItem {
    /// Build the audit record for a committed intent
    pub fn from_intent(intent: &ActionIntent) -> ModerationAuditItem {
        ModerationAuditItem {
            id: ulid::Ulid::new().to_string(),
            report_id: intent.report_id.clone(),
            action: intent.action,
            context: intent.payload.as_ref().and_then(|payload| {
                payload
                    .message
                    .clone()
                    .or_else(|| payload.comment.clone())
                    .or_else(|| payload.reason.map(|reason| format!("{reason:?}")))
            }),
        }
    }
}
