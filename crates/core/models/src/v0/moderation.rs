auto_derived!(
    /// Action an operator can take against a report
    #[derive(Copy, Hash)]
    #[serde(rename_all = "lowercase")]
    pub enum ModerationAction {
        /// Send the reported party a warning message
        Warn,
        /// Temporarily suspend the reported account
        Suspend,
        /// Permanently ban the reported account
        Ban,
        /// Hide the reported listing from the marketplace
        Hide,
        /// Remove the reported listing
        Remove,
        /// Dismiss the report without action
        Dismiss,
    }

    /// Reason attached to a listing removal
    #[derive(Copy)]
    #[serde(rename_all = "snake_case")]
    pub enum RemovalReason {
        PolicyViolation,
        FraudulentScam,
        CopyrightIp,
        DuplicateSpam,
        Other,
    }

    /// Structured input collected with an action
    #[derive(Default)]
    pub struct ActionPayload {
        /// Removal reason, for listing removals
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reason: Option<RemovalReason>,
        /// Free-text comment, required when the reason is `other`
        #[serde(skip_serializing_if = "Option::is_none")]
        pub comment: Option<String>,
        /// Warning message sent to the reported party
        #[serde(skip_serializing_if = "Option::is_none")]
        pub message: Option<String>,
    }

    /// Intent record emitted to the moderation collaborator on commit
    pub struct ActionIntent {
        /// Report the action was taken against
        pub report_id: String,
        /// The committed action
        pub action: ModerationAction,
        /// Structured input collected with the action
        #[serde(skip_serializing_if = "Option::is_none")]
        pub payload: Option<ActionPayload>,
    }
);
