use iso8601_timestamp::Timestamp;

auto_derived!(
    /// Kind of content a report is filed against
    #[derive(Copy, Hash)]
    #[serde(rename_all = "lowercase")]
    pub enum ReportKind {
        /// Report against a marketplace listing
        Listing,
        /// Report against a user account
        User,
        /// Report against a chat conversation
        Chat,
    }

    /// Status of the report
    #[serde(rename_all = "snake_case")]
    pub enum ReportStatus {
        /// Report is waiting for triage
        Open,
        /// Report is being looked at by an operator
        UnderReview,
        /// Report was actioned and resolved
        Resolved,
        /// Report was dismissed without action
        Dismissed,
    }

    /// Assessed risk level of the reported party
    pub enum RiskLevel {
        High,
        Medium,
        Low,
    }

    /// Somebody involved in a report, either as reporter or reported party
    pub struct Person {
        /// Unique Id
        pub id: String,
        /// Display name
        pub name: String,
        /// Avatar URL
        #[serde(skip_serializing_if = "Option::is_none")]
        pub avatar: Option<String>,

        /// Self-reported location
        #[serde(skip_serializing_if = "Option::is_none")]
        pub location: Option<String>,
        /// When the account was created
        #[serde(skip_serializing_if = "Option::is_none")]
        pub member_since: Option<Timestamp>,
        /// When the account was last active
        #[serde(skip_serializing_if = "Option::is_none")]
        pub last_seen: Option<Timestamp>,
        /// Typical response time shown on the profile
        #[serde(skip_serializing_if = "Option::is_none")]
        pub avg_response_time: Option<String>,
        /// Number of reports previously filed against this account
        #[serde(skip_serializing_if = "Option::is_none")]
        pub previous_reports: Option<u32>,
        /// Number of completed sales
        #[serde(skip_serializing_if = "Option::is_none")]
        pub total_sales: Option<u32>,
    }

    /// Listing as shown in a report
    pub struct ListingSummary {
        /// Unique Id
        pub id: String,
        /// Listing title
        pub title: String,
        /// Cover image URL
        #[serde(skip_serializing_if = "Option::is_none")]
        pub image: Option<String>,
        /// The seller behind the listing
        pub seller: Person,
    }

    /// Extended listing information
    pub struct ListingDetails {
        /// Asking price in minor currency units
        pub price: u64,
        /// ISO 4217 currency code
        pub currency: String,
        /// Item condition
        pub condition: String,
        /// Marketplace category
        pub category: String,
        /// Seller-provided description
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        /// When the listing went live
        #[serde(skip_serializing_if = "Option::is_none")]
        pub listed_at: Option<Timestamp>,
    }

    /// Label / value tile shown on the report detail page
    pub struct MetricTile {
        pub label: String,
        pub value: String,
    }

    /// Counts of prior moderation activity against the reported party
    pub struct RiskIndicators {
        pub warnings: u32,
        pub suspensions: u32,
        pub bans: u32,
    }

    /// Channel a trust indicator applies to
    #[serde(rename_all = "lowercase")]
    pub enum TrustChannel {
        Email,
        Phone,
        Identity,
        Payment,
    }

    /// Per-channel verification state
    pub struct TrustIndicator {
        pub channel: TrustChannel,
        pub verified: bool,
        /// When verification happened
        #[serde(skip_serializing_if = "Option::is_none")]
        pub verified_at: Option<Timestamp>,
    }

    /// Icon category for an account history entry
    #[serde(rename_all = "lowercase")]
    pub enum AccountEventCategory {
        Warning,
        Suspension,
        Ban,
        Report,
    }

    /// Past moderation event on the reported account
    pub struct AccountEvent {
        pub category: AccountEventCategory,
        pub description: String,
        pub occurred_at: Timestamp,
    }

    /// Listing a reported conversation took place about
    pub struct ChatContext {
        pub listing_title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub listing_image: Option<String>,
        /// When the conversation started
        pub started_at: Timestamp,
    }

    /// Direction of a chat message relative to the reporter
    #[serde(rename_all = "lowercase")]
    pub enum MessageDirection {
        Incoming,
        Outgoing,
    }

    /// Single message from a reported conversation
    pub struct ChatMessage {
        /// Display name of the sender
        pub sender: String,
        pub text: String,
        pub sent_at: Timestamp,
        pub direction: MessageDirection,
    }

    /// The subject being reported
    #[serde(tag = "type", rename_all = "lowercase")]
    pub enum ReportedSubject {
        /// Report against a marketplace listing
        Listing {
            /// The listing in question
            listing: ListingSummary,
            /// Extended listing information
            #[serde(skip_serializing_if = "Option::is_none")]
            listing_details: Option<ListingDetails>,
            /// Reported party, where it differs from the seller
            #[serde(skip_serializing_if = "Option::is_none")]
            reported_user: Option<Person>,
        },
        /// Report against a user account
        User {
            /// The reported account
            reported_user: Person,
            /// Per-channel verification state
            trust_indicators: Vec<TrustIndicator>,
            /// Past moderation events on this account
            account_history: Vec<AccountEvent>,
        },
        /// Report against a chat conversation
        Chat {
            /// The reported participant
            reported_user: Person,
            /// Id of the conversation
            chat_id: String,
            /// Listing the conversation took place about
            #[serde(skip_serializing_if = "Option::is_none")]
            chat_context: Option<ChatContext>,
            /// The conversation transcript
            chat_messages: Vec<ChatMessage>,
        },
    }

    /// Abuse / fraud report filed by a user
    pub struct Report {
        /// Unique Id, stable within its kind
        #[serde(rename = "_id")]
        pub id: String,
        /// Reason given by the reporter
        pub reason: String,
        /// Status of the report
        pub status: ReportStatus,
        /// When the report was submitted
        pub submitted_at: Timestamp,
        /// Who filed the report
        pub reporter: Person,
        /// What the report is filed against
        #[serde(flatten)]
        pub subject: ReportedSubject,
        /// Label / value tiles for the detail page
        pub metrics: Vec<MetricTile>,
        /// Prior moderation activity against the reported party
        pub risk_indicators: RiskIndicators,
        /// Assessed risk level
        pub risk_level: RiskLevel,
    }
);

impl Report {
    /// Which kind of report this is
    pub fn kind(&self) -> ReportKind {
        match self.subject {
            ReportedSubject::Listing { .. } => ReportKind::Listing,
            ReportedSubject::User { .. } => ReportKind::User,
            ReportedSubject::Chat { .. } => ReportKind::Chat,
        }
    }

    /// The reported party; for listing reports this defaults to the seller
    pub fn reported_user(&self) -> &Person {
        match &self.subject {
            ReportedSubject::Listing {
                listing,
                reported_user,
                ..
            } => reported_user.as_ref().unwrap_or(&listing.seller),
            ReportedSubject::User { reported_user, .. } => reported_user,
            ReportedSubject::Chat { reported_user, .. } => reported_user,
        }
    }
}
