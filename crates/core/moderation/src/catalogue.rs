use bazaar_models::v0::{ModerationAction, ReportKind};

const LISTING_ACTIONS: &[ModerationAction] = &[
    ModerationAction::Hide,
    ModerationAction::Remove,
    ModerationAction::Warn,
    ModerationAction::Dismiss,
];

const ACCOUNT_ACTIONS: &[ModerationAction] = &[
    ModerationAction::Warn,
    ModerationAction::Suspend,
    ModerationAction::Ban,
    ModerationAction::Dismiss,
];

/// The action menu for a report kind.
///
/// Computed once per kind; the menu never changes while it is open.
pub fn actions_for(kind: ReportKind) -> &'static [ModerationAction] {
    match kind {
        ReportKind::Listing => LISTING_ACTIONS,
        ReportKind::User | ReportKind::Chat => ACCOUNT_ACTIONS,
    }
}

/// Menu label for an action against a report of the given kind
pub fn action_label(action: ModerationAction, kind: ReportKind) -> &'static str {
    match (action, kind) {
        (ModerationAction::Hide, _) => "Hide Listing",
        (ModerationAction::Remove, _) => "Remove Listing",
        (ModerationAction::Warn, ReportKind::Listing) => "Warn Seller",
        (ModerationAction::Warn, _) => "Warn User",
        (ModerationAction::Suspend, _) => "Suspend User",
        (ModerationAction::Ban, _) => "Ban User",
        (ModerationAction::Dismiss, _) => "Dismiss Report",
    }
}

/// Whether the confirmation surface collects a removal reason
pub fn requires_removal_reason(action: ModerationAction) -> bool {
    matches!(action, ModerationAction::Remove)
}

/// Whether the confirmation surface collects a message for the reported party
pub fn requires_message(action: ModerationAction) -> bool {
    matches!(action, ModerationAction::Warn)
}
