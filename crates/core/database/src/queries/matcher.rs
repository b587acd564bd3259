use bazaar_models::v0::{Report, ReportedSubject};

/// Whether a report satisfies a free-text query.
///
/// Empty and whitespace-only queries match everything. Otherwise this is a
/// case-insensitive substring test over a kind-specific composite of fields.
/// The composite is rebuilt per call; collections here are small enough that
/// an index would be overkill, but that is where one would go.
pub fn matches_search(report: &Report, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    haystack(report)
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}

fn haystack(report: &Report) -> Vec<&str> {
    match &report.subject {
        ReportedSubject::Listing { listing, .. } => vec![
            report.id.as_str(),
            listing.title.as_str(),
            listing.seller.name.as_str(),
            report.reporter.name.as_str(),
        ],
        ReportedSubject::User { reported_user, .. }
        | ReportedSubject::Chat { reported_user, .. } => vec![
            report.id.as_str(),
            reported_user.name.as_str(),
            report.reporter.name.as_str(),
        ],
    }
}
