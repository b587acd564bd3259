//! Demo dataset standing in for the production report feed.

use bazaar_models::v0::{
    AccountEvent, AccountEventCategory, ChatContext, ChatMessage, ListingDetails, ListingSummary,
    MessageDirection, MetricTile, Person, Report, ReportStatus, ReportedSubject, RiskIndicators,
    RiskLevel, TrustChannel, TrustIndicator,
};
use bazaar_result::Result;
use iso8601_timestamp::{Duration, Timestamp};

use crate::Database;

fn person(id: &str, name: &str) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        avatar: Some(format!("/avatars/{id}.webp")),
        location: None,
        member_since: None,
        last_seen: None,
        avg_response_time: None,
        previous_reports: None,
        total_sales: None,
    }
}

fn tile(label: &str, value: &str) -> MetricTile {
    MetricTile {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn quiet_history() -> RiskIndicators {
    RiskIndicators {
        warnings: 0,
        suspensions: 0,
        bans: 0,
    }
}

/// Demo reports, submitted at fixed offsets before `now`.
///
/// Anchoring on a caller-supplied `now` keeps date-preset demos (and tests)
/// reproducible.
pub fn demo_reports(now: Timestamp) -> Vec<Report> {
    let mut reports = vec![];

    // --- Listing reports ---

    let seller = Person {
        location: Some("Rotterdam, NL".to_string()),
        member_since: Some(now - Duration::days(412)),
        total_sales: Some(37),
        ..person("USR-2201", "Marcus Webb")
    };
    reports.push(Report {
        id: "RPT-L1001".to_string(),
        reason: "Counterfeit item".to_string(),
        status: ReportStatus::Open,
        submitted_at: now - Duration::hours(3),
        reporter: person("USR-1744", "Priya Shah"),
        subject: ReportedSubject::Listing {
            listing: ListingSummary {
                id: "LST-88410".to_string(),
                title: "Vintage Leica M3 rangefinder camera".to_string(),
                image: Some("/listings/88410/cover.webp".to_string()),
                seller: seller.clone(),
            },
            listing_details: Some(ListingDetails {
                price: 149_500,
                currency: "EUR".to_string(),
                condition: "Used - good".to_string(),
                category: "Cameras & Photography".to_string(),
                description: Some(
                    "Original 1956 body, recently serviced. Ships worldwide.".to_string(),
                ),
                listed_at: Some(now - Duration::days(12)),
            }),
            reported_user: None,
        },
        metrics: vec![
            tile("Listing views", "1,204"),
            tile("Watchers", "18"),
            tile("Seller rating", "4.6"),
        ],
        risk_indicators: RiskIndicators {
            warnings: 1,
            suspensions: 0,
            bans: 0,
        },
        risk_level: RiskLevel::Medium,
    });

    reports.push(Report {
        id: "RPT-L1002".to_string(),
        reason: "Prohibited item".to_string(),
        status: ReportStatus::UnderReview,
        submitted_at: now - Duration::days(2),
        reporter: person("USR-3310", "Jonas Lindqvist"),
        subject: ReportedSubject::Listing {
            listing: ListingSummary {
                id: "LST-90233".to_string(),
                title: "Taxidermy barn owl, glass case".to_string(),
                image: Some("/listings/90233/cover.webp".to_string()),
                seller: person("USR-5120", "Hannah Okafor"),
            },
            listing_details: Some(ListingDetails {
                price: 32_000,
                currency: "EUR".to_string(),
                condition: "Used - fair".to_string(),
                category: "Collectables".to_string(),
                description: None,
                listed_at: Some(now - Duration::days(5)),
            }),
            reported_user: None,
        },
        metrics: vec![tile("Listing views", "356"), tile("Watchers", "4")],
        risk_indicators: quiet_history(),
        risk_level: RiskLevel::Low,
    });

    reports.push(Report {
        id: "RPT-L1003".to_string(),
        reason: "Misleading description".to_string(),
        status: ReportStatus::Open,
        submitted_at: now - Duration::days(9),
        reporter: person("USR-9044", "Amara Diallo"),
        subject: ReportedSubject::Listing {
            listing: ListingSummary {
                id: "LST-91567".to_string(),
                title: "Carbon road bike, 54cm, Ultegra groupset".to_string(),
                image: None,
                seller: person("USR-7719", "Stefan Brandt"),
            },
            listing_details: None,
            reported_user: None,
        },
        metrics: vec![tile("Listing views", "89")],
        risk_indicators: quiet_history(),
        risk_level: RiskLevel::Low,
    });

    reports.push(Report {
        id: "RPT-L1004".to_string(),
        reason: "Stolen goods".to_string(),
        status: ReportStatus::Resolved,
        submitted_at: now - Duration::days(40),
        reporter: person("USR-1744", "Priya Shah"),
        subject: ReportedSubject::Listing {
            listing: ListingSummary {
                id: "LST-86001".to_string(),
                title: "iPhone 15 Pro, sealed box, no receipt".to_string(),
                image: Some("/listings/86001/cover.webp".to_string()),
                seller: seller.clone(),
            },
            listing_details: None,
            reported_user: Some(seller),
        },
        metrics: vec![tile("Listing views", "2,871"), tile("Watchers", "51")],
        risk_indicators: RiskIndicators {
            warnings: 1,
            suspensions: 1,
            bans: 0,
        },
        risk_level: RiskLevel::High,
    });

    // --- User reports ---

    reports.push(Report {
        id: "RPT-U2001".to_string(),
        reason: "Repeated non-delivery".to_string(),
        status: ReportStatus::Open,
        submitted_at: now - Duration::hours(6),
        reporter: person("USR-6402", "Eleanor Vance"),
        subject: ReportedSubject::User {
            reported_user: Person {
                location: Some("Leipzig, DE".to_string()),
                member_since: Some(now - Duration::days(230)),
                last_seen: Some(now - Duration::hours(1)),
                avg_response_time: Some("~4 hours".to_string()),
                previous_reports: Some(3),
                total_sales: Some(12),
                ..person("USR-8815", "Viktor Rusu")
            },
            trust_indicators: vec![
                TrustIndicator {
                    channel: TrustChannel::Email,
                    verified: true,
                    verified_at: Some(now - Duration::days(230)),
                },
                TrustIndicator {
                    channel: TrustChannel::Phone,
                    verified: false,
                    verified_at: None,
                },
                TrustIndicator {
                    channel: TrustChannel::Payment,
                    verified: true,
                    verified_at: Some(now - Duration::days(180)),
                },
            ],
            account_history: vec![
                AccountEvent {
                    category: AccountEventCategory::Warning,
                    description: "Warned for late shipping".to_string(),
                    occurred_at: now - Duration::days(95),
                },
                AccountEvent {
                    category: AccountEventCategory::Report,
                    description: "Reported for non-delivery, dismissed".to_string(),
                    occurred_at: now - Duration::days(60),
                },
            ],
        },
        metrics: vec![
            tile("Open disputes", "2"),
            tile("Refund rate", "9%"),
            tile("Member for", "8 months"),
        ],
        risk_indicators: RiskIndicators {
            warnings: 1,
            suspensions: 0,
            bans: 0,
        },
        risk_level: RiskLevel::Medium,
    });

    reports.push(Report {
        id: "RPT-U2002".to_string(),
        reason: "Abusive messages".to_string(),
        status: ReportStatus::Open,
        submitted_at: now - Duration::days(1),
        reporter: person("USR-3310", "Jonas Lindqvist"),
        subject: ReportedSubject::User {
            reported_user: Person {
                previous_reports: Some(1),
                ..person("USR-4470", "Eleanor Hunt")
            },
            trust_indicators: vec![TrustIndicator {
                channel: TrustChannel::Email,
                verified: true,
                verified_at: Some(now - Duration::days(30)),
            }],
            account_history: vec![],
        },
        metrics: vec![tile("Member for", "1 month")],
        risk_indicators: quiet_history(),
        risk_level: RiskLevel::Low,
    });

    reports.push(Report {
        id: "RPT-U2003".to_string(),
        reason: "Suspected ban evasion".to_string(),
        status: ReportStatus::UnderReview,
        submitted_at: now - Duration::days(4),
        reporter: person("USR-9044", "Amara Diallo"),
        subject: ReportedSubject::User {
            reported_user: Person {
                location: Some("Unknown".to_string()),
                member_since: Some(now - Duration::days(6)),
                previous_reports: Some(0),
                ..person("USR-9913", "Pawel Zielinski")
            },
            trust_indicators: vec![TrustIndicator {
                channel: TrustChannel::Email,
                verified: false,
                verified_at: None,
            }],
            account_history: vec![AccountEvent {
                category: AccountEventCategory::Ban,
                description: "Previous account banned for fraud".to_string(),
                occurred_at: now - Duration::days(20),
            }],
        },
        metrics: vec![tile("Member for", "6 days")],
        risk_indicators: RiskIndicators {
            warnings: 0,
            suspensions: 0,
            bans: 1,
        },
        risk_level: RiskLevel::High,
    });

    // --- Chat reports ---

    reports.push(Report {
        id: "RPT-C3001".to_string(),
        reason: "Off-platform payment pressure".to_string(),
        status: ReportStatus::Open,
        submitted_at: now - Duration::hours(12),
        reporter: person("USR-1744", "Priya Shah"),
        subject: ReportedSubject::Chat {
            reported_user: person("USR-8815", "Viktor Rusu"),
            chat_id: "CHT-55102".to_string(),
            chat_context: Some(ChatContext {
                listing_title: "Vintage Leica M3 rangefinder camera".to_string(),
                listing_image: Some("/listings/88410/cover.webp".to_string()),
                started_at: now - Duration::days(1),
            }),
            chat_messages: vec![
                ChatMessage {
                    sender: "Priya Shah".to_string(),
                    text: "Is the camera still available?".to_string(),
                    sent_at: now - Duration::hours(20),
                    direction: MessageDirection::Outgoing,
                },
                ChatMessage {
                    sender: "Viktor Rusu".to_string(),
                    text: "Yes. Pay by bank transfer outside the app and I take 20% off."
                        .to_string(),
                    sent_at: now - Duration::hours(19),
                    direction: MessageDirection::Incoming,
                },
                ChatMessage {
                    sender: "Priya Shah".to_string(),
                    text: "I'd rather keep payment on the platform.".to_string(),
                    sent_at: now - Duration::hours(19),
                    direction: MessageDirection::Outgoing,
                },
                ChatMessage {
                    sender: "Viktor Rusu".to_string(),
                    text: "Transfer only. Plenty of other buyers waiting.".to_string(),
                    sent_at: now - Duration::hours(18),
                    direction: MessageDirection::Incoming,
                },
            ],
        },
        metrics: vec![
            tile("Messages", "4"),
            tile("First response", "54 min"),
        ],
        risk_indicators: RiskIndicators {
            warnings: 1,
            suspensions: 0,
            bans: 0,
        },
        risk_level: RiskLevel::Medium,
    });

    reports.push(Report {
        id: "RPT-C3002".to_string(),
        reason: "Harassment".to_string(),
        status: ReportStatus::Dismissed,
        submitted_at: now - Duration::days(15),
        reporter: person("USR-5120", "Hannah Okafor"),
        subject: ReportedSubject::Chat {
            reported_user: person("USR-3310", "Jonas Lindqvist"),
            chat_id: "CHT-51877".to_string(),
            chat_context: None,
            chat_messages: vec![ChatMessage {
                sender: "Jonas Lindqvist".to_string(),
                text: "Lowball offers like yours are a joke.".to_string(),
                sent_at: now - Duration::days(15),
                direction: MessageDirection::Incoming,
            }],
        },
        metrics: vec![tile("Messages", "1")],
        risk_indicators: quiet_history(),
        risk_level: RiskLevel::Low,
    });

    reports
}

/// Seed the demo dataset into a database
pub async fn seed_demo(db: &Database) -> Result<()> {
    let reports = demo_reports(Timestamp::now_utc());
    let count = reports.len();

    for report in &reports {
        db.insert_report(report).await?;
    }

    info!("Seeded {count} demo reports.");
    Ok(())
}
