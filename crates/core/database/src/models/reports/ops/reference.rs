use bazaar_config::config;
use bazaar_models::v0::{PaginatedResult, Report, ReportFilterParams, ReportKind};
use bazaar_result::Result;
use iso8601_timestamp::Timestamp;

use crate::queries::{matches_search, paginate, resolve_date_bounds};
use crate::ReferenceDb;
use crate::ReportCompositeKey;

use super::AbstractReports;

#[async_trait]
impl AbstractReports for ReferenceDb {
    /// Insert a new report into the database
    async fn insert_report(&self, report: &Report) -> Result<()> {
        let mut reports = self.reports.lock().await;
        let key = ReportCompositeKey::from(report);
        if reports.contains_key(&key) {
            Err(create_database_error!("insert", "reports"))
        } else {
            reports.insert(key, report.clone());
            Ok(())
        }
    }

    /// Fetch one report by kind and id
    async fn fetch_report(&self, kind: ReportKind, id: &str) -> Result<Report> {
        let reports = self.reports.lock().await;
        reports
            .get(&ReportCompositeKey {
                kind,
                id: id.to_string(),
            })
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch one page of reports of the given kind matching the filter
    async fn fetch_reports_page(
        &self,
        kind: ReportKind,
        params: &ReportFilterParams,
        now: Timestamp,
    ) -> Result<PaginatedResult<Report>> {
        let bounds = resolve_date_bounds(params, now);
        let query = params.search.as_deref().unwrap_or_default();

        let matched: Vec<Report> = {
            let reports = self.reports.lock().await;
            reports
                .iter()
                .filter(|(key, _)| key.kind == kind)
                .map(|(_, report)| report)
                .filter(|report| {
                    params
                        .status
                        .as_ref()
                        .map_or(true, |status| &report.status == status)
                })
                .filter(|report| matches_search(report, query))
                .filter(|report| bounds.contains(report.submitted_at))
                .cloned()
                .collect()
        };

        let limits = config().await.features.limits;
        let limit = params.limit.max(1).min(limits.max_page_size.max(1));

        Ok(paginate(matched, params.page, limit))
    }
}

#[cfg(test)]
mod tests {
    use bazaar_models::v0::{
        DatePreset, ListingSummary, Person, Report, ReportFilterParams, ReportKind, ReportStatus,
        ReportedSubject, RiskIndicators, RiskLevel,
    };
    use iso8601_timestamp::{Duration, Timestamp};

    fn person(name: &str) -> Person {
        Person {
            id: format!("USR-{}", name.to_lowercase().replace(' ', "-")),
            name: name.to_string(),
            avatar: None,
            location: None,
            member_since: None,
            last_seen: None,
            avg_response_time: None,
            previous_reports: None,
            total_sales: None,
        }
    }

    fn listing_report(id: &str, title: &str, submitted_at: Timestamp) -> Report {
        Report {
            id: id.to_string(),
            reason: "Suspected counterfeit".to_string(),
            status: ReportStatus::Open,
            submitted_at,
            reporter: person("Priya Shah"),
            subject: ReportedSubject::Listing {
                listing: ListingSummary {
                    id: format!("LST-{id}"),
                    title: title.to_string(),
                    image: None,
                    seller: person("Marcus Webb"),
                },
                listing_details: None,
                reported_user: None,
            },
            metrics: vec![],
            risk_indicators: RiskIndicators {
                warnings: 0,
                suspensions: 0,
                bans: 0,
            },
            risk_level: RiskLevel::Low,
        }
    }

    #[async_std::test]
    async fn insert_rejects_duplicate_ids_within_a_kind() {
        database_test!(|db| async move {
            let report = listing_report("RPT-1", "Vintage camera", Timestamp::UNIX_EPOCH);

            db.insert_report(&report).await.unwrap();
            assert!(db.insert_report(&report).await.is_err());
        });
    }

    #[async_std::test]
    async fn fetch_distinguishes_absence_from_presence() {
        database_test!(|db| async move {
            let report = listing_report("RPT-1", "Vintage camera", Timestamp::UNIX_EPOCH);
            db.insert_report(&report).await.unwrap();

            let fetched = db.fetch_report(ReportKind::Listing, "RPT-1").await.unwrap();
            assert_eq!(fetched, report);

            // Same id, wrong kind
            assert!(db.fetch_report(ReportKind::User, "RPT-1").await.is_err());
            assert!(db.fetch_report(ReportKind::Listing, "RPT-404").await.is_err());
        });
    }

    #[async_std::test]
    async fn twelve_reports_paginate_into_ten_plus_two() {
        database_test!(|db| async move {
            let now = Timestamp::now_utc();
            for index in 0..12 {
                db.insert_report(&listing_report(
                    &format!("RPT-{index}"),
                    &format!("Listing {index}"),
                    now,
                ))
                .await
                .unwrap();
            }

            let params = ReportFilterParams {
                page: 2,
                limit: 10,
                ..Default::default()
            };
            let result = db
                .fetch_reports_page(ReportKind::Listing, &params, now)
                .await
                .unwrap();

            assert_eq!(result.items.len(), 2);
            assert_eq!(result.total, 12);
            assert_eq!(result.total_pages, 2);
            assert_eq!(result.items[0].id, "RPT-10");
        });
    }

    #[async_std::test]
    async fn filtering_composes_search_with_date_bounds() {
        database_test!(|db| async move {
            let now = Timestamp::now_utc();
            let recent = now - Duration::hours(2);
            let ancient = now - Duration::days(90);

            db.insert_report(&listing_report("RPT-1", "Vintage camera", recent))
                .await
                .unwrap();
            db.insert_report(&listing_report("RPT-2", "Vintage bicycle", ancient))
                .await
                .unwrap();
            db.insert_report(&listing_report("RPT-3", "Espresso machine", recent))
                .await
                .unwrap();

            let params = ReportFilterParams {
                search: Some("vintage".to_string()),
                date_preset: Some(DatePreset::Last7),
                ..Default::default()
            };
            let result = db
                .fetch_reports_page(ReportKind::Listing, &params, now)
                .await
                .unwrap();

            assert_eq!(result.total, 1);
            assert_eq!(result.items[0].id, "RPT-1");
        });
    }

    #[async_std::test]
    async fn status_filter_narrows_results() {
        database_test!(|db| async move {
            let now = Timestamp::now_utc();
            let mut resolved = listing_report("RPT-1", "Vintage camera", now);
            resolved.status = ReportStatus::Resolved;

            db.insert_report(&resolved).await.unwrap();
            db.insert_report(&listing_report("RPT-2", "Vintage bicycle", now))
                .await
                .unwrap();

            let params = ReportFilterParams {
                status: Some(ReportStatus::Resolved),
                ..Default::default()
            };
            let result = db
                .fetch_reports_page(ReportKind::Listing, &params, now)
                .await
                .unwrap();

            assert_eq!(result.total, 1);
            assert_eq!(result.items[0].id, "RPT-1");
        });
    }

    #[async_std::test]
    async fn identical_queries_return_identical_results() {
        database_test!(|db| async move {
            let now = Timestamp::now_utc();
            for index in 0..5 {
                db.insert_report(&listing_report(
                    &format!("RPT-{index}"),
                    &format!("Listing {index}"),
                    now,
                ))
                .await
                .unwrap();
            }

            let params = ReportFilterParams {
                search: Some("listing".to_string()),
                limit: 3,
                ..Default::default()
            };
            let first = db
                .fetch_reports_page(ReportKind::Listing, &params, now)
                .await
                .unwrap();
            let second = db
                .fetch_reports_page(ReportKind::Listing, &params, now)
                .await
                .unwrap();

            assert_eq!(first, second);
        });
    }
}
