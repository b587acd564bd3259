use bazaar_models::v0::{PaginatedResult, Report, ReportFilterParams, ReportKind};
use bazaar_result::Result;
use iso8601_timestamp::Timestamp;

mod reference;

#[async_trait]
pub trait AbstractReports: Sync + Send {
    /// Insert a new report into the database
    async fn insert_report(&self, report: &Report) -> Result<()>;

    /// Fetch one report by kind and id
    async fn fetch_report(&self, kind: ReportKind, id: &str) -> Result<Report>;

    /// Fetch one page of reports of the given kind matching the filter.
    ///
    /// `now` anchors the date presets so results are reproducible.
    async fn fetch_reports_page(
        &self,
        kind: ReportKind,
        params: &ReportFilterParams,
        now: Timestamp,
    ) -> Result<PaginatedResult<Report>>;
}
