use bazaar_models::v0::{Report, ReportKind};

auto_derived!(
    /// Composite key pointing to one report; ids are only unique within their kind
    #[derive(Hash)]
    pub struct ReportCompositeKey {
        /// Report kind
        pub kind: ReportKind,
        /// Report id
        pub id: String,
    }
);

impl From<&Report> for ReportCompositeKey {
    fn from(report: &Report) -> Self {
        ReportCompositeKey {
            kind: report.kind(),
            id: report.id.clone(),
        }
    }
}
