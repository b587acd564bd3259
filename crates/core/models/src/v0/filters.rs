use crate::v0::ReportStatus;

auto_derived!(
    /// Named shorthand for a date range
    #[derive(Copy)]
    #[serde(rename_all = "lowercase")]
    pub enum DatePreset {
        Today,
        Yesterday,
        /// Last 7 calendar days, inclusive of today
        Last7,
        /// Last 30 calendar days, inclusive of today
        Last30,
        All,
        /// Explicit start / end dates
        Custom,
    }

    /// Parameters for one page of a report listing
    pub struct ReportFilterParams {
        /// Free-text search query
        #[serde(skip_serializing_if = "Option::is_none")]
        pub search: Option<String>,
        /// 1-indexed page to fetch
        pub page: usize,
        /// Page size
        pub limit: usize,
        /// Only include reports with this status
        #[serde(skip_serializing_if = "Option::is_none")]
        pub status: Option<ReportStatus>,
        /// Named date range
        #[serde(skip_serializing_if = "Option::is_none")]
        pub date_preset: Option<DatePreset>,
        /// Calendar date (YYYY-MM-DD), no time component
        #[serde(skip_serializing_if = "Option::is_none")]
        pub start_date: Option<String>,
        /// Calendar date (YYYY-MM-DD), no time component
        #[serde(skip_serializing_if = "Option::is_none")]
        pub end_date: Option<String>,
        /// Legacy date filter: "all" or a number of days
        #[serde(skip_serializing_if = "Option::is_none")]
        pub date_range: Option<String>,
    }

    /// One page of results plus paging information
    pub struct PaginatedResult<T> {
        /// Items on this page, in collection order
        pub items: Vec<T>,
        /// Number of matches before pagination
        pub total: usize,
        /// Effective 1-indexed page
        pub page: usize,
        /// Total number of pages, at least 1
        pub total_pages: usize,
        /// Effective page size
        pub limit: usize,
    }
);

impl Default for ReportFilterParams {
    fn default() -> Self {
        ReportFilterParams {
            search: None,
            page: 1,
            limit: 10,
            status: None,
            date_preset: None,
            start_date: None,
            end_date: None,
            date_range: None,
        }
    }
}
