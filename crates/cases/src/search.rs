use chrono::NaiveDate;
use std::cmp::Reverse;

use crate::schema::{CaseRecord, SearchKind};

const FILING_DATE_FORMAT: &str = "%Y-%m-%d";

/// Keep the records whose `kind` field contains `value`, ignoring case.
pub fn search_records(records: &[CaseRecord], kind: SearchKind, value: &str) -> Vec<CaseRecord> {
    let needle = value.to_lowercase();

    records
        .iter()
        .filter(|record| {
            kind.field(record)
                .is_some_and(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Daily orders are records whose stage starts with "orders".
pub fn is_daily_order(record: &CaseRecord) -> bool {
    record
        .case_stage
        .as_deref()
        .is_some_and(|stage| stage.to_lowercase().starts_with("orders"))
}

/// Narrow to daily orders when there are any, otherwise leave as is.
pub fn prefer_daily_orders(records: Vec<CaseRecord>) -> Vec<CaseRecord> {
    if !records.iter().any(is_daily_order) {
        return records;
    }
    records.into_iter().filter(is_daily_order).collect()
}

/// Missing or malformed dates count as 1900-01-01.
pub fn filing_date(record: &CaseRecord) -> NaiveDate {
    record
        .filing_date
        .as_deref()
        .and_then(|s| NaiveDate::parse_from_str(s, FILING_DATE_FORMAT).ok())
        .or(NaiveDate::from_ymd_opt(1900, 1, 1))
        .unwrap_or(NaiveDate::MIN)
}

/// Most recent first. Stable for equal dates.
pub fn sort_by_filing_date_desc(records: &mut [CaseRecord]) {
    records.sort_by_key(|record| Reverse(filing_date(record)));
}

/// Presentation rule applied to every result set before it leaves the service.
pub fn rank(records: Vec<CaseRecord>) -> Vec<CaseRecord> {
    let mut records = prefer_daily_orders(records);
    sort_by_filing_date_desc(&mut records);
    records
}
