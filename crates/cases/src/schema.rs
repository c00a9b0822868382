use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LookupError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commission {
    pub id: String,
    pub name: String,
    pub state_id: String,
}

/// A single case as returned by the case-search provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub case_number: String,
    #[serde(default)]
    pub case_stage: Option<String>,
    /// YYYY-MM-DD
    #[serde(default)]
    pub filing_date: Option<String>,
    #[serde(default)]
    pub complainant: Option<String>,
    #[serde(default)]
    pub complainant_advocate: Option<String>,
    #[serde(default)]
    pub respondent: Option<String>,
    #[serde(default)]
    pub respondent_advocate: Option<String>,
    #[serde(default)]
    pub document_link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchKind {
    ByCaseNumber,
    ByComplainant,
    ByRespondent,
    ByComplainantAdvocate,
    ByRespondentAdvocate,
    ByIndustryType,
    ByJudge,
}

impl SearchKind {
    pub const ALL: [SearchKind; 7] = [
        SearchKind::ByCaseNumber,
        SearchKind::ByComplainant,
        SearchKind::ByRespondent,
        SearchKind::ByComplainantAdvocate,
        SearchKind::ByRespondentAdvocate,
        SearchKind::ByIndustryType,
        SearchKind::ByJudge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::ByCaseNumber => "by-case-number",
            SearchKind::ByComplainant => "by-complainant",
            SearchKind::ByRespondent => "by-respondent",
            SearchKind::ByComplainantAdvocate => "by-complainant-advocate",
            SearchKind::ByRespondentAdvocate => "by-respondent-advocate",
            SearchKind::ByIndustryType => "by-industry-type",
            SearchKind::ByJudge => "by-judge",
        }
    }

    /// The record field this kind matches against. Industry type and judge
    /// are not carried on records, so they never match.
    pub fn field<'a>(&self, record: &'a CaseRecord) -> Option<&'a str> {
        match self {
            SearchKind::ByCaseNumber => Some(record.case_number.as_str()),
            SearchKind::ByComplainant => record.complainant.as_deref(),
            SearchKind::ByRespondent => record.respondent.as_deref(),
            SearchKind::ByComplainantAdvocate => record.complainant_advocate.as_deref(),
            SearchKind::ByRespondentAdvocate => record.respondent_advocate.as_deref(),
            SearchKind::ByIndustryType | SearchKind::ByJudge => None,
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchKind {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| LookupError::InvalidKind(s.to_string()))
    }
}

/// Search parameters shared by every case search entry point.
///
/// Names are the human-readable state and commission names, not IDs.
/// Missing fields deserialize as empty so `validate` can report them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub commission: String,
    #[serde(default, alias = "search_value")]
    pub value: String,
}

impl SearchRequest {
    pub fn new(
        state: impl Into<String>,
        commission: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            state: state.into(),
            commission: commission.into(),
            value: value.into(),
        }
    }

    pub fn validate(&self) -> Result<(), LookupError> {
        for (name, field) in [
            ("state", &self.state),
            ("commission", &self.commission),
            ("value", &self.value),
        ] {
            if field.trim().is_empty() {
                return Err(LookupError::MissingField(name));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Upstream,
    Mock,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Upstream => "upstream",
            DataSource::Mock => "mock",
        }
    }
}

/// Items together with the path that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub items: Vec<T>,
    pub source: DataSource,
}

impl<T> Fetched<T> {
    pub fn upstream(items: Vec<T>) -> Self {
        Self { items, source: DataSource::Upstream }
    }

    pub fn mock(items: Vec<T>) -> Self {
        Self { items, source: DataSource::Mock }
    }
}
