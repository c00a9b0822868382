use crate::error::LookupError;
use crate::schema::{CaseRecord, Commission, State};

/// Static states, commissions and demo cases. Built once at startup and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    states: Vec<State>,
    commissions: Vec<Commission>,
    cases: Vec<CaseRecord>,
}

impl ReferenceData {
    pub fn new(
        states: Vec<State>,
        commissions: Vec<Commission>,
        cases: Vec<CaseRecord>,
    ) -> Result<Self, LookupError> {
        for commission in &commissions {
            if !states.iter().any(|s| s.id == commission.state_id) {
                return Err(LookupError::DanglingCommission {
                    commission_id: commission.id.clone(),
                    state_id: commission.state_id.clone(),
                });
            }
        }

        Ok(Self {
            states,
            commissions,
            cases,
        })
    }

    /// The demo data set served when the upstream provider is unavailable.
    pub fn mock() -> Result<Self, LookupError> {
        Self::new(
            vec![state("KA", "KARNATAKA"), state("MH", "MAHARASHTRA")],
            vec![
                commission("KA_BLR_001", "Bangalore 1st & Rural Additional", "KA"),
                commission("KA_BLR_002", "Bangalore Urban", "KA"),
            ],
            vec![
                CaseRecord {
                    case_number: "987/2024".to_string(),
                    case_stage: Some("Orders".to_string()),
                    filing_date: Some("2024-11-18".to_string()),
                    complainant: Some("Jane Roe".to_string()),
                    complainant_advocate: Some("Adv. Sharma".to_string()),
                    respondent: Some("Acme Pvt Ltd".to_string()),
                    respondent_advocate: Some("Adv. Patel".to_string()),
                    document_link: Some("https://e-jagriti.gov.in/mock/case987".to_string()),
                },
                CaseRecord {
                    case_number: "123/2025".to_string(),
                    case_stage: Some("Hearing".to_string()),
                    filing_date: Some("2025-02-01".to_string()),
                    complainant: Some("John Doe".to_string()),
                    complainant_advocate: Some("Adv. Reddy".to_string()),
                    respondent: Some("XYZ Ltd.".to_string()),
                    respondent_advocate: Some("Adv. Mehta".to_string()),
                    document_link: Some("https://e-jagriti.gov.in/mock/case123".to_string()),
                },
            ],
        )
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn cases(&self) -> &[CaseRecord] {
        &self.cases
    }

    pub fn commissions_for(&self, state_id: &str) -> Vec<Commission> {
        self.commissions
            .iter()
            .filter(|c| c.state_id == state_id)
            .cloned()
            .collect()
    }

    /// Case-insensitive exact match on the state name.
    pub fn resolve_state(&self, name: &str) -> Result<&str, LookupError> {
        let wanted = name.to_lowercase();
        self.states
            .iter()
            .find(|s| s.name.to_lowercase() == wanted)
            .map(|s| s.id.as_str())
            .ok_or_else(|| LookupError::UnknownState(name.to_string()))
    }

    /// Case-insensitive exact match on the commission name, restricted to
    /// commissions of `state_id`.
    pub fn resolve_commission(&self, state_id: &str, name: &str) -> Result<&str, LookupError> {
        let wanted = name.to_lowercase();
        self.commissions
            .iter()
            .filter(|c| c.state_id == state_id)
            .find(|c| c.name.to_lowercase() == wanted)
            .map(|c| c.id.as_str())
            .ok_or_else(|| LookupError::UnknownCommission {
                state_id: state_id.to_string(),
                name: name.to_string(),
            })
    }
}

fn state(id: &str, name: &str) -> State {
    State {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn commission(id: &str, name: &str, state_id: &str) -> Commission {
    Commission {
        id: id.to_string(),
        name: name.to_string(),
        state_id: state_id.to_string(),
    }
}
