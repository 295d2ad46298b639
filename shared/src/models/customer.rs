//! Customer Model

use serde::{Deserialize, Serialize};

use crate::validation::CustomerField;

/// Customer entity (客户)
///
/// Wire shape of the customers API: camelCase keys, Mongo-style `_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Server-assigned id. Accepted as `_id` or `id` on read, never
    /// written back (create has no id, update carries it in the path).
    #[serde(alias = "_id", default, skip_serializing)]
    pub id: String,
    pub name: String,
    pub mobile: String,
    pub email: String,
    #[serde(default)]
    pub proposals_awaiting: u32,
    #[serde(default)]
    pub approve_proposal: u32,
    #[serde(default)]
    pub expired_proposal: u32,
    #[serde(default)]
    pub unapproved_proposal: u32,
}

impl Customer {
    /// Form snapshot with every field as editable text.
    pub fn to_draft(&self) -> CustomerDraft {
        CustomerDraft {
            name: self.name.clone(),
            mobile: self.mobile.clone(),
            email: self.email.clone(),
            proposals_awaiting: self.proposals_awaiting.to_string(),
            approve_proposal: self.approve_proposal.to_string(),
            expired_proposal: self.expired_proposal.to_string(),
            unapproved_proposal: self.unapproved_proposal.to_string(),
        }
    }
}

/// Editable form state. Counters stay text until validation parses them;
/// a fresh draft starts with every counter at "0".
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerDraft {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub proposals_awaiting: String,
    pub approve_proposal: String,
    pub expired_proposal: String,
    pub unapproved_proposal: String,
}

impl Default for CustomerDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            mobile: String::new(),
            email: String::new(),
            proposals_awaiting: "0".to_string(),
            approve_proposal: "0".to_string(),
            expired_proposal: "0".to_string(),
            unapproved_proposal: "0".to_string(),
        }
    }
}

impl CustomerDraft {
    pub fn field(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::Name => &self.name,
            CustomerField::Mobile => &self.mobile,
            CustomerField::Email => &self.email,
            CustomerField::ProposalsAwaiting => &self.proposals_awaiting,
            CustomerField::ApproveProposal => &self.approve_proposal,
            CustomerField::ExpiredProposal => &self.expired_proposal,
            CustomerField::UnapprovedProposal => &self.unapproved_proposal,
        }
    }

    pub fn set_field(&mut self, field: CustomerField, value: String) {
        match field {
            CustomerField::Name => self.name = value,
            CustomerField::Mobile => self.mobile = value,
            CustomerField::Email => self.email = value,
            CustomerField::ProposalsAwaiting => self.proposals_awaiting = value,
            CustomerField::ApproveProposal => self.approve_proposal = value,
            CustomerField::ExpiredProposal => self.expired_proposal = value,
            CustomerField::UnapprovedProposal => self.unapproved_proposal = value,
        }
    }
}

/// Create/update request body, produced by `validate_draft`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub proposals_awaiting: u32,
    pub approve_proposal: u32,
    pub expired_proposal: u32,
    pub unapproved_proposal: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_reads_mongo_id_and_camel_case_counters() {
        let json = r#"{
            "_id": "65f1c0",
            "name": "Dana Levi",
            "mobile": "0521234567",
            "email": "dana@example.com",
            "proposalsAwaiting": 3,
            "approveProposal": 1,
            "expiredProposal": 0,
            "unapprovedProposal": 2
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.id, "65f1c0");
        assert_eq!(customer.proposals_awaiting, 3);
        assert_eq!(customer.unapproved_proposal, 2);
    }

    #[test]
    fn customer_reads_plain_id_and_defaults_missing_counters() {
        let json = r#"{"id": "7", "name": "Noa", "mobile": "03", "email": "noa@x.io"}"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.id, "7");
        assert_eq!(customer.approve_proposal, 0);
        assert_eq!(customer.expired_proposal, 0);
    }

    #[test]
    fn customer_never_serializes_an_id_field() {
        let customer = Customer {
            id: "65f1c0".to_string(),
            name: "Dana".to_string(),
            mobile: "052".to_string(),
            email: "dana@example.com".to_string(),
            proposals_awaiting: 1,
            approve_proposal: 0,
            expired_proposal: 0,
            unapproved_proposal: 0,
        };
        let value = serde_json::to_value(&customer).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("_id").is_none());
        assert_eq!(value["proposalsAwaiting"], 1);
    }

    #[test]
    fn draft_defaults_counters_to_zero_text() {
        let draft = CustomerDraft::default();
        assert_eq!(draft.proposals_awaiting, "0");
        assert_eq!(draft.name, "");
    }

    #[test]
    fn to_draft_stringifies_counters() {
        let customer = Customer {
            id: "1".to_string(),
            name: "Dana".to_string(),
            mobile: "052".to_string(),
            email: "dana@example.com".to_string(),
            proposals_awaiting: 12,
            approve_proposal: 7,
            expired_proposal: 0,
            unapproved_proposal: 4,
        };
        let draft = customer.to_draft();
        assert_eq!(draft.proposals_awaiting, "12");
        assert_eq!(draft.expired_proposal, "0");
        assert_eq!(draft.email, "dana@example.com");
    }

    #[test]
    fn payload_serializes_camel_case() {
        let payload = CustomerPayload {
            name: "Dana".to_string(),
            mobile: "052".to_string(),
            email: "dana@example.com".to_string(),
            proposals_awaiting: 2,
            approve_proposal: 3,
            expired_proposal: 4,
            unapproved_proposal: 5,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["unapprovedProposal"], 5);
        assert_eq!(value["mobile"], "052");
    }
}
