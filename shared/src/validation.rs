//! Customer form validation
//!
//! Field-by-field checks applied before create/update submissions.
//! Failures come back as a typed map keyed by `CustomerField`, one
//! message per field, so screens never match on raw field names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::models::{CustomerDraft, CustomerPayload};

// ── Schema messages ─────────────────────────────────────────────────

pub const MSG_NAME_REQUIRED: &str = "Name is required";
pub const MSG_MOBILE_REQUIRED: &str = "Mobile number is required";
pub const MSG_MOBILE_DIGITS: &str = "Mobile number must contain only digits";
pub const MSG_EMAIL_REQUIRED: &str = "Email is required";
pub const MSG_EMAIL_FORMAT: &str = "Invalid email format";
pub const MSG_COUNTER_POSITIVE: &str = "Must be a positive number";

// ── Field identity ──────────────────────────────────────────────────

/// Every editable field of the customer form.
///
/// Declaration order doubles as the form's focus order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum CustomerField {
    Name,
    Mobile,
    Email,
    ProposalsAwaiting,
    ApproveProposal,
    ExpiredProposal,
    UnapprovedProposal,
}

impl CustomerField {
    pub const ALL: [CustomerField; 7] = [
        CustomerField::Name,
        CustomerField::Mobile,
        CustomerField::Email,
        CustomerField::ProposalsAwaiting,
        CustomerField::ApproveProposal,
        CustomerField::ExpiredProposal,
        CustomerField::UnapprovedProposal,
    ];

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Mobile => "Mobile",
            Self::Email => "Email",
            Self::ProposalsAwaiting => "Proposals Awaiting",
            Self::ApproveProposal => "Approved Proposals",
            Self::ExpiredProposal => "Expired Proposals",
            Self::UnapprovedProposal => "Unapproved Proposals",
        }
    }

    /// JSON body key for the field.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Mobile => "mobile",
            Self::Email => "email",
            Self::ProposalsAwaiting => "proposalsAwaiting",
            Self::ApproveProposal => "approveProposal",
            Self::ExpiredProposal => "expiredProposal",
            Self::UnapprovedProposal => "unapprovedProposal",
        }
    }

    /// Counter fields accept digits only and coerce empty input to 0.
    pub fn is_counter(self) -> bool {
        matches!(
            self,
            Self::ProposalsAwaiting
                | Self::ApproveProposal
                | Self::ExpiredProposal
                | Self::UnapprovedProposal
        )
    }
}

// ── Error map ───────────────────────────────────────────────────────

/// Validation outcome keyed by field.
///
/// Insertion keeps the first message reported for a field, matching the
/// form's one-message-per-input rendering.
#[derive(Debug, Clone, Default, PartialEq, thiserror::Error)]
#[error("{} invalid field(s)", .errors.len())]
pub struct FieldErrors {
    errors: BTreeMap<CustomerField, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: CustomerField, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: CustomerField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Editing a field drops its stale message.
    pub fn clear(&mut self, field: CustomerField) {
        self.errors.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CustomerField, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

// ── Draft validation ────────────────────────────────────────────────

/// Check a draft against the customer schema.
///
/// Every field is checked in one pass; counters coerce blank text to 0.
/// On success the parsed, submit-ready payload comes back.
pub fn validate_draft(draft: &CustomerDraft) -> Result<CustomerPayload, FieldErrors> {
    let mut errors = FieldErrors::new();

    if draft.name.is_empty() {
        errors.insert(CustomerField::Name, MSG_NAME_REQUIRED);
    }

    if draft.mobile.is_empty() {
        errors.insert(CustomerField::Mobile, MSG_MOBILE_REQUIRED);
    } else if !draft.mobile.bytes().all(|b| b.is_ascii_digit()) {
        errors.insert(CustomerField::Mobile, MSG_MOBILE_DIGITS);
    }

    if draft.email.is_empty() {
        errors.insert(CustomerField::Email, MSG_EMAIL_REQUIRED);
    } else if !draft.email.validate_email() {
        errors.insert(CustomerField::Email, MSG_EMAIL_FORMAT);
    }

    let proposals_awaiting =
        parse_counter(&draft.proposals_awaiting, CustomerField::ProposalsAwaiting, &mut errors);
    let approve_proposal =
        parse_counter(&draft.approve_proposal, CustomerField::ApproveProposal, &mut errors);
    let expired_proposal =
        parse_counter(&draft.expired_proposal, CustomerField::ExpiredProposal, &mut errors);
    let unapproved_proposal =
        parse_counter(&draft.unapproved_proposal, CustomerField::UnapprovedProposal, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(CustomerPayload {
        name: draft.name.clone(),
        mobile: draft.mobile.clone(),
        email: draft.email.clone(),
        proposals_awaiting,
        approve_proposal,
        expired_proposal,
        unapproved_proposal,
    })
}

/// Blank counter text coerces to 0; anything else must parse as a
/// non-negative integer.
fn parse_counter(raw: &str, field: CustomerField, errors: &mut FieldErrors) -> u32 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    match trimmed.parse::<u32>() {
        Ok(n) => n,
        Err(_) => {
            errors.insert(field, MSG_COUNTER_POSITIVE);
            0
        }
    }
}
