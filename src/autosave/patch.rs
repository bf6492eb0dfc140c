//! Record patch and per-key diff functionality.
//!
//! A [`RecordPatch`] carries the pending values for a commit. Before any
//! write is issued, each present key is shallow-compared against the
//! currently loaded record; keys whose values are unchanged are dropped,
//! and a patch with no changed keys is skipped entirely.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::SalaryCalculationRecord;

/// Identifies one patchable field of the salary calculation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordField {
    /// The staff member's requested gross salary.
    RequestedGross,
    /// The spouse's requested gross salary.
    SpouseRequestedGross,
    /// The staff member's requested MHA amount.
    MhaRequested,
    /// The spouse's requested MHA amount.
    SpouseMhaRequested,
    /// The split-cap election flag.
    SplitCapElected,
    /// The staff member's cap share under a split-cap election.
    SplitPrimaryCap,
    /// The spouse's cap share under a split-cap election.
    SplitSpouseCap,
    /// Contact phone number.
    ContactPhone,
    /// Contact email address.
    ContactEmail,
}

impl RecordField {
    /// The field's wire name, used in error messages and patch bodies.
    pub fn name(&self) -> &'static str {
        match self {
            RecordField::RequestedGross => "requested_gross",
            RecordField::SpouseRequestedGross => "spouse_requested_gross",
            RecordField::MhaRequested => "mha_requested",
            RecordField::SpouseMhaRequested => "spouse_mha_requested",
            RecordField::SplitCapElected => "split_cap_elected",
            RecordField::SplitPrimaryCap => "split_primary_cap",
            RecordField::SplitSpouseCap => "split_spouse_cap",
            RecordField::ContactPhone => "contact_phone",
            RecordField::ContactEmail => "contact_email",
        }
    }
}

/// A partial patch over the mutable record: one optional slot per field.
///
/// Only keys that are `Some` participate in validation and diffing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordPatch {
    /// Pending requested gross salary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_gross: Option<Decimal>,
    /// Pending spouse requested gross salary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse_requested_gross: Option<Decimal>,
    /// Pending MHA request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mha_requested: Option<Decimal>,
    /// Pending spouse MHA request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse_mha_requested: Option<Decimal>,
    /// Pending split-cap election.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_cap_elected: Option<bool>,
    /// Pending primary cap share.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_primary_cap: Option<Decimal>,
    /// Pending spouse cap share.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_spouse_cap: Option<Decimal>,
    /// Pending contact phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    /// Pending contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

impl RecordPatch {
    /// Returns true when no key is present at all.
    pub fn is_empty(&self) -> bool {
        self.fields_present().is_empty()
    }

    /// Lists the keys present in this patch, in declaration order.
    pub fn fields_present(&self) -> Vec<RecordField> {
        let mut fields = Vec::new();
        if self.requested_gross.is_some() {
            fields.push(RecordField::RequestedGross);
        }
        if self.spouse_requested_gross.is_some() {
            fields.push(RecordField::SpouseRequestedGross);
        }
        if self.mha_requested.is_some() {
            fields.push(RecordField::MhaRequested);
        }
        if self.spouse_mha_requested.is_some() {
            fields.push(RecordField::SpouseMhaRequested);
        }
        if self.split_cap_elected.is_some() {
            fields.push(RecordField::SplitCapElected);
        }
        if self.split_primary_cap.is_some() {
            fields.push(RecordField::SplitPrimaryCap);
        }
        if self.split_spouse_cap.is_some() {
            fields.push(RecordField::SplitSpouseCap);
        }
        if self.contact_phone.is_some() {
            fields.push(RecordField::ContactPhone);
        }
        if self.contact_email.is_some() {
            fields.push(RecordField::ContactEmail);
        }
        fields
    }

    /// Lists the present keys whose pending value differs from the record.
    pub fn changed_fields(&self, record: &SalaryCalculationRecord) -> Vec<RecordField> {
        self.fields_present()
            .into_iter()
            .filter(|field| self.differs(record, *field))
            .collect()
    }

    /// Returns a copy of this patch holding only the keys that actually
    /// change the record's value. An all-unchanged patch becomes empty.
    pub fn retain_changed(&self, record: &SalaryCalculationRecord) -> RecordPatch {
        let mut out = RecordPatch::default();
        for field in self.changed_fields(record) {
            match field {
                RecordField::RequestedGross => out.requested_gross = self.requested_gross,
                RecordField::SpouseRequestedGross => {
                    out.spouse_requested_gross = self.spouse_requested_gross;
                }
                RecordField::MhaRequested => out.mha_requested = self.mha_requested,
                RecordField::SpouseMhaRequested => {
                    out.spouse_mha_requested = self.spouse_mha_requested;
                }
                RecordField::SplitCapElected => out.split_cap_elected = self.split_cap_elected,
                RecordField::SplitPrimaryCap => out.split_primary_cap = self.split_primary_cap,
                RecordField::SplitSpouseCap => out.split_spouse_cap = self.split_spouse_cap,
                RecordField::ContactPhone => out.contact_phone = self.contact_phone.clone(),
                RecordField::ContactEmail => out.contact_email = self.contact_email.clone(),
            }
        }
        out
    }

    /// Shallow per-key comparison against the loaded record.
    fn differs(&self, record: &SalaryCalculationRecord, field: RecordField) -> bool {
        match field {
            RecordField::RequestedGross => self.requested_gross != Some(record.requested_gross),
            RecordField::SpouseRequestedGross => {
                self.spouse_requested_gross != record.spouse_requested_gross
            }
            RecordField::MhaRequested => self.mha_requested != Some(record.mha_requested),
            RecordField::SpouseMhaRequested => {
                self.spouse_mha_requested != record.spouse_mha_requested
            }
            RecordField::SplitCapElected => self.split_cap_elected != Some(record.split_cap_elected),
            RecordField::SplitPrimaryCap => self.split_primary_cap != record.split_primary_cap,
            RecordField::SplitSpouseCap => self.split_spouse_cap != record.split_spouse_cap,
            RecordField::ContactPhone => self.contact_phone != record.contact_phone,
            RecordField::ContactEmail => self.contact_email != record.contact_email,
        }
    }
}
