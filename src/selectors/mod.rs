//! Derived cap, MHA, eligibility, and approval selectors.
//!
//! Pure derivations from the loaded profile and calculation aggregates:
//! combined totals, over-cap branch selection, MHA progress, eligibility
//! messaging, and the progressive approval tier. Absent aggregates always
//! yield `None` ("not yet available"), never a panic.

mod approval;
mod caps;
mod eligibility;
mod mha;

pub use approval::{
    ApprovalNotice, approval_notice, approval_required, derive_tier, effective_cap,
    recompute_calculations,
};
pub use caps::{CapStatus, CapSummary, cap_summary, modifier_label};
pub use eligibility::{
    PartyCoverage, course_eligibility_coverage, course_ineligibility_notice, ineligible_names,
    mha_approval_coverage, no_mha_notice,
};
pub use mha::{MhaRequestData, mha_request_data};
