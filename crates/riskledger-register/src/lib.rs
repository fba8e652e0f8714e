//! The RiskLedger register service.
//!
//! [`RiskRegister`] owns the five collections and is the only mutation path:
//! every operation validates its input first, applies the change, rebuilds
//! the derived risk records, and mirrors all collections to the store. The
//! scoring itself stays in `riskledger-core`; this crate is the glue the
//! form layer talks to.

mod drafts;
mod register;


pub use drafts::{CountermeasureDraft, ThreatDraft};
pub use register::RiskRegister;
