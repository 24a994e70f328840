//! Derived accessors: proposal and session labels.
//!
//! `Proposal.proposal` is the proposal code followed by its number
//! (`MX415`). `BLSession.session` appends the visit number (`MX415-3`) and
//! `BLSession.proposal` is the label of the session's proposal. A missing
//! proposal or a NULL part yields no value.

use std::sync::Arc;

use ispyb_core::derived::{present, DerivedAccessor};
use ispyb_core::query::Expr;
use ispyb_core::session::Instance;
use ispyb_core::value::Value;

/// `proposalCode + proposalNumber` on a proposal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProposalLabel;

impl DerivedAccessor for ProposalLabel {
    fn entity(&self) -> &str {
        "Proposal"
    }

    fn name(&self) -> &str {
        "proposal"
    }

    fn evaluate(&self, instance: &Instance) -> Option<Value> {
        present(self.expression().evaluate(instance))
    }

    fn expression(&self) -> Expr {
        Expr::concat([Expr::column("proposalCode"), Expr::column("proposalNumber")])
    }
}

/// The session's proposal label, through `BLSession.Proposal`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionProposalLabel;

impl DerivedAccessor for SessionProposalLabel {
    fn entity(&self) -> &str {
        "BLSession"
    }

    fn name(&self) -> &str {
        "proposal"
    }

    fn evaluate(&self, instance: &Instance) -> Option<Value> {
        present(self.expression().evaluate(instance))
    }

    fn expression(&self) -> Expr {
        Expr::concat([
            Expr::related(&["Proposal"], "proposalCode"),
            Expr::related(&["Proposal"], "proposalNumber"),
        ])
    }
}

/// `<proposal>-<visit_number>` on a session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionLabel;

impl DerivedAccessor for SessionLabel {
    fn entity(&self) -> &str {
        "BLSession"
    }

    fn name(&self) -> &str {
        "session"
    }

    fn evaluate(&self, instance: &Instance) -> Option<Value> {
        present(self.expression().evaluate(instance))
    }

    fn expression(&self) -> Expr {
        Expr::concat([
            Expr::related(&["Proposal"], "proposalCode"),
            Expr::related(&["Proposal"], "proposalNumber"),
            Expr::literal("-"),
            Expr::column("visit_number"),
        ])
    }
}

/// Every derived accessor of the catalog.
pub fn accessors() -> Vec<Arc<dyn DerivedAccessor>> {
    vec![
        Arc::new(ProposalLabel),
        Arc::new(SessionProposalLabel),
        Arc::new(SessionLabel),
    ]
}
