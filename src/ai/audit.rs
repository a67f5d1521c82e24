//! Project audit gate.
//!
//! Before a project lands in the registry, a structured proposal goes to
//! the advisor, which must answer with EXACTLY two fields:
//! `{"status": "APPROVED"|"REJECTED", "reason": "..."}`. Anything else
//! is a terminal error for this request, surfaced verbatim. No retry,
//! no repair parsing, and no pending approval state is left behind.

use crate::ai::client::GeminiClient;
use crate::ai::coach;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AuditStatus {
    #[serde(rename = "APPROVED")]
    Approved,
    #[serde(rename = "REJECTED")]
    Rejected,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditVerdict {
    pub status: AuditStatus,
    pub reason: String,
}

pub struct ProjectProposal {
    pub name: String,
    pub pillar: String,
    pub budget_hours: f64,
    pub quarter: String,
    pub justification: String,
}

/// Strict parse of the advisor reply. The raw text is carried into the
/// error so the operator sees exactly what came back.
pub fn parse_verdict(raw: &str) -> AppResult<AuditVerdict> {
    serde_json::from_str(raw.trim()).map_err(|_| AppError::Advisor(raw.to_string()))
}

fn system_instruction(context: &str) -> String {
    format!(
        "You are a ruthless investment committee member for a solo founder.\n\
         Current Strategic Context:\n{context}\n\
         Your goal: prevent scope creep.\n\
         Rules for approval:\n\
         1. REJECT generic proposals (e.g. 'Learn AI') instead of specific execution.\n\
         2. REJECT anything that violates the 'No New WIP' rule, unless it clears debt.\n\
         3. REJECT vague justifications.\n\
         4. APPROVE only work that directly serves the declared pillars.\n\
         Output format: JSON only, exactly \
         {{\"status\": \"APPROVED\" or \"REJECTED\", \"reason\": \"short explanation\"}}."
    )
}

fn proposal_text(p: &ProjectProposal) -> String {
    format!(
        "Proposal:\n\
         Project: {}\n\
         Pillar: {}\n\
         Budget: {} hours\n\
         Quarter: {}\n\
         Justification: {}",
        p.name, p.pillar, p.budget_hours, p.quarter, p.justification
    )
}

/// Run the audit round-trip. Missing API key fails before any request.
pub fn run_audit(
    cfg: &Config,
    pool: &mut DbPool,
    proposal: &ProjectProposal,
) -> AppResult<AuditVerdict> {
    let api_key = cfg.resolve_api_key()?;
    let ctx = coach::gather_context(pool, cfg)?;

    let client = GeminiClient::new(api_key, cfg.model.clone());
    let rt = tokio::runtime::Runtime::new()?;
    let raw = rt.block_on(client.generate_json(
        &system_instruction(&coach::build_context(&ctx)),
        &proposal_text(proposal),
    ))?;

    parse_verdict(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_approved_and_rejected() {
        let v = parse_verdict(r#"{"status": "APPROVED", "reason": "Clears debt."}"#).unwrap();
        assert_eq!(v.status, AuditStatus::Approved);
        assert_eq!(v.reason, "Clears debt.");

        let v = parse_verdict(r#"{"status": "REJECTED", "reason": "New WIP."}"#).unwrap();
        assert_eq!(v.status, AuditStatus::Rejected);
    }

    #[test]
    fn malformed_reply_is_surfaced_verbatim() {
        let err = parse_verdict("not valid json").unwrap_err();
        match err {
            AppError::Advisor(raw) => assert_eq!(raw, "not valid json"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn extra_fields_are_rejected() {
        assert!(
            parse_verdict(r#"{"status": "APPROVED", "reason": "ok", "confidence": 0.9}"#).is_err()
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(parse_verdict(r#"{"status": "MAYBE", "reason": "hmm"}"#).is_err());
        assert!(parse_verdict(r#"{"status": "approved", "reason": "case matters"}"#).is_err());
    }

    #[test]
    fn missing_field_is_rejected() {
        assert!(parse_verdict(r#"{"status": "APPROVED"}"#).is_err());
    }

    #[test]
    fn proposal_text_includes_all_fields() {
        let p = ProjectProposal {
            name: "High-Ticket Offer V1".into(),
            pillar: "The Vertical".into(),
            budget_hours: 120.0,
            quarter: "Q3-2026".into(),
            justification: "Direct revenue path.".into(),
        };
        let t = proposal_text(&p);
        assert!(t.contains("High-Ticket Offer V1"));
        assert!(t.contains("The Vertical"));
        assert!(t.contains("120 hours"));
        assert!(t.contains("Q3-2026"));
        assert!(t.contains("Direct revenue path."));
    }
}
