use std::sync::Arc;
use chrono::Utc;
use uuid::Uuid;
use crate::enums::badge_status::BadgeStatus;
use crate::errors::{QaFlowError, QaFlowResult};
use crate::services::aggregator;
use crate::services::analysis_store::AnalysisStore;
use crate::services::analyzer::Analyzer;
use crate::services::gate_evaluator::GateEvaluator;
use crate::structs::analysis_record::AnalysisRecord;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_response::AnalysisResponse;
use crate::structs::gate_result::GateResult;

/// Composition root: Store → Aggregator → Evaluator → (badge). Stateless
/// between requests; every gate is recomputed from a fresh record window, so
/// a gate computed after an insert always reflects it.
pub struct GateService {
    store: Arc<AnalysisStore>,
    analyzer: Arc<dyn Analyzer>,
    evaluator: GateEvaluator,
}

impl GateService {
    pub fn new(store: Arc<AnalysisStore>, analyzer: Arc<dyn Analyzer>, evaluator: GateEvaluator) -> Self {
        Self {
            store,
            analyzer,
            evaluator,
        }
    }

    /// Run the analyzer on a submission and persist the result. The stored
    /// `passed` flag is this record's own verdict, not the aggregate gate.
    pub fn submit_analysis(
        &self,
        user_id: &str,
        request: &AnalysisRequest,
    ) -> QaFlowResult<AnalysisResponse> {
        if request.language.trim().is_empty() {
            return Err(QaFlowError::validation_error(
                "language",
                &request.language,
                "must not be empty",
                Some("Supply the language tag of the submitted code"),
            ));
        }
        if request.code.is_empty() {
            return Err(QaFlowError::validation_error(
                "code",
                "",
                "must not be empty",
                None,
            ));
        }

        let outcome = self.analyzer.analyze(&request.language, &request.code)?;
        let passed = self.evaluator.record_passes(&outcome.scores);

        let record = AnalysisRecord {
            id: format!("analysis-{}", Uuid::new_v4()),
            project_id: request.project_id.clone(),
            user_id: user_id.to_string(),
            filename: request.filename.clone(),
            language: request.language.clone(),
            code: request.code.clone(),
            scores: outcome.scores,
            findings: outcome.findings,
            passed,
            commit_hash: request.commit_hash.clone(),
            branch: request.branch.clone(),
            repository_id: request.resolved_repository_id(),
            metadata: request.metadata.clone(),
            timestamp: Utc::now(),
        };

        self.store.insert_record(&record)?;
        log::info!(
            "📊 Stored analysis {} for user {} (passed: {})",
            record.id,
            user_id,
            passed
        );

        Ok(AnalysisResponse::from(&record))
    }

    /// The gate decision for a repository branch, recomputed from the most
    /// recent record window on every call.
    pub fn quality_gate(&self, repository_id: &str, branch: &str) -> QaFlowResult<GateResult> {
        let records = self.store.fetch_records(
            repository_id,
            branch,
            self.evaluator.config().fetch_limit,
        )?;
        let aggregate = aggregator::aggregate(&records);
        Ok(self.evaluator.evaluate(&aggregate))
    }

    /// Three-state badge summary. Storage failures propagate; "no records"
    /// maps to `Unknown`.
    pub fn badge_status(&self, repository_id: &str, branch: &str) -> QaFlowResult<BadgeStatus> {
        let result = self.quality_gate(repository_id, branch)?;
        Ok(BadgeStatus::from_gate(&result))
    }

    /// Submission history for the authenticated caller.
    pub fn list_analyses(
        &self,
        user_id: &str,
        project_id: Option<&str>,
        limit: usize,
    ) -> QaFlowResult<Vec<AnalysisResponse>> {
        let records = self.store.list_records(user_id, project_id, limit)?;
        Ok(records.iter().map(AnalysisResponse::from).collect())
    }
}
