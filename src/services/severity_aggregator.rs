use crate::enums::status::Status;
use crate::structs::batch_summary::BatchSummary;
use crate::structs::prompt_result::ValidationPromptResult;
use crate::structs::prompt_summary::PromptSummary;
use crate::structs::severity_counts::SeverityCounts;
use crate::structs::validation_batch::ValidationBatch;

pub struct SeverityAggregator;

impl SeverityAggregator {

    // Zero for anything not completed: issues of a failed prompt are unknown,
    // not zero, and the caller must not read these counts as "no issues".
    pub fn counts_for_prompt(prompt_result: &ValidationPromptResult) -> SeverityCounts {
        let mut counts = SeverityCounts::new();

        if prompt_result.status == Status::Completed {
            if let Some(issues) = &prompt_result.result {
                for issue in issues {
                    counts.record(issue.severity);
                }
            }
        }

        counts
    }

    pub fn counts_for_batch(batch: &ValidationBatch) -> SeverityCounts {
        batch
            .prompt_results
            .iter()
            .fold(SeverityCounts::new(), |acc, prompt_result| {
                acc.add(&Self::counts_for_prompt(prompt_result))
            })
    }

    // Per-prompt counts keyed "category::name", in batch order.
    pub fn prompt_severity_matrix(batch: &ValidationBatch) -> Vec<(String, SeverityCounts)> {
        batch
            .prompt_results
            .iter()
            .map(|prompt_result| {
                (
                    prompt_result.prompt.key(),
                    Self::counts_for_prompt(prompt_result),
                )
            })
            .collect()
    }

    pub fn batch_summary(batch: &ValidationBatch) -> BatchSummary {
        let severity_counts = Self::counts_for_batch(batch);
        let total_issues = severity_counts.total();
        let completed_prompts = batch
            .prompt_results
            .iter()
            .filter(|pr| pr.status == Status::Completed)
            .count();

        BatchSummary {
            severity_counts,
            total_issues,
            completed_prompts,
            total_prompts: batch.total_prompts,
            has_issues: total_issues > 0,
            highest_severity: severity_counts.highest_severity(),
        }
    }

    pub fn prompt_summary(prompt_result: &ValidationPromptResult) -> PromptSummary {
        let severity_counts = Self::counts_for_prompt(prompt_result);
        let total_issues = severity_counts.total();

        PromptSummary {
            severity_counts,
            total_issues,
            has_issues: total_issues > 0,
            highest_severity: severity_counts.highest_severity(),
            is_completed: prompt_result.status == Status::Completed,
            is_failed: prompt_result.status == Status::Failed,
            is_processing: prompt_result.status.is_processing(),
        }
    }
}
