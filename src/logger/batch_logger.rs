use crate::enums::api_error::ApiError;
use crate::enums::status::Status;
use crate::helpers::formatters::format_prompt_name;
use crate::services::severity_aggregator::SeverityAggregator;
use crate::structs::active_batch::ActiveBatch;
use crate::structs::log_page::LogPage;
use crate::structs::progress::Progress;
use crate::structs::validation_batch::ValidationBatch;

pub struct BatchLogger {}

impl BatchLogger {

    pub fn print_progress(batch: &ValidationBatch, progress: Option<&Progress>) {
        match progress {
            Some(progress) => {
                println!(
                    "{} Batch {} [{}]: {}/{} prompts ({}%)",
                    batch.status.emoji(),
                    batch.id,
                    batch.status.label(),
                    progress.completed,
                    progress.total,
                    progress.percentage
                );
            }
            None => {
                println!(
                    "{} Batch {} [{}]",
                    batch.status.emoji(),
                    batch.id,
                    batch.status.label()
                );
            }
        }
    }

    // Transport/schema failures keep the last good snapshot on screen; the
    // error is an indicator, not a replacement.
    pub fn print_poll_error(error: &ApiError, snapshot: Option<&ValidationBatch>) {
        log::error!("❌ Poll failed: {}", error);
        if let Some(batch) = snapshot {
            println!(
                "⚠️ Showing last known state for batch {} ({})",
                batch.id,
                batch.status.label()
            );
        }
    }

    pub fn print_batch_summary(batch: &ValidationBatch) {
        let summary = SeverityAggregator::batch_summary(batch);

        println!("\n📊 Batch {} Summary", batch.id);
        println!("═══════════════════════════════════════");
        println!("   Name: {}", batch.name);
        println!("   Status: {} {}", batch.status.emoji(), batch.status.label());
        println!(
            "   Prompts: {}/{} completed",
            summary.completed_prompts, summary.total_prompts
        );
        println!(
            "   Issues: {} ({})",
            summary.total_issues,
            summary.severity_counts.breakdown()
        );

        match summary.highest_severity {
            Some(severity) => {
                println!("   Dominant severity: {} {}", severity.emoji(), severity.label());
            }
            None => {
                println!("   Dominant severity: none");
            }
        }

        let failed_prompts = batch.failed_prompt_count();
        if batch.status == Status::Completed && failed_prompts > 0 {
            println!(
                "   ⚠️ {} prompt(s) failed - severity totals may under-represent actual risk",
                failed_prompts
            );
        }

        println!("\n🏷️ Per-prompt severity:");
        for (key, counts) in SeverityAggregator::prompt_severity_matrix(batch) {
            println!("   {} -> {}", key, counts.breakdown());
        }
        println!("═══════════════════════════════════════");
    }

    pub fn print_prompt_results(batch: &ValidationBatch) {
        for prompt_result in &batch.prompt_results {
            let summary = SeverityAggregator::prompt_summary(prompt_result);
            let name = format_prompt_name(&prompt_result.prompt.category, &prompt_result.prompt.name);

            if summary.is_failed {
                let reason = prompt_result
                    .error_message
                    .as_deref()
                    .unwrap_or("unknown error");
                println!("   ❌ {}: {}", name, reason);
            } else if summary.is_completed {
                println!(
                    "   ✅ {}: {} issues ({})",
                    name,
                    summary.total_issues,
                    summary.severity_counts.breakdown()
                );
                for issue in prompt_result.result.as_deref().unwrap_or(&[]) {
                    let lines = match &issue.lines {
                        Some(lines) if !lines.is_empty() => format!(
                            " [lines {}]",
                            lines
                                .iter()
                                .map(|line| line.to_string())
                                .collect::<Vec<String>>()
                                .join(", ")
                        ),
                        _ => String::new(),
                    };
                    println!(
                        "      {} {} {}{}: {}",
                        issue.issue_type.icon(),
                        issue.severity.emoji(),
                        issue.severity.label(),
                        lines,
                        issue.description
                    );
                }
            } else {
                println!("   ⏳ {}: {}", name, prompt_result.status.label());
            }
        }
    }

    pub fn print_log_page(page: &LogPage) {
        println!("\n📋 Validation Logs (page {}/{}, {} total)", page.curr_page, page.total_pages, page.total);
        println!("{}", "=".repeat(50));

        if page.logs.is_empty() {
            println!("⚠️ No logs found.");
            return;
        }

        for batch in &page.logs {
            let counts = SeverityAggregator::counts_for_batch(batch);
            println!(
                "{} {} | {} | {}/{} prompts | {} | {}",
                batch.status.emoji(),
                batch.id,
                batch.name,
                batch.completed_prompts,
                batch.total_prompts,
                counts.breakdown(),
                batch.created_at.to_rfc3339()
            );
        }
    }

    pub fn print_active_batches(batches: &[ActiveBatch]) {
        println!("\n🔄 Active Batches");
        println!("{}", "=".repeat(50));

        if batches.is_empty() {
            println!("⚠️ No batches in flight.");
            return;
        }

        for batch in batches {
            println!(
                "{} {} | {} | {} prompts selected, {} completed",
                batch.status.emoji(),
                batch.id,
                batch.name,
                batch.selected_prompts.len(),
                batch.completed_prompts
            );
        }
    }
}
