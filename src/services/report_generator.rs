use std::collections::HashMap;
use crate::config::constants::NO_CONTENT_PLACEHOLDER;
use crate::enums::issue_type::IssueType;
use crate::enums::severity::Severity;
use crate::enums::status::Status;
use crate::helpers::formatters::{format_duration_secs, format_issue_count, format_prompt_name};
use crate::services::severity_aggregator::SeverityAggregator;
use crate::structs::prompt_result::ValidationPromptResult;
use crate::structs::validation_batch::ValidationBatch;
use crate::structs::validation_file::ValidationFile;
use crate::structs::validation_issue::ValidationIssue;

// Pure markdown rendering. Identical inputs produce byte-identical output:
// no generation timestamps, no randomized ordering.
pub struct ReportGenerator;

impl ReportGenerator {

    pub fn generate(batch: &ValidationBatch, files: Option<&[ValidationFile]>) -> String {
        let contents: HashMap<i64, &ValidationFile> = files
            .unwrap_or(&[])
            .iter()
            .map(|file| (file.id, file))
            .collect();

        let mut report = String::new();

        Self::render_header(&mut report, batch);
        Self::render_file_list(&mut report, batch, &contents);
        Self::render_overview(&mut report, batch);
        Self::render_details(&mut report, batch, &contents);

        report
    }

    fn render_header(report: &mut String, batch: &ValidationBatch) {
        report.push_str(&format!("# Validation Report ID: {}\n\n", batch.id));
        report.push_str(&format!("**Name:** {}\n", batch.name));
        report.push_str(&format!("**Status:** {}\n", batch.status.label()));
        report.push_str(&format!("**Created:** {}\n", batch.created_at.to_rfc3339()));
        report.push_str(&format!("**Updated:** {}\n\n", batch.updated_at.to_rfc3339()));
    }

    fn render_file_list(
        report: &mut String,
        batch: &ValidationBatch,
        contents: &HashMap<i64, &ValidationFile>,
    ) {
        report.push_str("## Files\n\n");

        if batch.file_ids.is_empty() {
            report.push_str("N/A\n\n");
            return;
        }

        for file_id in &batch.file_ids {
            let hash = contents
                .get(&file_id.id)
                .and_then(|file| file.sha256.as_deref())
                .unwrap_or("N/A");
            report.push_str(&format!("- {} (sha256: {})\n", file_id.file_name, hash));
        }
        report.push('\n');
    }

    fn render_overview(report: &mut String, batch: &ValidationBatch) {
        report.push_str("## Results Overview\n\n");
        report.push_str(
            "| # | Prompt | Status | Issues | Total (s) | Eval (s) | Load (s) | Prompt Eval (s) |\n",
        );
        report.push_str(
            "|---|--------|--------|--------|-----------|----------|----------|-----------------|\n",
        );

        for (index, prompt_result) in batch.prompt_results.iter().enumerate() {
            let counts = SeverityAggregator::counts_for_prompt(prompt_result);
            report.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} | {} |\n",
                index + 1,
                format_prompt_name(&prompt_result.prompt.category, &prompt_result.prompt.name),
                prompt_result.status.label(),
                format_issue_count(&counts),
                format_duration_secs(prompt_result.total_duration_ns),
                format_duration_secs(prompt_result.eval_duration_ns),
                format_duration_secs(prompt_result.load_duration_ns),
                format_duration_secs(prompt_result.prompt_eval_duration_ns),
            ));
        }

        let totals = SeverityAggregator::counts_for_batch(batch);
        report.push_str(&format!("\n**Total issues:** {}\n", format_issue_count(&totals)));

        // A completed batch can hide individually failed prompts; say so
        // instead of letting the totals read as exhaustive.
        let failed_prompts = batch.failed_prompt_count();
        if batch.status == Status::Completed && failed_prompts > 0 {
            report.push_str(&format!(
                "\n> Note: {} prompt(s) failed; severity totals may under-represent actual risk.\n",
                failed_prompts
            ));
        }
        report.push('\n');
    }

    fn render_details(
        report: &mut String,
        batch: &ValidationBatch,
        contents: &HashMap<i64, &ValidationFile>,
    ) {
        report.push_str("## Details\n");

        for (index, prompt_result) in batch.prompt_results.iter().enumerate() {
            report.push_str(&format!(
                "\n### {}. {}\n\n",
                index + 1,
                format_prompt_name(&prompt_result.prompt.category, &prompt_result.prompt.name),
            ));
            report.push_str(&format!("Status: {}\n", prompt_result.status.label()));

            match prompt_result.status {
                Status::Failed => {
                    let reason = prompt_result
                        .error_message
                        .as_deref()
                        .unwrap_or("unknown error");
                    report.push_str(&format!("\nError: {}\n", reason));
                }
                Status::Completed => {
                    Self::render_issue_groups(report, batch, prompt_result, contents);
                }
                Status::Waiting | Status::Processing => {
                    report.push_str("\nNot finished yet.\n");
                }
            }
        }
    }

    fn render_issue_groups(
        report: &mut String,
        batch: &ValidationBatch,
        prompt_result: &ValidationPromptResult,
        contents: &HashMap<i64, &ValidationFile>,
    ) {
        let issues = prompt_result.result.as_deref().unwrap_or(&[]);
        if issues.is_empty() {
            report.push_str("\nNo issues found.\n");
            return;
        }

        // Group by (type, severity): types in declaration order, severities
        // high before medium before low; issue order inside a group follows
        // the original result list.
        let mut groups: Vec<((IssueType, Severity), Vec<&ValidationIssue>)> = Vec::new();
        for issue in issues {
            let key = (issue.issue_type, issue.severity);
            match groups.iter_mut().find(|(group_key, _)| *group_key == key) {
                Some((_, members)) => members.push(issue),
                None => groups.push((key, vec![issue])),
            }
        }
        groups.sort_by(|a, b| a.0 .0.cmp(&b.0 .0).then(b.0 .1.cmp(&a.0 .1)));

        for (group_index, ((issue_type, severity), members)) in groups.iter().enumerate() {
            report.push_str(&format!(
                "\n#### Group {}: {} / {}\n\n",
                group_index + 1,
                issue_type.label(),
                severity.label(),
            ));

            for issue in members {
                Self::render_issue(report, batch, issue, contents);
            }
        }
    }

    fn render_issue(
        report: &mut String,
        batch: &ValidationBatch,
        issue: &ValidationIssue,
        contents: &HashMap<i64, &ValidationFile>,
    ) {
        let attributed = Self::attribute_file(batch, issue, contents);
        let location = match (&attributed, &issue.lines) {
            (Some(file), Some(lines)) if !lines.is_empty() => format!(
                "{} (lines: {})",
                file.file_name,
                lines
                    .iter()
                    .map(|line| line.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
            (Some(file), _) => file.file_name.clone(),
            (None, _) => "N/A".to_string(),
        };

        report.push_str(&format!("- {}\n\n", location));
        report.push_str(&format!("  {}\n\n", issue.description));

        match Self::snippet(issue, attributed) {
            Some(snippet) => {
                report.push_str("  ```\n");
                for line in snippet {
                    report.push_str(&format!("  {}\n", line));
                }
                report.push_str("  ```\n\n");
            }
            None => {
                report.push_str(&format!("  {}\n\n", NO_CONTENT_PLACEHOLDER));
            }
        }
    }

    // Issues carry line numbers but no file attribution on the wire. A
    // single-file batch is unambiguous; otherwise take the first supplied
    // file whose content spans every referenced line.
    fn attribute_file<'a>(
        batch: &ValidationBatch,
        issue: &ValidationIssue,
        contents: &HashMap<i64, &'a ValidationFile>,
    ) -> Option<&'a ValidationFile> {
        if batch.file_ids.len() == 1 {
            return contents.get(&batch.file_ids[0].id).copied();
        }

        let lines = issue.lines.as_deref()?;
        let max_line = lines.iter().copied().max()?;

        batch.file_ids.iter().find_map(|file_id| {
            contents
                .get(&file_id.id)
                .copied()
                .filter(|file| file.content.lines().count() as u64 >= max_line)
        })
    }

    fn snippet<'a>(
        issue: &ValidationIssue,
        file: Option<&'a ValidationFile>,
    ) -> Option<Vec<&'a str>> {
        let file = file?;
        let lines = issue.lines.as_deref()?;
        if lines.is_empty() {
            return None;
        }

        let content_lines: Vec<&str> = file.content.lines().collect();
        let mut snippet = Vec::new();
        for line_number in lines {
            let index = line_number.checked_sub(1)? as usize;
            snippet.push(*content_lines.get(index)?);
        }
        Some(snippet)
    }
}
