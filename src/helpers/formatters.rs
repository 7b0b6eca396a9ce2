use crate::structs::severity_counts::SeverityCounts;

// snake_case token -> "Snake Case"
pub fn format_token(token: &str) -> String {
    token
        .split('_')
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect::<Vec<String>>()
        .join(" ")
}

// "artifacts_validity" + "check_all" -> "Artifacts Validity - Check All"
pub fn format_prompt_name(category: &str, name: &str) -> String {
    format!("{} - {}", format_token(category), format_token(name))
}

// Nanoseconds to seconds with three decimals, "N/A" when absent.
pub fn format_duration_secs(duration_ns: Option<u64>) -> String {
    match duration_ns {
        Some(ns) => format!("{:.3}", ns as f64 / 1e9),
        None => "N/A".to_string(),
    }
}

// e.g. "12 (H:3 M:5 L:4)"
pub fn format_issue_count(counts: &SeverityCounts) -> String {
    format!("{} ({})", counts.total(), counts.breakdown())
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
