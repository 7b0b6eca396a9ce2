use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Progress {
    pub completed: u32,
    pub total: u32,
    pub percentage: u32,
}

impl Progress {
    // Present only when the batch actually has prompts; callers get None
    // instead of a 0/0 progress record.
    pub fn from_counts(completed: u32, total: u32) -> Option<Progress> {
        if total == 0 {
            return None;
        }
        let percentage = ((f64::from(completed) / f64::from(total)) * 100.0).round() as u32;
        Some(Progress {
            completed,
            total,
            percentage,
        })
    }
}
