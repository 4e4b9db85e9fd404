//! NutriCoach Status Tool
//!
//! Runtime status of the service plus the usage guide served to assistants.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::Config;

/// Usage guide for AI assistants
pub const NUTRITION_INSTRUCTIONS: &str = r#"
# NutriCoach Usage Instructions

All tools are stateless calculations. Nothing is stored; pass the foods you
want evaluated with every call.

## Food records

Foods are passed as raw JSON objects. Either naming scheme works:

| Meaning | English | Stored column |
|---------|---------|---------------|
| id | `id` | `id` |
| name | `name` | `nome` |
| reference portion (g or ml) | `portion` | `quantidade_referencia_g` |
| kcal per portion | `calories` | `kcal_por_referencia` |
| carbs per portion (g) | `carbs` | `cho_por_referencia` |
| protein per portion (g) | `protein` | `ptn_por_referencia` |
| fat per portion (g) | `fat` | `lip_por_referencia` |
| protein origin | `protein_origin` | `origem_ptn` |

Missing or unreadable numbers count as 0. A missing or zero portion counts
as 100. Call `normalize_food` to see exactly how a record is read.

## Quantities

Quantities are in the same unit as the food's reference portion (grams for
solids, milliliters for liquids).

## Typical workflow

1. `summarize_diet` with every planned item (label each with its `meal`) and
   the student's calorie target → totals, per-meal totals, energy split,
   animal vs non-animal protein, and whether the plan is within 5% of target.
2. `find_substitutes` when the student wants to swap a food. Use
   `criterion: "calories"` for calorie control or `"carbs"` for glycemic
   control. Only foods of the same dominant macro group are proposed.
3. `compute_targets` to turn weight, kcal/kg and protein g/kg into daily
   targets.

## Data checks

- `check_energy_consistency` is built into `normalize_food`: a food whose
  declared kcal differs from 4/4/9 kcal per gram by more than 10% is flagged.
- `check_fiber` flags daily fiber above 30 g.
"#;

/// Status response
#[derive(Debug, Serialize)]
pub struct NutricoachStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,

    pub substitution_limit: usize,
}

/// Tracks process start for uptime reporting
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
    substitution_limit: usize,
}

impl StatusTracker {
    pub fn new(config: &Config) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
            substitution_limit: config.substitution_limit,
        }
    }

    pub fn get_status(&self) -> NutricoachStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        NutricoachStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            started_at: self.started_at,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            substitution_limit: self.substitution_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_process() {
        let tracker = StatusTracker::new(&Config::default());
        let status = tracker.get_status();
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.substitution_limit, 5);
        assert!(status.started_at <= Utc::now());
    }
}
