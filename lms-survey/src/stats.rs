use std::collections::BTreeMap;

use lms_survey_types::SurveyRecord;
use serde::Serialize;

/// Aggregate statistics over the stored submissions.
///
/// Averages cover only the records where the metric is present (nonzero
/// for ratings, non-blank for response times); breakdowns bucket blank
/// answers under `Unknown`. Maps are ordered so serialized output is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyStats {
    pub total_submissions: usize,
    pub avg_response_time_ms: f64,
    pub avg_usability_rating: f64,
    pub device_types: BTreeMap<String, usize>,
    pub academic_levels: BTreeMap<String, usize>,
}

impl SurveyStats {
    /// Compute statistics over a set of records; `None` when there are no
    /// records to summarize.
    pub fn compute(records: &[SurveyRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let response_times: Vec<f64> = records
            .iter()
            .filter_map(|record| record.performance.response_time_ms)
            .collect();
        let usability_ratings: Vec<f64> = records
            .iter()
            .map(|record| record.satisfaction.usability_rating)
            .filter(|&rating| rating != 0)
            .map(f64::from)
            .collect();

        let mut device_types = BTreeMap::new();
        let mut academic_levels = BTreeMap::new();
        for record in records {
            *device_types
                .entry(bucket(&record.demographic.device_type))
                .or_insert(0) += 1;
            *academic_levels
                .entry(bucket(&record.demographic.academic_level))
                .or_insert(0) += 1;
        }

        Some(Self {
            total_submissions: records.len(),
            avg_response_time_ms: mean(&response_times),
            avg_usability_rating: mean(&usability_ratings),
            device_types,
            academic_levels,
        })
    }
}

fn bucket(value: &str) -> String {
    if value.is_empty() {
        "Unknown".to_string()
    } else {
        value.to_string()
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
