// SPDX-License-Identifier: Apache-2.0

//! Dashboard aggregations.
//!
//! These mirror what the frontend computes for display; the server uses
//! them for the startup dataset summary.

use std::cmp::Ordering;

use crate::record::HappinessRecord;

/// Arithmetic mean of `happiness_score` per region, in order of first
/// appearance. Records without a region or score are skipped.
#[must_use]
pub fn region_means(records: &[HappinessRecord]) -> Vec<(String, f64)> {
    let mut groups: Vec<(String, f64, u32)> = Vec::new();
    for record in records {
        let (Some(region), Some(score)) = (record.region(), record.happiness_score()) else {
            continue;
        };
        match groups.iter_mut().find(|(name, _, _)| name.as_str() == region) {
            Some((_, sum, count)) => {
                *sum += score;
                *count += 1;
            }
            None => groups.push((region.to_string(), score, 1)),
        }
    }
    groups
        .into_iter()
        .map(|(name, sum, count)| (name, sum / f64::from(count)))
        .collect()
}

/// Region with the highest mean score. Comparison is strict, so on ties the
/// region that appears first in the dataset wins.
#[must_use]
pub fn top_region(records: &[HappinessRecord]) -> Option<String> {
    let mut best: Option<(String, f64)> = None;
    for (region, mean) in region_means(records) {
        match &best {
            Some((_, max)) if mean <= *max => {}
            _ => best = Some((region, mean)),
        }
    }
    best.map(|(region, _)| region)
}

/// Mean `happiness_score` across all records (the record count is the
/// divisor, as on the dashboard).
#[must_use]
pub fn mean_score(records: &[HappinessRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let sum: f64 = records
        .iter()
        .filter_map(HappinessRecord::happiness_score)
        .sum();
    let count = records.len() as f64;
    Some(sum / count)
}

/// The `limit` highest-scoring records, descending. The sort is stable, so
/// ties keep dataset order and ties past the cutoff are excluded.
#[must_use]
pub fn top_by_score(records: &[HappinessRecord], limit: usize) -> Vec<HappinessRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let a = a.happiness_score().unwrap_or(f64::NEG_INFINITY);
        let b = b.happiness_score().unwrap_or(f64::NEG_INFINITY);
        b.partial_cmp(&a).unwrap_or(Ordering::Equal)
    });
    sorted.truncate(limit);
    sorted
}
