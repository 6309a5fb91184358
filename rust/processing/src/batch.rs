// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Batch panelization of many parts.
//!
//! Parts are independent, so they are laid out in parallel. A part that
//! fails is recorded in the report and the rest of the batch carries on.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::PanelizeOptions;
use crate::part::{LayerRole, OpeningRecord, PartGeometry};
use crate::pipeline::{panelize_part, FixedOrigin, PanelLayout};
use crate::takeoff::PanelStatus;

/// One part with its openings and the resolved coordinate-0 of its wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartJob {
    pub part: PartGeometry,
    #[serde(default)]
    pub openings: Vec<OpeningRecord>,
    pub origin: f64,
}

/// Why a part was left out of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    CoreLayer,
    AlreadyPanelized,
    TooShort,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedPart {
    pub part_id: u64,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartFailure {
    pub part_id: u64,
    pub error: String,
}

/// Outcome of a batch, each list in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub layouts: Vec<PanelLayout>,
    pub skipped: Vec<SkippedPart>,
    pub failures: Vec<PartFailure>,
}

impl BatchReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

enum Outcome {
    Laid(Box<PanelLayout>),
    Skipped(SkipReason),
    Failed(String),
}

fn skip_reason(part: &PartGeometry, options: &PanelizeOptions) -> Option<SkipReason> {
    if part.face().role == LayerRole::Core {
        return Some(SkipReason::CoreLayer);
    }
    match PanelStatus::classify(part.length, &options.panel_spec()) {
        PanelStatus::Unpanelized => None,
        PanelStatus::Panelized => Some(SkipReason::AlreadyPanelized),
        PanelStatus::Underpanelized => Some(SkipReason::TooShort),
    }
}

/// Panelizes every part that is still longer than the maximum panel of the
/// configured template.
pub fn panelize_all(jobs: &[PartJob], options: &PanelizeOptions) -> BatchReport {
    tracing::info!(parts = jobs.len(), "Starting batch panelization");

    let outcomes: Vec<(u64, Outcome)> = jobs
        .par_iter()
        .map(|job| {
            let part_id = job.part.id;
            if let Some(reason) = skip_reason(&job.part, options) {
                return (part_id, Outcome::Skipped(reason));
            }
            let mut probe = FixedOrigin(job.origin);
            match panelize_part(&job.part, &job.openings, &mut probe, options) {
                Ok(layout) => (part_id, Outcome::Laid(Box::new(layout))),
                Err(e) => (part_id, Outcome::Failed(e.to_string())),
            }
        })
        .collect();

    let mut report = BatchReport::default();
    for (part_id, outcome) in outcomes {
        match outcome {
            Outcome::Laid(layout) => report.layouts.push(*layout),
            Outcome::Skipped(reason) => report.skipped.push(SkippedPart { part_id, reason }),
            Outcome::Failed(error) => {
                tracing::warn!(part_id, error = %error, "Part could not be panelized");
                report.failures.push(PartFailure { part_id, error });
            }
        }
    }

    tracing::info!(
        panelized = report.layouts.len(),
        skipped = report.skipped.len(),
        failed = report.failures.len(),
        "Batch panelization complete"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::WallKind;
    use reveal_lite_geometry::{Point3, Vector3};

    fn job(id: u64, length: f64, layer_index: u32, wall_direction: Vector3<f64>) -> PartJob {
        PartJob {
            part: PartGeometry {
                id,
                length,
                height: 8.0,
                centre: Point3::new(length / 2.0, 0.0, 4.0),
                wall_direction,
                layer_index,
                wall_kind: WallKind::Envelope,
            },
            openings: Vec::new(),
            origin: 0.0,
        }
    }

    #[test]
    fn sorts_parts_into_outcomes() {
        let jobs = [
            job(1, 20.0, 1, Vector3::x()),
            job(2, 3.0, 1, Vector3::x()),
            job(3, 20.0, 2, Vector3::x()),
            job(4, 20.0, 3, Vector3::new(0.6, 0.8, 0.0)),
            job(5, 16.0, 3, Vector3::y()),
            job(6, 1.0, 3, Vector3::y()),
        ];
        let report = panelize_all(&jobs, &PanelizeOptions::default());

        let laid: Vec<u64> = report.layouts.iter().map(|l| l.part_id).collect();
        assert_eq!(laid, vec![1, 5]);
        assert_eq!(
            report.skipped,
            vec![
                SkippedPart { part_id: 2, reason: SkipReason::AlreadyPanelized },
                SkippedPart { part_id: 3, reason: SkipReason::CoreLayer },
                SkippedPart { part_id: 6, reason: SkipReason::TooShort },
            ]
        );
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].part_id, 4);
    }

    #[test]
    fn batch_is_repeatable() {
        let jobs: Vec<PartJob> = (0..16)
            .map(|i| job(i, 10.0 + i as f64 * 1.7, 1 + 2 * (i as u32 % 2), Vector3::x()))
            .collect();
        let options = PanelizeOptions::default();
        assert_eq!(panelize_all(&jobs, &options), panelize_all(&jobs, &options));
    }

    #[test]
    fn report_serializes() {
        let report = panelize_all(&[job(9, 2.5, 1, Vector3::x())], &PanelizeOptions::default());
        let json = report.to_json().unwrap();
        assert!(json.contains("\"already_panelized\""));
        assert!(json.contains("\"layouts\": []"));
    }
}
