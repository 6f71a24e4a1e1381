//! Frame comparison and replay verification.
//!
//! [`replay_and_compare`] re-queries a timeline at every recorded time
//! and stops at the first hash mismatch. [`diff_frames`] explains a
//! mismatch when both frames are at hand.

use std::io::{BufRead, Write};

use plume_engine::{CreditLedger, Frame, Timeline};

use crate::error::ReplayError;
use crate::hash::{frame_hash, scenario_hash};
use crate::reader::ReplayReader;
use crate::types::ReplayHeader;
use crate::writer::ReplayWriter;

/// Which part of a frame differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DivergenceKind {
    /// The evaluated time.
    Time,
    /// Agent positions or modes.
    Positions,
    /// Global or per-mode emission totals.
    Emissions,
    /// Leaderboard order, scores or deltas.
    Leaderboard,
}

/// The first recorded frame a replay failed to reproduce.
#[derive(Clone, Debug, PartialEq)]
pub struct DivergenceReport {
    /// 0-based index of the frame within the recording.
    pub frame_index: u64,
    /// Recorded query time.
    pub time: f64,
    /// Hash from the recording.
    pub recorded: u64,
    /// Hash of the replayed frame.
    pub replayed: u64,
}

/// List the parts in which two frames differ, by value.
///
/// Timing metrics and generation ids are not compared.
pub fn diff_frames(recorded: &Frame, replayed: &Frame) -> Vec<DivergenceKind> {
    let mut kinds = Vec::new();
    if recorded.time.to_bits() != replayed.time.to_bits() {
        kinds.push(DivergenceKind::Time);
    }
    if recorded.positions != replayed.positions {
        kinds.push(DivergenceKind::Positions);
    }
    if recorded.emissions != replayed.emissions {
        kinds.push(DivergenceKind::Emissions);
    }
    if recorded.leaderboard != replayed.leaderboard {
        kinds.push(DivergenceKind::Leaderboard);
    }
    kinds
}

/// Query `timeline` at each of `times` with a fresh ledger, recording
/// every frame to `sink`. Returns the number of frames written.
pub fn record_session<W: Write>(
    timeline: &Timeline,
    times: impl IntoIterator<Item = f64>,
    multiplier: f64,
    sink: W,
) -> Result<u64, ReplayError> {
    let header = ReplayHeader::new(scenario_hash(timeline.generation().scenario()), multiplier);
    let mut writer = ReplayWriter::new(sink, &header)?;
    let mut ledger = CreditLedger::new();
    for t in times {
        writer.write_frame(&timeline.frame(t, &mut ledger))?;
    }
    writer.flush()?;
    Ok(writer.frames_written())
}

/// Replay a recording against `timeline` and compare frame hashes.
///
/// Frames are re-queried in recorded order with a fresh
/// [`CreditLedger`], so deltas are reproduced as well as scores.
///
/// Returns `Ok(None)` if every frame matches, or `Ok(Some(report))` at
/// the first divergence.
///
/// # Errors
///
/// [`ReplayError::ScenarioMismatch`] if the recording was made against a
/// different scenario, or any read error from the recording.
pub fn replay_and_compare<R: BufRead>(
    mut reader: ReplayReader<R>,
    timeline: &Timeline,
) -> Result<Option<DivergenceReport>, ReplayError> {
    let current = scenario_hash(timeline.generation().scenario());
    let recorded = reader.header().scenario_hash;
    if recorded != current {
        return Err(ReplayError::ScenarioMismatch { recorded, current });
    }

    let mut ledger = CreditLedger::new();
    let mut frame_index = 0;
    while let Some(record) = reader.next_frame()? {
        let replayed = frame_hash(&timeline.frame(record.time, &mut ledger));
        if replayed != record.frame_hash {
            tracing::warn!(
                frame_index,
                time = record.time,
                recorded = record.frame_hash,
                replayed,
                "replay diverged"
            );
            return Ok(Some(DivergenceReport {
                frame_index,
                time: record.time,
                recorded: record.frame_hash,
                replayed,
            }));
        }
        frame_index += 1;
    }

    tracing::debug!(frames = frame_index, "replay matched every frame");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReplayFrame;
    use plume_core::Scenario;
    use plume_engine::EngineConfig;
    use plume_test_utils::{agent, CanonicalLeg};

    fn timeline() -> Timeline {
        let scenario = Scenario {
            agents: vec![
                agent(
                    "walker",
                    [CanonicalLeg::new(0.0, 600.0)
                        .mode("walk")
                        .distance_km(1.0)
                        .emission_g(0.0)
                        .straight((0.0, 0.0), (0.01, 0.0))
                        .build()],
                ),
                agent(
                    "driver",
                    [CanonicalLeg::new(300.0, 900.0)
                        .mode("car")
                        .distance_km(8.0)
                        .emission_g(960.0)
                        .straight((1.0, 1.0), (1.1, 1.0))
                        .build()],
                ),
            ],
            ..Scenario::default()
        };
        Timeline::with_scenario(scenario, EngineConfig::default()).unwrap()
    }

    #[test]
    fn recorded_session_replays_cleanly() {
        let t = timeline();
        let mut buf = Vec::new();
        let n = record_session(&t, [0.0, 300.0, 600.0, 900.0], 60.0, &mut buf).unwrap();
        assert_eq!(n, 4);

        let reader = ReplayReader::open(buf.as_slice()).unwrap();
        assert_eq!(reader.header().multiplier, 60.0);
        assert_eq!(replay_and_compare(reader, &t).unwrap(), None);
    }

    #[test]
    fn tampered_hash_is_reported() {
        let t = timeline();
        let header = ReplayHeader::new(scenario_hash(t.generation().scenario()), 1.0);
        let mut buf = Vec::new();
        {
            let mut w = ReplayWriter::new(&mut buf, &header).unwrap();
            let mut ledger = CreditLedger::new();
            w.write_frame(&t.frame(100.0, &mut ledger)).unwrap();
            let good = w.write_frame(&t.frame(700.0, &mut ledger)).unwrap();
            w.write_raw_frame(&ReplayFrame {
                time: 900.0,
                frame_hash: good.frame_hash,
            })
            .unwrap();
        }
        let report = replay_and_compare(ReplayReader::open(buf.as_slice()).unwrap(), &t)
            .unwrap()
            .unwrap();
        assert_eq!(report.frame_index, 2);
        assert_eq!(report.time, 900.0);
    }

    #[test]
    fn other_scenario_is_an_error() {
        let t = timeline();
        let mut buf = Vec::new();
        record_session(&t, [0.0], 1.0, &mut buf).unwrap();

        let other = Timeline::new(EngineConfig::default()).unwrap();
        let reader = ReplayReader::open(buf.as_slice()).unwrap();
        assert!(matches!(
            replay_and_compare(reader, &other),
            Err(ReplayError::ScenarioMismatch { .. })
        ));
    }

    #[test]
    fn diff_names_the_changed_parts() {
        let t = timeline();
        let a = t.frame(600.0, &mut CreditLedger::new());
        let b = t.frame(900.0, &mut CreditLedger::new());
        let kinds = diff_frames(&a, &b);
        assert!(kinds.contains(&DivergenceKind::Time));
        assert!(kinds.contains(&DivergenceKind::Positions));
        assert!(kinds.contains(&DivergenceKind::Emissions));
        assert!(diff_frames(&a, &a).is_empty());
    }
}
