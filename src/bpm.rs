//! Tempo estimation for downloaded audio files.
//!
//! Beat tracking itself is delegated to an external estimator; this module
//! owns only the invocation seam and the range-folding rule applied to the
//! raw estimate.

use crate::{CatalogError, Result};
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

/// Lowest tempo accepted as a valid estimate.
pub const MIN_BPM: u32 = 60;
/// Highest tempo accepted as a valid estimate.
pub const MAX_BPM: u32 = 200;

/// Fold a raw tempo estimate into the accepted range.
///
/// Beat trackers commonly report half or double the perceived tempo, so an
/// estimate below the range is doubled once and one above it is halved
/// once. Returns `None` when the folded value still falls outside
/// [[`MIN_BPM`], [`MAX_BPM`]].
///
/// # Examples
///
/// ```rust
/// use youtube_catalog::bpm::fold_tempo;
///
/// assert_eq!(fold_tempo(128.4), Some(128));
/// assert_eq!(fold_tempo(65.0), Some(65));
/// assert_eq!(fold_tempo(50.0), Some(100));  // doubled
/// assert_eq!(fold_tempo(260.0), Some(130)); // halved
/// assert_eq!(fold_tempo(20.0), None);       // 40 after doubling, still low
/// ```
#[must_use]
pub fn fold_tempo(raw: f64) -> Option<u32> {
    if !raw.is_finite() || raw <= 0.0 {
        return None;
    }

    let mut bpm = raw.round() as u32;
    if bpm < MIN_BPM {
        bpm *= 2;
    } else if bpm > MAX_BPM {
        bpm /= 2;
    }

    (MIN_BPM..=MAX_BPM).contains(&bpm).then_some(bpm)
}

/// Produces raw beats-per-minute estimates for audio files.
///
/// When the `mock` feature is enabled, this crate provides `MockBeatTracker`
/// implementing this trait via the `mockall` library.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait BeatTracker {
    /// Estimate a raw tempo for the file, before range folding.
    fn estimate(&self, audio_path: &Path) -> Result<f64>;
}

#[derive(Debug, Deserialize)]
struct EstimatorOutput {
    #[serde(default)]
    bpm: f64,
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Beat tracker that shells out to an external estimator command.
///
/// The command is invoked with the audio path appended as its final
/// argument and must print a single JSON object of the form
/// `{"bpm": 128.0, "success": true}` (with an optional `error` field) on
/// stdout.
#[derive(Debug, Clone)]
pub struct CommandBeatTracker {
    program: String,
    args: Vec<String>,
}

impl CommandBeatTracker {
    /// Create a tracker invoking `program` with no extra arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Create a tracker invoking `program` with leading arguments.
    pub fn with_args(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl BeatTracker for CommandBeatTracker {
    fn estimate(&self, audio_path: &Path) -> Result<f64> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(audio_path)
            .output()
            .map_err(|e| CatalogError::BeatTrack(format!("failed to run {}: {e}", self.program)))?;

        if !output.status.success() {
            return Err(CatalogError::BeatTrack(format!(
                "{} exited with {}",
                self.program, output.status
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let parsed: EstimatorOutput = serde_json::from_str(stdout.trim())
            .map_err(|e| CatalogError::BeatTrack(format!("unreadable estimator output: {e}")))?;

        if !parsed.success {
            return Err(CatalogError::BeatTrack(
                parsed
                    .error
                    .unwrap_or_else(|| "estimator reported failure".to_string()),
            ));
        }

        Ok(parsed.bpm)
    }
}

/// Estimate the tempo of an audio file and fold it into the accepted range.
pub fn detect_bpm(tracker: &dyn BeatTracker, audio_path: &Path) -> Result<u32> {
    let raw = tracker.estimate(audio_path)?;
    log::debug!("raw tempo estimate for {}: {raw:.1}", audio_path.display());

    fold_tempo(raw).ok_or_else(|| {
        CatalogError::BeatTrack(format!("estimate {raw:.1} outside accepted range"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_estimates_pass_through() {
        assert_eq!(fold_tempo(60.0), Some(60));
        assert_eq!(fold_tempo(128.0), Some(128));
        assert_eq!(fold_tempo(200.0), Some(200));
        assert_eq!(fold_tempo(127.6), Some(128));
    }

    #[test]
    fn test_low_estimates_doubled_once() {
        assert_eq!(fold_tempo(59.0), Some(118));
        assert_eq!(fold_tempo(35.0), Some(70));
    }

    #[test]
    fn test_high_estimates_halved_once() {
        assert_eq!(fold_tempo(201.0), Some(100));
        assert_eq!(fold_tempo(255.0), Some(127)); // integer halving
    }

    #[test]
    fn test_unfoldable_estimates_rejected() {
        assert_eq!(fold_tempo(20.0), None); // 40 after doubling
        assert_eq!(fold_tempo(500.0), None); // 250 after halving
        assert_eq!(fold_tempo(0.0), None);
        assert_eq!(fold_tempo(-10.0), None);
        assert_eq!(fold_tempo(f64::NAN), None);
    }

    struct FixedTracker(f64);

    impl BeatTracker for FixedTracker {
        fn estimate(&self, _audio_path: &Path) -> Result<f64> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_detect_bpm_folds_estimate() {
        let bpm = detect_bpm(&FixedTracker(50.0), Path::new("track.mp3")).unwrap();
        assert_eq!(bpm, 100);
    }

    #[test]
    fn test_detect_bpm_rejects_unfoldable() {
        let result = detect_bpm(&FixedTracker(500.0), Path::new("track.mp3"));
        assert!(matches!(result, Err(CatalogError::BeatTrack(_))));
    }
}
