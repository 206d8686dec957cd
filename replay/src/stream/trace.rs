use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use styluscore::prelude::{DeviceReport, SmoothingConfig};

/// On-disk form of a report trace plus the filter settings that produced it.
#[derive(Debug, Serialize, Deserialize)]
pub struct TraceFile {
    pub config: SmoothingConfig,
    pub reports: Vec<DeviceReport>,
}

pub fn load_trace<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<DeviceReport>> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("reading trace {}", path_ref.display()))?;
    let trace: TraceFile = serde_json::from_str(&contents)
        .with_context(|| format!("parsing trace {}", path_ref.display()))?;
    Ok(trace.reports)
}

pub fn save_trace<P: AsRef<Path>>(path: P, trace: &TraceFile) -> anyhow::Result<()> {
    let path_ref = path.as_ref();
    let contents = serde_json::to_string_pretty(trace).context("serializing trace")?;
    fs::write(path_ref, contents)
        .with_context(|| format!("writing trace {}", path_ref.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::generator::{build_stroke, StrokeConfig};
    use tempfile::NamedTempFile;

    #[test]
    fn trace_round_trips_through_json() {
        let reports = build_stroke(&StrokeConfig {
            samples: 16,
            ..Default::default()
        })
        .unwrap();
        let trace = TraceFile {
            config: SmoothingConfig::default(),
            reports: reports.clone(),
        };

        let temp = NamedTempFile::new().unwrap();
        let path = temp.into_temp_path();
        save_trace(&path, &trace).unwrap();
        assert_eq!(load_trace(&path).unwrap(), reports);
    }

    #[test]
    fn load_trace_reports_missing_file_with_path() {
        let err = load_trace("does/not/exist.json").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
