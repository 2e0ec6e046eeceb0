use crate::error::OrfResult;
use crate::io::{orf_table_path, read_genbank_records, read_orf_map, write_orf_table_to_path};
use crate::orf::{extract_orfs, Anomaly};
use log::{info, warn};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub output: PathBuf,
    pub records: usize,
    pub anomalies: Vec<Anomaly>,
}

/// Extracts ORF coordinates from a GenBank file and writes them next to it as `<stem>_orf.txt`.
pub fn run(input: impl AsRef<Path>, orf_map: impl AsRef<Path>) -> OrfResult<RunSummary> {
    let input = input.as_ref();
    let map = read_orf_map(orf_map)?;
    if map.is_empty() {
        warn!("annotation map is empty; labels are used as ORF codes unchanged");
    }
    let output = orf_table_path(input);
    info!("{}", output.display());

    let records = read_genbank_records(input)?;
    let report = extract_orfs(&records, &map);
    if report.data.is_empty() {
        warn!("{}: no GenBank records found", input.display());
    }
    write_orf_table_to_path(&output, &report.data)?;

    Ok(RunSummary {
        output,
        records: report.data.len(),
        anomalies: report.anomalies,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrfError;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("orfcoord_pipeline_test_{nanos}"));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_input_fails_before_writing() {
        let dir = temp_dir();
        let map = dir.join("map.csv");
        fs::write(&map, "annotation,code\npp1a,1a\n").unwrap();
        let err = run(dir.join("absent.gb"), &map).unwrap_err();
        assert!(matches!(err, OrfError::Io { .. }));
        assert!(!dir.join("absent_orf.txt").exists());
    }

    #[test]
    fn missing_map_is_fatal() {
        let dir = temp_dir();
        let err = run(dir.join("absent.gb"), dir.join("absent.csv")).unwrap_err();
        assert!(matches!(err, OrfError::CsvParse { .. }));
    }
}
