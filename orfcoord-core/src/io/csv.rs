use crate::error::{OrfError, OrfResult};
use crate::io::detect::detect_delimiter;
use crate::orf::OrfMap;
use csv::{ReaderBuilder, StringRecord};
use log::debug;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug)]
pub enum ColumnSel {
    Name(String),
    Index(usize),
}

/// Loads an annotation map whose first column is the raw label and second the ORF code.
pub fn read_orf_map(path: impl AsRef<Path>) -> OrfResult<OrfMap> {
    read_orf_map_with(path, ColumnSel::Index(0), ColumnSel::Index(1))
}

pub fn read_orf_map_with(
    path: impl AsRef<Path>,
    label_col: ColumnSel,
    code_col: ColumnSel,
) -> OrfResult<OrfMap> {
    let path_ref = path.as_ref();
    let path_str = path_ref.display().to_string();
    let data = fs::read(path_ref).map_err(|e| OrfError::CsvParse {
        path: path_str.clone(),
        source: csv::Error::from(e),
    })?;
    read_orf_map_from_bytes(&data, label_col, code_col, &path_str)
}

pub(crate) fn read_orf_map_from_bytes(
    data: &[u8],
    label_col: ColumnSel,
    code_col: ColumnSel,
    path_str: &str,
) -> OrfResult<OrfMap> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(detect_delimiter(data).as_byte())
        .from_reader(data);

    let headers = reader
        .headers()
        .map_err(|e| OrfError::CsvParse {
            path: path_str.to_string(),
            source: e,
        })?
        .clone();
    let label_idx = resolve_column(&label_col, &headers, path_str)?;
    let code_idx = resolve_column(&code_col, &headers, path_str)?;

    let mut map = OrfMap::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| OrfError::CsvParse {
            path: path_str.to_string(),
            source: e,
        })?;
        let row = row_idx + 1;

        let label = record
            .get(label_idx)
            .ok_or_else(|| OrfError::CsvMissingField {
                row,
                column: column_label(&label_col),
                path: path_str.to_string(),
            })?;
        let code = record
            .get(code_idx)
            .ok_or_else(|| OrfError::CsvMissingField {
                row,
                column: column_label(&code_col),
                path: path_str.to_string(),
            })?;

        if let Some(old) = map.insert(label, code) {
            debug!("{path_str}: row {row} remaps {label:?} from {old:?} to {code:?}");
        }
    }

    Ok(map)
}

fn resolve_column(sel: &ColumnSel, headers: &StringRecord, path: &str) -> OrfResult<usize> {
    match sel {
        ColumnSel::Name(name) => {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| OrfError::CsvMissingColumn {
                    name: name.clone(),
                    headers: headers.iter().map(|s| s.to_string()).collect(),
                    path: path.to_string(),
                })
        }
        ColumnSel::Index(index) => {
            if *index < headers.len() {
                Ok(*index)
            } else {
                Err(OrfError::CsvColumnIndexOutOfRange {
                    index: *index,
                    ncols: headers.len(),
                    path: path.to_string(),
                })
            }
        }
    }
}

fn column_label(sel: &ColumnSel) -> String {
    match sel {
        ColumnSel::Name(name) => name.clone(),
        ColumnSel::Index(index) => format!("#{index}"),
    }
}
