use crate::error::{OrfError, OrfResult};
use crate::seq::{AnnotatedRecord, FeatureLocation, Location, SeqFeature};
use gb_io::reader::SeqReader;
use gb_io::seq::{Feature, Location as GbLocation, Seq};
use log::warn;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

pub fn read_genbank_records(path: impl AsRef<Path>) -> OrfResult<Vec<AnnotatedRecord>> {
    let path_ref = path.as_ref();
    let path_str = path_ref.display().to_string();
    let file = File::open(path_ref).map_err(|e| OrfError::Io {
        path: path_str.clone(),
        source: e,
    })?;
    read_records(BufReader::new(file), &path_str)
}

pub fn read_genbank_records_from_bytes(data: &[u8]) -> OrfResult<Vec<AnnotatedRecord>> {
    read_records(Cursor::new(data), "<bytes>")
}

fn read_records<R: Read>(reader: R, path: &str) -> OrfResult<Vec<AnnotatedRecord>> {
    let mut out = Vec::new();
    for (idx, result) in SeqReader::new(reader).enumerate() {
        let seq = result.map_err(|e| OrfError::GenbankParse {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        out.push(convert_record(&seq, idx + 1));
    }
    Ok(out)
}

/// Converts a parsed GenBank entry, keeping only what ORF extraction needs.
pub fn convert_record(seq: &Seq, ordinal: usize) -> AnnotatedRecord {
    let mut record = AnnotatedRecord::new(record_id(seq, ordinal));
    for (feature_idx, feature) in seq.features.iter().enumerate() {
        match convert_feature(feature) {
            Some(converted) => record.push_feature(converted),
            None => warn!(
                "record {}: dropping {} feature #{} with unusable location {:?}",
                record.id(),
                feature.kind,
                feature_idx,
                feature.location
            ),
        }
    }
    record
}

/// VERSION, then ACCESSION, then LOCUS name.
fn record_id(seq: &Seq, ordinal: usize) -> String {
    [&seq.version, &seq.accession, &seq.name]
        .into_iter()
        .filter_map(|field| field.as_deref())
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(|v| v.split_whitespace().next().unwrap_or(v).to_string())
        .unwrap_or_else(|| format!("record_{ordinal}"))
}

fn convert_feature(feature: &Feature) -> Option<SeqFeature> {
    let mut parts = Vec::new();
    collect_parts(&feature.location, false, &mut parts)?;
    let location = Location::from_parts(parts).ok()?;
    let mut converted = SeqFeature::new(feature.kind.to_string(), location).ok()?;
    for (key, value) in &feature.qualifiers {
        let key = key.to_string();
        let value = unwrap_qualifier(&key, value.as_deref().unwrap_or(""));
        converted.add_qualifier(&key, &value);
    }
    Some(converted)
}

/// Joins the continuation lines of a wrapped qualifier value: with a single space,
/// or with nothing for `/translation`.
fn unwrap_qualifier(key: &str, value: &str) -> String {
    if !value.contains('\n') {
        return value.to_string();
    }
    let sep = if key == "translation" { "" } else { " " };
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Flattens a GenBank location into ordered intervals. Complemented parts are
/// listed in reverse, matching reading order on the minus strand.
fn collect_parts(
    location: &GbLocation,
    reverse: bool,
    out: &mut Vec<FeatureLocation>,
) -> Option<()> {
    let strand = Some(if reverse { -1 } else { 1 });
    match location {
        GbLocation::Range((a, _), (b, _)) | GbLocation::Between(a, b) => {
            let start = usize::try_from((*a).min(*b)).ok()?;
            let end = usize::try_from((*a).max(*b)).ok()?;
            out.push(FeatureLocation::new(start, end, strand).ok()?);
        }
        GbLocation::Complement(inner) => {
            let mut inner_parts = Vec::new();
            collect_parts(inner, !reverse, &mut inner_parts)?;
            inner_parts.reverse();
            out.extend(inner_parts);
        }
        GbLocation::Join(parts)
        | GbLocation::Order(parts)
        | GbLocation::Bond(parts)
        | GbLocation::OneOf(parts) => {
            for part in parts {
                collect_parts(part, reverse, out)?;
            }
        }
        GbLocation::External(_, inner) => {
            collect_parts(inner.as_deref()?, reverse, out)?;
        }
        GbLocation::Gap(_) => {}
    }
    Some(())
}
