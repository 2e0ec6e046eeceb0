use crate::orf::{Coords, FinalOrf, OrfCode, OrfMap, Report};
use crate::seq::{AnnotatedRecord, FeatureLocation, SeqFeature};
use log::{debug, warn};
use std::fmt;
use vector_map::VecMap;

/// Progress through the two halves of a record's polymerase gene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PolymeraseState {
    /// Neither half assigned yet.
    #[default]
    AwaitingA,
    /// 1a came from a `1ab_orf` feature; the next one is 1b.
    AwaitingB,
    /// Both halves assigned.
    Saturated,
}

/// ORF coordinates collected for one record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordOrfs {
    slots: [Option<Coords>; 3],
    polymerase: PolymeraseState,
}

impl RecordOrfs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, orf: FinalOrf) -> Option<Coords> {
        self.slots[orf.index()]
    }

    pub fn polymerase(&self) -> PolymeraseState {
        self.polymerase
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Fills an empty slot. Returns false and leaves the slot alone if it is already set.
    pub fn set_once(&mut self, orf: FinalOrf, coords: Coords) -> bool {
        let slot = &mut self.slots[orf.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(coords);
        true
    }

    fn set_polymerase_half(&mut self, orf: FinalOrf, coords: Coords) {
        self.slots[orf.index()] = Some(coords);
    }
}

/// Record id to collected ORFs, in the order records were first seen.
#[derive(Clone, Debug)]
pub struct OrfTable {
    records: VecMap<String, RecordOrfs>,
}

impl OrfTable {
    pub fn new() -> Self {
        Self {
            records: VecMap::new(),
        }
    }

    /// Stores a record's ORFs. A repeated id replaces the old entry in place and returns it.
    pub fn insert(&mut self, id: &str, orfs: RecordOrfs) -> Option<RecordOrfs> {
        self.records.insert(id.to_string(), orfs)
    }

    pub fn get(&self, id: &str) -> Option<&RecordOrfs> {
        self.iter().find(|(k, _)| *k == id).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RecordOrfs)> + '_ {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.len() == 0
    }
}

impl Default for OrfTable {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnomalyKind {
    NegativeFrameOffset { offset: i64 },
    InvalidCodonStart { raw: Box<str> },
    MissingLabel,
    MalformedSplice { parts: usize },
    ExtraPolymeraseOrf,
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnomalyKind::NegativeFrameOffset { offset } => {
                write!(f, "negative frame offset {offset}")
            }
            AnomalyKind::InvalidCodonStart { raw } => {
                write!(f, "codon_start {raw:?} is not an integer; using frame offset 0")
            }
            AnomalyKind::MissingLabel => f.write_str("CDS has neither product nor note qualifier"),
            AnomalyKind::MalformedSplice { parts } => {
                write!(f, "joined 1ab feature has {parts} part(s), expected 2")
            }
            AnomalyKind::ExtraPolymeraseOrf => {
                f.write_str("polymerase already complete; extra 1ab_orf feature ignored")
            }
        }
    }
}

/// Feature-level data problem that was skipped or tolerated during extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Anomaly {
    pub record_id: Box<str>,
    /// Position of the feature within the record's feature list.
    pub feature_index: usize,
    pub kind: AnomalyKind,
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "record {}, feature #{}: {}",
            self.record_id, self.feature_index, self.kind
        )
    }
}

pub fn extract_orfs(records: &[AnnotatedRecord], map: &OrfMap) -> Report<OrfTable> {
    let mut table = OrfTable::new();
    let mut anomalies = Vec::new();
    for record in records {
        debug!("{}", record.id());
        let orfs = extract_record(record, map, &mut anomalies);
        if orfs.is_empty() {
            debug!("{}: no ORFs found", record.id());
        }
        if table.insert(record.id(), orfs).is_some() {
            warn!(
                "record id {} appears more than once; keeping the last occurrence",
                record.id()
            );
        }
    }
    Report {
        data: table,
        anomalies,
    }
}

/// Walks the CDS features of one record, appending any anomalies to `anomalies`.
pub fn extract_record(
    record: &AnnotatedRecord,
    map: &OrfMap,
    anomalies: &mut Vec<Anomaly>,
) -> RecordOrfs {
    let mut orfs = RecordOrfs::new();
    for (index, feature) in record.features().iter().enumerate() {
        if feature.feature_type() != "CDS" {
            continue;
        }
        let mut report = |kind: AnomalyKind| {
            let anomaly = Anomaly {
                record_id: record.id().into(),
                feature_index: index,
                kind,
            };
            warn!("{anomaly}");
            anomalies.push(anomaly);
        };

        let offset = match frame_offset(feature) {
            Ok(offset) => offset,
            Err(kind) => {
                report(kind);
                0
            }
        };
        if offset < 0 {
            report(AnomalyKind::NegativeFrameOffset { offset });
        }

        let Some(label) = feature
            .qualifier("product")
            .or_else(|| feature.qualifier("note"))
        else {
            report(AnomalyKind::MissingLabel);
            continue;
        };

        let location = feature.location();
        let span = Coords::new(location.start() as i64 + offset, location.end() as i64);
        let code = map.resolve(label);
        if let Some(code) = code {
            debug!("{}: feature #{index} {label:?} -> {code}", record.id());
        }
        match code {
            Some(OrfCode::Orf1a) => {
                orfs.set_once(FinalOrf::Orf1a, span);
            }
            Some(OrfCode::Orf1b) => {
                orfs.set_once(FinalOrf::Orf1b, span);
            }
            Some(OrfCode::Orf2) => {
                orfs.set_once(FinalOrf::Orf2, span);
            }
            Some(OrfCode::Orf1ab) => match orfs.polymerase {
                PolymeraseState::AwaitingA => match location.parts() {
                    [first, second] => {
                        orfs.set_polymerase_half(FinalOrf::Orf1a, shifted(first, offset));
                        orfs.set_polymerase_half(FinalOrf::Orf1b, shifted(second, offset));
                        orfs.polymerase = PolymeraseState::Saturated;
                    }
                    parts => report(AnomalyKind::MalformedSplice { parts: parts.len() }),
                },
                PolymeraseState::AwaitingB | PolymeraseState::Saturated => {}
            },
            Some(OrfCode::Orf1abHalf) => match orfs.polymerase {
                PolymeraseState::AwaitingA => {
                    orfs.set_polymerase_half(FinalOrf::Orf1a, span);
                    orfs.polymerase = PolymeraseState::AwaitingB;
                }
                PolymeraseState::AwaitingB => {
                    orfs.set_polymerase_half(FinalOrf::Orf1b, span);
                    orfs.polymerase = PolymeraseState::Saturated;
                }
                PolymeraseState::Saturated => report(AnomalyKind::ExtraPolymeraseOrf),
            },
            None => {}
        }
    }
    orfs
}

/// Zero-based frame offset from the 1-based `codon_start` qualifier; 0 when absent.
fn frame_offset(feature: &SeqFeature) -> Result<i64, AnomalyKind> {
    match feature.qualifier("codon_start") {
        None => Ok(0),
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .map(|frame| frame - 1)
            .map_err(|_| AnomalyKind::InvalidCodonStart { raw: raw.into() }),
    }
}

fn shifted(part: &FeatureLocation, offset: i64) -> Coords {
    Coords::new(part.start() as i64 + offset, part.end() as i64)
}
