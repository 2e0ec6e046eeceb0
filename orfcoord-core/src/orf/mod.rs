pub mod extract;
pub mod map;


use std::fmt;

pub use extract::{
    extract_orfs, extract_record, Anomaly, AnomalyKind, OrfTable, PolymeraseState, RecordOrfs,
};
pub use map::OrfMap;

/// The closed set of canonical ORF codes an annotation label can resolve to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrfCode {
    Orf1a,
    Orf1b,
    /// Polymerase annotated as one joined feature spanning both halves.
    Orf1ab,
    /// One half of a polymerase annotated as two separate features.
    Orf1abHalf,
    Orf2,
}

impl OrfCode {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "1a" => Some(OrfCode::Orf1a),
            "1b" => Some(OrfCode::Orf1b),
            "1ab" => Some(OrfCode::Orf1ab),
            "1ab_orf" => Some(OrfCode::Orf1abHalf),
            "2" => Some(OrfCode::Orf2),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrfCode::Orf1a => "1a",
            OrfCode::Orf1b => "1b",
            OrfCode::Orf1ab => "1ab",
            OrfCode::Orf1abHalf => "1ab_orf",
            OrfCode::Orf2 => "2",
        }
    }
}

impl fmt::Display for OrfCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ORFs that appear as output columns, in column order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FinalOrf {
    Orf1a,
    Orf1b,
    Orf2,
}

impl FinalOrf {
    pub const ALL: [FinalOrf; 3] = [FinalOrf::Orf1a, FinalOrf::Orf1b, FinalOrf::Orf2];

    pub fn index(self) -> usize {
        match self {
            FinalOrf::Orf1a => 0,
            FinalOrf::Orf1b => 1,
            FinalOrf::Orf2 => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FinalOrf::Orf1a => "1a",
            FinalOrf::Orf1b => "1b",
            FinalOrf::Orf2 => "2",
        }
    }
}

impl fmt::Display for FinalOrf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half-open coordinates of an ORF; `start` already includes the frame offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coords {
    pub start: i64,
    pub end: i64,
}

impl Coords {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Output of a pass that tolerates bad feature data: the result plus what was skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report<T> {
    pub data: T,
    pub anomalies: Vec<Anomaly>,
}
