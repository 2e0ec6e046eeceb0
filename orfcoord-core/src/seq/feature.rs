use crate::error::{OrfError, OrfResult};
use std::collections::HashMap;

pub type Qualifiers = HashMap<Box<str>, Vec<Box<str>>>;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FeatureLocation {
    start: usize,
    end: usize,
    strand: Option<i8>,
}

impl FeatureLocation {
    pub fn new(start: usize, end: usize, strand: Option<i8>) -> OrfResult<Self> {
        if start > end {
            return Err(OrfError::InvalidLocation { start, end });
        }
        if let Some(strand) = strand {
            if strand != -1 && strand != 1 {
                return Err(OrfError::InvalidStrand { strand });
            }
        }
        Ok(Self { start, end, strand })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn strand(&self) -> Option<i8> {
        self.strand
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Where a feature sits on its record: one interval, or the ordered parts of a join.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    Simple(FeatureLocation),
    Compound(Vec<FeatureLocation>),
}

impl Location {
    /// Builds a location from its parts, collapsing a single part to `Simple`.
    pub fn from_parts(mut parts: Vec<FeatureLocation>) -> OrfResult<Self> {
        match parts.len() {
            0 => Err(OrfError::EmptyLocation),
            1 => Ok(Location::Simple(parts.remove(0))),
            _ => Ok(Location::Compound(parts)),
        }
    }

    pub fn parts(&self) -> &[FeatureLocation] {
        match self {
            Location::Simple(loc) => std::slice::from_ref(loc),
            Location::Compound(parts) => parts,
        }
    }

    /// Lowest start over all parts.
    pub fn start(&self) -> usize {
        self.parts().iter().map(FeatureLocation::start).min().unwrap_or(0)
    }

    /// Highest end over all parts.
    pub fn end(&self) -> usize {
        self.parts().iter().map(FeatureLocation::end).max().unwrap_or(0)
    }
}

impl From<FeatureLocation> for Location {
    fn from(loc: FeatureLocation) -> Self {
        Location::Simple(loc)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeqFeature {
    location: Location,
    feature_type: Box<str>,
    qualifiers: Qualifiers,
}

impl SeqFeature {
    pub fn new(
        feature_type: impl Into<Box<str>>,
        location: impl Into<Location>,
    ) -> OrfResult<Self> {
        let feature_type = feature_type.into();
        if feature_type.is_empty() {
            return Err(OrfError::InvalidFeatureType);
        }
        Ok(Self {
            location: location.into(),
            feature_type,
            qualifiers: Qualifiers::new(),
        })
    }

    pub fn with_qualifiers(mut self, qualifiers: Qualifiers) -> Self {
        self.qualifiers = qualifiers;
        self
    }

    pub fn with_qualifier(mut self, key: &str, value: &str) -> Self {
        self.add_qualifier(key, value);
        self
    }

    pub fn add_qualifier(&mut self, key: &str, value: &str) {
        self.qualifiers
            .entry(key.into())
            .or_default()
            .push(value.into());
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn feature_type(&self) -> &str {
        &self.feature_type
    }

    pub fn qualifiers(&self) -> &Qualifiers {
        &self.qualifiers
    }

    /// First value recorded under `key`, if any.
    pub fn qualifier(&self, key: &str) -> Option<&str> {
        self.qualifiers
            .get(key)
            .and_then(|values| values.first())
            .map(|v| v.as_ref())
    }
}
