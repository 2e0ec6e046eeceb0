use crate::seq::feature::SeqFeature;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotatedRecord {
    pub id: Box<str>,
    pub features: Vec<SeqFeature>,
}

impl AnnotatedRecord {
    pub fn new(id: impl Into<Box<str>>) -> Self {
        Self {
            id: id.into(),
            features: Vec::new(),
        }
    }

    pub fn with_features(mut self, features: Vec<SeqFeature>) -> Self {
        self.features = features;
        self
    }

    pub fn push_feature(&mut self, feature: SeqFeature) {
        self.features.push(feature);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn features(&self) -> &[SeqFeature] {
        &self.features
    }
}
