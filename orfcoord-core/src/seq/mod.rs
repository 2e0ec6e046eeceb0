pub mod feature;
pub mod record;

pub use feature::{FeatureLocation, Location, Qualifiers, SeqFeature};
pub use record::AnnotatedRecord;
