use crate::orf::OrfCode;
use std::collections::HashMap;

/// Lookup from raw annotation labels (`product`/`note` text) to canonical ORF codes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrfMap {
    codes: HashMap<Box<str>, Box<str>>,
}

impl OrfMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a mapping, returning the code it replaced.
    pub fn insert(
        &mut self,
        label: impl Into<Box<str>>,
        code: impl Into<Box<str>>,
    ) -> Option<Box<str>> {
        self.codes.insert(label.into(), code.into())
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.codes.get(label).map(|c| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Exact-match lookup; labels without an entry come back unchanged.
    pub fn classify<'a>(&'a self, label: &'a str) -> &'a str {
        self.get(label).unwrap_or(label)
    }

    pub fn resolve(&self, label: &str) -> Option<OrfCode> {
        OrfCode::from_label(self.classify(label))
    }
}

impl<K, V> FromIterator<(K, V)> for OrfMap
where
    K: Into<Box<str>>,
    V: Into<Box<str>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrfMap::new();
        for (label, code) in iter {
            map.insert(label, code);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sars_map() -> OrfMap {
        [
            ("ORF1ab polyprotein", "1ab"),
            ("ORF1a polyprotein", "1a"),
            ("surface glycoprotein", "2"),
            ("pp1ab", "1ab_orf"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn classify_mapped_label() {
        let map = sars_map();
        assert_eq!(map.classify("ORF1ab polyprotein"), "1ab");
        assert_eq!(map.resolve("pp1ab"), Some(OrfCode::Orf1abHalf));
    }

    #[test]
    fn classify_is_exact_match() {
        let map = sars_map();
        assert_eq!(map.classify("orf1ab polyprotein"), "orf1ab polyprotein");
        assert_eq!(map.classify("ORF1ab polyprotein "), "ORF1ab polyprotein ");
        assert_eq!(map.resolve("ORF1ab"), None);
    }

    #[test]
    fn unmapped_code_label_passes_through() {
        let map = sars_map();
        assert_eq!(map.resolve("1b"), Some(OrfCode::Orf1b));
        assert_eq!(map.resolve("nucleocapsid"), None);
    }

    #[test]
    fn later_insert_wins() {
        let mut map = sars_map();
        let old = map.insert("pp1ab", "1ab");
        assert_eq!(old.as_deref(), Some("1ab_orf"));
        assert_eq!(map.classify("pp1ab"), "1ab");
        assert_eq!(map.len(), 4);
        assert!(!map.is_empty());
        assert!(OrfMap::new().is_empty());
    }
}
