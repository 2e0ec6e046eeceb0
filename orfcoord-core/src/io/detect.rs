/// Field-delimiter detection for the annotation map.
///
/// Rules (deterministic):
/// - Header contains a tab and no comma → Tab
/// - Otherwise → Comma (the safe default)

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
        }
    }
}

/// Detect the delimiter from the first line of `bytes`.
pub fn detect_delimiter(bytes: &[u8]) -> Delimiter {
    let header = bytes.split(|&b| b == b'\n').next().unwrap_or_default();
    let has_tab = header.contains(&b'\t');
    let has_comma = header.contains(&b',');

    if has_tab && !has_comma {
        Delimiter::Tab
    } else {
        Delimiter::Comma
    }
}
