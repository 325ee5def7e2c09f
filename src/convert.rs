//! Byte ⇄ text conversion for the numeric channel editors.

/// Converts a channel byte to editor text and back.
///
/// Parsing never fails: text that is not an integer in 0–255 yields
/// [`ByteText::default_value`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteText {
    pub default_value: u8,
}

impl ByteText {
    pub fn new(default_value: u8) -> Self {
        Self { default_value }
    }

    pub fn format(&self, value: Option<u8>) -> String {
        value.unwrap_or(self.default_value).to_string()
    }

    pub fn parse(&self, text: &str) -> u8 {
        text.trim().parse::<u8>().unwrap_or(self.default_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_value_or_default() {
        let conv = ByteText::new(7);
        assert_eq!(conv.format(Some(255)), "255");
        assert_eq!(conv.format(None), "7");
    }

    #[test]
    fn parses_bytes() {
        let conv = ByteText::default();
        assert_eq!(conv.parse("0"), 0);
        assert_eq!(conv.parse(" 128 "), 128);
        assert_eq!(conv.parse("+12"), 12);
    }

    #[test]
    fn falls_back_to_default() {
        let conv = ByteText::new(42);
        assert_eq!(conv.parse(""), 42);
        assert_eq!(conv.parse("256"), 42);
        assert_eq!(conv.parse("-1"), 42);
        assert_eq!(conv.parse("1.5"), 42);
        assert_eq!(conv.parse("ff"), 42);
    }
}
