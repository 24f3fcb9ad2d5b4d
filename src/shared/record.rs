use std::fmt;

// One classified input line. Pairs borrow from the raw line, nothing is allocated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record<'a> {
    Blank,
    Comment,
    Pair(KeyValue<'a>),
    Malformed,
}

// Trimmed key and value of a `KEY=VALUE` line. The key is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyValue<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl<'a> Record<'a> {
    // Classify a raw line. Only a leading `#` marks a comment and only the first `=` splits.
    pub fn parse(raw: &'a str) -> Self {
        let line = raw.trim();
        if line.is_empty() {
            return Record::Blank;
        }
        if line.starts_with('#') {
            return Record::Comment;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Record::Malformed;
        };
        let key = key.trim();
        if key.is_empty() {
            return Record::Malformed;
        }

        Record::Pair(KeyValue {
            key,
            value: value.trim(),
        })
    }
}

// Renders `KEY='VALUE'`. Quotes inside the value are written as-is.
impl fmt::Display for KeyValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}='{}'", self.key, self.value)
    }
}
