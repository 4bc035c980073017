use std::fmt;

/// Individual taxpayer identifier, the unique key for a client
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaxId(String);

impl TaxId {
    pub fn new(value: &str) -> Self {
        return Self(value.trim().to_string());
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
