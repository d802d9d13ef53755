use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 3166-1 alpha-2 code as used by the API, plus the two reserved codes
/// `XO` ("Other") and `XF` ("Fake") which do not name a real country.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    pub const OTHER: &'static str = "XO";
    pub const FAKE: &'static str = "XF";

    pub fn new(code: &str) -> Result<Self, InvalidCountryCode> {
        let valid = code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase());
        match valid {
            true => Ok(CountryCode(code.to_string())),
            false => Err(InvalidCountryCode(code.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_other(&self) -> bool {
        self.0 == Self::OTHER
    }

    pub fn is_fake(&self) -> bool {
        self.0 == Self::FAKE
    }

    /// False for the reserved `XO`/`XF` codes
    pub fn is_iso(&self) -> bool {
        !self.is_other() && !self.is_fake()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = InvalidCountryCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CountryCode::new(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("country code must be two uppercase ASCII letters, got {0:?}")]
pub struct InvalidCountryCode(pub String);

// https://docs.saltedge.com/account_information/v5/#countries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Country {
    pub code: CountryCode,
    pub name: String,
    #[serde(default)]
    pub refresh_start_time: Option<u32>,
}
