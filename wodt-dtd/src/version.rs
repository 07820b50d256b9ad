//! Digital twin version (`major.minor.patch`)

use crate::error::{DtdError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Version of a digital twin instance
///
/// Components are non-negative by construction; `0.0.0` is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DtVersion {
    major: u32,
    minor: u32,
    patch: u32,
}

impl DtVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Result<Self> {
        if major == 0 && minor == 0 && patch == 0 {
            return Err(DtdError::invalid_version(
                "major/minor/patch must not be all zero",
            ));
        }
        Ok(Self {
            major,
            minor,
            patch,
        })
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }
}

impl fmt::Display for DtVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for DtVersion {
    type Err = DtdError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split('.').collect();
        let [major, minor, patch] = parts.as_slice() else {
            return Err(DtdError::invalid_version(format!(
                "expected major.minor.patch, got '{s}'"
            )));
        };
        let parse = |part: &str| {
            part.parse::<u32>().map_err(|e| {
                DtdError::invalid_version(format!("'{part}' in '{s}' is not a non-negative number: {e}"))
            })
        };
        Self::new(parse(*major)?, parse(*minor)?, parse(*patch)?)
    }
}

impl TryFrom<String> for DtVersion {
    type Error = DtdError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<DtVersion> for String {
    fn from(version: DtVersion) -> Self {
        version.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(DtVersion::new(1, 2, 3).unwrap().to_string(), "1.2.3");
    }

    #[test]
    fn test_zero_version_rejected() {
        assert!(DtVersion::new(0, 0, 0).is_err());
        assert!(DtVersion::new(0, 0, 1).is_ok());
    }

    #[test]
    fn test_parse() {
        let version: DtVersion = "1.0.0".parse().unwrap();
        assert_eq!(version, DtVersion::new(1, 0, 0).unwrap());

        assert!("-1.0.0".parse::<DtVersion>().is_err());
        assert!("0.0.0".parse::<DtVersion>().is_err());
        assert!("1.0".parse::<DtVersion>().is_err());
        assert!("1.x.0".parse::<DtVersion>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let version = DtVersion::new(2, 1, 0).unwrap();
        assert_eq!(serde_json::to_string(&version).unwrap(), "\"2.1.0\"");
        let back: DtVersion = serde_json::from_str("\"2.1.0\"").unwrap();
        assert_eq!(back, version);
        assert!(serde_json::from_str::<DtVersion>("\"0.0.0\"").is_err());
    }
}
