use crate::domain::BumpKind;
use crate::error::{Result, VtesError};
use regex::Regex;
use std::fmt;

/// A plain `major.minor.patch` version.
///
/// Pre-release and build metadata are rejected at parse time, so the wrapped
/// `semver::Version` never carries either.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version(semver::Version);

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version(semver::Version::new(major, minor, patch))
    }

    /// Parse exactly three dot-separated non-negative integers.
    pub fn parse(text: &str) -> Result<Self> {
        let re = Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)$")
            .map_err(|e| VtesError::invalid_version(e.to_string()))?;

        let captures = re.captures(text).ok_or_else(|| {
            VtesError::invalid_version(format!("'{}' - expected MAJOR.MINOR.PATCH", text))
        })?;

        let component = |index: usize| -> Result<u64> {
            captures[index].parse::<u64>().map_err(|_| {
                VtesError::invalid_version(format!(
                    "'{}' - component '{}' out of range",
                    text, &captures[index]
                ))
            })
        };

        Ok(Version::new(component(1)?, component(2)?, component(3)?))
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    /// Increment one component and zero every lower one.
    ///
    /// Fails if the incremented component is already `u64::MAX`.
    pub fn bump(&self, kind: BumpKind) -> Result<Self> {
        let next = |component: u64| {
            component.checked_add(1).ok_or_else(|| {
                VtesError::invalid_version(format!("'{}' - {} component overflow", self, kind))
            })
        };

        Ok(match kind {
            BumpKind::Major => Version::new(next(self.major())?, 0, 0),
            BumpKind::Minor => Version::new(self.major(), next(self.minor())?, 0),
            BumpKind::Patch => Version::new(self.major(), self.minor(), next(self.patch())?),
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Compute the next version string for `version` under `kind`.
pub fn bump(version: &str, kind: BumpKind) -> Result<String> {
    Ok(Version::parse(version)?.bump(kind)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v.major(), 1);
        assert_eq!(v.minor(), 2);
        assert_eq!(v.patch(), 3);
    }

    #[test]
    fn test_version_parse_leading_zeros_are_numeric() {
        assert_eq!(Version::parse("01.002.3").unwrap(), Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_invalid() {
        for input in ["1.2", "1.2.x", "1.2.3.4", "v1.2.3", "1.2.3-beta.1", "", " 1.2.3", "1..3"] {
            let err = Version::parse(input).unwrap_err();
            assert!(
                matches!(err, VtesError::InvalidVersion(_)),
                "expected InvalidVersion for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_version_parse_overflow() {
        assert!(matches!(
            Version::parse("99999999999999999999.0.0"),
            Err(VtesError::InvalidVersion(_))
        ));
    }

    #[test]
    fn test_bump_max_component_is_error() {
        let max = u64::MAX;
        for (input, kind) in [
            (format!("{}.0.0", max), BumpKind::Major),
            (format!("1.{}.0", max), BumpKind::Minor),
            (format!("1.2.{}", max), BumpKind::Patch),
        ] {
            let err = bump(&input, kind).unwrap_err();
            assert!(
                matches!(err, VtesError::InvalidVersion(ref msg) if msg.contains("overflow")),
                "expected overflow for {} {}",
                input,
                kind
            );
        }
    }

    #[test]
    fn test_bump_max_lower_component_is_reset() {
        let input = format!("1.2.{}", u64::MAX);
        assert_eq!(bump(&input, BumpKind::Minor).unwrap(), "1.3.0");
    }

    #[test]
    fn test_bump_semantics() {
        assert_eq!(bump("1.2.3", BumpKind::Major).unwrap(), "2.0.0");
        assert_eq!(bump("1.2.3", BumpKind::Minor).unwrap(), "1.3.0");
        assert_eq!(bump("1.2.3", BumpKind::Patch).unwrap(), "1.2.4");
    }

    #[test]
    fn test_bump_from_zero() {
        assert_eq!(bump("0.0.0", BumpKind::Patch).unwrap(), "0.0.1");
        assert_eq!(bump("0.4.1", BumpKind::Minor).unwrap(), "0.5.0");
        assert_eq!(bump("0.9.9", BumpKind::Major).unwrap(), "1.0.0");
    }

    #[test]
    fn test_bump_rejects_invalid_input() {
        assert!(matches!(
            bump("1.2", BumpKind::Patch),
            Err(VtesError::InvalidVersion(_))
        ));
        assert!(matches!(
            bump("1.2.x", BumpKind::Major),
            Err(VtesError::InvalidVersion(_))
        ));
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
    }
}
