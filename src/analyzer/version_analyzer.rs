use crate::config::MarkerConfig;
use crate::domain::{bump, BumpKind};
use crate::error::Result;
use crate::git::DiffRecord;

/// Classifies a diff into a bump kind and applies it to a version
pub struct VersionAnalyzer {
    markers: MarkerConfig,
}

impl VersionAnalyzer {
    /// Create a new version analyzer
    pub fn new(markers: MarkerConfig) -> Self {
        VersionAnalyzer { markers }
    }

    /// Decide how big the change in `diff` is.
    ///
    /// Markers are checked in severity order and the first hit wins: any line
    /// holding the major marker gives `Major`, otherwise any line holding the
    /// minor marker gives `Minor`, otherwise `Patch`.
    pub fn classify(&self, diff: &DiffRecord) -> BumpKind {
        let contains = |marker: &str| {
            !marker.is_empty() && diff.lines().iter().any(|line| line.contains(marker))
        };

        if contains(&self.markers.major) {
            BumpKind::Major
        } else if contains(&self.markers.minor) {
            BumpKind::Minor
        } else {
            BumpKind::Patch
        }
    }

    /// Classify `diff` and bump `version` accordingly
    pub fn next_version(&self, version: &str, diff: &DiffRecord) -> Result<(BumpKind, String)> {
        let kind = self.classify(diff);
        Ok((kind, bump(version, kind)?))
    }
}

impl Default for VersionAnalyzer {
    fn default() -> Self {
        VersionAnalyzer::new(MarkerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VtesError;

    fn diff(lines: &[&str]) -> DiffRecord {
        DiffRecord::new(lines.iter().map(|l| l.to_string()).collect())
    }

    #[test]
    fn test_classify_major() {
        let analyzer = VersionAnalyzer::default();
        let record = diff(&["M\tsrc/api.rs", "A\tdocs/BREAKING CHANGE.md"]);
        assert_eq!(analyzer.classify(&record), BumpKind::Major);
    }

    #[test]
    fn test_classify_major_wins_over_minor_on_same_line() {
        let analyzer = VersionAnalyzer::default();
        let record = diff(&["M\tfeat: BREAKING CHANGE notes.md"]);
        assert_eq!(analyzer.classify(&record), BumpKind::Major);
    }

    #[test]
    fn test_classify_major_wins_regardless_of_position() {
        let analyzer = VersionAnalyzer::default();
        let record = diff(&["A\tfeat: one", "A\tfeat: two", "M\tBREAKING CHANGE"]);
        assert_eq!(analyzer.classify(&record), BumpKind::Major);
    }

    #[test]
    fn test_classify_minor() {
        let analyzer = VersionAnalyzer::default();
        let record = diff(&["M\tREADME.md", "A\tnotes/feat: widget.md"]);
        assert_eq!(analyzer.classify(&record), BumpKind::Minor);
    }

    #[test]
    fn test_classify_patch() {
        let analyzer = VersionAnalyzer::default();
        let record = diff(&["M\tsrc/lib.rs", "D\tfeature.txt", "A\tbreaking-change.md"]);
        assert_eq!(analyzer.classify(&record), BumpKind::Patch);
    }

    #[test]
    fn test_classify_empty_is_patch() {
        let analyzer = VersionAnalyzer::default();
        assert_eq!(analyzer.classify(&DiffRecord::default()), BumpKind::Patch);
        assert_eq!(analyzer.classify(&diff(&[""])), BumpKind::Patch);
    }

    #[test]
    fn test_markers_are_case_sensitive() {
        let analyzer = VersionAnalyzer::default();
        assert_eq!(
            analyzer.classify(&diff(&["M\tbreaking change", "M\tFEAT:"])),
            BumpKind::Patch
        );
    }

    #[test]
    fn test_custom_markers() {
        let analyzer = VersionAnalyzer::new(MarkerConfig {
            major: "!major".to_string(),
            minor: "+minor".to_string(),
        });
        assert_eq!(analyzer.classify(&diff(&["M\t+minor"])), BumpKind::Minor);
        assert_eq!(analyzer.classify(&diff(&["M\tBREAKING CHANGE"])), BumpKind::Patch);
    }

    #[test]
    fn test_empty_marker_never_matches() {
        let analyzer = VersionAnalyzer::new(MarkerConfig {
            major: String::new(),
            minor: "feat:".to_string(),
        });
        assert_eq!(analyzer.classify(&diff(&["M\tfeat: x"])), BumpKind::Minor);
    }

    #[test]
    fn test_next_version() {
        let analyzer = VersionAnalyzer::default();
        let (kind, next) = analyzer
            .next_version("0.4.1", &diff(&["A\tfeat: add widget"]))
            .unwrap();
        assert_eq!(kind, BumpKind::Minor);
        assert_eq!(next, "0.5.0");
    }

    #[test]
    fn test_next_version_invalid_current() {
        let analyzer = VersionAnalyzer::default();
        assert!(matches!(
            analyzer.next_version("1.2", &DiffRecord::default()),
            Err(VtesError::InvalidVersion(_))
        ));
    }
}
