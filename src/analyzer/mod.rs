//! Analysis engine for determining version bumps from diffs

pub mod version_analyzer;

pub use version_analyzer::VersionAnalyzer;
