//! Report generation with multiple output formats
//!
//! CDD Principle: Anti-Corruption Layer - Formatters translate a roster run to external formats
//! - Human output is the plain console routine, line for line
//! - JSON output exposes the same records for programmatic consumption

use crate::domain::errors::{RosterError, RosterResult};
use crate::roster::{FeedingRecord, Roster};
use std::io::Write;

/// Supported output formats for roster reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain console routine
    Human,
    /// JSON format for programmatic consumption
    Json,
}

impl OutputFormat {
    /// Parse format from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "human" => Some(Self::Human),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Get all available format names
    pub fn all_formats() -> &'static [&'static str] {
        &["human", "json"]
    }
}

/// Formats a roster run for output
#[derive(Debug, Default)]
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Format a roster run in the specified format
    pub fn format_roster(&self, roster: &Roster, format: OutputFormat) -> RosterResult<String> {
        match format {
            OutputFormat::Human => self.format_human(roster),
            OutputFormat::Json => self.format_json(&roster.feeding_log()),
        }
    }

    /// Write a formatted roster run to a writer
    pub fn write_roster<W: Write>(
        &self,
        roster: &Roster,
        format: OutputFormat,
        mut writer: W,
    ) -> RosterResult<()> {
        match format {
            // Streams straight through the driver
            OutputFormat::Human => roster.run(writer),
            OutputFormat::Json => {
                let formatted = self.format_roster(roster, format)?;
                writeln!(writer, "{formatted}")?;
                writer.flush()?;
                Ok(())
            }
        }
    }

    fn format_human(&self, roster: &Roster) -> RosterResult<String> {
        let mut buffer = Vec::new();
        roster.run(&mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| RosterError::serialization(format!("Output was not UTF-8: {e}")))
    }

    fn format_json(&self, records: &[FeedingRecord]) -> RosterResult<String> {
        let json_report = serde_json::json!({
            "pets": records,
            "total": records.len(),
        });

        serde_json::to_string_pretty(&json_report)
            .map_err(|e| RosterError::serialization(format!("JSON serialization failed: {e}")))
    }
}
