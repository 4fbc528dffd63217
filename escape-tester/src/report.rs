use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

/// Outcome of one CLI command, rendered as console text or JSON.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub command: String,
    pub passed: bool,
    pub summary: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    pub data: Value,
}

impl ProbeReport {
    pub fn pass(command: &str, summary: impl Into<String>, data: Value) -> Self {
        Self {
            command: command.to_string(),
            passed: true,
            summary: summary.into(),
            details: Vec::new(),
            data,
        }
    }

    pub fn fail(command: &str, summary: impl Into<String>, data: Value) -> Self {
        Self {
            passed: false,
            ..Self::pass(command, summary, data)
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }
}

pub fn generate_console_report(out: &mut dyn Write, report: &ProbeReport) -> Result<()> {
    let status = if report.passed {
        "✅ PASS".green()
    } else {
        "❌ FAIL".red()
    };
    writeln!(out, "{} {}", status, report.command.bold())?;
    writeln!(out, "   {}", report.summary)?;
    for line in &report.details {
        writeln!(out, "     • {line}")?;
    }
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, report: &ProbeReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
