//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::alerts::AlertEvent;
use crate::cli::args::OutputFormat;
use crate::domain::{ChargeStatus, PowerSample, RawBatteryReading};
use crate::services::WatchSummary;
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(handle, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(handle, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(handle, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Battery status display
#[derive(Debug, Clone, Serialize)]
pub struct BatteryStatus {
    pub battery: String,
    pub percent: u8,
    pub charging: bool,
    pub status: ChargeStatus,
    pub headline: String,
}

impl BatteryStatus {
    /// Build from a raw reading and its normalized sample
    pub fn new(
        battery: impl Into<String>,
        raw: &RawBatteryReading,
        sample: &PowerSample,
        headline: &str,
    ) -> Self {
        Self {
            battery: battery.into(),
            percent: sample.percent(),
            charging: sample.is_charging(),
            status: raw.status,
            headline: headline.to_string(),
        }
    }
}

impl TableDisplay for BatteryStatus {
    fn to_table(&self) -> String {
        format!(
            "[{}] {}%\n  Status: {}\n  {}",
            self.battery, self.percent, self.status, self.headline
        )
    }

    fn to_compact(&self) -> String {
        format!("{}:{}%:{}", self.battery, self.percent, self.status)
    }
}

/// Battery list for display
#[derive(Debug, Clone, Serialize)]
pub struct BatteryList {
    pub root: String,
    pub batteries: Vec<String>,
}

impl TableDisplay for BatteryList {
    fn to_table(&self) -> String {
        let mut output = format!("Power Supply Root: {}\n", self.root);
        output.push_str(&format!("Batteries Found: {}\n", self.batteries.len()));

        for name in &self.batteries {
            output.push_str(&format!("  {}\n", name));
        }

        output
    }

    fn to_compact(&self) -> String {
        self.batteries.join(", ")
    }
}

/// Replay result for display
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub source: String,
    pub summary: WatchSummary,
    pub alerts: Vec<ReplayAlert>,
}

/// One alert raised during a replay
#[derive(Debug, Clone, Serialize)]
pub struct ReplayAlert {
    /// 1-based index of the reading that triggered the alert
    pub reading: u64,
    pub percent: u8,
}

impl ReplayAlert {
    pub fn new(reading: u64, event: &AlertEvent) -> Self {
        Self {
            reading,
            percent: event.percent,
        }
    }
}

impl TableDisplay for ReplayReport {
    fn to_table(&self) -> String {
        let mut output = format!("Replay: {}\n", self.source);
        output.push_str(&format!(
            "  Samples: {}, Dropped: {}, Alerts: {}\n",
            self.summary.samples, self.summary.dropped, self.summary.alerts
        ));

        for alert in &self.alerts {
            output.push_str(&format!(
                "  Reading {}: alert at {}%\n",
                alert.reading, alert.percent
            ));
        }

        output
    }

    fn to_compact(&self) -> String {
        let percents: Vec<String> = self
            .alerts
            .iter()
            .map(|a| format!("{}%", a.percent))
            .collect();
        format!("alerts={} [{}]", self.summary.alerts, percents.join(","))
    }
}

/// Simple success/failure message
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub message: String,
    pub success: bool,
}

impl TableDisplay for Message {
    fn to_table(&self) -> String {
        if self.success {
            format!("✓ {}", self.message)
        } else {
            format!("✗ {}", self.message)
        }
    }
}
