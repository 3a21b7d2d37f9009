//! Recorded reading source
//!
//! Replays readings from text, one per line as `level,scale,status`. The
//! status field is either a numeric code or a status word. Blank lines and
//! `#` comments are skipped.

use crate::domain::{ChargeStatus, RawBatteryReading};
use crate::error::SourceError;
use crate::source::traits::BatterySource;

use std::collections::VecDeque;
use std::path::Path;
use std::str::FromStr;

/// Source that yields a fixed sequence of readings, then `Exhausted`
#[derive(Debug, Clone)]
pub struct ReplaySource {
    name: String,
    readings: VecDeque<RawBatteryReading>,
}

impl ReplaySource {
    /// Build a source from already-parsed readings
    pub fn new(name: impl Into<String>, readings: Vec<RawBatteryReading>) -> Self {
        Self {
            name: name.into(),
            readings: readings.into(),
        }
    }

    /// Load recorded readings from a file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SourceError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let mut source: Self = content.parse()?;
        source.name = path.display().to_string();
        Ok(source)
    }

    /// Number of readings left
    pub fn remaining(&self) -> usize {
        self.readings.len()
    }
}

impl FromStr for ReplaySource {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let readings = s
            .lines()
            .enumerate()
            .filter(|(_, line)| {
                let line = line.trim();
                !line.is_empty() && !line.starts_with('#')
            })
            .map(|(idx, line)| parse_line(line).map_err(|msg| {
                SourceError::Parse(format!("line {}: {}", idx + 1, msg))
            }))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new("replay", readings))
    }
}

fn parse_line(line: &str) -> Result<RawBatteryReading, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [level, scale, status] = fields.as_slice() else {
        return Err(format!(
            "expected 'level,scale,status', got {} field(s)",
            fields.len()
        ));
    };

    let level = level
        .parse::<i64>()
        .map_err(|_| format!("invalid level '{}'", level))?;
    let scale = scale
        .parse::<i64>()
        .map_err(|_| format!("invalid scale '{}'", scale))?;
    let status = status
        .parse::<ChargeStatus>()
        .map_err(|e| e.to_string())?;

    Ok(RawBatteryReading::new(level, scale, status))
}

impl BatterySource for ReplaySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&mut self) -> Result<RawBatteryReading, SourceError> {
        self.readings.pop_front().ok_or(SourceError::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Reading;
    use std::io::Write;

    #[test]
    fn test_parse_codes_and_words() {
        let mut source: ReplaySource = "\
# level,scale,status
79,100,2

80,100,Charging
  85 , 100 , 3
"
        .parse()
        .unwrap();

        assert_eq!(source.remaining(), 3);
        assert_eq!(
            source.read().unwrap(),
            RawBatteryReading::new(79, 100, ChargeStatus::Charging)
        );
        assert_eq!(source.read().unwrap().level, 80);
        assert_eq!(source.read().unwrap().status, ChargeStatus::Discharging);
        assert!(matches!(source.read(), Err(SourceError::Exhausted)));
    }

    #[test]
    fn test_parse_reports_line_number() {
        let result = "80,100,2\n80,100\n".parse::<ReplaySource>();
        match result {
            Err(SourceError::Parse(msg)) => assert!(msg.starts_with("line 2:"), "{}", msg),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_bad_fields() {
        assert!("x,100,2".parse::<ReplaySource>().is_err());
        assert!("80,y,2".parse::<ReplaySource>().is_err());
        assert!("80,100,9".parse::<ReplaySource>().is_err());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "160,200,Full").unwrap();

        let mut source = ReplaySource::from_path(file.path()).unwrap();
        assert_eq!(source.name(), file.path().display().to_string());
        match source.next_reading().unwrap() {
            Reading::Sample { raw, sample } => {
                assert_eq!(raw.status, ChargeStatus::Full);
                assert_eq!(sample.percent(), 80);
                assert!(!sample.is_charging());
            }
            other => panic!("expected a sample, got {:?}", other),
        }
        assert_eq!(source.next_reading().unwrap(), Reading::Exhausted);
    }

    #[test]
    fn test_from_missing_path() {
        let result = ReplaySource::from_path("/nonexistent/readings.csv");
        assert!(matches!(result, Err(SourceError::Read { .. })));
    }
}
