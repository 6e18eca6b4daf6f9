use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;

use crate::error::Result;
use crate::network::NetworkConfig;

/// The measurements taken after one epoch of training.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochRecord {
    pub epoch: usize,
    pub training_loss: f64,
    pub testing_loss: f64,
    pub validity: f64,
}

/// Stores training metrics over time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsTracker {
    records: Vec<EpochRecord>,
}

impl MetricsTracker {
    pub fn new() -> Self {
        MetricsTracker {
            records: Vec::new(),
        }
    }

    /// Record the results of one epoch.
    pub fn record(&mut self, epoch: usize, training_loss: f64, testing_loss: f64, validity: f64) {
        self.records.push(EpochRecord {
            epoch,
            training_loss,
            testing_loss,
            validity,
        });
    }

    pub fn records(&self) -> &[EpochRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&EpochRecord> {
        self.records.last()
    }

    /// Best validity seen so far.
    pub fn best_validity(&self) -> f64 {
        self.records.iter().map(|r| r.validity).fold(0.0, f64::max)
    }

    /// Write all records to a CSV file, headed by a comment line with the
    /// JSON-encoded network configuration.
    ///
    /// The layout is one row per epoch:
    /// `epoch,training_loss,testing_loss,validity`.
    pub fn export_csv(&self, path: &str, config: &NetworkConfig) -> Result<()> {
        let header = serde_json::to_string(config)
            .map_err(|err| crate::error::SynapseError::SerializationError(err.to_string()))?;

        let mut file = fs::File::create(path)?;
        writeln!(file, "# {}", header)?;
        writeln!(file, "epoch,training_loss,testing_loss,validity")?;
        for record in &self.records {
            writeln!(
                file,
                "{},{},{},{}",
                record.epoch, record.training_loss, record.testing_loss, record.validity
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> NetworkConfig {
        NetworkConfig {
            learning_rate: 0.01,
            batch_size: 4,
            number_of_layers: 3,
            input_size: 2,
            output_size: 1,
        }
    }

    #[test]
    fn test_record_and_summaries() {
        let mut tracker = MetricsTracker::new();
        assert!(tracker.last().is_none());
        assert_eq!(tracker.best_validity(), 0.0);

        tracker.record(1, 0.9, 1.0, 0.4);
        tracker.record(2, 0.5, 0.6, 0.8);
        tracker.record(3, 0.4, 0.5, 0.7);

        assert_eq!(tracker.records().len(), 3);
        assert_eq!(tracker.last().unwrap().epoch, 3);
        assert_eq!(tracker.best_validity(), 0.8);
    }

    #[test]
    fn test_export_csv_writes_config_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.csv");
        let path = path.to_str().unwrap();

        let mut tracker = MetricsTracker::new();
        tracker.record(1, 0.9, 1.0, 0.4);
        tracker.record(2, 0.5, 0.6, 0.8);
        tracker.export_csv(path, &config()).unwrap();

        let contents = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("# {"));
        assert!(lines[0].contains("\"batch_size\":4"));
        assert_eq!(lines[1], "epoch,training_loss,testing_loss,validity");
        assert_eq!(lines[2], "1,0.9,1,0.4");
    }
}
