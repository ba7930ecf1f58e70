//! Jobs in the older map-based format.
//!
//! The older tool keyed target sizes by length, so duplicate lengths could not
//! occur. Such jobs convert losslessly into a [`Job`].

use crate::job::{Job, Length, TargetSize};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use crate::error::{Error, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A job whose target sizes map length to quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LegacyJob {
    pub max_length: Length,
    pub cut_width: Length,
    pub target_sizes: BTreeMap<Length, i64>,
}

impl From<LegacyJob> for Job {
    fn from(legacy: LegacyJob) -> Self {
        // BTreeMap iterates ascending; keep the longest piece first.
        Job::new(legacy.max_length, legacy.cut_width).with_targets(
            legacy
                .target_sizes
                .into_iter()
                .rev()
                .map(|(length, quantity)| TargetSize::new(length, quantity)),
        )
    }
}

#[cfg(feature = "serde")]
impl Job {
    /// Parses a job from JSON.
    ///
    /// `target_sizes` may be a list of `{"length", "quantity"}` objects or an
    /// object mapping length to quantity.
    pub fn from_json(json: &str) -> Result<Job> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(invalid_json)?;
        Job::from_json_value(&value)
    }

    /// Reads a job from an already parsed JSON value.
    ///
    /// Fields other than the job's own are ignored.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Job> {
        match value.get("target_sizes") {
            Some(serde_json::Value::Object(_)) => LegacyJob::deserialize(value)
                .map(Job::from)
                .map_err(invalid_json),
            _ => Job::deserialize(value).map_err(invalid_json),
        }
    }
}

#[cfg(feature = "serde")]
fn invalid_json(e: serde_json::Error) -> Error {
    Error::Serialization(format!("Invalid JSON: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_conversion() {
        let legacy = LegacyJob {
            max_length: 100,
            cut_width: 2,
            target_sizes: BTreeMap::from([(20, 3), (50, 1)]),
        };
        let job: Job = legacy.into();

        assert_eq!(job, Job::new(100, 2).with_target(50, 1).with_target(20, 3));
        assert_eq!(job.target_sizes[0].length, 50);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_legacy_json_keys() {
        let json = r#"{"max_length": 100, "cut_width": 0, "target_sizes": {"30": 2, "40": 1}}"#;
        let legacy: LegacyJob = serde_json::from_str(json).unwrap();
        let job = Job::from(legacy);
        assert_eq!(job.expand(), vec![40, 30, 30]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_list() {
        let job = Job::from_json(
            r#"{"max_length": 100, "cut_width": 1, "target_sizes": [{"length": 40, "quantity": 2}]}"#,
        )
        .unwrap();
        assert_eq!(job, Job::new(100, 1).with_target(40, 2));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_map() {
        let job = Job::from_json(
            r#"{"max_length": 100, "cut_width": 0, "target_sizes": {"20": 1, "40": 2}}"#,
        )
        .unwrap();
        assert_eq!(job.expand(), vec![40, 40, 20]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_ignores_extra_fields() {
        let value = serde_json::json!({
            "version": "1.0",
            "max_length": 50,
            "cut_width": 0,
            "target_sizes": [{"length": 25, "quantity": 2}],
            "config": {"strategy": "ffd"}
        });
        let job = Job::from_json_value(&value).unwrap();
        assert_eq!(job, Job::new(50, 0).with_target(25, 2));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_errors() {
        let err = Job::from_json("{").unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("Invalid JSON"));

        assert!(matches!(
            Job::from_json(r#"{"max_length": 100}"#),
            Err(Error::Serialization(_))
        ));
        assert!(matches!(
            Job::from_json(r#"{"max_length": 100, "cut_width": 0, "target_sizes": {"x": 1}}"#),
            Err(Error::Serialization(_))
        ));
    }
}
