//! Review record written to the output file

use serde::{Deserialize, Serialize};

/// One row of the exported CSV: a 1-based serial number and the review text.
///
/// The serde renames drive the CSV header row, so the exported file carries
/// `Serial No.` and `Review` as column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    #[serde(rename = "Serial No.")]
    pub serial_no: u32,
    #[serde(rename = "Review")]
    pub review: String,
}

impl ReviewRecord {
    /// Create a record from a 1-based serial number and review text.
    pub fn new(serial_no: u32, review: impl Into<String>) -> Self {
        Self {
            serial_no,
            review: review.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_construction() {
        let record = ReviewRecord::new(1, "Helped with anxiety");
        assert_eq!(record.serial_no, 1);
        assert_eq!(record.review, "Helped with anxiety");
    }
}
