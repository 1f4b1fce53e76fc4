//! Picks which alert CSV is authoritative for a wall-clock time.
//!
//! The alert feed is published at 05:00, 14:00 and 17:00 local time. A given
//! hour reads the most recently published file, never the next one.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

/// Publication hour tag and date of the alert file to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlertFileSelection {
    pub hour_tag: &'static str,
    pub target_date: NaiveDate,
}

pub fn select_alert_file(now: NaiveDateTime) -> AlertFileSelection {
    let today = now.date();
    match now.hour() {
        0..=4 => AlertFileSelection {
            hour_tag: "17",
            target_date: today.pred_opt().unwrap_or(today),
        },
        5..=13 => AlertFileSelection {
            hour_tag: "05",
            target_date: today,
        },
        14..=16 => AlertFileSelection {
            hour_tag: "14",
            target_date: today,
        },
        _ => AlertFileSelection {
            hour_tag: "17",
            target_date: today,
        },
    }
}
