mod models;

use chrono::{NaiveDate, NaiveDateTime};

/// Fixed "now" so date-dependent counters are deterministic.
pub(crate) fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap()
}
