use crate::domain::entities::alert::AlertDay;
use crate::domain::entities::report::{LocationSnapshot, ResolvedReport};
use crate::domain::values::locale::Locale;

fn localize_day(day: &mut AlertDay, locale: Locale) {
    day.status_text = locale.alert_status(day.flag).to_string();
    day.message = locale.alert_message(day.flag).to_string();
}

/// Rewrites the human-readable texts of a report; levels and keys are untouched.
pub fn localize_report(report: &mut ResolvedReport, locale: Locale) {
    if let Some(classification) = report.classification.as_mut() {
        classification.level_label = locale.risk_label(classification.level).to_string();
        classification.advisory_text = locale.risk_advisory(classification.level).to_string();
    }
    if let Some(alert) = report.alert.as_mut() {
        localize_day(&mut alert.today, locale);
        localize_day(&mut alert.tomorrow, locale);
    }
}

pub fn localize_snapshot(snapshot: &mut LocationSnapshot, locale: Locale) {
    for report in [
        &mut snapshot.current,
        &mut snapshot.forecast,
        &mut snapshot.timeseries,
        &mut snapshot.alert,
    ] {
        localize_report(report, locale);
    }
}
