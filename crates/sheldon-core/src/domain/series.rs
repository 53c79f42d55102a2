use serde_json::{Map, Value};

/// Keep the `limit` most recent entries of a time series.
///
/// Labels are ISO-8601 dates (`2023-11-26`) or date-times (`2023-11-26 16:00:00`), so descending
/// lexical order is newest first. Values are copied unmodified.
pub fn truncate_latest(series: &Map<String, Value>, limit: usize) -> Map<String, Value> {
    let mut labels = series.keys().collect::<Vec<_>>();
    labels.sort_unstable_by(|left, right| right.cmp(left));

    labels
        .into_iter()
        .take(limit)
        .filter_map(|label| series.get(label).map(|entry| (label.clone(), entry.clone())))
        .collect()
}
