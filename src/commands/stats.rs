use serde_json::{Map, Value, json};

use super::{CommandOutput, connect};
use crate::api::fetch_all_stats;
use crate::display::stats_table;
use crate::error::Result;
use crate::types::{StatKind, StatValue};

fn stat_key(kind: StatKind) -> &'static str {
    match kind {
        StatKind::Total => "total",
        StatKind::Resolved => "resolved",
        StatKind::Pending => "pending",
        StatKind::AvgDuration => "avg_duration",
    }
}

fn stat_text(value: &StatValue) -> String {
    match value {
        StatValue::Total(n) | StatValue::Resolved(n) | StatValue::Pending(n) => n.to_string(),
        StatValue::AvgDuration(s) => s.clone(),
    }
}

fn stat_json(value: &StatValue) -> Value {
    match value {
        StatValue::Total(n) | StatValue::Resolved(n) | StatValue::Pending(n) => json!(n),
        StatValue::AvgDuration(s) => json!(s),
    }
}

/// Print the four aggregate statistics.
///
/// Each statistic is fetched independently. One that fails is shown as `-`
/// (or `null` in JSON) and logged; the command still succeeds unless every
/// request failed.
pub async fn cmd_stats(api_url: Option<&str>, output_json: bool) -> Result<()> {
    let api = connect(api_url)?;
    let results = fetch_all_stats(&api).await;

    let mut json_output = Map::new();
    let mut rows = Vec::with_capacity(results.len());
    let mut first_error = None;
    let mut any_ok = false;

    for (kind, result) in results {
        match result {
            Ok(value) => {
                any_ok = true;
                json_output.insert(stat_key(kind).to_string(), stat_json(&value));
                rows.push((kind, Some(stat_text(&value))));
            }
            Err(e) => {
                tracing::warn!(stat = kind.label(), error = %e, "failed to load statistic");
                json_output.insert(stat_key(kind).to_string(), Value::Null);
                rows.push((kind, None));
                first_error.get_or_insert(e);
            }
        }
    }

    if !any_ok && let Some(e) = first_error {
        return Err(e);
    }

    CommandOutput::new(Value::Object(json_output))
        .with_text(stats_table(&rows))
        .print(output_json)
}
