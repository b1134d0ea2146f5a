use serde_json::Value;

use super::result_of;

/// Headline field for each command, most specific first.
const PRIORITY_KEYS: [&str; 10] = [
    "irr_pct",
    "npv",
    "monthly_payment",
    "expected_total",
    "expected",
    "total_variance",
    "ending_cash",
    "break_even_units",
    "allocated_total",
    "trend",
];

/// Print just the headline value of a result.
///
/// Uses the first non-null priority key, then falls back to the first field.
/// A priority key that is present but null prints as N/A.
pub fn print_minimal(value: &Value) {
    let result_obj = result_of(value);

    if let Value::Object(map) = result_obj {
        let mut absent = false;
        for key in &PRIORITY_KEYS {
            match map.get(*key) {
                Some(Value::Null) => absent = true,
                Some(val) => {
                    println!("{}", format_minimal(val));
                    return;
                }
                None => {}
            }
        }
        if absent {
            println!("N/A");
            return;
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "N/A".to_string(),
        Value::Array(arr) => arr.iter().map(format_minimal).collect::<Vec<_>>().join(","),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
