use serde_json::Value;

/// Print just the key answer value from the output.
///
/// Heuristic: look for well-known result fields in order of priority, then
/// fall back to the first non-null field.
pub fn print_minimal(value: &Value) {
    let priority_keys = [
        "is_valid",
        "risk_score",
        "risk_level",
        "transit_number",
        "standardized_micr",
        "message",
    ];

    if let Value::Object(map) = value {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_scalar(val));
                    return;
                }
            }
        }
        if let Some((_, val)) = map.iter().find(|(_, v)| !v.is_null()) {
            println!("{}", format_scalar(val));
            return;
        }
    }

    println!("{}", value);
}

fn format_scalar(val: &Value) -> String {
    match val {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
