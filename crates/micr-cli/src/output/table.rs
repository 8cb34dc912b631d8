use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Keys rendered as bullet lists below the table instead of table cells.
const LIST_SECTIONS: &[&str] = &[
    "errors",
    "parsing_errors",
    "compliance_notes",
    "banking_guidance",
    "risk_factors",
    "recommendations",
    "compliance_requirements",
];

/// Format output as a field/value table with message lists underneath.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (key, val) in map {
                if LIST_SECTIONS.contains(&key.as_str()) {
                    continue;
                }
                builder.push_record([key.as_str(), &format_value(val)]);
            }
            println!("{}", Table::from(builder));

            for section in LIST_SECTIONS {
                if let Some(Value::Array(items)) = map.get(*section) {
                    if items.is_empty() {
                        continue;
                    }
                    println!("\n{}:", section.replace('_', " "));
                    for item in items {
                        if let Value::String(s) = item {
                            println!("  - {}", s);
                        }
                    }
                }
            }
        }
        other => println!("{}", other),
    }
}

fn format_value(val: &Value) -> String {
    match val {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string(val).unwrap_or_else(|_| val.to_string())
        }
        other => other.to_string(),
    }
}
