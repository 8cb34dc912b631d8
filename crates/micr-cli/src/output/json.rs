use serde_json::Value;

/// Pretty-print a result document to stdout.
///
/// Every command produces a JSON object, so this is the default format.
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => eprintln!("could not render JSON output: {}", e),
    }
}
