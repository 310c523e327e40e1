//! Implementation of the `azstore-config keys` command.

use serde::Serialize;

use crate::cli::output::{output, table, CommandOutput};
use crate::infrastructure::config::schema::{FieldKind, FieldSpec, FIELDS};

/// Listing of recognised keys.
#[derive(Debug, Serialize)]
pub struct KeysOutput {
    /// Schema rows in report order.
    pub keys: Vec<FieldSpec>,
}

impl CommandOutput for KeysOutput {
    fn to_human(&self) -> String {
        let mut table = table(["Key", "Type", "Required", "Default"]);
        for spec in &self.keys {
            let kind = match spec.kind {
                FieldKind::Text => "string",
                FieldKind::Boolean => "bool",
            };
            table.add_row(vec![
                spec.key,
                kind,
                spec.requirement.describe(),
                spec.default.unwrap_or("-"),
            ]);
        }
        table.to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Print the recognised keys.
pub fn execute(json_mode: bool) {
    let output_data = KeysOutput {
        keys: FIELDS.to_vec(),
    };
    output(&output_data, json_mode);
}
