use serde_json::Value;

use crate::schema::Schema;

/// Rewrites boolean leaves to their integer equivalents (`true` -> `1`,
/// `false` -> `0`) so the client editor, whose option language handles
/// booleans inconsistently, always receives 0/1.
///
/// Recurses through nested mappings only. Array elements pass through
/// untouched, booleans included; consumers depend on that narrow contract.
pub fn normalize(schema: &mut Schema) {
    for (_, value) in schema.iter_mut() {
        if let Value::Object(nested) = value {
            normalize(nested);
        } else if let Value::Bool(flag) = *value {
            *value = Value::from(flag as i64);
        }
    }
}
