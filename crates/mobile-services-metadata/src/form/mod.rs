//!
//! # Binding Form
//!
//! Schema, presentation hints and validation rules describing the input
//! required to create a new binding.
//!
mod rules;

pub use rules::{
    ValidationRules, ValidationRuleSet, ExecutionConstraint, ConstraintType, FieldRules,
    ValidationRule, RuleType, ValidationFailure,
};

use serde::Serialize;
use serde_json::{Map, Value};

/// rule set name reported for schema level failures
pub const SCHEMA_RULE_SET: &str = "SCHEMA";

/// Values entered by the user, keyed by schema property
pub type FormData = Map<String, Value>;

/// Given current form data and the previous schema, returns the schema for a
/// switched conditional branch, or `None` when nothing changes.
pub type OnChangeHandler = fn(&FormData, &Value) -> Option<Value>;

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BindingForm {
    pub schema: Value,
    pub ui_schema: Value,
    #[serde(skip)]
    pub on_change: OnChangeHandler,
    pub validation_rules: ValidationRules,
}

impl BindingForm {
    pub fn on_change(&self, form: &FormData, previous_schema: &Value) -> Option<Value> {
        (self.on_change)(form, previous_schema)
    }

    /// choices offered for an enumerated property, empty if none
    pub fn choices(&self, property: &str) -> Vec<&str> {
        self.schema
            .get("properties")
            .and_then(|properties| properties.get(property))
            .and_then(|property| property.get("enum"))
            .and_then(Value::as_array)
            .map(|choices| choices.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// default value of a top level property
    pub fn default_value(&self, property: &str) -> Option<&Value> {
        self.schema
            .get("properties")
            .and_then(|properties| properties.get(property))
            .and_then(|property| property.get("default"))
    }

    /// run every rule set whose constraints hold for `form`, then check
    /// enumerated properties against the choices still offered
    pub fn validate(&self, form: &FormData) -> Vec<ValidationFailure> {
        let mut failures: Vec<ValidationFailure> = self
            .validation_rules
            .iter()
            .filter(|(_, rule_set)| rule_set.applies_to(form))
            .flat_map(|(name, rule_set)| rule_set.validate(name, form))
            .collect();
        failures.extend(self.validate_choices(form));
        failures
    }

    /// values of enumerated properties that are not among the choices; absent
    /// values are left to the `required` rules
    fn validate_choices(&self, form: &FormData) -> Vec<ValidationFailure> {
        let Some(properties) = self.schema.get("properties").and_then(Value::as_object) else {
            return vec![];
        };

        properties
            .iter()
            .filter(|(_, property)| property.get("enum").is_some())
            .filter_map(|(name, _)| {
                let value = form.get(name).and_then(Value::as_str)?;
                if value.is_empty() || self.choices(name).contains(&value) {
                    return None;
                }
                Some(ValidationFailure {
                    rule_set: SCHEMA_RULE_SET.to_owned(),
                    field: name.clone(),
                    message: format!("{value} is not an available choice for {name}"),
                })
            })
            .collect()
    }
}

/// value at a dotted path such as `platformConfig.cert`
pub fn field_value<'a>(form: &'a FormData, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    segments.try_fold(form.get(first)?, |value, segment| value.get(segment))
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use super::*;

    fn form(value: Value) -> FormData {
        match value {
            Value::Object(map) => map,
            _ => panic!("form data must be an object"),
        }
    }

    fn platform_form(choices: Value) -> BindingForm {
        BindingForm {
            schema: json!({
                "properties": {
                    "CLIENT_TYPE": { "enum": choices, "type": "string" },
                    "CLIENT_ID": { "type": "string" }
                }
            }),
            ui_schema: json!({}),
            on_change: |_, _| None,
            validation_rules: ValidationRules::new(),
        }
    }

    #[test]
    fn test_rejects_value_outside_choices() {
        let offered = platform_form(json!(["iOS"]));
        assert!(offered.validate(&form(json!({ "CLIENT_TYPE": "iOS" }))).is_empty());

        let failures = offered.validate(&form(json!({ "CLIENT_TYPE": "Android", "CLIENT_ID": "x" })));
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].rule_set, SCHEMA_RULE_SET);
        assert_eq!(failures[0].field, "CLIENT_TYPE");
        assert_eq!(failures[0].message, "Android is not an available choice for CLIENT_TYPE");

        // nothing left to pick
        let exhausted = platform_form(json!([]));
        assert_eq!(exhausted.validate(&form(json!({ "CLIENT_TYPE": "iOS" }))).len(), 1);
        // absent or empty values are not checked here
        assert!(exhausted.validate(&form(json!({ "CLIENT_TYPE": "" }))).is_empty());
        assert!(exhausted.validate(&form(json!({}))).is_empty());
    }

    #[test]
    fn test_field_value() {
        let data = form(json!({
            "CLIENT_ID": "app-1",
            "platformConfig": { "cert": "abc" }
        }));

        assert_eq!(field_value(&data, "CLIENT_ID"), Some(&json!("app-1")));
        assert_eq!(field_value(&data, "platformConfig.cert"), Some(&json!("abc")));
        assert_eq!(field_value(&data, "platformConfig.passphrase"), None);
        assert_eq!(field_value(&data, "missing.cert"), None);
    }
}
