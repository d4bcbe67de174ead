use std::collections::BTreeMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{FormData, field_value};

/// Named rule sets of a binding form
pub type ValidationRules = BTreeMap<String, ValidationRuleSet>;

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRuleSet {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comment: Option<String>,
    /// all must hold for the rule set to run
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub execution_constraints: Vec<ExecutionConstraint>,
    pub fields: BTreeMap<String, FieldRules>,
}

impl ValidationRuleSet {
    pub fn applies_to(&self, form: &FormData) -> bool {
        self.execution_constraints
            .iter()
            .all(|constraint| constraint.holds(form))
    }

    pub fn validate(&self, rule_set: &str, form: &FormData) -> Vec<ValidationFailure> {
        let mut failures = vec![];
        for (name, rules) in &self.fields {
            rules.validate(rule_set, name, form, &mut failures);
        }
        failures
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Eq, PartialEq)]
pub enum ConstraintType {
    #[serde(rename = "FIELD_VALUE")]
    FieldValue,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ExecutionConstraint {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comment: Option<String>,
    #[serde(rename = "type")]
    pub constraint_type: ConstraintType,
    pub name: String,
    pub value: Value,
}

impl ExecutionConstraint {
    pub fn field_value<N: Into<String>, V: Into<Value>>(name: N, value: V) -> Self {
        Self {
            comment: None,
            constraint_type: ConstraintType::FieldValue,
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn with_comment<C: Into<String>>(mut self, comment: C) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn holds(&self, form: &FormData) -> bool {
        match self.constraint_type {
            ConstraintType::FieldValue => field_value(form, &self.name) == Some(&self.value),
        }
    }
}

/// Rules for one field, or a group of nested fields
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FieldRules {
    Rules {
        #[serde(skip_serializing_if = "Option::is_none", default)]
        comment: Option<String>,
        validation_rules: Vec<ValidationRule>,
    },
    Nested(BTreeMap<String, FieldRules>),
}

impl FieldRules {
    pub fn rules(validation_rules: Vec<ValidationRule>) -> Self {
        Self::Rules {
            comment: None,
            validation_rules,
        }
    }

    fn validate(
        &self,
        rule_set: &str,
        path: &str,
        form: &FormData,
        failures: &mut Vec<ValidationFailure>,
    ) {
        match self {
            Self::Rules {
                validation_rules, ..
            } => {
                let value = field_value(form, path);
                for rule in validation_rules {
                    if let Some(message) = rule.check(path, value, form) {
                        failures.push(ValidationFailure {
                            rule_set: rule_set.to_owned(),
                            field: path.to_owned(),
                            message,
                        });
                    }
                }
            }
            Self::Nested(fields) => {
                for (name, rules) in fields {
                    rules.validate(rule_set, &format!("{path}.{name}"), form, failures);
                }
            }
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Eq, PartialEq)]
pub enum RuleType {
    #[serde(rename = "required")]
    Required,
    /// base64 PKCS#12 bundle, unlocked by the field named in `password_field`
    #[serde(rename = "P12VALIDATOR")]
    P12Validator,
}

#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
pub struct ValidationRule {
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub password_field: Option<String>,
}

impl ValidationRule {
    pub fn required() -> Self {
        Self {
            rule_type: RuleType::Required,
            error: None,
            password_field: None,
        }
    }

    pub fn p12<P: Into<String>>(password_field: P) -> Self {
        Self {
            rule_type: RuleType::P12Validator,
            error: None,
            password_field: Some(password_field.into()),
        }
    }

    pub fn with_error<E: Into<String>>(mut self, error: E) -> Self {
        self.error = Some(error.into());
        self
    }

    /// error message when the rule is violated
    fn check(&self, path: &str, value: Option<&Value>, form: &FormData) -> Option<String> {
        let valid = match self.rule_type {
            RuleType::Required => is_present(value),
            // absence is reported by `required`
            RuleType::P12Validator => match value {
                Some(Value::String(bundle)) => {
                    is_base64_bundle(bundle)
                        && self
                            .password_field
                            .as_deref()
                            .is_none_or(|password| is_present(field_value(form, password)))
                }
                Some(Value::Null) | None => true,
                Some(_) => false,
            },
        };

        if valid {
            return None;
        }

        Some(self.error.clone().unwrap_or_else(|| match self.rule_type {
            RuleType::Required => format!("{path} is required"),
            RuleType::P12Validator => format!("{path} is not a valid PKCS#12 bundle"),
        }))
    }
}

fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

/// pasted certificates tend to carry line breaks
fn is_base64_bundle(bundle: &str) -> bool {
    let compact: String = bundle.split_whitespace().collect();
    STANDARD
        .decode(compact.as_bytes())
        .is_ok_and(|bytes| !bytes.is_empty())
}

#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationFailure {
    pub rule_set: String,
    pub field: String,
    pub message: String,
}
