use std::collections::BTreeMap;

use serde_json::{Value, json};

use crate::form::{
    BindingForm, FormData, ValidationRules, ValidationRuleSet, ExecutionConstraint, FieldRules,
    ValidationRule,
};

use super::{ANDROID, IOS};

const CLIENT_ID: &str = "CLIENT_ID";
const CLIENT_TYPE: &str = "CLIENT_TYPE";
const PLATFORM_CONFIG: &str = "platformConfig";

fn android_config() -> Value {
    json!({
        "title": ANDROID,
        "type": "object",
        "properties": {
            "googlekey": {
                "title": "Your Server Key for Firebase Cloud Messaging",
                "type": "string"
            },
            "projectNumber": {
                "title": "Your Sender ID, needed to connecting to FCM",
                "type": "string"
            }
        }
    })
}

fn ios_config() -> Value {
    json!({
        "title": IOS,
        "type": "object",
        "properties": {
            "cert": {
                "title": "iOS .p12 file (encode contents in base64 before pasting)",
                "type": "string"
            },
            "passphrase": {
                "title": "The passphrase",
                "type": "string"
            },
            "iosIsProduction": {
                "default": false,
                "title": "Is this a production certificate?",
                "type": "boolean"
            }
        }
    })
}

/// platforms still open for an app, given what is already bound
pub(super) fn bind_form(app_name: &str, has_android: bool, has_ios: bool) -> BindingForm {
    let (platforms, default_platform, platform_config) = match (has_android, has_ios) {
        (true, true) => (vec![], "", android_config()),
        (false, true) => (vec![ANDROID], ANDROID, android_config()),
        (true, false) => (vec![IOS], IOS, ios_config()),
        (false, false) => (vec![ANDROID, IOS], ANDROID, android_config()),
    };

    let schema = json!({
        "additionalProperties": false,
        "properties": {
            CLIENT_ID: {
                "title": "Mobile Client ID",
                "type": "string",
                "default": app_name
            },
            CLIENT_TYPE: {
                "default": default_platform,
                "enum": platforms,
                "title": "Mobile Client Type",
                "type": "string"
            },
            PLATFORM_CONFIG: platform_config
        },
        "type": "object"
    });

    let ui_schema = json!({
        CLIENT_ID: {
            "ui:readonly": true
        },
        PLATFORM_CONFIG: {
            "cert": {
                "ui:widget": "textarea"
            },
            "passphrase": {
                "ui:widget": "password"
            }
        }
    });

    BindingForm {
        schema,
        ui_schema,
        on_change: on_platform_change,
        validation_rules: validation_rules(),
    }
}

/// swap the platform sub schema when the selected client type changes
fn on_platform_change(form: &FormData, previous_schema: &Value) -> Option<Value> {
    let current = previous_schema
        .pointer("/properties/platformConfig/title")
        .and_then(Value::as_str)?;
    let selected = form.get(CLIENT_TYPE).and_then(Value::as_str)?;

    let (default_platform, platform_config) = match (current, selected) {
        (ANDROID, IOS) => (IOS, ios_config()),
        (IOS, ANDROID) => (ANDROID, android_config()),
        _ => return None,
    };

    let mut schema = previous_schema.clone();
    let properties = schema
        .get_mut("properties")
        .and_then(Value::as_object_mut)?;
    if let Some(client_type) = properties
        .get_mut(CLIENT_TYPE)
        .and_then(Value::as_object_mut)
    {
        client_type.insert("default".to_owned(), json!(default_platform));
    }
    properties.insert(PLATFORM_CONFIG.to_owned(), platform_config);

    Some(schema)
}

fn fields(entries: Vec<(&str, FieldRules)>) -> BTreeMap<String, FieldRules> {
    entries
        .into_iter()
        .map(|(name, rules)| (name.to_owned(), rules))
        .collect()
}

fn validation_rules() -> ValidationRules {
    let common = ValidationRuleSet {
        comment: Some(
            "This set of rules is always executed when service is UPS. It is used to validate common fields."
                .to_owned(),
        ),
        execution_constraints: vec![],
        fields: fields(vec![
            (CLIENT_ID, FieldRules::rules(vec![ValidationRule::required()])),
            (CLIENT_TYPE, FieldRules::rules(vec![ValidationRule::required()])),
        ]),
    };

    let ios = ValidationRuleSet {
        comment: Some(
            "This is the set of rules that will be used to validate IOS UPS Binding.".to_owned(),
        ),
        execution_constraints: vec![
            ExecutionConstraint::field_value(CLIENT_TYPE, IOS).with_comment(
                "Execute this ruleset only when the field named 'CLIENT_TYPE' has value 'IOS'",
            ),
        ],
        fields: fields(vec![(
            PLATFORM_CONFIG,
            FieldRules::Nested(fields(vec![
                (
                    "cert",
                    FieldRules::Rules {
                        comment: Some(
                            "Errors relative to this field should be bound to the key 'iosIsProduction'"
                                .to_owned(),
                        ),
                        validation_rules: vec![
                            ValidationRule::required().with_error("APNS requires a certificate."),
                            ValidationRule::p12("platformConfig.passphrase")
                                .with_error("Invalid PKCS#12 data or bad password"),
                        ],
                    },
                ),
                (
                    "passphrase",
                    FieldRules::rules(vec![
                        ValidationRule::required()
                            .with_error("APNS certificate passphrase is required."),
                    ]),
                ),
            ])),
        )]),
    };

    let android = ValidationRuleSet {
        comment: Some(
            "This is the set of rules that will be used to validate Android UPS Binding."
                .to_owned(),
        ),
        execution_constraints: vec![
            ExecutionConstraint::field_value(CLIENT_TYPE, ANDROID).with_comment(
                "Execute this ruleset only when the field named 'CLIENT_TYPE' has value 'Android'",
            ),
        ],
        fields: fields(vec![(
            PLATFORM_CONFIG,
            FieldRules::Nested(fields(vec![
                (
                    "googlekey",
                    FieldRules::rules(vec![
                        ValidationRule::required().with_error("FCM requires a Server Key."),
                    ]),
                ),
                (
                    "projectNumber",
                    FieldRules::rules(vec![
                        ValidationRule::required().with_error("FCM requires a Sender ID."),
                    ]),
                ),
            ])),
        )]),
    };

    let mut rules = ValidationRules::new();
    rules.insert("UPSCOMMON".to_owned(), common);
    rules.insert("IOS_UPS_BINDING".to_owned(), ios);
    rules.insert("ANDROID_UPS_BINDING".to_owned(), android);
    rules
}
