use serde_json::{Value, json};

use mobile_services_metadata::k8_types::ObjectMeta;
use mobile_services_metadata::{BindingState, FormData, MobileService, ServiceDescriptor};

fn form(value: Value) -> FormData {
    match value {
        Value::Object(map) => map,
        _ => panic!("form data must be an object"),
    }
}

fn push_service(resources: Vec<Value>) -> MobileService {
    MobileService::new(ServiceDescriptor {
        name: "ups".to_owned(),
        service_type: "push".to_owned(),
        host: "https://ups.example.com".to_owned(),
        bind_custom_resource_kind: Some("push".to_owned()),
        custom_resources: resources,
        ..Default::default()
    })
}

/// what the cluster returns once a creation request has been accepted
fn created(request: Value, app: &str, status: Option<Value>) -> Value {
    let mut resource = request;
    resource["metadata"]["labels"] = json!({ "app": app });
    resource["metadata"]["ownerReferences"] = json!([
        { "apiVersion": "mdc.aerogear.org/v1alpha1", "kind": "MobileClient", "name": app, "uid": format!("{app}-uid"), "controller": true, "blockOwnerDeletion": false }
    ]);
    if let Some(status) = status {
        resource["status"] = status;
    }
    resource
}

fn platforms(service: &MobileService, app: &str) -> Vec<String> {
    service
        .binding_form(app)
        .expect("binding form")
        .choices("CLIENT_TYPE")
        .into_iter()
        .map(str::to_owned)
        .collect()
}

#[test]
fn push_binding_narrows_platforms() {
    let owner: ObjectMeta =
        serde_json::from_value(json!({ "name": "app-1", "uid": "app-1-uid" })).expect("owner");

    let service = push_service(vec![]);
    assert!(service.is_ups_service());
    assert_eq!(platforms(&service, "app-1"), vec!["Android", "iOS"]);
    assert_eq!(service.binding_state("app-1"), BindingState::Unbound);

    let android_form = form(json!({
        "CLIENT_ID": "app-1",
        "CLIENT_TYPE": "Android",
        "platformConfig": { "googlekey": "k", "projectNumber": "42" }
    }));
    assert!(service.binding_form("app-1").expect("form").validate(&android_form).is_empty());
    let android = service
        .new_custom_resource(&android_form, &owner)
        .expect("request")
        .expect("android");

    // backend has not reconciled the variant yet
    let service = push_service(vec![created(
        serde_json::to_value(&android).expect("json"),
        "app-1",
        None,
    )]);
    assert!(service.is_binding_operation_in_progress(Some("app-1")));
    assert!(!service.can_start_binding(Some("app-1")));
    assert_eq!(service.binding_state("app-1"), BindingState::InProgress);
    assert_eq!(platforms(&service, "app-1"), vec!["iOS"]);
    // other apps are unaffected
    assert_eq!(platforms(&service, "app-2"), vec!["Android", "iOS"]);

    let ios_form = form(json!({
        "CLIENT_ID": "app-1",
        "CLIENT_TYPE": "iOS",
        "platformConfig": { "cert": "Y2VydA==", "passphrase": "pw", "iosIsProduction": false }
    }));
    let ios = service
        .new_custom_resource(&ios_form, &owner)
        .expect("request")
        .expect("ios");
    assert_eq!(ios.metadata.name, "app-1-ios-ups-variant");

    let service = push_service(vec![
        created(
            serde_json::to_value(&android).expect("json"),
            "app-1",
            Some(json!({ "ready": true })),
        ),
        created(
            serde_json::to_value(&ios).expect("json"),
            "app-1",
            Some(json!({ "ready": true })),
        ),
    ]);
    assert!(service.is_bound_to_app("app-1"));
    assert!(!service.is_bound_to_app("app-2"));
    assert!(!service.is_binding_operation_in_progress(None));
    assert_eq!(service.binding_state("app-1"), BindingState::Bound);

    let form = service.binding_form("app-1").expect("form");
    assert!(form.choices("CLIENT_TYPE").is_empty());
    assert_eq!(form.default_value("CLIENT_TYPE"), Some(&json!("")));

    // platforms already bound are no longer accepted
    let failures = form.validate(&android_form);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].field, "CLIENT_TYPE");
    assert!(!form.validate(&ios_form).is_empty());

    // fully bound app yields no request
    let nothing = service
        .new_custom_resource(&form_data_without_platform(), &owner)
        .expect("request");
    assert!(nothing.is_none());

    let labels: Vec<String> = service
        .configuration("app-1")
        .into_iter()
        .map(|item| item.label)
        .collect();
    assert_eq!(
        labels,
        vec!["Push Application Id", "UPS Admin Console URL", "Push Application"]
    );
}

fn form_data_without_platform() -> FormData {
    form(json!({ "CLIENT_ID": "app-1", "CLIENT_TYPE": "" }))
}

#[test]
fn android_request_shape() {
    let service = push_service(vec![]);
    let owner = ObjectMeta::default();

    let request = service
        .new_custom_resource(
            &form(json!({
                "CLIENT_ID": "job-1",
                "CLIENT_TYPE": "Android",
                "platformConfig": { "googlekey": "k" }
            })),
            &owner,
        )
        .expect("request")
        .expect("android");

    let json = serde_json::to_value(&request).expect("json");
    assert_eq!(json["apiVersion"], json!("push.aerogear.org/v1alpha1"));
    assert_eq!(json["kind"], json!("AndroidVariant"));
    assert_eq!(json["metadata"], json!({ "name": "job-1-android-ups-variant" }));
    assert_eq!(json["spec"]["serverKey"], json!("k"));
    assert_eq!(json.as_object().map(|o| o.len()), Some(4));
}
