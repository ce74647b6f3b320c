// Field adapter tests
// Props produced from form state, and changes written back to the form

use std::sync::{Arc, Mutex};

use orbit_forms::component::{Callback, Component, Context};
use orbit_forms::form::adapters::{
    FieldAdapter, FieldCheckboxAdapter, FieldCheckboxInAGroupAdapter, FieldDateTimeAdapter,
    FieldNumberAdapter, FieldRadioGroupAdapter, FieldSelectAdapter, FieldTextAdapter,
    FieldTextDebounceAdapter, FieldToggleAdapter,
};
use orbit_forms::form::{FormCard, FormCardOptions, FormHandle, MemoryForm, SubmitError, SubmitRequest};
use orbit_forms::kit::components::{InputAttributes, RadioOption, SelectOption};
use orbit_forms::kit::dimension::Dimension;
use orbit_forms::Error;
use serde_json::{json, Map, Value};

fn errors(entries: &[(&str, &str)]) -> Map<String, Value> {
    entries
        .iter()
        .map(|(path, message)| (path.to_string(), json!(message)))
        .collect()
}

#[test]
fn test_text_field_hides_error_until_touched() {
    let form = MemoryForm::new(json!({ "email": "ada" }));
    form.set_errors(errors(&[("email", "Invalid email")]));
    let adapter = FieldTextAdapter::new("email");

    let props = adapter.bind(&form);
    assert_eq!(props.value, "ada");
    assert!(!props.is_invalid);
    assert!(props.validation_text.is_none());

    form.set_field_touched("email", true, true);
    let props = adapter.bind(&form);
    assert!(props.is_invalid);
    assert_eq!(props.validation_text.as_deref(), Some("Invalid email"));
}

#[test]
fn test_text_field_shows_errors_after_submit() {
    let form = MemoryForm::new(json!({ "profile": { "name": "" } }));
    form.set_errors(errors(&[("profile.name", "Required")]));

    let adapter = FieldTextAdapter::new("profile.name");
    assert!(!adapter.bind(&form).is_invalid);

    let card = FormCard::new(
        |_request: SubmitRequest| async { Err::<Value, _>(SubmitError::new("Rejected")) },
        FormCardOptions::new(),
    );
    futures::executor::block_on(form.handle_submit(card.controller())).unwrap_err();

    let props = adapter.bind(&form);
    assert!(props.is_invalid);
    assert_eq!(props.validation_text.as_deref(), Some("Required"));
}

#[test]
fn test_text_field_change_runs_user_hook_after_commit() {
    let form = MemoryForm::new(json!({ "name": "" }));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let observer = form.clone();
    let log = seen.clone();
    let adapter = FieldTextAdapter::new("name").on_change(Callback::new(move |value: Value| {
        log.lock().unwrap().push((value, observer.value("name")));
    }));

    adapter.bind(&form).on_change.unwrap().call(json!("Grace"));

    assert_eq!(form.value("name"), Some(json!("Grace")));
    assert_eq!(
        *seen.lock().unwrap(),
        vec![(json!("Grace"), Some(json!("Grace")))]
    );
}

#[test]
fn test_debounced_field_commits_on_debounce() {
    let form = MemoryForm::new(json!({ "search": null }));
    let adapter = FieldTextDebounceAdapter::new("search").minimum_characters(3);

    let props = adapter.bind(&form);
    assert_eq!(props.value, "");
    assert_eq!(props.minimum_characters, 3);

    props.on_debounce.unwrap().call(json!("rust"));
    assert_eq!(form.value("search"), Some(json!("rust")));
}

#[test]
fn test_select_passes_value_through() {
    let form = MemoryForm::new(json!({ "country": "ca" }));
    let adapter = FieldSelectAdapter::new(
        "country",
        vec![SelectOption::new("Canada", "ca"), SelectOption::new("Mexico", "mx")],
    );

    let props = adapter.bind(&form);
    assert_eq!(props.value, json!("ca"));
    assert_eq!(props.options.len(), 2);
    assert!(props.close_menu_on_select);

    props.on_change.unwrap().call(json!({ "label": "Mexico", "value": "mx" }));
    assert_eq!(
        form.value("country"),
        Some(json!({ "label": "Mexico", "value": "mx" }))
    );
}

#[test]
fn test_checkbox_and_toggle_follow_truthiness() {
    let form = MemoryForm::new(json!({ "terms": false, "notify": 1 }));

    let checkbox = FieldCheckboxAdapter::new("terms").bind(&form);
    assert!(!checkbox.is_selected);
    assert!(!checkbox.toggle);
    checkbox.on_change.unwrap().call(json!(true));
    assert!(FieldCheckboxAdapter::new("terms").bind(&form).is_selected);

    let toggle = FieldToggleAdapter::new("notify").bind(&form);
    assert!(toggle.is_selected);
    assert!(toggle.toggle);
}

#[test]
fn test_checkbox_in_a_group() {
    let form = MemoryForm::new(json!({ "roles": ["viewer"] }));
    form.set_errors(errors(&[("roleGroup", "Pick at most one role")]));
    let admin = FieldCheckboxInAGroupAdapter::new("roles", "roleGroup", "admin");
    let viewer = FieldCheckboxInAGroupAdapter::new("roles", "roleGroup", "viewer");

    assert!(!admin.bind(&form).is_selected);
    assert!(viewer.bind(&form).is_selected);
    assert!(!admin.bind(&form).is_invalid);

    admin.bind(&form).on_change.unwrap().call(json!(true));

    assert_eq!(form.value("roles"), Some(json!(["viewer", "admin"])));
    let props = admin.bind(&form);
    assert!(props.is_selected);
    assert_eq!(form.touched(), json!({ "roleGroup": true }));
    // The group error applies once the group is touched
    assert!(props.is_invalid);
    assert!(props.validation_text.is_none());
}

#[test]
fn test_radio_group_and_date_time() {
    let form = MemoryForm::new(json!({ "plan": "basic", "starts_at": null }));
    form.set_errors(errors(&[("starts_at", "Pick a date")]));
    form.set_field_touched("starts_at", true, true);

    let radios = FieldRadioGroupAdapter::new(
        "plan",
        vec![RadioOption::new("Basic", "basic"), RadioOption::new("Pro", "pro")],
    );
    let props = radios.bind(&form);
    assert_eq!(props.value, json!("basic"));
    props.on_change.unwrap().call(json!("pro"));
    assert_eq!(form.value("plan"), Some(json!("pro")));

    let picker = FieldDateTimeAdapter::new("starts_at").exclude_time(true);
    let props = picker.bind(&form);
    assert_eq!(props.value, Value::Null);
    assert!(props.exclude_time);
    assert_eq!(props.validation_text.as_deref(), Some("Pick a date"));
}

#[test]
fn test_number_field_stores_numbers() {
    let form = MemoryForm::new(json!({ "age": 30 }));
    let adapter = FieldNumberAdapter::new("age");

    let props = adapter.bind(&form);
    assert_eq!(props.value, "30");

    props.on_change.clone().unwrap().call(json!("41"));
    assert_eq!(form.value("age"), Some(json!(41)));

    props.on_change.unwrap().call(json!(""));
    assert_eq!(form.value("age"), Some(Value::Null));
    assert_eq!(adapter.bind(&form).value, "");
}

#[test]
fn test_number_field_keeps_non_numeric_entry() {
    let form = MemoryForm::new(json!({ "age": null }));
    let adapter = FieldNumberAdapter::new("age");

    adapter.bind(&form).on_change.unwrap().call(json!("4o"));
    assert_eq!(form.value("age"), Some(json!("4o")));
    assert_eq!(adapter.bind(&form).value, "4o");
}

#[test]
fn test_blur_marks_fields_touched() {
    let form = MemoryForm::new(json!({ "email": "ada", "age": "x", "plan": null, "query": "" }));
    form.set_errors(errors(&[
        ("email", "Invalid email"),
        ("age", "Not a number"),
        ("plan", "Pick a plan"),
        ("query", "Too short"),
    ]));

    let focused = Arc::new(Mutex::new(Vec::new()));
    let log = focused.clone();
    let on_focus = Callback::new(move |()| log.lock().unwrap().push("email"));

    let email = FieldTextAdapter::new("email").on_focus(on_focus);
    let props = email.bind(&form);
    assert!(!props.is_invalid);
    props.on_focus.unwrap().call(());
    assert_eq!(*focused.lock().unwrap(), vec!["email"]);
    assert!(!email.bind(&form).is_invalid);

    props.on_blur.unwrap().call(());
    assert_eq!(form.touched(), json!({ "email": true }));
    let props = email.bind(&form);
    assert!(props.is_invalid);
    assert_eq!(props.validation_text.as_deref(), Some("Invalid email"));

    let age = FieldNumberAdapter::new("age");
    age.bind(&form).on_blur.unwrap().call(());
    assert!(age.bind(&form).is_invalid);

    let plan = FieldSelectAdapter::new("plan", vec![SelectOption::new("Pro", "pro")]);
    plan.bind(&form).on_blur.unwrap().call(());
    assert!(plan.bind(&form).is_invalid);

    let query = FieldTextDebounceAdapter::new("query");
    query.bind(&form).on_blur.unwrap().call(());
    assert_eq!(query.bind(&form).validation_text.as_deref(), Some("Too short"));
}

#[test]
fn test_blur_runs_user_hook_after_touching() {
    let form = MemoryForm::new(json!({ "name": "" }));
    let seen = Arc::new(Mutex::new(Vec::new()));

    let observer = form.clone();
    let log = seen.clone();
    let hook = Callback::new(move |()| log.lock().unwrap().push(observer.touched()));

    FieldTextAdapter::new("name")
        .on_blur(hook)
        .bind(&form)
        .on_blur
        .unwrap()
        .call(());
    assert_eq!(*seen.lock().unwrap(), vec![json!({ "name": true })]);
}

#[test]
fn test_mount_and_refresh() {
    let form = MemoryForm::new(json!({ "name": "Ada" }));
    let adapter = FieldTextAdapter::new("name").attributes(InputAttributes::new().label("Name"));

    let mut field = adapter.mount(&form, Context::new()).unwrap();
    assert_eq!(field.props().value, "Ada");

    form.set_field_value("name", json!("Grace"));
    adapter.refresh(&form, &mut field).unwrap();
    assert_eq!(field.props().value, "Grace");
}

#[test]
fn test_invalid_width_is_rejected() {
    let form = MemoryForm::new(json!({ "name": "" }));
    let adapter = FieldTextAdapter::new("name").attributes(InputAttributes::new().width("wide"));

    assert!(matches!(adapter.bind_validated(&form), Err(Error::Component(_))));

    let responsive = FieldTextAdapter::new("name")
        .attributes(InputAttributes::new().width(Dimension::responsive(["100", "50%"])));
    assert!(responsive.bind_validated(&form).is_ok());
}

#[test]
fn test_bind_from_context() {
    let form = MemoryForm::new(json!({ "name": "Ada" }));
    let card = FormCard::new(
        |request: SubmitRequest| async move { Ok::<_, SubmitError>(request.values) },
        FormCardOptions::new(),
    );
    let context = card.context(&form).unwrap();
    let adapter = FieldTextAdapter::new("name");

    let props = adapter.bind_from_context::<MemoryForm>(&context).unwrap();
    assert_eq!(props.value, "Ada");

    let missing = adapter.bind_from_context::<MemoryForm>(&Context::new());
    assert!(matches!(missing, Err(Error::MissingForm(name)) if name == "name"));
}
