// Submission lifecycle tests
// Status updates, form resets and the auto-reset timer

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use orbit_forms::component::Callback;
use orbit_forms::form::{
    FormHandle, FormStatus, MemoryForm, SubmitController, SubmitError, SubmitFailure,
    SubmitOptions, SubmitPhase, SubmitRequest, SubmitSuccess,
};
use serde_json::{json, Map, Value};

// Memory form that records every status it is given
#[derive(Debug, Clone, Default)]
struct RecordingForm {
    inner: MemoryForm,
    statuses: Arc<Mutex<Vec<FormStatus>>>,
}

impl RecordingForm {
    fn new(values: Value) -> Self {
        Self {
            inner: MemoryForm::new(values),
            statuses: Arc::default(),
        }
    }

    fn status_updates(&self) -> Vec<FormStatus> {
        self.statuses.lock().unwrap().clone()
    }
}

impl FormHandle for RecordingForm {
    fn values(&self) -> Value {
        self.inner.values()
    }

    fn initial_values(&self) -> Value {
        self.inner.initial_values()
    }

    fn touched(&self) -> Value {
        self.inner.touched()
    }

    fn errors(&self) -> Value {
        self.inner.errors()
    }

    fn status(&self) -> FormStatus {
        self.inner.status()
    }

    fn submit_count(&self) -> u32 {
        self.inner.submit_count()
    }

    fn is_submitting(&self) -> bool {
        self.inner.is_submitting()
    }

    fn set_field_value(&self, path: &str, value: Value) {
        self.inner.set_field_value(path, value)
    }

    fn set_field_touched(&self, path: &str, touched: bool, should_validate: bool) {
        self.inner.set_field_touched(path, touched, should_validate)
    }

    fn set_status(&self, status: FormStatus) {
        self.statuses.lock().unwrap().push(status.clone());
        self.inner.set_status(status)
    }

    fn set_errors(&self, errors: Map<String, Value>) {
        self.inner.set_errors(errors)
    }

    fn reset_form(&self, values: Value, status: FormStatus) {
        self.inner.reset_form(values, status)
    }
}

async fn save(request: SubmitRequest) -> Result<Value, SubmitError> {
    let mut saved = request.values;
    saved["id"] = json!(1);
    Ok(saved)
}

async fn reject(_request: SubmitRequest) -> Result<Value, SubmitError> {
    Err(SubmitError::new("Validation failed")
        .with_request_id("req-7")
        .with_param("name", "name is incorrect"))
}

#[tokio::test(start_paused = true)]
async fn test_success_resets_form_to_result() {
    let form = RecordingForm::new(json!({ "name": "" }));
    form.set_field_value("name", json!("Ada"));
    let controller = SubmitController::new(save);

    let result = controller.submit(&form).await.unwrap();

    let expected = json!({ "name": "Ada", "id": 1 });
    assert_eq!(result, expected);
    assert_eq!(form.values(), expected);
    assert_eq!(form.initial_values(), expected);
    assert_eq!(form.status(), FormStatus::Success { result: expected });
    assert!(!form.dirty());
    assert!(controller.has_pending_reset());
}

#[tokio::test(start_paused = true)]
async fn test_success_with_set_init_value_keeps_baseline() {
    let form = RecordingForm::new(json!({ "a": 0 }));
    let seen = Arc::new(Mutex::new(None));
    let hook_seen = seen.clone();
    let options = SubmitOptions::new().with_set_init_value(Callback::new(move |result: Value| {
        *hook_seen.lock().unwrap() = Some(result);
    }));
    let controller = SubmitController::with_options(
        |_request: SubmitRequest| async { Ok::<_, SubmitError>(json!({ "a": 1 })) },
        options,
    );

    controller.submit(&form).await.unwrap();

    assert_eq!(*seen.lock().unwrap(), Some(json!({ "a": 1 })));
    assert_eq!(form.initial_values(), json!({ "a": 0 }));
    assert_eq!(form.status(), FormStatus::Success { result: json!({ "a": 1 }) });
}

#[tokio::test(start_paused = true)]
async fn test_success_status_cleared_after_timeout() {
    let form = RecordingForm::new(json!({ "name": "Ada" }));
    let options = SubmitOptions::new().with_success_timeout(Duration::from_millis(5000));
    let controller = SubmitController::with_options(save, options);

    controller.submit(&form).await.unwrap();
    assert_eq!(controller.phase(&form), SubmitPhase::Success);

    tokio::time::sleep(Duration::from_millis(4999)).await;
    assert!(form.status().is_success());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(form.status(), FormStatus::Idle);
    assert_eq!(controller.phase(&form), SubmitPhase::Idle);
    assert!(!controller.has_pending_reset());
}

#[tokio::test(start_paused = true)]
async fn test_second_submit_supersedes_first_timer() {
    let form = RecordingForm::new(json!({ "name": "Ada" }));
    let controller = SubmitController::new(save);

    controller.submit(&form).await.unwrap();
    tokio::time::sleep(Duration::from_millis(3000)).await;
    controller.submit(&form).await.unwrap();

    // The first timer would have fired here
    tokio::time::sleep(Duration::from_millis(3000)).await;
    assert!(form.status().is_success());
    assert!(form.status_updates().is_empty());

    tokio::time::sleep(Duration::from_millis(2500)).await;
    assert_eq!(form.status_updates(), vec![FormStatus::Idle]);
}

#[tokio::test(start_paused = true)]
async fn test_failure_sets_status_errors_and_callback() {
    let form = RecordingForm::new(json!({ "name": "x" }));
    let failures: Arc<Mutex<Vec<SubmitFailure<RecordingForm>>>> = Arc::default();
    let recorded = failures.clone();
    let options = SubmitOptions::new().on_error(Callback::new(move |failure: SubmitFailure<RecordingForm>| {
        recorded.lock().unwrap().push(failure);
    }));
    let controller = SubmitController::with_options(reject, options);

    let error = controller.submit(&form).await.unwrap_err();

    assert_eq!(error.request_id.as_deref(), Some("req-7"));
    assert_eq!(form.status().error(), Some(&error));
    assert_eq!(form.errors(), json!({ "name": "name is incorrect" }));
    assert_eq!(controller.phase(&form), SubmitPhase::Failed);

    let failures = failures.lock().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].values, json!({ "name": "x" }));
    assert_eq!(failures[0].error, error);
}

#[tokio::test(start_paused = true)]
async fn test_error_status_is_durable_without_timeout() {
    let form = RecordingForm::new(json!({}));
    let controller = SubmitController::new(reject);

    controller.submit(&form).await.unwrap_err();
    assert!(!controller.has_pending_reset());

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert!(form.status().error().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_error_timeout_restores_initial_status() {
    let form = RecordingForm::new(json!({}));
    let options = SubmitOptions::new().with_error_timeout(Duration::from_millis(200));
    let controller = SubmitController::with_options(reject, options);

    controller.submit(&form).await.unwrap_err();
    tokio::time::sleep(Duration::from_millis(250)).await;

    assert_eq!(form.status(), FormStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_success_callback_receives_result_and_values() {
    let form = MemoryForm::new(json!({ "name": "Ada" }));
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let options = SubmitOptions::new()
        .with_success_timeout(Duration::ZERO)
        .on_success(Callback::new(move |success: SubmitSuccess<MemoryForm>| {
            assert_eq!(success.values, json!({ "name": "Ada" }));
            assert_eq!(success.result["id"], json!(1));
            // The form already reflects the saved result
            assert_eq!(success.form.values(), success.result);
            counter.fetch_add(1, Ordering::SeqCst);
        }));
    let controller = SubmitController::with_options(save, options);

    form.handle_submit(&controller).await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(!controller.has_pending_reset());
}

#[tokio::test(start_paused = true)]
async fn test_reset_cancels_timer() {
    let form = RecordingForm::new(json!({ "name": "Ada" }));
    let controller = SubmitController::new(save);

    controller.submit(&form).await.unwrap();
    controller.reset(&form);

    assert!(!controller.has_pending_reset());
    assert_eq!(form.status(), FormStatus::Idle);

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(form.status_updates(), vec![FormStatus::Idle]);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_controller_cancels_timer() {
    let form = RecordingForm::new(json!({ "name": "Ada" }));
    let controller = SubmitController::new(save);

    controller.submit(&form).await.unwrap();
    drop(controller);

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(form.status().is_success());
    assert!(form.status_updates().is_empty());
}

#[test]
fn test_submit_without_runtime_keeps_status() {
    let form = RecordingForm::new(json!({ "name": "Ada" }));
    let controller = SubmitController::new(save);

    let result = futures::executor::block_on(controller.submit(&form));

    assert!(result.is_ok());
    assert!(form.status().is_success());
    assert!(!controller.has_pending_reset());
}
