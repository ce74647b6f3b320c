//! Change handlers
//!
//! Visual components report new values through value-only callbacks. These
//! adapters turn such a callback into a field update on the form, then
//! forward the raw value to the caller's own handler, if any.

use log::debug;
use serde_json::Value;

use super::handle::FormHandle;
use crate::component::Callback;

/// Change handler committing the value to `path`, then calling `user_on_change`
pub fn on_change_adapter<F>(form: &F, path: &str, user_on_change: Option<Callback<Value>>) -> Callback<Value>
where
    F: FormHandle + Clone + 'static,
{
    let form = form.clone();
    let path = path.to_string();
    Callback::new(move |value: Value| {
        form.set_field_value(&path, value.clone());
        if let Some(hook) = &user_on_change {
            hook.call(value);
        }
    })
}

/// Handler for a debounced text field.
///
/// The visual component applies its own delay and minimum length; the
/// returned callback commits whatever value it is finally handed.
pub fn on_debounce_adapter<F>(form: &F, path: &str, on_debounce: Option<Callback<Value>>) -> Callback<Value>
where
    F: FormHandle + Clone + 'static,
{
    on_change_adapter(form, path, on_debounce)
}

/// Blur handler marking `path` touched and validating, then calling `user_on_blur`
pub fn on_blur_adapter<F>(form: &F, path: &str, user_on_blur: Option<Callback<()>>) -> Callback<()>
where
    F: FormHandle + Clone + 'static,
{
    let form = form.clone();
    let path = path.to_string();
    Callback::new(move |()| {
        form.set_field_touched(&path, true, true);
        if let Some(hook) = &user_on_blur {
            hook.call(());
        }
    })
}

/// `selection` with `value` removed if present, otherwise appended
pub fn toggle_selection(selection: &[String], value: &str) -> Vec<String> {
    if selection.iter().any(|item| item == value) {
        selection.iter().filter(|item| *item != value).cloned().collect()
    } else {
        let mut next = selection.to_vec();
        next.push(value.to_string());
        next
    }
}

/// String entries of a group selection; anything other than an array is empty
pub fn current_selection(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Handler for a checkbox in a group: toggles `value` in the selection stored
/// at `path` and marks `group_name` touched without validating.
pub fn on_group_toggle<F>(form: &F, path: &str, group_name: &str, value: &str) -> Callback<()>
where
    F: FormHandle + Clone + 'static,
{
    let form = form.clone();
    let path = path.to_string();
    let group_name = group_name.to_string();
    let value = value.to_string();
    Callback::new(move |()| {
        let selection = current_selection(form.value(&path).as_ref());
        let next = toggle_selection(&selection, &value);
        debug!("Group {group_name}: toggled {value}, {} selected", next.len());
        form.set_field_value(&path, Value::from(next));
        form.set_field_touched(&group_name, true, false);
    })
}
