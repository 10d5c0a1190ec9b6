//! Form input components

use lead_core::{Field, LeadForm};
use leptos::*;

const INPUT_CLASS: &str = "w-full border p-2 rounded";

/// Labelled input bound to one lead form field, with its inline error
#[component]
pub fn FormField(form: RwSignal<LeadForm>, field: Field) -> impl IntoView {
    let value = move || form.with(|f| f.value(field).to_string());
    let error = move || form.with(|f| f.error(field).map(|e| e.to_string()));
    let disabled = move || form.with(LeadForm::is_submitting);
    let on_input = move |ev| {
        let value = event_target_value(&ev);
        form.update(|f| f.update_field(field, value));
    };

    let label_class = if field.is_required() {
        "block font-bold mb-1"
    } else {
        "block font-medium mb-1"
    };
    let placeholder = field.placeholder().unwrap_or_default();

    let control = if field.is_multiline() {
        view! {
            <textarea
                id=field.key()
                name=field.key()
                rows="3"
                class=INPUT_CLASS
                placeholder=placeholder
                disabled=disabled
                on:input=on_input
                prop:value=value
            ></textarea>
        }
        .into_view()
    } else {
        view! {
            <input
                id=field.key()
                name=field.key()
                type=field.input_type()
                class=INPUT_CLASS
                placeholder=placeholder
                disabled=disabled
                on:input=on_input
                prop:value=value
            />
        }
        .into_view()
    };

    view! {
        <div>
            <label for=field.key() class=label_class>{field.label()}</label>
            {control}
            {move || error().map(|message| view! {
                <p class="text-sm text-red-500">{message}</p>
            })}
        </div>
    }
}

/// Off-screen trap for automated form fillers
#[component]
pub fn HoneypotField(form: RwSignal<LeadForm>) -> impl IntoView {
    let field = Field::Honey;

    view! {
        <div class="absolute left-[-9999px]" aria-hidden="true">
            <label for=field.key()>{field.label()}</label>
            <input
                id=field.key()
                name=field.key()
                type="text"
                tabindex="-1"
                autocomplete="off"
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.update_field(field, value));
                }
                prop:value=move || form.with(|f| f.value(field).to_string())
            />
        </div>
    }
}
