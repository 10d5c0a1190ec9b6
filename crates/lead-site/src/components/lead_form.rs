//! Lead capture form

use lead_core::{Field, HttpSubmitter, LeadForm, SubmissionError, Submitter};
use leptos::*;
use crate::components::{FormField, HoneypotField, ThankYouPanel};
use crate::config;

const OPTIONAL_SECTION_CLASS: &str =
    "grid transition-[max-height,opacity] duration-700 ease-in-out overflow-hidden";

#[component]
pub fn LeadFormView() -> impl IntoView {
    let submit_config = config::submit_config();
    let form = create_rw_signal(LeadForm::with_config(config::form_config(), &submit_config));

    let origin = window().location().origin().ok();
    let submitter = HttpSubmitter::from_config(&submit_config, origin.as_deref()).map_err(|e| e.to_string());
    if let Err(reason) = &submitter {
        tracing::error!("Submission endpoint unavailable: {}", reason);
    }
    let submitter = store_value(submitter);

    let is_submitting = move || form.with(LeadForm::is_submitting);
    let show_optional = move || form.with(LeadForm::show_optional);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // invalid input leaves its errors on the form and sends nothing
        let Some(Ok(payload)) = form.try_update(LeadForm::begin_submit) else {
            return;
        };

        let submitter = submitter.get_value();
        spawn_local(async move {
            let result = match submitter {
                Ok(submitter) => submitter.submit(&payload).await,
                Err(reason) => Err(SubmissionError::Endpoint(reason)),
            };
            form.update(|f| {
                f.finish_submit(result);
            });
        });
    };

    let on_toggle = move |_| {
        form.update(|f| {
            f.toggle_optional_section();
        });
    };

    view! {
        <Show
            when=move || !form.with(LeadForm::is_submitted)
            fallback=|| view! { <ThankYouPanel/> }
        >
            <form
                on:submit=on_submit
                novalidate=true
                class="w-full max-w-lg p-6 border rounded-2xl shadow space-y-4"
            >
                <div class="flex items-center justify-center gap-4">
                    <div class="w-1/2">
                        <FormField form=form field=Field::FirstName/>
                    </div>
                    <div class="w-1/2">
                        <FormField form=form field=Field::LastName/>
                    </div>
                </div>

                <FormField form=form field=Field::Email/>

                <Show when=move || form.with(|f| f.schema().honeypot())>
                    <HoneypotField form=form/>
                </Show>

                <button
                    type="button"
                    class="flex items-center gap-2 text-imperio-gold hover:underline font-bold transition-transform duration-200 hover:scale-105"
                    aria-expanded=move || show_optional().to_string()
                    on:click=on_toggle
                >
                    {move || if show_optional() {
                        "Hide additional fields".into_view()
                    } else {
                        view! {
                            <svg
                                xmlns="http://www.w3.org/2000/svg"
                                class="h-5 w-5"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                                stroke-width="2"
                            >
                                <path stroke-linecap="round" stroke-linejoin="round" d="M12 4v16m8-8H4"/>
                            </svg>
                            "Add more information"
                        }
                        .into_view()
                    }}
                </button>

                // Stays mounted so values survive collapsing
                <div class=move || {
                    let state = if show_optional() { "max-h-screen opacity-100" } else { "max-h-0 opacity-0" };
                    format!("{} {}", OPTIONAL_SECTION_CLASS, state)
                }>
                    <div class="space-y-4">
                        {Field::OPTIONAL
                            .into_iter()
                            .map(|field| view! { <FormField form=form field=field/> })
                            .collect_view()}
                    </div>
                </div>

                <button
                    type="submit"
                    disabled=is_submitting
                    class="bg-imperio-blue text-imperio-gold px-4 py-2 rounded hover:bg-imperio-gold hover:text-imperio-blue"
                >
                    {move || if is_submitting() { "Submitting..." } else { "Submit" }}
                </button>
            </form>
        </Show>
    }
}
