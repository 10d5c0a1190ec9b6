//! Confirmation shown once a lead is submitted

use leptos::*;

#[component]
pub fn ThankYouPanel() -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="bg-green-100 text-green-800 p-6 rounded-xl shadow">
                <h2 class="text-xl font-semibold">"Thanks for submitting!"</h2>
                <p class="text-sm mt-2">"We'll be in touch shortly."</p>
            </div>
        </div>
    }
}
