//! Lead capture page

use leptos::*;
use crate::components::LeadFormView;

#[component]
pub fn LeadPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center p-4 bg-white text-gray-800">
            <LeadFormView/>
        </div>
    }
}
