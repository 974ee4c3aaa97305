//! CSVテンプレート案内コンポーネント

use leptos::prelude::*;
use brand_onboarding_common::template::{DEFAULTS_NOTE, OPTIONAL_FIELDS, PHONE_NOTE, REQUIRED_FIELDS};

#[component]
pub fn TemplateCard<FD>(on_download: FD) -> impl IntoView
where
    FD: Fn(()) + 'static + Clone,
{
    view! {
        <div class="App-card csv-template-info">
            <h3>"CSV Template"</h3>
            <p class="template-instruction">
                <strong>"Required fields:"</strong>
                " "
                {REQUIRED_FIELDS.join(", ")}
                <br />
                <strong>"Optional fields:"</strong>
                " "
                {OPTIONAL_FIELDS.join(", ")}
                <br />
                <br />
                {DEFAULTS_NOTE}
                <br />
                <br />
                <strong>"Note:"</strong>
                " "
                {PHONE_NOTE}
            </p>
            <div class="template-actions">
                <button on:click={
                    let on_download = on_download.clone();
                    move |_| on_download(())
                }>
                    "Download Template"
                </button>
            </div>
        </div>
    }
}
