//! アップロードエリアコンポーネント

use leptos::prelude::*;
use web_sys::HtmlInputElement;
use crate::app::{BrowserFile, OnboardingState};

#[component]
pub fn UploadArea<FC, FU>(
    state: ReadSignal<OnboardingState, LocalStorage>,
    on_file_change: FC,
    on_upload: FU,
) -> impl IntoView
where
    FC: Fn(Option<BrowserFile>) + 'static + Clone,
    FU: Fn(()) + 'static + Clone,
{
    let is_loading = move || state.with(|s| s.is_loading());
    let can_submit = move || state.with(|s| s.can_submit());
    let message = move || state.with(|s| s.message.clone());
    let error = move || state.with(|s| s.error().map(|e| e.to_string()));

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0)).map(BrowserFile);
        on_file_change(file);
    };

    view! {
        <div class="App-card">
            <h2>"Upload CSV File"</h2>
            <p class="instruction">"Please upload a CSV file with the required fields."</p>
            <div class="upload-container">
                <input
                    type="file"
                    accept=".csv"
                    on:change=on_change
                    disabled=is_loading
                />
                <button
                    disabled=move || !can_submit()
                    on:click={
                        let on_upload = on_upload.clone();
                        move |_| on_upload(())
                    }
                >
                    {move || if is_loading() { "Processing..." } else { "Upload" }}
                </button>
            </div>

            {move || message().map(|m| view! { <div class="message">{m}</div> })}

            {move || error().map(|e| view! { <div class="error-message">{e}</div> })}
        </div>
    }
}
