//! メインアプリケーションコンポーネント

use leptos::logging::{error, log};
use leptos::prelude::*;
use brand_onboarding_common::{FileHandle, Tab, ViewState};
use crate::api::upload::upload_file;
use crate::components::{
    header::Header,
    placeholder::Placeholder,
    results_table::ResultsTable,
    template_card::TemplateCard,
    upload_area::UploadArea,
};
use crate::export::download::download_template;

/// ブラウザで選択されたファイル
#[derive(Clone, Debug)]
pub struct BrowserFile(pub web_sys::File);

impl FileHandle for BrowserFile {
    fn file_name(&self) -> String {
        self.0.name()
    }
}

/// アプリケーションの状態
pub type OnboardingState = ViewState<BrowserFile>;

/// 状態遷移を適用
fn apply(state: &mut OnboardingState, transition: impl FnOnce(OnboardingState) -> OnboardingState) {
    let current = std::mem::take(state);
    *state = transition(current);
}

fn set_body_class(class: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        body.set_class_name(class);
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // Fileはスレッド間で共有できないのでローカル保持
    let (state, set_state) = signal_local(OnboardingState::new());

    // テーマをbodyに反映
    Effect::new(move |_| {
        let class = state.with(|s| s.theme.css_class());
        set_body_class(&class);
    });
    on_cleanup(|| set_body_class(""));

    // ファイル選択ハンドラ
    let on_file_change = move |file: Option<BrowserFile>| {
        set_state.update(|s| apply(s, |s| s.select_file(file)));
    };

    // アップロードハンドラ
    let on_upload = move |_| {
        let mut to_send = None;
        set_state.update(|s| {
            let (next, file) = std::mem::take(s).submit();
            *s = next;
            to_send = file;
        });

        let Some(file) = to_send else {
            return;
        };

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = upload_file(&file).await;
            match &outcome {
                Ok(rows) => log!("Upload results: {:?}", rows),
                Err(e) => error!("Error: {}", e),
            }
            set_state.update(|s| apply(s, |s| s.settle(outcome)));
        });
    };

    // テンプレートダウンロードハンドラ
    let on_download = move |_| {
        if let Err(e) = download_template() {
            error!("Template download failed: {:?}", e);
        }
    };

    let on_switch_tab = move |tab: Tab| {
        set_state.update(|s| apply(s, |s| s.switch_tab(tab)));
    };

    let on_toggle_theme = move |_| {
        set_state.update(|s| apply(s, |s| s.toggle_theme()));
    };

    view! {
        <div class=move || format!("App {}", state.with(|s| s.theme.css_class()))>
            <Header
                state=state
                on_switch_tab=on_switch_tab
                on_toggle_theme=on_toggle_theme
            />
            <div class="App-body">
                <main class="App-main">
                    {move || {
                        let tab = state.with(|s| s.active_tab);
                        if tab.is_placeholder() {
                            return view! { <Placeholder tab=tab /> }.into_any();
                        }
                        view! {
                            <h1>"Brand Onboarding"</h1>
                            <p class="tagline">"Create brand profiles in bulk"</p>

                            <UploadArea
                                state=state
                                on_file_change=on_file_change
                                on_upload=on_upload
                            />

                            <ResultsTable state=state />

                            <TemplateCard on_download=on_download />
                        }.into_any()
                    }}
                </main>
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn browser_file(name: &str) -> BrowserFile {
        let bits = js_sys::Array::of1(&JsValue::from_str("brand_name\nAcme"));
        BrowserFile(web_sys::File::new_with_str_sequence(&bits, name).unwrap())
    }

    #[wasm_bindgen_test]
    fn test_browser_file_name() {
        assert_eq!(browser_file("brands.csv").file_name(), "brands.csv");
    }

    #[wasm_bindgen_test]
    fn test_browser_file_flows_through_submit() {
        let mut state = OnboardingState::new();
        apply(&mut state, |s| s.select_file(Some(browser_file("brands.csv"))));
        let (state, to_send) = state.submit();
        assert!(state.is_loading());
        assert_eq!(to_send.map(|f| f.file_name()).as_deref(), Some("brands.csv"));

        let (state, to_send) = OnboardingState::new()
            .select_file(Some(browser_file("data.txt")))
            .submit();
        assert!(to_send.is_none());
        assert!(state.error().is_some());
    }

    #[wasm_bindgen_test]
    fn test_app_renders_without_image_assets() {
        let _mounted = leptos::mount::mount_to_body(App);
        let document = web_sys::window().unwrap().document().unwrap();

        assert!(document.query_selector("img").unwrap().is_none());
        assert!(document.query_selector(".App-logo").unwrap().is_some());
        assert!(document.query_selector(".upload-container").unwrap().is_some());
    }
}
