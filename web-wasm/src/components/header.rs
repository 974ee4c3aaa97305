//! ヘッダーコンポーネント（ナビゲーション・テーマ切替）

use leptos::prelude::*;
use brand_onboarding_common::Tab;
use crate::app::OnboardingState;

#[component]
pub fn Header<FS, FT>(
    state: ReadSignal<OnboardingState, LocalStorage>,
    on_switch_tab: FS,
    on_toggle_theme: FT,
) -> impl IntoView
where
    FS: Fn(Tab) + 'static + Clone,
    FT: Fn(()) + 'static + Clone,
{
    let theme = move || state.with(|s| s.theme);

    view! {
        <header class="App-header">
            <div class="App-header-left">
                <span class="App-logo">"Brand Onboarding"</span>
                <span class="App-header-tagline">"This is gonna be good®"</span>
            </div>
            <div class="App-header-right">
                <nav class="App-nav">
                    {Tab::ALL
                        .into_iter()
                        .map(|tab| {
                            let on_switch_tab = on_switch_tab.clone();
                            view! {
                                <button
                                    class=move || {
                                        if state.with(|s| s.active_tab) == tab {
                                            "nav-button active"
                                        } else {
                                            "nav-button"
                                        }
                                    }
                                    on:click=move |_| on_switch_tab(tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <button
                    class="theme-toggle"
                    aria-label=move || theme().toggle_aria_label()
                    on:click={
                        let on_toggle_theme = on_toggle_theme.clone();
                        move |_| on_toggle_theme(())
                    }
                >
                    {move || theme().toggle_label()}
                </button>
            </div>
        </header>
    }
}
