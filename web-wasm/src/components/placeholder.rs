//! 未実装タブの表示

use leptos::prelude::*;
use brand_onboarding_common::{PlaceholderContent, Tab};

#[component]
pub fn Placeholder(tab: Tab) -> impl IntoView {
    tab.placeholder().map(|content| {
        view! {
            <h1>{content.title}</h1>
            <p class="tagline">{PlaceholderContent::TAGLINE}</p>
            <div class="App-card">
                <h2>{content.heading}</h2>
                <p>{content.body}</p>
            </div>
        }
    })
}
