//! Decorative strip of book covers scrolling across the page.

#[cfg(test)]
#[path = "floating_images_test.rs"]
mod floating_images_test;

use leptos::prelude::*;

/// Number of distinct covers in the strip.
const LANE_SIZE: usize = 8;

/// Cover URLs for the marquee: a fixed lane derived from `1..=lane_size`,
/// repeated once so the CSS animation wraps without a visible seam.
pub fn marquee_urls(lane_size: usize) -> Vec<String> {
    let lane: Vec<String> = (1..=lane_size)
        .map(|n| format!("/static/covers/float{n}.jpg"))
        .collect();
    let mut urls = lane.clone();
    urls.extend(lane);
    urls
}

/// Continuous horizontal carousel of cover images. Purely decorative; a
/// cover that fails to load hides itself without touching its siblings.
#[component]
pub fn FloatingImages() -> impl IntoView {
    view! {
        <div class="floating-images" aria-hidden="true">
            <div class="floating-images__track">
                {marquee_urls(LANE_SIZE)
                    .into_iter()
                    .map(|src| {
                        view! {
                            <img
                                class="floating-images__cover"
                                src=src
                                alt=""
                                on:error=move |ev| hide_target(&ev)
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Hide just the element that failed to load; siblings keep scrolling.
fn hide_target(ev: &leptos::ev::ErrorEvent) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        if let Some(img) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = img.style().set_property("display", "none");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
    }
}
