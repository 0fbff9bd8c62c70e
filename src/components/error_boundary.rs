//! Page-level guard against render-time exceptions.
//!
//! Fetch rejections are handled inline by the components that fetch; this
//! boundary only covers errors raised while building the visual tree. It
//! reports each captured error to the console log, then substitutes a
//! static notice for the broken subtree. There is no recovery for the
//! mount; the caller remounts (key change) to try again.

use leptos::prelude::*;

use crate::state::fault::FaultState;

/// Wraps a subtree and replaces it with a fallback notice if rendering it
/// raises an error.
#[component]
pub fn PageErrorBoundary(children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=move |errors| {
            let mut fault = FaultState::default();
            for (_, error) in errors.get_untracked() {
                log::error!("render error caught by page boundary: {error}");
                fault.trip(error.to_string());
            }
            let detail = fault.message().map(str::to_owned);

            view! {
                <div class="error-boundary">
                    <h2 class="error-boundary__title">"Something went wrong."</h2>
                    <p class="error-boundary__message">
                        "This section failed to render. Reload the page to try again."
                    </p>
                    {detail
                        .map(|message| {
                            view! { <p class="error-boundary__detail">{message}</p> }
                        })}
                </div>
            }
        }>{children()}</ErrorBoundary>
    }
}
