//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">
                <span class="footer__title">"Book Club"</span>
                <span class="footer__tagline">"Read together, one chapter at a time."</span>
            </div>
            <nav class="footer__links">
                <a href="/">"Books"</a>
                <a href="/about">"About"</a>
            </nav>
            <span class="footer__copyright">"© 2025 Book Club"</span>
        </footer>
    }
}
