//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::pages::HomePage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div dir="rtl" class="app font-tajawal">
                <Routes fallback=|| view! { <p>"الصفحة غير موجودة"</p> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </div>
        </Router>
    }
}
