use leptos::*;

/// Full-screen notice shown over a form or page while a timed reset runs.
#[component]
pub fn StatusOverlay(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(optional)] success: bool,
) -> impl IntoView {
    let (icon, accent) = if success {
        ("✅", "text-status-success-text")
    } else {
        ("⚠️", "text-status-error-text")
    };
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50">
            <div class="bg-surface-elevated rounded-2xl shadow-xl px-10 py-8 text-center space-y-3">
                <div class="text-5xl">{icon}</div>
                <h3 class=format!("text-2xl font-bold {}", accent)>{title}</h3>
                <p class="text-fg-muted">{message}</p>
            </div>
        </div>
    }
}
