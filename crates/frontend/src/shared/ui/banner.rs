use super::status_badge::Tone;
use leptos::prelude::*;

/// Non-interactive notice shown above document content
#[component]
pub fn InfoBanner(tone: Tone, children: Children) -> impl IntoView {
    let style = match tone {
        Tone::Warning => "background:var(--color-warning-50);border:1px solid var(--color-warning-100);color:var(--color-warning-700);",
        Tone::Danger => "background:var(--color-error-50);border:1px solid var(--color-error-100);color:var(--color-error);",
        Tone::Success => "background:var(--color-success-50);border:1px solid var(--color-success-100);color:var(--color-success-700);",
        _ => "background:var(--color-bg-secondary);border:1px solid var(--color-border-lighter);color:var(--color-text-secondary);",
    };

    view! {
        <div
            class=format!("banner banner--{}", tone.modifier())
            role="status"
            style=format!("padding:var(--spacing-md) var(--spacing-lg);border-radius:var(--radius-sm);font-size:var(--font-size-sm);{}", style)
        >
            {children()}
        </div>
    }
}
