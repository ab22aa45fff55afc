//! SVG icon components.
//!
//! Icons are rendered inline as SVG elements so they can be styled with
//! `currentColor`.

use leptos::prelude::*;

/// Icon size used when the caller passes no classes.
const ICON_SIZE: &str = "h-5 w-5";

/// Caller classes, or `default` when there are none.
fn sized<'a>(class: &'a str, default: &'a str) -> &'a str {
    if class.trim().is_empty() { default } else { class }
}

/// Loader/spinner icon.
#[component]
pub fn LoaderIcon(
    /// CSS classes, replacing the default size when set.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("{} animate-spin", sized(class, ICON_SIZE));

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=classes
        >
            <path d="M21 12a9 9 0 1 1-6.219-8.56" />
        </svg>
    }
}

/// Left chevron, used for "previous email".
#[component]
pub fn ChevronLeftIcon(
    /// CSS classes, replacing the default size when set.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = sized(class, ICON_SIZE).to_string();

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=classes
        >
            <path d="M15 19l-7-7 7-7" />
        </svg>
    }
}

/// Right chevron, used for "next email".
#[component]
pub fn ChevronRightIcon(
    /// CSS classes, replacing the default size when set.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = sized(class, ICON_SIZE).to_string();

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=classes
        >
            <path d="M9 5l7 7-7 7" />
        </svg>
    }
}

/// Upload/image placeholder icon for the drop zone.
#[component]
pub fn UploadIcon(
    /// CSS classes, replacing the default size when set.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("mx-auto {}", sized(class, "h-12 w-12"));

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 48 48"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=classes
        >
            <path d="M28 8H12a4 4 0 00-4 4v20m32-12v8m0 0v8a4 4 0 01-4 4H12a4 4 0 01-4-4v-4m32-4l-3.172-3.172a4 4 0 00-5.656 0L28 28M8 32l9.172-9.172a4 4 0 015.656 0L28 28m0 0l4 4m4-24h8m-4-4v8m-12 4h.02" />
        </svg>
    }
}

/// Sparkles/AI icon.
#[component]
pub fn SparklesIcon(
    /// CSS classes, replacing the default size when set.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = sized(class, ICON_SIZE).to_string();

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=classes
        >
            <path d="m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z" />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render;

    #[test]
    fn test_caller_class_replaces_default_size() {
        let html = render(|| view! { <UploadIcon class="h-8 w-8 text-textMuted" /> });
        assert!(html.contains(r#"class="mx-auto h-8 w-8 text-textMuted""#));
        assert!(!html.contains("h-12"));

        let html = render(|| view! { <LoaderIcon class="h-6 w-6" /> });
        assert!(html.contains(r#"class="h-6 w-6 animate-spin""#));
        assert!(!html.contains("h-5"));
    }

    #[test]
    fn test_default_size_without_class() {
        let html = render(|| view! { <ChevronLeftIcon /> });
        assert!(html.contains(r#"class="h-5 w-5""#));

        let html = render(|| view! { <UploadIcon /> });
        assert!(html.contains(r#"class="mx-auto h-12 w-12""#));
    }
}
