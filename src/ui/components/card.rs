//! Card component with header and content.

use leptos::prelude::*;

/// Card container component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Card>
///         <CardHeader>
///             <h2>"Incident Report"</h2>
///         </CardHeader>
///         <CardContent>
///             <p>"Content goes here"</p>
///         </CardContent>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Element id, used as an HTMX swap target.
    #[prop(optional)]
    id: Option<&'static str>,
    /// Card content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "rounded-2xl border border-panelBorder bg-panel text-textPrimary shadow-lg {class}"
    );

    view! {
        <div id=id class=classes>
            {children()}
        </div>
    }
}

/// Card header section.
#[component]
pub fn CardHeader(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Header content.
    children: Children,
) -> impl IntoView {
    let classes = format!("flex items-center justify-between px-8 pt-8 pb-6 {class}");

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Card content section.
#[component]
pub fn CardContent(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Content.
    children: Children,
) -> impl IntoView {
    let classes = format!("px-8 pb-8 {class}");

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}
