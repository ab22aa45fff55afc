//! Badge component for yes/no flags.

use leptos::prelude::*;

/// Badge visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Highlighted badge, used for "Yes".
    #[default]
    Default,
    /// Muted badge, used for "No".
    Secondary,
}

impl BadgeVariant {
    /// Variant for a boolean flag.
    #[must_use]
    pub fn for_flag(flag: bool) -> Self {
        if flag { Self::Default } else { Self::Secondary }
    }

    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-primary/10 text-primary",
            Self::Secondary => "bg-panelMuted text-textMuted",
        }
    }
}

/// Badge component for displaying a short status.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Badge variant=BadgeVariant::for_flag(true)>"Yes"</Badge>
/// }
/// ```
#[component]
pub fn Badge(
    /// Badge variant.
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Badge content.
    children: Children,
) -> impl IntoView {
    let base_classes = "inline-block mt-1 rounded-full px-3 py-1 text-sm font-medium";

    let classes = format!("{} {} {}", base_classes, variant.classes(), class);

    view! {
        <span class=classes>
            {children()}
        </span>
    }
}
