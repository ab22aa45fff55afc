//! Button component with variants and sizes.

use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Secondary action with a visible border.
    Outline,
    /// Borderless icon button.
    Ghost,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary text-white shadow-lg hover:bg-primaryMuted hover:shadow-xl",
            Self::Outline => {
                "bg-panel border-2 border-panelBorder text-textPrimary shadow-lg hover:bg-panelMuted"
            }
            Self::Ghost => "border border-panelBorder bg-transparent hover:bg-panelMuted",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Medium button (default).
    #[default]
    Md,
    /// Large call-to-action button.
    Lg,
    /// Icon-only button.
    Icon,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Md => "h-10 px-4 text-sm",
            Self::Lg => "px-8 py-3 text-base",
            Self::Icon => "p-2",
        }
    }
}

/// Full class list for a button.
///
/// Exposed for raw `<button>` elements that carry HTMX attributes.
#[must_use]
pub fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let base_classes = "inline-flex items-center justify-center rounded-xl font-semibold \
                        transition-all focus-visible:outline-none focus-visible:ring-2 \
                        focus-visible:ring-primary focus-visible:ring-offset-2 \
                        disabled:cursor-not-allowed disabled:opacity-40";

    format!(
        "{} {} {} {}",
        base_classes,
        variant.classes(),
        size.classes(),
        extra
    )
}

/// ShadCN-style button component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant=ButtonVariant::Primary size=ButtonSize::Lg button_type="submit">
///         "Analyze Incident"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Element id.
    #[prop(optional)]
    id: Option<&'static str>,
    /// Alpine expression bound to `disabled`.
    #[prop(optional)]
    disabled_when: Option<&'static str>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let classes = button_classes(variant, size, class);

    view! {
        <button
            type=button_type
            id=id
            class=classes
            x-bind:disabled=disabled_when
        >
            {children()}
        </button>
    }
}
