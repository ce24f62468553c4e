//! Primary action button.

use leptos::prelude::*;

/// ShadCN-style button component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button button_type="submit" disabled=loading>
///         "Send"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Whether the button is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center gap-2 rounded-lg px-6 py-3 \
                        font-semibold text-white bg-blue-600 hover:bg-blue-700 \
                        transition-colors duration-200 focus:outline-none focus:ring-2 \
                        focus:ring-blue-500 focus:ring-offset-2 focus:ring-offset-gray-950 \
                        disabled:bg-gray-700 disabled:cursor-not-allowed";

    let classes = format!("{base_classes} {class}");

    view! {
        <button type=button_type class=classes disabled=disabled>
            {children()}
        </button>
    }
}
