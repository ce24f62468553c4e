//! Input component for text fields.

use leptos::prelude::*;

/// Non-blank check enforced by the browser before a plain form submits.
pub const NON_BLANK_PATTERN: &str = r".*\S.*";

/// Single-line text input.
///
/// The value is rendered server-side, so a failed submission keeps the draft.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Input
///         name="message"
///         placeholder="Type your message here..."
///         value=draft
///     />
/// }
/// ```
#[component]
pub fn Input(
    /// Input name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Input ID attribute.
    #[prop(default = "")]
    id: &'static str,
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value.
    #[prop(into, default = String::new())]
    value: String,
    /// Whether the input is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Reject empty and whitespace-only values.
    #[prop(default = false)]
    non_blank: bool,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_classes = "flex-1 px-4 py-3 bg-gray-900 border border-gray-800 rounded-lg \
                        text-white placeholder-gray-500 focus:outline-none focus:ring-2 \
                        focus:ring-blue-500 focus:border-transparent \
                        disabled:opacity-50 disabled:cursor-not-allowed";

    let classes = format!("{base_classes} {class}");
    let pattern = non_blank.then_some(NON_BLANK_PATTERN);

    view! {
        <input
            type="text"
            class=classes
            name=name
            id=id
            placeholder=placeholder
            value=value
            disabled=disabled
            required=non_blank
            pattern=pattern
            autocomplete="off"
        />
    }
}
