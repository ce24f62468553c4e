//! ShadCN-style reusable UI components.
//!
//! Rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`Button`]: Clickable button
//! - [`Card`], [`CardHeader`], [`CardContent`]: Card container
//! - [`Input`]: Text input field
//! - [`icons`]: SVG icon components

mod button;
mod card;
mod icons;
mod input;

pub use button::Button;
pub use card::{Card, CardContent, CardHeader};
pub use icons::*;
pub use input::Input;
