//! ShadCN-style reusable UI components.
//!
//! # Components
//!
//! - [`Button`]: Clickable button with variants
//! - [`Card`], [`CardHeader`], [`CardContent`]: Card container
//! - [`Badge`]: Yes/No pill
//! - [`icons`]: SVG icon components

mod badge;
mod button;
mod card;
mod icons;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant, button_classes};
pub use card::{Card, CardContent, CardHeader};
pub use icons::*;
