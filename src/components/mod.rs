//! UI Components
//!
//! Reusable presentational Leptos components. None of them own data; they
//! render their props and report user intent through callbacks.

mod search_form;
mod movie_list;
mod selector_options;
mod radio_group;
mod checkbox_group;
mod product_card;
mod performance;
mod tutorial_note;
mod demo_tab_bar;
mod confirm_button;

pub use search_form::SearchForm;
pub use movie_list::MovieList;
pub use radio_group::RadioGroup;
pub use checkbox_group::CheckboxGroup;
pub use product_card::{
    format_price, CardPartView, ProductCard, ProductCardButton, ProductCardDescription,
    ProductCardImage, ProductCardPart, ProductCardPrice, ProductCardRating, ProductCardTitle,
};
pub use performance::{DeferredSection, LowUrgencyFilter, MemoizedTotal, StableCallbackList};
pub use tutorial_note::TutorialNote;
pub use demo_tab_bar::{DemoTab, DemoTabBar};
pub use confirm_button::ConfirmButton;
