//! Product Card Compound Component
//!
//! `ProductCard` is the root: it provides a `ProductCardContext` and renders
//! whatever parts it is given, in the given order. Each part is an ordinary
//! component with its own props and works outside a card as well.
//!
//! Parts are grouped in the `ProductCardPart` registry. Adding a part:
//! 1. write the component with its props,
//! 2. add a registry variant and its name,
//! 3. handle the variant in `CardPartView`.

use leptos::context::Provider;
use leptos::prelude::*;

use crate::error::{AppError, AppResult};
use crate::models::Product;

/// Shared by all parts of one card. Currently carries nothing; reserved for
/// card-wide state such as size or selection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProductCardContext {}

/// Registry of the parts a product card can be built from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProductCardPart {
    Image,
    Title,
    Description,
    Price,
    Rating,
    Button,
}

impl ProductCardPart {
    pub const ALL: [ProductCardPart; 6] = [
        Self::Image,
        Self::Title,
        Self::Description,
        Self::Price,
        Self::Rating,
        Self::Button,
    ];

    /// Name used in the configured layout
    pub fn name(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Title => "title",
            Self::Description => "description",
            Self::Price => "price",
            Self::Rating => "rating",
            Self::Button => "button",
        }
    }

    /// BEM element class
    pub fn class_name(self) -> String {
        format!("product-card__{}", self.name())
    }

    pub fn from_name(name: &str) -> AppResult<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| AppError::UnknownPart(name.to_string()))
    }

    /// Parse a layout, keeping order and repeats as written
    pub fn parse_layout<S: AsRef<str>>(names: &[S]) -> AppResult<Vec<Self>> {
        names.iter().map(|n| Self::from_name(n.as_ref())).collect()
    }
}

/// "$129.99"
pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Filled and empty stars, `value` clamped to `max`
pub fn rating_stars(value: u8, max: u8) -> String {
    let filled = value.min(max) as usize;
    let empty = max as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// Whether the part is rendered inside a `ProductCard`
fn in_card() -> bool {
    use_context::<ProductCardContext>().is_some()
}

fn part_class(part: ProductCardPart) -> String {
    if in_card() {
        part.class_name()
    } else {
        format!("{} standalone", part.class_name())
    }
}

// ========================
// Root
// ========================

/// Card container; renders its children inside the shared context.
/// The context is scoped to the children so it never reaches sibling cards
/// or standalone parts rendered after this one.
#[component]
pub fn ProductCard(
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <article class="product-card">
            <Provider value=ProductCardContext::default()>
                {children.map(|children| children())}
            </Provider>
        </article>
    }
}

// ========================
// Parts
// ========================

#[component]
pub fn ProductCardImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
) -> impl IntoView {
    view! { <img class=part_class(ProductCardPart::Image) src=src alt=alt /> }
}

#[component]
pub fn ProductCardTitle(#[prop(into)] text: String) -> impl IntoView {
    view! { <h3 class=part_class(ProductCardPart::Title)>{text}</h3> }
}

#[component]
pub fn ProductCardDescription(#[prop(into)] text: String) -> impl IntoView {
    view! { <p class=part_class(ProductCardPart::Description)>{text}</p> }
}

#[component]
pub fn ProductCardPrice(cents: u32) -> impl IntoView {
    view! { <span class=part_class(ProductCardPart::Price)>{format_price(cents)}</span> }
}

#[component]
pub fn ProductCardRating(
    value: u8,
    #[prop(default = 5)] max: u8,
) -> impl IntoView {
    view! {
        <span class=part_class(ProductCardPart::Rating) title=format!("{} of {}", value.min(max), max)>
            {rating_stars(value, max)}
        </span>
    }
}

#[component]
pub fn ProductCardButton(
    #[prop(into)] label: String,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button class=part_class(ProductCardPart::Button) on:click=move |_| on_click.run(())>
            {label}
        </button>
    }
}

/// Render one registry part from a product
#[component]
pub fn CardPartView(
    part: ProductCardPart,
    product: Product,
    #[prop(into)] on_buy: Callback<u32>,
) -> impl IntoView {
    let id = product.id;
    match part {
        ProductCardPart::Image => view! {
            <ProductCardImage src=product.image alt=product.name />
        }.into_any(),
        ProductCardPart::Title => view! { <ProductCardTitle text=product.name /> }.into_any(),
        ProductCardPart::Description => view! {
            <ProductCardDescription text=product.description />
        }.into_any(),
        ProductCardPart::Price => view! { <ProductCardPrice cents=product.price_cents /> }.into_any(),
        ProductCardPart::Rating => view! { <ProductCardRating value=product.rating /> }.into_any(),
        ProductCardPart::Button => view! {
            <ProductCardButton label="Add to cart" on_click=move |_| on_buy.run(id) />
        }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    const STANDALONE_PRICE: &str = "product-card__price standalone";

    /// Build a card whose children record the classes of `parts`, in order
    fn card_with_parts(parts: Vec<ProductCardPart>) -> Vec<String> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let children: Children = Box::new(move || {
            let mut sink = sink.lock().unwrap();
            for part in parts {
                sink.push(part_class(part));
            }
            ().into_any()
        });
        let _card = ProductCard(ProductCardProps { children: Some(children) });
        let classes = seen.lock().unwrap().clone();
        classes
    }

    #[test]
    fn test_empty_card_keeps_context_inside() {
        let owner = Owner::new();
        owner.set();

        let _card = ProductCard(ProductCardProps { children: None });
        assert!(use_context::<ProductCardContext>().is_none());
    }

    #[test]
    fn test_standalone_part_after_card_stays_standalone() {
        let owner = Owner::new();
        owner.set();

        assert_eq!(part_class(ProductCardPart::Price), STANDALONE_PRICE);
        let _card = ProductCard(ProductCardProps { children: None });
        assert_eq!(part_class(ProductCardPart::Price), STANDALONE_PRICE);
    }

    #[test]
    fn test_parts_inside_card_see_context_in_given_order() {
        let owner = Owner::new();
        owner.set();

        let classes = card_with_parts(vec![ProductCardPart::Price, ProductCardPart::Title]);
        assert_eq!(classes, vec!["product-card__price", "product-card__title"]);

        // A second card and a later standalone part are unaffected by the first
        let classes = card_with_parts(vec![ProductCardPart::Rating]);
        assert_eq!(classes, vec!["product-card__rating"]);
        assert_eq!(part_class(ProductCardPart::Price), STANDALONE_PRICE);
    }

    #[test]
    fn test_empty_layout_card_records_nothing() {
        let owner = Owner::new();
        owner.set();

        assert!(card_with_parts(vec![]).is_empty());
    }

    #[test]
    fn test_registry_names_round_trip() {
        for part in ProductCardPart::ALL {
            assert_eq!(ProductCardPart::from_name(part.name()).unwrap(), part);
        }
    }

    #[test]
    fn test_parse_layout_keeps_order_and_subset() {
        let layout = ProductCardPart::parse_layout(&["price", " Title ", "image"]).unwrap();
        assert_eq!(layout, vec![ProductCardPart::Price, ProductCardPart::Title, ProductCardPart::Image]);
    }

    #[test]
    fn test_parse_empty_layout() {
        let empty: [&str; 0] = [];
        assert!(ProductCardPart::parse_layout(&empty).unwrap().is_empty());
    }

    #[test]
    fn test_parse_layout_rejects_unknown_part() {
        let err = ProductCardPart::parse_layout(&["title", "badge"]).unwrap_err();
        assert!(matches!(err, AppError::UnknownPart(ref name) if name == "badge"));
    }

    #[test]
    fn test_class_name() {
        assert_eq!(ProductCardPart::Price.class_name(), "product-card__price");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12999), "$129.99");
        assert_eq!(format_price(5), "$0.05");
        assert_eq!(format_price(3400), "$34.00");
    }

    #[test]
    fn test_rating_stars() {
        assert_eq!(rating_stars(3, 5), "★★★☆☆");
        assert_eq!(rating_stars(0, 5), "☆☆☆☆☆");
        assert_eq!(rating_stars(9, 5), "★★★★★");
    }
}
