//! Product Showcase Page
//!
//! Product cards assembled from compound parts: one written out by hand,
//! the rest driven by the configured layout, plus standalone parts.

use leptos::prelude::*;

use crate::api;
use crate::components::{
    CardPartView, ProductCard, ProductCardButton, ProductCardDescription, ProductCardImage,
    ProductCardPart, ProductCardPrice, ProductCardRating, ProductCardTitle, TutorialNote,
};
use crate::context::use_app_context;

#[component]
pub fn ProductShowcase() -> impl IntoView {
    let ctx = use_app_context();
    let products = api::list_products();
    let (cart, set_cart) = signal(Vec::<u32>::new());

    let on_buy = Callback::new(move |id: u32| {
        log::info!("[PRODUCTS] Added {} to cart", id);
        set_cart.update(|c| c.push(id));
    });

    let (layout, layout_error) = match ProductCardPart::parse_layout(&ctx.config().card_layout) {
        Ok(layout) => (layout, None),
        Err(e) => {
            log::warn!("[PRODUCTS] {}; using the full layout", e);
            (ProductCardPart::ALL.to_vec(), Some(e.to_string()))
        }
    };

    let featured = products[0].clone();
    let featured_id = featured.id;

    view! {
        <section class="demo-page product-showcase">
            <div class="demo">
                <p class="cart-count">{move || format!("Cart: {} item(s)", cart.get().len())}</p>

                <h3>"Composed by hand"</h3>
                <ProductCard>
                    <ProductCardImage src=featured.image.clone() alt=featured.name.clone() />
                    <ProductCardTitle text=featured.name.clone() />
                    <ProductCardRating value=featured.rating />
                    <ProductCardDescription text=featured.description.clone() />
                    <ProductCardPrice cents=featured.price_cents />
                    <ProductCardButton label="Add to cart" on_click=move |_| on_buy.run(featured_id) />
                </ProductCard>

                <h3>"Configured layout"</h3>
                {layout_error.map(|message| view! { <p class="load-error">{message}</p> })}
                <div class="card-grid">
                    {products.into_iter().map(|product| {
                        let parts = layout.clone();
                        view! {
                            <ProductCard>
                                {parts.into_iter().map(|part| view! {
                                    <CardPartView part=part product=product.clone() on_buy=on_buy />
                                }).collect_view()}
                            </ProductCard>
                        }
                    }).collect_view()}
                </div>

                <h3>"Standalone parts"</h3>
                <div class="standalone-parts">
                    <ProductCardPrice cents=featured.price_cents />
                    <ProductCardRating value=2 max=3 />
                    // Empty root renders an empty container
                    <ProductCard />
                </div>
            </div>

            <TutorialNote slug="compound-card" />
        </section>
    }
}
