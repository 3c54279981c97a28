//! Performance Demos
//!
//! One component per technique:
//! - `DeferredSection`: placeholder first, content after a one-time async load
//! - `MemoizedTotal`: derived value that skips work on value-equal inputs
//! - `StableCallbackList`: one `Callback` shared by every row
//! - `LowUrgencyFilter`: `Transition` keeps old rows up and exposes a pending flag

use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::api;
use crate::context::use_app_context;
use crate::models::Product;

/// Delay of each low-urgency filter pass
const FILTER_DELAY_MS: u32 = 150;
/// Rows shown from a filter result
const VISIBLE_ROWS: usize = 100;

// ========================
// Pure Helpers
// ========================

/// Sum of prices after a percentage discount, rounded down to whole cents
pub fn cart_total(products: &[Product], discount_pct: u8) -> u32 {
    let gross: u64 = products.iter().map(|p| p.price_cents as u64).sum();
    let pct = discount_pct.min(100) as u64;
    (gross * (100 - pct) / 100) as u32
}

/// Memo of `cart_total`. The discount passes through its own memo first, so
/// setting it to the value it already has does not recompute the total.
/// `on_compute` runs on every recomputation.
pub fn memo_cart_total(
    products: Vec<Product>,
    discount: Signal<u8>,
    on_compute: impl Fn() + Send + Sync + 'static,
) -> Memo<u32> {
    let discount_pct = Memo::new(move |_| discount.get());
    Memo::new(move |_| {
        on_compute();
        cart_total(&products, discount_pct.get())
    })
}

pub fn make_rows(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("Row {:05}", i)).collect()
}

/// Rows containing `query`, case-insensitive
pub fn filter_rows(rows: &[String], query: &str) -> Vec<String> {
    let query = query.trim().to_lowercase();
    rows.iter()
        .filter(|row| row.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

// ========================
// Deferred Loading
// ========================

/// Loads a tutorial section once; shows "Loading…" until it resolves
#[component]
fn DeferredBody(slug: String, delay_ms: u32) -> impl IntoView {
    let section = LocalResource::new(move || {
        let slug = slug.clone();
        async move { api::load_section(slug, delay_ms).await.map_err(|e| e.to_string()) }
    });

    view! {
        <Suspense fallback=|| view! { <p class="loading">"Loading…"</p> }>
            {move || Suspend::new(async move {
                match section.await {
                    Ok(html) => view! { <div class="tutorial-body" inner_html=html></div> }.into_any(),
                    Err(message) => view! { <p class="load-error">{message}</p> }.into_any(),
                }
            })}
        </Suspense>
    }
}

/// Section that is only fetched and rendered after the user asks for it
#[component]
pub fn DeferredSection(#[prop(into)] slug: String) -> impl IntoView {
    let ctx = use_app_context();
    let delay_ms = ctx.section_delay_ms();
    let (requested, set_requested) = signal(false);

    view! {
        <div class="perf-demo deferred-section">
            <h3>"Deferred loading"</h3>
            <Show
                when=move || requested.get()
                fallback=move || view! {
                    <button on:click=move |_| set_requested.set(true)>"Load section"</button>
                }
            >
                <DeferredBody slug=slug.clone() delay_ms=delay_ms />
            </Show>
        </div>
    }
}

// ========================
// Memoized Value
// ========================

#[component]
pub fn MemoizedTotal() -> impl IntoView {
    let (discount, set_discount) = signal(0u8);
    let computations = StoredValue::new(0u32);

    let total = memo_cart_total(api::list_products(), discount.into(), move || {
        computations.update_value(|n| *n += 1);
        log::debug!("[PERF] cart total recomputed");
    });

    view! {
        <div class="perf-demo memoized-total">
            <h3>"Memoized value"</h3>
            <div class="button-row">
                {[0u8, 10, 25].into_iter().map(|pct| view! {
                    <button
                        class=move || if discount.get() == pct { "active" } else { "" }
                        on:click=move |_| set_discount.set(pct)
                    >
                        {format!("{}% off", pct)}
                    </button>
                }).collect_view()}
            </div>
            <p>
                {move || format!(
                    "Total {} (computed {} times)",
                    crate::components::format_price(total.get()),
                    computations.get_value(),
                )}
            </p>
        </div>
    }
}

// ========================
// Stable Callback
// ========================

#[component]
fn StableRow(
    product: Product,
    on_pick: Callback<u32>,
    renders: RwSignal<u32>,
) -> impl IntoView {
    renders.update(|n| *n += 1);
    let id = product.id;

    view! {
        <li class="stable-row">
            <span>{product.name}</span>
            <button on:click=move |_| on_pick.run(id)>"Pick"</button>
        </li>
    }
}

/// One `StableRow` per product, all sharing `on_pick`
fn stable_rows(products: &[Product], on_pick: Callback<u32>, renders: RwSignal<u32>) -> impl IntoView {
    products
        .iter()
        .cloned()
        .map(|product| view! { <StableRow product=product on_pick=on_pick renders=renders /> })
        .collect_view()
}

#[component]
pub fn StableCallbackList() -> impl IntoView {
    let products = api::list_products();
    let (picked, set_picked) = signal::<Option<u32>>(None);
    let (refreshes, set_refreshes) = signal(0u32);
    let renders = RwSignal::new(0u32);

    // Created once; every row of every re-render receives the same handle
    let on_pick = Callback::new(move |id: u32| {
        log::debug!("[PERF] picked product {}", id);
        set_picked.set(Some(id));
    });

    view! {
        <div class="perf-demo stable-callback">
            <h3>"Stable callback"</h3>
            <button on:click=move |_| set_refreshes.update(|n| *n += 1)>"Re-render rows"</button>
            <ul>
                {move || {
                    refreshes.track();
                    stable_rows(&products, on_pick, renders)
                }}
            </ul>
            <p>
                {move || format!(
                    "Picked: {} / list re-renders: {} / row renders: {}",
                    picked.get().map(|id| format!("#{}", id)).unwrap_or_else(|| "none".to_string()),
                    refreshes.get(),
                    renders.get(),
                )}
            </p>
        </div>
    }
}

// ========================
// Low-Urgency Update
// ========================

#[component]
pub fn LowUrgencyFilter() -> impl IntoView {
    let ctx = use_app_context();
    let rows = Arc::new(make_rows(ctx.config().slow_list_len));
    let total_rows = rows.len();

    // Urgent: the input echoes every keystroke immediately
    let (query, set_query) = signal(String::new());
    // Set by Transition while new rows are loading
    let (pending, set_pending) = signal(false);

    let filtered = LocalResource::new(move || {
        let query = query.get();
        let rows = Arc::clone(&rows);
        async move {
            TimeoutFuture::new(FILTER_DELAY_MS).await;
            let started = js_sys::Date::now();
            let result = filter_rows(&rows, &query);
            log::debug!(
                "[PERF] filtered {} rows for '{}' in {:.1}ms",
                rows.len(),
                query,
                js_sys::Date::now() - started
            );
            result
        }
    });

    view! {
        <div class="perf-demo low-urgency">
            <h3>"Low-urgency update"</h3>
            <input
                type="text"
                placeholder="Filter rows..."
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <Show when=move || pending.get()>
                <span class="pending">"Updating…"</span>
            </Show>
            <Transition fallback=|| view! { <p class="loading">"Loading…"</p> } set_pending=set_pending>
                {move || Suspend::new(async move {
                    let rows = filtered.await;
                    let shown = rows.len().min(VISIBLE_ROWS);
                    view! {
                        <p class="row-count">{format!("{} of {} rows match", rows.len(), total_rows)}</p>
                        <ul class="slow-list">
                            {rows.into_iter().take(shown).map(|row| view! { <li>{row}</li> }).collect_view()}
                        </ul>
                    }
                })}
            </Transition>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn product(price_cents: u32) -> Product {
        Product {
            id: price_cents,
            name: String::new(),
            description: String::new(),
            image: String::new(),
            price_cents,
            rating: 0,
        }
    }

    #[test]
    fn test_cart_total() {
        let products = vec![product(1000), product(999)];
        assert_eq!(cart_total(&products, 0), 1999);
        assert_eq!(cart_total(&products, 10), 1799);
        assert_eq!(cart_total(&products, 100), 0);
        assert_eq!(cart_total(&products, 250), 0);
        assert_eq!(cart_total(&[], 10), 0);
    }

    #[test]
    fn test_memo_skips_value_equal_discount() {
        let owner = Owner::new();
        owner.set();

        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let (discount, set_discount) = signal(10u8);
        let total = memo_cart_total(vec![product(1000)], discount.into(), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(total.get(), 900);
        assert_eq!(total.get(), 900);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        set_discount.set(10);
        assert_eq!(total.get(), 900);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        set_discount.set(50);
        assert_eq!(total.get(), 500);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_rerendered_rows_share_one_callback() {
        let owner = Owner::new();
        owner.set();

        let picks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&picks);
        let on_pick = Callback::new(move |_id: u32| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let renders = RwSignal::new(0u32);
        let products = vec![product(100), product(200), product(300)];

        let _first = stable_rows(&products, on_pick, renders);
        assert_eq!(renders.get_untracked(), 3);
        // A parent re-render builds every row again with the same handle
        let _second = stable_rows(&products, on_pick, renders);
        assert_eq!(renders.get_untracked(), 6);

        on_pick.run(100);
        assert_eq!(picks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_make_and_filter_rows() {
        let rows = make_rows(120);
        assert_eq!(rows.len(), 120);
        assert_eq!(rows[7], "Row 00007");

        let hits = filter_rows(&rows, "row 0011");
        assert_eq!(hits.len(), 10);
        assert_eq!(filter_rows(&rows, "").len(), 120);
        assert!(filter_rows(&rows, "nothing").is_empty());
    }
}
