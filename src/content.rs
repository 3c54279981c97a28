//! Tutorial Content
//!
//! Markdown prose shown next to each demo. Fenced blocks are highlighted by
//! `markdown::parse_markdown`.

/// A tutorial section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub slug: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// Section loaded lazily by the deferred-loading demo
pub const DEFERRED_SECTION: &str = "memoization-deep-dive";

pub const SECTIONS: &[Section] = &[
    Section {
        slug: "search-and-list",
        title: "Search form and movie list",
        body: r#"
## Lifting state up

The **movie manager** owns the collection. The search form and the list are
presentational: they render what they are given and report user intent
through callbacks.

```rust
#[component]
pub fn SearchForm(
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView
```

Favorites are never flipped in place. The manager builds a new vector with
the one movie replaced and stores that:

```rust
let next = set_favorite(&movies, id, true);
store.movies().set(next);
```

> **Note** The list decides *which* callback to call from the current flag,
> but never touches the collection itself.
"#,
    },
    Section {
        slug: "selector-groups",
        title: "Radio and checkbox groups",
        body: r#"
## Controlled selector groups

A radio group gets the options, the current value and an `on_change`
callback. Sharing one `name` attribute makes single selection a property of
the markup.

A checkbox group reports the label that was clicked. Working out the new
subset is the owner's job:

```rust
on_change=move |label: String| {
    set_categories.update(|c| *c = toggle_selection(c, &label));
}
```
"#,
    },
    Section {
        slug: "compound-card",
        title: "Compound components",
        body: r#"
## A product card built from parts

`ProductCard` provides a context and renders its children. Each part
(`ProductCardImage`, `ProductCardTitle`, `ProductCardPrice`, ...) is a normal
component with its own typed props.

```rust
view! {
    <ProductCard>
        <ProductCardImage src=product.image alt=product.name.clone() />
        <ProductCardTitle text=product.name />
        <ProductCardPrice cents=product.price_cents />
    </ProductCard>
}
```

Parts are listed in the `ProductCardPart` registry. Adding one means
declaring its props, writing the component and adding a registry variant.

> **Note** Parts can be rendered outside a card too; the context is optional.
"#,
    },
    Section {
        slug: "performance",
        title: "Rendering performance",
        body: r#"
## Four techniques

1. **Deferred loading**: render a placeholder now, swap in the content when
   an async load finishes (`Suspense` + `LocalResource`).
2. **Memoized values**: `Memo::new` only notifies readers when the computed
   value actually changes.
3. **Stable callbacks**: a `Callback` is created once and copied into every
   child, so children never see a "new" handler.
4. **Low-urgency updates**: `Transition` keeps the previous content on screen
   while new data loads and reports whether an update is pending.
"#,
    },
    Section {
        slug: DEFERRED_SECTION,
        title: "Memoization deep dive",
        body: r#"
## When does a memo recompute?

A memo tracks the signals it reads. When one of them changes, the memo
re-runs its closure and compares the new value with the old one using
`PartialEq`. Readers are notified only if the value differs.

```rust
let total = Memo::new(move |_| cart_total(&items.get(), discount.get()));
```

Setting `discount` to the value it already has does not wake up anything
that reads `total`.
"#,
    },
];

/// Section with the given slug
pub fn find_section(slug: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_unique() {
        for (i, a) in SECTIONS.iter().enumerate() {
            assert!(SECTIONS[i + 1..].iter().all(|b| b.slug != a.slug), "duplicate slug {}", a.slug);
        }
    }

    #[test]
    fn test_find_section() {
        assert_eq!(find_section("compound-card").map(|s| s.title), Some("Compound components"));
        assert!(find_section(DEFERRED_SECTION).is_some());
        assert!(find_section("missing").is_none());
    }
}
