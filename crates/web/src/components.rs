//! Shared view pieces.

use leptos::prelude::*;
use storefront::{
    money::format_price,
    products::Product,
    text::{DEFAULT_SHOW_MORE_LIMIT, ShowMore, section_fallback},
};

/// Progress of a one-shot fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Load<T> {
    Pending,
    Ready(T),
    Failed,
}

/// Centred placeholder for an empty section.
#[component]
pub(crate) fn SectionFallback(text: &'static str) -> impl IntoView {
    view! {
        <p class="section-fallback text-center text-slate-500">{section_fallback(text)}</p>
    }
}

#[component]
pub(crate) fn Spinner(label: &'static str) -> impl IntoView {
    view! {
        <span class="panel-spinner" aria-live="polite">
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width="16"
                height="16"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class="lucide lucide-loader-circle"
                aria-hidden="true"
            >
                <path d="M21 12a9 9 0 1 1-6.219-8.56"></path>
            </svg>
            <span class="sr-only">{label}</span>
        </span>
    }
}

/// Price, with the original price struck through when marked down.
#[component]
pub(crate) fn PriceTag(product: Product) -> impl IntoView {
    let was = product
        .is_marked_down()
        .then(|| format_price(product.origin_price));

    view! {
        <div class="product-price-summary">
            {was.map_or_else(
                || ().into_any(),
                |value| {
                    view! {
                        <span class="product-shelf-price">
                            <span class="sr-only">"Was "</span>
                            <del>{value}</del>
                        </span>
                    }
                    .into_any()
                },
            )}
            <span class="product-price">{format_price(product.price)}</span>
            <span class="product-unit">" / " {product.unit}</span>
        </div>
    }
}

/// Vendor text that collapses past [`DEFAULT_SHOW_MORE_LIMIT`] characters.
#[component]
pub(crate) fn ShowMoreText(text: String) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let collapsible = ShowMore::with_limit(&text, DEFAULT_SHOW_MORE_LIMIT).is_collapsible();

    view! {
        <div class="show-more">
            {move || {
                ShowMore::with_limit(&text, DEFAULT_SHOW_MORE_LIMIT)
                    .lines(expanded.get())
                    .into_iter()
                    .map(|line| view! { <p>{line}</p> })
                    .collect_view()
            }}
            {collapsible
                .then(|| {
                    view! {
                        <button
                            type="button"
                            class="link-button"
                            on:click=move |_| expanded.update(|value| *value = !*value)
                        >
                            {move || if expanded.get() { "Show less" } else { "Show more" }}
                        </button>
                    }
                })}
        </div>
    }
}
