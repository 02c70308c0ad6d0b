//! Product list page.

use std::collections::HashSet;

use leptos::{prelude::*, task::spawn_local};
use storefront::{products::Product, quantity::Quantity};
use storefront_app::{
    context::AppContext,
    domain::carts::{CartAction, CartStore},
    notifications::Notice,
};
use tracing::error;

use crate::{
    Page,
    cart::run_cart_action,
    components::{Load, PriceTag, SectionFallback, Spinner},
    notify,
};

#[component]
pub(crate) fn ProductsPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let products = RwSignal::new(Load::<Vec<Product>>::Pending);
    let cart = RwSignal::new(CartStore::new());
    let pending = RwSignal::new(HashSet::<String>::new());

    let catalog = ctx.clone();

    spawn_local(async move {
        match catalog.products.list_products().await {
            Ok(listed) => products.set(Load::Ready(listed)),
            Err(list_error) => {
                error!("failed to list products: {list_error}");

                products.set(Load::Failed);
                notify::show(Some(Notice::failure("Could not load the products.")));
            }
        }
    });

    view! {
        <section class="products-panel">
            <h2 class="panel-title">"Products"</h2>
            {move || match products.get() {
                Load::Pending => view! { <Spinner label="Loading products" /> }.into_any(),
                Load::Failed => view! { <SectionFallback text="Products are unavailable" /> }.into_any(),
                Load::Ready(listed) if listed.is_empty() => {
                    view! { <SectionFallback text="No products" /> }.into_any()
                }
                Load::Ready(listed) => {
                    let ctx = ctx.clone();

                    view! {
                        <ul class="products-list">
                            {listed
                                .into_iter()
                                .map(|product| {
                                    view! {
                                        <ProductRow
                                            product=product
                                            ctx=ctx.clone()
                                            cart=cart
                                            pending=pending
                                        />
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn ProductRow(
    product: Product,
    ctx: AppContext,
    cart: RwSignal<CartStore>,
    pending: RwSignal<HashSet<String>>,
) -> impl IntoView {
    let page = expect_context::<RwSignal<Page>>();

    let id = product.id.clone();
    let id_for_detail = product.id.clone();
    let id_for_pending = product.id.clone();
    let id_for_spinner = product.id.clone();
    let title = product.title.clone();

    let on_add = move |_| {
        let id = id.clone();

        if !pending.try_update(|ids| ids.insert(id.clone())).unwrap_or(false) {
            return;
        }

        let carts = ctx.carts.clone();
        let action = CartAction::Add {
            product_id: id.clone(),
            title: title.clone(),
            qty: Quantity::ONE,
        };

        spawn_local(async move {
            run_cart_action(carts.as_ref(), cart, action).await;

            pending.update(|ids| {
                ids.remove(&id);
            });
        });
    };

    view! {
        <li class="product-row">
            <button
                type="button"
                class="product-link"
                on:click=move |_| page.set(Page::Product(id_for_detail.clone()))
            >
                <img class="product-thumb" src=product.image_url.clone() alt=product.title.clone() />
                <p class="product-name">{product.title.clone()}</p>
                <p class="product-category">{product.category.clone()}</p>
            </button>
            <PriceTag product=product />
            <button
                type="button"
                class="icon-button icon-button-primary"
                disabled=move || pending.with(|ids| ids.contains(&id_for_pending))
                on:click=on_add
            >
                "Add to cart"
                {move || {
                    pending
                        .with(|ids| ids.contains(&id_for_spinner))
                        .then(|| view! { <Spinner label="Adding to cart" /> })
                }}
            </button>
        </li>
    }
}
