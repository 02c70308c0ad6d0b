//! Product detail page.

use leptos::{prelude::*, task::spawn_local};
use storefront::{products::Product, quantity::Quantity};
use storefront_app::{
    context::AppContext,
    domain::{
        carts::{CartAction, CartStore},
        products::CatalogError,
    },
    notifications::Notice,
};
use tracing::error;

use crate::{
    Page,
    cart::run_cart_action,
    components::{Load, PriceTag, SectionFallback, ShowMoreText, Spinner},
    notify,
};

#[component]
pub(crate) fn ProductPage(id: String) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let product = RwSignal::new(Load::<Product>::Pending);

    let catalog = ctx.clone();

    spawn_local(async move {
        match catalog.products.get_product(&id).await {
            Ok(found) => product.set(Load::Ready(found)),
            Err(CatalogError::NotFound) => {
                product.set(Load::Failed);
                notify::show(Some(Notice::failure("That product could not be found.")));
            }
            Err(fetch_error) => {
                error!("failed to fetch product {id}: {fetch_error}");

                product.set(Load::Failed);
                notify::show(Some(Notice::failure("Could not load the product.")));
            }
        }
    });

    view! {
        <section class="product-detail">
            {move || match product.get() {
                Load::Pending => view! { <Spinner label="Loading product" /> }.into_any(),
                Load::Failed => view! { <SectionFallback text="Product unavailable" /> }.into_any(),
                Load::Ready(found) => view! { <ProductDetail product=found ctx=ctx.clone() /> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn ProductDetail(product: Product, ctx: AppContext) -> impl IntoView {
    let page = expect_context::<RwSignal<Page>>();
    let cart = RwSignal::new(CartStore::new());
    let qty = RwSignal::new(Quantity::ONE);
    let adding = RwSignal::new(false);

    let product_id = product.id.clone();
    let title = product.title.clone();

    let on_add = move |_| {
        if adding.get_untracked() {
            return;
        }

        adding.set(true);

        let carts = ctx.carts.clone();
        let action = CartAction::Add {
            product_id: product_id.clone(),
            title: title.clone(),
            qty: qty.get_untracked(),
        };

        spawn_local(async move {
            run_cart_action(carts.as_ref(), cart, action).await;

            adding.set(false);
        });
    };

    view! {
        <button type="button" class="link-button" on:click=move |_| page.set(Page::Products)>
            "Back to products"
        </button>
        <div class="product-detail-body">
            <img class="product-image" src=product.image_url.clone() alt=product.title.clone() />
            <div>
                <h2 class="product-title">{product.title.clone()}</h2>
                <p class="product-category">{product.category.clone()}</p>
                <PriceTag product=product.clone() />
                <ShowMoreText text=product.description.clone() />
                <div class="product-content">
                    <ShowMoreText text=product.content.clone() />
                </div>
                <div class="add-to-cart">
                    <select
                        aria-label="Quantity"
                        on:change=move |ev| {
                            if let Ok(selected) = event_target_value(&ev).parse::<Quantity>() {
                                qty.set(selected);
                            }
                        }
                    >
                        {Quantity::choices()
                            .map(|choice| {
                                view! {
                                    <option
                                        value=choice.get().to_string()
                                        selected=move || qty.get() == choice
                                    >
                                        {choice.get()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <button
                        type="button"
                        class="icon-button icon-button-primary"
                        disabled=move || adding.get()
                        on:click=on_add
                    >
                        "Add to cart"
                        {move || adding.get().then(|| view! { <Spinner label="Adding to cart" /> })}
                    </button>
                </div>
            </div>
        </div>
    }
}
