//! Cart page.

use leptos::{prelude::*, task::spawn_local};
use storefront::{
    carts::CartItem,
    money::format_price,
    quantity::{Quantity, QuantityUpdate},
};
use storefront_app::{
    context::AppContext,
    domain::carts::{CartAction, CartStore, CartsService},
};

use crate::{
    checkout::CheckoutPanel,
    components::{SectionFallback, Spinner},
    notify,
};

/// Dispatch a cart action and fold its outcome into `store`.
///
/// If the view owning `store` is gone by the time the vendor answers, the
/// outcome is dropped.
pub(crate) async fn run_cart_action(
    carts: &dyn CartsService,
    store: RwSignal<CartStore>,
    action: CartAction,
) {
    let outcome = action.dispatch(carts).await;

    notify::show(store.try_update(|store| store.apply(&action, outcome)).flatten());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Up,
    Down,
}

/// The update for pressing `+` or `-` on a line. Going below one removes it.
fn step_action(item: &CartItem, step: Step) -> CartAction {
    let qty = match (Quantity::new(item.qty), step) {
        (Ok(current), Step::Up) => current.incremented().get(),
        (Ok(current), Step::Down) => match current.decremented() {
            QuantityUpdate::Set(lower) => lower.get(),
            QuantityUpdate::Remove => 0,
        },
        (Err(_), Step::Up) => 1,
        (Err(_), Step::Down) => 0,
    };

    CartAction::UpdateQuantity {
        item_id: item.id.clone(),
        product_id: item.product_ref().to_string(),
        title: item.product.title.clone(),
        qty,
    }
}

fn remove_action(item: &CartItem) -> CartAction {
    CartAction::Remove {
        item_id: item.id.clone(),
        title: item.product.title.clone(),
    }
}

#[component]
pub(crate) fn CartPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let cart = RwSignal::new(CartStore::new());
    let busy = RwSignal::new(false);

    let dispatch = {
        let ctx = ctx.clone();

        move |action: CartAction| {
            if busy.get_untracked() {
                return;
            }

            busy.set(true);

            let carts = ctx.carts.clone();

            spawn_local(async move {
                run_cart_action(carts.as_ref(), cart, action).await;

                busy.set(false);
            });
        }
    };

    dispatch(CartAction::Load);

    let clear = dispatch.clone();

    view! {
        <section class="cart-panel">
            <div class="panel-header">
                <h2 class="panel-title">"Cart"</h2>
                {move || busy.get().then(|| view! { <Spinner label="Updating cart" /> })}
            </div>
            {move || {
                let dispatch = dispatch.clone();

                match cart.with(|store| store.cart().cloned()) {
                    None => ().into_any(),
                    Some(snapshot) if snapshot.is_empty() => {
                        view! { <SectionFallback text="Your cart is empty" /> }.into_any()
                    }
                    Some(snapshot) => {
                        view! {
                            <ul class="cart-lines">
                                {snapshot
                                    .items
                                    .into_iter()
                                    .map(|item| {
                                        view! {
                                            <CartLine
                                                item=item
                                                busy=busy
                                                dispatch=dispatch.clone()
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                            <dl class="cart-summary">
                                <dt>"Total"</dt>
                                <dd>{format_price(snapshot.total)}</dd>
                                <dt>"Discounted total"</dt>
                                <dd>{format_price(snapshot.final_total)}</dd>
                            </dl>
                        }
                        .into_any()
                    }
                }
            }}
            {move || {
                let clear = clear.clone();

                (!cart.with(CartStore::is_empty))
                    .then(|| {
                        view! {
                            <button
                                type="button"
                                class="icon-button icon-button-secondary"
                                disabled=move || busy.get()
                                on:click=move |_| clear(CartAction::Clear)
                            >
                                "Clear cart"
                            </button>
                        }
                    })
            }}
            <CheckoutPanel cart=cart ctx=ctx />
        </section>
    }
}

#[component]
fn CartLine<F>(item: CartItem, busy: RwSignal<bool>, dispatch: F) -> impl IntoView
where
    F: Fn(CartAction) + Clone + 'static,
{
    let decrement = step_action(&item, Step::Down);
    let increment = step_action(&item, Step::Up);
    let remove = remove_action(&item);

    let on_decrement = {
        let dispatch = dispatch.clone();

        move |_| dispatch(decrement.clone())
    };
    let on_increment = {
        let dispatch = dispatch.clone();

        move |_| dispatch(increment.clone())
    };
    let on_remove = move |_| dispatch(remove.clone());

    let title = item.product.title.clone();

    view! {
        <li class="cart-line">
            <img class="cart-thumb" src=item.product.image_url.clone() alt=title.clone() />
            <p class="cart-line-title">{title.clone()}</p>
            <div class="cart-line-quantity">
                <button
                    type="button"
                    aria-label=format!("One fewer {title}")
                    disabled=move || busy.get()
                    on:click=on_decrement
                >
                    "-"
                </button>
                <span>{item.qty} " " {item.product.unit.clone()}</span>
                <button
                    type="button"
                    aria-label=format!("One more {title}")
                    disabled=move || busy.get()
                    on:click=on_increment
                >
                    "+"
                </button>
            </div>
            <span class="cart-line-total">{format_price(item.total)}</span>
            <button
                type="button"
                class="icon-button icon-button-secondary icon-button-compact"
                aria-label=format!("Remove {title} from the cart")
                disabled=move || busy.get()
                on:click=on_remove
            >
                "Remove"
            </button>
        </li>
    }
}
