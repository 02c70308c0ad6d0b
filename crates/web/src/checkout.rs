//! Checkout form.

use leptos::{
    ev::{Event, SubmitEvent},
    prelude::*,
    task::spawn_local,
};
use storefront::checkout::Field;
use storefront_app::{
    context::AppContext,
    domain::{
        carts::{CartAction, CartStore},
        orders::{Checkout, CheckoutError},
    },
};
use tracing::debug;

use crate::{cart::run_cart_action, components::Spinner, notify};

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        Field::Tel => "tel",
        Field::Name | Field::Address | Field::Message => "text",
    }
}

fn field_id(field: Field) -> String {
    format!("checkout-{}", field.label().to_lowercase().replace(' ', "-"))
}

#[component]
pub(crate) fn CheckoutPanel(cart: RwSignal<CartStore>, ctx: AppContext) -> impl IntoView {
    let checkout = RwSignal::new(Checkout::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let begun =
            checkout.try_update(|checkout| cart.with_untracked(|store| checkout.begin(store)));

        let order = match begun {
            Some(Ok(order)) => order,
            Some(Err(CheckoutError::Validation(errors))) => {
                debug!("checkout form has {} issue(s)", errors.len());

                return;
            }
            Some(Err(refused)) => {
                debug!("checkout refused: {refused}");

                return;
            }
            None => return,
        };

        let orders = ctx.orders.clone();
        let carts = ctx.carts.clone();

        spawn_local(async move {
            let outcome = orders.submit_order(&order).await;

            if outcome.is_ok() {
                run_cart_action(carts.as_ref(), cart, CartAction::Load).await;
            }

            notify::show(checkout.try_update(|checkout| checkout.finish(&outcome)));
        });
    };

    view! {
        <form class="checkout-form" on:submit=on_submit novalidate=true>
            <h3 class="panel-title">"Checkout"</h3>
            {Field::ALL
                .into_iter()
                .map(|field| view! { <FormField field=field checkout=checkout /> })
                .collect_view()}
            <button
                type="submit"
                class="icon-button icon-button-primary"
                disabled=move || {
                    !checkout.with(|checkout| cart.with(|store| checkout.can_submit(store)))
                }
            >
                "Place order"
                {move || {
                    checkout
                        .with(Checkout::is_submitting)
                        .then(|| view! { <Spinner label="Placing order" /> })
                }}
            </button>
        </form>
    }
}

#[component]
fn FormField(field: Field, checkout: RwSignal<Checkout>) -> impl IntoView {
    let id = field_id(field);
    let label = if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };

    let value = move || checkout.with(|checkout| checkout.form.value(field).to_string());
    let on_input = move |ev: Event| {
        let entered = event_target_value(&ev);

        checkout.update(|checkout| checkout.form.set(field, entered));
    };
    let error = move || checkout.with(|checkout| checkout.error_for(field));

    let control = if field == Field::Message {
        view! { <textarea id=id.clone() prop:value=value on:input=on_input></textarea> }.into_any()
    } else {
        view! {
            <input id=id.clone() type=input_type(field) prop:value=value on:input=on_input />
        }
        .into_any()
    };

    view! {
        <div class="form-field">
            <label for=id>{label}</label>
            {control}
            {move || error().map(|message| view! { <p class="form-error text-red-700">{message}</p> })}
        </div>
    }
}
