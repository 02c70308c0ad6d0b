//! Storefront browser application

use leptos::prelude::*;
use storefront_app::context::AppContext;

mod cart;
mod checkout;
mod components;
mod config;
mod notify;
mod observability;
mod product;
mod products;

/// The page currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Page {
    Home,
    Products,
    Product(String),
    Cart,
}

impl Page {
    const NAV: [(Self, &'static str); 3] = [
        (Self::Home, "Home"),
        (Self::Products, "Products"),
        (Self::Cart, "Cart"),
    ];

    /// Whether the nav entry `section` should be highlighted on this page.
    fn is_within(&self, section: &Self) -> bool {
        match (self, section) {
            (Self::Product(_), Self::Products) => true,
            _ => self == section,
        }
    }
}

#[component]
fn Nav(page: RwSignal<Page>) -> impl IntoView {
    view! {
        <nav class="mx-auto mb-6 flex max-w-5xl gap-4">
            {Page::NAV
                .into_iter()
                .map(|(section, label)| {
                    let target = section.clone();

                    view! {
                        <button
                            type="button"
                            class=move || {
                                if page.with(|current| current.is_within(&section)) {
                                    "nav-link nav-link-active"
                                } else {
                                    "nav-link"
                                }
                            }
                            on:click=move |_| page.set(target.clone())
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
fn Home(page: RwSignal<Page>) -> impl IntoView {
    view! {
        <section class="home mx-auto max-w-3xl text-center">
            <h2 class="text-xl font-semibold">"Welcome"</h2>
            <p>"Browse the catalog and check out in a few steps."</p>
            <button
                type="button"
                class="icon-button icon-button-primary"
                on:click=move |_| page.set(Page::Products)
            >
                "Shop now"
            </button>
        </section>
    }
}

/// Main app shell.
#[component]
fn App() -> impl IntoView {
    let page = RwSignal::new(Page::Home);

    provide_context(AppContext::from_config(config::vendor_config()));
    provide_context(page);

    view! {
        <main class="min-h-screen bg-slate-50 px-4 py-6 text-slate-900">
            <div class="mx-auto mb-6 max-w-5xl">
                <h1 class="text-2xl font-semibold tracking-tight">"Storefront"</h1>
            </div>
            <Nav page=page />
            <div class="mx-auto max-w-5xl">
                {move || match page.get() {
                    Page::Home => view! { <Home page=page /> }.into_any(),
                    Page::Products => view! { <products::ProductsPage /> }.into_any(),
                    Page::Product(id) => view! { <product::ProductPage id=id /> }.into_any(),
                    Page::Cart => view! { <cart::CartPage /> }.into_any(),
                }}
            </div>
        </main>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(init_error) = observability::init() {
        leptos::logging::error!("{init_error}");
    }

    leptos::mount::mount_to_body(App);
}
