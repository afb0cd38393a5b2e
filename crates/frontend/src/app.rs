use crate::domain::products::store::ProductService;
use crate::domain::products::ui::list::ProductList;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the shared product service to the whole app via context.
    provide_context(ProductService::new());

    view! {
        <ProductList />
    }
}
