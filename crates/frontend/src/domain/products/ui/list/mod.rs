use crate::domain::products::store::ProductService;
use crate::domain::products::ui::details::ProductDetails;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::product::Product;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Product>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_modal, set_show_modal) = signal(false);
    let (editing, set_editing) = signal::<Option<Product>>(None);
    let service = use_context::<ProductService>().expect("ProductService not found in context");

    let fetch = {
        let service = service.clone();
        move || {
            let service = service.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match service.0.refresh().await {
                    Ok(()) => {
                        set_items.set(service.0.products());
                        set_error.set(None);
                    }
                    Err(e) => {
                        log::error!("Не удалось получить список товаров: {}", e);
                        set_error.set(Some(e));
                    }
                }
            });
        }
    };

    let handle_create_new = move || {
        set_editing.set(None);
        set_show_modal.set(true);
    };

    let handle_edit = move |product: Product| {
        set_editing.set(Some(product));
        set_show_modal.set(true);
    };

    let handle_delete = {
        let service = service.clone();
        let fetch = fetch.clone();
        move |id: String| {
            // Simple confirm dialog via browser
            let confirmed = {
                if let Some(win) = web_sys::window() {
                    win.confirm_with_message("Удалить выбранный товар?")
                        .unwrap_or(false)
                } else {
                    false
                }
            };
            if !confirmed {
                return;
            }

            let service = service.clone();
            let fetch = fetch.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match service.0.delete(&id).await {
                    Ok(()) => fetch(),
                    Err(e) => {
                        log::error!("Не удалось удалить товар {}: {}", id, e);
                        set_error.set(Some(e));
                    }
                }
            });
        }
    };

    fetch();

    view! {
        <div class="page">
            // Page header with title and action buttons
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Товары"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| handle_create_new()>
                        {icon("plus")}
                        {"Новый товар"}
                    </button>
                    <button class="button button--secondary" on:click={
                        let fetch = fetch.clone();
                        move |_| fetch()
                    }>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Наименование"}</th>
                            <th class="table__header-cell">{"Цена"}</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            let handle_delete = handle_delete.clone();
                            move || {
                                let rows = items.get();
                                if rows.is_empty() {
                                    return view! {
                                        <tr class="table__row">
                                            <td class="table__cell table__cell--empty" colspan="3">
                                                {"Ни одного товара не заведено."}
                                            </td>
                                        </tr>
                                    }.into_any();
                                }

                                let handle_delete = handle_delete.clone();
                                rows.into_iter().map(|product| {
                                    let price = product.price_display();
                                    let name = product.name.clone();
                                    let id_for_delete = product.id.clone();
                                    let handle_delete = handle_delete.clone();
                                    view! {
                                        <tr
                                            class="table__row"
                                            on:click=move |_| handle_edit(product.clone())
                                        >
                                            <td class="table__cell">{name}</td>
                                            <td class="table__cell">{price}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--icon"
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        handle_delete(id_for_delete.clone());
                                                    }
                                                >
                                                    {icon("delete")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }
                        }
                    </tbody>
                </table>
            </div>

            <Show when=move || show_modal.get()>
                {
                    let fetch = fetch.clone();
                    move || {
                        let target = editing.get();
                        let title = if target.is_some() {
                            "Редактирование товара"
                        } else {
                            "Новый товар"
                        };
                        let on_saved: Arc<dyn Fn(()) + Send + Sync> = Arc::new({
                            let fetch = fetch.clone();
                            move |_| {
                                fetch();
                                set_show_modal.set(false);
                            }
                        });
                        let on_cancel: Arc<dyn Fn(()) + Send + Sync> =
                            Arc::new(move |_| set_show_modal.set(false));

                        view! {
                            <Modal
                                title=title.to_string()
                                on_close=Callback::new(move |_| set_show_modal.set(false))
                            >
                                <ProductDetails
                                    target=target
                                    on_saved=on_saved
                                    on_cancel=on_cancel
                                />
                            </Modal>
                        }
                    }
                }
            </Show>
        </div>
    }
}
