use super::view_model::ProductDetailsViewModel;
use crate::shared::icons::icon;
use contracts::domain::product::Product;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn ProductDetails(
    target: Option<Product>,
    on_saved: Arc<dyn Fn(()) + Send + Sync>,
    on_cancel: Arc<dyn Fn(()) + Send + Sync>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(target);

    // Clone vm for multiple closures
    let vm_clone = vm.clone();

    view! {
        <div class="details-container product-details">
            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="name">{"Наименование"}</label>
                    <input
                        type="text"
                        id="name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.session.get().name_input
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.set_name(event_target_value(&ev))
                        }
                        placeholder="Введите наименование товара"
                    />
                </div>

                <div class="form-group">
                    <label for="price">{"Цена"}</label>
                    <input
                        type="text"
                        id="price"
                        inputmode="decimal"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.session.get().price_input
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.set_price(event_target_value(&ev))
                        }
                        placeholder="Например: 150.90"
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled={
                        let vm = vm_clone.clone();
                        move || !vm.is_form_valid()()
                    }
                >
                    {icon("save")}
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Сохранить" } else { "Создать" }
                    }
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| (on_cancel)(())
                >
                    {icon("cancel")}
                    {"Отмена"}
                </button>
            </div>
        </div>
    }
}
