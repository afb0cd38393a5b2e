use crate::domain::products::session::EditSession;
use crate::domain::products::store::ProductService;
use contracts::domain::product::Product;
use leptos::prelude::*;
use std::sync::Arc;

/// ViewModel формы товара
#[derive(Clone)]
pub struct ProductDetailsViewModel {
    pub session: RwSignal<EditSession>,
    pub error: RwSignal<Option<String>>,
    service: ProductService,
}

impl ProductDetailsViewModel {
    /// Создаётся при открытии формы: с целью — режим редактирования,
    /// буферы заполнены из неё; без цели — режим создания, буферы пусты.
    pub fn new(target: Option<Product>) -> Self {
        let mut session = EditSession::default();
        match target {
            Some(product) => session.open_for_edit(product),
            None => session.open_for_create(),
        }

        Self {
            session: RwSignal::new(session),
            error: RwSignal::new(None),
            service: use_context::<ProductService>()
                .expect("ProductService not found in context"),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.session.get().is_edit_mode()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || self.session.get().save_request().is_some()
    }

    pub fn set_name(&self, value: String) {
        self.session.update(|s| s.name_input = value);
    }

    pub fn set_price(&self, value: String) {
        self.session.update(|s| s.price_input = value);
    }

    /// Сохранение: при пустом после trim буфере — ничего, сетевого
    /// вызова нет, форма открыта. Иначе create или update по цели
    /// сеанса; при ошибке форма остаётся открытой с текстом ошибки.
    pub fn save_command(&self, on_saved: Arc<dyn Fn(()) + Send + Sync>) {
        let current = self.session.get_untracked();
        let Some(request) = current.save_request() else {
            return;
        };
        let token = current.token();

        let session = self.session;
        let error = self.error;
        let service = self.service.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = service.0.save(&request).await;

            // Пока запрос шёл, форму могли закрыть или переоткрыть:
            // ответ устаревшего сеанса не применяется.
            let Some(current) = session.try_get_untracked() else {
                return;
            };
            if !current.is_current(token) {
                return;
            }

            match result {
                Ok(()) => (on_saved)(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
