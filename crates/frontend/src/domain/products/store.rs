use std::sync::{Arc, RwLock};

use super::api::ProductApi;
use super::model::HttpProductApi;
use super::session::SaveRequest;
use crate::shared::api_utils::api_base;
use contracts::domain::product::{Product, ProductDto};

/// Локальное зеркало удалённой коллекции товаров.
///
/// Хранилище никогда не правит список локально: после каждой мутации
/// вызывающий перечитывает коллекцию целиком, потому что назначаемые
/// сервером поля (прежде всего `id`) известны только серверу.
pub struct ProductStore<A> {
    api: A,
    products: RwLock<Vec<Product>>,
}

impl<A: ProductApi> ProductStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            products: RwLock::new(Vec::new()),
        }
    }

    /// Последняя успешно прочитанная коллекция — как вернул сервер,
    /// без сортировки, фильтрации и дедупликации.
    pub fn products(&self) -> Vec<Product> {
        self.products.read().unwrap().clone()
    }

    /// Перечитать коллекцию целиком. При ошибке локальный список
    /// остаётся прежним; повторных попыток нет.
    pub async fn refresh(&self) -> Result<(), String> {
        let items = self.api.list().await?;
        *self.products.write().unwrap() = items;
        Ok(())
    }

    pub async fn create(&self, dto: &ProductDto) -> Result<(), String> {
        self.api.create(dto).await
    }

    pub async fn update(&self, id: &str, dto: &ProductDto) -> Result<(), String> {
        self.api.update(id, dto).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), String> {
        self.api.delete(id).await
    }

    /// Выполнить запрос записи, выведенный формой.
    pub async fn save(&self, request: &SaveRequest) -> Result<(), String> {
        match request {
            SaveRequest::Create { dto } => self.create(dto).await,
            SaveRequest::Update { id, dto } => self.update(id, dto).await,
        }
    }
}

/// Сервис товаров, доступный компонентам через leptos-контекст.
#[derive(Clone)]
pub struct ProductService(pub Arc<ProductStore<HttpProductApi>>);

impl ProductService {
    pub fn new() -> Self {
        Self(Arc::new(ProductStore::new(HttpProductApi::new(api_base()))))
    }
}
