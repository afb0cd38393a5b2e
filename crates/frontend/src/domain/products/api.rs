use contracts::domain::product::{Product, ProductDto};

/// Транспорт к удалённой коллекции товаров.
///
/// Ошибка одна — «удалённый вызов не удался»: недоступная сеть,
/// не-2xx статус и некорректное тело не различаются.
#[allow(async_fn_in_trait)]
pub trait ProductApi {
    async fn list(&self) -> Result<Vec<Product>, String>;
    async fn create(&self, dto: &ProductDto) -> Result<(), String>;
    async fn update(&self, id: &str, dto: &ProductDto) -> Result<(), String>;
    async fn delete(&self, id: &str) -> Result<(), String>;
}
