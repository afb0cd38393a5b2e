//! Модальная форма товара
//!
//! Упрощённый MVVM:
//! - view_model.rs: сеанс редактирования, команды и состояние
//! - view.rs: leptos-компонент (чистый UI)
//!
//! Транспорт общий для всего домена — `domain::products::model`.

mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;
