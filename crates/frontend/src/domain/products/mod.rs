//! Товары: список с таблицей и модальная форма создания/редактирования
//!
//! Локальное состояние — зеркало удалённой коллекции: после каждой
//! мутации список перечитывается целиком, слияния на клиенте нет.

pub mod api;
pub mod model;
pub mod session;
pub mod store;
pub mod ui;
