use contracts::domain::product::{Product, ProductDto};

/// Состояние сеанса редактирования модальной формы товара.
///
/// Достижимые состояния: {скрыта}, {видима, создание}, {видима,
/// редактирование}; переходы — только операции ниже. Из скрытого
/// состояния выйти можно только через один из `open_*`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditSession {
    visible: bool,
    target: Option<Product>,
    pub name_input: String,
    pub price_input: String,
    token: u64,
}

/// Запрос записи, выведенный из заполненной формы.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveRequest {
    Create { dto: ProductDto },
    Update { id: String, dto: ProductDto },
}

impl EditSession {
    pub fn open_for_create(&mut self) {
        self.target = None;
        self.name_input.clear();
        self.price_input.clear();
        self.visible = true;
        self.token += 1;
    }

    pub fn open_for_edit(&mut self, product: Product) {
        self.name_input = product.name.clone();
        self.price_input = product.price.clone();
        self.target = Some(product);
        self.visible = true;
        self.token += 1;
    }

    /// Скрыть форму. Буферы не чистятся — их перезапишет следующий `open_*`.
    pub fn close(&mut self) {
        self.visible = false;
        self.target = None;
        self.token += 1;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_edit_mode(&self) -> bool {
        self.target.is_some()
    }

    /// Токен текущего сеанса. Запущенное сохранение запоминает токен
    /// и применяется, только если к моменту ответа он не изменился, —
    /// закрытая форма не должна применять устаревшую запись.
    pub fn token(&self) -> u64 {
        self.token
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.visible && self.token == token
    }

    /// Охрана сохранения: `None`, если любой буфер пуст после trim.
    /// Сами значения передаются как введены, без обрезки.
    pub fn save_request(&self) -> Option<SaveRequest> {
        if self.name_input.trim().is_empty() || self.price_input.trim().is_empty() {
            return None;
        }

        let dto = ProductDto {
            name: self.name_input.clone(),
            price: self.price_input.clone(),
        };
        Some(match &self.target {
            Some(p) => SaveRequest::Update {
                id: p.id.clone(),
                dto,
            },
            None => SaveRequest::Create { dto },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse() -> Product {
        Product {
            id: "1".to_string(),
            name: "Mouse".to_string(),
            price: "50.00".to_string(),
        }
    }

    #[test]
    fn test_open_for_create_clears_buffers() {
        let mut session = EditSession::default();
        session.open_for_edit(mouse());
        session.close();

        session.open_for_create();
        assert!(session.is_visible());
        assert!(!session.is_edit_mode());
        assert_eq!(session.name_input, "");
        assert_eq!(session.price_input, "");
    }

    #[test]
    fn test_open_for_edit_seeds_buffers_from_target() {
        let mut session = EditSession::default();
        session.open_for_edit(mouse());

        assert!(session.is_visible());
        assert!(session.is_edit_mode());
        assert_eq!(session.name_input, "Mouse");
        assert_eq!(session.price_input, "50.00");
    }

    #[test]
    fn test_save_request_guards_blank_buffers() {
        let mut session = EditSession::default();
        session.open_for_create();

        session.name_input = "   ".to_string();
        session.price_input = "50.00".to_string();
        assert_eq!(session.save_request(), None);

        session.name_input = "Mouse".to_string();
        session.price_input = "".to_string();
        assert_eq!(session.save_request(), None);

        // форма при этом остаётся открытой
        assert!(session.is_visible());
    }

    #[test]
    fn test_save_request_create_vs_update() {
        let mut session = EditSession::default();
        session.open_for_create();
        session.name_input = "Keyboard".to_string();
        session.price_input = "199.90".to_string();

        let dto = ProductDto {
            name: "Keyboard".to_string(),
            price: "199.90".to_string(),
        };
        assert_eq!(
            session.save_request(),
            Some(SaveRequest::Create { dto: dto.clone() })
        );

        session.open_for_edit(mouse());
        session.name_input = "Mouse Pro".to_string();
        assert_eq!(
            session.save_request(),
            Some(SaveRequest::Update {
                id: "1".to_string(),
                dto: ProductDto {
                    name: "Mouse Pro".to_string(),
                    price: "50.00".to_string(),
                },
            })
        );
    }

    #[test]
    fn test_close_invalidates_inflight_token() {
        let mut session = EditSession::default();
        session.open_for_edit(mouse());
        let token = session.token();
        assert!(session.is_current(token));

        session.close();
        assert!(!session.is_current(token));
    }

    #[test]
    fn test_reopen_invalidates_previous_session() {
        let mut session = EditSession::default();
        session.open_for_edit(mouse());
        let token = session.token();

        session.open_for_create();
        assert!(!session.is_current(token));
        assert!(session.is_current(session.token()));
    }
}
