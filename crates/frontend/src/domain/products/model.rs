use super::api::ProductApi;
use contracts::domain::product::{Product, ProductDto};
use wasm_bindgen::JsCast;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Транспорт через browser fetch.
///
/// Базовый URL передаётся при создании (см. `shared::api_utils::api_base`),
/// а не вычисляется на месте.
#[derive(Clone)]
pub struct HttpProductApi {
    base_url: String,
}

impl HttpProductApi {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    fn collection_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/products/{}", self.base_url, id)
    }
}

fn json_request(method: &str, url: &str, body: Option<&str>) -> Result<Request, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(json) = body {
        opts.set_body(&wasm_bindgen::JsValue::from_str(json));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| format!("{e:?}"))?;
    }
    Ok(request)
}

async fn send(request: Request) -> Result<Response, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(resp)
}

impl ProductApi for HttpProductApi {
    async fn list(&self) -> Result<Vec<Product>, String> {
        let request = json_request("GET", &self.collection_url(), None)?;
        let resp = send(request).await?;

        let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
            .await
            .map_err(|e| format!("{e:?}"))?;
        let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
        let data: Vec<Product> = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
        Ok(data)
    }

    async fn create(&self, dto: &ProductDto) -> Result<(), String> {
        let json_data = serde_json::to_string(dto).map_err(|e| format!("{e}"))?;
        let request = json_request("POST", &self.collection_url(), Some(&json_data))?;
        send(request).await?;
        Ok(())
    }

    async fn update(&self, id: &str, dto: &ProductDto) -> Result<(), String> {
        let json_data = serde_json::to_string(dto).map_err(|e| format!("{e}"))?;
        let request = json_request("PUT", &self.item_url(id), Some(&json_data))?;
        send(request).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), String> {
        let request = json_request("DELETE", &self.item_url(id), None)?;
        send(request).await?;
        Ok(())
    }
}
