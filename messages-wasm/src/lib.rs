//! Bridge WASM <-> JavaScript để render thông báo ngay trên trình duyệt.

use messages_core::MessagesError;
use messages_render::{render_request, RenderEnvironment, RenderRequest};
use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsRenderEnvironment {
    #[serde(default)]
    client_side_validation: Option<bool>,
}

impl JsRenderEnvironment {
    fn apply(self, base: RenderEnvironment) -> RenderEnvironment {
        let mut environment = base;
        if let Some(enabled) = self.client_side_validation {
            environment.client_side_validation = enabled;
        }
        environment
    }
}

/// Render một request (cấu hình widget + danh sách thông báo) thành HTML.
///
/// Trả về `{ html, receipt }`; `environment` nếu có sẽ ghi đè cờ trong request.
#[wasm_bindgen]
pub fn render_messages(request: JsValue, environment: Option<JsValue>) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let request_value = from_value::<serde_json::Value>(request)
        .map_err(|err| JsValue::from_str(&format!("Không đọc được JSON request: {err}")))?;

    let mut request: RenderRequest = serde_json::from_value(request_value).map_err(|err| {
        JsValue::from_str(&format_messages_error(MessagesError::Parse(
            err.to_string(),
        )))
    })?;

    if let Some(js_environment) = environment {
        let overrides: JsRenderEnvironment = from_value(js_environment)
            .map_err(|err| JsValue::from_str(&format!("Không đọc được environment: {err}")))?;
        request.environment = overrides.apply(request.environment);
    }

    let rendered =
        render_request(&request).map_err(|err| JsValue::from_str(&format_messages_error(err)))?;

    to_value(&rendered)
        .map_err(|err| JsValue::from_str(&format!("Không serialize kết quả: {err}")))
}

fn format_messages_error(err: MessagesError) -> String {
    format!("Messages error: {err}")
}
