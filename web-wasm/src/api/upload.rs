//! `/upload` へのmultipart送信（fetch + FormData）

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};
use brand_onboarding_common::{
    interpret_response, transport_error, upload_url, FileHandle, RowOutcome, UploadError,
    UPLOAD_FIELD,
};
use crate::app::BrowserFile;

/// ファイルを1回だけ送信し、行ごとの結果を返す
///
/// 送信先はページと同じオリジンの`/upload`
pub async fn upload_file(file: &BrowserFile) -> Result<Vec<RowOutcome>, UploadError> {
    let (status, body) = post_form(file)
        .await
        .map_err(|e| transport_error(&js_error_message(&e)))?;
    interpret_response(status, &body)
}

async fn post_form(file: &BrowserFile) -> Result<(u16, String), JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, &file.0, &file.file_name())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(&upload_url(""), &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    Ok((resp.status(), text.as_string().unwrap_or_default()))
}

/// JSのエラー値からメッセージを取り出す（取れなければ空文字）
fn js_error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_default()
}
