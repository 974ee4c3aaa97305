//! ブラウザでのファイルダウンロード
//!
//! Blobを作って一時的な<a download>をクリックする

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};
use brand_onboarding_common::{TEMPLATE_CONTENT_TYPE, TEMPLATE_CSV, TEMPLATE_FILE_NAME};

/// テキストをファイルとしてダウンロード
///
/// # Arguments
/// * `contents` - ファイル内容
/// * `file_name` - ダウンロード時のファイル名
/// * `content_type` - MIMEタイプ
pub fn download_text(contents: &str, file_name: &str, content_type: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let props = BlobPropertyBag::new();
    props.set_type(content_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &props)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("body is not available"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_hidden(true);
    anchor.set_href(&url);
    anchor.set_download(file_name);

    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;

    Url::revoke_object_url(&url)
}

/// CSVテンプレートをダウンロード
pub fn download_template() -> Result<(), JsValue> {
    download_text(TEMPLATE_CSV, TEMPLATE_FILE_NAME, TEMPLATE_CONTENT_TYPE)
}
