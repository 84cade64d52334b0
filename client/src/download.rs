use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, HtmlAnchorElement, Response, Url};

use crate::env::{global_env, Env};

/// Fetch `url` and hand the body to the browser as a download named
/// `filename`. Any fetch or body failure is returned unchanged.
pub async fn download_file_with(env: &Env, url: &str, filename: &str) -> Result<(), JsValue> {
    let resp_value = JsFuture::from(env.window.fetch_with_str(url)).await?;
    let resp: Response = resp_value.dyn_into()?;
    if !resp.ok() {
        log::warn!("download {}: HTTP {} {}", url, resp.status(), resp.status_text());
    }

    let blob: Blob = JsFuture::from(resp.blob()?).await?.dyn_into()?;
    let object_url = Url::create_object_url_with_blob(&blob)?;

    let a: HtmlAnchorElement = env.document.create_element("a")?.dyn_into()?;
    a.set_href(&object_url);
    a.set_download(filename);
    a.click();
    Url::revoke_object_url(&object_url)?;

    log::info!("downloaded {} as {} ({} bytes)", url, filename, blob.size());
    Ok(())
}

#[wasm_bindgen(js_name = downloadFile)]
pub async fn download_file(url: String, filename: String) -> Result<(), JsValue> {
    let env = global_env()?;
    download_file_with(&env, &url, &filename).await
}
