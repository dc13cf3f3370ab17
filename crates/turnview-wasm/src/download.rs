//! Browser side effects of a save: the JS `onSave` callback and the
//! synthetic anchor-click download.

use turnview_core::{DownloadHandler, ExportArtifact, SaveHandler};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlAnchorElement};

/// Forwards exported data URIs to a JavaScript function.
pub struct JsSaveHandler {
    callback: js_sys::Function,
}

impl JsSaveHandler {
    pub fn new(callback: js_sys::Function) -> Self {
        Self { callback }
    }
}

impl SaveHandler for JsSaveHandler {
    fn on_save(&mut self, data: &str) {
        if let Err(e) = self.callback.call1(&JsValue::NULL, &JsValue::from_str(data)) {
            console::warn_2(&JsValue::from_str("onSave callback threw:"), &e);
        }
    }
}

/// Downloads an export by clicking a detached `<a download>` element.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorDownload;

impl AnchorDownload {
    fn try_download(artifact: &ExportArtifact) -> Result<HtmlAnchorElement, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("No document available"))?;

        let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
        anchor.set_href(artifact.data_uri());
        anchor.set_download(artifact.filename());
        anchor.click();
        Ok(anchor)
    }
}

impl DownloadHandler for AnchorDownload {
    fn download(&mut self, artifact: &ExportArtifact) {
        if let Err(e) = Self::try_download(artifact) {
            console::warn_2(&JsValue::from_str("Download failed:"), &e);
        }
    }
}
