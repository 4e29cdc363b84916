use wasm_bindgen::JsCast;
use web_sys as web;

/// Download the canvas pixels as `<filename>.<extension>` via a temporary link.
pub fn save_canvas(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    filename: &str,
    extension: &str,
) -> anyhow::Result<()> {
    let mime = format!("image/{}", extension);
    let url = canvas
        .to_data_url_with_type(&mime)
        .map_err(|e| anyhow::anyhow!("toDataURL failed: {:?}", e))?;
    let link = document
        .create_element("a")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlAnchorElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    link.set_href(&url);
    link.set_download(&format!("{}.{}", filename, extension));
    link.click();
    log::info!("[save] exported {}.{}", filename, extension);
    Ok(())
}
