//! 图床上传
//!
//! 图片托管是外部协作方（imgbb 风格的 API）：multipart 上传文件，
//! 换回一个托管 URL。注册头像走这里。

use gloo_net::http::Request;
use serde::Deserialize;

use crate::api::ApiError;
use crate::config;

#[derive(Deserialize)]
struct UploadData {
    url: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<UploadData>,
}

/// 上传图片文件，返回托管 URL
pub async fn upload_image(file: &web_sys::File) -> Result<String, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("FormData unavailable".into()))?;
    form.append_with_blob("image", file)
        .map_err(|_| ApiError::Network("could not attach file".into()))?;

    // 浏览器会为 FormData 自动设置 multipart 边界，不手动设 Content-Type
    let res = Request::post(&config::image_host_url())
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = res.status();
    if !res.ok() {
        return Err(ApiError::Status {
            status,
            message: format!("Image host responded {}", status),
        });
    }

    let parsed: UploadResponse = res
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    match parsed.data {
        Some(data) if parsed.success => Ok(data.url),
        _ => Err(ApiError::Decode("image host reported failure".into())),
    }
}
