//! 环境配置
//!
//! 三个外部协作方的地址都在编译期通过环境变量注入，
//! 缺省指向本地开发地址。统一去掉结尾斜杠，拼接路径时不再关心。

/// 后端 REST API 基址
pub fn api_base_url() -> String {
    normalize(option_env!("ARTIFY_API_URL").unwrap_or("http://localhost:3000"))
}

/// 身份提供方基址
pub fn auth_base_url() -> String {
    normalize(option_env!("ARTIFY_AUTH_URL").unwrap_or("http://localhost:3000/auth"))
}

/// 图床上传端点
pub fn image_host_url() -> String {
    normalize(option_env!("ARTIFY_IMGHOST_URL").unwrap_or("https://api.imgbb.com/1/upload"))
}

fn normalize(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_trailing_slashes_only() {
        assert_eq!(normalize("http://localhost:3000/"), "http://localhost:3000");
        assert_eq!(normalize("http://localhost:3000"), "http://localhost:3000");
        assert_eq!(
            normalize("https://api.example.com/v1//"),
            "https://api.example.com/v1"
        );
    }
}
