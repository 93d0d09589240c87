//! 客户端校验
//!
//! 校验在构造任何 HTTP 请求之前进行；失败的提交不会产生网络调用。
//! 错误消息就是直接展示给用户的文案。

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Length must be at least 6 characters")]
    PasswordTooShort,
    #[error("Must have an Uppercase letter in the password")]
    PasswordNeedsUppercase,
    #[error("Must have a Lowercase letter in the password")]
    PasswordNeedsLowercase,
    #[error("Name is required")]
    MissingName,
    #[error("Email is required")]
    MissingEmail,
    #[error("Image URL is required")]
    MissingImage,
    #[error("Title is required")]
    MissingTitle,
    #[error("You must be logged in to add artwork")]
    NotLoggedIn,
}

/// 密码规则：至少 6 位，包含大写与小写字母。
/// 按顺序返回第一条违反的规则，消息逐条具体。
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < 6 {
        return Err(ValidationError::PasswordTooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::PasswordNeedsUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(ValidationError::PasswordNeedsLowercase);
    }
    Ok(())
}

/// 注册表单校验
pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    if email.trim().is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    validate_password(password)
}

/// 新建作品校验：图片与标题必填，且必须已登录
pub fn validate_new_artwork(image: &str, title: &str, logged_in: bool) -> Result<(), ValidationError> {
    if image.trim().is_empty() {
        return Err(ValidationError::MissingImage);
    }
    if title.trim().is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    if !logged_in {
        return Err(ValidationError::NotLoggedIn);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_rules_fire_in_order_with_specific_messages() {
        assert_eq!(
            validate_password("Ab1"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(
            validate_password("abcdef"),
            Err(ValidationError::PasswordNeedsUppercase)
        );
        assert_eq!(
            validate_password("ABCDEF"),
            Err(ValidationError::PasswordNeedsLowercase)
        );
        assert!(validate_password("Abcdef").is_ok());

        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Length must be at least 6 characters"
        );
        assert_eq!(
            ValidationError::PasswordNeedsUppercase.to_string(),
            "Must have an Uppercase letter in the password"
        );
        assert_eq!(
            ValidationError::PasswordNeedsLowercase.to_string(),
            "Must have a Lowercase letter in the password"
        );
    }

    #[test]
    fn registration_requires_name_and_email_first() {
        assert_eq!(
            validate_registration("", "a@b.c", "Abcdef"),
            Err(ValidationError::MissingName)
        );
        assert_eq!(
            validate_registration("Mira", "  ", "Abcdef"),
            Err(ValidationError::MissingEmail)
        );
        assert!(validate_registration("Mira", "a@b.c", "Abcdef").is_ok());
    }

    #[test]
    fn artwork_submission_requires_presence_and_session() {
        assert_eq!(
            validate_new_artwork("", "Dawn", true),
            Err(ValidationError::MissingImage)
        );
        assert_eq!(
            validate_new_artwork("i.jpg", "", true),
            Err(ValidationError::MissingTitle)
        );
        assert_eq!(
            validate_new_artwork("i.jpg", "Dawn", false),
            Err(ValidationError::NotLoggedIn)
        );
        assert!(validate_new_artwork("i.jpg", "Dawn", true).is_ok());
    }
}
