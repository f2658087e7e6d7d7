pub mod url_validator;
pub mod validators;

pub use validators::{is_valid_custom, is_valid_expiry, is_valid_url};

/// base-36 字符表（小写字母 + 数字）
const BASE36_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// 生成指定长度的随机 base-36 短码
pub fn generate_random_code(length: usize) -> String {
    use std::iter;

    iter::repeat_with(|| BASE36_CHARS[rand::random_range(0..BASE36_CHARS.len())] as char)
        .take(length)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_random_code_charset() {
        let code = generate_random_code(64);
        assert_eq!(code.len(), 64);
        assert!(
            code.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
    }
}
