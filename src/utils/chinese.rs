use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use zhconv::{zhconv, Variant};

static HAN_SCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Han}").unwrap());

/// 是否包含汉字
pub fn contains_han_script(input: &str) -> bool {
    HAN_SCRIPT.is_match(input)
}

/// 繁简转换接口
///
/// 网易云的专辑名基本都是简体，比较前需要把繁体专辑名转为简体。
#[async_trait]
pub trait Simplifier: Send + Sync {
    async fn to_simplified(&self, input: &str) -> String;
}

/// 基于 zhconv 词典的本地繁简转换
#[derive(Debug, Clone, Copy, Default)]
pub struct ZhconvSimplifier;

#[async_trait]
impl Simplifier for ZhconvSimplifier {
    async fn to_simplified(&self, input: &str) -> String {
        zhconv(input, Variant::ZhHans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_han_script() {
        assert!(contains_han_script("魔杰座"));
        assert!(contains_han_script("Jay 周杰伦"));
        assert!(!contains_han_script("Abbey Road"));
        assert!(!contains_han_script("ひらがな"));
        assert!(!contains_han_script(""));
    }

    #[tokio::test]
    async fn test_zhconv_simplifier() {
        let simplifier = ZhconvSimplifier;
        assert_eq!(simplifier.to_simplified("葉惠美").await, "叶惠美");
        assert_eq!(simplifier.to_simplified("Abbey Road").await, "Abbey Road");
    }
}
