use std::collections::HashMap;

/// 双语词典抽象：core 不关心词典来自文件/内存/网络。
///
/// 约定：
/// - 按词完全匹配；繁体与简体词头都应能查到同一条释义
/// - 查不到返回 `None`，报告里省略释义，不算错误
pub trait Dictionary: Send + Sync {
    /// 查询词的首条释义。
    fn definition(&self, word: &str) -> Option<&str>;
}

impl<T> Dictionary for &T
where
    T: Dictionary + ?Sized,
{
    fn definition(&self, word: &str) -> Option<&str> {
        (**self).definition(word)
    }
}

impl Dictionary for HashMap<String, String> {
    fn definition(&self, word: &str) -> Option<&str> {
        self.get(word).map(String::as_str)
    }
}

/// 没有词典时使用。
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDictionary;

impl Dictionary for NoDictionary {
    fn definition(&self, _word: &str) -> Option<&str> {
        None
    }
}

/// 注音（拼音）查询：返回以空格分隔的音节串；尽力而为，缺失时报告里留空。
pub trait Romanizer: Send + Sync {
    fn romanize(&self, word: &str) -> Option<String>;
}

impl<T> Romanizer for &T
where
    T: Romanizer + ?Sized,
{
    fn romanize(&self, word: &str) -> Option<String> {
        (**self).romanize(word)
    }
}

/// 先查 `A`，查不到再查 `B`（例如：词典里的整词读音优先，逐字注音兜底）。
impl<A, B> Romanizer for (A, B)
where
    A: Romanizer,
    B: Romanizer,
{
    fn romanize(&self, word: &str) -> Option<String> {
        self.0.romanize(word).or_else(|| self.1.romanize(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Table(&'static [(&'static str, &'static str)]);

    impl Romanizer for Table {
        fn romanize(&self, word: &str) -> Option<String> {
            self.0
                .iter()
                .find(|(w, _)| *w == word)
                .map(|(_, p)| (*p).to_string())
        }
    }

    #[test]
    fn pair_falls_back_to_second() {
        let first = Table(&[("银行", "yín háng")]);
        let second = Table(&[("银行", "yín xíng"), ("行", "xíng")]);
        let r = (&first, &second);
        assert_eq!(r.romanize("银行").as_deref(), Some("yín háng"));
        assert_eq!(r.romanize("行").as_deref(), Some("xíng"));
        assert_eq!(r.romanize("走"), None);
    }

    #[test]
    fn map_dictionary_lookup() {
        let mut d = HashMap::new();
        d.insert("猫".to_string(), "cat".to_string());
        assert_eq!(d.definition("猫"), Some("cat"));
        assert_eq!(d.definition("狗"), None);
        assert_eq!(NoDictionary.definition("猫"), None);
    }
}
