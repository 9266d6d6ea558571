//! Static translation table for the handful of shared UI strings.

use serde::Serialize;

pub const DEFAULT_LANGUAGE: &str = "English";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub code: &'static str,
    pub label: &'static str,
    pub native_label: &'static str,
}

const LANGUAGES: &[Language] = &[
    Language {
        code: "English",
        label: "English",
        native_label: "English",
    },
    Language {
        code: "Malay",
        label: "Bahasa Melayu",
        native_label: "Bahasa Melayu",
    },
    Language {
        code: "Chinese",
        label: "中文",
        native_label: "中文",
    },
    Language {
        code: "Arabic",
        label: "العربية",
        native_label: "العربية",
    },
];

type Table = &'static [(&'static str, &'static str)];

const ENGLISH: Table = &[
    ("welcome", "Welcome"),
    ("settings", "Settings"),
    ("language", "Language"),
    ("save", "Save"),
    ("cancel", "Cancel"),
    ("loading", "Loading..."),
    ("error", "Error"),
    ("success", "Success"),
];

const MALAY: Table = &[
    ("welcome", "Selamat datang"),
    ("settings", "Tetapan"),
    ("language", "Bahasa"),
    ("save", "Simpan"),
    ("cancel", "Batal"),
    ("loading", "Memuatkan..."),
    ("error", "Ralat"),
    ("success", "Berjaya"),
];

const CHINESE: Table = &[
    ("welcome", "欢迎"),
    ("settings", "设置"),
    ("language", "语言"),
    ("save", "保存"),
    ("cancel", "取消"),
    ("loading", "加载中..."),
    ("error", "错误"),
    ("success", "成功"),
];

const ARABIC: Table = &[
    ("welcome", "مرحبا"),
    ("settings", "الإعدادات"),
    ("language", "اللغة"),
    ("save", "حفظ"),
    ("cancel", "إلغاء"),
    ("loading", "جار التحميل..."),
    ("error", "خطأ"),
    ("success", "نجح"),
];

pub fn available_languages() -> &'static [Language] {
    LANGUAGES
}

pub fn is_supported(code: &str) -> bool {
    LANGUAGES.iter().any(|l| l.code == code)
}

/// Translation table for `code`, falling back to English.
pub fn translations(code: &str) -> Table {
    match code {
        "Malay" => MALAY,
        "Chinese" => CHINESE,
        "Arabic" => ARABIC,
        _ => ENGLISH,
    }
}

/// Looks up `key`; unknown keys come back unchanged.
pub fn translate<'a>(code: &str, key: &'a str) -> &'a str {
    translations(code)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}
