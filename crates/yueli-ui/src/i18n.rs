//! 多语言（i18n）模块。
//!
//! 支持中文（zh）、英文（en）。农历月名/日名、节日名与"休/班"
//! 角标属于历法数据本身，不在此翻译。

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// 中文（默认）
    #[default]
    Zh,
    /// 英文
    En,
}

impl Locale {
    /// 语言代码
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "zh" => Some(Locale::Zh),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// 检测系统语言
    pub fn detect_system() -> Self {
        // 从环境变量检测
        if let Ok(lang) = std::env::var("LANG") {
            if lang.starts_with("en") {
                return Locale::En;
            }
        }
        if let Ok(lang) = std::env::var("LC_ALL") {
            if lang.starts_with("en") {
                return Locale::En;
            }
        }
        // 默认：中文
        Locale::Zh
    }
}

/// UI 文案
#[derive(Debug, Clone)]
pub struct Strings {
    /// 应用标题（兼托盘悬浮提示）
    pub app_title: &'static str,

    // 托盘菜单
    pub menu_today: &'static str,
    pub menu_toggle_window: &'static str,
    pub menu_quit: &'static str,

    // 日历头部
    pub today_button: &'static str,

    /// 周标题，自周日起
    pub week_days: [&'static str; 7],
    /// 托盘时钟的星期名，自周日起
    pub clock_week_days: [&'static str; 7],
}

/// 中文文案
static ZH: Strings = Strings {
    app_title: "月历",
    menu_today: "今天",
    menu_toggle_window: "显示/隐藏日历",
    menu_quit: "退出",
    today_button: "今天",
    week_days: ["日", "一", "二", "三", "四", "五", "六"],
    clock_week_days: ["周日", "周一", "周二", "周三", "周四", "周五", "周六"],
};

/// 英文文案
static EN: Strings = Strings {
    app_title: "YueLi",
    menu_today: "Today",
    menu_toggle_window: "Show/Hide Calendar",
    menu_quit: "Quit",
    today_button: "Today",
    week_days: ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
    clock_week_days: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
};

impl Strings {
    /// 按语言取文案表
    pub fn for_locale(locale: Locale) -> &'static Strings {
        match locale {
            Locale::Zh => &ZH,
            Locale::En => &EN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_codes() {
        assert_eq!(Locale::Zh.code(), "zh");
        assert_eq!(Locale::En.code(), "en");
        assert_eq!(Locale::from_code("zh"), Some(Locale::Zh));
        assert_eq!(Locale::from_code("ja"), None);
    }

    #[test]
    fn strings_for_locales() {
        assert_eq!(Strings::for_locale(Locale::Zh).menu_quit, "退出");
        assert_eq!(Strings::for_locale(Locale::En).menu_quit, "Quit");
        assert_eq!(Strings::for_locale(Locale::Zh).week_days[0], "日");
        assert_eq!(Strings::for_locale(Locale::En).week_days[6], "Sa");
    }
}
