//! UI 主题定义。
//!
//! 浅色/深色两套配色，含节日、节气与"休/班"角标用色。

use iced::Color;

/// 主题模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    /// 浅色
    Light,
    /// 深色
    Dark,
}

/// 主题配色
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// 背景色
    pub background: [f32; 3],
    /// 主要文字色
    pub text_primary: [f32; 3],
    /// 次要文字色（农历小字）
    pub text_secondary: [f32; 3],
    /// 淡化文字色（溢出月份格子）
    pub text_faded: [f32; 3],
    /// 强调色（选中/今天）
    pub accent: [f32; 3],
    /// 选中格子上的文字色
    pub on_accent: [f32; 3],
    /// 节日文字色
    pub festival: [f32; 3],
    /// 节气文字色
    pub solar_term: [f32; 3],
    /// 周末日号文字色
    pub weekend: [f32; 3],
    /// "休"角标色
    pub rest_badge: [f32; 3],
    /// "班"角标色
    pub work_badge: [f32; 3],
    /// 今天格子的底色（未选中时）
    pub today_fill: [f32; 3],
    /// 悬停格子的底色
    pub hover_fill: [f32; 3],
}

impl ThemeColors {
    /// 浅色配色
    pub fn light() -> Self {
        Self {
            background: [0.97, 0.97, 0.98],     // #F7F7FA
            text_primary: [0.12, 0.12, 0.14],   // #1F1F24
            text_secondary: [0.45, 0.45, 0.50], // #737380
            text_faded: [0.72, 0.72, 0.76],     // #B8B8C2
            accent: [0.23, 0.51, 0.96],         // #3B82F6
            on_accent: [1.0, 1.0, 1.0],         // #FFFFFF
            festival: [0.86, 0.22, 0.22],       // #DB3838
            solar_term: [0.13, 0.60, 0.38],     // #219961
            weekend: [0.86, 0.22, 0.22],        // #DB3838
            rest_badge: [0.86, 0.22, 0.22],     // #DB3838
            work_badge: [0.98, 0.45, 0.09],     // #F97316
            today_fill: [0.88, 0.92, 0.99],     // #E0EBFC
            hover_fill: [0.90, 0.90, 0.93],     // #E5E5ED
        }
    }

    /// 深色配色
    pub fn dark() -> Self {
        Self {
            background: [0.11, 0.11, 0.12],     // #1C1C1F
            text_primary: [0.95, 0.95, 0.96],   // #F2F2F5
            text_secondary: [0.60, 0.60, 0.65], // #9999A6
            text_faded: [0.35, 0.35, 0.39],     // #595963
            accent: [0.23, 0.51, 0.96],         // #3B82F6
            on_accent: [1.0, 1.0, 1.0],         // #FFFFFF
            festival: [0.94, 0.37, 0.37],       // #EF5E5E
            solar_term: [0.25, 0.74, 0.50],     // #40BD80
            weekend: [0.94, 0.37, 0.37],        // #EF5E5E
            rest_badge: [0.94, 0.37, 0.37],     // #EF5E5E
            work_badge: [0.98, 0.55, 0.24],     // #FA8C3D
            today_fill: [0.15, 0.22, 0.35],     // #263859
            hover_fill: [0.18, 0.18, 0.21],     // #2E2E36
        }
    }

    /// 按模式取配色
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// [f32; 3] → iced 颜色
pub fn color(rgb: [f32; 3]) -> Color {
    Color::from_rgb(rgb[0], rgb[1], rgb[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ() {
        let light = ThemeColors::light();
        let dark = ThemeColors::dark();
        assert_ne!(light.background, dark.background);
        assert_eq!(light.accent, dark.accent);
    }

    #[test]
    fn color_conversion() {
        let c = color([1.0, 0.0, 0.0]);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
    }
}
