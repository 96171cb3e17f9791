//! Default theme configuration.
//!
//! UI strings are the Simplified Chinese labels shown by the default theme.
//! Field names serialize to the engine's camelCase schema.

use serde::Serialize;
use sz_nav::{NavLink, Sidebar};

use crate::content::{sidebar, top_nav};

/// Repository the documentation is edited in.
const REPOSITORY_URL: &str = "https://github.com/wangqiyangx/swift-zh";

/// Options for the default theme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Top navigation bar.
    pub nav: Vec<NavLink>,
    /// Sidebars keyed by route prefix.
    pub sidebar: Sidebar,
    /// Local search settings.
    pub search: SearchConfig,
    /// "Edit this page" link.
    pub edit_link: EditLink,
    /// Page footer.
    pub footer: Footer,
    /// Previous/next page labels.
    pub doc_footer: DocFooter,
    /// On-page outline.
    pub outline: Outline,
    /// Last-updated timestamp.
    pub last_updated: LastUpdated,
    /// 404 page.
    pub not_found: NotFound,
    pub lang_menu_label: String,
    pub return_to_top_label: String,
    pub sidebar_menu_label: String,
    pub dark_mode_switch_label: String,
    pub light_mode_switch_title: String,
    pub dark_mode_switch_title: String,
    pub skip_to_content_label: String,
    /// Icons linking to external profiles.
    pub social_links: Vec<SocialLink>,
}

/// Local search settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchConfig {
    pub options: SearchOptions,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchOptions {
    pub translations: SearchTranslations,
}

/// Search dialog strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchTranslations {
    pub button: SearchButton,
    pub modal: SearchModal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchButton {
    pub button_text: String,
    pub button_aria_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchModal {
    pub display_details: String,
    pub reset_button_title: String,
    pub back_button_title: String,
    pub no_results_text: String,
    pub footer: SearchFooter,
}

/// Keyboard hints at the bottom of the search dialog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFooter {
    pub select_text: String,
    pub select_key_aria_label: String,
    pub navigate_text: String,
    pub navigate_up_key_aria_label: String,
    pub navigate_down_key_aria_label: String,
    pub close_text: String,
    pub close_key_aria_label: String,
}

/// "Edit this page" link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EditLink {
    /// URL pattern; `:path` is replaced with the page source path.
    pub pattern: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub message: String,
    pub copyright: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DocFooter {
    pub prev: String,
    pub next: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Outline {
    /// Heading depth shown (`deep` = h2 through h6).
    pub level: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LastUpdated {
    pub text: String,
    pub format_options: FormatOptions,
}

/// `Intl.DateTimeFormat` options for the last-updated timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    pub force_locale: bool,
    pub date_style: String,
    pub time_style: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFound {
    pub title: String,
    pub quote: String,
    pub link_label: String,
    pub link_text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    /// Built-in icon name.
    pub icon: String,
    pub link: String,
    pub aria_label: String,
}

impl SocialLink {
    fn new(icon: &str, link: &str, aria_label: &str) -> Self {
        Self {
            icon: icon.to_owned(),
            link: link.to_owned(),
            aria_label: aria_label.to_owned(),
        }
    }
}

impl SearchTranslations {
    fn zh() -> Self {
        Self {
            button: SearchButton {
                button_text: "搜索".to_owned(),
                button_aria_label: "搜索".to_owned(),
            },
            modal: SearchModal {
                display_details: "显示细节".to_owned(),
                reset_button_title: "重置搜索".to_owned(),
                back_button_title: "返回".to_owned(),
                no_results_text: "无搜索结果".to_owned(),
                footer: SearchFooter {
                    select_text: "跳转".to_owned(),
                    select_key_aria_label: "跳转".to_owned(),
                    navigate_text: "选择".to_owned(),
                    navigate_up_key_aria_label: "选择上一项".to_owned(),
                    navigate_down_key_aria_label: "选择下一项".to_owned(),
                    close_text: "关闭".to_owned(),
                    close_key_aria_label: "关闭".to_owned(),
                },
            },
        }
    }
}

impl ThemeConfig {
    /// Theme configuration for the site.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nav: top_nav(),
            sidebar: sidebar(),
            search: SearchConfig {
                options: SearchOptions {
                    translations: SearchTranslations::zh(),
                },
            },
            edit_link: EditLink {
                pattern: format!("{REPOSITORY_URL}/edit/main/:path"),
                text: "在 GitHub 上编辑此页面".to_owned(),
            },
            footer: Footer {
                message: "基于 MIT 许可发布".to_owned(),
                copyright: "版权所有 © 2025 @wangqiyangx".to_owned(),
            },
            doc_footer: DocFooter {
                prev: "上一页".to_owned(),
                next: "下一页".to_owned(),
            },
            outline: Outline {
                level: "deep".to_owned(),
                label: "页面导航".to_owned(),
            },
            last_updated: LastUpdated {
                text: "最后更新于".to_owned(),
                format_options: FormatOptions {
                    force_locale: true,
                    date_style: "full".to_owned(),
                    time_style: "medium".to_owned(),
                },
            },
            not_found: NotFound {
                title: "页面未找到".to_owned(),
                quote: "但如果您不改变方向，并且继续寻找，您可能最终会到达您所前往的地方。"
                    .to_owned(),
                link_label: "前往首页".to_owned(),
                link_text: "带我回首页".to_owned(),
            },
            lang_menu_label: "多语言".to_owned(),
            return_to_top_label: "回到顶部".to_owned(),
            sidebar_menu_label: "菜单".to_owned(),
            dark_mode_switch_label: "主题".to_owned(),
            light_mode_switch_title: "切换到浅色模式".to_owned(),
            dark_mode_switch_title: "切换到深色模式".to_owned(),
            skip_to_content_label: "跳转到内容".to_owned(),
            social_links: vec![
                SocialLink::new("github", REPOSITORY_URL, "GitHub"),
                SocialLink::new("x", "https://x.com/wangqiyangx", "X"),
            ],
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new()
    }
}
