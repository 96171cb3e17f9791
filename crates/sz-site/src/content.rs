//! Navigation content.
//!
//! Chapters are listed in book order; that order is what readers see.

use sz_nav::{NavLink, Sidebar, SidebarGroup, SidebarItem, SidebarSection};

/// Route prefix under which the book sidebar is shown.
pub const ROUTE_PREFIX: &str = "/docs/";

const GUIDE_BASE: &str = "/docs/guide/";
const REFERENCE_BASE: &str = "/docs/reference/";

/// Pages at the top of the book, before the guide.
const INTRODUCTION: &[(&str, &str)] = &[
    ("Swift 入门之旅", "a-swift-tour"),
    ("版本兼容性", "version-compatibility"),
];

/// Language guide chapters.
const GUIDE: &[(&str, &str)] = &[
    ("基础语法", "the-basics"),
    ("基本运算符", "basic-operators"),
    ("字符串和字符", "strings-and-characters"),
    ("集合类型", "collection-types"),
    ("控制流", "control-flow"),
    ("函数", "functions"),
    ("闭包", "closures"),
    ("枚举", "enumerations"),
    ("结构体和类", "structures-and-classes"),
    ("属性", "properties"),
    ("方法", "methods"),
    ("下标", "subscripts"),
    ("继承", "inheritance"),
    ("初始化", "initialization"),
    ("反初始化", "deinitialization"),
    ("可选链", "optional-chaining"),
    ("错误处理", "error-handling"),
    ("并发", "concurrency"),
    ("宏", "macros"),
    ("类型转换", "type-casting"),
    ("嵌套类型", "nested-types"),
    ("扩展", "extensions"),
    ("协议", "protocols"),
    ("泛型", "generics"),
    ("不透明和装箱协议类型", "opaque-and-boxed-protocol-types"),
    ("自动引用计数", "automatic-reference-counting"),
    ("内存安全", "memory-safety"),
    ("访问控制", "access-control"),
    ("高级运算符", "advanced-operators"),
];

/// Language reference chapters.
const REFERENCE: &[(&str, &str)] = &[
    ("词法结构", "lexical-structure"),
    ("类型", "types"),
    ("表达式", "expressions"),
    ("语句", "statements"),
    ("声明", "declarations"),
];

fn links(entries: &[(&str, &str)]) -> Vec<SidebarItem> {
    entries
        .iter()
        .map(|&(text, link)| NavLink::new(text, link).into())
        .collect()
}

/// Top navigation bar.
#[must_use]
pub fn top_nav() -> Vec<NavLink> {
    vec![
        NavLink::new("指南", GUIDE_BASE),
        NavLink::new("参考", REFERENCE_BASE),
    ]
}

/// Book sidebar.
#[must_use]
pub fn sidebar() -> Sidebar {
    let mut items = links(INTRODUCTION);
    items.push(
        SidebarSection::new("指南", links(GUIDE))
            .with_base(GUIDE_BASE)
            .into(),
    );
    items.push(
        SidebarSection::new("参考", links(REFERENCE))
            .with_base(REFERENCE_BASE)
            .with_link("/")
            .into(),
    );

    Sidebar::new().with_group(ROUTE_PREFIX, SidebarGroup::new(items).with_base(ROUTE_PREFIX))
}
