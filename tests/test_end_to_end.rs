use pretty_assertions::assert_eq;
use recipe_menu::{parse_recipe_text, IngredientGroup, ParsedMenu, Section, StepItem};

const BRAISED_PORK: &str = "红烧肉
经典家常菜，肥而不腻
核心标签
家常菜|下饭
食材
主料
猪肉：500g
做法
一、准备
1. 切块焯水
2. 大火烧开转小火炖40分钟
小贴士
💡选肥瘦相间的肉
";

fn step(name: &str, price: &str, desc: &str) -> StepItem {
    StepItem {
        id: String::new(),
        name: name.to_string(),
        price: price.to_string(),
        desc: desc.to_string(),
    }
}

#[test]
fn test_braised_pork() {
    let menu = parse_recipe_text(BRAISED_PORK).without_ids();

    let expected = ParsedMenu {
        title: "红烧肉".to_string(),
        subtitle: "经典家常菜，肥而不腻".to_string(),
        meta: vec!["家常菜".to_string(), "下饭".to_string()],
        ingredient_groups: vec![IngredientGroup {
            category: "主料".to_string(),
            items: vec!["猪肉：500g".to_string()],
        }],
        sections: vec![Section {
            id: String::new(),
            title: "准备".to_string(),
            items: vec![
                step("切块焯水", "", ""),
                step("大火烧开转小火炖40分钟", "大火 转小火 40分钟", ""),
            ],
        }],
        tips: vec!["选肥瘦相间的肉".to_string()],
    };

    assert_eq!(menu, expected);
}

#[test]
fn test_ids_are_assigned() {
    let menu = parse_recipe_text(BRAISED_PORK);
    let section = &menu.sections[0];

    assert!(!section.id.is_empty());
    assert!(section.items.iter().all(|i| !i.id.is_empty()));
    assert_ne!(section.items[0].id, section.items[1].id);
}

#[test]
fn test_mixed_markers_and_sections() {
    let text = "\u{00A0}🍅 番茄牛腩\u{00A0}
秋冬暖身
------------
🛒 食材准备
主料：牛腩500g，番茄3个
调料
- 盐: 适量
腌料
生抽：1勺
\u{1F468}\u{200D}\u{1F373} 详细做法
一、处理牛腩
① 牛腩切块，冷水下锅
焯水约 3 分钟
二、炖煮
第1步：热油
油温六成热下番茄
第2步
转中火炖1小时
\u{26A0}\u{FE0F} 注意
牛腩要冷水下锅
";
    let menu = parse_recipe_text(text).without_ids();

    assert_eq!(menu.title, "番茄牛腩");
    assert_eq!(menu.subtitle, "秋冬暖身");
    assert!(menu.meta.is_empty());

    let groups: Vec<(&str, Vec<&str>)> = menu
        .ingredient_groups
        .iter()
        .map(|g| (g.category.as_str(), g.items.iter().map(String::as_str).collect()))
        .collect();
    assert_eq!(
        groups,
        vec![
            ("主料", vec!["牛腩500g", "番茄3个"]),
            ("调料", vec!["盐：适量"]),
            ("腌料", vec!["生抽：1勺"]),
        ]
    );

    assert_eq!(menu.sections.len(), 2);
    assert_eq!(menu.sections[0].title, "处理牛腩");
    assert_eq!(
        menu.sections[0].items,
        vec![step("牛腩切块，冷水下锅", "约 3 分钟", "焯水约 3 分钟")]
    );

    assert_eq!(menu.sections[1].title, "炖煮");
    assert_eq!(
        menu.sections[1].items,
        vec![
            step("热油", "油温六成热", "油温六成热下番茄"),
            step("步骤 2", "转中火", "转中火炖1小时"),
        ]
    );

    assert_eq!(menu.tips, vec!["牛腩要冷水下锅"]);
}

#[test]
fn test_no_headers_routes_everything_to_steps() {
    let text = "这是一段没有标题也没有任何标记的菜谱说明文字，一共超过了三十个字
先把鸡蛋打散
中火炒熟";
    let menu = parse_recipe_text(text);

    assert_eq!(menu.title, "");
    assert_eq!(menu.sections.len(), 1);
    assert_eq!(menu.sections[0].title, "步骤");

    let item = &menu.sections[0].items[0];
    assert_eq!(item.name, "");
    assert_eq!(item.price, "中火");
    assert_eq!(item.desc.lines().count(), 3);
}

#[test]
fn test_json_shape() {
    let menu = parse_recipe_text(BRAISED_PORK);
    let value = serde_json::to_value(&menu).unwrap();

    assert_eq!(value["ingredientGroups"][0]["category"], "主料");
    assert_eq!(value["sections"][0]["items"][1]["price"], "大火 转小火 40分钟");
    assert_eq!(value["tips"][0], "选肥瘦相间的肉");
}
