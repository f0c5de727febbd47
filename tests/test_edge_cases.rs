use recipe_menu::parse_recipe_text;

#[test]
fn test_empty_and_blank_inputs() {
    for text in ["", "   ", "\n\n\t\n", "\u{00A0}\u{00A0}", "-----\n=====\n___\n———"] {
        let menu = parse_recipe_text(text);
        assert!(menu.is_empty(), "expected empty menu for {:?}", text);
    }
}

#[test]
fn test_title_only() {
    let menu = parse_recipe_text("西红柿鸡蛋面");

    assert_eq!(menu.title, "西红柿鸡蛋面");
    assert!(menu.sections.is_empty());
}

#[test]
fn test_headers_only_produce_no_content() {
    let menu = parse_recipe_text("核心标签\n食材\n做法\n一、准备\n二、烹饪\n小贴士");

    assert_eq!(menu.title, "");
    assert!(menu.meta.is_empty());
    assert!(menu.ingredient_groups.is_empty());
    assert!(menu.sections.is_empty());
    assert!(menu.tips.is_empty());
}

#[test]
fn test_empty_section_before_populated_one() {
    let menu = parse_recipe_text("做法\n一、腌制\n二、炒制\n1. 下锅翻炒");

    assert_eq!(menu.sections.len(), 1);
    assert_eq!(menu.sections[0].title, "炒制");
    assert_eq!(menu.sections[0].items[0].name, "下锅翻炒");
}

#[test]
fn test_badge_is_never_overwritten() {
    let menu = parse_recipe_text("做法\n1. 炖肉\n小火慢炖10分钟\n再转大火收汁\n中火5分钟");
    let step = &menu.sections[0].items[0];

    assert_eq!(step.price, "小火 10分钟");
    assert_eq!(step.desc, "小火慢炖10分钟\n再转大火收汁\n中火5分钟");
}

#[test]
fn test_later_steps_get_their_own_badges() {
    let menu = parse_recipe_text("做法\n1. 焯水\n大火煮开\n2. 炖\n小火1小时\n约20分钟");
    let items = &menu.sections[0].items;

    assert_eq!(items[0].price, "大火");
    assert_eq!(items[1].price, "小火");
}

#[test]
fn test_subtitle_tag_line_goes_to_routing() {
    // A colon line right after the title ends the subtitle and is routed as a step line
    let menu = parse_recipe_text("鱼香肉丝\n难度：中等\n核心标签\n川菜");

    assert_eq!(menu.title, "鱼香肉丝");
    assert_eq!(menu.subtitle, "");
    assert_eq!(menu.meta, vec!["川菜"]);
    assert_eq!(menu.sections[0].items[0].desc, "难度：中等");
}

#[test]
fn test_tips_drop_marker_only_lines() {
    let menu = parse_recipe_text("提示\n注意：\n💡\n不要加水");

    assert_eq!(menu.tips, vec!["不要加水"]);
}

#[test]
fn test_pathological_input_terminates() {
    let noise: String = (0..2000)
        .map(|i| match i % 7 {
            0 => "一、\n",
            1 => "1.\n",
            2 => "：：：\n",
            3 => "|｜|\n",
            4 => "💡\n",
            5 => "第步\n",
            _ => "转转转火火火\n",
        })
        .collect();

    let menu = parse_recipe_text(&noise);
    assert!(menu.sections.iter().all(|s| !s.items.is_empty()));
}
