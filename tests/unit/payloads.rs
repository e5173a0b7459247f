//! Unit tests for provider payload decoding
//!
//! Provider responses arrive as camelCase JSON; these tests decode
//! representative payloads into the model types.

use category_navigator::*;

const FOREST_JSON: &str = r#"[
    {
        "id": 1,
        "categoryName": "Dien thoai",
        "slug": "dien-thoai",
        "image": "https://cdn.example.com/c/1.png",
        "parentId": null,
        "isActive": true,
        "children": [
            {"id": 11, "categoryName": "iPhone", "slug": "iphone", "parentId": 1, "children": []},
            {"id": 12, "categoryName": "Samsung", "slug": "samsung", "parentId": 1, "isActive": false}
        ]
    }
]"#;

const PRODUCTS_JSON: &str = r#"{
    "items": [
        {"id": 100, "slug": "iphone-15", "name": "iPhone 15", "image": null},
        {"id": 101, "slug": "galaxy-s24", "name": "Galaxy S24"}
    ],
    "total": 2
}"#;

#[test]
fn test_decode_forest() {
    let forest: Vec<CategoryNode> = serde_json::from_str(FOREST_JSON).unwrap();
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].category_name, "Dien thoai");
    assert_eq!(forest[0].children.len(), 2);
    assert!(!forest[0].children[1].is_active);

    let location = PathResolver::default().resolve("/category/dien-thoai/samsung");
    let tree = TreeMatcher::new(&location).match_forest(&forest);
    assert_eq!(tree[0].children.len(), 1, "inactive child hidden");
}

#[test]
fn test_decode_products() {
    let list: ProductList = serde_json::from_str(PRODUCTS_JSON).unwrap();
    assert_eq!(list.total, 2);
    assert_eq!(list.items[1].image, None);

    let target = TargetItem::from(&list.items[0]);
    assert_eq!(target.slug, "iphone-15");
}

#[test]
fn test_target_item_serializes_camel_case() {
    let target = TargetItem {
        slug: "laptop".to_string(),
        name: "Laptop".to_string(),
        image: None,
    };
    let json = serde_json::to_value(&target).unwrap();
    assert_eq!(json["slug"], "laptop");
    assert_eq!(json["name"], "Laptop");
}
