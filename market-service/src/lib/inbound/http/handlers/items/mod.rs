use serde::Serialize;

use crate::domain::item::models::Item;

pub mod add_item_to_user;
pub mod create_item;
pub mod delete_item;
pub mod get_item;
pub mod list_items;
pub mod list_items_by_category;
pub mod list_items_by_user;
pub mod update_item;

/// Catalog item representation shared by the item endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemData {
    #[serde(rename = "itemId")]
    pub item_id: String,
    #[serde(rename = "itemName")]
    pub item_name: String,
    pub category: String,
    #[serde(rename = "itemDesc")]
    pub item_desc: String,
    pub stock: i32,
    #[serde(rename = "itemPic")]
    pub item_pic: String,
    pub rating: Option<i32>,
    pub reviews: Vec<String>,
}

impl From<&Item> for ItemData {
    fn from(item: &Item) -> Self {
        Self {
            item_id: item.id.to_string(),
            item_name: item.name.clone(),
            category: item.category.clone(),
            item_desc: item.description.clone(),
            stock: item.stock.count(),
            item_pic: item.image.clone(),
            rating: item.rating,
            reviews: item.reviews.clone(),
        }
    }
}

/// List payload shared by the item list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemListData {
    pub items: Vec<ItemData>,
}

impl ItemListData {
    pub fn from_items(items: &[Item]) -> Self {
        Self {
            items: items.iter().map(ItemData::from).collect(),
        }
    }
}
