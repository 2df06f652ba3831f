use serde::{Deserialize, Serialize};

use crate::types::CategoryKey;

/// Key the register form uses while no category has been picked yet.
pub const PLACEHOLDER_CATEGORY: &str = "category";

/// One entry of the fixed category table the app ships with.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub key: CategoryKey,
    pub name: String,
    pub color: String,
    pub icon: String
}

impl CategoryDef {
    pub fn new(key: &str, name: &str, color: &str, icon: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            icon: icon.to_string()
        }
    }
}

/// The built-in table, in display order.
pub fn default_categories() -> Vec<CategoryDef> {
    vec![
        CategoryDef::new("purchases", "Compras", "#5636D3", "shopping-bag"),
        CategoryDef::new("food", "Alimentação", "#FF872C", "coffee"),
        CategoryDef::new("salary", "Salário", "#12A454", "dollar-sign"),
        CategoryDef::new("car", "Carro", "#E83F5B", "crosshair"),
        CategoryDef::new("leisure", "Lazer", "#26195C", "heart"),
        CategoryDef::new("studies", "Estudos", "#9C001A", "book"),
    ]
}

pub fn find_category<'a>(categories: &'a [CategoryDef], key: &str) -> Option<&'a CategoryDef> {
    categories.iter().find(|category| category.key == key)
}
