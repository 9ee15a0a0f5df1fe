use serde::{Deserialize, Serialize};
use shopvault_macros::Record;

use super::{ProductCategory, Seeded};

/// Tile in the storefront category grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "mv_categories", prefix = "cat")]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ProductCategory,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub count: String,
    #[serde(default)]
    pub class_name: String,
}

impl Seeded for Category {
    fn defaults() -> Vec<Self> {
        let tile = |id: &str,
                    name: &str,
                    kind: ProductCategory,
                    desc: &str,
                    count: &str,
                    class_name: &str| Category {
            id: id.into(),
            name: name.into(),
            kind,
            image: String::new(),
            desc: desc.into(),
            count: count.into(),
            class_name: class_name.into(),
        };
        vec![
            tile(
                "cat-1",
                "KASKLAR",
                ProductCategory::Helmet,
                "Maksimum güvenlik",
                "42 Model",
                "col-span-1 md:col-span-2 row-span-2",
            ),
            tile(
                "cat-2",
                "MONTLAR",
                ProductCategory::Jacket,
                "Her mevsim koruma",
                "28 Model",
                "col-span-1 row-span-1",
            ),
            tile(
                "cat-3",
                "ELDİVENLER",
                ProductCategory::Gloves,
                "Hassas kontrol",
                "35 Model",
                "col-span-1 row-span-1",
            ),
            tile(
                "cat-4",
                "AKSESUARLAR",
                ProductCategory::Accessory,
                "Yol arkadaşları",
                "60+ Ürün",
                "col-span-1 md:col-span-2 row-span-1",
            ),
        ]
    }
}
