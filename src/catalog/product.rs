use serde::{Deserialize, Serialize};
use shopvault_macros::Record;

use super::Seeded;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductCategory {
    #[serde(rename = "Kask")]
    Helmet,
    #[serde(rename = "Mont")]
    Jacket,
    #[serde(rename = "Eldiven")]
    Gloves,
    #[serde(rename = "Bot")]
    Boots,
    #[serde(rename = "Pantolon")]
    Pants,
    #[serde(rename = "Koruma")]
    Protection,
    #[serde(rename = "İnterkom")]
    Intercom,
    #[serde(rename = "Aksesuar")]
    Accessory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "mv_products", validate = "check")]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: ProductCategory,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub is_negotiable: bool,
}

impl Product {
    /// A draft product ready for `create`; the id is assigned on creation.
    pub fn draft(name: impl Into<String>, price: f64, category: ProductCategory) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: String::new(),
            price,
            category,
            image: String::new(),
            images: Vec::new(),
            rating: 0.0,
            features: Vec::new(),
            stock: 0,
            is_negotiable: false,
        }
    }

    fn check(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("product name is empty".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("invalid price {}", self.price));
        }
        Ok(())
    }
}

fn unsplash(photo: &str) -> String {
    format!(
        "https://images.unsplash.com/{}?q=80&w=800&auto=format&fit=crop",
        photo
    )
}

impl Seeded for Product {
    fn defaults() -> Vec<Self> {
        vec![
            Product {
                id: 1,
                name: "AeroSpeed Carbon Pro Kask".into(),
                description: "Yüksek hız aerodinamiği için tasarlanmış ultra hafif karbon fiber kask.".into(),
                price: 8500.0,
                category: ProductCategory::Helmet,
                image: unsplash("photo-1558981408-db0ecd8a1ee4"),
                images: vec![
                    unsplash("photo-1558981408-db0ecd8a1ee4"),
                    unsplash("photo-1596516109370-29001ec8ec36"),
                ],
                rating: 4.8,
                features: vec![
                    "Karbon Fiber Kabuk".into(),
                    "Pinlock Dahil".into(),
                    "ECE 22.06 Sertifikalı".into(),
                ],
                stock: 15,
                is_negotiable: true,
            },
            Product {
                id: 2,
                name: "Urban Rider Deri Mont".into(),
                description: "Şehir içi sürüşler için şık ve korumalı deri mont.".into(),
                price: 5200.0,
                category: ProductCategory::Jacket,
                image: unsplash("photo-1551028919-ac7edd05b6ea"),
                images: vec![unsplash("photo-1551028919-ac7edd05b6ea")],
                rating: 4.6,
                features: vec!["%100 Gerçek Deri".into(), "D3O Omuz ve Dirsek Koruma".into()],
                stock: 8,
                is_negotiable: true,
            },
            Product {
                id: 9,
                name: "ProMoto Seramik Zincir Yağı".into(),
                description: "Zorlu hava koşullarına dayanıklı, sıçrama yapmayan seramik zincir yağı.".into(),
                price: 450.0,
                category: ProductCategory::Accessory,
                image: unsplash("photo-1532649538666-93838aeef42e"),
                images: vec![unsplash("photo-1532649538666-93838aeef42e")],
                rating: 4.9,
                features: vec!["Seramik Kaplama".into(), "Suya Dayanıklı".into()],
                stock: 50,
                is_negotiable: false,
            },
        ]
    }
}
