use serde::{Deserialize, Serialize};
use shopvault_macros::Record;

use super::Seeded;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "Kolay")]
    Easy,
    #[serde(rename = "Orta")]
    Medium,
    #[serde(rename = "Zor")]
    Hard,
    Extreme,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "mv_routes", prefix = "route", validate = "check")]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub best_season: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub coordinates: Coordinate,
    #[serde(default)]
    pub path: Vec<Coordinate>,
}

impl Route {
    fn check(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("route title is empty".into());
        }
        let valid = |c: &Coordinate| {
            (-90.0..=90.0).contains(&c.lat) && (-180.0..=180.0).contains(&c.lng)
        };
        if !valid(&self.coordinates) || !self.path.iter().all(valid) {
            return Err("coordinate out of range".into());
        }
        Ok(())
    }
}

impl Seeded for Route {
    fn defaults() -> Vec<Self> {
        vec![
            Route {
                id: "route-1".into(),
                title: "Trans Toros Geçişi".into(),
                description: "Akdeniz'in zirvelerinde virajlı ve manzaralı bir sürüş.".into(),
                image: "https://images.unsplash.com/photo-1605152276897-4f618f831968?q=80&w=1200&auto=format&fit=crop".into(),
                difficulty: Difficulty::Hard,
                distance: "320 km".into(),
                duration: "6 Saat".into(),
                location: "Antalya - Isparta".into(),
                best_season: "İlkbahar - Sonbahar".into(),
                tags: vec!["Virajlı".into(), "Dağ".into(), "Manzara".into()],
                coordinates: Coordinate::new(36.8841, 30.7056),
                path: vec![
                    Coordinate::new(36.8841, 30.7056),
                    Coordinate::new(37.0500, 30.5500),
                    Coordinate::new(37.3000, 30.7500),
                    Coordinate::new(37.7648, 30.5566),
                ],
            },
            Route {
                id: "route-2".into(),
                title: "Ege Sahil Yolu".into(),
                description: "Zeytin ağaçları arasından geçen sakin ve keyifli bir rota.".into(),
                image: "https://images.unsplash.com/photo-1476514525535-07fb3b4ae5f1?q=80&w=1200&auto=format&fit=crop".into(),
                difficulty: Difficulty::Easy,
                distance: "180 km".into(),
                duration: "3 Saat".into(),
                location: "İzmir - Çanakkale".into(),
                best_season: "Yaz".into(),
                tags: vec!["Sahil".into(), "Kamp".into(), "Rahat".into()],
                coordinates: Coordinate::new(38.4192, 27.1287),
                path: vec![
                    Coordinate::new(38.4192, 27.1287),
                    Coordinate::new(38.8000, 26.9500),
                    Coordinate::new(39.3000, 26.7000),
                    Coordinate::new(39.5000, 26.6000),
                ],
            },
            Route {
                id: "route-6".into(),
                title: "Karanlık Kanyon & Taş Yolu".into(),
                description: "El emeği tüneller ve uçurum kenarı sürüşü içeren adrenalin rotası.".into(),
                image: "https://images.unsplash.com/photo-1519681393784-d120267933ba?q=80&w=1200&auto=format&fit=crop".into(),
                difficulty: Difficulty::Extreme,
                distance: "60 km".into(),
                duration: "4 Saat".into(),
                location: "Erzincan - Kemaliye".into(),
                best_season: "Yaz - Sonbahar".into(),
                tags: vec!["Adventure".into(), "Kanyon".into(), "Tünel".into()],
                coordinates: Coordinate::new(39.2630, 38.4962),
                path: vec![
                    Coordinate::new(39.2630, 38.4962),
                    Coordinate::new(39.3000, 38.5500),
                    Coordinate::new(39.3500, 38.6000),
                ],
            },
        ]
    }
}
