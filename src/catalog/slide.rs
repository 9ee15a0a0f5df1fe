use serde::{Deserialize, Serialize};
use shopvault_macros::Record;

use super::Seeded;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    Image,
    Video,
}

/// Hero carousel slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "mv_slides")]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    #[serde(default)]
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: SlideKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub image: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub cta: String,
    #[serde(default)]
    pub action: String,
}

impl Seeded for Slide {
    fn defaults() -> Vec<Self> {
        vec![
            Slide {
                id: 1,
                kind: SlideKind::Video,
                video_url: Some("https://www.pexels.com/download/video/5803208/".into()),
                image: "https://images.unsplash.com/photo-1558981403-c5f9899a28bc?q=80&w=2000&auto=format&fit=crop".into(),
                title: "HIZIN VE ÖZGÜRLÜĞÜN YENİ ADRESİ".into(),
                subtitle: "MOTOVIBE İLE SÜRÜŞ DENEYİMİNİ ZİRVEYE TAŞI.".into(),
                cta: "KOLEKSİYONU KEŞFET".into(),
                action: "shop".into(),
            },
            Slide {
                id: 2,
                kind: SlideKind::Image,
                video_url: None,
                image: "https://images.unsplash.com/photo-1622185135505-2d795043ec63?q=80&w=2000&auto=format&fit=crop".into(),
                title: "GÜVENLİĞİ ŞANSA BIRAKMA".into(),
                subtitle: "DÜNYA STANDARTLARINDA EKİPMANLAR, SADECE BURADA.".into(),
                cta: "KASKLARI İNCELE".into(),
                action: "shop".into(),
            },
            Slide {
                id: 3,
                kind: SlideKind::Image,
                video_url: None,
                image: "https://images.unsplash.com/photo-1449426468159-d96dbf08f19f?q=80&w=2000&auto=format&fit=crop".into(),
                title: "MACERA DOLU ROTALAR".into(),
                subtitle: "YENİ YOLLAR KEŞFETMEK İÇİN HAZIR MISIN?".into(),
                cta: "ROTANI OLUŞTUR".into(),
                action: "routes".into(),
            },
        ]
    }
}
