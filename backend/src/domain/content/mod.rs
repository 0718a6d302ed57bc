//! # Content Store
//!
//! Static cultivation guidance compiled into the binary: the crop catalog
//! and the dragon fruit guide (lifecycle stages, soil, fertilizer schedule,
//! pests and diseases). Everything here is read-only and lives for the
//! whole process.
//!
//! Bilingual text is stored as [`Text`] pairs, so an English entry can never
//! be missing its Bangla counterpart.

mod crops;
mod dragon_fruit;

use shared::Language;

use crate::domain::language_service::resolve;

pub use crops::CROPS;
pub use dragon_fruit::{
    DRAGON_FRUIT_PESTS_DISEASES, DRAGON_FRUIT_QUICK_TIPS, DRAGON_FRUIT_SOIL, DRAGON_FRUIT_STAGES,
    FERTILIZER_SCHEDULE,
};

/// A piece of text in both languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text {
    pub en: &'static str,
    pub bn: &'static str,
}

impl Text {
    pub const fn new(en: &'static str, bn: &'static str) -> Self {
        Self { en, bn }
    }

    /// The text in `language`
    pub fn get(&self, language: Language) -> &'static str {
        resolve(language, self.en, self.bn)
    }
}

/// A crop the app offers guidance for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crop {
    pub id: &'static str,
    pub name: Text,
    pub icon: &'static str,
    pub description: Text,
    pub growth_stages: &'static [&'static str],
    pub common_diseases: &'static [&'static str],
    pub care_tips: &'static [&'static str],
}

/// One stage of the dragon fruit lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragonFruitStage {
    pub id: &'static str,
    pub name: Text,
    pub duration: Text,
    pub description: Text,
    pub care_tips: &'static [Text],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PestDiseaseKind {
    Pest,
    Disease,
}

impl PestDiseaseKind {
    pub fn label(&self) -> Text {
        match self {
            PestDiseaseKind::Pest => Text::new("Pest", "পোকা"),
            PestDiseaseKind::Disease => Text::new("Disease", "রোগ"),
        }
    }
}

/// A pest or disease with its symptoms and remedies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PestDisease {
    pub id: &'static str,
    pub name: Text,
    pub kind: PestDiseaseKind,
    pub symptoms: &'static [Text],
    pub treatment: &'static [Text],
    pub prevention: &'static [Text],
    pub pesticides: &'static [Text],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoilRequirement {
    pub soil_type: Text,
    /// pH range, language neutral
    pub ph: &'static str,
    pub drainage: Text,
    pub nutrients: &'static [Text],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FertilizerScheduleEntry {
    pub stage: Text,
    pub fertilizers: &'static [Text],
}

/// Read access to the static tables
pub fn crops() -> &'static [Crop] {
    CROPS
}

pub fn crop_by_id(id: &str) -> Option<&'static Crop> {
    CROPS.iter().find(|crop| crop.id == id)
}

pub fn dragon_fruit_stages() -> &'static [DragonFruitStage] {
    DRAGON_FRUIT_STAGES
}

pub fn stage_by_id(id: &str) -> Option<&'static DragonFruitStage> {
    DRAGON_FRUIT_STAGES.iter().find(|stage| stage.id == id)
}

pub fn dragon_fruit_soil() -> &'static SoilRequirement {
    &DRAGON_FRUIT_SOIL
}

pub fn fertilizer_schedule() -> &'static [FertilizerScheduleEntry] {
    FERTILIZER_SCHEDULE
}

pub fn pests_diseases() -> &'static [PestDisease] {
    DRAGON_FRUIT_PESTS_DISEASES
}

pub fn pest_disease_by_id(id: &str) -> Option<&'static PestDisease> {
    DRAGON_FRUIT_PESTS_DISEASES.iter().find(|item| item.id == id)
}

pub fn pests_diseases_of(kind: PestDiseaseKind) -> impl Iterator<Item = &'static PestDisease> {
    DRAGON_FRUIT_PESTS_DISEASES
        .iter()
        .filter(move |item| item.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::GrowthStage;
    use std::collections::HashSet;

    fn all_texts() -> Vec<Text> {
        let mut texts = Vec::new();
        for crop in crops() {
            texts.push(crop.name);
            texts.push(crop.description);
        }
        for stage in dragon_fruit_stages() {
            texts.extend([stage.name, stage.duration, stage.description]);
            texts.extend_from_slice(stage.care_tips);
        }
        let soil = dragon_fruit_soil();
        texts.extend([soil.soil_type, soil.drainage]);
        texts.extend_from_slice(soil.nutrients);
        for entry in fertilizer_schedule() {
            texts.push(entry.stage);
            texts.extend_from_slice(entry.fertilizers);
        }
        for item in pests_diseases() {
            texts.push(item.name);
            for list in [item.symptoms, item.treatment, item.prevention, item.pesticides] {
                texts.extend_from_slice(list);
            }
        }
        texts.extend_from_slice(DRAGON_FRUIT_QUICK_TIPS);
        texts
    }

    #[test]
    fn test_crop_catalog() {
        let ids: Vec<&str> = crops().iter().map(|crop| crop.id).collect();
        assert_eq!(ids, vec!["rice", "dragon-fruit", "jute", "vegetables"]);

        let rice = crop_by_id("rice").unwrap();
        assert_eq!(rice.name.get(Language::Bn), "ধান");
        assert_eq!(rice.name.get(Language::En), "Rice");
        assert_eq!(rice.growth_stages.len(), 5);
        assert!(crop_by_id("banana").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let crop_ids: HashSet<&str> = crops().iter().map(|c| c.id).collect();
        assert_eq!(crop_ids.len(), crops().len());

        let pest_ids: HashSet<&str> = pests_diseases().iter().map(|p| p.id).collect();
        assert_eq!(pest_ids.len(), pests_diseases().len());
    }

    #[test]
    fn test_dragon_fruit_stages_match_observation_stages() {
        let stage_ids: Vec<&str> = dragon_fruit_stages().iter().map(|s| s.id).collect();
        let growth_stages: Vec<&str> = GrowthStage::all().iter().map(|s| s.as_str()).collect();
        assert_eq!(stage_ids, growth_stages);

        let flowering = stage_by_id("flowering").unwrap();
        assert_eq!(flowering.care_tips.len(), 5);
        assert!(stage_by_id("dormant").is_none());
    }

    #[test]
    fn test_pests_and_diseases_split() {
        let diseases: Vec<&str> = pests_diseases_of(PestDiseaseKind::Disease)
            .map(|p| p.id)
            .collect();
        let pests: Vec<&str> = pests_diseases_of(PestDiseaseKind::Pest).map(|p| p.id).collect();
        assert_eq!(diseases, vec!["anthracnose", "stem-canker"]);
        assert_eq!(pests, vec!["fruit-fly"]);

        let fly = pest_disease_by_id("fruit-fly").unwrap();
        assert_eq!(fly.name.get(Language::Bn), "ফলের মাছি");
        assert_eq!(fly.symptoms.len(), 4);
    }

    #[test]
    fn test_fertilizer_schedule_and_soil() {
        let stages: Vec<&str> = fertilizer_schedule().iter().map(|e| e.stage.en).collect();
        assert_eq!(stages, vec!["Planting", "Growth Phase", "Flowering"]);
        assert_eq!(dragon_fruit_soil().nutrients.len(), 4);
    }

    #[test]
    fn test_no_blank_text() {
        for text in all_texts() {
            assert!(!text.en.trim().is_empty(), "blank English text next to {:?}", text.bn);
            assert!(!text.bn.trim().is_empty(), "blank Bangla text next to {:?}", text.en);
        }
    }
}
