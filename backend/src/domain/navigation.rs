//! # Navigation
//!
//! The app is a flat set of screens reached from the home screen. The
//! router keeps only the current page and the selected crop; "back"
//! always means home, there is no history stack.

use log::debug;
use shared::Language;
use std::fmt;

use crate::domain::content::{self, Crop};
use crate::domain::language_service::resolve;

/// Crop used by the observation form when none is selected
pub const DEFAULT_OBSERVATION_CROP: &str = "dragon-fruit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    CropSelection,
    DragonFruitGuide,
    CropObservation,
    PestsDiseases,
    ObservationHistory,
}

impl Page {
    pub fn all() -> &'static [Page] {
        &[
            Page::Home,
            Page::CropSelection,
            Page::DragonFruitGuide,
            Page::CropObservation,
            Page::PestsDiseases,
            Page::ObservationHistory,
        ]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::CropSelection => "crop-selection",
            Page::DragonFruitGuide => "dragon-fruit-guide",
            Page::CropObservation => "crop-observation",
            Page::PestsDiseases => "pests-diseases",
            Page::ObservationHistory => "observation-history",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Page> {
        Page::all().iter().copied().find(|page| page.slug() == slug)
    }

    /// Screen title
    pub fn title(&self, language: Language) -> &'static str {
        let (english, bangla) = match self {
            Page::Home => ("Farmer Assistant", "কৃষক সহায়ক"),
            Page::CropSelection => ("Select Your Crop", "আপনার ফসল নির্বাচন করুন"),
            Page::DragonFruitGuide => ("Dragon Fruit Guide", "ড্রাগন ফল গাইড"),
            Page::CropObservation => ("Crop Observation", "ফসল পর্যবেক্ষণ"),
            Page::PestsDiseases => ("Pests & Diseases", "পোকামাকড় ও রোগ"),
            Page::ObservationHistory => ("Observation History", "পর্যবেক্ষণের ইতিহাস"),
        };
        resolve(language, english, bangla)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Current page plus the crop the farmer picked, if any
#[derive(Debug, Clone, Default)]
pub struct PageRouter {
    current: Page,
    selected_crop: Option<&'static Crop>,
}

impl Default for Page {
    fn default() -> Self {
        Page::Home
    }
}

impl PageRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn navigate(&mut self, page: Page) {
        debug!("Navigating from '{}' to '{}'", self.current, page);
        self.current = page;
    }

    /// Return to the home screen
    pub fn back(&mut self) {
        self.navigate(Page::Home);
    }

    pub fn selected_crop(&self) -> Option<&'static Crop> {
        self.selected_crop
    }

    pub fn select_crop(&mut self, crop: &'static Crop) {
        debug!("Selected crop '{}'", crop.id);
        self.selected_crop = Some(crop);
    }

    /// Select a catalog crop by ID. Returns false for unknown IDs.
    pub fn select_crop_by_id(&mut self, crop_id: &str) -> bool {
        match content::crop_by_id(crop_id) {
            Some(crop) => {
                self.select_crop(crop);
                true
            }
            None => false,
        }
    }

    /// Crop an observation recorded now would be filed under
    pub fn observation_crop_id(&self) -> &'static str {
        self.selected_crop
            .map(|crop| crop.id)
            .unwrap_or(DEFAULT_OBSERVATION_CROP)
    }

    /// Crop the history screen is limited to, `None` for every crop
    pub fn history_filter(&self) -> Option<&'static str> {
        self.selected_crop.map(|crop| crop.id)
    }
}
