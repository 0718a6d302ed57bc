//! # Screens
//!
//! Plain-text rendering of each page for the terminal. Every function is
//! pure: it takes the language and the data to show and returns the text.

use shared::{HealthStatus, Language, Observation, WeatherData};

use crate::domain::content::{self, Crop, PestDisease, PestDiseaseKind, Text};
use crate::domain::language_service::resolve;
use crate::domain::navigation::Page;
use crate::domain::reminders::{reminder_symbol, ReminderBoard};
use crate::domain::weather::{condition_bangla, WeatherIcon};
use crate::domain::HealthSummary;

fn line(out: &mut String, text: impl AsRef<str>) {
    out.push_str(text.as_ref());
    out.push('\n');
}

fn heading(out: &mut String, text: &str) {
    line(out, text);
    line(out, "=".repeat(text.chars().count()));
}

fn section(out: &mut String, text: &str) {
    line(out, "");
    line(out, text);
    line(out, "-".repeat(text.chars().count()));
}

fn bullets(out: &mut String, language: Language, items: &[Text]) {
    for item in items {
        line(out, format!("  • {}", item.get(language)));
    }
}

fn health_symbol(status: HealthStatus) -> &'static str {
    match status {
        HealthStatus::Healthy => "✔",
        HealthStatus::Warning => "⚠",
        HealthStatus::Disease => "✖",
        HealthStatus::Pest => "🐛",
    }
}

pub fn render_home(
    language: Language,
    selected_crop: Option<&Crop>,
    weather: &WeatherData,
    reminders: &ReminderBoard,
) -> String {
    let t = |english, bangla| resolve(language, english, bangla);
    let mut out = String::new();

    heading(&mut out, Page::Home.title(language));
    line(&mut out, t("Your farming companion", "আপনার কৃষিকাজের সঙ্গী"));

    match selected_crop {
        Some(crop) => {
            section(&mut out, t("Selected Crop", "নির্বাচিত ফসল"));
            line(&mut out, format!("{} {}", crop.icon, crop.name.get(language)));
        }
        None => {
            section(&mut out, t("No Crop Selected", "কোনো ফসল নির্বাচিত নেই"));
            line(
                &mut out,
                t("Choose your crop to get started", "শুরু করতে আপনার ফসল নির্বাচন করুন"),
            );
        }
    }

    section(&mut out, t("Today's Weather", "আজকের আবহাওয়া"));
    line(
        &mut out,
        format!(
            "{} {}",
            WeatherIcon::for_condition(&weather.condition).symbol(),
            resolve(language, &weather.condition, condition_bangla(&weather.condition)),
        ),
    );
    line(&mut out, format!("{}: {}°C", t("Temperature", "তাপমাত্রা"), weather.temperature));
    line(&mut out, format!("{}: {}%", t("Humidity", "আর্দ্রতা"), weather.humidity));
    if weather.rainfall > 0.0 {
        line(&mut out, format!("{}: {} mm", t("Rainfall", "বৃষ্টিপাত"), weather.rainfall));
    }
    if weather.wind_speed > 0.0 {
        line(&mut out, format!("{}: {} km/h", t("Wind Speed", "বাতাসের গতি"), weather.wind_speed));
    }

    if !reminders.all().is_empty() {
        section(&mut out, t("Reminders", "অনুস্মারক"));
        for reminder in reminders.all() {
            let title = resolve(language, &reminder.title, &reminder.title_bangla);
            if reminder.is_completed {
                let completed = t("Completed", "সম্পন্ন");
                line(&mut out, format!("  [{}] ✔ {} ({})", reminder.id, title, completed));
            } else {
                let symbol = reminder_symbol(reminder.kind);
                let description =
                    resolve(language, &reminder.description, &reminder.description_bangla);
                let due = reminder.due_date.format("%a, %b %e");
                line(&mut out, format!("  [{}] {} {}", reminder.id, symbol, title));
                line(&mut out, format!("      {}", description));
                line(&mut out, format!("      {} {}", t("Due:", "নির্ধারিত:"), due));
            }
        }
    }

    section(&mut out, t("Main Features", "প্রধান বৈশিষ্ট্য"));
    line(&mut out, format!("  1. {}", t("Select Crop", "ফসল নির্বাচন করুন")));
    line(&mut out, format!("  2. 🐉 {}", Page::DragonFruitGuide.title(language)));
    line(&mut out, format!("  3. 📷 {}", Page::CropObservation.title(language)));
    line(&mut out, format!("  4. 🐛 {}", Page::PestsDiseases.title(language)));
    line(&mut out, format!("  5. 📖 {}", Page::ObservationHistory.title(language)));
    out
}

pub fn render_crop_selection(language: Language, selected_crop: Option<&Crop>) -> String {
    let t = |english, bangla| resolve(language, english, bangla);
    let mut out = String::new();

    heading(&mut out, Page::CropSelection.title(language));
    line(&mut out, t("Choose the crop you are growing", "আপনি যে ফসল চাষ করছেন তা নির্বাচন করুন"));
    line(&mut out, "");

    for (index, crop) in content::crops().iter().enumerate() {
        let marker = if selected_crop.map(|selected| selected.id) == Some(crop.id) {
            format!(" ({})", t("Currently Selected", "বর্তমানে নির্বাচিত"))
        } else {
            String::new()
        };
        line(
            &mut out,
            format!("  {}. {} {}{}", index + 1, crop.icon, crop.name.get(language), marker),
        );
        line(&mut out, format!("     {}", crop.description.get(language)));
    }
    out
}

pub fn render_dragon_fruit_guide(language: Language) -> String {
    let t = |english, bangla| resolve(language, english, bangla);
    let mut out = String::new();

    heading(&mut out, t("Dragon Fruit Cultivation", "ড্রাগন ফল চাষাবাদ"));
    line(&mut out, t("Complete cultivation guide", "সম্পূর্ণ চাষাবাদ গাইড"));

    section(&mut out, t("Growth Stages", "বৃদ্ধির পর্যায়সমূহ"));
    for (index, stage) in content::dragon_fruit_stages().iter().enumerate() {
        line(
            &mut out,
            format!(
                "{}. {} ({})",
                index + 1,
                stage.name.get(language),
                stage.duration.get(language)
            ),
        );
        line(&mut out, format!("   {}", stage.description.get(language)));
        line(&mut out, format!("   {}:", t("Care Tips", "যত্নের টিপস")));
        bullets(&mut out, language, stage.care_tips);
    }

    let soil = content::dragon_fruit_soil();
    section(&mut out, t("Soil Requirements", "মাটির প্রয়োজনীয়তা"));
    line(&mut out, format!("{}: {}", t("Soil Type", "মাটির ধরন"), soil.soil_type.get(language)));
    line(&mut out, format!("{}: {}", t("pH Level", "পিএইচ লেভেল"), soil.ph));
    line(&mut out, format!("{}: {}", t("Drainage", "নিষ্কাশন"), soil.drainage.get(language)));
    line(&mut out, format!("{}:", t("Key Nutrients", "প্রধান পুষ্টি উপাদান")));
    bullets(&mut out, language, soil.nutrients);

    section(&mut out, t("Fertilizer Schedule", "সার প্রয়োগের সময়সূচী"));
    for entry in content::fertilizer_schedule() {
        line(&mut out, format!("{}:", entry.stage.get(language)));
        bullets(&mut out, language, entry.fertilizers);
    }

    section(&mut out, t("Quick Tips for Success", "সফলতার জন্য দ্রুত টিপস"));
    bullets(&mut out, language, content::DRAGON_FRUIT_QUICK_TIPS);
    out
}

fn render_pest_disease(out: &mut String, language: Language, item: &PestDisease) {
    let t = |english, bangla| resolve(language, english, bangla);
    line(out, format!("{} [{}]", item.name.get(language), item.kind.label().get(language)));
    line(out, format!("  {}:", t("Symptoms", "লক্ষণসমূহ")));
    bullets(out, language, item.symptoms);
    line(out, format!("  {}:", t("Treatment", "চিকিৎসা")));
    bullets(out, language, item.treatment);
    line(out, format!("  {}:", t("Prevention", "প্রতিরোধ")));
    bullets(out, language, item.prevention);
    line(out, format!("  {}:", t("Recommended Pesticides", "প্রস্তাবিত কীটনাশক")));
    bullets(out, language, item.pesticides);
    line(out, "");
}

pub fn render_pests_diseases(language: Language) -> String {
    let t = |english, bangla| resolve(language, english, bangla);
    let mut out = String::new();

    heading(&mut out, Page::PestsDiseases.title(language));
    line(&mut out, t("Identify and treat common problems", "সাধারণ সমস্যা চিহ্নিত ও চিকিৎসা করুন"));

    section(&mut out, t("Common Dragon Fruit Diseases", "ড্রাগন ফলের সাধারণ রোগসমূহ"));
    for item in content::pests_diseases_of(PestDiseaseKind::Disease) {
        render_pest_disease(&mut out, language, item);
    }

    section(&mut out, t("Common Dragon Fruit Pests", "ড্রাগন ফলের সাধারণ পোকামাকড়"));
    for item in content::pests_diseases_of(PestDiseaseKind::Pest) {
        render_pest_disease(&mut out, language, item);
    }

    line(&mut out, t("Early Detection is Key", "প্রাথমিক সনাক্তকরণই মূল চাবিকাঠি"));
    out
}

/// One observation as a history card
pub fn render_observation(language: Language, observation: &Observation) -> String {
    let t = |english, bangla| resolve(language, english, bangla);
    let mut out = String::new();

    let crop_name = content::crop_by_id(&observation.crop_id)
        .map(|crop| crop.name.get(language))
        .unwrap_or(observation.crop_id.as_str());
    let sync_state = if observation.synced {
        t("Synced", "সিঙ্ক হয়েছে")
    } else {
        t("Pending sync", "সিঙ্কের অপেক্ষায়")
    };

    let symbol = health_symbol(observation.health_status);
    line(&mut out, format!("{} {}  ({})", symbol, crop_name, observation.id));
    line(&mut out, format!("  {}  {}", observation.date.format("%Y-%m-%d %H:%M"), sync_state));
    line(
        &mut out,
        format!(
            "  {}: {}",
            t("Growth Stage", "বৃদ্ধির পর্যায়"),
            observation.growth_stage.label(language)
        ),
    );
    line(
        &mut out,
        format!(
            "  {}: {}",
            t("Health Status", "স্বাস্থ্যের অবস্থা"),
            observation.health_status.label(language)
        ),
    );
    if !observation.photos.is_empty() {
        line(&mut out, format!("  {}: {}", t("Photos", "ছবিসমূহ"), observation.photos.len()));
    }
    if !observation.notes.trim().is_empty() {
        line(&mut out, format!("  {} {}", t("English note:", "ইংরেজি নোট:"), observation.notes));
    }
    if !observation.notes_bangla.trim().is_empty() {
        let label = t("Bangla note:", "বাংলা নোট:");
        line(&mut out, format!("  {} {}", label, observation.notes_bangla));
    }
    out
}

pub fn render_summary(language: Language, summary: &HealthSummary) -> String {
    let mut out = String::new();
    section(&mut out, resolve(language, "Observation Summary", "পর্যবেক্ষণের সারসংক্ষেপ"));
    let counts: Vec<String> = HealthStatus::all()
        .iter()
        .map(|status| format!("{}: {}", status.short_label(language), summary.count(*status)))
        .collect();
    line(&mut out, counts.join("   "));
    line(
        &mut out,
        format!("{}: {}", resolve(language, "Total", "মোট"), summary.total()),
    );
    out
}

pub fn render_history(
    language: Language,
    observations: &[Observation],
    summary: &HealthSummary,
) -> String {
    let t = |english, bangla| resolve(language, english, bangla);
    let mut out = String::new();

    heading(&mut out, Page::ObservationHistory.title(language));
    if observations.is_empty() {
        line(&mut out, t("No Observations Yet", "এখনো কোনো পর্যবেক্ষণ নেই"));
        line(
            &mut out,
            t(
                "Start recording your crop observations to track progress",
                "অগ্রগতি ট্র্যাক করতে আপনার ফসলের পর্যবেক্ষণ রেকর্ড করা শুরু করুন",
            ),
        );
        return out;
    }

    out.push_str(&render_summary(language, summary));
    line(&mut out, "");
    for observation in observations {
        out.push_str(&render_observation(language, observation));
        line(&mut out, "");
    }
    out
}
