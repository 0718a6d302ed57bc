//! # Interactive Browser
//!
//! Line-driven walk through the app's screens, backed by the
//! [`PageRouter`]. Every screen accepts `b` (back home), `l` (switch
//! language) and `q` (quit); the rest of the keys depend on the page.

use anyhow::Result;
use chrono::Utc;
use log::{debug, warn};
use shared::{GrowthStage, HealthStatus, Language, WeatherData};
use std::io::{BufRead, Write};
use std::path::Path;

use super::photos::encode_photo;
use super::screens;
use crate::domain::content;
use crate::domain::language_service::resolve;
use crate::domain::weather::sample_weather;
use crate::domain::{HistoryFilter, Page, PageRouter, RecordObservationCommand, ReminderBoard};
use crate::storage::Connection;
use crate::AppState;

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Browser<'a, C: Connection> {
    state: &'a AppState<C>,
    router: PageRouter,
    reminders: ReminderBoard,
    weather: WeatherData,
}

/// Read one trimmed line, `None` at end of input
fn next_line<I>(lines: &mut I) -> Result<Option<String>>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

/// Map a 1-based menu number onto `options`, passing anything else through
fn pick<T: Copy>(input: &str, options: &[T], slug: impl Fn(T) -> &'static str) -> String {
    match input.parse::<usize>() {
        Ok(number) if number >= 1 && number <= options.len() => {
            slug(options[number - 1]).to_string()
        }
        _ => input.to_string(),
    }
}

impl<'a, C: Connection> Browser<'a, C> {
    pub fn new(state: &'a AppState<C>) -> Self {
        Self {
            state,
            router: PageRouter::new(),
            reminders: ReminderBoard::seeded(None, Utc::now()),
            weather: sample_weather(),
        }
    }

    pub fn router(&self) -> &PageRouter {
        &self.router
    }

    pub fn reminders(&self) -> &ReminderBoard {
        &self.reminders
    }

    fn language(&self) -> Language {
        self.state.language_service.current()
    }

    fn t(&self, english: &'static str, bangla: &'static str) -> &'static str {
        resolve(self.language(), english, bangla)
    }

    fn history_filter(&self) -> HistoryFilter {
        match self.router.history_filter() {
            Some(crop_id) => HistoryFilter::Crop(crop_id.to_string()),
            None => HistoryFilter::All,
        }
    }

    fn render(&self) -> String {
        let language = self.language();
        match self.router.current() {
            Page::Home => screens::render_home(
                language,
                self.router.selected_crop(),
                &self.weather,
                &self.reminders,
            ),
            Page::CropSelection => {
                screens::render_crop_selection(language, self.router.selected_crop())
            }
            Page::DragonFruitGuide => screens::render_dragon_fruit_guide(language),
            Page::PestsDiseases => screens::render_pests_diseases(language),
            Page::CropObservation => {
                let crop_id = self.router.observation_crop_id();
                let crop_name = content::crop_by_id(crop_id)
                    .map(|crop| crop.name.get(language))
                    .unwrap_or(crop_id);
                format!(
                    "{}\n{}\n",
                    Page::CropObservation.title(language),
                    resolve(
                        language,
                        "Record your crop progress",
                        "আপনার ফসলের অগ্রগতি রেকর্ড করুন"
                    )
                ) + &format!("{}: {}\n", resolve(language, "Crop", "ফসল"), crop_name)
            }
            Page::ObservationHistory => {
                let observations = self.state.observation_service.history(&self.history_filter());
                let summary = self.state.observation_service.summary(&observations);
                screens::render_history(language, &observations, &summary)
            }
        }
    }

    fn hint(&self) -> &'static str {
        match self.router.current() {
            Page::Home => self.t(
                "[1-5] open  [c <id>] complete reminder  [l] language  [q] quit",
                "[১-৫] খুলুন  [c <id>] অনুস্মারক সম্পন্ন  [l] ভাষা  [q] বন্ধ",
            ),
            Page::CropSelection => self.t(
                "[number] select crop  [b] back  [l] language  [q] quit",
                "[নম্বর] ফসল নির্বাচন  [b] ফিরে যান  [l] ভাষা  [q] বন্ধ",
            ),
            Page::CropObservation => self.t(
                "[o] new observation  [b] back  [l] language  [q] quit",
                "[o] নতুন পর্যবেক্ষণ  [b] ফিরে যান  [l] ভাষা  [q] বন্ধ",
            ),
            Page::ObservationHistory => self.t(
                "[d <id>] delete  [b] back  [l] language  [q] quit",
                "[d <id>] মুছুন  [b] ফিরে যান  [l] ভাষা  [q] বন্ধ",
            ),
            Page::DragonFruitGuide | Page::PestsDiseases => self.t(
                "[b] back  [l] language  [q] quit",
                "[b] ফিরে যান  [l] ভাষা  [q] বন্ধ",
            ),
        }
    }

    /// Run until `q` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        let mut lines = input.lines();
        loop {
            writeln!(out, "{}", self.render())?;
            write!(out, "{}\n> ", self.hint())?;
            out.flush()?;

            let command = match next_line(&mut lines)? {
                Some(command) => command,
                None => break,
            };
            if self.handle(&command, &mut lines, out)? == Flow::Quit {
                break;
            }
        }
        writeln!(out)?;
        Ok(())
    }

    fn handle<I, W>(&mut self, command: &str, lines: &mut I, out: &mut W) -> Result<Flow>
    where
        I: Iterator<Item = std::io::Result<String>>,
        W: Write,
    {
        debug!("Browser input '{}' on '{}'", command, self.router.current());
        match command {
            "q" => return Ok(Flow::Quit),
            "b" => self.router.back(),
            "l" => {
                let language = self.state.language_service.toggle();
                writeln!(out, "{}", language.native_name())?;
            }
            _ => match self.router.current() {
                Page::Home => self.handle_home(command, out)?,
                Page::CropSelection => self.handle_crop_selection(command, out)?,
                Page::CropObservation if command == "o" => self.record_form(lines, out)?,
                Page::ObservationHistory if command.starts_with("d ") => {
                    let id = command[2..].trim();
                    if self.state.observation_service.remove(id) {
                        writeln!(out, "{}", self.t("Deleted", "মুছে ফেলা হয়েছে"))?;
                    } else {
                        let message =
                            self.t("Observation not found", "পর্যবেক্ষণ পাওয়া যায়নি");
                        writeln!(out, "{}: {}", message, id)?;
                    }
                }
                _ => self.unknown(command, out)?,
            },
        }
        Ok(Flow::Continue)
    }

    fn unknown<W: Write>(&self, command: &str, out: &mut W) -> Result<()> {
        writeln!(out, "{}: {}", self.t("Unknown command", "অজানা নির্দেশ"), command)?;
        Ok(())
    }

    fn handle_home<W: Write>(&mut self, command: &str, out: &mut W) -> Result<()> {
        let page = match command {
            "1" => Some(Page::CropSelection),
            "2" => Some(Page::DragonFruitGuide),
            "3" => Some(Page::CropObservation),
            "4" => Some(Page::PestsDiseases),
            "5" => Some(Page::ObservationHistory),
            _ => None,
        };
        if let Some(page) = page {
            self.router.navigate(page);
            return Ok(());
        }

        match command.strip_prefix("c ") {
            Some(id) => {
                if !self.reminders.complete(id.trim()) {
                    let message = self.t("Reminder not found", "অনুস্মারক পাওয়া যায়নি");
                    writeln!(out, "{}: {}", message, id.trim())?;
                }
                Ok(())
            }
            None => self.unknown(command, out),
        }
    }

    fn handle_crop_selection<W: Write>(&mut self, command: &str, out: &mut W) -> Result<()> {
        let crops = content::crops();
        match command.parse::<usize>() {
            Ok(number) if number >= 1 && number <= crops.len() => {
                let crop = &crops[number - 1];
                self.router.select_crop(crop);
                self.reminders = ReminderBoard::seeded(Some(crop.id), Utc::now());
                self.router.back();
                Ok(())
            }
            _ => self.unknown(command, out),
        }
    }

    fn prompt<I, W>(&self, label: &str, lines: &mut I, out: &mut W) -> Result<Option<String>>
    where
        I: Iterator<Item = std::io::Result<String>>,
        W: Write,
    {
        write!(out, "{}: ", label)?;
        out.flush()?;
        next_line(lines)
    }

    /// Ask for every field of a new observation and record it
    fn record_form<I, W>(&mut self, lines: &mut I, out: &mut W) -> Result<()>
    where
        I: Iterator<Item = std::io::Result<String>>,
        W: Write,
    {
        let language = self.language();

        let stages: Vec<String> = GrowthStage::all()
            .iter()
            .enumerate()
            .map(|(index, stage)| format!("{}={}", index + 1, stage.label(language)))
            .collect();
        let label = format!(
            "{} ({})",
            self.t("Growth Stage", "বৃদ্ধির পর্যায়"),
            stages.join(", ")
        );
        let growth_stage = match self.prompt(&label, lines, out)? {
            Some(input) => pick(&input, GrowthStage::all(), |stage| stage.as_str()),
            None => return Ok(()),
        };

        let statuses: Vec<String> = HealthStatus::all()
            .iter()
            .enumerate()
            .map(|(index, status)| format!("{}={}", index + 1, status.label(language)))
            .collect();
        let label = format!(
            "{} ({})",
            self.t("Health Status", "স্বাস্থ্যের অবস্থা"),
            statuses.join(", ")
        );
        let health_status = match self.prompt(&label, lines, out)? {
            Some(input) => pick(&input, HealthStatus::all(), |status| status.as_str()),
            None => return Ok(()),
        };

        let notes = match self.prompt(self.t("Notes (English)", "নোট (ইংরেজি)"), lines, out)? {
            Some(notes) => notes,
            None => return Ok(()),
        };
        let notes_bangla = match self.prompt(self.t("Notes (Bangla)", "নোট (বাংলা)"), lines, out)? {
            Some(notes) => notes,
            None => return Ok(()),
        };

        let label = self.t(
            "Photos (image paths, comma separated)",
            "ছবি (ছবির পাথ, কমা দিয়ে আলাদা)",
        );
        let photo_paths = self.prompt(label, lines, out)?.unwrap_or_default();
        let mut photos = Vec::new();
        for path in photo_paths.split(',').map(str::trim).filter(|path| !path.is_empty()) {
            match encode_photo(Path::new(path)) {
                Ok(photo) => photos.push(photo),
                Err(e) => {
                    warn!("Skipping photo {}: {}", path, e);
                    writeln!(out, "{}: {}", self.t("Skipped", "বাদ দেওয়া হয়েছে"), e)?;
                }
            }
        }

        let result = self.state.observation_service.record(RecordObservationCommand {
            crop_id: self.router.observation_crop_id().to_string(),
            photos,
            notes,
            notes_bangla,
            growth_stage,
            health_status,
            language,
        });
        match result {
            Ok(_) => writeln!(
                out,
                "{}",
                self.t("Observation saved successfully", "পর্যবেক্ষণ সফলভাবে সংরক্ষিত হয়েছে")
            )?,
            Err(e) => writeln!(out, "{}", e.user_message(language))?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::storage::MemoryConnection;
    use std::io::Cursor;

    fn setup() -> AppState<MemoryConnection> {
        let config = AppConfig {
            default_language: Language::En,
            ..AppConfig::default()
        };
        AppState::with_connection(&MemoryConnection::new(), config)
    }

    fn browse(state: &AppState<MemoryConnection>, script: &str) -> (PageRouter, String) {
        let mut browser = Browser::new(state);
        let mut out = Vec::new();
        browser.run(Cursor::new(script.to_string()), &mut out).unwrap();
        (browser.router().clone(), String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_end_of_input_quits() {
        let state = setup();
        let (router, output) = browse(&state, "");
        assert_eq!(router.current(), Page::Home);
        assert!(output.contains("Farmer Assistant"));
    }

    #[test]
    fn test_select_crop_returns_home_with_selection() {
        let state = setup();
        let (router, output) = browse(&state, "1\n2\n");
        assert_eq!(router.current(), Page::Home);
        assert_eq!(router.observation_crop_id(), "dragon-fruit");
        assert_eq!(router.history_filter(), Some("dragon-fruit"));
        assert!(output.contains("Select Your Crop"));
    }

    #[test]
    fn test_record_observation_through_form() {
        let state = setup();
        let (router, output) = browse(&state, "1\n1\n3\no\n3\n1\nBuds forming\n\n\nq\n");
        assert!(output.contains("Observation saved successfully"));
        assert_eq!(router.current(), Page::CropObservation);

        let saved = state.observation_service.history(&HistoryFilter::All);
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].crop_id, "rice");
        assert_eq!(saved[0].growth_stage, GrowthStage::Flowering);
        assert_eq!(saved[0].health_status, HealthStatus::Healthy);
        assert_eq!(saved[0].notes, "Buds forming");
    }

    #[test]
    fn test_form_reports_invalid_values() {
        let state = setup();
        let (_, output) = browse(&state, "3\no\nsprouting\n1\n\n\n\nq\n");
        assert!(output.contains("invalid growth stage"));
        assert!(state.observation_service.history(&HistoryFilter::All).is_empty());
    }

    #[test]
    fn test_back_and_language_toggle() {
        let state = setup();
        let (router, output) = browse(&state, "4\nl\nb\nq\n");
        assert_eq!(router.current(), Page::Home);
        assert!(output.contains("Pests & Diseases"));
        assert!(output.contains("পোকামাকড় ও রোগ"));
        assert_eq!(state.language_service.current(), Language::Bn);
    }

    #[test]
    fn test_complete_reminder_from_home() {
        let state = setup();
        let mut browser = Browser::new(&state);
        let mut out = Vec::new();
        browser.run(Cursor::new("c 1\nc 9\nq\n"), &mut out).unwrap();

        assert_eq!(browser.reminders().pending().count(), 1);
        assert!(String::from_utf8(out).unwrap().contains("Reminder not found: 9"));
    }
}
