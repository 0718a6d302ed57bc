//! Runs one command line command against the application state.

use anyhow::{anyhow, Context, Result};
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;

use super::browse::Browser;
use super::cli::{Commands, LanguageChoice, ObserveArgs, UpdateArgs};
use super::photos::{encode_photo, export_photos};
use super::screens;
use crate::domain::content;
use crate::domain::language_service::resolve;
use crate::domain::{AmendObservationCommand, HistoryFilter, RecordObservationCommand};
use crate::storage::Connection;
use crate::AppState;
use shared::Language;

fn encode_photos(paths: &[PathBuf]) -> Result<Vec<String>> {
    paths
        .iter()
        .map(|path| encode_photo(path).map_err(anyhow::Error::from))
        .collect()
}

pub fn execute<C: Connection, W: Write>(
    state: &AppState<C>,
    command: Commands,
    out: &mut W,
) -> Result<()> {
    let language = state.language_service.current();
    let t = |english, bangla| resolve(language, english, bangla);
    let not_found = t("Observation not found", "পর্যবেক্ষণ পাওয়া যায়নি");

    match command {
        Commands::Observe(args) => observe(state, args, out)?,
        Commands::History { crop } => {
            let filter = match crop {
                Some(crop_id) => HistoryFilter::Crop(crop_id),
                None => HistoryFilter::All,
            };
            let observations = state.observation_service.history(&filter);
            let summary = state.observation_service.summary(&observations);
            write!(out, "{}", screens::render_history(language, &observations, &summary))?;
        }
        Commands::Update(args) => update(state, args, out)?,
        Commands::Delete { id } => {
            if !state.observation_service.remove(&id) {
                return Err(anyhow!("{}: {}", not_found, id));
            }
            writeln!(out, "{}: {}", t("Deleted", "মুছে ফেলা হয়েছে"), id)?;
        }
        Commands::Unsynced => {
            let pending = state.observation_service.pending_sync();
            writeln!(out, "{}: {}", t("Pending sync", "সিঙ্কের অপেক্ষায়"), pending.len())?;
            for observation in &pending {
                writeln!(out)?;
                write!(out, "{}", screens::render_observation(language, observation))?;
            }
        }
        Commands::MarkSynced { ids, all } => {
            let ids: Vec<String> = if all {
                state
                    .observation_service
                    .pending_sync()
                    .into_iter()
                    .map(|observation| observation.id)
                    .collect()
            } else {
                ids
            };
            state.observation_service.mark_synced(&ids);
            writeln!(out, "{}: {}", t("Synced", "সিঙ্ক হয়েছে"), ids.len())?;
            if let Some(last_sync) = state.observation_service.last_sync() {
                writeln!(
                    out,
                    "{}: {}",
                    t("Last sync", "সর্বশেষ সিঙ্ক"),
                    last_sync.format("%Y-%m-%d %H:%M")
                )?;
            }
        }
        Commands::Clear { yes } => {
            if !yes {
                writeln!(
                    out,
                    "{}",
                    t(
                        "This erases every observation. Run again with --yes to confirm.",
                        "এটি সব পর্যবেক্ষণ মুছে ফেলবে। নিশ্চিত করতে --yes সহ আবার চালান।",
                    )
                )?;
                return Ok(());
            }
            state.observation_service.reset();
            writeln!(out, "{}", t("All observations erased", "সব পর্যবেক্ষণ মুছে ফেলা হয়েছে"))?;
        }
        Commands::Language { choice } => {
            let current = match choice {
                None => language,
                Some(LanguageChoice::Toggle) => state.language_service.toggle(),
                Some(LanguageChoice::Bn) => {
                    state.language_service.set_language(Language::Bn);
                    Language::Bn
                }
                Some(LanguageChoice::En) => {
                    state.language_service.set_language(Language::En);
                    Language::En
                }
            };
            writeln!(out, "{} ({})", current.native_name(), current.code())?;
        }
        Commands::Crops => write!(out, "{}", screens::render_crop_selection(language, None))?,
        Commands::Guide => write!(out, "{}", screens::render_dragon_fruit_guide(language))?,
        Commands::Pests => write!(out, "{}", screens::render_pests_diseases(language))?,
        Commands::Photos { id, dir } => {
            let observation = state
                .observation_service
                .history(&HistoryFilter::All)
                .into_iter()
                .find(|observation| observation.id == id)
                .ok_or_else(|| anyhow!("{}: {}", not_found, id))?;
            let written = export_photos(&observation.id, &observation.photos, &dir)?;
            for path in written {
                writeln!(out, "{}", path.display())?;
            }
        }
        Commands::Browse => {
            let stdin = io::stdin();
            Browser::new(state).run(stdin.lock(), out)?;
        }
    }
    Ok(())
}

fn observe<C: Connection, W: Write>(
    state: &AppState<C>,
    args: ObserveArgs,
    out: &mut W,
) -> Result<()> {
    let language = state.language_service.current();
    if content::crop_by_id(&args.crop).is_none() {
        info!("Recording observation for crop '{}' outside the catalog", args.crop);
    }

    let photos = encode_photos(&args.photos).context("failed to attach photo")?;
    let observation = state
        .observation_service
        .record(RecordObservationCommand {
            crop_id: args.crop,
            photos,
            notes: args.notes,
            notes_bangla: args.notes_bangla,
            growth_stage: args.stage,
            health_status: args.health,
            language,
        })
        .map_err(|e| anyhow!(e.user_message(language)))?;

    writeln!(
        out,
        "{}",
        resolve(language, "Observation saved successfully", "পর্যবেক্ষণ সফলভাবে সংরক্ষিত হয়েছে")
    )?;
    write!(out, "{}", screens::render_observation(language, &observation))?;
    Ok(())
}

fn update<C: Connection, W: Write>(
    state: &AppState<C>,
    args: UpdateArgs,
    out: &mut W,
) -> Result<()> {
    let language = state.language_service.current();
    let photos = if args.photos.is_empty() {
        None
    } else {
        Some(encode_photos(&args.photos).context("failed to attach photo")?)
    };

    state
        .observation_service
        .amend(
            &args.id,
            AmendObservationCommand {
                crop_id: args.crop,
                photos,
                notes: args.notes,
                notes_bangla: args.notes_bangla,
                growth_stage: args.stage,
                health_status: args.health,
            },
        )
        .map_err(|e| anyhow!(e.user_message(language)))?;

    writeln!(out, "{}: {}", resolve(language, "Updated", "হালনাগাদ হয়েছে"), args.id)?;
    Ok(())
}
