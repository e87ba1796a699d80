//! Report generation pipeline: fetch, build, write.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::config::ReportConfig;
use crate::core::locale::extract_stt_locales;
use crate::core::models::{BaseModel, SttLanguage, TtsVoice};
use crate::core::prepare::fast_transcription_set;
use crate::errors::{ReportError, ReportResult};
use crate::markdown::ReportTable;
use crate::markdown::language_id::build_language_id_table;
use crate::markdown::stt::build_stt_table;
use crate::markdown::tts::build_tts_table;
use crate::markdown::voice_styles::build_voice_styles_table;
use crate::utils::SpeechServiceClient;

/// Everything fetched from the service, already enriched.
#[derive(Debug, Clone, Default)]
pub struct SpeechData {
    pub stt_languages: Vec<SttLanguage>,
    /// Normalized locales supported by fast transcription.
    pub fast_transcription: BTreeSet<String>,
    pub base_models: Vec<BaseModel>,
    pub voices: Vec<TtsVoice>,
}

/// Fetch all four sources in sequence.
///
/// `now` decides which base models still accept adaptation.
pub async fn fetch_all(
    client: &SpeechServiceClient,
    now: DateTime<Utc>,
) -> ReportResult<SpeechData> {
    info!("Fetching speech to text locales...");
    let stt_languages = client.get_stt_languages().await?;

    info!("Fetching fast transcription locales...");
    let fast_transcription = fast_transcription_set(&client.get_fast_transcription_locales().await?);

    info!("Fetching custom speech base models...");
    let base_models = client.get_custom_speech_base_models(now).await?;

    info!("Fetching text to speech voices...");
    let voices = client.get_tts_voices().await?;

    info!(
        stt = stt_languages.len(),
        fast_transcription = fast_transcription.len(),
        base_models = base_models.len(),
        voices = voices.len(),
        "Fetched speech metadata"
    );

    Ok(SpeechData {
        stt_languages,
        fast_transcription,
        base_models,
        voices,
    })
}

/// Build every table in generation order.
///
/// # Errors
/// Returns [`ReportError::DuplicateLocale`] if two speech to text records
/// share a normalized locale.
pub fn build_tables(data: &SpeechData) -> ReportResult<Vec<(ReportTable, Vec<String>)>> {
    let stt_locales = extract_stt_locales(&data.stt_languages)?;

    let tables = ReportTable::ALL
        .into_iter()
        .map(|table| {
            info!("Generating {} markdown...", table.description());
            let lines = match table {
                ReportTable::LanguageIdentification => build_language_id_table(&stt_locales),
                ReportTable::Stt => {
                    build_stt_table(&stt_locales, &data.fast_transcription, &data.base_models)
                }
                ReportTable::Tts => build_tts_table(&data.voices, &stt_locales),
                ReportTable::VoiceStylesAndRoles => build_voice_styles_table(&data.voices),
            };
            (table, lines)
        })
        .collect();

    Ok(tables)
}

/// Write one table, each line followed by a newline.
pub async fn write_table(dir: &Path, table: ReportTable, lines: &[String]) -> ReportResult<PathBuf> {
    let path = dir.join(table.file_name());

    let mut contents = String::new();
    for line in lines {
        contents.push_str(line);
        contents.push('\n');
    }

    tokio::fs::write(&path, contents)
        .await
        .map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}

/// Run the whole pipeline and return the written files.
pub async fn run(config: &ReportConfig) -> ReportResult<Vec<PathBuf>> {
    run_at(config, Utc::now()).await
}

/// [`run`] with an explicit clock.
pub async fn run_at(config: &ReportConfig, now: DateTime<Utc>) -> ReportResult<Vec<PathBuf>> {
    info!(region = %config.region, "Generating speech locale tables");

    let client = SpeechServiceClient::from_config(config)?;
    let data = fetch_all(&client, now).await?;
    let tables = build_tables(&data)?;

    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .map_err(|source| ReportError::Io {
            path: config.output_dir.clone(),
            source,
        })?;

    let mut written = Vec::with_capacity(tables.len());
    for (table, lines) in &tables {
        written.push(write_table(&config.output_dir, *table, lines).await?);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn stt(name: &str, english_name: &str) -> SttLanguage {
        SttLanguage {
            name: name.to_string(),
            english_name: english_name.to_string(),
            native_name: None,
            direction: None,
        }
    }

    #[test]
    fn test_build_tables_order() {
        let data = SpeechData {
            stt_languages: vec![stt("en-US", "English (United States)")],
            ..Default::default()
        };

        let tables = build_tables(&data).unwrap();
        let order: Vec<ReportTable> = tables.iter().map(|(table, _)| *table).collect();
        assert_eq!(order, ReportTable::ALL.to_vec());

        let (_, stt_lines) = &tables[1];
        assert_eq!(
            stt_lines[2],
            "| `en-US` | English (United States) | No | Not supported |"
        );
    }

    #[test]
    fn test_build_tables_duplicate_locale() {
        let data = SpeechData {
            stt_languages: vec![stt("en-US", "English"), stt("en-US", "English again")],
            ..Default::default()
        };

        let result = build_tables(&data);
        assert!(matches!(result, Err(ReportError::DuplicateLocale(locale)) if locale == "en-US"));
    }

    #[tokio::test]
    async fn test_write_table_trailing_newlines() {
        let dir = TempDir::new().unwrap();
        let lines = vec!["| A |".to_string(), "| ----- |".to_string()];

        let path = write_table(dir.path(), ReportTable::Tts, &lines)
            .await
            .unwrap();

        assert_eq!(path, dir.path().join("tts.md"));
        let contents = std::fs::read_to_string(path).unwrap();
        assert_eq!(contents, "| A |\n| ----- |\n");
    }

    #[tokio::test]
    async fn test_write_table_missing_dir() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let result = write_table(&missing, ReportTable::Stt, &[]).await;
        assert!(matches!(result, Err(ReportError::Io { .. })));
    }
}
