use crate::csv_importer::{CsvImporter, CsvImporterConfig};
use crate::error::Error;
use crate::file_loader::FileLoader;
use crate::importer::Importer;
use crate::loader::Loader;
use crate::manager::Manager;
use crate::maps::MapLinkConfig;
use crate::state_manager::{ViewState, ViewStateManager};
use crate::url_loader::UrlLoader;

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::offset::Utc;
use chrono::TimeZone;
use chrono_tz::Tz;
use serde::Deserialize;
use tokio::sync::mpsc;
use tracing::{info, warn};

use std::sync::Arc;

#[derive(Clone, Deserialize)]
pub struct ItineraryConfig {
    pub title: String,
    #[serde(default)]
    pub csv_path: Option<String>,
    #[serde(default)]
    pub csv_url: Option<String>,
    pub timezone: Tz,
    #[serde(default)]
    pub default_day: Option<String>,
    #[serde(default)]
    pub csv_importer: CsvImporterConfig,
    #[serde(default)]
    pub maps: MapLinkConfig,
}

/// Drives the load → parse pipeline. One load per view lifetime; any
/// further load happens only when the user asks for a retry through the
/// channel.
pub struct ItineraryManager {
    config: ItineraryConfig,
    view_state: Arc<ViewStateManager>,
    retry_rx: mpsc::Receiver<()>,
}

impl ItineraryManager {
    pub async fn new(
        config: ItineraryConfig,
        view_state: Arc<ViewStateManager>,
        retry_rx: mpsc::Receiver<()>,
    ) -> Result<ItineraryManager, Error> {
        Ok(ItineraryManager {
            config,
            view_state,
            retry_rx,
        })
    }

    fn loader(&self) -> Result<Box<dyn Loader + Send + Sync>, Error> {
        match (&self.config.csv_path, &self.config.csv_url) {
            (Some(path), _) => Ok(Box::new(FileLoader::new(path))),
            (None, Some(url)) => Ok(Box::new(UrlLoader::new(url, "itinerary URL"))),
            (None, None) => {
                Err(anyhow!("no itinerary source configured; set csv_path or csv_url").into())
            }
        }
    }

    async fn reload(&self, loader: &(dyn Loader + Send + Sync), importer: &CsvImporter) {
        // always replace the whole state
        self.view_state.replace(ViewState::Loading);

        match loader.load_raw_text().await {
            Ok(raw) => {
                let itinerary = importer.import(&raw);
                let selected_day = itinerary
                    .day_labels()
                    .into_iter()
                    .next()
                    .or_else(|| self.config.default_day.clone());
                info!(
                    "Loaded {} itinerary entries across {} days",
                    itinerary.len(),
                    itinerary.day_labels().len()
                );
                self.view_state.replace(ViewState::Ready {
                    itinerary,
                    selected_day,
                    loaded_at: self
                        .config
                        .timezone
                        .from_utc_datetime(&Utc::now().naive_utc()),
                });
            }
            Err(error) => {
                // the cause is logged but never surfaced; the view only
                // gets the one generic unavailable condition
                warn!("Failed to load itinerary: {}", error);
                self.view_state.replace(ViewState::Error);
            }
        }
    }
}

#[async_trait]
impl Manager for ItineraryManager {
    async fn run(&mut self) -> Result<(), Error> {
        let loader = self.loader()?;
        let importer = CsvImporter::new(self.config.csv_importer.clone());

        self.reload(&*loader, &importer).await;

        while self.retry_rx.recv().await.is_some() {
            self.reload(&*loader, &importer).await;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono_tz::Europe::Budapest;

    struct StubLoader {
        text: Option<String>,
    }

    #[async_trait]
    impl Loader for StubLoader {
        async fn load_raw_text(&self) -> Result<String, Error> {
            match &self.text {
                Some(text) => Ok(text.clone()),
                None => Err(anyhow!("stubbed failure").into()),
            }
        }
    }

    fn config() -> ItineraryConfig {
        ItineraryConfig {
            title: "Tu Viaje a Budapest".to_string(),
            csv_path: None,
            csv_url: None,
            timezone: Budapest,
            default_day: Some("Domingo".to_string()),
            csv_importer: CsvImporterConfig::default(),
            maps: MapLinkConfig::default(),
        }
    }

    fn manager(config: ItineraryConfig) -> (ItineraryManager, Arc<ViewStateManager>) {
        let view_state = Arc::new(ViewStateManager::new());
        let (_tx, retry_rx) = mpsc::channel(1);
        let manager = ItineraryManager {
            config,
            view_state: view_state.clone(),
            retry_rx,
        };
        (manager, view_state)
    }

    #[tokio::test]
    async fn successful_load_selects_the_first_day() {
        let (manager, view_state) = manager(config());
        let loader = StubLoader {
            text: Some("Día,Hora\nMartes,09:00\nLunes,10:00\n".to_string()),
        };
        let importer = CsvImporter::new(CsvImporterConfig::default());

        manager.reload(&loader, &importer).await;

        match &*view_state.read() {
            ViewState::Ready {
                itinerary,
                selected_day,
                ..
            } => {
                assert_eq!(itinerary.len(), 2);
                assert_eq!(selected_day.as_deref(), Some("Martes"));
            }
            other => panic!("unexpected state {:?}", other),
        };
    }

    #[tokio::test]
    async fn empty_itinerary_falls_back_to_the_default_day() {
        let (manager, view_state) = manager(config());
        let loader = StubLoader {
            text: Some("Día,Hora\n".to_string()),
        };
        let importer = CsvImporter::new(CsvImporterConfig::default());

        manager.reload(&loader, &importer).await;

        match &*view_state.read() {
            ViewState::Ready {
                itinerary,
                selected_day,
                ..
            } => {
                assert!(itinerary.is_empty());
                assert_eq!(selected_day.as_deref(), Some("Domingo"));
            }
            other => panic!("unexpected state {:?}", other),
        };
    }

    #[tokio::test]
    async fn failed_load_collapses_to_the_error_state() {
        let (manager, view_state) = manager(config());
        let loader = StubLoader { text: None };
        let importer = CsvImporter::new(CsvImporterConfig::default());

        manager.reload(&loader, &importer).await;

        assert!(matches!(&*view_state.read(), ViewState::Error));
    }

    #[tokio::test]
    async fn run_performs_one_load_and_stops_when_retries_are_gone() {
        let dir = std::env::temp_dir().join("travelitinerary-manager-test");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("itinerary.csv");
        tokio::fs::write(&path, "Día,Hora\nDomingo,10:00\n")
            .await
            .unwrap();

        let view_state = Arc::new(ViewStateManager::new());
        let (retry_tx, retry_rx) = mpsc::channel(1);
        let mut manager = ItineraryManager::new(
            ItineraryConfig {
                csv_path: Some(path.to_str().unwrap().to_string()),
                ..config()
            },
            view_state.clone(),
            retry_rx,
        )
        .await
        .unwrap();

        drop(retry_tx);
        manager.run().await.unwrap();

        assert!(matches!(&*view_state.read(), ViewState::Ready { .. }));
    }

    #[tokio::test]
    async fn run_without_a_source_is_a_startup_error() {
        let (mut manager, _view_state) = manager(config());
        assert!(manager.run().await.is_err());
    }
}
