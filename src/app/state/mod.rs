mod constants;
mod labels;
mod session;
mod thumbs;
mod viewer;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::interaction::InteractionTimer;
use crate::manifest::{SessionElement, SessionManifest, SessionType};
use crate::thumburl::thumbnail_url;
use crate::viewer::{GuidePlacement, SliceType, guide_placement, indicator_text};
use iced::Task;
use std::path::PathBuf;
use std::time::Duration;

use super::messages::Message;
use super::update::Effect;

pub(crate) use constants::*;
pub(in crate::app) use labels::LabelState;
pub(in crate::app) use session::SessionState;
pub(in crate::app) use thumbs::ThumbnailCache;
pub(in crate::app) use viewer::{IntensityWindow, VolumeNav, format_intensity};

/// Everything the view needs to draw one image pane.
pub(in crate::app) struct PaneRender {
    pub(in crate::app) caption: String,
    pub(in crate::app) url: String,
    pub(in crate::app) guide: Option<GuidePlacement>,
    pub(in crate::app) selected: bool,
}

/// Core application state composed of sub-models.
pub struct App {
    pub(in crate::app) config: AppConfig,
    pub(in crate::app) manifest_path: PathBuf,
    pub(in crate::app) api: ApiClient,
    pub(in crate::app) session: SessionState,
    pub(in crate::app) nav: Option<VolumeNav>,
    pub(in crate::app) windows: Vec<IntensityWindow>,
    pub(in crate::app) labels: LabelState,
    pub(in crate::app) timer: InteractionTimer,
    pub(in crate::app) multiplier: f64,
    pub(in crate::app) thumbs: ThumbnailCache,
    pub(in crate::app) status: Option<String>,
}

impl App {
    pub fn bootstrap(
        manifest: SessionManifest,
        manifest_path: PathBuf,
        config: AppConfig,
        multiplier: f64,
        resume_element: Option<usize>,
    ) -> (App, Task<Message>) {
        let api = ApiClient::new(&config.server_url);
        let label_values = manifest.display_label_values();
        let session = SessionState::new(manifest, resume_element);
        let element = session.current();
        let nav = nav_for_element(session.manifest.session_type, element);
        let windows = windows_for_element(element, multiplier);
        let labels = LabelState::new(label_values, element.current_label.clone());
        let timer = InteractionTimer::start(Duration::from_millis(config.idle_threshold_ms));

        let mut app = App {
            config,
            manifest_path,
            api,
            session,
            nav,
            windows,
            labels,
            timer,
            multiplier,
            thumbs: ThumbnailCache::new(),
            status: None,
        };

        let task = Task::batch(
            app.slice_refresh_effects()
                .into_iter()
                .map(|effect| app.run_effect(effect))
                .collect::<Vec<_>>(),
        );
        (app, task)
    }

    /// Rebuild the per-element sub-models after switching elements. The
    /// thumbnail cache survives; everything slice- or label-shaped is
    /// rebuilt from the new element, and the interaction clock starts over.
    pub(in crate::app) fn rebuild_for_element(&mut self) {
        let element = self.session.current();
        self.nav = nav_for_element(self.session.manifest.session_type, element);
        self.windows = windows_for_element(element, self.multiplier);
        let stored = element.current_label.clone();
        self.labels.set_selected(stored);
        self.timer.reset();
        self.status = None;
    }

    /// Panes shown in the pane strip: three axis panes for a volume, the
    /// fixed slice for a slice session, both slices for a comparison.
    pub(in crate::app) fn side_panes(&self) -> Vec<PaneRender> {
        let element = self.session.current();
        match self.session.manifest.session_type {
            SessionType::CategoricalVolume => {
                let Some(nav) = self.nav.as_ref() else {
                    return Vec::new();
                };
                let image = &element.images[0];
                let window = &self.windows[0];
                SliceType::ALL
                    .iter()
                    .map(|&slice_type| PaneRender {
                        caption: slice_type.to_string(),
                        url: thumbnail_url(
                            &self.session.manifest.dataset,
                            &image.image_name,
                            slice_type,
                            nav.index_for(slice_type),
                            window.min,
                            window.max,
                        ),
                        guide: guide_placement(
                            nav.active(),
                            slice_type,
                            nav.active_index(),
                            nav.active_count(),
                        ),
                        selected: slice_type == nav.active(),
                    })
                    .collect()
            }
            SessionType::CategoricalSlice | SessionType::ComparisonSlice => element
                .images
                .iter()
                .enumerate()
                .map(|(slot, image)| {
                    let slice_type = image.slice_type.unwrap_or(SliceType::Axial);
                    let slice_index = image.slice_index.unwrap_or(0);
                    let window = &self.windows[slot];
                    PaneRender {
                        caption: image.image_name.clone(),
                        url: thumbnail_url(
                            &self.session.manifest.dataset,
                            &image.image_name,
                            slice_type,
                            slice_index,
                            window.min,
                            window.max,
                        ),
                        guide: None,
                        selected: false,
                    }
                })
                .collect(),
        }
    }

    /// The large pane tracking the active axis; volume sessions only.
    pub(in crate::app) fn main_pane(&self) -> Option<PaneRender> {
        let nav = self.nav.as_ref()?;
        let element = self.session.current();
        let image = &element.images[0];
        let window = &self.windows[0];
        Some(PaneRender {
            caption: image.image_name.clone(),
            url: thumbnail_url(
                &self.session.manifest.dataset,
                &image.image_name,
                nav.active(),
                nav.active_index(),
                window.min,
                window.max,
            ),
            guide: None,
            selected: true,
        })
    }

    pub(in crate::app) fn slice_indicator(&self) -> Option<String> {
        let nav = self.nav.as_ref()?;
        Some(indicator_text(nav.active_index(), nav.active_count()))
    }

    pub(in crate::app) fn element_indicator(&self) -> String {
        format!(
            "Element {} / {}",
            self.session.element_index + 1,
            self.session.element_count()
        )
    }

    fn wanted_urls(&self) -> Vec<String> {
        let mut urls: Vec<String> = self.side_panes().into_iter().map(|pane| pane.url).collect();
        if let Some(main) = self.main_pane() {
            if !urls.contains(&main.url) {
                urls.push(main.url);
            }
        }
        urls
    }

    /// Fetch effect for every displayed URL not yet loaded or in flight.
    pub(in crate::app) fn slice_refresh_effects(&mut self) -> Vec<Effect> {
        let missing: Vec<String> = self
            .wanted_urls()
            .into_iter()
            .filter(|url| !self.thumbs.is_known(url))
            .collect();
        if missing.is_empty() {
            return Vec::new();
        }
        for url in &missing {
            self.thumbs.mark_pending(url.clone());
        }
        vec![Effect::FetchThumbnails(missing)]
    }
}

fn nav_for_element(session_type: SessionType, element: &SessionElement) -> Option<VolumeNav> {
    match session_type {
        SessionType::CategoricalVolume => Some(VolumeNav::new(element.images[0].slice_counts)),
        SessionType::CategoricalSlice | SessionType::ComparisonSlice => None,
    }
}

fn windows_for_element(element: &SessionElement, multiplier: f64) -> Vec<IntensityWindow> {
    element
        .images
        .iter()
        .map(|image| IntensityWindow::new(0.0, image.image_max * multiplier))
        .collect()
}
