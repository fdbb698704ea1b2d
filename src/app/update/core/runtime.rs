use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::cache::{save_multiplier, save_resume_element};
use crate::manifest::SessionType;
use anyhow::Result;
use iced::widget::image::Handle;
use iced::{Event, Task, event, keyboard, mouse, window};
use tracing::debug;

impl App {
    pub(in crate::app) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::SaveMultiplier(value) => {
                save_multiplier(&self.manifest_path, value);
                Task::none()
            }
            Effect::SaveResume(element) => {
                save_resume_element(&self.manifest_path, element);
                Task::none()
            }
            Effect::SubmitLabel {
                generation,
                element_id,
                label_value,
                elapsed_ms,
            } => {
                let api = self.api.clone();
                let session_type = self.session.manifest.session_type;
                Task::perform(
                    async move {
                        let result = match session_type {
                            SessionType::CategoricalVolume => {
                                api.set_label(element_id, &label_value, elapsed_ms).await
                            }
                            SessionType::CategoricalSlice => {
                                api.set_slice_label(element_id, &label_value, elapsed_ms).await
                            }
                            SessionType::ComparisonSlice => {
                                api.set_comparison_label(element_id, &label_value, elapsed_ms)
                                    .await
                            }
                        };
                        Message::LabelPosted {
                            generation,
                            element_id,
                            label_value,
                            error: result.err().map(|err| format!("{err:#}")),
                        }
                    },
                    |message| message,
                )
            }
            Effect::FetchThumbnails(urls) => {
                debug!(count = urls.len(), "Fetching slice thumbnails");
                Task::batch(urls.into_iter().map(|url| {
                    let api = self.api.clone();
                    Task::perform(
                        async move {
                            match fetch_and_decode(&api, &url).await {
                                Ok(handle) => Message::ThumbnailLoaded {
                                    url,
                                    handle: Some(handle),
                                    error: None,
                                },
                                Err(err) => Message::ThumbnailLoaded {
                                    url,
                                    handle: None,
                                    error: Some(format!("{err:#}")),
                                },
                            }
                        },
                        |message| message,
                    )
                }))
            }
        }
    }

    pub(in crate::app) fn handle_thumbnail_loaded(
        &mut self,
        url: String,
        handle: Option<Handle>,
        error: Option<String>,
    ) {
        match handle {
            Some(handle) => self.thumbs.insert(url, handle),
            None => {
                tracing::warn!(%url, error = error.as_deref().unwrap_or("unknown"), "Thumbnail fetch failed");
                self.thumbs.forget(&url);
            }
        }
    }
}

async fn fetch_and_decode(api: &crate::api::ApiClient, url: &str) -> Result<Handle> {
    let bytes = api.fetch_thumbnail(url).await?;
    let decoded = image::load_from_memory(&bytes)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    // Events captured by a focused widget (e.g. a text input) stay there.
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        Event::Mouse(mouse::Event::ButtonPressed(_)) => Some(Message::PointerActivity),
        _ => None,
    }
}
