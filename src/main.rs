use iced::widget::{column, container, scrollable, stack, text, Column};
use iced::{event, keyboard, touch, window, Event, Subscription};
use iced::{Alignment, Element, Length, Size, Task, Theme};
use rfd::FileDialog;
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

mod caption;
mod config;
mod error;
mod media;
mod state;
mod ui;

use caption::CaptionService;
use config::Config;
use error::UploadError;
use media::decode::{load_preview, Preview};
use media::download::{self, DownloadOutcome};
use media::upload::{self, UploadRequest};
use state::data::MediaItem;
use state::delete_gate::{DeleteGate, GateDecision};
use state::gallery::Gallery;
use state::library::Library;
use state::lightbox::{Lightbox, LightboxKey, Navigation, SwipeTracker};
use ui::upload::UploadForm;
use ui::PreviewState;

/// Narrowest a masonry column may get before one is dropped
const MIN_COLUMN_WIDTH: f32 = 280.0;

/// Main application state
struct Guestbook {
    config: Config,
    /// The persisted media collection
    gallery: Gallery,
    /// Pictures ready for display, keyed by item id
    previews: HashMap<String, PreviewState>,
    upload: UploadForm,
    lightbox: Option<Lightbox>,
    swipe: SwipeTracker,
    delete_gate: DeleteGate,
    /// Pending alert text; blocks the UI until dismissed
    alert: Option<String>,
    /// Result of the last download, shown in the lightbox
    notice: Option<String>,
    captions: CaptionService,
    window_width: f32,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    GuestNameChanged(String),
    /// User clicked "Foto oder Video wählen"
    ChooseFile,
    UploadPrepared(Result<MediaItem, UploadError>),
    PreviewLoaded(String, Result<Option<Preview>, String>),
    OpenLightbox(String),
    CloseLightbox,
    Navigate(Navigation),
    Key(LightboxKey),
    TouchStarted(f32),
    TouchMoved(f32),
    TouchEnded,
    RequestDelete(String),
    PasscodeChanged(String),
    SubmitPasscode,
    CancelPasscode,
    DismissAlert,
    Download,
    DownloadFinished(DownloadOutcome),
    PlayVideo,
    VideoOpened(DownloadOutcome),
    WindowResized(Size),
}

impl Guestbook {
    /// Open storage and load the gallery
    fn init(config: Config) -> error::Result<Self> {
        let library = Library::open(&config.database_path())?;
        tracing::debug!(path = ?library.path(), "storage ready");
        let gallery = Gallery::load(library, &config.storage_key)?;

        tracing::info!("💍 Guestbook initialized with {} items", gallery.len());

        Ok(Guestbook {
            delete_gate: DeleteGate::new(config.delete_passcode.clone()),
            captions: CaptionService::new(config.captions.clone()),
            gallery,
            previews: HashMap::new(),
            upload: UploadForm::default(),
            lightbox: None,
            swipe: SwipeTracker::default(),
            alert: None,
            notice: None,
            window_width: 1200.0,
            config,
        })
    }

    /// Start loading every picture in the gallery
    fn boot(mut self) -> (Self, Task<Message>) {
        let items: Vec<MediaItem> = self.gallery.items().to_vec();
        let tasks = items.into_iter().map(|item| self.load_preview(item));
        let task = Task::batch(tasks.collect::<Vec<_>>());
        (self, task)
    }

    fn load_preview(&mut self, item: MediaItem) -> Task<Message> {
        let id = item.id.clone();
        self.previews.insert(id.clone(), PreviewState::Loading);
        Task::perform(load_preview(item), move |result| {
            Message::PreviewLoaded(id.clone(), result.map_err(|e| e.to_string()))
        })
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::GuestNameChanged(name) => {
                self.upload.guest_name = name;
                Task::none()
            }
            Message::ChooseFile => {
                let extensions = upload::supported_extensions();
                let Some(path) = FileDialog::new()
                    .set_title("Foto oder Video wählen")
                    .add_filter("Fotos & Videos", extensions.as_slice())
                    .pick_file()
                else {
                    return Task::none();
                };

                if let Err(e) = upload::validate_guest_name(&self.upload.guest_name) {
                    self.alert = Some(e.to_string());
                    return Task::none();
                }

                self.upload.is_uploading = true;
                let request = UploadRequest {
                    guest_name: self.upload.guest_name.clone(),
                    path,
                };
                let captions = self.captions.is_enabled().then(|| self.captions.clone());

                Task::perform(
                    upload::prepare_upload(request, self.config.media.clone(), captions),
                    Message::UploadPrepared,
                )
            }
            Message::UploadPrepared(Ok(item)) => {
                if let Err(e) = self.gallery.add(item) {
                    tracing::error!(error = %e, "could not store upload");
                    self.upload.is_uploading = false;
                    self.alert = Some("Der Upload konnte nicht gespeichert werden.".to_string());
                    return Task::none();
                }
                self.upload.finish();

                // Keep showing the same item if the lightbox is open
                let len = self.gallery.len();
                if let Some(lightbox) = &mut self.lightbox {
                    lightbox.next(len);
                }

                match self.gallery.get(0).cloned() {
                    Some(item) => self.load_preview(item),
                    None => Task::none(),
                }
            }
            Message::UploadPrepared(Err(e)) => {
                self.upload.is_uploading = false;
                self.alert = Some(e.to_string());
                Task::none()
            }
            Message::PreviewLoaded(id, result) => {
                // The item may have been deleted while loading
                if self.gallery.index_of(&id).is_none() {
                    self.previews.remove(&id);
                    return Task::none();
                }
                let state = match result {
                    Ok(Some(preview)) => PreviewState::Ready(preview),
                    Ok(None) => PreviewState::Unavailable,
                    Err(e) => {
                        tracing::warn!(item = %id, error = %e, "preview unavailable");
                        PreviewState::Unavailable
                    }
                };
                self.previews.insert(id, state);
                Task::none()
            }
            Message::OpenLightbox(id) => {
                if let Some(index) = self.gallery.index_of(&id) {
                    self.lightbox = Lightbox::open(index, self.gallery.len());
                    self.swipe = SwipeTracker::default();
                    self.notice = None;
                }
                Task::none()
            }
            Message::CloseLightbox => {
                self.lightbox = None;
                Task::none()
            }
            Message::Navigate(navigation) => {
                self.navigate(navigation);
                Task::none()
            }
            Message::Key(key) => {
                if self.delete_gate.pending().is_some() {
                    if key == LightboxKey::Escape {
                        self.delete_gate.cancel();
                    }
                } else if self.alert.is_none() {
                    self.navigate(key.into());
                }
                Task::none()
            }
            Message::TouchStarted(x) => {
                self.swipe.start(x);
                Task::none()
            }
            Message::TouchMoved(x) => {
                self.swipe.update(x);
                Task::none()
            }
            Message::TouchEnded => {
                if let Some(navigation) = self.swipe.finish(self.config.swipe_threshold) {
                    self.navigate(navigation);
                }
                Task::none()
            }
            Message::RequestDelete(id) => {
                self.delete_gate.request(id);
                Task::none()
            }
            Message::PasscodeChanged(input) => {
                self.delete_gate.set_input(input);
                Task::none()
            }
            Message::SubmitPasscode => {
                if let Some((decision, id)) = self.delete_gate.submit() {
                    self.apply_delete_decision(decision, &id);
                }
                Task::none()
            }
            Message::CancelPasscode => {
                let decision = self.delete_gate.cancel();
                tracing::debug!(?decision, "delete prompt dismissed");
                Task::none()
            }
            Message::DismissAlert => {
                self.alert = None;
                Task::none()
            }
            Message::Download => {
                let Some(item) = self.current_item().cloned() else {
                    return Task::none();
                };
                let Some(destination) = FileDialog::new()
                    .set_title("Herunterladen")
                    .set_file_name(item.download_file_name())
                    .save_file()
                else {
                    return Task::none();
                };
                Task::perform(download::download(item, destination), Message::DownloadFinished)
            }
            Message::DownloadFinished(outcome) => {
                self.notice = Some(match outcome {
                    DownloadOutcome::Saved(path) => format!("Gespeichert unter {}", path.display()),
                    DownloadOutcome::OpenedLink => "Im Browser geöffnet".to_string(),
                    DownloadOutcome::Failed(_) => "Download fehlgeschlagen".to_string(),
                });
                Task::none()
            }
            Message::PlayVideo => {
                let Some(item) = self.current_item().cloned() else {
                    return Task::none();
                };
                Task::perform(
                    async move { download::open_link(&item).await },
                    Message::VideoOpened,
                )
            }
            Message::VideoOpened(outcome) => {
                if let DownloadOutcome::Failed(e) = outcome {
                    tracing::error!(error = %e, "could not play video");
                    self.notice = Some("Video konnte nicht geöffnet werden".to_string());
                }
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_width = size.width;
                Task::none()
            }
        }
    }

    fn navigate(&mut self, navigation: Navigation) {
        let len = self.gallery.len();
        let Some(lightbox) = &mut self.lightbox else {
            return;
        };
        match navigation {
            Navigation::Next => lightbox.next(len),
            Navigation::Previous => lightbox.previous(len),
            Navigation::Close => self.lightbox = None,
        }
        self.notice = None;
    }

    fn apply_delete_decision(&mut self, decision: GateDecision, id: &str) {
        match decision {
            GateDecision::Approved => match self.gallery.remove(id) {
                Ok(removed) => {
                    if removed {
                        self.previews.remove(id);
                        tracing::info!("🗑️  Deleted item {}", id);
                    }
                    self.lightbox = None;
                }
                Err(e) => {
                    tracing::error!(error = %e, "could not delete item");
                    self.alert = Some("Löschen fehlgeschlagen.".to_string());
                }
            },
            GateDecision::Rejected => self.alert = Some("Falsches Passwort.".to_string()),
            GateDecision::Cancelled => {}
        }
    }

    fn current_item(&self) -> Option<&MediaItem> {
        self.lightbox
            .as_ref()
            .and_then(|lightbox| self.gallery.get(lightbox.index()))
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let columns = ui::masonry::columns_for_width(
            self.window_width,
            self.config.gallery_columns,
            MIN_COLUMN_WIDTH,
        );

        let intro = column![
            text("UNSERE MOMENTE").size(40),
            text("Teilt eure schönsten Fotos und Videos von unserem Tag mit uns.").size(16),
        ]
        .spacing(12)
        .align_x(Alignment::Center);

        let body: Column<Message> = column![
            intro,
            ui::upload::view(&self.upload),
            ui::gallery::view(self.gallery.items(), &self.previews, columns),
        ]
        .spacing(64)
        .padding([48, 16])
        .max_width(1152.0)
        .align_x(Alignment::Center);

        let page = scrollable(
            column![
                ui::header::view(&self.config.event),
                container(body).center_x(Length::Fill),
                ui::footer::view(&self.config.event),
            ]
            .width(Length::Fill),
        );

        let mut content: Element<'_, Message> = match (&self.lightbox, self.current_item()) {
            (Some(lightbox), Some(item)) => stack![
                page,
                ui::lightbox::view(
                    item,
                    self.previews.get(&item.id),
                    lightbox.position_label(self.gallery.len()),
                    self.notice.as_deref(),
                )
            ]
            .into(),
            _ => page.into(),
        };

        if let Some(pending) = self.delete_gate.pending() {
            content = ui::modal::modal(
                content,
                ui::modal::passcode(&pending.input),
                Message::CancelPasscode,
            );
        }

        if let Some(alert) = &self.alert {
            content = ui::modal::modal(content, ui::modal::alert(alert), Message::DismissAlert);
        }

        content
    }

    fn subscription(&self) -> Subscription<Message> {
        let resize = window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        if self.lightbox.is_none() && self.delete_gate.pending().is_none() {
            return resize;
        }

        Subscription::batch([
            resize,
            keyboard::on_key_press(lightbox_key),
            event::listen_with(touch_gesture),
        ])
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn lightbox_key(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    use keyboard::key::Named;

    let key = match key.as_ref() {
        keyboard::Key::Named(Named::ArrowRight) => LightboxKey::ArrowRight,
        keyboard::Key::Named(Named::ArrowLeft) => LightboxKey::ArrowLeft,
        keyboard::Key::Named(Named::Escape) => LightboxKey::Escape,
        _ => return None,
    };
    Some(Message::Key(key))
}

fn touch_gesture(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::TouchStarted(position.x))
        }
        Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(Message::TouchMoved(position.x))
        }
        Event::Touch(touch::Event::FingerLifted { .. }) => Some(Message::TouchEnded),
        _ => None,
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wedding_guestbook=info")),
        )
        .init();

    let config = Config::load();

    // The app cannot function without its storage
    let guestbook = match Guestbook::init(config) {
        Ok(guestbook) => guestbook,
        Err(e) => {
            tracing::error!(error = %e, "failed to open the guestbook storage");
            eprintln!("Failed to initialize storage: {e}. Check permissions and disk space.");
            std::process::exit(1);
        }
    };

    iced::application("Hochzeitsgalerie", Guestbook::update, Guestbook::view)
        .subscription(Guestbook::subscription)
        .theme(Guestbook::theme)
        .window_size(Size::new(1200.0, 900.0))
        .centered()
        .run_with(move || guestbook.boot())
}
