//! Page state for the generation studio and the submission pipeline.
//!
//! `StudioState` is the single source of truth and `PageView` its projection.
//! Submissions engage loading before returning their future, then settle into
//! the shared output. The state lock is never held across a network call.
pub mod forms;
pub mod ids;
pub mod loading;
pub mod render;
pub mod slider;
pub mod tabs;

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{
    client::GenerationApi,
    config::Config,
    error::Result,
    logger,
    models::{
        GenerationResult, ImageEditRequest, TextToImageRequest, VideoRequest,
        DEFAULT_CONTROL_STRENGTH, DEFAULT_CREATIVE_STRENGTH,
    },
};

pub use forms::{FormKind, ImageToImageForm, ImageToVideoForm, TextToImageForm};
pub use loading::LoadingIndicator;
pub use render::{render, ResultOutput};
pub use slider::Slider;
pub use tabs::TabSet;

#[derive(Debug, Clone)]
pub struct StudioState {
    pub api_key: String,
    pub tabs: TabSet,
    pub creative: Slider,
    pub control: Slider,
    pub text_to_image: TextToImageForm,
    pub image_to_image: ImageToImageForm,
    pub image_to_video: ImageToVideoForm,
    pub loading: LoadingIndicator,
    pub output: ResultOutput,
    latest_submission: u64,
}

impl StudioState {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            tabs: TabSet::new(&[
                ids::TEXT_TO_IMAGE_TAB,
                ids::IMAGE_TO_IMAGE_TAB,
                ids::IMAGE_TO_VIDEO_TAB,
            ]),
            creative: Slider::new(
                ids::CREATIVE_STRENGTH,
                ids::CREATIVE_VALUE,
                DEFAULT_CREATIVE_STRENGTH,
            ),
            control: Slider::new(
                ids::CONTROL_STRENGTH,
                ids::CONTROL_VALUE,
                DEFAULT_CONTROL_STRENGTH,
            ),
            text_to_image: TextToImageForm::default(),
            image_to_image: ImageToImageForm::default(),
            image_to_video: ImageToVideoForm::default(),
            loading: LoadingIndicator::default(),
            output: ResultOutput::Empty,
            latest_submission: 0,
        }
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.loading.set_loading(is_loading, &mut self.output);
    }

    /// Snapshot of everything the page shows.
    pub fn view(&self) -> PageView {
        PageView {
            visible_panel: self.tabs.visible_panel().map(str::to_string),
            active_links: self
                .tabs
                .links()
                .iter()
                .enumerate()
                .filter(|(_, link)| link.active)
                .map(|(i, _)| i)
                .collect(),
            creative_value: self.creative.value().to_string(),
            creative_label: self.creative.label().to_string(),
            control_value: self.control.value().to_string(),
            control_label: self.control.label().to_string(),
            spinner_visible: self.loading.spinner_visible,
            result_container_visible: self.loading.container_visible,
            output: self.output.clone(),
            output_html: self.output.to_html(),
        }
    }

    fn payload(&self, form: FormKind) -> Payload {
        match form {
            FormKind::TextToImage => Payload::TextToImage(self.text_to_image.to_request()),
            FormKind::ImageToImage => Payload::ImageToImage(
                self.image_to_image
                    .to_request(self.creative.value(), self.control.value()),
            ),
            FormKind::ImageToVideo => Payload::ImageToVideo(self.image_to_video.to_request()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub visible_panel: Option<String>,
    pub active_links: Vec<usize>,
    pub creative_value: String,
    pub creative_label: String,
    pub control_value: String,
    pub control_label: String,
    pub spinner_visible: bool,
    pub result_container_visible: bool,
    pub output: ResultOutput,
    pub output_html: String,
}

/// How one submission settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReport {
    pub id: u64,
    pub form: FormKind,
    pub output: ResultOutput,
    /// False when a newer submission had started and stale responses are discarded.
    pub applied: bool,
}

enum Payload {
    TextToImage(TextToImageRequest),
    ImageToImage(ImageEditRequest),
    ImageToVideo(VideoRequest),
}

#[derive(Clone)]
pub struct Studio {
    api: Arc<dyn GenerationApi>,
    state: Arc<Mutex<StudioState>>,
    discard_stale: bool,
}

impl Studio {
    pub fn new(config: &Config, api: Arc<dyn GenerationApi>) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(StudioState::new(config.api_key.clone()))),
            discard_stale: config.discard_stale,
        }
    }

    fn lock(&self) -> MutexGuard<'_, StudioState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` against the live state; use it for form edits.
    pub fn update<R>(&self, f: impl FnOnce(&mut StudioState) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn view(&self) -> PageView {
        self.lock().view()
    }

    pub fn set_api_key(&self, api_key: impl Into<String>) {
        self.lock().api_key = api_key.into();
    }

    pub fn activate_tab(&self, origin_link: usize, tab_id: &str) {
        self.lock().tabs.activate(origin_link, tab_id);
    }

    pub fn open_tab(&self, tab_id: &str) {
        self.lock().tabs.open(tab_id);
    }

    pub fn input_creative_strength(&self, value: impl Into<String>) {
        self.lock().creative.input(value);
    }

    pub fn input_control_strength(&self, value: impl Into<String>) {
        self.lock().control.input(value);
    }

    pub fn submit_text_to_image(
        &self,
    ) -> impl Future<Output = SubmissionReport> + Send + 'static {
        self.submit(FormKind::TextToImage)
    }

    pub fn submit_image_to_image(
        &self,
    ) -> impl Future<Output = SubmissionReport> + Send + 'static {
        self.submit(FormKind::ImageToImage)
    }

    pub fn submit_image_to_video(
        &self,
    ) -> impl Future<Output = SubmissionReport> + Send + 'static {
        self.submit(FormKind::ImageToVideo)
    }

    /// Shows the spinner and captures the form before returning; the
    /// returned future performs the call and renders whatever settles.
    pub fn submit(
        &self,
        form: FormKind,
    ) -> impl Future<Output = SubmissionReport> + Send + 'static {
        let (id, api_key, payload) = {
            let mut state = self.lock();
            state.latest_submission += 1;
            let id = state.latest_submission;
            state.set_loading(true);
            (id, state.api_key.clone(), state.payload(form))
        };
        log::info!("Submission #{} started from {}", id, form.form_id());

        let studio = self.clone();
        async move {
            let _timer = logger::timer(&format!("submission #{}", id));
            let outcome = studio.call(&api_key, payload).await;
            studio.settle(id, form, outcome)
        }
    }

    async fn call(&self, api_key: &str, payload: Payload) -> Result<GenerationResult> {
        match payload {
            Payload::TextToImage(request) => self.api.generate_image(api_key, request).await,
            Payload::ImageToImage(request) => self.api.edit_image(api_key, request).await,
            Payload::ImageToVideo(request) => self.api.generate_video(api_key, request).await,
        }
    }

    fn settle(
        &self,
        id: u64,
        form: FormKind,
        outcome: Result<GenerationResult>,
    ) -> SubmissionReport {
        let output = match outcome {
            Ok(result) => render(result, form.media_kind()),
            Err(err) => {
                log::error!("Submission #{} failed: {}", id, err);
                ResultOutput::from_error(&err)
            }
        };

        let mut state = self.lock();
        if self.discard_stale && id < state.latest_submission {
            log::info!(
                "Submission #{} discarded, #{} is newer",
                id,
                state.latest_submission
            );
            return SubmissionReport {
                id,
                form,
                output,
                applied: false,
            };
        }

        state.output = output.clone();
        state.set_loading(false);
        if output.is_error() {
            log::warn!("Submission #{} rendered an error", id);
        } else {
            log::info!("Submission #{} rendered {}", id, form.media_kind().as_str());
        }

        SubmissionReport {
            id,
            form,
            output,
            applied: true,
        }
    }
}
