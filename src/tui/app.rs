use crate::assessment::{
    sample_questions, AnswerOption, Archetype, AssessmentSession, QuestionBank, RngSource,
};
use crate::certificate::{self, Certificate, EXPORT_FAILED_MESSAGE};
use crate::config::Config;
use crate::share::{self, SharePlatform};
use crate::tui::theme::ThemeColors;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

const FLASH_SECS: u64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Landing,
    Quiz,
    Analyzing,
    Result,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    NameRequired,
    Help,
}

pub struct App {
    pub step: Step,
    pub input_mode: InputMode,
    pub name: String,
    pub session: Option<AssessmentSession>,
    pub selected_option: usize,
    pub result: Option<Archetype>,
    pub flash_message: Option<(String, Instant)>,
    pub analysis_started: Option<Instant>,
    pub is_exporting: bool,
    pending_export: Option<JoinHandle<anyhow::Result<PathBuf>>>,
    pub last_export: Option<PathBuf>,
    pub spinner_frame: usize,
    pub should_quit: bool,
    pub config: Config,
    pub bank: QuestionBank,
    pub colors: ThemeColors,
    random: RngSource<StdRng>,
}

impl App {
    pub fn new(config: Config, bank: QuestionBank, colors: ThemeColors) -> Self {
        Self::with_rng(config, bank, colors, StdRng::from_os_rng())
    }

    /// Same as [`App::new`] with a caller-chosen generator (seeded in tests).
    pub fn with_rng(config: Config, bank: QuestionBank, colors: ThemeColors, rng: StdRng) -> Self {
        Self {
            step: Step::Landing,
            input_mode: InputMode::Normal,
            name: config.name.clone().unwrap_or_default(),
            session: None,
            selected_option: 0,
            result: None,
            flash_message: None,
            analysis_started: None,
            is_exporting: false,
            pending_export: None,
            last_export: None,
            spinner_frame: 0,
            should_quit: false,
            config,
            bank,
            colors,
            random: RngSource::new(rng),
        }
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= FLASH_SECS {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    /// Advance the spinner animation frame
    pub fn advance_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    /// Periodic housekeeping: flash expiry, spinner, and the end of the
    /// analysis pause.
    pub fn on_tick(&mut self) {
        self.update_flash();
        self.advance_spinner();
        if self.step == Step::Analyzing && self.analysis_elapsed() {
            self.finish_analysis();
        }
    }

    fn analysis_elapsed(&self) -> bool {
        match self.analysis_started {
            Some(started) => started.elapsed() >= self.config.analysis_delay(),
            None => true,
        }
    }

    /// Leave the landing screen. A blank name opens the "Name Required" popup.
    pub fn start_assessment(&mut self) {
        if self.name.trim().is_empty() {
            self.input_mode = InputMode::NameRequired;
            return;
        }
        self.begin_quiz();
    }

    fn begin_quiz(&mut self) {
        let questions = sample_questions(
            &self.bank,
            self.config.questions_per_category,
            &mut self.random,
        );
        tracing::info!(questions = questions.len(), "assessment started");
        self.session = Some(AssessmentSession::new(questions));
        self.selected_option = 0;
        self.result = None;
        self.analysis_started = None;
        self.last_export = None;
        self.step = Step::Quiz;
    }

    pub fn next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    fn option_count(&self) -> usize {
        self.session
            .as_ref()
            .and_then(|s| s.current())
            .map_or(0, |q| q.options.len())
    }

    pub fn answer_selected(&mut self) {
        self.answer(self.selected_option);
    }

    /// Record option `index` for the current question. The chosen option's
    /// feedback is flashed; the last answer starts the analysis pause.
    pub fn answer(&mut self, index: usize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let feedback = match session.answer(index) {
            Ok(option) => feedback_text(option),
            Err(e) => {
                self.show_flash(format!("Error: {}", e));
                return;
            }
        };
        let complete = session.is_complete();

        self.selected_option = 0;
        if let Some(feedback) = feedback {
            self.show_flash(feedback);
        }
        if complete {
            self.step = Step::Analyzing;
            self.analysis_started = Some(Instant::now());
        }
    }

    fn finish_analysis(&mut self) {
        let Some(session) = self.session.as_ref() else {
            self.step = Step::Landing;
            return;
        };
        match session.finish(&mut self.random) {
            Ok(result) => {
                tracing::info!(archetype = %result.id, "assessment scored");
                self.result = Some(result);
                self.step = Step::Result;
            }
            Err(e) => {
                self.show_flash(format!("Error: {}", e));
                self.step = Step::Landing;
            }
        }
        self.analysis_started = None;
    }

    /// Remaining part of the analysis pause, for the progress display.
    pub fn analysis_progress(&self) -> f64 {
        let delay = self.config.analysis_delay();
        match self.analysis_started {
            Some(started) if delay > Duration::ZERO => {
                (started.elapsed().as_secs_f64() / delay.as_secs_f64()).min(1.0)
            }
            _ => 1.0,
        }
    }

    pub fn share(&mut self, platform: SharePlatform) {
        let Some(result) = self.result.as_ref() else {
            return;
        };
        match share::share(platform, result, &self.config.share_url) {
            Ok(()) => self.show_flash(format!("Opened {} share", platform)),
            Err(e) => self.show_flash(format!("Failed to open browser: {}", e)),
        }
    }

    /// Start exporting the certificate on the blocking pool. Ignored while an
    /// export is already running; [`App::poll_export`] collects the outcome.
    pub fn download_certificate(&mut self) {
        if self.is_exporting {
            return;
        }
        let Some(result) = self.result.as_ref() else {
            return;
        };

        let today = chrono::Local::now().date_naive();
        let cert = Certificate::new(&self.name, result, today, &mut self.random);
        let dir = self.config.certificate_dir();
        self.pending_export = Some(tokio::task::spawn_blocking(move || {
            certificate::export_svg(&cert, &dir)
        }));
        self.is_exporting = true;
    }

    /// Collect a finished export: flash the saved path, or the failure message
    /// once, and clear the in-progress flag. No-op while the export runs.
    pub async fn poll_export(&mut self) {
        if !self.pending_export.as_ref().is_some_and(|h| h.is_finished()) {
            return;
        }
        let Some(handle) = self.pending_export.take() else {
            return;
        };
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(e) => Err(anyhow::anyhow!("export task failed: {}", e)),
        };
        match outcome {
            Ok(path) => {
                self.show_flash(format!("Saved certificate: {}", path.display()));
                self.last_export = Some(path);
            }
            Err(e) => {
                tracing::error!(error = %format!("{:#}", e), "certificate export failed");
                self.show_flash(EXPORT_FAILED_MESSAGE.to_string());
            }
        }
        self.is_exporting = false;
    }

    /// Start over with a fresh sample, keeping the name.
    pub fn retake(&mut self) {
        self.begin_quiz();
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_popup(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}

fn feedback_text(option: &AnswerOption) -> Option<String> {
    let feedback = option.feedback.trim();
    if feedback.is_empty() {
        None
    } else {
        Some(feedback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::ArchetypeId;

    fn app(config: Config) -> App {
        App::with_rng(
            config,
            QuestionBank::builtin(),
            ThemeColors::dark(),
            StdRng::seed_from_u64(5),
        )
    }

    fn instant_config() -> Config {
        Config {
            analysis_delay: "0s".to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_blank_name_opens_popup() {
        let mut app = app(Config::default());
        app.start_assessment();
        assert_eq!(app.input_mode, InputMode::NameRequired);
        assert_eq!(app.step, Step::Landing);
        assert!(app.session.is_none());
    }

    #[test]
    fn test_config_name_prefills() {
        let mut app = app(Config {
            name: Some("Tara".to_string()),
            ..Config::default()
        });
        assert_eq!(app.name, "Tara");
        app.start_assessment();
        assert_eq!(app.step, Step::Quiz);
        assert_eq!(app.session.as_ref().unwrap().questions().len(), 12);
    }

    #[test]
    fn test_option_navigation_wraps() {
        let mut app = app(instant_config());
        app.name = "Tara".to_string();
        app.start_assessment();
        app.previous_option();
        assert_eq!(app.selected_option, 3);
        app.next_option();
        assert_eq!(app.selected_option, 0);
    }

    #[test]
    fn test_answer_flashes_feedback() {
        let mut app = app(instant_config());
        app.name = "Tara".to_string();
        app.start_assessment();
        let expected = app.session.as_ref().unwrap().current().unwrap().options[1]
            .feedback
            .to_string();
        app.answer(1);
        assert_eq!(app.flash_message.as_ref().unwrap().0, expected);
        assert_eq!(app.session.as_ref().unwrap().progress().0, 1);
    }

    #[test]
    fn test_full_run_reaches_result() {
        let mut app = app(instant_config());
        app.name = "Tara".to_string();
        app.start_assessment();
        for _ in 0..12 {
            app.answer(0);
        }
        assert_eq!(app.step, Step::Analyzing);
        app.on_tick();
        assert_eq!(app.step, Step::Result);
        let result = app.result.as_ref().unwrap();
        assert!(ArchetypeId::ALL.contains(&result.id));
        assert_eq!(result.dimension_scores.len(), 5);
    }

    #[test]
    fn test_analysis_waits_for_delay() {
        let mut app = app(Config {
            analysis_delay: "1h".to_string(),
            ..Config::default()
        });
        app.name = "Tara".to_string();
        app.start_assessment();
        for _ in 0..12 {
            app.answer(2);
        }
        app.on_tick();
        assert_eq!(app.step, Step::Analyzing);
        assert!(app.analysis_progress() < 1.0);
    }

    async fn wait_for_export(app: &mut App) {
        for _ in 0..500 {
            app.poll_export().await;
            if !app.is_exporting {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("export did not finish");
    }

    #[tokio::test]
    async fn test_download_writes_certificate() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(Config {
            certificate_dir: Some(dir.path().to_path_buf()),
            ..instant_config()
        });
        app.name = "Tara Singh".to_string();
        app.start_assessment();
        for _ in 0..12 {
            app.answer(3);
        }
        app.on_tick();
        app.download_certificate();
        assert!(app.is_exporting);
        wait_for_export(&mut app).await;
        let path = app.last_export.clone().unwrap();
        assert!(path.ends_with("AI-Q-Certificate-Tara-Singh.svg"));
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_download_ignored_while_exporting() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(Config {
            certificate_dir: Some(dir.path().to_path_buf()),
            ..instant_config()
        });
        app.name = "Tara".to_string();
        app.start_assessment();
        for _ in 0..12 {
            app.answer(1);
        }
        app.on_tick();
        app.download_certificate();
        app.name = "Someone Else".to_string();
        app.download_certificate();
        wait_for_export(&mut app).await;

        let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
        assert!(app.last_export.unwrap().ends_with("AI-Q-Certificate-Tara.svg"));
    }

    #[tokio::test]
    async fn test_failed_download_reports_once_and_resets() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut app = app(Config {
            certificate_dir: Some(file.path().to_path_buf()),
            ..instant_config()
        });
        app.name = "Tara".to_string();
        app.start_assessment();
        for _ in 0..12 {
            app.answer(0);
        }
        app.on_tick();
        app.download_certificate();
        wait_for_export(&mut app).await;
        assert!(!app.is_exporting);
        assert!(app.last_export.is_none());
        assert_eq!(app.flash_message.as_ref().unwrap().0, EXPORT_FAILED_MESSAGE);

        // the flag is reset, so a retry starts a new export
        app.download_certificate();
        assert!(app.is_exporting);
        wait_for_export(&mut app).await;
    }

    #[test]
    fn test_retake_resets_session() {
        let mut app = app(instant_config());
        app.name = "Tara".to_string();
        app.start_assessment();
        for _ in 0..12 {
            app.answer(1);
        }
        app.on_tick();
        app.retake();
        assert_eq!(app.step, Step::Quiz);
        assert!(app.result.is_none());
        assert_eq!(app.session.as_ref().unwrap().progress(), (0, 12));
    }
}
