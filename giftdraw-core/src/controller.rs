use crate::i18n::Language;
use crate::session::DrawSession;
use crate::{DrawError, Result};
use serde::{Deserialize, Serialize};

/// Controller phase. Exactly one is active at a time and it decides which
/// commands are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Setup,
    Drawing,
    Results,
}

/// User commands, as issued by the front end.
#[derive(Debug, Clone)]
pub enum Command {
    Start { count: String },
    Draw,
    Redraw,
    Restart,
    ToggleResults,
    ToggleCollapse,
    ToggleLanguage,
}

/// Whether a command changed anything. Commands that arrive in the wrong
/// phase (or before their precondition holds) are ignored, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored,
}

/// Presentation controller: owns the session, the current language and the
/// two view flags, and walks the Setup → Drawing → Results machine.
#[derive(Debug)]
pub struct Controller {
    phase: Phase,
    language: Language,
    session: Option<DrawSession>,
    results_visible: bool,
    results_collapsed: bool,
}

impl Controller {
    pub fn new() -> Self {
        Self::with_language(Language::Zh)
    }

    pub fn with_language(language: Language) -> Self {
        Self {
            phase: Phase::Setup,
            language,
            session: None,
            results_visible: false,
            results_collapsed: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn session(&self) -> Option<&DrawSession> {
        self.session.as_ref()
    }

    /// True once the first draw of the current session has happened; the
    /// redraw action stays available for the rest of the Drawing phase.
    pub fn redraw_available(&self) -> bool {
        self.phase == Phase::Drawing
            && self.session.as_ref().map_or(false, |s| s.draws_taken() >= 1)
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn results_collapsed(&self) -> bool {
        self.results_collapsed
    }

    pub fn handle(&mut self, command: Command) -> Result<Outcome> {
        match (self.phase, command) {
            (Phase::Setup, Command::Start { count }) => self.start(&count),
            (Phase::Drawing, Command::Draw) => Ok(self.draw()),
            (Phase::Drawing, Command::Redraw) => Ok(self.redraw()),
            (Phase::Results, Command::Restart) => Ok(self.restart()),
            (Phase::Results, Command::ToggleResults) => {
                self.results_visible = !self.results_visible;
                Ok(Outcome::Applied)
            }
            (Phase::Results, Command::ToggleCollapse) if self.results_visible => {
                self.results_collapsed = !self.results_collapsed;
                Ok(Outcome::Applied)
            }
            (_, Command::ToggleLanguage) => {
                self.language = self.language.toggle();
                tracing::info!("Language switched to {}", self.language);
                Ok(Outcome::Applied)
            }
            _ => Ok(Outcome::Ignored),
        }
    }

    fn start(&mut self, raw: &str) -> Result<Outcome> {
        let count = parse_count(raw)?;
        self.session = Some(DrawSession::new(count)?);
        self.results_visible = false;
        self.results_collapsed = false;
        self.phase = Phase::Drawing;
        Ok(Outcome::Applied)
    }

    fn draw(&mut self) -> Outcome {
        let session = match self.session.as_mut() {
            Some(s) => s,
            None => return Outcome::Ignored,
        };
        if session.draw_next().is_none() {
            return Outcome::Ignored;
        }
        if session.is_exhausted() {
            tracing::info!("Session {} complete, showing results", session.id());
            self.phase = Phase::Results;
        }
        Outcome::Applied
    }

    fn redraw(&mut self) -> Outcome {
        let session = match self.session.as_mut() {
            Some(s) if s.draws_taken() >= 1 => s,
            _ => return Outcome::Ignored,
        };
        session.reshuffle();
        self.results_visible = false;
        self.results_collapsed = false;
        Outcome::Applied
    }

    fn restart(&mut self) -> Outcome {
        if let Some(session) = self.session.take() {
            tracing::info!("Session {} discarded", session.id());
        }
        self.results_visible = false;
        self.results_collapsed = false;
        self.phase = Phase::Setup;
        Outcome::Applied
    }

    /// Render the current state into text. Everything is recomputed from the
    /// session and the current language; nothing stored is translated, so
    /// toggling the language twice restores every string exactly.
    pub fn render(&self) -> Frame {
        let lang = self.language;

        let (draw_message, number_display) = match (&self.session, self.phase) {
            (Some(s), Phase::Drawing) if s.draws_taken() >= 1 => (
                Some(lang.participant_gift(s.draws_taken() as u32, s.participant_count())),
                s.last_drawn().map(|n| n.to_string()),
            ),
            (Some(s), Phase::Results) => (
                Some(lang.participant_gift(s.participant_count(), s.participant_count())),
                s.last_drawn().map(|n| n.to_string()),
            ),
            _ => (None, None),
        };

        let results = match &self.session {
            Some(s) => s.history().iter().map(|&n| lang.gift_item(n)).collect(),
            None => Vec::new(),
        };

        Frame {
            title: lang.title().to_string(),
            subtitle: lang.subtitle().to_string(),
            placeholder: lang.placeholder().to_string(),
            start_label: lang.start_label().to_string(),
            draw_label: lang.draw_label().to_string(),
            redraw_label: lang.redraw_label().to_string(),
            restart_label: lang.restart_label().to_string(),
            all_results_label: lang.all_results_label().to_string(),
            collapse_label: lang.collapse_label(self.results_collapsed).to_string(),
            draw_message,
            number_display,
            redraw_available: self.redraw_available(),
            results_visible: self.results_visible,
            results_collapsed: self.results_collapsed,
            results,
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the front end needs to paint the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub title: String,
    pub subtitle: String,
    pub placeholder: String,
    pub start_label: String,
    pub draw_label: String,
    pub redraw_label: String,
    pub restart_label: String,
    pub all_results_label: String,
    pub collapse_label: String,
    pub draw_message: Option<String>,
    pub number_display: Option<String>,
    pub redraw_available: bool,
    pub results_visible: bool,
    pub results_collapsed: bool,
    pub results: Vec<String>,
}

fn parse_count(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    match trimmed.parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        // Zero, negative, fractional and non-numeric input are all rejected.
        _ => Err(DrawError::invalid_count(trimmed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(controller: &mut Controller, count: &str) -> Result<Outcome> {
        controller.handle(Command::Start {
            count: count.to_string(),
        })
    }

    #[test]
    fn test_invalid_counts_stay_in_setup() {
        let mut controller = Controller::new();
        for input in ["", "0", "-5", "abc", "3.7"] {
            let result = start(&mut controller, input);
            assert!(
                matches!(result, Err(DrawError::InvalidCount { .. })),
                "input {:?} was not rejected",
                input
            );
            assert_eq!(controller.phase(), Phase::Setup);
            assert!(controller.session().is_none());
        }
    }

    #[test]
    fn test_valid_start_enters_drawing() {
        let mut controller = Controller::new();
        assert_eq!(start(&mut controller, " 5 ").unwrap(), Outcome::Applied);
        assert_eq!(controller.phase(), Phase::Drawing);
        assert_eq!(controller.session().unwrap().participant_count(), 5);
        assert!(!controller.redraw_available());
    }

    #[test]
    fn test_full_draw_scenario() {
        let mut controller = Controller::new();
        start(&mut controller, "3").unwrap();

        controller.handle(Command::Draw).unwrap();
        assert_eq!(controller.phase(), Phase::Drawing);
        assert_eq!(controller.session().unwrap().draws_taken(), 1);
        assert!(controller.redraw_available());

        controller.handle(Command::Draw).unwrap();
        assert_eq!(controller.phase(), Phase::Drawing);

        controller.handle(Command::Draw).unwrap();
        assert_eq!(controller.phase(), Phase::Results);
        let session = controller.session().unwrap();
        assert_eq!(session.history().len(), 3);

        let frame = controller.render();
        assert_eq!(
            frame.number_display.as_deref(),
            Some(session.last_drawn().unwrap().to_string().as_str())
        );

        controller.handle(Command::Restart).unwrap();
        assert_eq!(controller.phase(), Phase::Setup);
        assert!(controller.session().is_none());
    }

    #[test]
    fn test_redraw_resets_session() {
        let mut controller = Controller::new();
        start(&mut controller, "3").unwrap();

        // Redraw before the first draw is ignored.
        assert_eq!(
            controller.handle(Command::Redraw).unwrap(),
            Outcome::Ignored
        );

        controller.handle(Command::Draw).unwrap();
        assert_eq!(
            controller.handle(Command::Redraw).unwrap(),
            Outcome::Applied
        );
        let session = controller.session().unwrap();
        assert_eq!(session.draws_taken(), 0);
        assert!(session.history().is_empty());
        assert_eq!(controller.phase(), Phase::Drawing);
        assert!(!controller.redraw_available());
        assert!(controller.render().draw_message.is_none());
    }

    #[test]
    fn test_out_of_phase_commands_are_noops() {
        let mut controller = Controller::new();
        for cmd in [
            Command::Draw,
            Command::Redraw,
            Command::Restart,
            Command::ToggleResults,
            Command::ToggleCollapse,
        ] {
            assert_eq!(controller.handle(cmd).unwrap(), Outcome::Ignored);
            assert_eq!(controller.phase(), Phase::Setup);
        }

        start(&mut controller, "2").unwrap();
        assert_eq!(
            controller.handle(Command::Restart).unwrap(),
            Outcome::Ignored
        );
        assert_eq!(controller.phase(), Phase::Drawing);
    }

    #[test]
    fn test_results_view_flags() {
        let mut controller = Controller::new();
        start(&mut controller, "1").unwrap();
        controller.handle(Command::Draw).unwrap();
        assert_eq!(controller.phase(), Phase::Results);

        // Collapse before the list is shown is a no-op.
        assert_eq!(
            controller.handle(Command::ToggleCollapse).unwrap(),
            Outcome::Ignored
        );

        controller.handle(Command::ToggleResults).unwrap();
        assert!(controller.results_visible());
        controller.handle(Command::ToggleCollapse).unwrap();
        assert!(controller.results_collapsed());

        controller.handle(Command::ToggleResults).unwrap();
        assert!(!controller.results_visible());
    }

    #[test]
    fn test_single_participant_uses_final_message() {
        let mut controller = Controller::with_language(Language::En);
        start(&mut controller, "1").unwrap();
        controller.handle(Command::Draw).unwrap();

        let frame = controller.render();
        assert_eq!(
            frame.draw_message.as_deref(),
            Some("The final gift number drawn")
        );
        assert_eq!(frame.number_display.as_deref(), Some("1"));
    }

    #[test]
    fn test_language_toggle_is_idempotent_in_every_phase() {
        let mut controller = Controller::new();

        let mut check = |controller: &mut Controller| {
            let before = controller.render();
            controller.handle(Command::ToggleLanguage).unwrap();
            assert_ne!(controller.render().title, before.title);
            controller.handle(Command::ToggleLanguage).unwrap();
            assert_eq!(controller.render(), before);
        };

        check(&mut controller); // Setup
        start(&mut controller, "3").unwrap();
        check(&mut controller); // Drawing, no draws yet
        controller.handle(Command::Draw).unwrap();
        check(&mut controller); // Drawing, mid-draw
        controller.handle(Command::Draw).unwrap();
        controller.handle(Command::Draw).unwrap();
        check(&mut controller); // Results
    }

    #[test]
    fn test_language_survives_restart() {
        let mut controller = Controller::with_language(Language::En);
        start(&mut controller, "1").unwrap();
        controller.handle(Command::Draw).unwrap();
        controller.handle(Command::Restart).unwrap();
        assert_eq!(controller.language(), Language::En);
    }

    #[test]
    fn test_results_list_follows_language() {
        let mut controller = Controller::with_language(Language::En);
        start(&mut controller, "2").unwrap();
        controller.handle(Command::Draw).unwrap();
        controller.handle(Command::Draw).unwrap();

        let history = controller.session().unwrap().history().to_vec();
        let frame = controller.render();
        assert_eq!(frame.results.len(), 2);
        assert_eq!(frame.results[0], format!("Gift {}", history[0]));

        controller.handle(Command::ToggleLanguage).unwrap();
        let frame = controller.render();
        assert_eq!(frame.results[0], format!("禮物 {}", history[0]));
    }
}
