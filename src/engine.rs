//! Session state transitions and the [`Game`] facade used by transports.

use std::fmt;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::config::GameConfig;
use crate::evaluate::evaluate;
use crate::store::{SessionId, SessionStore};
use crate::types::normalize_name;
use crate::{
    AskedQuestion, Catalog, Guess, SessionError, SessionState, SessionView, Status,
    TemplateDescriptor, TemplateRegistry,
};

pub(crate) fn start<R: Rng + ?Sized>(
    catalog: &Catalog,
    config: &GameConfig,
    rng: &mut R,
) -> Result<SessionState, SessionError> {
    if config.validate().is_err() {
        return Err(SessionError::ZeroGuessBudget);
    }
    let candidates = catalog.ids();
    let secret = *candidates.choose(rng).ok_or(SessionError::EmptyCatalog)?;

    Ok(SessionState {
        secret,
        candidates,
        history: Vec::new(),
        guesses_remaining: config.guess_budget,
        status: Status::Playing,
        revealed: None,
    })
}

pub(crate) fn apply_question(
    state: &mut SessionState,
    catalog: &Catalog,
    registry: &TemplateRegistry,
    template_id: &str,
    value: &str,
) -> Result<bool, SessionError> {
    if state.status.is_terminal() {
        return Err(SessionError::GameOver {
            status: state.status,
        });
    }

    let template = registry
        .find(template_id)
        .ok_or_else(|| SessionError::UnknownTemplate {
            id: template_id.to_owned(),
        })?;

    let Some(secret) = catalog.get(state.secret) else {
        tracing::warn!(secret = state.secret, "secret missing from catalog");
        return Err(SessionError::MissingItem { id: state.secret });
    };

    let answer = evaluate(secret, template, value);
    let before = state.candidates.len();

    // Ids missing from the catalog cannot answer, so they drop out too.
    state.candidates.retain(|&id| {
        catalog
            .get(id)
            .is_some_and(|item| evaluate(item, template, value) == answer)
    });

    state.history.push(AskedQuestion {
        template_id: template.id.clone(),
        label: template.prompt(value),
        value: value.to_owned(),
        answer,
    });

    tracing::debug!(
        template = template_id,
        value,
        answer,
        before,
        after = state.candidates.len(),
        "question applied"
    );

    Ok(answer)
}

pub(crate) fn apply_guess(
    state: &mut SessionState,
    catalog: &Catalog,
    guess: &Guess,
) -> Result<bool, SessionError> {
    if state.status.is_terminal() {
        return Err(SessionError::GameOver {
            status: state.status,
        });
    }

    if matches!(guess, Guess::Name(name) if name.trim().is_empty()) {
        return Err(SessionError::EmptyGuess);
    }

    let Some(secret) = catalog.get(state.secret) else {
        tracing::warn!(secret = state.secret, "secret missing from catalog");
        return Err(SessionError::MissingItem { id: state.secret });
    };

    let correct = match guess {
        Guess::Id(id) => *id == secret.id,
        Guess::Name(name) => normalize_name(name) == normalize_name(&secret.name),
    };

    if correct {
        state.status = Status::Won;
        state.revealed = Some(secret.name.clone());
        tracing::info!(guesses_remaining = state.guesses_remaining, "game won");
        return Ok(true);
    }

    state.guesses_remaining = state.guesses_remaining.saturating_sub(1);
    if state.guesses_remaining == 0 {
        state.status = Status::Lost;
        state.revealed = Some(secret.name.clone());
        tracing::info!(history = state.history.len(), "game lost");
    } else {
        tracing::debug!(guesses_remaining = state.guesses_remaining, "wrong guess");
    }

    Ok(false)
}

/// Result of [`Game::ask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[must_use]
pub struct AskOutcome {
    pub answer: bool,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

impl fmt::Display for AskOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} -> {} candidates)",
            if self.answer { "yes" } else { "no" },
            self.candidates_before,
            self.candidates_after
        )
    }
}

/// Result of [`Game::guess`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[must_use]
pub struct GuessOutcome {
    pub correct: bool,
    pub status: Status,
    pub guesses_remaining: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revealed: Option<String>,
}

/// Everything a transport needs to run games: the shared catalog and
/// templates, the live sessions, and the tuning config.
///
/// Thread-safe; share it behind `Arc`.
#[derive(Debug)]
pub struct Game {
    catalog: Arc<Catalog>,
    registry: Arc<TemplateRegistry>,
    store: SessionStore,
    config: GameConfig,
}

impl Game {
    pub fn new(catalog: Arc<Catalog>, registry: Arc<TemplateRegistry>, config: GameConfig) -> Self {
        Self {
            catalog,
            registry,
            store: SessionStore::new(),
            config,
        }
    }

    /// Start a new game with a thread-local RNG and register it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyCatalog`] if there is nothing to guess,
    /// [`SessionError::ZeroGuessBudget`] if the config allows no guesses, or
    /// [`SessionError::IdGeneration`] if no session id could be drawn.
    pub fn start(&self) -> Result<SessionId, SessionError> {
        self.start_with_rng(&mut rand::thread_rng())
    }

    /// Start a new game drawing the secret from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyCatalog`] if there is nothing to guess,
    /// [`SessionError::ZeroGuessBudget`] if the config allows no guesses, or
    /// [`SessionError::IdGeneration`] if no session id could be drawn.
    pub fn start_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SessionId, SessionError> {
        let state = SessionState::start(&self.catalog, &self.config, rng)?;
        let id = self.store.create(state)?;
        tracing::info!(session = %id, candidates = self.catalog.len(), "session started");
        Ok(id)
    }

    /// Ask a question in an existing session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the session or template is unknown or the
    /// game is over; the session is left untouched.
    pub fn ask(
        &self,
        session: &str,
        template_id: &str,
        value: &str,
    ) -> Result<AskOutcome, SessionError> {
        self.store.with_session(session, |state| {
            let candidates_before = state.candidates().len();
            let answer = state.apply_question(&self.catalog, &self.registry, template_id, value)?;
            Ok(AskOutcome {
                answer,
                candidates_before,
                candidates_after: state.candidates().len(),
            })
        })?
    }

    /// Guess the secret in an existing session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the session is unknown, the guess is
    /// empty, or the game is over; the session is left untouched.
    pub fn guess(&self, session: &str, guess: &Guess) -> Result<GuessOutcome, SessionError> {
        self.store.with_session(session, |state| {
            let correct = state.apply_guess(&self.catalog, guess)?;
            Ok(GuessOutcome {
                correct,
                status: state.status(),
                guesses_remaining: state.guesses_remaining(),
                revealed: state.revealed().map(str::to_owned),
            })
        })?
    }

    /// The client-safe view of a session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownSession`] if no such session exists.
    pub fn view(&self, session: &str) -> Result<SessionView, SessionError> {
        self.store.with_session(session, |state| state.view())
    }

    /// Template descriptors to send to clients.
    #[must_use]
    pub fn templates(&self) -> Vec<TemplateDescriptor> {
        self.registry.descriptors()
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    #[must_use]
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Drop sessions idle longer than the configured timeout. Returns how
    /// many were removed; does nothing when no timeout is configured.
    pub fn evict_idle(&self) -> usize {
        self.config
            .idle_timeout()
            .map_or(0, |max_idle| self.store.evict_idle(max_idle))
    }
}
