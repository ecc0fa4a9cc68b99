use std::fmt;

use rand::Rng;
use serde::Serialize;

use super::catalog::Catalog;
use super::error::SessionError;
use super::item::ItemId;
use super::registry::TemplateRegistry;
use crate::config::GameConfig;

/// Where a game stands. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Playing,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Playing)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Playing => write!(f, "playing"),
            Status::Won => write!(f, "won"),
            Status::Lost => write!(f, "lost"),
        }
    }
}

/// One answered question, as kept in the session history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskedQuestion {
    pub template_id: String,
    pub label: String,
    pub value: String,
    pub answer: bool,
}

/// A player's guess: an item id, or a name matched ignoring case and
/// surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    Id(ItemId),
    Name(String),
}

impl From<ItemId> for Guess {
    fn from(id: ItemId) -> Self {
        Guess::Id(id)
    }
}

impl From<&str> for Guess {
    fn from(name: &str) -> Self {
        Guess::Name(name.to_owned())
    }
}

impl From<String> for Guess {
    fn from(name: String) -> Self {
        Guess::Name(name)
    }
}

/// The state of one game.
///
/// Plain data: it is not internally synchronized. Share it through a
/// [`SessionStore`](crate::SessionStore), which serializes access per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub(crate) secret: ItemId,
    pub(crate) candidates: Vec<ItemId>,
    pub(crate) history: Vec<AskedQuestion>,
    pub(crate) guesses_remaining: u32,
    pub(crate) status: Status,
    pub(crate) revealed: Option<String>,
}

impl SessionState {
    /// Start a game: every catalog item is a candidate and the secret is
    /// drawn uniformly from them using `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyCatalog`] if the catalog has no items and
    /// [`SessionError::ZeroGuessBudget`] if `config` allows no guesses.
    pub fn start<R: Rng + ?Sized>(
        catalog: &Catalog,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        crate::engine::start(catalog, config, rng)
    }

    /// Ask a question about the secret and drop every candidate that would
    /// have answered differently. Returns the answer.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] when nothing was applied: the game is over,
    /// the template is unknown, or the secret is missing from the catalog.
    pub fn apply_question(
        &mut self,
        catalog: &Catalog,
        registry: &TemplateRegistry,
        template_id: &str,
        value: &str,
    ) -> Result<bool, SessionError> {
        crate::engine::apply_question(self, catalog, registry, template_id, value)
    }

    /// Guess the secret. Returns whether the guess was correct.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] when nothing was applied: the game is over,
    /// the guess is empty, or the secret is missing from the catalog.
    pub fn apply_guess(&mut self, catalog: &Catalog, guess: &Guess) -> Result<bool, SessionError> {
        crate::engine::apply_guess(self, catalog, guess)
    }

    /// The secret item id. Never send this to a client.
    #[must_use]
    pub fn secret(&self) -> ItemId {
        self.secret
    }

    /// Ids still consistent with every answer so far, in catalog order.
    #[must_use]
    pub fn candidates(&self) -> &[ItemId] {
        &self.candidates
    }

    #[must_use]
    pub fn history(&self) -> &[AskedQuestion] {
        &self.history
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> u32 {
        self.guesses_remaining
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The secret's name, once the game is over.
    #[must_use]
    pub fn revealed(&self) -> Option<&str> {
        self.revealed.as_deref()
    }

    /// A client-safe projection of this state.
    pub fn view(&self) -> SessionView {
        SessionView {
            status: self.status,
            candidates_count: self.candidates.len(),
            guesses_remaining: self.guesses_remaining,
            history: self.history.clone(),
            revealed: self.revealed.clone(),
        }
    }
}

/// What a client may see of a session. The secret only appears, by name,
/// once the game is over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[must_use]
pub struct SessionView {
    pub status: Status,
    pub candidates_count: usize,
    pub guesses_remaining: u32,
    pub history: Vec<AskedQuestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revealed: Option<String>,
}
