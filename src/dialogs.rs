//! Open/close state of the application's dialogs.

use log::debug;
use std::collections::HashMap;

use crate::error::ValidationError;

/// Phrase the user must type to delete their account
pub const DELETE_CONFIRMATION: &str = "DELETE MY ACCOUNT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialog {
    Login,
    Register,
    ForgotPassword,
    DeleteAccount,
    YourRecipes,
    CreateCustomRecipe,
    RecipeDetail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
    Submitting,
    Failed(String),
    Done,
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::Closed)
    }
}

/// State of every dialog. Transitions that make no sense from the current
/// state are ignored and return false.
#[derive(Debug, Default)]
pub struct Dialogs {
    states: HashMap<Dialog, DialogState>,
}

impl Dialogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, dialog: Dialog) -> &DialogState {
        static CLOSED: DialogState = DialogState::Closed;
        self.states.get(&dialog).unwrap_or(&CLOSED)
    }

    fn transition(&mut self, dialog: Dialog, allowed: bool, next: DialogState) -> bool {
        if !allowed {
            debug!("Ignoring {:?} -> {:?}", dialog, next);
            return false;
        }
        debug!("{:?}: {:?} -> {:?}", dialog, self.state(dialog), next);
        self.states.insert(dialog, next);
        true
    }

    pub fn open(&mut self, dialog: Dialog) -> bool {
        let allowed = matches!(self.state(dialog), DialogState::Closed | DialogState::Done);
        self.transition(dialog, allowed, DialogState::Open)
    }

    pub fn submit(&mut self, dialog: Dialog) -> bool {
        let allowed = matches!(self.state(dialog), DialogState::Open | DialogState::Failed(_));
        self.transition(dialog, allowed, DialogState::Submitting)
    }

    pub fn fail(&mut self, dialog: Dialog, message: impl Into<String>) -> bool {
        let allowed = matches!(self.state(dialog), DialogState::Submitting);
        self.transition(dialog, allowed, DialogState::Failed(message.into()))
    }

    pub fn succeed(&mut self, dialog: Dialog) -> bool {
        let allowed = matches!(self.state(dialog), DialogState::Submitting);
        self.transition(dialog, allowed, DialogState::Done)
    }

    /// Close from any state; a pending error is discarded
    pub fn close(&mut self, dialog: Dialog) {
        self.states.remove(&dialog);
    }

    /// Switch between the login and register forms
    pub fn toggle_auth_mode(&mut self) -> bool {
        if self.state(Dialog::Login).is_open() {
            self.close(Dialog::Login);
            self.open(Dialog::Register)
        } else if self.state(Dialog::Register).is_open() {
            self.close(Dialog::Register);
            self.open(Dialog::Login)
        } else {
            false
        }
    }

    pub fn open_dialogs(&self) -> Vec<Dialog> {
        let mut open: Vec<Dialog> = self
            .states
            .iter()
            .filter(|(_, s)| s.is_open())
            .map(|(d, _)| *d)
            .collect();
        open.sort_by_key(|d| *d as u8);
        open
    }
}

/// Account deletion needs the exact phrase, case and spacing included
pub fn confirm_account_deletion(typed: &str) -> Result<(), ValidationError> {
    if typed == DELETE_CONFIRMATION {
        Ok(())
    } else {
        Err(ValidationError::ConfirmationMismatch)
    }
}
