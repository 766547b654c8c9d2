//! Per-request submission state.
//!
//! One submission may be in flight at a time. The state machine makes the
//! gate explicit: submitting while a request is outstanding is rejected, and
//! an outcome can only be recorded for an outstanding request.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Submitting,
    Succeeded { summary: String },
    Failed { error: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("no submission is in flight")]
    NotSubmitting,
}

/// UI-side session: the request state plus the history visibility flag.
#[derive(Debug)]
pub struct Session {
    state: RequestState,
    show_history: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: RequestState::Idle,
            show_history: false,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Start a submission. Succeeded and Failed count as settled, so a new
    /// submission may begin from either.
    pub fn begin_submit(&mut self) -> Result<(), SessionError> {
        if self.state == RequestState::Submitting {
            return Err(SessionError::AlreadySubmitting);
        }
        self.state = RequestState::Submitting;
        Ok(())
    }

    pub fn complete(&mut self, summary: String) -> Result<(), SessionError> {
        if self.state != RequestState::Submitting {
            return Err(SessionError::NotSubmitting);
        }
        self.state = RequestState::Succeeded { summary };
        Ok(())
    }

    pub fn fail(&mut self, error: String) -> Result<(), SessionError> {
        if self.state != RequestState::Submitting {
            return Err(SessionError::NotSubmitting);
        }
        self.state = RequestState::Failed { error };
        Ok(())
    }

    /// Flip history visibility; purely presentational.
    pub fn toggle_history(&mut self) -> bool {
        self.show_history = !self.show_history;
        self.show_history
    }

    pub fn show_history(&self) -> bool {
        self.show_history
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_submit_is_rejected() {
        let mut session = Session::new();
        session.begin_submit().unwrap();
        assert_eq!(
            session.begin_submit(),
            Err(SessionError::AlreadySubmitting)
        );
    }

    #[test]
    fn success_clears_the_gate() {
        let mut session = Session::new();
        session.begin_submit().unwrap();
        session.complete("done".to_string()).unwrap();
        assert_eq!(
            session.state(),
            &RequestState::Succeeded {
                summary: "done".to_string()
            }
        );
        // settled, so the next submission may start
        session.begin_submit().unwrap();
    }

    #[test]
    fn failure_clears_the_gate() {
        let mut session = Session::new();
        session.begin_submit().unwrap();
        session.fail("Failed to summarize article".to_string()).unwrap();
        assert!(matches!(session.state(), RequestState::Failed { .. }));
        session.begin_submit().unwrap();
    }

    #[test]
    fn outcome_without_submission_is_rejected() {
        let mut session = Session::new();
        assert_eq!(
            session.complete("x".to_string()),
            Err(SessionError::NotSubmitting)
        );
        assert_eq!(
            session.fail("x".to_string()),
            Err(SessionError::NotSubmitting)
        );
    }

    #[test]
    fn history_toggle_flips() {
        let mut session = Session::new();
        assert!(!session.show_history());
        assert!(session.toggle_history());
        assert!(!session.toggle_history());
    }
}
