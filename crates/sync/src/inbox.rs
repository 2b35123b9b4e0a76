use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, error, info, warn};
use sprintcoach_domain::{
    CompletedWorkout, Program, ProgramGenerator, ProgramKey, ProgramStore, TrainingSession,
    UserProfileKey, ValidationReport, WorkoutHistory, compare,
};
use tokio::sync::mpsc;

use crate::{Envelope, Handler, Message, Reply, SessionRecord, WorkoutStage};

#[derive(Debug, Clone, PartialEq)]
pub enum InboxEvent {
    WorkoutReceived(CompletedWorkout),
    ProfileUpdated(UserProfileKey),
    ProgramChecked(ValidationReport),
    FlowUpdated(Vec<WorkoutStage>),
    Ping,
}

#[derive(Debug)]
struct State {
    programs: ProgramStore,
    profile: Option<UserProfileKey>,
    history: WorkoutHistory,
}

/// Receiving side of the sync layer.
///
/// Every received envelope is answered with a reply. Accepted messages are announced on the
/// event channel returned by [`Inbox::new`].
#[derive(Debug)]
pub struct Inbox {
    state: Mutex<State>,
    events: mpsc::UnboundedSender<InboxEvent>,
}

impl Inbox {
    #[must_use]
    pub fn new(generator: ProgramGenerator) -> (Self, mpsc::UnboundedReceiver<InboxEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        (
            Self {
                state: Mutex::new(State {
                    programs: ProgramStore::new(generator),
                    profile: None,
                    history: WorkoutHistory::new(),
                }),
                events,
            },
            receiver,
        )
    }

    /// Wraps the inbox into a handler for [`crate::Transport::on_receive`].
    #[must_use]
    pub fn into_handler(self: Arc<Self>) -> Handler {
        Arc::new(move |envelope| self.handle(envelope))
    }

    pub fn handle_json(&self, json: &str) -> Reply {
        match Envelope::decode(json) {
            Ok(envelope) => self.handle(envelope),
            Err(err) => {
                warn!("failed to decode message: {err}");
                Reply::error(err.to_string())
            }
        }
    }

    pub fn handle(&self, envelope: Envelope) -> Reply {
        debug!("received {} message", envelope.kind());
        match envelope.message {
            Message::CompletedWorkout { workout } => match CompletedWorkout::try_from(workout) {
                Ok(workout) => self.receive_workout(workout),
                Err(err) => {
                    error!("failed to read completed workout: {err}");
                    Reply::error(err.to_string())
                }
            },
            Message::OnboardingComplete(record) => {
                match record.profile_key() {
                    Some(key) => self.update_profile(key),
                    None => info!("received profile of {} without training settings", record.name),
                }
                Reply::received()
            }
            Message::TrainingSessions { sessions } => self.check_program(sessions),
            Message::WorkoutFlowUpdate { stages } => {
                self.emit(InboxEvent::FlowUpdated(stages));
                Reply::received()
            }
            Message::PingTest => {
                self.emit(InboxEvent::Ping);
                Reply::received()
            }
        }
    }

    #[must_use]
    pub fn history(&self) -> WorkoutHistory {
        self.state().history.clone()
    }

    #[must_use]
    pub fn profile(&self) -> Option<UserProfileKey> {
        self.state().profile
    }

    /// The locally generated program for the current profile.
    #[must_use]
    pub fn program(&self) -> Option<Program> {
        let mut state = self.state();
        let key = state.profile?;
        Some(state.programs.get_or_generate(key.into()).clone())
    }

    fn receive_workout(&self, workout: CompletedWorkout) -> Reply {
        let appended = self.state().history.append(workout.clone());
        if appended {
            info!("received workout {}", workout.id());
            self.emit(InboxEvent::WorkoutReceived(workout));
        } else {
            debug!("ignoring duplicate workout {}", workout.id());
        }
        Reply::received()
    }

    fn update_profile(&self, key: UserProfileKey) {
        {
            let mut state = self.state();
            state.profile = Some(key);
            state.programs.regenerate(ProgramKey::from(key));
        }
        info!("profile updated to {}", ProgramKey::from(key));
        self.emit(InboxEvent::ProfileUpdated(key));
    }

    fn check_program(&self, records: Vec<SessionRecord>) -> Reply {
        let sessions = match records
            .into_iter()
            .map(TrainingSession::try_from)
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(sessions) => sessions,
            Err(err) => {
                error!("failed to read training sessions: {err}");
                return Reply::error(err.to_string());
            }
        };

        let report = {
            let mut state = self.state();
            let Some(key) = state.profile else {
                warn!("received {} training sessions before any profile", sessions.len());
                return Reply::received();
            };
            compare(
                state.programs.get_or_generate(key.into()).sessions(),
                &sessions,
            )
        };

        if report.is_consistent() {
            info!("received program matches ({} sessions)", report.match_count);
        } else {
            for mismatch in &report.mismatches {
                error!("received program differs: {mismatch}");
            }
        }
        self.emit(InboxEvent::ProgramChecked(report));

        Reply::received()
    }

    fn emit(&self, event: InboxEvent) {
        if self.events.send(event).is_err() {
            debug!("no listener for inbox events");
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
