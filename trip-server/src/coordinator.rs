//! Request coordination: one in-flight planning request, one current outcome.
//!
//! The coordinator owns the explicit state machine
//! `Idle -> Pending -> {Success | Failure}`, re-entering `Pending` on the
//! next submission from either terminal state. There is exactly one
//! "current outcome" slot; starting a new submission clears the previous
//! outcome, and the result of an issued request is always applied
//! (last-resolved-wins, no cancellation).
//!
//! Planner errors never escape this boundary: transport and response
//! failures both collapse into a `Failure` outcome with a short
//! user-facing message.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{PlanningOutcome, TripRequest};
use crate::planning::{PlanTrip, PlannerError};

/// User-facing message for a response-level failure (non-success status,
/// unparseable payload). Stable; the service's error body never leaks.
pub const FAILURE_MESSAGE: &str = "Failed to get itinerary";

/// User-facing message when the service could not be reached at all.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Could not reach the planning service";

/// The coordinator's state, as an explicit enumeration with payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanningState {
    /// No request has been submitted yet.
    Idle,

    /// A request is in flight; new submissions are refused.
    Pending,

    /// The last request resolved with itinerary text.
    Success(String),

    /// The last request resolved with a failure message.
    Failure(String),
}

impl PlanningState {
    pub fn is_pending(&self) -> bool {
        matches!(self, PlanningState::Pending)
    }

    /// The current outcome, if the state is terminal.
    pub fn outcome(&self) -> Option<PlanningOutcome> {
        match self {
            PlanningState::Idle | PlanningState::Pending => None,
            PlanningState::Success(text) => Some(PlanningOutcome::Success(text.clone())),
            PlanningState::Failure(message) => Some(PlanningOutcome::Failure(message.clone())),
        }
    }
}

/// Error returned when submitting while a request is already in flight.
///
/// Submissions are refused rather than queued; the form disables its
/// submit control while pending, so this only fires for clients that
/// bypass it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("a planning request is already in flight")]
pub struct AlreadyPending;

/// Coordinates planning submissions against a single outcome slot.
pub struct RequestCoordinator<C> {
    client: Arc<C>,
    state: Arc<Mutex<PlanningState>>,
}

impl<C> RequestCoordinator<C>
where
    C: PlanTrip + Send + Sync + 'static,
{
    /// Create a coordinator in the `Idle` state.
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
            state: Arc::new(Mutex::new(PlanningState::Idle)),
        }
    }

    /// Submit a trip request: perform exactly one outbound call and resolve
    /// to a [`PlanningOutcome`].
    ///
    /// Refuses with [`AlreadyPending`] if a request is in flight. Otherwise
    /// the previous outcome is cleared (`Pending` overwrites the slot), the
    /// call is issued, and the result is always applied, even if the caller
    /// has moved on.
    pub async fn submit(&self, request: TripRequest) -> Result<PlanningOutcome, AlreadyPending> {
        {
            let mut state = self.state.lock().await;
            if state.is_pending() {
                return Err(AlreadyPending);
            }
            *state = PlanningState::Pending;
        }

        // The call runs on a detached task: the web framework drops handler
        // futures when a client disconnects, and an issued request must
        // still run to completion and apply its result. Awaiting it inline
        // would leave the slot stuck in `Pending` on disconnect.
        let client = Arc::clone(&self.client);
        let state = Arc::clone(&self.state);
        let task = tokio::spawn(async move {
            let outcome = match client.plan_trip(&request).await {
                Ok(text) => PlanningOutcome::Success(text),
                Err(e) => {
                    tracing::warn!(
                        destination = request.destination(),
                        error = %e,
                        "planning request failed"
                    );
                    PlanningOutcome::Failure(failure_message(&e).to_string())
                }
            };

            let mut state = state.lock().await;
            *state = match &outcome {
                PlanningOutcome::Success(text) => PlanningState::Success(text.clone()),
                PlanningOutcome::Failure(message) => PlanningState::Failure(message.clone()),
            };

            outcome
        });

        match task.await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                // The planning task panicked before reaching a terminal
                // state; restore the slot so the coordinator cannot stay
                // wedged in `Pending`.
                tracing::error!(error = %e, "planning task failed");
                let mut state = self.state.lock().await;
                *state = PlanningState::Failure(FAILURE_MESSAGE.to_string());
                Ok(PlanningOutcome::Failure(FAILURE_MESSAGE.to_string()))
            }
        }
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> PlanningState {
        self.state.lock().await.clone()
    }

    /// The current outcome, if any request has resolved.
    pub async fn current_outcome(&self) -> Option<PlanningOutcome> {
        self.state.lock().await.outcome()
    }
}

/// Collapse a planner error into the short user-facing message.
fn failure_message(error: &PlannerError) -> &'static str {
    if error.is_transport() {
        TRANSPORT_FAILURE_MESSAGE
    } else {
        FAILURE_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::{Budget, TravelStyle};
    use crate::itinerary::{ItineraryBlock, parse_itinerary};
    use crate::planning::MockPlannerClient;

    /// Planner that always returns a non-success response error.
    struct FailingPlanner;

    impl PlanTrip for FailingPlanner {
        async fn plan_trip(&self, _request: &TripRequest) -> Result<String, PlannerError> {
            Err(PlannerError::Api {
                status: 500,
                message: "upstream exploded with secrets".into(),
            })
        }
    }

    /// Planner that resolves after a short real-time delay.
    struct SlowPlanner;

    impl PlanTrip for SlowPlanner {
        async fn plan_trip(&self, _request: &TripRequest) -> Result<String, PlannerError> {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok("**Day 1**\n- Hike".into())
        }
    }

    /// Planner whose request never resolves; used to observe `Pending`.
    struct StalledPlanner;

    impl PlanTrip for StalledPlanner {
        async fn plan_trip(&self, _request: &TripRequest) -> Result<String, PlannerError> {
            std::future::pending::<()>().await;
            unreachable!()
        }
    }

    fn request(destination: &str) -> TripRequest {
        TripRequest::new(
            destination,
            3,
            "",
            Budget::default(),
            TravelStyle::default(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn starts_idle() {
        let coordinator = RequestCoordinator::new(MockPlannerClient::empty());
        assert_eq!(coordinator.state().await, PlanningState::Idle);
        assert_eq!(coordinator.current_outcome().await, None);
    }

    #[tokio::test]
    async fn success_resolves_with_unmodified_text() {
        let client =
            MockPlannerClient::empty().with_itinerary("Lisbon", "**Day 1**\n- Hike");
        let coordinator = RequestCoordinator::new(client);

        let outcome = coordinator.submit(request("Lisbon")).await.unwrap();
        assert_eq!(outcome, PlanningOutcome::Success("**Day 1**\n- Hike".into()));

        assert_eq!(
            coordinator.state().await,
            PlanningState::Success("**Day 1**\n- Hike".into())
        );

        // The resolved text round-trips through the parser.
        let blocks = parse_itinerary(outcome.itinerary().unwrap());
        assert_eq!(
            blocks,
            vec![
                ItineraryBlock::DayHeader("Day 1".into()),
                ItineraryBlock::ActivityItem("Hike".into()),
            ]
        );
    }

    #[tokio::test]
    async fn response_failure_collapses_to_stable_message() {
        let coordinator = RequestCoordinator::new(FailingPlanner);

        let outcome = coordinator.submit(request("Lisbon")).await.unwrap();

        assert_eq!(outcome, PlanningOutcome::Failure(FAILURE_MESSAGE.into()));
        assert_eq!(outcome.itinerary(), None);
        // The upstream error body must not leak into the message.
        assert!(!outcome.failure_message().unwrap().contains("secrets"));

        assert_eq!(
            coordinator.state().await,
            PlanningState::Failure(FAILURE_MESSAGE.into())
        );
    }

    #[tokio::test]
    async fn new_submission_supersedes_previous_outcome() {
        let client = MockPlannerClient::empty()
            .with_itinerary("Lisbon", "**Day 1**\n- Tram 28")
            .with_itinerary("Kyoto", "**Day 1**\n- Temples");
        let coordinator = RequestCoordinator::new(client);

        coordinator.submit(request("Lisbon")).await.unwrap();
        coordinator.submit(request("Kyoto")).await.unwrap();

        assert_eq!(
            coordinator.current_outcome().await,
            Some(PlanningOutcome::Success("**Day 1**\n- Temples".into()))
        );
    }

    #[tokio::test]
    async fn resubmitting_after_failure_is_allowed() {
        let coordinator = RequestCoordinator::new(FailingPlanner);

        coordinator.submit(request("Lisbon")).await.unwrap();
        // Terminal failure state re-enters Pending on the next submission.
        let outcome = coordinator.submit(request("Lisbon")).await;
        assert!(outcome.is_ok());
    }

    #[tokio::test]
    async fn in_flight_submission_refuses_concurrent_submit() {
        let coordinator = Arc::new(RequestCoordinator::new(StalledPlanner));

        let background = {
            let coordinator = coordinator.clone();
            tokio::spawn(async move { coordinator.submit(request("Lisbon")).await })
        };

        // Let the spawned submission reach its suspend point.
        while !coordinator.state().await.is_pending() {
            tokio::task::yield_now().await;
        }

        assert_eq!(
            coordinator.submit(request("Kyoto")).await,
            Err(AlreadyPending)
        );

        background.abort();
    }

    #[tokio::test]
    async fn dropped_submission_still_resolves() {
        let coordinator = Arc::new(RequestCoordinator::new(SlowPlanner));

        let background = {
            let coordinator = coordinator.clone();
            tokio::spawn(async move { coordinator.submit(request("Lisbon")).await })
        };

        while !coordinator.state().await.is_pending() {
            tokio::task::yield_now().await;
        }

        // The client went away mid-request. The issued call must still run
        // to completion and apply its result; a wedged `Pending` here would
        // refuse every later submission until restart.
        background.abort();

        tokio::time::timeout(Duration::from_secs(5), async {
            while coordinator.state().await.is_pending() {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("coordinator stayed pending after the submitting future was dropped");

        assert_eq!(
            coordinator.current_outcome().await,
            Some(PlanningOutcome::Success("**Day 1**\n- Hike".into()))
        );

        // And the slot accepts the next submission.
        assert!(coordinator.submit(request("Kyoto")).await.is_ok());
    }

    #[tokio::test]
    async fn pending_state_has_no_outcome() {
        let coordinator = Arc::new(RequestCoordinator::new(StalledPlanner));

        let background = {
            let coordinator = coordinator.clone();
            tokio::spawn(async move { coordinator.submit(request("Lisbon")).await })
        };

        while !coordinator.state().await.is_pending() {
            tokio::task::yield_now().await;
        }
        assert_eq!(coordinator.current_outcome().await, None);

        background.abort();
    }
}
