//! Review Workflow Controller: begin, call the gateway, apply the outcome.

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{info, warn};
use vet_core::entities::{Idea, Video};
use vet_core::errors::ReviewError;
use vet_core::ids::RecordId;
use vet_core::projection::ProjectionOptions;
use vet_core::record::Reviewable;
use vet_core::rules::{TransitionRequest, check_transition};
use vet_gateway::{ReviewGateway, Transport};

use crate::panel::{PanelView, panel_view};
use crate::store::WorkflowStore;

/// One panel: a gateway plus the store its outcomes land in.
///
/// The store lock is only taken to read or apply state, never across a
/// gateway call, so operations issued concurrently overlap and their
/// outcomes land in response order.
#[derive(Debug)]
pub struct ReviewController<R, T> {
    gateway: ReviewGateway<R, T>,
    store: Mutex<WorkflowStore<R>>,
}

impl<R: Reviewable, T: Transport> ReviewController<R, T> {
    pub fn new(gateway: ReviewGateway<R, T>) -> Self {
        Self {
            gateway,
            store: Mutex::new(WorkflowStore::new()),
        }
    }

    pub fn from_transport(transport: T) -> Self {
        Self::new(ReviewGateway::new(transport))
    }

    /// Copy of the current store state.
    pub async fn snapshot(&self) -> WorkflowStore<R> {
        self.store.lock().await.clone()
    }

    /// Mount-time load.
    ///
    /// # Errors
    ///
    /// Whatever [`ReviewGateway::list`] returns; the error is also recorded.
    pub async fn load(&self) -> Result<Vec<R>, ReviewError> {
        self.refresh().await
    }

    /// Fetch the full list and replace the collection.
    ///
    /// # Errors
    ///
    /// Whatever [`ReviewGateway::list`] returns; the error is also recorded.
    pub async fn refresh(&self) -> Result<Vec<R>, ReviewError> {
        self.begin().await;
        let outcome = self.gateway.list().await;
        let mut store = self.store.lock().await;
        match &outcome {
            Ok(records) => store.on_list_success(records.clone()),
            Err(err) => Self::fail(&mut store, err),
        }
        outcome
    }

    /// # Errors
    ///
    /// See [`Self::transition`].
    pub async fn approve(&self, id: &RecordId) -> Result<R, ReviewError> {
        self.transition(id, TransitionRequest::approve()).await
    }

    /// # Errors
    ///
    /// See [`Self::transition`].
    pub async fn reject(&self, id: &RecordId) -> Result<R, ReviewError> {
        self.transition(id, TransitionRequest::reject()).await
    }

    /// Render-ready view of the current state.
    pub async fn view(&self, options: &ProjectionOptions) -> PanelView {
        panel_view(&*self.store.lock().await, options)
    }

    /// Approve or reject `id`, checked against the locally held record.
    ///
    /// # Errors
    ///
    /// - [`ReviewError::NotFound`] if the record is not in the store; no request is sent.
    /// - [`ReviewError::InvalidTransition`] if the edge does not exist; no request is sent.
    /// - Any gateway error.
    async fn transition(
        &self,
        id: &RecordId,
        request: TransitionRequest,
    ) -> Result<R, ReviewError> {
        self.precheck(id, &request, Utc::now()).await?;
        let outcome = self.gateway.transition(id, request.action).await;
        self.apply_mutation(outcome, request).await
    }

    /// Begin the operation and validate it against the held record.
    async fn precheck(
        &self,
        id: &RecordId,
        request: &TransitionRequest,
        now: DateTime<Utc>,
    ) -> Result<(), ReviewError> {
        let mut store = self.store.lock().await;
        store.begin_operation();
        let checked = match store.find(id) {
            Some(record) => {
                check_transition(R::KIND, id, record.status(), request, now).map(|_| ())
            }
            None => Err(ReviewError::NotFound {
                kind: R::KIND,
                id: id.clone(),
            }),
        };
        if let Err(err) = &checked {
            Self::fail(&mut store, err);
        }
        checked
    }

    async fn apply_mutation(
        &self,
        outcome: Result<R, ReviewError>,
        request: TransitionRequest,
    ) -> Result<R, ReviewError> {
        let mut store = self.store.lock().await;
        match &outcome {
            Ok(updated) => {
                if store.on_mutation_success(updated.clone()) {
                    info!(
                        kind = %R::KIND,
                        id = %updated.id(),
                        action = %request.action,
                        status = %updated.status(),
                        "transition applied"
                    );
                }
            }
            Err(err) => Self::fail(&mut store, err),
        }
        outcome
    }

    async fn begin(&self) {
        self.store.lock().await.begin_operation();
    }

    fn fail(store: &mut WorkflowStore<R>, err: &ReviewError) {
        warn!(kind = %R::KIND, error = %err, "operation failed");
        store.on_failure(err);
    }
}

impl<T: Transport> ReviewController<Idea, T> {
    /// Create an idea and add it to the collection.
    ///
    /// # Errors
    ///
    /// [`ReviewError::Validation`] for blank input (no request is sent), or
    /// any gateway error.
    pub async fn create(&self, title: &str, description: &str) -> Result<Idea, ReviewError> {
        self.begin().await;
        let outcome = self.gateway.create(title, description).await;
        let mut store = self.store.lock().await;
        match &outcome {
            Ok(idea) => {
                info!(id = %idea.id, "idea created");
                store.on_created(idea.clone());
            }
            Err(err) => Self::fail(&mut store, err),
        }
        outcome
    }

    /// Ask the backend to synthesize ideas, then reload the list.
    ///
    /// # Errors
    ///
    /// The first failing call's error; the list is not reloaded after a
    /// failed generate.
    pub async fn generate(&self) -> Result<Vec<Idea>, ReviewError> {
        self.begin().await;
        if let Err(err) = self.gateway.generate().await {
            Self::fail(&mut *self.store.lock().await, &err);
            return Err(err);
        }
        self.refresh().await
    }
}

impl<T: Transport> ReviewController<Video, T> {
    /// # Errors
    ///
    /// See [`Self::schedule_at`].
    pub async fn schedule(&self, id: &RecordId, when: DateTime<Utc>) -> Result<Video, ReviewError> {
        self.schedule_at(id, when, Utc::now()).await
    }

    /// Schedule publication of an approved video.
    ///
    /// # Errors
    ///
    /// - [`ReviewError::NotFound`] if the video is not in the store.
    /// - [`ReviewError::InvalidTransition`] unless the video is approved.
    /// - [`ReviewError::Validation`] unless `when` is after `now`.
    /// - Any gateway error.
    pub async fn schedule_at(
        &self,
        id: &RecordId,
        when: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<Video, ReviewError> {
        let request = TransitionRequest::schedule(when);
        self.precheck(id, &request, now).await?;
        let outcome = self.gateway.schedule_at(id, when, now).await;
        self.apply_mutation(outcome, request).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use vet_core::enums::{IdeaStatus, VideoStatus};
    use vet_core::errors::ErrorKind;
    use vet_gateway::MockTransport;

    use super::*;

    fn ideas() -> (Arc<MockTransport>, ReviewController<Idea, Arc<MockTransport>>) {
        let transport = Arc::new(MockTransport::seeded(Duration::ZERO));
        let controller = ReviewController::from_transport(Arc::clone(&transport));
        (transport, controller)
    }

    #[tokio::test]
    async fn load_fills_store() {
        let (_, controller) = ideas();
        controller.load().await.unwrap();
        let store = controller.snapshot().await;
        assert_eq!(store.records().len(), 3);
        assert!(!store.busy());
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn approve_updates_record_in_place() {
        let (_, controller) = ideas();
        controller.load().await.unwrap();
        let idea = controller.approve(&RecordId::from("1")).await.unwrap();
        assert_eq!(idea.status, IdeaStatus::Approved);
        let store = controller.snapshot().await;
        assert_eq!(store.records()[0].status, IdeaStatus::Approved);
    }

    #[tokio::test]
    async fn illegal_action_is_refused_locally() {
        let (transport, controller) = ideas();
        controller.load().await.unwrap();
        let calls = transport.calls();

        let err = controller.reject(&RecordId::from("2")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTransition);
        assert_eq!(transport.calls(), calls);

        let store = controller.snapshot().await;
        assert!(store.error().unwrap().starts_with("Invalid transition"));
        assert!(!store.busy());
    }

    #[tokio::test]
    async fn unknown_local_id_is_not_found() {
        let (transport, controller) = ideas();
        controller.load().await.unwrap();
        let err = controller.approve(&RecordId::from("42")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn create_appends_without_refetch() {
        let (transport, controller) = ideas();
        controller.load().await.unwrap();
        controller.create("Balade en forêt", "Les sentiers autour de Lyon").await.unwrap();
        assert_eq!(controller.snapshot().await.records().len(), 4);
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn generate_reloads_list() {
        let (_, controller) = ideas();
        controller.load().await.unwrap();
        let ideas = controller.generate().await.unwrap();
        assert_eq!(ideas.len(), 6);
        assert_eq!(controller.snapshot().await.records().len(), 6);
    }

    #[tokio::test]
    async fn schedule_sets_time_and_status() {
        let transport = MockTransport::seeded(Duration::ZERO);
        let controller: ReviewController<Video, _> = ReviewController::from_transport(transport);
        controller.load().await.unwrap();

        let when = Utc::now() + chrono::Duration::hours(3);
        let video = controller.schedule(&RecordId::from("2"), when).await.unwrap();
        assert_eq!(video.status, VideoStatus::Scheduled);

        let store = controller.snapshot().await;
        let held = store.find(&RecordId::from("2")).unwrap();
        assert_eq!(held.scheduled_for, Some(when));
        assert!(store.check_invariants().is_ok());
    }
}
