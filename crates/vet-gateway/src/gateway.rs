//! Typed review operations over a [`Transport`].

use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use vet_core::entities::{Idea, NewIdea, ScheduleRequest, Video};
use vet_core::enums::{ReviewAction, VideoStatus};
use vet_core::errors::ReviewError;
use vet_core::ids::RecordId;
use vet_core::record::Reviewable;
use vet_core::rules::{validate_new_idea, validate_schedule_time};

use crate::response::{check_response, decode};
use crate::transport::{ApiRequest, Transport};

/// Gateway for one record kind. Holds no state between calls.
#[derive(Debug, Clone)]
pub struct ReviewGateway<R, T> {
    transport: T,
    _record: PhantomData<fn() -> R>,
}

impl<R: Reviewable, T: Transport> ReviewGateway<R, T> {
    pub const fn new(transport: T) -> Self {
        Self {
            transport,
            _record: PhantomData,
        }
    }

    /// `GET /{collection}`.
    ///
    /// # Errors
    ///
    /// [`ReviewError::Network`] on transport failure, non-2xx, or a malformed body.
    pub async fn list(&self) -> Result<Vec<R>, ReviewError> {
        let operation = format!("list {}", R::KIND.collection());
        let body = self
            .call(&operation, ApiRequest::get(collection_path::<R>()), None)
            .await?;
        let records: Vec<R> = decode(&operation, &body)?;
        records.into_iter().map(Reviewable::normalize).collect()
    }

    /// `POST /{collection}/{id}/{approve|reject}`.
    ///
    /// # Errors
    ///
    /// - [`ReviewError::Validation`] if `action` is `schedule` (use the video
    ///   `schedule` operation, which carries the publication time).
    /// - [`ReviewError::NotFound`] if the backend does not know `id`.
    /// - [`ReviewError::Network`] for any other failure.
    pub async fn transition(&self, id: &RecordId, action: ReviewAction) -> Result<R, ReviewError> {
        if action == ReviewAction::Schedule {
            return Err(ReviewError::Validation(
                "schedule needs a publication time".to_string(),
            ));
        }
        let operation = Self::operation(action.as_str());
        let request = ApiRequest::post(record_path::<R>(id, action), None);
        let body = self.call(&operation, request, Some(id)).await?;
        decode::<R>(&operation, &body)?.normalize()
    }

    async fn call(
        &self,
        operation: &str,
        request: ApiRequest,
        target: Option<&RecordId>,
    ) -> Result<String, ReviewError> {
        debug!(
            operation,
            method = request.method.as_str(),
            path = %request.path,
            "gateway call"
        );
        let response = self.transport.send(request).await.map_err(|e| {
            warn!(operation, error = %e, "transport failure");
            ReviewError::network(operation, e.to_string())
        })?;
        check_response(operation, R::KIND, target, response)
    }

    fn operation(verb: &str) -> String {
        format!("{verb} {}", R::KIND)
    }
}

impl<T: Transport> ReviewGateway<Idea, T> {
    /// `POST /ideas` with `{title, description}`.
    ///
    /// Blank fields are rejected before the transport is touched.
    ///
    /// # Errors
    ///
    /// [`ReviewError::Validation`] for blank input, [`ReviewError::Network`]
    /// for backend or transport failure.
    pub async fn create(&self, title: &str, description: &str) -> Result<Idea, ReviewError> {
        let new_idea: NewIdea = validate_new_idea(title, description)?;
        let operation = Self::operation("create");
        let body = serde_json::to_value(&new_idea)
            .map_err(|e| ReviewError::Validation(format!("cannot encode idea: {e}")))?;
        let request = ApiRequest::post(collection_path::<Idea>(), Some(body));
        let body = self.call(&operation, request, None).await?;
        decode(&operation, &body)
    }

    /// `POST /ideas/generate`. The response body is ignored; callers refresh
    /// the list afterwards.
    ///
    /// # Errors
    ///
    /// [`ReviewError::Network`] for backend or transport failure.
    pub async fn generate(&self) -> Result<(), ReviewError> {
        let operation = Self::operation("generate");
        let request = ApiRequest::post(format!("{}/generate", collection_path::<Idea>()), None);
        self.call(&operation, request, None).await?;
        Ok(())
    }
}

impl<T: Transport> ReviewGateway<Video, T> {
    /// `POST /videos/{id}/schedule` with `{scheduled_time}`, checked against
    /// the current time.
    ///
    /// # Errors
    ///
    /// See [`Self::schedule_at`].
    pub async fn schedule(&self, id: &RecordId, when: DateTime<Utc>) -> Result<Video, ReviewError> {
        self.schedule_at(id, when, Utc::now()).await
    }

    /// Like [`Self::schedule`] with an explicit notion of "now".
    ///
    /// # Errors
    ///
    /// - [`ReviewError::Validation`] if `when` is not after `now`; no request is sent.
    /// - [`ReviewError::NotFound`] if the backend does not know `id`.
    /// - [`ReviewError::Network`] for any other failure, including a response
    ///   that is not scheduled at a time.
    pub async fn schedule_at(
        &self,
        id: &RecordId,
        when: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<Video, ReviewError> {
        let scheduled_time = validate_schedule_time(Some(when), now)?;
        let operation = Self::operation("schedule");
        let body = serde_json::to_value(ScheduleRequest { scheduled_time })
            .map_err(|e| ReviewError::Validation(format!("cannot encode schedule: {e}")))?;
        let request = ApiRequest::post(record_path::<Video>(id, ReviewAction::Schedule), Some(body));
        let body = self.call(&operation, request, Some(id)).await?;
        let video = decode::<Video>(&operation, &body)?.normalize()?;
        check_scheduled(&operation, id, scheduled_time, &video)?;
        Ok(video)
    }
}

/// A 2xx schedule answer must echo the record scheduled at the requested time.
fn check_scheduled(
    operation: &str,
    id: &RecordId,
    when: DateTime<Utc>,
    video: &Video,
) -> Result<(), ReviewError> {
    let message = if video.id != *id {
        format!("backend answered for record {} instead of {id}", video.id)
    } else if video.status != VideoStatus::Scheduled {
        format!("backend left record {id} {}", video.status)
    } else if video.scheduled_for != Some(when) {
        format!("backend did not schedule record {id} at {}", when.to_rfc3339())
    } else {
        return Ok(());
    };
    warn!(operation, %message, "schedule response mismatch");
    Err(ReviewError::network(operation, message))
}

fn collection_path<R: Reviewable>() -> String {
    format!("/{}", R::KIND.collection())
}

fn record_path<R: Reviewable>(id: &RecordId, action: ReviewAction) -> String {
    format!(
        "/{}/{}/{}",
        R::KIND.collection(),
        urlencoding::encode(id.as_str()),
        action.as_str()
    )
}
