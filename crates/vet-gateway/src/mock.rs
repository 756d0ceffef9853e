//! In-memory backend speaking the same routes as the real one.
//!
//! The response is computed when the request arrives and delivered after the
//! route's latency, so a slow `list` can carry a snapshot that a faster
//! mutation has already overtaken.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::debug;
use vet_core::entities::{Idea, NewIdea, ScheduleRequest, Video};
use vet_core::enums::{IdeaStatus, RecordKind, ReviewAction, VideoStatus};
use vet_core::ids::RecordId;

use crate::transport::{ApiRequest, ApiResponse, Method, Transport, TransportError};

const SAMPLE_BUCKET: &str = "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample";

/// Number of ideas one `POST /ideas/generate` adds.
pub const GENERATED_PER_CALL: usize = 3;

const GENERATED_TOPICS: [(&str, &str); 5] = [
    (
        "Recette express du soir",
        "Un plat complet prêt en 20 minutes",
    ),
    (
        "Astuces de rangement",
        "Organiser un petit appartement sans se ruiner",
    ),
    (
        "Initiation à la photographie",
        "Les réglages de base pour bien débuter",
    ),
    (
        "Routine sportive à la maison",
        "Un entraînement complet sans matériel",
    ),
    (
        "Voyage à petit budget",
        "Préparer un week-end sans dépasser 200 euros",
    ),
];

/// Route classes, used to key latency and injected failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockRoute {
    List,
    Create,
    Generate,
    Approve,
    Reject,
    Schedule,
}

/// A request resolved against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Route {
    List(RecordKind),
    Create,
    Generate,
    Action(RecordKind, RecordId, ReviewAction),
}

impl Route {
    fn parse(request: &ApiRequest) -> Option<Self> {
        let segments: Vec<&str> = request
            .path
            .trim_start_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match (request.method, segments.as_slice()) {
            (Method::Get, [collection]) => collection_kind(collection).map(Self::List),
            (Method::Post, ["ideas"]) => Some(Self::Create),
            (Method::Post, ["ideas", "generate"]) => Some(Self::Generate),
            (Method::Post, [collection, id, action]) => {
                let kind = collection_kind(collection)?;
                let action = match *action {
                    "approve" => ReviewAction::Approve,
                    "reject" => ReviewAction::Reject,
                    "schedule" if kind == RecordKind::Video => ReviewAction::Schedule,
                    _ => return None,
                };
                let id = urlencoding::decode(id).ok()?.into_owned();
                Some(Self::Action(kind, RecordId::new(id), action))
            }
            _ => None,
        }
    }

    const fn class(&self) -> MockRoute {
        match self {
            Self::List(_) => MockRoute::List,
            Self::Create => MockRoute::Create,
            Self::Generate => MockRoute::Generate,
            Self::Action(_, _, ReviewAction::Approve) => MockRoute::Approve,
            Self::Action(_, _, ReviewAction::Reject) => MockRoute::Reject,
            Self::Action(_, _, ReviewAction::Schedule) => MockRoute::Schedule,
        }
    }
}

fn collection_kind(segment: &str) -> Option<RecordKind> {
    match segment {
        "ideas" => Some(RecordKind::Idea),
        "videos" => Some(RecordKind::Video),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Backend state
// ---------------------------------------------------------------------------

/// The records behind a [`MockTransport`].
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    ideas: Vec<Idea>,
    videos: Vec<Video>,
    generated: usize,
}

impl MockBackend {
    /// Empty backend.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Five videos covering every status plus three ideas.
    ///
    /// The published video still carries its old `scheduled_time`, as the
    /// fixture data always has.
    #[must_use]
    pub fn seeded() -> Self {
        Self::empty()
            .with_ideas(seed_ideas())
            .with_videos(seed_videos())
    }

    #[must_use]
    pub fn with_ideas(mut self, ideas: Vec<Idea>) -> Self {
        self.ideas = ideas;
        self
    }

    #[must_use]
    pub fn with_videos(mut self, videos: Vec<Video>) -> Self {
        self.videos = videos;
        self
    }

    #[must_use]
    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    #[must_use]
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// Status change made outside the review surface, e.g. the publisher.
    pub fn set_video_status(&mut self, id: &RecordId, status: VideoStatus) -> bool {
        let Some(video) = self.videos.iter_mut().find(|v| &v.id == id) else {
            return false;
        };
        video.status = status;
        true
    }

    fn handle(
        &mut self,
        route: &Route,
        body: Option<&serde_json::Value>,
        now: DateTime<Utc>,
    ) -> ApiResponse {
        match route {
            Route::List(RecordKind::Idea) => json_response(200, &self.ideas),
            Route::List(RecordKind::Video) => json_response(200, &self.videos),
            Route::Create => self.create_idea(body, now),
            Route::Generate => self.generate_ideas(now),
            Route::Action(RecordKind::Idea, id, action) => self.transition_idea(id, *action),
            Route::Action(RecordKind::Video, id, action) => {
                self.transition_video(id, *action, body, now)
            }
        }
    }

    fn create_idea(&mut self, body: Option<&serde_json::Value>, now: DateTime<Utc>) -> ApiResponse {
        let Some(new_idea) = body.and_then(|b| serde_json::from_value::<NewIdea>(b.clone()).ok())
        else {
            return error_response(400, "expected {title, description}");
        };
        if new_idea.title.trim().is_empty() || new_idea.description.trim().is_empty() {
            return error_response(400, "title and description are required");
        }
        let idea = Idea {
            id: self.next_idea_id(),
            title: new_idea.title,
            description: new_idea.description,
            status: IdeaStatus::Pending,
            created_at: now,
        };
        self.ideas.push(idea.clone());
        json_response(201, &idea)
    }

    fn generate_ideas(&mut self, now: DateTime<Utc>) -> ApiResponse {
        let mut created = Vec::with_capacity(GENERATED_PER_CALL);
        for _ in 0..GENERATED_PER_CALL {
            let (title, description) = GENERATED_TOPICS[self.generated % GENERATED_TOPICS.len()];
            self.generated += 1;
            let idea = Idea {
                id: self.next_idea_id(),
                title: title.to_string(),
                description: description.to_string(),
                status: IdeaStatus::Pending,
                created_at: now,
            };
            self.ideas.push(idea.clone());
            created.push(idea);
        }
        json_response(201, &created)
    }

    fn transition_idea(&mut self, id: &RecordId, action: ReviewAction) -> ApiResponse {
        let Some(idea) = self.ideas.iter_mut().find(|i| &i.id == id) else {
            return error_response(404, format!("idea {id} not found"));
        };
        let Some(next) = idea.status.next_for(action) else {
            return error_response(409, format!("cannot {action} idea {id} from {}", idea.status));
        };
        idea.status = next;
        json_response(200, &*idea)
    }

    fn transition_video(
        &mut self,
        id: &RecordId,
        action: ReviewAction,
        body: Option<&serde_json::Value>,
        now: DateTime<Utc>,
    ) -> ApiResponse {
        let Some(video) = self.videos.iter_mut().find(|v| &v.id == id) else {
            return error_response(404, format!("video {id} not found"));
        };
        let Some(next) = video.status.next_for(action) else {
            return error_response(
                409,
                format!("cannot {action} video {id} from {}", video.status),
            );
        };
        if action == ReviewAction::Schedule {
            let Some(request) =
                body.and_then(|b| serde_json::from_value::<ScheduleRequest>(b.clone()).ok())
            else {
                return error_response(400, "expected {scheduled_time}");
            };
            if request.scheduled_time <= now {
                return error_response(400, "scheduled_time must be in the future");
            }
            video.scheduled_for = Some(request.scheduled_time);
        }
        video.status = next;
        json_response(200, &*video)
    }

    fn next_idea_id(&self) -> RecordId {
        let max = self
            .ideas
            .iter()
            .filter_map(|i| i.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        RecordId::from(max + 1)
    }
}

fn json_response<T: Serialize + ?Sized>(status: u16, value: &T) -> ApiResponse {
    match serde_json::to_string(value) {
        Ok(body) => ApiResponse::new(status, body),
        Err(e) => error_response(500, e.to_string()),
    }
}

fn error_response(status: u16, message: impl Into<String>) -> ApiResponse {
    let body = serde_json::json!({ "error": message.into() });
    ApiResponse::new(status, body.to_string())
}

fn fixture_time(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}

fn seed_videos() -> Vec<Video> {
    let video = |id: u64,
                 title: &str,
                 description: &str,
                 file: &str,
                 status: VideoStatus,
                 scheduled: Option<&str>,
                 created: &str| Video {
        id: RecordId::from(id),
        title: title.to_string(),
        description: description.to_string(),
        status,
        scheduled_for: scheduled.map(fixture_time),
        media_ref: format!("{SAMPLE_BUCKET}/{file}"),
        created_at: fixture_time(created),
    };

    vec![
        video(
            1,
            "Comment faire des pâtes carbonara",
            "Recette traditionnelle italienne avec les vrais ingrédients",
            "BigBuckBunny.mp4",
            VideoStatus::Pending,
            None,
            "2025-07-04T10:30:00Z",
        ),
        video(
            2,
            "Top 5 des destinations de vacances",
            "Découvrez les plus belles destinations pour vos prochaines vacances",
            "ElephantsDream.mp4",
            VideoStatus::Approved,
            None,
            "2025-07-03T14:15:00Z",
        ),
        video(
            3,
            "Tutoriel React hooks",
            "Apprendre les hooks React avec des exemples pratiques",
            "ForBiggerBlazes.mp4",
            VideoStatus::Scheduled,
            Some("2025-07-06T18:00:00Z"),
            "2025-07-02T09:20:00Z",
        ),
        video(
            4,
            "Exercices de yoga matinal",
            "Routine de 15 minutes pour bien commencer la journée",
            "ForBiggerEscapes.mp4",
            VideoStatus::Rejected,
            None,
            "2025-07-01T16:45:00Z",
        ),
        video(
            5,
            "Jardinage bio pour débutants",
            "Les bases du jardinage biologique à la maison",
            "ForBiggerFun.mp4",
            VideoStatus::Published,
            Some("2025-07-05T12:00:00Z"),
            "2025-06-30T11:30:00Z",
        ),
    ]
}

fn seed_ideas() -> Vec<Idea> {
    let idea = |id: u64, title: &str, description: &str, status: IdeaStatus, created: &str| Idea {
        id: RecordId::from(id),
        title: title.to_string(),
        description: description.to_string(),
        status,
        created_at: fixture_time(created),
    };

    vec![
        idea(
            1,
            "Recettes de saison",
            "Une série courte sur les légumes du mois",
            IdeaStatus::Pending,
            "2025-07-04T08:00:00Z",
        ),
        idea(
            2,
            "Marchés de Provence",
            "Visite commentée des marchés du week-end",
            IdeaStatus::Approved,
            "2025-07-02T15:10:00Z",
        ),
        idea(
            3,
            "Défi méditation 30 jours",
            "Une minute de plus chaque jour",
            IdeaStatus::Rejected,
            "2025-06-28T19:45:00Z",
        ),
    ]
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/// [`Transport`] backed by a [`MockBackend`], with injected latency.
#[derive(Debug)]
pub struct MockTransport {
    backend: Mutex<MockBackend>,
    latency: Duration,
    route_latency: HashMap<MockRoute, Duration>,
    failures: Mutex<HashMap<MockRoute, u16>>,
    requests: Mutex<Vec<ApiRequest>>,
    calls: AtomicUsize,
    offline: AtomicBool,
}

impl MockTransport {
    #[must_use]
    pub fn new(backend: MockBackend, latency: Duration) -> Self {
        Self {
            backend: Mutex::new(backend),
            latency,
            route_latency: HashMap::new(),
            failures: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            offline: AtomicBool::new(false),
        }
    }

    /// Seeded backend with a uniform latency.
    #[must_use]
    pub fn seeded(latency: Duration) -> Self {
        Self::new(MockBackend::seeded(), latency)
    }

    /// Override the latency of one route class.
    #[must_use]
    pub fn with_route_latency(mut self, route: MockRoute, latency: Duration) -> Self {
        self.route_latency.insert(route, latency);
        self
    }

    /// Answer every request of `route` with `status` until cleared.
    pub async fn fail_route(&self, route: MockRoute, status: u16) {
        self.failures.lock().await.insert(route, status);
    }

    pub async fn clear_failures(&self) {
        self.failures.lock().await.clear();
    }

    /// While offline every request fails at the transport level.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Requests received so far, including failed ones.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().await.clone()
    }

    /// Snapshot of the backend records.
    pub async fn backend(&self) -> MockBackend {
        self.backend.lock().await.clone()
    }

    /// Mutate the backend directly, bypassing the routes.
    pub async fn with_backend<F, O>(&self, f: F) -> O
    where
        F: FnOnce(&mut MockBackend) -> O,
    {
        f(&mut *self.backend.lock().await)
    }

    fn latency_for(&self, route: Option<MockRoute>) -> Duration {
        route
            .and_then(|r| self.route_latency.get(&r))
            .copied()
            .unwrap_or(self.latency)
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().await.push(request.clone());

        let route = Route::parse(&request);
        let class = route.as_ref().map(Route::class);
        let latency = self.latency_for(class);

        if self.offline.load(Ordering::SeqCst) {
            tokio::time::sleep(latency).await;
            return Err(TransportError::Unreachable(format!(
                "mock backend offline ({} {})",
                request.method.as_str(),
                request.path
            )));
        }

        let forced = match class {
            Some(class) => self.failures.lock().await.get(&class).copied(),
            None => None,
        };
        let response = match (route, forced) {
            (_, Some(status)) => error_response(status, "injected failure"),
            (None, None) => error_response(
                404,
                format!("no route for {} {}", request.method.as_str(), request.path),
            ),
            (Some(route), None) => {
                self.backend
                    .lock()
                    .await
                    .handle(&route, request.body.as_ref(), Utc::now())
            }
        };

        debug!(
            method = request.method.as_str(),
            path = %request.path,
            status = response.status,
            latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
            "mock response"
        );
        tokio::time::sleep(latency).await;
        Ok(response)
    }
}
