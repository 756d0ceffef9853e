//! Wire-format and JsonSchema validation tests for the record types.

use chrono::{TimeZone, Utc};
use schemars::schema_for;
use vet_core::entities::*;
use vet_core::enums::*;
use vet_core::ids::RecordId;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    idea_roundtrip,
    Idea,
    Idea {
        id: RecordId::from("12"),
        title: "Top 5 des destinations".into(),
        description: "Les plus belles destinations".into(),
        status: IdeaStatus::Pending,
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    video_roundtrip,
    Video,
    Video {
        id: RecordId::from("3"),
        title: "Tutoriel React hooks".into(),
        description: "Apprendre les hooks React".into(),
        status: VideoStatus::Scheduled,
        scheduled_for: Some(Utc::now()),
        media_ref: "https://cdn.example/hooks.mp4".into(),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    new_idea_roundtrip,
    NewIdea,
    NewIdea {
        title: "Yoga matinal".into(),
        description: "Routine de 15 minutes".into(),
    }
);

roundtrip_and_validate!(
    schedule_request_roundtrip,
    ScheduleRequest,
    ScheduleRequest {
        scheduled_time: Utc::now(),
    }
);

#[test]
fn decodes_backend_video_payload() {
    let json = r#"{
        "id": 1,
        "title": "Comment faire des pâtes carbonara",
        "description": "Recette traditionnelle italienne",
        "file_path": "https://cdn.example/BigBuckBunny.mp4",
        "status": "pending",
        "scheduled_time": null,
        "created_at": "2025-07-04T10:30:00Z"
    }"#;
    let video: Video = serde_json::from_str(json).unwrap();
    assert_eq!(video.id, RecordId::from("1"));
    assert_eq!(video.status, VideoStatus::Pending);
    assert_eq!(video.scheduled_for, None);
    assert_eq!(video.media_ref, "https://cdn.example/BigBuckBunny.mp4");
    assert_eq!(
        video.created_at,
        Utc.with_ymd_and_hms(2025, 7, 4, 10, 30, 0).unwrap()
    );
}

#[test]
fn decodes_idea_without_description() {
    let json = r#"{"id": "abc", "title": "t", "status": "approved", "created_at": "2025-07-01T00:00:00Z"}"#;
    let idea: Idea = serde_json::from_str(json).unwrap();
    assert_eq!(idea.description, "");
    assert_eq!(idea.status, IdeaStatus::Approved);
}

#[test]
fn video_serializes_with_wire_names() {
    let video = Video {
        id: RecordId::from("9"),
        title: "t".into(),
        description: String::new(),
        status: VideoStatus::Approved,
        scheduled_for: None,
        media_ref: "m.mp4".into(),
        created_at: Utc::now(),
    };
    let value = serde_json::to_value(&video).unwrap();
    assert_eq!(value["file_path"], "m.mp4");
    assert!(value.get("scheduled_time").is_some());
    assert!(value.get("media_ref").is_none());
}
