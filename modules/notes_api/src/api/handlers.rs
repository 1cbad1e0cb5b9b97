//! Request handlers: parse the JSON body into a typed request, invoke the
//! store client, produce a status/body pair.

use serde::de::DeserializeOwned;
use serde_json::json;

use super::dto::{
    DeleteNoteReq, DeleteTopicReq, GetAllForUserReq, GetAllNotesReq, InsertNoteReq,
    InsertTopicReq, TopicDto,
};
use super::error::{map_notes_error, ERR_INVALID_PAYLOAD};
use super::response::Response;
use crate::infra::storage::NotesStore;

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, Response> {
    serde_json::from_str(body).map_err(|_| Response::bad_request(ERR_INVALID_PAYLOAD))
}

/// Health probe.
pub fn ping() -> Response {
    Response::ok(json!({ "message": "healthy" }))
}

/// `POST /getAllForUser` — every topic the user owns.
pub async fn get_all_for_user(store: &NotesStore, body: &str) -> Response {
    let req: GetAllForUserReq = match parse_body(body) {
        Ok(req) => req,
        Err(resp) => return resp,
    };

    match store.get_all_for_user(&req.id).await {
        Ok(topics) => Response::json(topics.into_iter().map(TopicDto::from).collect::<Vec<_>>()),
        Err(err) => map_notes_error(&err),
    }
}

/// `POST /insertTopic` — create (or fully replace) a topic.
pub async fn insert_topic(store: &NotesStore, body: &str) -> Response {
    let req: InsertTopicReq = match parse_body(body) {
        Ok(req) => req,
        Err(resp) => return resp,
    };

    match store.insert_topic(&req.user_id, &req.title).await {
        Ok(()) => Response::ok_empty(),
        Err(err) => map_notes_error(&err),
    }
}

/// `DELETE /deleteTopic` — idempotent topic removal.
pub async fn delete_topic(store: &NotesStore, body: &str) -> Response {
    let req: DeleteTopicReq = match parse_body(body) {
        Ok(req) => req,
        Err(resp) => return resp,
    };

    match store.delete_topic(&req.user_id, &req.title).await {
        Ok(()) => Response::ok_empty(),
        Err(err) => map_notes_error(&err),
    }
}

/// `POST /insertNote` — append a note to an existing topic.
pub async fn insert_note(store: &NotesStore, body: &str) -> Response {
    let req: InsertNoteReq = match parse_body(body) {
        Ok(req) => req,
        Err(resp) => return resp,
    };

    match store
        .insert_note(&req.user_id, &req.title, req.note.into())
        .await
    {
        Ok(()) => Response::ok_empty(),
        Err(err) => map_notes_error(&err),
    }
}

/// `POST /getAllNotes` — one topic with its notes, or `null` when absent.
pub async fn get_all_notes(store: &NotesStore, body: &str) -> Response {
    let req: GetAllNotesReq = match parse_body(body) {
        Ok(req) => req,
        Err(resp) => return resp,
    };

    match store.get_user_topic_by_title(&req.user_id, &req.title).await {
        Ok(Some(topic)) => Response::json(TopicDto::from(topic)),
        Ok(None) => Response::ok_empty(),
        Err(err) => map_notes_error(&err),
    }
}

/// `POST /deleteNote` — remove every note with the given title.
pub async fn delete_note(store: &NotesStore, body: &str) -> Response {
    let req: DeleteNoteReq = match parse_body(body) {
        Ok(req) => req,
        Err(resp) => return resp,
    };

    match store
        .delete_note(&req.user_id, &req.title, &req.note_title)
        .await
    {
        Ok(()) => Response::ok_empty(),
        Err(err) => map_notes_error(&err),
    }
}
