use linedit_core::{
    AddRequest, Command, CommandError, EditSession, ErrorKind, UpdateRequest,
};
use std::path::Path;

fn seeded_session(dir: &Path, lines: &[&str]) -> EditSession {
    let path = dir.join("dataStore.txt");
    let content: String = lines.iter().map(|line| format!("{line}\n")).collect();
    std::fs::write(&path, content).unwrap();
    EditSession::open(&path).unwrap()
}

fn snapshot(session: &EditSession) -> Vec<String> {
    session.store().lines().to_vec()
}

#[test]
fn add_then_undo_restores_prior_lines() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = seeded_session(dir.path(), &["John Doe john@x.co"]);
    let before = snapshot(&session);

    let mut command = Command::parse_add("jane;roe;plain").unwrap();
    command.execute(&mut session).unwrap();
    assert_eq!(snapshot(&session), ["John Doe john@x.co", "Jane Roe Plain"]);
    assert_eq!(command.captured_line(), Some("Jane Roe Plain"));

    command.undo(&mut session).unwrap();
    assert_eq!(snapshot(&session), before);
}

#[test]
fn add_rejects_wrong_field_count_and_blank_names() {
    for input in ["john;doe", "john;doe;x@y.co;extra", "", "   "] {
        let err = Command::parse_add(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput, "input `{input}`");
    }

    let dir = tempfile::tempdir().unwrap();
    let mut session = seeded_session(dir.path(), &[]);
    for request in [
        AddRequest::new(" ", "doe", "x@y.co"),
        AddRequest::new("john", "", "x@y.co"),
        AddRequest::new("john", "doe", "not an email"),
        AddRequest::new("john", "doe", "a..b@c.com"),
        AddRequest::new("john", "doe", " "),
    ] {
        let err = Command::add(request.clone())
            .execute(&mut session)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput, "request {request:?}");
    }
    assert!(session.store().is_empty());
}

#[test]
fn delete_then_undo_restores_line_and_length() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = seeded_session(dir.path(), &["A B C", "D E F", "G H I"]);
    let before = snapshot(&session);

    let mut command = Command::delete(2).unwrap();
    command.execute(&mut session).unwrap();
    assert_eq!(snapshot(&session), ["A B C", "G H I"]);
    assert_eq!(command.captured_line(), Some("D E F"));

    command.undo(&mut session).unwrap();
    assert_eq!(snapshot(&session), before);
}

#[test]
fn delete_rejects_position_past_end_including_len_boundary() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = seeded_session(dir.path(), &["A B C", "D E F"]);

    // Position 3 is zero-based index 2 == len.
    let err = Command::delete(3)
        .unwrap()
        .execute(&mut session)
        .unwrap_err();
    assert!(matches!(
        err,
        CommandError::OutOfRange {
            position: 3,
            len: 2
        }
    ));
    assert_eq!(Command::delete(0).unwrap_err().kind(), ErrorKind::OutOfRange);
    assert_eq!(session.store().len(), 2);
}

#[test]
fn update_then_undo_restores_original_line() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = seeded_session(dir.path(), &["John Doe john@x.co", "Jane Roe Plain"]);
    let before = snapshot(&session);

    let mut command = Command::parse_update("2;JANET;smith;new@mail.org").unwrap();
    command.execute(&mut session).unwrap();
    assert_eq!(session.store().get(1), Some("Janet Smith new@mail.org"));

    command.undo(&mut session).unwrap();
    assert_eq!(snapshot(&session), before);
}

#[test]
fn update_overwrites_only_provided_fields() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = seeded_session(dir.path(), &["John Doe john@x.co"]);

    Command::update(UpdateRequest::new(1, "jonathan"))
        .unwrap()
        .execute(&mut session)
        .unwrap();
    assert_eq!(session.store().get(0), Some("Jonathan Doe john@x.co"));

    Command::update(UpdateRequest::new(1, "jon").with_last_name("SNOW"))
        .unwrap()
        .execute(&mut session)
        .unwrap();
    assert_eq!(session.store().get(0), Some("Jon Snow john@x.co"));

    Command::update(
        UpdateRequest::new(1, "jon")
            .with_last_name("snow")
            .with_contact("WINTERFELL"),
    )
    .unwrap()
    .execute(&mut session)
    .unwrap();
    assert_eq!(session.store().get(0), Some("Jon Snow Winterfell"));
}

#[test]
fn update_rejects_blank_present_names_and_bad_contact() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = seeded_session(dir.path(), &["John Doe john@x.co"]);

    for input in ["1; ", "1;Jon;  ", "1;Jon;Doe;bad contact!"] {
        let err = Command::parse_update(input)
            .unwrap()
            .execute(&mut session)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput, "input `{input}`");
    }
    for input in ["1", "x;Jon"] {
        assert_eq!(
            Command::parse_update(input).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
    }
    assert_eq!(session.store().get(0), Some("John Doe john@x.co"));
}

#[test]
fn update_rejects_position_past_end_including_len_boundary() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = seeded_session(dir.path(), &["John Doe john@x.co"]);

    let err = Command::parse_update("2;Jon")
        .unwrap()
        .execute(&mut session)
        .unwrap_err();
    assert!(matches!(
        err,
        CommandError::OutOfRange {
            position: 2,
            len: 1
        }
    ));
}

#[test]
fn list_on_empty_store_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = seeded_session(dir.path(), &[]);

    let err = Command::list().execute(&mut session).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "there are no lines to display");
}

#[test]
fn add_undo_on_emptied_store_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = seeded_session(dir.path(), &[]);

    let mut add = Command::parse_add("a;b;c").unwrap();
    add.execute(&mut session).unwrap();
    let mut delete = Command::delete(1).unwrap();
    delete.execute(&mut session).unwrap();

    let err = add.undo(&mut session).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
